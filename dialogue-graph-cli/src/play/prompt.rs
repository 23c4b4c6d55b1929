//! Answers choice requests from a line-based input.

use dialogue_graph::ChoiceRequest;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::config::Error;
use crate::handlers::LineSink;

/// Prints each request's options and reads answers until the request channel closes.
///
/// An answer is a 1-based option number or an option label (ASCII case-insensitive).
/// Anything else re-prompts. End of input abandons the pending request, which fails the walk.
pub async fn answer_choices<R>(
    mut requests: mpsc::UnboundedReceiver<ChoiceRequest>,
    mut input: R,
    sink: LineSink,
) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
{
    while let Some(mut request) = requests.recv().await {
        if request.choices.is_empty() {
            tracing::warn!(node_id = %request.node_id, "Choice node has no options");
            continue;
        }
        loop {
            for (i, label) in request.choices.iter().enumerate() {
                sink(format!("  {}) {}", i + 1, label));
            }
            let mut line = String::new();
            if input.read_line(&mut line).await? == 0 {
                tracing::warn!(node_id = %request.node_id, "Input closed before a choice was made");
                break;
            }
            match answer(request, line.trim()) {
                Ok(()) => break,
                Err(back) => {
                    sink(format!("Choose 1-{} or type an option.", back.choices.len()));
                    request = back;
                }
            }
        }
    }
    Ok(())
}

fn answer(request: ChoiceRequest, text: &str) -> Result<(), ChoiceRequest> {
    if let Ok(number) = text.parse::<usize>() {
        return match number.checked_sub(1) {
            Some(index) => request.select_index(index),
            None => Err(request),
        };
    }
    let label = request
        .choices
        .iter()
        .find(|label| label.eq_ignore_ascii_case(text))
        .cloned();
    match label {
        Some(label) => {
            request.select(label);
            Ok(())
        }
        None => Err(request),
    }
}
