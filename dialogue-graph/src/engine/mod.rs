//! Traversal engine: one walk over a dialogue document, advanced by `step()` or `run()`.

mod status;
mod traversal;

pub use status::WalkStatus;
pub use traversal::TraversalEngine;
