//! In-memory dialogue graph: ordered node and link collections with an id index.

use std::collections::{HashMap, HashSet};

use super::{LinkRecord, NodeRecord};

/// Dialogue graph: nodes and links in insertion order.
///
/// Nodes are looked up through an id → slot index, so links may name nodes added
/// later or not at all. No uniqueness is enforced; with duplicate ids the first
/// inserted node wins every lookup.
///
/// **Interaction**: Produced by an editor or [`DocumentCodec::decode`](crate::codec::DocumentCodec::decode);
/// borrowed immutably by [`TraversalEngine`](crate::engine::TraversalEngine) for a whole walk.
#[derive(Debug, Clone, Default)]
pub struct GraphDocument {
    nodes: Vec<NodeRecord>,
    links: Vec<LinkRecord>,
    index: HashMap<String, usize>,
}

impl PartialEq for GraphDocument {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.links == other.links
    }
}

impl GraphDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node. Returns `&mut Self` for chaining.
    pub fn add_node(&mut self, node: NodeRecord) -> &mut Self {
        let slot = self.nodes.len();
        self.index.entry(node.id.clone()).or_insert(slot);
        self.nodes.push(node);
        self
    }

    /// Appends a link. Endpoints are not checked.
    pub fn add_link(&mut self, link: LinkRecord) -> &mut Self {
        self.links.push(link);
        self
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node with the given id.
    pub fn find_node_by_id(&self, id: &str) -> Option<&NodeRecord> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    /// Links leaving `id`, in document order. Cloning the iterator restarts it.
    pub fn outgoing_links<'s>(
        &'s self,
        id: &'s str,
    ) -> impl Iterator<Item = &'s LinkRecord> + Clone + 's {
        self.links.iter().filter(move |link| link.from_id == id)
    }

    /// First node of the start kind.
    pub fn start_node(&self) -> Option<&NodeRecord> {
        self.nodes.iter().find(|node| node.is_start())
    }

    /// Links whose source or target id matches no node.
    pub fn dangling_links(&self) -> impl Iterator<Item = &LinkRecord> + '_ {
        self.links.iter().filter(move |link| {
            !self.index.contains_key(&link.from_id) || !self.index.contains_key(&link.to_id)
        })
    }

    /// Removes the first node with `id` together with every link touching it.
    ///
    /// Links are kept if another node with the same id remains.
    pub fn remove_node(&mut self, id: &str) -> Option<NodeRecord> {
        let slot = *self.index.get(id)?;
        let removed = self.nodes.remove(slot);
        self.rebuild_index();
        if !self.index.contains_key(id) {
            self.links
                .retain(|link| link.from_id != id && link.to_id != id);
        }
        Some(removed)
    }

    /// New document holding the selected nodes and the links between them.
    ///
    /// Used to put a selection on the clipboard: links with only one selected
    /// endpoint are left out.
    pub fn subgraph<I, S>(&self, ids: I) -> GraphDocument
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected: HashSet<String> = ids.into_iter().map(|s| s.as_ref().to_string()).collect();
        let mut out = GraphDocument::new();
        for node in self.nodes.iter().filter(|n| selected.contains(&n.id)) {
            out.add_node(node.clone());
        }
        for link in self
            .links
            .iter()
            .filter(|l| selected.contains(&l.from_id) && selected.contains(&l.to_id))
        {
            out.add_link(link.clone());
        }
        out
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (slot, node) in self.nodes.iter().enumerate() {
            self.index.entry(node.id.clone()).or_insert(slot);
        }
    }
}
