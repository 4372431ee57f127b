//! The abstract graph capability: a source of [`Node`]s that can be listed
//! and diffed against another such source by key, with no storage or
//! network transport baked in.

use std::collections::HashSet;

use crate::key::Key;
use crate::nodes::Node;

/// A graph that can enumerate its nodes and be compared against another.
///
/// `compare`/`list` are provided in terms of each other so implementers only
/// need to supply [`Graph::list`]; a streaming scan result, an in-memory
/// collection, or a future remote store can all satisfy this with nothing
/// more than "give me every node."
pub trait Graph {
    /// All nodes reachable from this graph, in whatever order the
    /// implementation naturally produces them.
    fn list(&self) -> Vec<Node>;

    /// Nodes present in `self` whose key is absent from `other` — the
    /// one-directional set difference a sync or push operation needs to
    /// decide what to transfer.
    fn compare(&self, other: &dyn Graph) -> Vec<Node> {
        let present: HashSet<Key> = other.list().into_iter().map(|n| n.key().clone()).collect();
        self.list()
            .into_iter()
            .filter(|n| !present.contains(n.key()))
            .collect()
    }
}

/// The simplest possible [`Graph`]: an owned, already-materialized set of
/// nodes, as produced by draining a [`crate::session::ScanSession`] into a
/// [`crate::sink::VecSink`].
pub struct NodeSet(Vec<Node>);

impl NodeSet {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

impl Graph for NodeSet {
    fn list(&self) -> Vec<Node> {
        self.0.clone()
    }
}
