//! The node emitter: a single-consumer output channel carrying polymorphic
//! graph nodes in bottom-up, topological order.

use std::sync::mpsc;

use crate::nodes::Node;

/// Something the scanner can hand finalized [`Node`]s to.
///
/// A `send` is a synchronous handoff: once it returns `Ok`, the sink owns
/// the node and the scanner will never mutate it again. An `Err` aborts the
/// walk; partially-emitted nodes are not retracted.
pub trait NodeSink: Send {
    fn send(&mut self, node: Node) -> std::io::Result<()>;
}

/// A [`NodeSink`] backed by a bounded [`mpsc::SyncSender`], giving the
/// producer/consumer handoff described in the concurrency model: the scanner
/// thread blocks until the consumer accepts each node.
pub struct ChannelSink {
    tx: mpsc::SyncSender<Node>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::SyncSender<Node>) -> Self {
        Self { tx }
    }

    /// Creates a bounded channel and the matching sink/receiver pair.
    /// `capacity` of `0` makes the handoff fully synchronous (a rendezvous
    /// channel).
    pub fn bounded(capacity: usize) -> (Self, mpsc::Receiver<Node>) {
        let (tx, rx) = mpsc::sync_channel(capacity);
        (Self::new(tx), rx)
    }
}

impl NodeSink for ChannelSink {
    fn send(&mut self, node: Node) -> std::io::Result<()> {
        self.tx
            .send(node)
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::BrokenPipe, "receiver dropped"))
    }
}

/// A [`NodeSink`] that simply collects every node into a `Vec`, used by
/// tests and by callers that want the whole graph materialized at once.
#[derive(Default)]
pub struct VecSink {
    nodes: Vec<Node>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl NodeSink for VecSink {
    fn send(&mut self, node: Node) -> std::io::Result<()> {
        self.nodes.push(node);
        Ok(())
    }
}
