//! Ties the walker to a background thread so callers can consume emitted
//! nodes as they're produced instead of waiting for the whole tree.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use tracing::{error, info};

use crate::errors::Error;
use crate::nodes::{Dir, Node};
use crate::sink::ChannelSink;
use crate::walker;

/// A single scan of one root directory, running on its own OS thread.
///
/// Per the concurrency model, the walk is a single blocking producer: there
/// is no async runtime and no cooperative yielding inside the hashing or
/// chunking loops. Nodes cross to the consumer through a bounded,
/// synchronous channel, so the producer is throttled by however fast the
/// consumer drains [`ScanSession::nodes`].
pub struct ScanSession {
    nodes: Receiver<Node>,
    handle: JoinHandle<Result<Dir, Error>>,
}

impl ScanSession {
    /// Spawns the scan of `root` and returns immediately; the walk runs on a
    /// dedicated thread and nodes stream through [`ScanSession::nodes`].
    pub fn spawn(root: impl Into<PathBuf>) -> Self {
        Self::spawn_with_capacity(root, 0)
    }

    /// As [`Self::spawn`], but with an explicit channel capacity. A capacity
    /// of `0` gives a fully synchronous, rendezvous handoff between producer
    /// and consumer.
    pub fn spawn_with_capacity(root: impl Into<PathBuf>, capacity: usize) -> Self {
        let root = root.into();
        let (mut channel_sink, rx) = ChannelSink::bounded(capacity);

        let handle = thread::Builder::new()
            .name("box-scan".into())
            .spawn(move || {
                info!(root = %root.display(), "scan starting");
                let result = walker::scan_dir(&root, &mut channel_sink);
                match &result {
                    Ok(dir) => info!(root = %root.display(), key = %dir.key(), "scan finished"),
                    Err(e) => error!(root = %root.display(), error = %e, "scan aborted"),
                }
                result
            })
            .expect("failed to spawn scan thread");

        Self { nodes: rx, handle }
    }

    /// The channel of emitted nodes, consumed in the order the walk
    /// produces them (bottom-up within each directory).
    pub fn nodes(&self) -> &Receiver<Node> {
        &self.nodes
    }

    /// Drains every remaining node and blocks until the scan thread exits,
    /// returning the root `Dir` or the error that aborted the walk.
    pub fn join(self) -> Result<Dir, Error> {
        for _ in self.nodes.iter() {}
        self.handle
            .join()
            .unwrap_or_else(|_| Err(Error::invariant(".", "scan thread panicked")))
    }
}
