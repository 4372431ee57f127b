//! Folds a linear stream of leaf chunks into a self-balancing tree of
//! [`Part`]s, using each boundary's `bits` strength to decide fanout levels.

use crate::key::Key;
use crate::nodes::Part;

/// A pending leaf, not yet wrapped into a finalized [`Part`].
///
/// `hasher` covers exactly `bytes[start..end]` at the point [`PartAssembler::insert`]
/// is called; the assembler may continue writing sub-part keys into it before
/// finalizing, per the canonical construction in §4.3.
pub struct PendingLeaf {
    pub start: u64,
    pub end: u64,
    pub hasher: crate::key::Hasher,
}

/// Maintains the open list `L` of not-yet-subsumed parts for one file.
pub struct PartAssembler {
    open: Vec<Part>,
}

impl PartAssembler {
    pub fn new() -> Self {
        Self { open: Vec::new() }
    }

    /// Inserts a newly split-off leaf with the given boundary strength,
    /// folding in any weaker-boundary parts that immediately precede it in
    /// `L`. Returns the finalized `Part`, together with the (already
    /// previously emitted) sub-parts it subsumed, in the order they should
    /// be re-emitted to the caller — which is none, since subsumed parts
    /// were emitted at their own insertion time; callers only need to emit
    /// the returned part.
    pub fn insert(&mut self, leaf: PendingLeaf, bits: u32) -> Part {
        let mut from = self.open.len();
        while from > 0 && self.open[from - 1].bits() < bits {
            from -= 1;
        }

        let sub: Vec<Part> = self.open.split_off(from);
        let sub_keys: Vec<Key> = sub.iter().map(|p| p.key().clone()).collect();

        let mut hasher = leaf.hasher;
        for key in &sub_keys {
            hasher.update(key.as_slice());
        }
        let key = hasher.finalize();

        let part = Part::new(key, leaf.start, leaf.end, bits, sub_keys);
        self.open.push(part.clone());
        part
    }

    /// Finalizes the assembly at file EOF, returning the top-level part keys
    /// that make up the `File`'s part list, in scan order.
    pub fn finish(self) -> Vec<Key> {
        self.open.into_iter().map(|p| p.key().clone()).collect()
    }
}

impl Default for PartAssembler {
    fn default() -> Self {
        Self::new()
    }
}
