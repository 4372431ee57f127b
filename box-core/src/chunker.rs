//! Content-defined chunking: splits a file's byte stream into
//! variable-length leaves at rolling-checksum boundaries and folds them into
//! a tree of [`Part`]s via the [`PartAssembler`].

use std::io::Read;
use std::path::Path;

use crate::assembler::{PartAssembler, PendingLeaf};
use crate::errors::Error;
use crate::key::{self, Key};
use crate::nodes::{Node, Part};
use crate::rollsum::{RollingChecksum, SPLIT_BITS};
use crate::sink::NodeSink;

/// Splits the contents of `reader` into parts, emitting each finalized
/// [`Part`] to `sink` as it becomes immutable, and returns the ordered list
/// of top-level part keys for the enclosing `File`.
///
/// `path` is used only for error context and tracing.
pub fn chunk_reader(
    mut reader: impl Read,
    path: &Path,
    sink: &mut dyn NodeSink,
) -> Result<Vec<Key>, Error> {
    let mut assembler = PartAssembler::new();
    let mut rolling = RollingChecksum::new();
    let mut hasher = key::Hasher::new();

    let mut pos: u64 = 0;
    let mut last: u64 = 0;
    let mut emitted_any = false;
    let mut byte = [0u8; 1];

    loop {
        let n = reader
            .read(&mut byte)
            .map_err(|e| Error::path_io(path, e))?;
        if n == 0 {
            // A trailing partial leaf is emitted whenever bytes remain since
            // the last split, and also on a truly empty file (pos == last ==
            // 0), so that every File has at least one part.
            if pos != last || !emitted_any {
                let leaf = PendingLeaf {
                    start: last,
                    end: pos,
                    hasher,
                };
                let part = assembler.insert(leaf, SPLIT_BITS);
                emit_part(sink, path, part)?;
            }
            break;
        }

        let b = byte[0];
        hasher.update(&[b]);
        rolling.roll(b);
        pos += 1;

        if rolling.on_split() {
            let bits = rolling.bits();
            let leaf = PendingLeaf {
                start: last,
                end: pos,
                hasher,
            };
            let part = assembler.insert(leaf, bits);
            emit_part(sink, path, part)?;
            emitted_any = true;

            hasher = key::Hasher::new();
            last = pos;
        }
    }

    let parts = assembler.finish();
    debug_assert!(!parts.is_empty(), "chunker must emit at least one part");
    Ok(parts)
}

fn emit_part(sink: &mut dyn NodeSink, path: &Path, part: Part) -> Result<(), Error> {
    let key = part.key().to_string();
    sink.send(Node::Part(part))
        .map_err(|source| Error::Emit {
            path: path.to_path_buf(),
            key,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::VecSink;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn lcg_bytes(seed: u64, len: usize) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 33) as u8
            })
            .collect()
    }

    #[test]
    fn empty_file_emits_single_empty_leaf() {
        let mut sink = VecSink::new();
        let parts = chunk_reader(Cursor::new(Vec::<u8>::new()), &PathBuf::from("f"), &mut sink)
            .unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], key::hash(b""));
        assert_eq!(sink.nodes().len(), 1);
    }

    #[test]
    fn small_file_is_single_leaf() {
        let mut sink = VecSink::new();
        let data = b"i'm small".to_vec();
        let parts =
            chunk_reader(Cursor::new(data.clone()), &PathBuf::from("f"), &mut sink).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], key::hash(&data));
    }

    #[test]
    fn rescans_are_deterministic() {
        let data = lcg_bytes(4, 100_000);
        let mut sink_a = VecSink::new();
        let parts_a =
            chunk_reader(Cursor::new(data.clone()), &PathBuf::from("f"), &mut sink_a).unwrap();

        let mut sink_b = VecSink::new();
        let parts_b = chunk_reader(Cursor::new(data), &PathBuf::from("f"), &mut sink_b).unwrap();

        assert_eq!(parts_a, parts_b);
        let keys_a: Vec<_> = sink_a.nodes().iter().map(|n| n.key().clone()).collect();
        let keys_b: Vec<_> = sink_b.nodes().iter().map(|n| n.key().clone()).collect();
        assert_eq!(keys_a, keys_b);
    }

    #[test]
    fn all_emitted_keys_are_twenty_bytes() {
        let data = lcg_bytes(4, 100_000);
        let mut sink = VecSink::new();
        chunk_reader(Cursor::new(data), &PathBuf::from("f"), &mut sink).unwrap();
        for node in sink.nodes() {
            assert_eq!(node.key().as_slice().len(), 20);
        }
    }
}
