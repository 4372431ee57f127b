//! Depth-first directory walk: turns a filesystem subtree into a `Dir` node,
//! recursing into subdirectories and chunking regular files along the way.

use std::fs::{self, FileType};
use std::io::BufReader;
use std::path::Path;

use tracing::warn;

use crate::chunker;
use crate::errors::Error;
use crate::key::{self, Key};
use crate::nodes::{Dir, File, Node};
use crate::sink::NodeSink;

/// Name of the reserved state directory skipped at every level of the walk.
pub const STATE_DIR_NAME: &str = ".box";

/// Scans `root` depth-first, emitting every `File`/`Part`/`Dir` node it
/// produces to `sink` in bottom-up order, and returns the root `Dir`.
///
/// Entries are visited in byte-wise ascending name order so that repeated
/// scans of an unchanged tree are bit-for-bit identical.
pub fn scan_dir(root: &Path, sink: &mut dyn NodeSink) -> Result<Dir, Error> {
    let mut names: Vec<_> = fs::read_dir(root)
        .map_err(|e| Error::path_io(root, e))?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<Result<_, _>>()
        .map_err(|e| Error::path_io(root, e))?;
    names.sort();

    let mut items: Vec<Key> = Vec::with_capacity(names.len());

    for name in names {
        if name.to_str() == Some(STATE_DIR_NAME) {
            continue;
        }

        let path = root.join(&name);
        let file_type = fs::symlink_metadata(&path)
            .map_err(|e| Error::path_io(&path, e))?
            .file_type();

        if file_type.is_dir() {
            let child = scan_dir(&path, sink)?;
            items.push(child.key().clone());
        } else if file_type.is_file() {
            let key = scan_file(&path, sink)?;
            items.push(key);
        } else {
            warn_skip(&path, file_type);
        }
    }

    let dir_key = hash_child_keys(&items);
    let dir = Dir::new(dir_key, items);
    emit(sink, root, Node::Dir(dir.clone()))?;
    Ok(dir)
}

fn scan_file(path: &Path, sink: &mut dyn NodeSink) -> Result<Key, Error> {
    let fh = fs::File::open(path).map_err(|e| Error::path_io(path, e))?;
    let reader = BufReader::new(fh);
    let part_keys = chunker::chunk_reader(reader, path, sink)?;

    if part_keys.is_empty() {
        return Err(Error::invariant(
            path,
            "chunker returned no parts for a regular file",
        ));
    }

    let file_key = hash_child_keys(&part_keys);
    let file = File::new(file_key, part_keys);
    let key = file.key().clone();
    emit(sink, path, Node::File(file))?;
    Ok(key)
}

fn hash_child_keys(keys: &[Key]) -> Key {
    let mut hasher = key::Hasher::new();
    for k in keys {
        hasher.update(k.as_slice());
    }
    hasher.finalize()
}

fn emit(sink: &mut dyn NodeSink, path: &Path, node: Node) -> Result<(), Error> {
    let key = node.key().to_string();
    sink.send(node).map_err(|source| Error::Emit {
        path: path.to_path_buf(),
        key,
        source,
    })
}

fn warn_skip(path: &Path, file_type: FileType) {
    let kind = if file_type.is_symlink() {
        "symlink"
    } else {
        "irregular file"
    };
    warn!(path = %path.display(), kind, "skipping non-regular directory entry");
}
