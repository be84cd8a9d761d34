use crate::errors::AppResult;
use crate::model::{Node, NodeId};
use crate::store::TreeStore;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("I/O error: {0}")]
    GenericIo(#[from] io::Error),
}

fn classify(path: &Path, err: io::Error) -> IoError {
    match err.kind() {
        io::ErrorKind::NotFound => IoError::FileNotFound(path.display().to_string()),
        io::ErrorKind::PermissionDenied => IoError::PermissionDenied(path.display().to_string()),
        _ => IoError::GenericIo(err),
    }
}

/// Saves the store as its snapshot form: an ordered list of `(id, node)`
/// pairs. Positions are never written; they are derived state.
pub fn save_store(store: &TreeStore, path: &Path) -> AppResult<()> {
    let file = File::create(path).map_err(|e| classify(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &store.snapshot())?;
    writer.flush().map_err(IoError::from)?;
    Ok(())
}

/// Loads a store from a snapshot file. Only structure is restored; positions
/// are recomputed by the caller's next layout pass.
pub fn load_store(path: &Path) -> AppResult<TreeStore> {
    let file = File::open(path).map_err(|e| classify(path, e))?;
    let reader = BufReader::new(file);
    let entries: Vec<(NodeId, Node)> = serde_json::from_reader(reader)?;
    Ok(TreeStore::from_snapshot(entries))
}

/// Writes a tab-indented outline of the tree, one node per line. Newlines
/// inside labels are flattened so the file stays one-line-per-node.
pub fn export_outline(store: &TreeStore, path: &Path) -> AppResult<()> {
    let file = File::create(path).map_err(|e| classify(path, e))?;
    let mut writer = BufWriter::new(file);
    if let Some(root) = store.root() {
        write_outline(store, &mut writer, root, 0).map_err(IoError::from)?;
    }
    writer.flush().map_err(IoError::from)?;
    Ok(())
}

fn write_outline<W: Write>(
    store: &TreeStore,
    writer: &mut W,
    id: NodeId,
    depth: usize,
) -> io::Result<()> {
    if let Some(node) = store.get(id) {
        let text = node.text.replace('\n', " ");
        writeln!(writer, "{}{}", "\t".repeat(depth), text)?;
        for child in &node.children {
            write_outline(store, writer, *child, depth + 1)?;
        }
    }
    Ok(())
}
