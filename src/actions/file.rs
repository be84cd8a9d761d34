use crate::app::AppState;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

const DEFAULT_SAVE_PATH: &str = "untitled.sprig.json";

/// Saves the snapshot to the current file, or a default path when the app
/// was started without one.
pub fn save(app: &mut AppState) -> Result<()> {
    let path = app
        .filename
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));
    match io::save_store(&app.store, &path) {
        Ok(()) => {
            app.filename = Some(path.clone());
            app.is_dirty = false;
            app.set_message(format!("Saved to {}", path.display()));
        }
        Err(e) => app.set_message(format!("Save failed: {e}")),
    }
    Ok(())
}

/// Writes a tab-indented text outline next to the current file.
pub fn export_text(app: &mut AppState) -> Result<()> {
    let path = match &app.filename {
        Some(f) => f.with_extension("txt"),
        None => PathBuf::from("untitled.txt"),
    };
    match io::export_outline(&app.store, &path) {
        Ok(()) => app.set_message(format!("Exported to {}", path.display())),
        Err(e) => app.set_message(format!("Export failed: {e}")),
    }
    Ok(())
}
