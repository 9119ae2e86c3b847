//! System clipboard access for copying the preview
//!
//! Uses `arboard` for cross-platform support. The clipboard is created
//! fresh each time so nothing is held between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails when no clipboard is reachable (headless Linux, no display server).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}
