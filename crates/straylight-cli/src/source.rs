use std::path::Path;

use straylight_lexer::FALLBACK_TEXT;

/// Read a Lean source file.
///
/// Any failure is logged and replaced by the fallback text, which highlights
/// as a single comment line. There is no retry.
pub fn load_source(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => {
            tracing::debug!("Read {} bytes from {}", source.len(), path.display());
            source
        }
        Err(e) => {
            tracing::warn!("Failed to load {}: {e}", path.display());
            FALLBACK_TEXT.to_string()
        }
    }
}
