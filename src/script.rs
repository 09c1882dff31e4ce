//! Command scripts: one JSON object per line, replayed against an editor.
//!
//! ```text
//! {"op":"add_room","width":100,"height":80}
//! {"op":"down","x":60,"y":60}
//! {"op":"drag","x":90,"y":60}
//! {"op":"up","x":90,"y":60}
//! {"op":"viewport","width":1024,"height":768}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::io::BufRead;

use serde::{Deserialize, Serialize};

/// One scripted host input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddRoom { width: i32, height: i32 },
    Down { x: i32, y: i32 },
    Drag { x: i32, y: i32 },
    Up { x: i32, y: i32 },
    Viewport { width: i32, height: i32 },
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("script read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse { line: usize, source: serde_json::Error },
}

/// Parse a whole script.
///
/// # Errors
///
/// Returns `Io` if reading fails and `Parse` with the 1-based line number of
/// the first malformed command.
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command = serde_json::from_str(trimmed).map_err(|source| ScriptError::Parse { line: index + 1, source })?;
        commands.push(command);
    }
    Ok(commands)
}
