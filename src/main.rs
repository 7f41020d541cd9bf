//! Headless driver: replays layout events from stdin and prints the result.
//!
//! Each non-empty line is one JSON `LayoutEvent`; lines starting with `#`
//! are comments. The final layout snapshot is written to stdout as JSON.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use barplan::settings::EditorSettings;
use barplan::{LayoutEditor, LayoutEvent};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut editor = LayoutEditor::new(EditorSettings::load());

    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line_no = index + 1;
        let line = line.context("Failed to read event stream")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event: LayoutEvent = serde_json::from_str(line)
            .with_context(|| format!("Malformed event on line {}", line_no))?;
        editor
            .apply(&event)
            .with_context(|| format!("Rejected event on line {}", line_no))?;
    }

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &editor.snapshot())
        .context("Failed to write snapshot")?;
    writeln!(stdout)?;
    Ok(())
}
