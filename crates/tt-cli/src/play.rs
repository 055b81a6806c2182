//! Interactive console session.

use std::io::{self, Write};
use std::path::Path;
use std::process;

use tracing::{debug, info};
use tt_core::{ConsoleStream, TalkConfig, Walker};

/// Walk the document at `file` on stdin/stdout until it quits.
///
/// Ctrl-C ends the session the same way a resolved `::QUIT` does.
pub fn run(file: &Path, config: &TalkConfig) -> Result<(), String> {
    let mut walker =
        Walker::from_source(file, ConsoleStream::stdio(), config).map_err(|e| e.to_string())?;

    ctrlc::set_handler(quit_on_interrupt)
        .map_err(|e| format!("cannot install interrupt handler: {e}"))?;

    info!(
        file = %file.display(),
        nodes = walker.document().len(),
        start = %walker.current(),
        "starting walk"
    );
    walker.walk().map_err(|e| e.to_string())
}

/// The main thread may be blocked reading stdin, so the walk is finished
/// from the handler thread.
fn quit_on_interrupt() {
    debug!("interrupted, quitting");
    let mut stdout = io::stdout();
    writeln!(stdout).ok();
    stdout.flush().ok();
    process::exit(0);
}
