use std::io;

use anyhow::Result;
use tracing::info;

use rookery_console::Session;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout belongs to the session.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(version = env!("CARGO_PKG_VERSION"), "rookery starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
