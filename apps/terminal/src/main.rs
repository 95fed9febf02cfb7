//! # Corner POS Terminal
//!
//! Entry point for the interactive point-of-sale session.
//!
//! ## Startup Sequence
//! 1. Initialize logging (tracing-subscriber with env filter, to stderr)
//! 2. Seed the product catalog
//! 3. Run the menu loop over locked stdin/stdout until Exit or EOF

mod render;
mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use corner_core::Catalog;
use session::Session;

fn main() -> io::Result<()> {
    init_tracing();
    info!("starting Corner POS terminal session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Catalog::seed(), stdin.lock(), stdout.lock());
    session.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: INFO level
/// - `RUST_LOG=debug` surfaces the specific validation errors that the
///   menu collapses into generic messages
///
/// Logs go to stderr so they never interleave with receipts on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
