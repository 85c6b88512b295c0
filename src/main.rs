//! kontakty - Main entry point
//!
//! Loads the configuration and the persisted address book, then hands the
//! terminal to the interactive command loop.

use anyhow::Result;
use kontakty::repl::Repl;
use kontakty::storage::JsonStore;
use kontakty::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so log lines never mix with the prompt)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.book_path.display(), "starting address book");

    let store = JsonStore::new(&config.book_path);
    let book = match store.load() {
        Ok(book) => book,
        Err(e) => {
            error!("failed to load address book: {}", e);
            return Err(e.into());
        }
    };
    info!(contacts = book.len(), "address book ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(book, store, stdin.lock(), stdout.lock());
    repl.run()?;

    info!("session finished");
    Ok(())
}
