//! Configuration management for the address book CLI.
//!
//! This module handles loading configuration from environment variables.
//! Every variable has a default, so the program runs unconfigured; a `.env`
//! file next to the binary is honored when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default path of the persisted address book.
const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Default log filter used when neither `RUST_LOG` nor `LOG_LEVEL` is set.
const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the address book CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the persisted book
    pub book_path: PathBuf,

    /// Log level filter (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `KONTAKTY_BOOK_PATH`: path of the persisted book file
    ///   (default: `address_book.json`)
    /// - `LOG_LEVEL`: log filter applied when `RUST_LOG` is unset
    ///   (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path =
            env::var("KONTAKTY_BOOK_PATH").unwrap_or_else(|_| DEFAULT_BOOK_PATH.to_string());

        if book_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "KONTAKTY_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            book_path: PathBuf::from(book_path),
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
