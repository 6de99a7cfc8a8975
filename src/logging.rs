//! Log setup
//!
//! The terminal belongs to the UI, so events go to a JSON log file under the
//! config directory instead of stderr.

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "cat_breeds_tui=info";

pub fn log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join("cat-breeds-tui.log"))
}

/// Initialize file logging
///
/// `RUST_LOG` overrides the default `cat_breeds_tui=info` filter. When the
/// log file cannot be opened logging stays disabled.
pub fn init_logging() {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::sync::Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
