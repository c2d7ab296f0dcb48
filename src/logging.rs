//! Log setup.
//!
//! The game draws on a raw alternate screen, so log lines normally go to a
//! file. If that file cannot be created the game still starts: logging
//! falls back to stderr, which is only visible before and after the
//! session. `RUST_LOG` overrides the default `warn` filter.

use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Install the global logger. Never fails; a second call in the same
/// process leaves the first logger in place.
pub fn init(path: &Path) -> LogTarget {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    let target = match File::create(path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            LogTarget::File(path.to_path_buf())
        }
        Err(e) => {
            eprintln!("warning: cannot create log file {}: {e}; logging to stderr", path.display());
            LogTarget::Stderr
        }
    };

    let _ = builder.try_init();
    target
}
