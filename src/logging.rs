//! Debug log file setup
//!
//! The TUI owns the terminal, so log lines go to a file under the cache directory.
//! Only debug builds write it.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const LOG_DIR: &str = "calorie-search";
const LOG_FILE: &str = "debug.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Install the file logger in debug builds; a no-op in release builds
pub fn init() {
    if cfg!(debug_assertions)
        && let Some(path) = log_path()
        && let Err(e) = init_file_logger(&path)
    {
        eprintln!("Could not open log file {}: {}", path.display(), e);
    }
}

/// Route `log` output to `path`, filtered by `RUST_LOG` (default `debug`)
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(io::Error::other)
}
