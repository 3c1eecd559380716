use std::io::Write;

use env_logger::{Builder, Env, Target};
use log::SetLoggerError;

/// Sends log records to stdout as bare lines, at `info` unless `RUST_LOG`
/// says otherwise. The demo diagnostics then read like ordinary output.
pub fn init_logging() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init()
}
