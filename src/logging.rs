use std::env;
use std::io::Write;

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};

/// Install the global logger. `-v` flags set the level; `RUST_LOG`, when
/// present, overrides it (e.g. `RUST_LOG=robocommit::git=debug`).
pub fn init_logger(verbosity: u8) {
    builder(verbosity, env::var("RUST_LOG").ok().as_deref()).init();
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error, // default: only errors
        1 => LevelFilter::Info,  // -v: info and up
        2 => LevelFilter::Debug, // -vv: debug and up
        _ => LevelFilter::Trace, // -vvv: trace and up
    }
}

fn builder(verbosity: u8, rust_log: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbosity));
    if let Some(filters) = rust_log.filter(|f| !f.trim().is_empty()) {
        builder.parse_filters(filters);
    }

    builder.format(|buf, record| {
        let level_label = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn  => "WARN ".yellow().bold(),
            Level::Info  => "INFO ".white().bold(),
            Level::Debug => "DEBUG".bright_black(),
            Level::Trace => "TRACE".bright_black(),
        };

        writeln!(buf, "{} {}", level_label, record.args())
    });

    builder
}
