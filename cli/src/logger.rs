use log::{Level, LevelFilter, Log, Metadata, Record};

// Writes every record to stderr behind a coloured level tag
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        use owo_colors::OwoColorize;

        if !self.enabled(record.metadata()) {
            return;
        }

        let tag = format!(" {:<5} ", record.level());
        let tag = match record.level() {
            Level::Error => tag.black().on_red().to_string(),
            Level::Warn => tag.black().on_yellow().to_string(),
            Level::Info => tag.black().on_blue().to_string(),
            Level::Debug => tag.black().on_purple().to_string(),
            Level::Trace => tag.black().on_white().to_string(),
        };
        eprintln!("{tag} {}", record.args());
    }

    fn flush(&self) {}
}

pub(crate) fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub(crate) fn init(verbosity: u8) -> anyhow::Result<()> {
    log::set_logger(&LOGGER).map_err(|err| anyhow::anyhow!("Failed to install logger: {err}"))?;
    log::set_max_level(level_filter(verbosity));
    Ok(())
}
