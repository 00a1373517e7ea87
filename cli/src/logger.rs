use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Native stand-in for the browser console logger: writes every record to stderr.
struct StderrLogger {
    level: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    log::set_logger(Box::leak(Box::new(StderrLogger { level })))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
