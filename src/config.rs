/// Default number of equal-width histogram buckets.
pub const DEFAULT_BINS: usize = 1000;

/// Options for [`Logger`][crate::Logger].
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub default_bins: usize,
    /// Appended to the event file name after the hostname.
    pub filename_suffix: String,
    /// Flush the sink after every logged record. When disabled, records
    /// become visible on [`Logger::flush`][crate::Logger::flush] or drop.
    pub flush_every_write: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            default_bins: DEFAULT_BINS,
            filename_suffix: String::new(),
            flush_every_write: true,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_bins(mut self, bins: usize) -> Self {
        self.default_bins = bins;
        self
    }

    pub fn filename_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.filename_suffix = suffix.into();
        self
    }

    pub fn flush_every_write(mut self, flush: bool) -> Self {
        self.flush_every_write = flush;
        self
    }
}
