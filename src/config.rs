//! Configuration for input path, output base name and sample bound.

use std::path::PathBuf;

/// Default upper bound on the number of frames read from the input.
pub const DEFAULT_MAX_SAMPLES: usize = 1024;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Input WAV file.
    pub input: PathBuf,
    /// Base name for `<base>.h`, `<base>.c`, the header guard and the C symbols.
    pub base: String,
    /// Maximum number of frames to read.
    pub max_samples: usize,
}

impl Config {
    pub fn header_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.h", self.base))
    }

    pub fn source_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.c", self.base))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            base: String::new(),
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}
