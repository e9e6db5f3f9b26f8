use crate::git::executor::CommandOutput;

/// How a non-zero exit should be interpreted for one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// An expected domain answer ("no", "not found"); not an error
    Benign,
    /// A real operational failure to surface to the caller
    Operational,
}

/// Decides whether a failed command is an expected negative result
///
/// Each facade operation declares its own table; the same stderr substring
/// can be benign for one command and a real failure for another, so there
/// is deliberately no global table.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    benign_patterns: &'static [&'static str],
    /// Some commands (config --get) report "not found" with a non-zero
    /// exit and nothing on stderr at all.
    benign_on_silent: bool,
}

impl Classifier {
    /// A classifier that treats the given stderr substrings as benign
    pub const fn new(benign_patterns: &'static [&'static str]) -> Self {
        Self {
            benign_patterns,
            benign_on_silent: false,
        }
    }

    /// Additionally treat an empty stderr as benign
    pub const fn benign_on_silent(mut self) -> Self {
        self.benign_on_silent = true;
        self
    }

    /// Classify a failed command output
    ///
    /// Must only be called for outputs with a non-zero exit; a successful
    /// output is never classified.
    pub fn classify(&self, output: &CommandOutput) -> Disposition {
        debug_assert!(!output.success);

        let stderr = output.stderr.trim();
        if stderr.is_empty() && self.benign_on_silent {
            return Disposition::Benign;
        }

        if self.benign_patterns.iter().any(|p| stderr.contains(p)) {
            return Disposition::Benign;
        }

        Disposition::Operational
    }
}
