//! Session configuration

/// Default number of attempts per session
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Guess validity rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Any dictionary word is a valid guess
    #[default]
    Normal,
    /// Revealed hints must be reused in every later guess
    Hard,
}

/// Configuration for a single session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_attempts: usize,
    pub mode: Mode,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(max_attempts: usize, mode: Mode) -> Self {
        Self { max_attempts, mode }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, Mode::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_six_attempts_normal_mode() {
        let config = SessionConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.mode, Mode::Normal);
    }

    #[test]
    fn builders_override_fields() {
        let config = SessionConfig::default()
            .with_max_attempts(3)
            .with_mode(Mode::Hard);
        assert_eq!(config, SessionConfig::new(3, Mode::Hard));
    }
}
