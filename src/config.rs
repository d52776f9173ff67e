use crate::clock::Clock;
use crate::input::InputError;

/// Environment variable pinning the clock, in unix milliseconds.
pub const NOW_ENV: &str = "AQUA_ESTIMATES_NOW_MS";

/// Settings shared by every CLI subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalcConfig {
    pub clock: Clock,
    /// Print tagged diagnostics to stderr.
    pub verbose: bool,
}

impl CalcConfig {
    /// Build from the CLI flags, falling back to [`NOW_ENV`] when no
    /// `--now-ms` was given.
    pub fn from_env(now_ms: Option<i64>, verbose: bool) -> Result<Self, InputError> {
        let env_now = std::env::var(NOW_ENV).ok();
        Self::from_sources(now_ms, env_now.as_deref(), verbose)
    }

    /// An explicit `now_ms` wins over the environment value.
    pub fn from_sources(
        now_ms: Option<i64>,
        env_now: Option<&str>,
        verbose: bool,
    ) -> Result<Self, InputError> {
        let pinned = match (now_ms, env_now) {
            (Some(ms), _) => Some(ms),
            (None, Some(raw)) if !raw.trim().is_empty() => {
                let ms = raw.trim().parse::<i64>().map_err(|e| {
                    InputError::invalid(NOW_ENV, format!("expected unix milliseconds ({e})"))
                })?;
                Some(ms)
            }
            _ => None,
        };

        if let Some(ms) = pinned {
            if ms < 0 {
                return Err(InputError::invalid("now_ms", "must not be negative"));
            }
        }

        Ok(CalcConfig {
            clock: pinned.map_or(Clock::System, Clock::Fixed),
            verbose,
        })
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        let config = CalcConfig::from_sources(Some(5), Some("10"), false).unwrap();
        assert_eq!(config.clock, Clock::Fixed(5));
    }

    #[test]
    fn env_pins_clock() {
        let config = CalcConfig::from_sources(None, Some(" 1700000000000 "), true).unwrap();
        assert_eq!(config.now_ms(), 1_700_000_000_000);
        assert!(config.verbose);
    }

    #[test]
    fn blank_env_means_system_clock() {
        let config = CalcConfig::from_sources(None, Some(""), false).unwrap();
        assert_eq!(config.clock, Clock::System);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(CalcConfig::from_sources(None, Some("soon"), false).is_err());
        assert!(CalcConfig::from_sources(Some(-1), None, false).is_err());
    }
}
