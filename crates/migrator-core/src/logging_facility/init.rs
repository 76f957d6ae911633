//! Subscriber installation

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Output profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Compact human-readable lines, for operators at a terminal
    Development,
    /// One JSON object per event with the enclosing span's fields, for
    /// pipelines that ship logs
    Production,
    /// Nothing is printed; tests install `test_capture` instead
    Test,
}

impl Profile {
    fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development | Profile::Production => "migrator=info",
            Profile::Test => "off",
        }
    }

    /// `RUST_LOG` when set and valid, else the profile's default
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call has an effect. Everything is written to stderr.
///
/// ```
/// use migrator_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => tracing_subscriber::fmt()
            .compact()
            .with_env_filter(profile.filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .init(),
        Profile::Production => tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_env_filter(profile.filter())
            .with_writer(std::io::stderr)
            .init(),
        Profile::Test => tracing_subscriber::registry().init(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_calls_are_ignored() {
        init(Profile::Test);
        init(Profile::Development);
        init(Profile::Production);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(Profile::Development.default_directive(), "migrator=info");
        assert_eq!(Profile::Production.default_directive(), "migrator=info");
        assert_eq!(Profile::Test.default_directive(), "off");
    }
}
