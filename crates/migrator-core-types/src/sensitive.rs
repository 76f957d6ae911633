//! Sensitive data marker for automatic redaction
//!
//! Connection strings routinely embed credentials. Wrapping them in
//! `Sensitive<T>` keeps them out of `Debug`/`Display` output, and therefore
//! out of every log line and error message.

use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use migrator_core_types::Sensitive;
///
/// let conn = Sensitive::new("postgres://app:hunter2@db/prod".to_string());
/// assert_eq!(format!("{:?}", conn), "***REDACTED***");
/// assert!(conn.expose().contains("hunter2"));
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    ///
    /// Only the transport layer should need this, when it actually opens
    /// the connection.
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl Sensitive<String> {
    /// True when the wrapped string is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for Sensitive<String> {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_string_debug_redaction() {
        let conn = Sensitive::new("file:prod.db?key=s3cret".to_string());
        let debug_str = format!("{:?}", conn);
        assert_eq!(debug_str, REDACTED);
        assert!(!debug_str.contains("s3cret"));
    }

    #[test]
    fn test_connection_string_display_redaction() {
        let conn = Sensitive::new("host=db password=pw".to_string());
        assert_eq!(format!("{}", conn), REDACTED);
    }

    #[test]
    fn test_expose_and_into_inner() {
        let conn = Sensitive::new(String::from("app.db"));
        assert_eq!(conn.expose(), "app.db");
        assert_eq!(conn.into_inner(), "app.db");
    }

    #[test]
    fn test_is_blank() {
        assert!(Sensitive::new(String::new()).is_blank());
        assert!(Sensitive::new("   ".to_string()).is_blank());
        assert!(!Sensitive::new("app.db".to_string()).is_blank());
    }

    #[test]
    fn test_redaction_inside_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Target {
            folder: String,
            connection: Sensitive<String>,
        }

        let target = Target {
            folder: "./migrations".to_string(),
            connection: "user:pw@db".to_string().into(),
        };

        let debug_str = format!("{:?}", target);
        assert!(debug_str.contains("./migrations"));
        assert!(debug_str.contains(REDACTED));
        assert!(!debug_str.contains("user:pw"));
    }
}
