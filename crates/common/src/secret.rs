//! Secret wrapper for sensitive values

use std::fmt;
use zeroize::Zeroize;

/// Sensitive value - redacted in Debug/Display/logs
pub struct Secret<T: Zeroize>(T);

impl<T: Zeroize> Secret<T> {
    /// Create a new secret value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the inner value (use sparingly)
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T: Zeroize> From<T> for Secret<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Zeroize> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl<T: Zeroize> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl<T: Zeroize> Drop for Secret<T> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl<T: Zeroize + Clone> Clone for Secret<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_redacts_debug_and_display() {
        let secret = Secret::new(String::from("client-secret-abc"));
        let debug = format!("{:?}", secret);
        assert_eq!(debug, "[REDACTED]");
        assert_eq!(secret.to_string(), "[REDACTED]");
        assert!(!debug.contains("client-secret-abc"));
    }

    #[test]
    fn secret_exposes_value() {
        let secret: Secret<String> = String::from("client-secret-abc").into();
        assert_eq!(secret.expose(), "client-secret-abc");
    }

    #[test]
    fn clone_keeps_value() {
        let secret = Secret::new(String::from("xyz"));
        let copy = secret.clone();
        drop(secret);
        assert_eq!(copy.expose(), "xyz");
    }
}
