//! Delimiters that bracket an unsubstituted template variable.

use crate::error::{Error, Result};

/// Opening delimiter used by the deployment templates.
pub const DEFAULT_OPEN: &str = "{{";
/// Closing delimiter used by the deployment templates.
pub const DEFAULT_CLOSE: &str = "}}";

/// Pair of delimiters marking a template variable, e.g. `{{API_BASE_URL}}`.
///
/// Detection is substring based and checks each delimiter on its own. A value
/// holding only `{{` or only `}}` is still considered unresolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlaceholderMarker {
    open: String,
    close: String,
}

impl PlaceholderMarker {
    /// Creates a marker from custom delimiters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMarker`] when either delimiter is empty, since an
    /// empty delimiter would match every value.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self> {
        let open = open.into();
        let close = close.into();
        if open.is_empty() {
            return Err(Error::InvalidMarker {
                reason: "opening delimiter cannot be empty".into(),
            });
        }
        if close.is_empty() {
            return Err(Error::InvalidMarker {
                reason: "closing delimiter cannot be empty".into(),
            });
        }
        Ok(Self { open, close })
    }

    /// Returns the opening delimiter.
    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Returns the closing delimiter.
    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Returns `true` if `value` contains the opening or the closing delimiter.
    #[must_use]
    pub fn is_present_in(&self, value: &str) -> bool {
        value.contains(self.open.as_str()) || value.contains(self.close.as_str())
    }
}

impl Default for PlaceholderMarker {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN.to_owned(),
            close: DEFAULT_CLOSE.to_owned(),
        }
    }
}
