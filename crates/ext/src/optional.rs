//! Default-if-absent combinators

/// Unwrap `value`, falling back to `T::default()`
pub fn value_or_default<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}

/// Null-safe helpers for optional strings
pub trait OptionStrExt {
    /// Borrowed contents, or `""` when absent
    fn or_empty_str(&self) -> &str;

    /// True when absent, empty, or whitespace only
    fn is_none_or_blank(&self) -> bool;

    /// Contents only when they are not blank
    fn non_blank(&self) -> Option<&str>;
}

impl<S: AsRef<str>> OptionStrExt for Option<S> {
    fn or_empty_str(&self) -> &str {
        self.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    fn is_none_or_blank(&self) -> bool {
        self.or_empty_str().trim().is_empty()
    }

    fn non_blank(&self) -> Option<&str> {
        let s = self.or_empty_str();
        if s.trim().is_empty() {
            None
        } else {
            Some(s)
        }
    }
}
