//! Null-safe collection helpers

/// Helpers for optional vectors
pub trait OptionVecExt<T> {
    /// Borrowed elements, or an empty slice when absent
    fn or_empty_slice(&self) -> &[T];

    fn is_none_or_empty(&self) -> bool;

    fn len_or_zero(&self) -> usize;
}

impl<T> OptionVecExt<T> for Option<Vec<T>> {
    fn or_empty_slice(&self) -> &[T] {
        self.as_deref().unwrap_or(&[])
    }

    fn is_none_or_empty(&self) -> bool {
        self.or_empty_slice().is_empty()
    }

    fn len_or_zero(&self) -> usize {
        self.or_empty_slice().len()
    }
}

/// Join the non-blank entries with `sep` (e.g. address lines)
pub fn join_non_blank<I, S>(items: I, sep: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = items
        .into_iter()
        .filter_map(|item| {
            let trimmed = item.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect();

    parts.join(sep)
}
