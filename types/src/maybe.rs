use std::fmt;

/// Display adapter for an optional value: `None` renders as `<nil>`.
///
/// Lets textual comparisons treat absence the same way on either side:
/// `text(Maybe::<i32>(None), "<nil>")` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Maybe<T>(pub Option<T>);

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("<nil>"),
        }
    }
}
