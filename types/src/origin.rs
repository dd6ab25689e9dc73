use std::fmt;
use std::panic::Location;

/// A source location captured at a call site via `#[track_caller]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Origin {
    file: &'static str,
    line: u32,
    column: u32,
}

impl Origin {
    #[must_use]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// The location of whoever called the current `#[track_caller]` function.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    #[must_use]
    pub const fn file(self) -> &'static str {
        self.file
    }

    #[must_use]
    pub const fn line(self) -> u32 {
        self.line
    }

    #[must_use]
    pub const fn column(self) -> u32 {
        self.column
    }

    #[must_use]
    pub fn same_line(self, other: Origin) -> bool {
        self.file == other.file && self.line == other.line
    }
}

impl From<&'static Location<'static>> for Origin {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
