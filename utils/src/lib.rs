//! Shared rendering utilities for yoda.
//!
//! Helpers that turn values and locations into the text of a failure report
//! but that don't belong in the IO-free `yoda-types` crate:
//!
//! - **`diff`**: Line diff of two pretty debug renders
//! - **`path`**: Source paths relative to the working directory
//! - **`text`**: Truncation of oversized diagnostics

pub mod diff;
pub mod path;
pub mod text;

pub use diff::format_line_diff;
pub use path::{relative_to, relative_to_cwd};
pub use text::truncate_with_ellipsis;
