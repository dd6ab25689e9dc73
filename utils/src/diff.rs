//! Line diff formatting for mismatched debug renders.

use std::fmt::Write as _;

use similar::{ChangeTag, TextDiff};

/// Format a line diff between the expected and actual renders.
///
/// Produces output with:
/// - 1 line of context around each change
/// - `...` between changes separated by >3 unchanged lines
/// - `-` for lines only in `expected`, `+` for lines only in `actual`
///
/// Returns an empty string when both renders are identical.
#[must_use]
pub fn format_line_diff(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let changes: Vec<_> = diff.iter_all_changes().collect();
    if changes.iter().all(|c| c.tag() == ChangeTag::Equal) {
        return String::new();
    }

    let max_line = expected.lines().count().max(actual.lines().count());
    let line_num_width = max_line.max(1).to_string().len();

    let gap_marker = format!("{:>line_num_width$}\n", "...");

    let mut out = String::new();
    let mut last_output_idx: Option<usize> = None;

    for (i, change) in changes.iter().enumerate() {
        let (line_no, marker) = match change.tag() {
            ChangeTag::Equal => {
                let near_prev_change = i > 0 && changes[i - 1].tag() != ChangeTag::Equal;
                let near_next_change = changes
                    .get(i + 1)
                    .is_some_and(|c| c.tag() != ChangeTag::Equal);
                if !(near_prev_change || near_next_change) {
                    continue;
                }
                (change.old_index(), ' ')
            }
            ChangeTag::Delete => (change.old_index(), '-'),
            ChangeTag::Insert => (change.new_index(), '+'),
        };

        if let Some(last_idx) = last_output_idx
            && i - last_idx - 1 > 3
        {
            out.push_str(&gap_marker);
        }

        let line_no = line_no.map_or(0, |idx| idx + 1);
        let _ = write!(out, "{line_no:>line_num_width$} {marker}");
        out.push_str(change.value().trim_end_matches('\n'));
        out.push('\n');
        last_output_idx = Some(i);
    }

    out
}
