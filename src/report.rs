use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use crate::solution::IndependentSet;

/// Two lines: the size of the set, then its members in ascending order.
///
/// ```
/// use antenna_selection::{IndependentSet, report::format_report};
///
/// let text = format_report(&IndependentSet::new(vec![4, 1]));
/// assert_eq!(text, "Maximum independent set size found is 2\n[1, 4]\n");
/// ```
pub fn format_report(set: &IndependentSet) -> String {
    let mut out = String::new();
    writeln!(out, "Maximum independent set size found is {}", set.len()).unwrap();
    writeln!(out, "{:?}", set.members()).unwrap();
    out
}

pub fn print_report<W: Write>(out: &mut W, set: &IndependentSet) -> io::Result<()> {
    out.write_all(format_report(set).as_bytes())
}

pub fn format_saved(original: &Path, solution: &Path) -> String {
    format!(
        "Your plots are saved to {} and {}",
        original.display(),
        solution.display()
    )
}
