//! Indentation width inference and rewriting
//!
//! Inference looks at leading space runs on lines outside block comments and
//! keeps the smallest one. Rewriting swaps one indentation unit for another
//! everywhere in the text.

use crate::parser::CommentState;

/// Outside-comment lines examined before inference may stop
pub const MAX_LINES_TO_PROBE: usize = 16;

/// Shortest leading run that counts as indentation
pub const MIN_INDENT_EXPECTED: usize = 2;

/// "Nothing found yet" marker for the running minimum
pub const NO_INDENT_FOUND: usize = 120;

/// Width that is too ambiguous to rewrite from
const AMBIGUOUS_WIDTH: usize = 3;

/// Length of the leading space run of `line`
///
/// Only lines outside a block comment that start with at least
/// [`MIN_INDENT_EXPECTED`] spaces are measured; anything else yields 0.
#[must_use]
pub fn leading_indent(line: &str, state: CommentState) -> usize {
    if state.is_inside() || !line.starts_with(&" ".repeat(MIN_INDENT_EXPECTED)) {
        return 0;
    }
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Estimate the indentation unit a file currently uses
///
/// Returns 0 when no indented line was seen outside block comments.
///
/// The probe window is soft: after [`MAX_LINES_TO_PROBE`] outside-comment lines
/// the scan stops only if a candidate width has already been recorded,
/// otherwise the window restarts and the scan carries on to end of file.
#[must_use]
pub fn infer_indent_width<S: AsRef<str>>(lines: &[S]) -> usize {
    let mut state = CommentState::Outside;
    let mut width = NO_INDENT_FOUND;
    // outside-comment lines seen in the current window
    let mut oci = 0;

    for line in lines.iter().map(|line| line.as_ref()) {
        if oci >= MAX_LINES_TO_PROBE {
            break;
        }
        state = state.advance(line);
        if !state.is_inside() {
            oci += 1;
        }

        let current = leading_indent(line, state);
        if current > 0 {
            width = width.min(current);
        }
        if oci == MAX_LINES_TO_PROBE && width == NO_INDENT_FOUND {
            oci = 0;
        }
    }

    if width == NO_INDENT_FOUND {
        0
    } else {
        width
    }
}

/// Check whether a rewrite from `source_width` to `target_width` should run
#[must_use]
pub fn should_rewrite(source_width: usize, target_width: usize) -> bool {
    source_width != 0 && source_width != AMBIGUOUS_WIDTH && source_width != target_width
}

/// Replace every `source_width` space run with a `target_width` run
///
/// The substitution applies anywhere in a line, not only to its leading
/// whitespace, so aligned spacing between tokens is rewritten as well.
///
/// Returns `true` if at least one replacement happened.
pub fn rewrite_indent(lines: &mut [String], source_width: usize, target_width: usize) -> bool {
    if !should_rewrite(source_width, target_width) {
        return false;
    }

    let source = " ".repeat(source_width);
    let target = " ".repeat(target_width);
    let mut modified = false;
    for line in lines.iter_mut().filter(|line| line.contains(&source)) {
        *line = line.replace(&source, &target);
        modified = true;
    }
    modified
}
