//! Block comment boundary detection
//!
//! Decides, one line at a time, whether a line moves the scan into or out of a
//! `/* ... */` block comment. Only the last occurrence of each marker on the line
//! is considered, so markers inside string literals or lines holding more than
//! two markers can be misclassified.

/// Two-character block comment opener
pub const OPEN_MARKER: &str = "/*";
/// Two-character block comment closer
pub const CLOSE_MARKER: &str = "*/";

/// Whether the scan is currently inside a block comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentState {
    #[default]
    Outside,
    Inside,
}

impl CommentState {
    #[must_use]
    pub fn is_inside(self) -> bool {
        self == CommentState::Inside
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            CommentState::Outside => CommentState::Inside,
            CommentState::Inside => CommentState::Outside,
        }
    }

    /// State after `line` has been read
    #[must_use]
    pub fn advance(self, line: &str) -> Self {
        if toggles(line, self) {
            self.flipped()
        } else {
            self
        }
    }
}

/// Check whether `line` flips the block comment state
///
/// Inside a comment the line closes it when its last `*/` starts at least two
/// characters after its last `/*`. Outside a comment the line opens one when its
/// last `/*` starts no more than two characters after its last `*/`. The two
/// comparisons lean in opposite directions; both are kept as they are.
#[must_use]
pub fn toggles(line: &str, state: CommentState) -> bool {
    let last_open = line.rfind(OPEN_MARKER);
    let last_close = line.rfind(CLOSE_MARKER);

    match state {
        CommentState::Inside => match (last_close, last_open) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(close), Some(open)) => close >= open + 2,
        },
        CommentState::Outside => match (last_open, last_close) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(open), Some(close)) => open <= close + 2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [CommentState; 2] = [CommentState::Outside, CommentState::Inside];

    #[test]
    fn test_plain_text_never_toggles() {
        for line in ["", "int x = 1;", "  // line comment", "a / b * c", "ptr->x * y"] {
            for state in BOTH {
                assert!(!toggles(line, state), "{line:?} toggled from {state:?}");
            }
        }
    }

    #[test]
    fn test_outside_open_only_enters() {
        assert!(toggles("/* start", CommentState::Outside));
        assert!(toggles("  x = 1; /**", CommentState::Outside));
    }

    #[test]
    fn test_outside_close_only_stays() {
        assert!(!toggles("  stray */", CommentState::Outside));
    }

    #[test]
    fn test_inside_close_only_leaves() {
        assert!(toggles(" */", CommentState::Inside));
        assert!(toggles("*****/", CommentState::Inside));
    }

    #[test]
    fn test_inside_open_only_stays() {
        assert!(!toggles(" * nested /* text", CommentState::Inside));
        assert!(!toggles(" * body", CommentState::Inside));
    }

    // Same-line marker pairs: the outside branch compares `open <= close + 2`
    // while the inside branch compares `close >= open + 2`.

    #[test]
    fn test_outside_one_line_comment_toggles() {
        // "/* a */": open=0, close=5, 0 <= 7
        assert!(toggles("/* a */", CommentState::Outside));
    }

    #[test]
    fn test_outside_close_then_open_does_not_toggle() {
        // "x */ /* y": open=5, close=2, 5 <= 4 is false
        assert!(!toggles("x */ /* y", CommentState::Outside));
    }

    #[test]
    fn test_outside_adjacent_markers() {
        // "*//*": close=0, open=2, 2 <= 2
        assert!(toggles("*//*", CommentState::Outside));
        // "*/ /*": close=0, open=3, 3 <= 2 is false
        assert!(!toggles("*/ /*", CommentState::Outside));
    }

    #[test]
    fn test_inside_open_then_close_toggles() {
        // "/* a */": close=5, open=0, 5 >= 2
        assert!(toggles("/* a */", CommentState::Inside));
    }

    #[test]
    fn test_inside_close_then_open_does_not_toggle() {
        // "a */ /* b": close=2, open=5, 2 >= 7 is false
        assert!(!toggles("a */ /* b", CommentState::Inside));
    }

    #[test]
    fn test_inside_overlapping_markers() {
        // "/*/": open=0, close=1, 1 >= 2 is false
        assert!(!toggles("/*/", CommentState::Inside));
        // "/**/": open=0, close=2, 2 >= 2
        assert!(toggles("/**/", CommentState::Inside));
    }

    #[test]
    fn test_advance_threads_state() {
        let lines = ["int a;", "/*", " * text", " */", "int b;"];
        let states: Vec<CommentState> = lines
            .iter()
            .scan(CommentState::default(), |state, line| {
                *state = state.advance(line);
                Some(*state)
            })
            .collect();
        assert_eq!(
            states,
            vec![
                CommentState::Outside,
                CommentState::Inside,
                CommentState::Inside,
                CommentState::Outside,
                CommentState::Outside,
            ]
        );
    }

    #[test]
    fn test_flipped_is_involution() {
        for state in BOTH {
            assert_eq!(state.flipped().flipped(), state);
        }
    }
}
