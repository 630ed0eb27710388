//! Tab replacement
//!
//! Every tab character anywhere in the text becomes a fixed run of spaces.

/// Replace each tab in every line with `width` spaces
///
/// Returns `true` if any line contained a tab.
pub fn replace_tabs(lines: &mut [String], width: usize) -> bool {
    let spaces = " ".repeat(width);
    let mut modified = false;
    for line in lines.iter_mut().filter(|line| line.contains('\t')) {
        *line = line.replace('\t', &spaces);
        modified = true;
    }
    modified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_leading_tab() {
        let mut lines = to_lines(&["\tfoo();"]);
        assert!(replace_tabs(&mut lines, 2));
        assert_eq!(lines, ["  foo();"]);
    }

    #[test]
    fn test_inner_and_nested_tabs() {
        let mut lines = to_lines(&["\t\tx =\t1;", "no tabs"]);
        assert!(replace_tabs(&mut lines, 4));
        assert_eq!(lines, ["        x =    1;", "no tabs"]);
    }

    #[test]
    fn test_no_tabs_is_untouched() {
        let mut lines = to_lines(&["  a", "b"]);
        assert!(!replace_tabs(&mut lines, 2));
        assert_eq!(lines, ["  a", "b"]);
    }
}
