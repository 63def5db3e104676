//! Argument-list construction for parser tests.

/// Build an owned argument list from string literals.
///
/// # Examples
///
/// ```
/// use ortho_flags_test_helpers::argv::args;
///
/// assert_eq!(args(&["-b", "A"]), vec!["-b".to_owned(), "A".to_owned()]);
/// ```
#[must_use]
pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| (*token).to_owned()).collect()
}

/// Build an owned argument list from whitespace-separated text.
///
/// Convenient for table-driven tests where no token contains spaces.
///
/// # Examples
///
/// ```
/// use ortho_flags_test_helpers::argv::split;
///
/// assert_eq!(split("-sib value 100"), ["-sib", "value", "100"]);
/// ```
#[must_use]
pub fn split(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}
