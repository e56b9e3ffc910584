//! Account options offered as edit targets.

/// Parse a free-text list of accounts, one per line.
///
/// Lines are trimmed and blank lines dropped. Order is kept and duplicates
/// are not removed.
pub fn parse_account_options(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Position of `account` in `options`, for preselecting it in a picker.
pub fn option_index(options: &[String], account: &str) -> Option<usize> {
    options.iter().position(|option| option == account)
}
