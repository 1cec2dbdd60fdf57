use regex::Regex;

/// A compiled form of one `Accept` header pattern.
///
/// Patterns are lower-cased at compile time; callers must hand
/// `matches` a lower-cased content type.
pub(crate) enum Matcher {
    Exact(String),
    Wildcard(Regex),
}

impl Matcher {
    /// Compiles a pattern.
    ///
    /// A pattern without a `*` compares as a plain string. A pattern
    /// with a `*` is rewritten into an anchored regex, every `*`
    /// standing in for one or more characters. Other regex
    /// metacharacters in the pattern are not escaped, so a literal
    /// `+` or `.` keeps its regex meaning there.
    ///
    /// Returns `None` when the rewritten regex does not compile; such
    /// a pattern can never match.
    pub(crate) fn new(pattern: &str) -> Option<Matcher> {
        let pattern = pattern.to_ascii_lowercase();
        if pattern.contains('*') {
            let regex = format!("^{}$", pattern.replace('*', ".+"));
            Regex::new(&regex).ok().map(Matcher::Wildcard)
        } else {
            Some(Matcher::Exact(pattern))
        }
    }

    /// Tests a lower-cased content type against this pattern.
    pub(crate) fn matches(&self, content_type: &str) -> bool {
        match self {
            Matcher::Exact(pattern) => pattern == content_type,
            Matcher::Wildcard(regex) => regex.is_match(content_type),
        }
    }
}
