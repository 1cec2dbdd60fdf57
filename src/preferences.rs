use std::fmt;

use accept_parse::Preference;

/// A client's parsed `Accept` header preferences.
///
/// Patterns are kept verbatim, in header order; matching against
/// concrete content types (and the case normalization that goes with
/// it) happens in [`determine`](crate::determine), not here.
///
/// # Example
///
/// ```
/// let prefs = accept::Preferences::parse("text/html,application/json;q=0.5");
///
/// assert_eq!(prefs.quality("text/html"), Some(1.0));
/// assert_eq!(prefs.quality("application/json"), Some(0.5));
/// assert_eq!(prefs.quality("image/png"), None);
/// ```
#[derive(Clone, PartialEq)]
pub struct Preferences {
    pub(crate) entries: Vec<Preference>,
}

impl Preferences {
    /// Parse an `Accept` header value.
    ///
    /// Never fails. A segment whose `;q=` value does not match the
    /// quality grammar (`1`, `1.0`, or `0.` followed by digits) keeps
    /// the parameter text as part of its pattern, with an implicit
    /// quality of 1.0.
    ///
    /// # Example
    ///
    /// ```
    /// let prefs = accept::Preferences::parse("text/html, image/*;q=0.8");
    ///
    /// assert_eq!(prefs.quality("text/html"), Some(1.0));
    /// assert_eq!(prefs.quality("image/*"), Some(0.8));
    /// ```
    pub fn parse(header: &str) -> Preferences {
        Preferences {
            entries: accept_parse::parse(header),
        }
    }

    /// Look up the quality of a pattern, exactly as written in the
    /// header.
    ///
    /// # Example
    ///
    /// ```
    /// let prefs = accept::Preferences::parse("text/*;q=0.3");
    ///
    /// assert_eq!(prefs.quality("text/*"), Some(0.3));
    /// assert_eq!(prefs.quality("text/html"), None);
    /// ```
    pub fn quality(&self, pattern: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|p| p.pattern == pattern)
            .map(|p| p.quality)
    }

    /// Returns an iterator over the patterns and qualities, in header
    /// order.
    ///
    /// A pattern listed twice appears once, at its first position,
    /// with the quality of its last occurrence.
    ///
    /// # Example
    ///
    /// ```
    /// let prefs = accept::Preferences::parse("a/b;q=0.5,c/d,a/b;q=0.9");
    /// let entries: Vec<_> = prefs.iter().collect();
    ///
    /// assert_eq!(entries, [("a/b", 0.9), ("c/d", 1.0)]);
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|p| (p.pattern.as_str(), p.quality))
    }

    /// The number of distinct patterns.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the header held no patterns at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|p| (&p.pattern, p.quality)))
            .finish()
    }
}

/// Re-emits the preferences in `Accept` header form.
///
/// Qualities of 1.0 are left implicit, so the output is not
/// necessarily byte-identical to the parsed input.
impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for p in &self.entries {
            f.write_str(sep)?;
            f.write_str(&p.pattern)?;
            if p.quality != 1.0 {
                write!(f, ";q={}", p.quality)?;
            }
            sep = ",";
        }
        Ok(())
    }
}
