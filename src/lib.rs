//! # Accept
//!
//! Content negotiation for the HTTP `Accept` header.
//!
//! An application states which content types it can produce, a client
//! states which it prefers, and [`determine`] picks the one to respond
//! with.
//!
//! ```
//! let supported = ["application/json", "text/html"];
//!
//! let chosen = accept::determine(&supported, Some("text/html;q=0.4,application/*;q=0.9"));
//! assert_eq!(chosen, Some("application/json"));
//! ```
//!
//! ## Inspecting preferences
//!
//! The parsed header is available on its own as [`Preferences`]:
//!
//! ```
//! let prefs = accept::Preferences::parse("text/html,image/*;q=0.8");
//!
//! for (pattern, quality) in prefs.iter() {
//!     println!("{} at q={}", pattern, quality);
//! }
//! ```

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

use std::cmp::Ordering;

use crate::matcher::Matcher;

pub use crate::preferences::Preferences;

mod matcher;
mod preferences;
#[cfg(feature = "serde1")]
mod serde;

/// The media range substituted when a request carries no `Accept`
/// header: RFC 2616 reads the absence as "accept anything".
pub const ANY: &str = "*/*";

/// Selects the content type to respond with.
///
/// `supported` lists the content types the application can produce, in
/// order of preference: when two of them match the header at the same
/// quality, the one listed first wins. `accept` is the raw `Accept`
/// header value, or `None` for a request that carried none, which is
/// treated as [`ANY`].
///
/// Matching is case insensitive, but the winner is returned exactly as
/// it appears in `supported`. `None` means nothing matched.
///
/// # Example
///
/// ```
/// let supported = ["application/json", "text/html"];
///
/// // This client prefers JSON...
/// assert_eq!(
///     accept::determine(&supported, Some("text/html;q=0.1,application/json")),
///     Some("application/json"),
/// );
///
/// // ...this one takes anything...
/// assert_eq!(accept::determine(&supported, None), Some("application/json"));
///
/// // ...and this one wants something we cannot produce.
/// assert_eq!(accept::determine(&supported, Some("text/csv")), None);
/// ```
pub fn determine<'a, T>(supported: &'a [T], accept: Option<&str>) -> Option<&'a str>
where
    T: AsRef<str>,
{
    if supported.is_empty() {
        return None;
    }

    let preferences = Preferences::parse(accept.unwrap_or(ANY));

    let matchers = preferences
        .iter()
        .filter_map(|(pattern, quality)| Matcher::new(pattern).map(|m| (m, quality)))
        .collect::<Vec<_>>();

    let mut matched = Vec::new();
    for content_type in supported {
        let content_type = content_type.as_ref();
        let lower = content_type.to_ascii_lowercase();

        // A later pattern matching the same content type replaces the
        // quality recorded by an earlier one.
        let mut quality = None;
        for (matcher, q) in &matchers {
            if matcher.matches(&lower) {
                quality = Some(*q);
            }
        }

        if let Some(q) = quality {
            matched.push((content_type, q));
        }
    }

    // Stable sort: equal qualities keep `supported` order.
    matched.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    matched.first().map(|&(content_type, _)| content_type)
}
