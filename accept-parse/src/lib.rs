//! Internal parsing for the `accept` crate.

/// One entry of an `Accept` header: a media type pattern and the
/// quality the client assigned to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Preference {
    pub pattern: String,
    pub quality: f64,
}

/// Parses an `Accept` header into an ordered pattern/quality list.
///
/// Entries keep the order they appear in the header. A pattern listed
/// more than once keeps its first position and takes the quality of
/// its last occurrence.
///
/// Parsing is total. A segment whose `;q=` value fails the quality
/// grammar keeps the parameter text as part of its pattern, with an
/// implicit quality of 1.0.
pub fn parse(header: &str) -> Vec<Preference> {
    let mut preferences: Vec<Preference> = Vec::new();

    for segment in header.split(',') {
        let segment = segment.trim();

        let (pattern, quality) = match split_q_param(segment) {
            Some(split) => split,
            None => (segment, 1.0),
        };

        match preferences.iter_mut().find(|p| p.pattern == pattern) {
            Some(existing) => existing.quality = quality,
            None => preferences.push(Preference {
                pattern: pattern.to_owned(),
                quality,
            }),
        }
    }

    preferences
}

/// Splits a trailing `;q=<value>` parameter off a header segment.
///
/// Only the last `;q=` can ever qualify, the marker is case
/// sensitive, and at least one character must precede it.
fn split_q_param(segment: &str) -> Option<(&str, f64)> {
    let semicolon = segment.rfind(";q=")?;
    if semicolon == 0 {
        return None;
    }
    let quality = q_value(&segment[semicolon + 3..])?;
    Some((&segment[..semicolon], quality))
}

/// The quality grammar: exactly `1`, `1.0`, or `0.` followed by one
/// or more digits.
fn q_value(s: &str) -> Option<f64> {
    match s {
        "1" | "1.0" => Some(1.0),
        _ => {
            let digits = s.strip_prefix("0.")?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quality() {
        let prefs = parse("text/html");
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs[0].pattern, "text/html");
        assert_eq!(prefs[0].quality, 1.0);
    }

    #[test]
    fn test_q_value_grammar() {
        assert_eq!(q_value("1"), Some(1.0));
        assert_eq!(q_value("1.0"), Some(1.0));
        assert_eq!(q_value("0.5"), Some(0.5));
        assert_eq!(q_value("0.55"), Some(0.55));

        assert_eq!(q_value(""), None);
        assert_eq!(q_value("0"), None);
        assert_eq!(q_value("0."), None);
        assert_eq!(q_value(".5"), None);
        assert_eq!(q_value("1.00"), None);
        assert_eq!(q_value("0.5a"), None);
        assert_eq!(q_value("2.0"), None);
    }

    #[test]
    fn test_header_order() {
        let prefs = parse("application/json;q=1.0,text/html;q=0.1");
        assert_eq!(prefs[0].pattern, "application/json");
        assert_eq!(prefs[0].quality, 1.0);
        assert_eq!(prefs[1].pattern, "text/html");
        assert_eq!(prefs[1].quality, 0.1);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let prefs = parse(" text/html ,  image/png;q=0.5");
        assert_eq!(prefs[0].pattern, "text/html");
        assert_eq!(prefs[1].pattern, "image/png");
        assert_eq!(prefs[1].quality, 0.5);
    }

    #[test]
    fn test_last_occurrence_wins_in_place() {
        let prefs = parse("text/html;q=0.5,image/png,text/html;q=0.9");
        assert_eq!(prefs.len(), 2);
        assert_eq!(prefs[0].pattern, "text/html");
        assert_eq!(prefs[0].quality, 0.9);
        assert_eq!(prefs[1].pattern, "image/png");
    }

    #[test]
    fn test_malformed_q_stays_in_pattern() {
        let prefs = parse("text/html;q=2.0");
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs[0].pattern, "text/html;q=2.0");
        assert_eq!(prefs[0].quality, 1.0);
    }

    #[test]
    fn test_q_marker_is_case_sensitive() {
        let prefs = parse("text/html;Q=0.5");
        assert_eq!(prefs[0].pattern, "text/html;Q=0.5");
        assert_eq!(prefs[0].quality, 1.0);
    }

    #[test]
    fn test_only_trailing_q_param_is_stripped() {
        let prefs = parse("text/html;q=0.5;q=0.3");
        assert_eq!(prefs[0].pattern, "text/html;q=0.5");
        assert_eq!(prefs[0].quality, 0.3);
    }

    #[test]
    fn test_nothing_before_q_param() {
        let prefs = parse(";q=0.5");
        assert_eq!(prefs[0].pattern, ";q=0.5");
        assert_eq!(prefs[0].quality, 1.0);
    }

    #[test]
    fn test_empty_header_is_one_empty_pattern() {
        let prefs = parse("");
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs[0].pattern, "");
        assert_eq!(prefs[0].quality, 1.0);
    }
}
