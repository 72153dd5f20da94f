//! Whitespace tokenizer for raw report text

use crate::constants::END_OF_REPORT_MARKER;

/// One whitespace-delimited token with its position in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub text: &'a str,
    pub index: usize,
}

/// Split a report into tokens
///
/// With `stop_at_end_marker`, a token ending in `=` is the last one: the marker
/// is stripped and anything after it is ignored. A bare `=` yields no token.
pub fn tokenize(report: &str, stop_at_end_marker: bool) -> Vec<RawToken<'_>> {
    let mut tokens = Vec::new();
    for text in report.split_whitespace() {
        if stop_at_end_marker {
            if let Some(stripped) = text.strip_suffix(END_OF_REPORT_MARKER) {
                let stripped = stripped.trim_end_matches(END_OF_REPORT_MARKER);
                if !stripped.is_empty() {
                    tokens.push(RawToken {
                        text: stripped,
                        index: tokens.len(),
                    });
                }
                break;
            }
        }
        tokens.push(RawToken {
            text,
            index: tokens.len(),
        });
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[RawToken<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_splits_on_any_whitespace() {
        let tokens = tokenize("  KDDC\t112052Z\n AUTO  ", true);
        assert_eq!(texts(&tokens), vec!["KDDC", "112052Z", "AUTO"]);
        assert_eq!(tokens[2].index, 2);
    }

    #[test]
    fn test_tokenize_stops_at_end_marker() {
        let tokens = tokenize("KDDC 112052Z NIL= garbage after", true);
        assert_eq!(texts(&tokens), vec!["KDDC", "112052Z", "NIL"]);

        let detached = tokenize("KDDC 112052Z NIL = trailing", true);
        assert_eq!(texts(&detached), vec!["KDDC", "112052Z", "NIL"]);
    }

    #[test]
    fn test_tokenize_keeps_marker_when_disabled() {
        let tokens = tokenize("KDDC NIL= more", false);
        assert_eq!(texts(&tokens), vec!["KDDC", "NIL=", "more"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("", true).is_empty());
        assert!(tokenize("   \n\t", true).is_empty());
        assert!(tokenize("=", true).is_empty());
    }
}
