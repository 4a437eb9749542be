// Licensed under the Apache-2.0 license

//! Inline-markup translation for register and bit descriptions.
//!
//! A two-construct subset of markdown, scanned by an explicit tokenizer:
//!
//! - Bold: a matching pair of `**` or a matching pair of `__` becomes
//!   `<b>...</b>`.
//! - Italic: a matching pair of `*` or a matching pair of `_` becomes
//!   `<em>...</em>`.
//!
//! Precedence is deterministic: at each scan position delimiters are tried
//! longest-first (`**`, `__`, then `*`, `_`), the closing delimiter is the
//! leftmost occurrence of the same style (`**` never closes `__`), and the
//! inner text of a matched span is translated recursively, so
//! `**bold *and italic* text**` becomes `<b>bold <em>and italic</em> text</b>`.
//! An opening delimiter with no closer in the same string stays literal.
//! Translation is total; it never fails and never drops text.

/// Delimiter styles in match-precedence order, with the tag each produces.
const DELIMITERS: [(&str, &str); 4] = [("**", "b"), ("__", "b"), ("*", "em"), ("_", "em")];

/// Translate inline markup in `text` to HTML tags.
pub fn translate(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    'scan: while let Some(c) = rest.chars().next() {
        for (delimiter, tag) in DELIMITERS {
            if let Some(after_open) = rest.strip_prefix(delimiter) {
                if let Some(close) = after_open.find(delimiter) {
                    output.push('<');
                    output.push_str(tag);
                    output.push('>');
                    output.push_str(&translate(&after_open[..close]));
                    output.push_str("</");
                    output.push_str(tag);
                    output.push('>');
                    rest = &after_open[close + delimiter.len()..];
                    continue 'scan;
                }
                // Opener without a closer of the same style stays literal.
                break;
            }
        }
        output.push(c);
        rest = &rest[c.len_utf8()..];
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        let expected = "This sentence <b>should have a large portion</b> in bold face";
        assert_eq!(
            translate("This sentence **should have a large portion** in bold face"),
            expected
        );
        assert_eq!(
            translate("This sentence __should have a large portion__ in bold face"),
            expected
        );
    }

    #[test]
    fn test_italic() {
        let expected = "This sentence <em>should have a large portion</em> in italics";
        assert_eq!(
            translate("This sentence *should have a large portion* in italics"),
            expected
        );
        assert_eq!(
            translate("This sentence _should have a large portion_ in italics"),
            expected
        );
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(translate("conf bit 0 desc"), "conf bit 0 desc");
        assert_eq!(translate(""), "");
    }

    #[test]
    fn test_unmatched_opener_stays_literal() {
        assert_eq!(translate("a **bold word"), "a **bold word");
        assert_eq!(translate("a _stray opener"), "a _stray opener");
    }

    #[test]
    fn test_styles_do_not_mix() {
        assert_eq!(translate("a **mixed__ pair"), "a **mixed__ pair");
    }

    #[test]
    fn test_nested_italic_inside_bold() {
        assert_eq!(
            translate("**bold *and italic* text**"),
            "<b>bold <em>and italic</em> text</b>"
        );
    }
}
