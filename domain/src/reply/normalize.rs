//! Best-effort textual repair of service replies.
//!
//! Each repair targets one malformation the service is known to produce.
//! The rules are deliberately narrow: a repair must never corrupt text that
//! is already valid JSON. Repair never fails — pathological input comes out
//! the other side as-is and the decoder reports it.

/// Normalize a raw service reply.
///
/// Applies, in order:
///
/// 1. Trim surrounding whitespace.
/// 2. Strip markdown code-fence markers (```` ``` ```` and ```` ```lang ````)
///    wherever they appear.
/// 3. If the text is wrapped in a single pair of quotes, strip the pair and
///    un-escape internal `\"` (the service sometimes serializes its JSON
///    answer as a JSON string rather than the object itself).
/// 4. Replace literal `\n` sequences outside any JSON string token with real
///    newlines.
/// 5. Insert a missing comma between two adjacent quoted tokens separated
///    only by whitespace.
///
/// Each step is a no-op on already-clean input, so `normalize` is
/// idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.trim().to_string();
    text = strip_code_fences(&text);
    text = unwrap_outer_quotes(text.trim());
    text = collapse_stray_escaped_newlines(&text);
    text = insert_missing_commas(&text);
    text.trim().to_string()
}

/// Remove every ```` ``` ```` marker, together with an attached language tag
/// (````json`, ```` ```yaml ````, ...).
fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        // Swallow a language tag glued to the opening fence
        let tag_len = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .count();
        rest = &rest[tag_len..];
    }
    out.push_str(rest);
    out
}

/// Strip one wrapping quote pair and un-escape interior `\"`.
///
/// Only fires when the text is wrapped in a *single* pair: the first quote
/// must not close before the last character, i.e. every interior quote is
/// escaped. That guard keeps inputs like `"a", "b"` untouched.
///
/// Applied to a fixpoint so that multiply-wrapped input still normalizes to
/// a stable result.
fn unwrap_outer_quotes(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        match strip_one_quote_pair(current.trim()) {
            Some(stripped) => current = stripped,
            None => return current,
        }
    }
}

fn strip_one_quote_pair(text: &str) -> Option<String> {
    if text.len() < 2 || !text.starts_with('"') || !text.ends_with('"') {
        return None;
    }
    let inner = &text[1..text.len() - 1];
    let mut escaped = false;
    for c in inner.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            // Interior unescaped quote: not a single wrapping pair
            return None;
        }
    }
    if escaped {
        // The closing quote was escaped, so there is no real pair
        return None;
    }
    Some(inner.replace("\\\"", "\""))
}

/// Replace literal `\n` with a real newline, but only outside JSON string
/// tokens — inside a string the escape is meaningful and must survive.
fn collapse_stray_escaped_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if c == '\\' && chars.peek() == Some(&'n') {
            chars.next();
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

/// Insert a comma between two quoted tokens separated only by whitespace.
///
/// In valid JSON a closing quote is always followed (after whitespace) by
/// one of `,` `:` `]` `}` or the end of input, never by another quote — so
/// this repair cannot corrupt already-valid JSON. It is best effort and will
/// not fix every pathological layout.
fn insert_missing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if j < chars.len() && chars[j] == '"' {
                    out.push(',');
                }
            }
        } else if c == '"' {
            in_string = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Fence Stripping ====================

    #[test]
    fn strips_tagged_and_bare_fences() {
        let raw = "```json\n[\"a\"]\n```";
        assert_eq!(normalize(raw), "[\"a\"]");
    }

    #[test]
    fn strips_fences_in_the_middle() {
        let raw = "Here:```json\n{\"x\": 1}```done";
        assert_eq!(normalize(raw), "Here:\n{\"x\": 1}done");
    }

    #[test]
    fn clean_json_untouched() {
        let clean = r#"{"bravery": 7, "alignment": "neutral good"}"#;
        assert_eq!(normalize(clean), clean);
    }

    // ==================== Outer Quote Unwrap ====================

    #[test]
    fn unwraps_quoted_object() {
        let raw = r#""{\"bravery\": 7}""#;
        assert_eq!(normalize(raw), r#"{"bravery": 7}"#);
    }

    #[test]
    fn leaves_adjacent_quoted_tokens_alone() {
        // Starts and ends with a quote, but is not a single wrapping pair
        let raw = r#"["a", "b"]"#;
        assert_eq!(normalize(raw), raw);
    }

    // ==================== Stray Escaped Newlines ====================

    #[test]
    fn collapses_escaped_newline_outside_strings() {
        let raw = "[\"first question here\"]\\n";
        assert_eq!(normalize(raw), "[\"first question here\"]");
    }

    #[test]
    fn preserves_escaped_newline_inside_strings() {
        let raw = r#"{"narration": "line one\nline two"}"#;
        assert_eq!(normalize(raw), raw);
    }

    // ==================== Missing Comma Repair ====================

    #[test]
    fn inserts_comma_between_adjacent_strings() {
        let raw = "[\"question one\" \"question two\"]";
        assert_eq!(normalize(raw), "[\"question one\", \"question two\"]");
    }

    #[test]
    fn does_not_touch_valid_json_commas() {
        let raw = r#"["a", "b", "c"]"#;
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn object_keys_are_safe_from_comma_repair() {
        let raw = r#"{"title": "The Gate", "summary": "Old walls"}"#;
        assert_eq!(normalize(raw), raw);
    }

    // ==================== Idempotence ====================

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "```json\n[\"aaaaaaaaaaaaaaaaaaaaaaaa\"]\n```",
            r#""{\"bravery\": 7, \"empathy\": 2}""#,
            "[\"one long question here\" \"two long questions here\"]",
            "plain text, not json at all",
            r#"{"title": "x", "choices": []}"#,
            "[\"a\"]\\n\\n",
            "",
            "\"\"",
        ];
        for raw in samples {
            let once = normalize(raw);
            let twice = normalize(&once);
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }
}
