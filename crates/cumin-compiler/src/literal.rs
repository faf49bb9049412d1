//! Cumin literal syntax and small text predicates used by the rules.

/// Quote `text` as a single-quoted Cumin string.
///
/// Backslashes and quotes are escaped; a newline becomes a line continuation
/// (backslash followed by the newline).
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\\n"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Quote multi-line text as one string literal per line, concatenated with
/// explicit `'\n'` joints so the source keeps the original line structure.
pub fn multiline_quote(text: &str) -> String {
    text.split('\n')
        .map(quote)
        .collect::<Vec<_>>()
        .join(" + '\\n' +\n")
}

/// Prepend `prefix` to every line of `text`.
///
/// A trailing newline does not start a new (prefixed) line.
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(text.len() + prefix.len());
    out.push_str(prefix);
    let body = text.strip_suffix('\n');
    let (body, trailer) = match body {
        Some(body) => (body, "\n"),
        None => (text, ""),
    };
    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    out.push_str(trailer);
    out
}

/// `^\s*-?\d+(\.\d+)?\s*$`: an optionally signed decimal literal.
pub fn is_number(text: &str) -> bool {
    let text = text.trim();
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

/// `^\w+$`: a bare identifier or number that is cheap to evaluate twice.
pub fn is_word(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// `^'?\w+'?$`: a word, optionally wrapped in quotes.
pub fn is_quoted_word(text: &str) -> bool {
    let inner = text.strip_prefix('\'').unwrap_or(text);
    let inner = inner.strip_suffix('\'').unwrap_or(inner);
    is_word(inner)
}

/// Whether `code` is a single-quoted string literal (surrounding spaces allowed).
pub fn is_string_literal(code: &str) -> bool {
    let code = code.trim();
    let Some(inner) = code
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    else {
        return false;
    };
    let bytes = inner.as_bytes();
    bytes
        .iter()
        .enumerate()
        .all(|(i, &b)| b != b'\'' || (i > 0 && bytes[i - 1] == b'\\'))
}

/// Parse numeric text the way the runtime's `Number()` would.
///
/// Blank text is zero. Returns `None` for anything that is not a plain
/// decimal literal.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    let plausible = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E'));
    if !plausible {
        return None;
    }
    text.parse().ok()
}

/// Render a number the way the runtime prints it: integers without a
/// fractional part, `-0` as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{value}")
}
