//! Loose "does this look like a number" check applied to submitted ISBNs.
//!
//! The check mirrors numeric coercion of a string: surrounding whitespace is
//! ignored, a blank string counts as zero, and decimal, exponent, signed
//! `Infinity` and `0x`/`0o`/`0b` prefixed forms are all accepted. The ISBN
//! itself is never converted; callers keep the string exactly as submitted.

/// Whitespace and line terminators stripped by numeric coercion. Unlike
/// `char::is_whitespace` this excludes U+0085 (NEL).
fn is_coercion_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r' | ' '
            | '\u{a0}' | '\u{1680}' | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

/// Returns `true` when `raw` coerces to a number.
pub fn is_numeric_like(raw: &str) -> bool {
    let s = raw.trim_matches(is_coercion_whitespace);
    if s.is_empty() {
        return true;
    }
    if is_radix_literal(s) {
        return true;
    }
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned == "Infinity" || is_decimal_literal(unsigned)
}

fn is_radix_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return false;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return false,
    };
    s[2..].chars().all(|c| c.is_digit(radix))
}

/// `digits [. digits] [e [sign] digits]` or `. digits [e ...]`, with at least
/// one mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}
