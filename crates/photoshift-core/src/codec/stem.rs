//! Generic integer parsing for filename stems.
//!
//! Accepts the same literal syntax as a base-prefixed integer literal: an
//! optional sign, then `0x`/`0o`/`0b` (any case) or a bare leading `0` for
//! octal, with `_` allowed between digits. Values must fit in an `i64`.

/// Outcome of parsing a stem. `Defaulted` keeps parse failures apart from a
/// stem that really was zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemValue {
    Parsed(i64),
    Defaulted,
}

impl StemValue {
    /// The numeric value; `Defaulted` reads as zero.
    pub fn get(self) -> i64 {
        match self {
            StemValue::Parsed(n) => n,
            StemValue::Defaulted => 0,
        }
    }

    pub fn is_defaulted(self) -> bool {
        matches!(self, StemValue::Defaulted)
    }
}

/// Parses a filename stem, never failing.
pub fn parse_stem(stem: &str) -> StemValue {
    parse_signed(stem).map_or(StemValue::Defaulted, StemValue::Parsed)
}

fn parse_signed(s: &str) -> Option<i64> {
    let (negative, body) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    };
    let magnitude = parse_unsigned(body)?;
    if !underscores_ok(s) {
        return None;
    }
    if negative {
        // i64::MIN has no positive counterpart.
        if magnitude == i64::MIN.unsigned_abs() {
            return Some(i64::MIN);
        }
        i64::try_from(magnitude).ok().map(|n| -n)
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn parse_unsigned(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    let bytes = s.as_bytes();
    let (radix, digits) = if bytes[0] == b'0' {
        match bytes.get(1).map(u8::to_ascii_lowercase) {
            Some(b'b') if s.len() >= 3 => (2, &s[2..]),
            Some(b'o') if s.len() >= 3 => (8, &s[2..]),
            Some(b'x') if s.len() >= 3 => (16, &s[2..]),
            _ => (8, &s[1..]),
        }
    } else {
        (10, s)
    };

    let mut n: u64 = 0;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let d = c.to_digit(radix)?;
        n = n.checked_mul(u64::from(radix))?.checked_add(u64::from(d))?;
    }
    Some(n)
}

/// `_` must sit between digits (a base prefix counts as a digit) and may not
/// end the literal.
fn underscores_ok(s: &str) -> bool {
    if !s.contains('_') {
        return true;
    }
    let s = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let bytes = s.as_bytes();

    #[derive(PartialEq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let mut saw = Saw::Start;
    let mut i = 0;
    let mut hex = false;
    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        i = 2;
        saw = Saw::Digit;
        hex = bytes[1].to_ascii_lowercase() == b'x';
    }
    for &b in &bytes[i..] {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            saw = Saw::Digit;
            continue;
        }
        if b == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
            continue;
        }
        if saw == Saw::Underscore {
            return false;
        }
        saw = Saw::Other;
    }
    saw != Saw::Underscore
}
