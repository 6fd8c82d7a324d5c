//! Lexing of `"<number> <unit signature>"` text.
//!
//! The grammar of a signature is deliberately small:
//!
//! ```text
//! signature := term (op? term)*
//! op        := '*' | '·' | '/'
//! term      := symbol power?
//! power     := '^' '-'? digits | '-'? digits | superscript+
//! ```
//!
//! Juxtaposed terms (`N m`) multiply. A `/` divides by the next term only, so `m/s*kg` is
//! `m·kg·s⁻¹` and `m/s/s` is `m·s⁻²`. Trailing digits are read as a power (`m2`, `s-1`) unless
//! the whole word is itself a known symbol.

use crate::error::{ParseQuantityError, ParseResult};

/// One `symbol^power` factor of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Term<'a> {
    pub symbol: &'a str,
    pub power: i32,
}

fn is_operator(c: char) -> bool {
    matches!(c, '*' | '·' | '/')
}

/// Splits `text` into its leading number and the remaining (trimmed) signature.
pub(crate) fn split_number(text: &str) -> ParseResult<(f64, &str)> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseQuantityError::Empty);
    }

    let end = number_prefix_len(text);
    let (number, rest) = if end == 0 {
        // `inf`, `NaN` and friends: the first whitespace-delimited word.
        let end = text.find(char::is_whitespace).unwrap_or(text.len());
        text.split_at(end)
    } else {
        text.split_at(end)
    };

    let cleaned: String = number.chars().filter(|&c| c != '_').collect();
    let value = cleaned
        .parse::<f64>()
        .map_err(|_| ParseQuantityError::InvalidNumber(number.to_string()))?;
    Ok((value, rest.trim()))
}

/// Length of the longest decimal-number prefix (`-1_000.5e-3`), 0 if there is none.
fn number_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
            i += 1;
        }
    }
    if !bytes[digits_start..i].iter().any(u8::is_ascii_digit) {
        return 0;
    }
    // An exponent only counts when digits follow it, so `2 eV`-style symbols stay intact.
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}

/// Parses a signature into terms; `is_symbol` decides whether a word ending in digits is a
/// symbol on its own.
pub(crate) fn parse_signature<'a>(
    signature: &'a str,
    is_symbol: impl Fn(&str) -> bool,
) -> ParseResult<Vec<Term<'a>>> {
    let mut terms = Vec::new();
    let mut pending: Option<char> = None;
    let mut rest = signature.trim();

    if rest.is_empty() {
        return Err(ParseQuantityError::malformed(signature, "no unit"));
    }

    while !rest.is_empty() {
        let first = rest.chars().next().unwrap_or(' ');
        if first.is_whitespace() {
            rest = rest.trim_start();
            continue;
        }
        if is_operator(first) {
            if terms.is_empty() || pending.is_some() {
                return Err(ParseQuantityError::malformed(
                    signature,
                    format!("unexpected '{first}'"),
                ));
            }
            pending = Some(first);
            rest = &rest[first.len_utf8()..];
            continue;
        }

        let end = rest
            .find(|c: char| c.is_whitespace() || is_operator(c))
            .unwrap_or(rest.len());
        let (word, tail) = rest.split_at(end);
        let mut term = parse_term(signature, word, &is_symbol)?;
        if pending.take() == Some('/') {
            term.power = term.power.checked_neg().ok_or_else(|| {
                ParseQuantityError::malformed(signature, "exponent overflow")
            })?;
        }
        terms.push(term);
        rest = tail;
    }

    if let Some(op) = pending {
        return Err(ParseQuantityError::malformed(
            signature,
            format!("dangling '{op}'"),
        ));
    }
    Ok(terms)
}

const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

fn parse_term<'a>(
    signature: &str,
    word: &'a str,
    is_symbol: &impl Fn(&str) -> bool,
) -> ParseResult<Term<'a>> {
    let (symbol, power) = if let Some((symbol, power)) = word.split_once('^') {
        let power = power
            .parse::<i32>()
            .map_err(|_| ParseQuantityError::malformed(signature, format!("bad exponent in {word:?}")))?;
        (symbol, power)
    } else if let Some(start) = superscript_start(word) {
        (&word[..start], parse_superscript(signature, &word[start..])?)
    } else if is_symbol(word) {
        (word, 1)
    } else {
        split_trailing_power(signature, word)?
    };

    if symbol.is_empty() {
        return Err(ParseQuantityError::malformed(
            signature,
            format!("missing symbol in {word:?}"),
        ));
    }
    if power == 0 {
        return Err(ParseQuantityError::malformed(
            signature,
            format!("zero exponent in {word:?}"),
        ));
    }
    Ok(Term { symbol, power })
}

fn superscript_start(word: &str) -> Option<usize> {
    let is_sup = |c: char| c == '⁻' || SUPERSCRIPTS.contains(&c);
    let start = word
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_sup(c))
        .last()
        .map(|(i, _)| i)?;
    Some(start)
}

fn parse_superscript(signature: &str, text: &str) -> ParseResult<i32> {
    let mut ascii = String::with_capacity(text.len());
    for c in text.chars() {
        match SUPERSCRIPTS.iter().position(|&s| s == c) {
            Some(d) => ascii.push(char::from(b'0' + d as u8)),
            None => ascii.push('-'),
        }
    }
    ascii
        .parse::<i32>()
        .map_err(|_| ParseQuantityError::malformed(signature, format!("bad exponent {text:?}")))
}

fn split_trailing_power<'a>(signature: &str, word: &'a str) -> ParseResult<(&'a str, i32)> {
    let digits_at = word
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);
    let Some(mut start) = digits_at else {
        return Ok((word, 1));
    };
    if word[..start].ends_with('-') {
        start -= 1;
    }
    let power = word[start..]
        .parse::<i32>()
        .map_err(|_| ParseQuantityError::malformed(signature, format!("bad exponent in {word:?}")))?;
    Ok((&word[..start], power))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(s: &str) -> bool {
        matches!(s, "m" | "s" | "kg" | "km" | "h" | "N" | "m2" | "degC")
    }

    fn terms(sig: &str) -> Vec<(&str, i32)> {
        parse_signature(sig, known)
            .unwrap()
            .into_iter()
            .map(|t| (t.symbol, t.power))
            .collect()
    }

    #[test]
    fn numbers() {
        assert_eq!(split_number("12.3 m").unwrap(), (12.3, "m"));
        assert_eq!(split_number("  -4e3km ").unwrap(), (-4000.0, "km"));
        assert_eq!(split_number("1_000 m").unwrap(), (1000.0, "m"));
        assert_eq!(split_number(".5").unwrap(), (0.5, ""));
        assert_eq!(split_number("2e m").unwrap(), (2.0, "e m"));
        assert!(split_number("inf s").unwrap().0.is_infinite());
        assert!(split_number("NaN").unwrap().0.is_nan());
    }

    #[test]
    fn number_errors() {
        assert_eq!(split_number("   "), Err(ParseQuantityError::Empty));
        assert_eq!(
            split_number("abc m"),
            Err(ParseQuantityError::InvalidNumber("abc".into()))
        );
        assert!(matches!(
            split_number("- m"),
            Err(ParseQuantityError::InvalidNumber(_))
        ));
    }

    #[test]
    fn simple_and_compound_signatures() {
        assert_eq!(terms("m"), vec![("m", 1)]);
        assert_eq!(terms("km/h"), vec![("km", 1), ("h", -1)]);
        assert_eq!(terms("m/s^2"), vec![("m", 1), ("s", -2)]);
        assert_eq!(terms("kg*m2"), vec![("kg", 1), ("m2", 1)]);
        assert_eq!(terms("kg*s2"), vec![("kg", 1), ("s", 2)]);
        assert_eq!(terms("N m"), vec![("N", 1), ("m", 1)]);
        assert_eq!(terms("kg·m²/s²"), vec![("kg", 1), ("m", 2), ("s", -2)]);
        assert_eq!(terms("s⁻¹"), vec![("s", -1)]);
        assert_eq!(terms("s-1"), vec![("s", -1)]);
    }

    #[test]
    fn division_binds_to_next_term_only() {
        assert_eq!(terms("m/s*kg"), vec![("m", 1), ("s", -1), ("kg", 1)]);
        assert_eq!(terms("m/s/s"), vec![("m", 1), ("s", -1), ("s", -1)]);
        assert_eq!(terms("m / s^-2"), vec![("m", 1), ("s", 2)]);
    }

    #[test]
    fn exponent_overflow_is_an_error() {
        let err = parse_signature("m/s^-2147483648", known).unwrap_err();
        assert_eq!(err, ParseQuantityError::malformed("m/s^-2147483648", "exponent overflow"));
        assert!(matches!(
            parse_signature("m^99999999999", known),
            Err(ParseQuantityError::MalformedSignature { .. })
        ));
        assert_eq!(terms("m/s^2147483647"), vec![("m", 1), ("s", -2147483647)]);
    }

    #[test]
    fn malformed_signatures() {
        for bad in ["", "/s", "m/", "m//s", "m*/s", "m^", "m^x", "^2", "m^0", "²"] {
            assert!(
                matches!(
                    parse_signature(bad, known),
                    Err(ParseQuantityError::MalformedSignature { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }
}
