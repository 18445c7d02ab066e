//! Locale-aware numeric literal scanning.

use crate::error::CalcError;
use crate::lexer::cursor::Cursor;
use crate::lexer::span::Span;
use crate::number::Decimal;

/// Separator characters used when reading numeric literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberFormat {
    /// Separates the integer part from the fraction.
    pub decimal_separator: char,
    /// Optional digit grouping character inside the integer part.
    pub group_separator: char,
}

impl NumberFormat {
    /// Culture-neutral format: `.` decimal separator, `,` group separator.
    pub const INVARIANT: Self = Self {
        decimal_separator: '.',
        group_separator: ',',
    };

    /// Creates a format from explicit separators.
    pub const fn new(decimal_separator: char, group_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator,
        }
    }

    fn is_literal_char(&self, ch: char) -> bool {
        ch.is_ascii_digit() || ch == self.decimal_separator || ch == self.group_separator
    }

    fn is_group(&self, ch: char) -> bool {
        ch == self.group_separator && ch != self.decimal_separator
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Scans the maximal literal run at the cursor and parses it.
///
/// The cursor must rest on an ASCII digit.
pub(crate) fn scan_number(
    cursor: &mut Cursor<'_>,
    format: &NumberFormat,
) -> Result<(Decimal, Span), CalcError> {
    let start = cursor.offset();
    cursor.eat_while(|ch| format.is_literal_char(ch));
    let span = cursor.span_from(start);
    let text = span.slice(cursor.input()).unwrap_or_default();

    let value = parse_literal(text, format)
        .ok_or_else(|| CalcError::invalid_number(Some(span), text))?;
    Ok((value, span))
}

/// Parses one literal run; group separators are only legal before the
/// decimal separator, apart from trailing ones which are dropped.
pub(crate) fn parse_literal(text: &str, format: &NumberFormat) -> Option<Decimal> {
    let text = text.trim_end_matches(|ch| format.is_group(ch));
    let mut whole = String::with_capacity(text.len());
    let mut fraction = String::new();
    let mut seen_separator = false;

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            if seen_separator {
                fraction.push(ch);
            } else {
                whole.push(ch);
            }
        } else if ch == format.decimal_separator {
            if seen_separator {
                return None;
            }
            seen_separator = true;
        } else if format.is_group(ch) {
            if seen_separator {
                return None;
            }
        } else {
            return None;
        }
    }

    if whole.is_empty() {
        return None;
    }
    let fraction_len = fraction.len();
    whole.push_str(&fraction);
    Decimal::from_digits(&whole, fraction_len)
}
