//! CLDR plural operands derived from a formatted number.
//!
//! Plural selection depends on more than a number's magnitude: "1 file" and
//! "1.0 files" pick different categories in several languages because the
//! visible fraction digits differ. [`FixedDecimal`] captures a number together
//! with its visible-fraction-digit information and exposes the six CLDR
//! operands (plus the legacy `j` operand) that rule conditions test.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use bon::bon;
use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded};
use winnow::prelude::*;

use crate::parser::ParseError;

/// Upper bound on tracked visible fraction digits; keeps `10^v` within `u64`.
const MAX_VISIBLE_DIGITS: u32 = 18;

/// A numeric operand selector in a rule condition.
///
/// `n` is the absolute value, `i` its integer part, `v`/`w` the visible
/// fraction digit counts with and without trailing zeros, `f`/`t` the visible
/// fraction digits themselves with and without trailing zeros. `j` behaves
/// like `i` but only matches numbers displayed with no fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    N,
    I,
    F,
    T,
    V,
    W,
    J,
}

impl Operand {
    /// Resolves a condition token to an operand, or `None` for any other word.
    pub fn from_token(token: &str) -> Option<Operand> {
        match token {
            "n" => Some(Operand::N),
            "i" => Some(Operand::I),
            "f" => Some(Operand::F),
            "t" => Some(Operand::T),
            "v" => Some(Operand::V),
            "w" => Some(Operand::W),
            "j" => Some(Operand::J),
            _ => None,
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let letter = match self {
            Operand::N => "n",
            Operand::I => "i",
            Operand::F => "f",
            Operand::T => "t",
            Operand::V => "v",
            Operand::W => "w",
            Operand::J => "j",
        };
        f.write_str(letter)
    }
}

/// A number together with its visible-fraction-digit information.
///
/// Instances are immutable; formatting pipelines construct one per formatted
/// value and hand it to selection. Sign is tracked separately from the
/// magnitude, and the integer part is truncated (saturating) so astronomically
/// large inputs cannot overflow.
///
/// # Example
///
/// ```
/// use cldr_plurals::{FixedDecimal, Operand};
///
/// // "1.30" displayed with two fraction digits
/// let number = FixedDecimal::from_parts(1.3, 2, 30);
/// assert_eq!(number.plural_operand(Operand::V), 2.0);
/// assert_eq!(number.plural_operand(Operand::F), 30.0);
/// assert_eq!(number.plural_operand(Operand::T), 3.0);
/// assert_eq!(number.plural_operand(Operand::W), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDecimal {
    source: f64,
    integer_value: u64,
    decimal_digits: u64,
    decimal_digits_stripped: u64,
    visible_digit_count: u32,
    visible_digit_count_stripped: u32,
    negative: bool,
}

#[bon]
impl FixedDecimal {
    /// Builder entry point.
    ///
    /// Omitted digit information falls back to the guessing behavior of
    /// [`FixedDecimal::from`]: callers that track the true visible digit
    /// count (formatting pipelines) should always supply it.
    ///
    /// ```
    /// use cldr_plurals::FixedDecimal;
    ///
    /// let number = FixedDecimal::builder().value(1.5).visible_digits(2).build();
    /// assert_eq!(number.to_string(), "1.50");
    /// ```
    #[builder]
    pub fn new(value: f64, visible_digits: Option<u32>, fraction_digits: Option<u64>) -> Self {
        match (visible_digits, fraction_digits) {
            (Some(visible), Some(fraction)) => Self::from_parts(value, visible, fraction),
            (Some(visible), None) => Self::with_visible_digits(value, visible),
            (None, _) => Self::from(value),
        }
    }
}

impl FixedDecimal {
    /// Constructs from exact operand information.
    ///
    /// `fraction_digits` is the visible fraction digits read as an integer,
    /// trailing zeros included: 1.30 is `(1.3, 2, 30)`.
    pub fn from_parts(value: f64, visible_digits: u32, fraction_digits: u64) -> Self {
        let negative = value < 0.0;
        let source = value.abs();
        let visible_digit_count = visible_digits.min(MAX_VISIBLE_DIGITS);
        // Saturating cast: caps huge magnitudes, maps NaN to zero.
        let integer_value = source.trunc() as u64;
        let (decimal_digits_stripped, visible_digit_count_stripped) =
            strip_trailing_zeros(fraction_digits, visible_digit_count);
        FixedDecimal {
            source,
            integer_value,
            decimal_digits: fraction_digits,
            decimal_digits_stripped,
            visible_digit_count,
            visible_digit_count_stripped,
            negative,
        }
    }

    /// Constructs with a known visible digit count, computing the fraction
    /// digits by rounding the value to that many places.
    pub fn with_visible_digits(value: f64, visible_digits: u32) -> Self {
        Self::from_parts(value, visible_digits, fraction_digits_of(value, visible_digits))
    }

    /// The signed numeric value.
    pub fn value(&self) -> f64 {
        if self.negative { -self.source } else { self.source }
    }

    /// The `v` operand: visible fraction digits, trailing zeros included.
    pub fn visible_digit_count(&self) -> u32 {
        self.visible_digit_count
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_nan(&self) -> bool {
        self.source.is_nan()
    }

    pub fn is_infinite(&self) -> bool {
        self.source.is_infinite()
    }

    /// The numeric projection a rule condition tests for `operand`.
    pub fn plural_operand(&self, operand: Operand) -> f64 {
        match operand {
            Operand::N => self.source,
            Operand::I | Operand::J => self.integer_value as f64,
            Operand::F => self.decimal_digits as f64,
            Operand::T => self.decimal_digits_stripped as f64,
            Operand::V => f64::from(self.visible_digit_count),
            Operand::W => f64::from(self.visible_digit_count_stripped),
        }
    }

    /// `10^v`, the scale of the shifted-value representation.
    pub fn base_factor(&self) -> u64 {
        10u64.pow(self.visible_digit_count)
    }

    /// The value scaled to an integer: `i * 10^v + f`.
    ///
    /// Sample enumeration iterates over shifted values so stepping through a
    /// decimal range never accumulates floating-point drift.
    pub fn shifted_value(&self) -> u64 {
        self.integer_value
            .saturating_mul(self.base_factor())
            .saturating_add(self.decimal_digits)
    }
}

impl Display for FixedDecimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:.*}", self.visible_digit_count as usize, self.value())
    }
}

/// Guesses from the value alone: integers get no visible digits, everything
/// else up to six significant fraction digits (first trailing-zero run
/// dropped). Callers that know the true count must not rely on this.
impl From<f64> for FixedDecimal {
    fn from(value: f64) -> Self {
        Self::with_visible_digits(value, guessed_visible_digits(value))
    }
}

impl From<u64> for FixedDecimal {
    fn from(value: u64) -> Self {
        Self::from_parts(value as f64, 0, 0)
    }
}

impl From<i64> for FixedDecimal {
    fn from(value: i64) -> Self {
        Self::from_parts(value as f64, 0, 0)
    }
}

impl FromStr for FixedDecimal {
    type Err = ParseError;

    /// Parses a literal such as `7`, `2.5`, or `-1.30`.
    ///
    /// The literal's own decimal point determines the visible digit count:
    /// `"2.0"` has one visible fraction digit while `"2"` has none.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut input = trimmed;
        let Ok((_, frac_digits)) = decimal_literal(&mut input) else {
            return Err(malformed_literal(trimmed));
        };
        if !input.is_empty() {
            return Err(malformed_literal(trimmed));
        }
        let value: f64 = trimmed.parse().unwrap_or(f64::NAN);
        let visible = frac_digits.map_or(0, |digits| digits.len() as u32);
        let fraction = frac_digits.map_or(0, digits_value);
        Ok(Self::from_parts(value, visible, fraction))
    }
}

/// `'-'? digit+ ('.' digit+)?` — returns the integer and fraction digit runs.
fn decimal_literal<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    let _ = opt('-').parse_next(input)?;
    let int_digits = digit1.parse_next(input)?;
    let frac_digits = opt(preceded('.', digit1)).parse_next(input)?;
    Ok((int_digits, frac_digits))
}

fn malformed_literal(text: &str) -> ParseError {
    ParseError::MalformedValue { token: text.to_string(), clause: text.to_string() }
}

/// Folds an ASCII digit run into a `u64`, saturating on overflow.
fn digits_value(digits: &str) -> u64 {
    digits.chars().fold(0u64, |acc, c| {
        acc.saturating_mul(10).saturating_add(u64::from(c.to_digit(10).unwrap_or(0)))
    })
}

/// Strips the trailing-zero run from `f`, decrementing `v` accordingly.
fn strip_trailing_zeros(fraction_digits: u64, visible_digits: u32) -> (u64, u32) {
    if fraction_digits == 0 {
        return (0, 0);
    }
    let mut stripped = fraction_digits;
    let mut count = visible_digits;
    while stripped % 10 == 0 {
        stripped = stripped.div_euclid(10);
        count = count.saturating_sub(1);
    }
    (stripped, count)
}

fn fraction_digits_of(value: f64, visible_digits: u32) -> u64 {
    if visible_digits == 0 || !value.is_finite() {
        return 0;
    }
    let base = 10u64.pow(visible_digits.min(MAX_VISIBLE_DIGITS));
    ((value.abs().fract() * base as f64).round() as u64) % base
}

fn guessed_visible_digits(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let fraction = value.abs().fract();
    if fraction == 0.0 {
        return 0;
    }
    // Render six fraction places and drop the trailing-zero run. Formatting
    // may round the fraction up to 1, which leaves no visible digits.
    let text = format!("{fraction:.6}");
    match text.split_once('.') {
        Some((_, digits)) => digits.trim_end_matches('0').len() as u32,
        None => 0,
    }
}
