//! Parsed rule representation: the constraint tree, sample sets, and the
//! ordered rule list.
//!
//! Everything here is built once by the parser and never mutated. The
//! constraint tree is a closed sum type with a match-based evaluator, so an
//! unhandled variant is a compile error rather than a silent fall-through.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::operands::{FixedDecimal, Operand};
use crate::plural_rules::SampleType;

/// A boolean condition over the operands of a number.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Constraint {
    /// Matches every number; the `other` fallback and bare-operand relations.
    Always,
    Range(RangeConstraint),
    And(Box<Constraint>, Box<Constraint>),
    Or(Box<Constraint>, Box<Constraint>),
}

/// A single relation: operand, optional modulus, and a union of inclusive
/// value ranges.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RangeConstraint {
    pub operand: Operand,
    pub modulus: Option<u64>,
    /// False when the relation is negated.
    pub in_range: bool,
    /// `within` relations clear this: membership then accepts any real number
    /// in range, not just integers.
    pub integers_only: bool,
    /// Invariant: low <= high per pair, and every bound < modulus when set.
    pub ranges: Vec<(u64, u64)>,
}

impl Constraint {
    pub(crate) fn is_fulfilled(&self, number: &FixedDecimal) -> bool {
        match self {
            Constraint::Always => true,
            Constraint::Range(range) => range.is_fulfilled(number),
            Constraint::And(left, right) => left.is_fulfilled(number) && right.is_fulfilled(number),
            Constraint::Or(left, right) => left.is_fulfilled(number) || right.is_fulfilled(number),
        }
    }

    /// Whether only finitely many values of `kind` can satisfy this
    /// constraint. Deliberately conservative and asymmetric: an intersection
    /// is bounded if either side is, a union only if both sides are.
    pub(crate) fn is_limited(&self, kind: SampleType) -> bool {
        match self {
            Constraint::Always => false,
            Constraint::Range(range) => range.is_limited(kind),
            Constraint::And(left, right) => left.is_limited(kind) || right.is_limited(kind),
            Constraint::Or(left, right) => left.is_limited(kind) && right.is_limited(kind),
        }
    }
}

impl RangeConstraint {
    fn low(&self) -> u64 {
        self.ranges.iter().map(|range| range.0).min().unwrap_or(0)
    }

    fn high(&self) -> u64 {
        self.ranges.iter().map(|range| range.1).max().unwrap_or(0)
    }

    fn is_fulfilled(&self, number: &FixedDecimal) -> bool {
        let mut value = number.plural_operand(self.operand);
        // Ill-typed inputs (a fractional value against an integers-only
        // relation, or `j` against a number with visible fraction digits)
        // take the non-membership branch, consistent with 'not in'.
        if (self.integers_only && value.trunc() != value)
            || (self.operand == Operand::J && number.visible_digit_count() != 0)
        {
            return !self.in_range;
        }
        if let Some(modulus) = self.modulus {
            value %= modulus as f64;
        }
        let matched = self
            .ranges
            .iter()
            .any(|&(low, high)| value >= low as f64 && value <= high as f64);
        matched == self.in_range
    }

    fn is_limited(&self, kind: SampleType) -> bool {
        let value_is_zero = self.low() == self.high() && self.low() == 0;
        // A relation on the fraction-digit operands that can only hold for
        // numbers with visible fraction digits.
        let fractional_focus = matches!(
            self.operand,
            Operand::V | Operand::W | Operand::F | Operand::T
        ) && self.in_range != value_is_zero;
        match kind {
            SampleType::Integer => {
                // No integer sample has fraction digits, so a fractional
                // focus leaves a trivially finite (empty) match set.
                fractional_focus
                    || (matches!(self.operand, Operand::N | Operand::I | Operand::J)
                        && self.modulus.is_none()
                        && self.in_range)
            }
            SampleType::Decimal => {
                (!fractional_focus || matches!(self.operand, Operand::N | Operand::J))
                    && (self.integers_only || self.low() == self.high())
                    && self.modulus.is_none()
                    && self.in_range
            }
        }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Constraint::Always => Ok(()),
            Constraint::Range(range) => range.fmt(f),
            Constraint::And(left, right) => write!(f, "{left} and {right}"),
            Constraint::Or(left, right) => write!(f, "{left} or {right}"),
        }
    }
}

impl Display for RangeConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.operand)?;
        if let Some(modulus) = self.modulus {
            write!(f, " % {modulus}")?;
        }
        let single = self.low() == self.high();
        let relation = if single || self.integers_only {
            if self.in_range { " = " } else { " != " }
        } else if self.in_range {
            " within "
        } else {
            " not within "
        };
        f.write_str(relation)?;
        for (index, &(low, high)) in self.ranges.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            if low == high {
                write!(f, "{low}")?;
            } else {
                write!(f, "{low}..{high}")?;
            }
        }
        Ok(())
    }
}

/// Declared example values for one sample kind.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Samples {
    pub kind: SampleType,
    pub ranges: Vec<SampleRange>,
    /// False when the list ended with `…`: the declared values are examples,
    /// not an exhaustive enumeration.
    pub bounded: bool,
}

/// An inclusive `start~end` sample range; a lone value is a point range.
/// Both ends carry the same visible digit count.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SampleRange {
    pub start: FixedDecimal,
    pub end: FixedDecimal,
}

impl SampleRange {
    pub(crate) fn point(sample: FixedDecimal) -> SampleRange {
        SampleRange { start: sample.clone(), end: sample }
    }
}

impl Display for Samples {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "@{}", self.kind)?;
        for (index, range) in self.ranges.iter().enumerate() {
            f.write_str(if index == 0 { " " } else { ", " })?;
            range.fmt(f)?;
        }
        if !self.bounded {
            f.write_str(if self.ranges.is_empty() { " …" } else { ", …" })?;
        }
        Ok(())
    }
}

impl Display for SampleRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}~{}", self.start, self.end)
        }
    }
}

/// One parsed rule: a keyword, its condition, and optional declared samples.
#[derive(Debug, Clone)]
pub(crate) struct Rule {
    pub keyword: String,
    pub constraint: Constraint,
    pub integer_samples: Option<Samples>,
    pub decimal_samples: Option<Samples>,
}

impl Rule {
    /// The synthesized unconditional `other` rule.
    pub(crate) fn fallback() -> Rule {
        Rule {
            keyword: "other".to_string(),
            constraint: Constraint::Always,
            integer_samples: None,
            decimal_samples: None,
        }
    }

    pub(crate) fn applies_to(&self, number: &FixedDecimal) -> bool {
        self.constraint.is_fulfilled(number)
    }

    pub(crate) fn samples(&self, kind: SampleType) -> Option<&Samples> {
        match kind {
            SampleType::Integer => self.integer_samples.as_ref(),
            SampleType::Decimal => self.decimal_samples.as_ref(),
        }
    }

    /// Declared samples are authoritative about boundedness when present;
    /// otherwise the constraint is analyzed structurally.
    pub(crate) fn is_limited(&self, kind: SampleType) -> bool {
        if self.integer_samples.is_some() || self.decimal_samples.is_some() {
            return self.samples(kind).is_none_or(|samples| samples.bounded);
        }
        self.constraint.is_limited(kind)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:", self.keyword)?;
        if self.constraint != Constraint::Always {
            write!(f, " {}", self.constraint)?;
        }
        if let Some(samples) = &self.integer_samples {
            write!(f, " {samples}")?;
        }
        if let Some(samples) = &self.decimal_samples {
            write!(f, " {samples}")?;
        }
        Ok(())
    }
}

/// The ordered, keyword-unique rule collection. The parser guarantees that
/// `other` is present and last.
#[derive(Debug, Clone)]
pub(crate) struct RuleList {
    pub rules: Vec<Rule>,
    /// True when any rule declared explicit samples; sample queries then read
    /// declarations instead of probing.
    pub has_explicit_bounds: bool,
}

impl RuleList {
    /// Tests rules in declaration order and returns the first match. Order is
    /// load-bearing: overlapping rules are disambiguated by position, not
    /// specificity.
    pub(crate) fn select(&self, number: &FixedDecimal) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.applies_to(number))
            .map_or("other", |rule| rule.keyword.as_str())
    }

    pub(crate) fn rule(&self, keyword: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.keyword == keyword)
    }

    pub(crate) fn keywords(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.keyword.as_str())
    }
}

impl Display for RuleList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, rule) in self.rules.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            rule.fmt(f)?;
        }
        Ok(())
    }
}
