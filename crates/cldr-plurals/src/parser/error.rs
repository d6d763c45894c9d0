//! Parse error taxonomy for rule descriptions.
//!
//! Every failure carries a stable category plus the offending token or
//! substring and the enclosing clause. These errors surface when locale data
//! is loaded, never per selection call: construction is all-or-nothing.

use thiserror::Error;

use crate::plural_rules::SampleType;

/// An error raised while parsing a rule description.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A rule segment has no `:` separating keyword from condition.
    #[error("missing ':' in rule '{rule}'")]
    MissingColon { rule: String },

    /// A keyword contains something other than lowercase letters.
    #[error("keyword '{keyword}' must contain only lowercase letters")]
    InvalidKeyword { keyword: String },

    /// The `other` rule carried a condition; it is the unconditional fallback.
    #[error("the keyword 'other' must have no condition, got '{constraint}'")]
    ConstrainedOther { constraint: String },

    /// The same keyword was declared twice in one description.
    #[error("duplicate keyword '{keyword}'")]
    DuplicateKeyword { keyword: String },

    /// A relation started with something other than the operand letters
    /// `n i f t v w j`.
    #[error("unknown operand '{token}' in '{clause}'")]
    UnknownOperand { token: String, clause: String },

    /// A modulus or range value contained a non-digit.
    #[error("malformed value '{token}' in '{clause}'")]
    MalformedValue { token: String, clause: String },

    /// A token appeared where the relation grammar does not allow it.
    #[error("unexpected token '{token}' in '{clause}'{}",
        suggestion.map_or_else(String::new, |s| format!(" (did you mean '{s}'?)")))]
    UnexpectedToken { token: String, clause: String, suggestion: Option<&'static str> },

    /// A relation ended before the grammar was satisfied.
    #[error("unexpected end of '{clause}'")]
    MissingToken { clause: String },

    /// A range was declared with its bounds reversed.
    #[error("bounds out of order in '{clause}': {low} > {high}")]
    BoundsOutOfOrder { low: u64, high: u64, clause: String },

    /// A range bound is unreachable under the declared modulus.
    #[error("range bound {bound} must be less than modulus {modulus} in '{clause}'")]
    BoundExceedsModulus { bound: u64, modulus: u64, clause: String },

    /// `is not` only accepts a single value, never a range or list.
    #[error("'is not' accepts a single value, not a list, in '{clause}'")]
    IsNotWithList { clause: String },

    /// A sample section did not begin with `integer` or `decimal`.
    #[error("sample section must start with 'integer' or 'decimal': '{section}'")]
    MalformedSampleHeader { section: String },

    /// A sample value's visible digits contradict its section kind.
    #[error("sample value '{value}' does not fit an @{kind} section")]
    SampleDigitMismatch { value: String, kind: SampleType },

    /// `…` may only appear as the final element of a sample list.
    #[error("misplaced '…' in sample list '{section}'")]
    MisplacedEllipsis { section: String },

    /// A sample range had more than one `~` or mismatched visible digits.
    #[error("ill-formed sample range '{range}'")]
    MalformedSampleRange { range: String },

    /// Integer samples must precede decimal samples.
    #[error("integer samples must precede decimal samples in '{rule}'")]
    SampleSectionOrder { rule: String },

    /// A rule may carry at most two `@` sample sections.
    #[error("too many sample sections in '{rule}'")]
    TooManySampleSections { rule: String },
}

/// Words the relation grammar understands, for near-miss suggestions.
const GRAMMAR_WORDS: &[&str] = &["and", "or", "mod", "not", "is", "in", "within"];

/// Suggests the closest grammar word to a mistyped token, if any is close
/// enough to be a plausible typo.
pub(crate) fn suggest_grammar_word(token: &str) -> Option<&'static str> {
    GRAMMAR_WORDS
        .iter()
        .map(|&word| (word, strsim::jaro_winkler(token, word)))
        .filter(|&(_, score)| score >= 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(word, _)| word)
}
