//! A CLDR plural-rule engine: compiles a locale's declarative rule
//! description into an executable decision procedure mapping a number (and
//! its visible fraction digits) to a plural category keyword.
//!
//! ```
//! use cldr_plurals::PluralRules;
//!
//! let russian = PluralRules::parse(
//!     "one: n mod 10 is 1 and n mod 100 is not 11; \
//!      few: n mod 10 in 2..4 and n mod 100 not in 12..14",
//! )
//! .unwrap();
//! assert_eq!(russian.select(21.0), "one");
//! assert_eq!(russian.select(22.0), "few");
//! assert_eq!(russian.select(25.0), "other");
//! ```
//!
//! Rule descriptions come from an external locale-data provider; this crate
//! only parses and evaluates them. Once built, a [`PluralRules`] value is
//! immutable and safe to share across threads without coordination.

pub mod operands;
pub mod parser;

mod plural_rules;
mod rules;

pub use operands::{FixedDecimal, Operand};
pub use parser::ParseError;
pub use plural_rules::{
    KEYWORD_FEW, KEYWORD_MANY, KEYWORD_ONE, KEYWORD_OTHER, KEYWORD_TWO, KEYWORD_ZERO,
    KeywordStatus, PluralRules, SampleType,
};
