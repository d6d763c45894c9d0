//! Parsers for the plural-rule description grammar.
//!
//! A description is a `;`-separated chain of `keyword: condition (@samples)*`
//! units. The submodules split the work the way the grammar does: a clause
//! tokenizer, a recursive-descent condition parser, a sample-section parser,
//! and the rule/rule-chain parser that ties them together.

mod constraint;
mod error;
mod lexer;
mod rule;
mod samples;

pub use error::ParseError;

pub(crate) use rule::parse_rule_chain;
