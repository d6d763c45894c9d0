//! Clause tokenizer.
//!
//! Splits a trimmed condition clause into word tokens and self-delimiting
//! one-character punctuation tokens. Whitespace separates tokens and is
//! otherwise discarded; punctuation needs no surrounding whitespace, so
//! `n=1` lexes identically to `n = 1`.

use winnow::combinator::{alt, preceded};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Characters that always form their own one-character token.
const PUNCTUATION: [char; 5] = ['!', '%', ',', '.', '='];

/// Tokenizes a clause. Total over any input: every character is either
/// whitespace, punctuation, or part of a word.
pub(crate) fn tokenize(clause: &str) -> Vec<&str> {
    let mut input = clause;
    let mut tokens = Vec::new();
    while let Ok(token) = next_token(&mut input) {
        tokens.push(token);
    }
    tokens
}

fn next_token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded(take_while(0.., char::is_whitespace), token).parse_next(input)
}

fn token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((
        one_of(PUNCTUATION).take(),
        take_while(1.., |c: char| !c.is_whitespace() && !PUNCTUATION.contains(&c)),
    ))
    .parse_next(input)
}
