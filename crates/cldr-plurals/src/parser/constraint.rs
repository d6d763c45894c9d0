//! Recursive-descent parser for rule conditions.
//!
//! Grammar:
//!
//! ```text
//! condition      := and_condition ('or' and_condition)*
//! and_condition  := relation ('and' relation)*
//! relation       := operand ('mod' value)? negation? rel negation? range_list
//! operand        := 'n' | 'i' | 'f' | 'v' | 't' | 'w' | 'j'
//! negation       := 'not' | '!'
//! rel            := 'in' | 'is' | '=' | 'within'
//! range_list     := (value | value '..' value) (',' range_list)*
//! value          := digit+
//! ```
//!
//! There are no parentheses: `or` and `and` are literal word tokens split at
//! the top level, producing a left-associative tree over relation leaves.

use crate::operands::Operand;
use crate::parser::error::{ParseError, suggest_grammar_word};
use crate::parser::lexer::tokenize;
use crate::rules::{Constraint, RangeConstraint};

pub(crate) fn parse_constraint(condition: &str) -> Result<Constraint, ParseError> {
    let tokens = tokenize(condition);
    // An empty condition states no restriction, matching the serialized form
    // of an always-true rule.
    if tokens.is_empty() {
        return Ok(Constraint::Always);
    }
    let mut result: Option<Constraint> = None;
    for or_part in tokens.split(|&token| token == "or") {
        let mut and_result: Option<Constraint> = None;
        for and_part in or_part.split(|&token| token == "and") {
            let relation = parse_relation(and_part, condition)?;
            and_result = Some(match and_result {
                Some(left) => Constraint::And(Box::new(left), Box::new(relation)),
                None => relation,
            });
        }
        if let Some(and_constraint) = and_result {
            result = Some(match result {
                Some(left) => Constraint::Or(Box::new(left), Box::new(and_constraint)),
                None => and_constraint,
            });
        }
    }
    Ok(result.unwrap_or(Constraint::Always))
}

fn parse_relation(tokens: &[&str], clause: &str) -> Result<Constraint, ParseError> {
    let mut cursor = Cursor { tokens, position: 0, clause };

    let operand_token = cursor.next()?;
    let Some(operand) = Operand::from_token(operand_token) else {
        return Err(ParseError::UnknownOperand {
            token: operand_token.to_string(),
            clause: clause.to_string(),
        });
    };
    if cursor.is_done() {
        // A bare operand states no restriction at all.
        return Ok(Constraint::Always);
    }

    let mut token = cursor.next()?;
    let mut modulus = None;
    if token == "mod" || token == "%" {
        modulus = Some(parse_value(cursor.next()?, clause)?);
        token = cursor.next()?;
    }

    let mut in_range = true;
    if token == "not" {
        in_range = false;
        token = cursor.next()?;
    } else if token == "!" {
        // '!' is only legal as the first half of '!='.
        in_range = false;
        token = cursor.next()?;
        if token != "=" {
            return Err(unexpected(token, clause));
        }
    }

    let mut integers_only = true;
    let is_relation = match token {
        "is" => true,
        "in" | "=" => false,
        "within" => {
            integers_only = false;
            false
        }
        other => return Err(unexpected(other, clause)),
    };

    token = cursor.next()?;
    let mut negated_after = false;
    if token == "not" {
        in_range = !in_range;
        negated_after = true;
        token = cursor.next()?;
    }

    let mut ranges: Vec<(u64, u64)> = Vec::new();
    loop {
        let low = parse_value(token, clause)?;
        let mut high = low;
        let mut separator = cursor.next_opt();
        if separator == Some(".") {
            let dot = cursor.next()?;
            if dot != "." {
                return Err(unexpected(dot, clause));
            }
            high = parse_value(cursor.next()?, clause)?;
            separator = cursor.next_opt();
        }
        if low > high {
            return Err(ParseError::BoundsOutOfOrder { low, high, clause: clause.to_string() });
        }
        if let Some(modulus) = modulus
            && high >= modulus
        {
            return Err(ParseError::BoundExceedsModulus {
                bound: high,
                modulus,
                clause: clause.to_string(),
            });
        }
        ranges.push((low, high));
        match separator {
            None => break,
            Some(",") => token = cursor.next()?,
            Some(other) => return Err(unexpected(other, clause)),
        }
    }

    // Backward-compatibility carve-out: 'is not' never takes a list.
    if is_relation && negated_after && (ranges.len() > 1 || ranges[0].0 != ranges[0].1) {
        return Err(ParseError::IsNotWithList { clause: clause.to_string() });
    }

    Ok(Constraint::Range(RangeConstraint { operand, modulus, in_range, integers_only, ranges }))
}

struct Cursor<'a> {
    tokens: &'a [&'a str],
    position: usize,
    clause: &'a str,
}

impl<'a> Cursor<'a> {
    fn next(&mut self) -> Result<&'a str, ParseError> {
        self.next_opt()
            .ok_or_else(|| ParseError::MissingToken { clause: self.clause.to_string() })
    }

    fn next_opt(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.position).copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn is_done(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

fn unexpected(token: &str, clause: &str) -> ParseError {
    ParseError::UnexpectedToken {
        token: token.to_string(),
        clause: clause.to_string(),
        suggestion: suggest_grammar_word(token),
    }
}

fn parse_value(token: &str, clause: &str) -> Result<u64, ParseError> {
    let malformed = || ParseError::MalformedValue {
        token: token.to_string(),
        clause: clause.to_string(),
    };
    if token.is_empty() {
        return Err(malformed());
    }
    let mut value = 0u64;
    for c in token.chars() {
        let digit = decimal_digit_value(c).ok_or_else(malformed)?;
        value = value.saturating_mul(10).saturating_add(digit);
    }
    Ok(value)
}

/// Zero code points of the Unicode Nd decimal-digit runs (every run holds its
/// ten digits contiguously).
const DIGIT_RUN_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10, 0x0001_04A0, 0x0001_1066, 0x0001_D7CE, 0x0001_D7D8, 0x0001_D7E2,
    0x0001_D7EC, 0x0001_D7F6, 0x0001_E950,
];

/// The numeric value of a decimal digit in any script, or `None` for
/// everything else (including number-like characters outside Nd, such as
/// circled or superscript digits).
fn decimal_digit_value(c: char) -> Option<u64> {
    if let Some(digit) = c.to_digit(10) {
        return Some(u64::from(digit));
    }
    let code_point = c as u32;
    DIGIT_RUN_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code_point))
        .map(|&zero| u64::from(code_point - zero))
}
