//! Parsers for single rules and full rule chains.

use crate::parser::constraint::parse_constraint;
use crate::parser::error::ParseError;
use crate::parser::samples::parse_samples;
use crate::plural_rules::SampleType;
use crate::rules::{Constraint, Rule, RuleList};

/// Parses one `keyword: condition (@samples)*` unit.
///
/// The rule text is case-folded first, so `ONE: N IS 1` and `one: n is 1`
/// are the same rule.
pub(crate) fn parse_rule(description: &str) -> Result<Rule, ParseError> {
    let description = description.trim().to_lowercase();
    let Some((keyword, body)) = description.split_once(':') else {
        return Err(ParseError::MissingColon { rule: description.clone() });
    };
    let keyword = keyword.trim();
    if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(ParseError::InvalidKeyword { keyword: keyword.to_string() });
    }

    let sections: Vec<&str> = body.split('@').collect();
    let (condition, integer_samples, decimal_samples) = match sections.as_slice() {
        [condition] => (*condition, None, None),
        [condition, single] => {
            let samples = parse_samples(single)?;
            match samples.kind {
                SampleType::Integer => (*condition, Some(samples), None),
                SampleType::Decimal => (*condition, None, Some(samples)),
            }
        }
        [condition, first, second] => {
            let integer = parse_samples(first)?;
            let decimal = parse_samples(second)?;
            if integer.kind != SampleType::Integer || decimal.kind != SampleType::Decimal {
                return Err(ParseError::SampleSectionOrder { rule: description.clone() });
            }
            (*condition, Some(integer), Some(decimal))
        }
        _ => return Err(ParseError::TooManySampleSections { rule: description.clone() }),
    };

    let condition = condition.trim();
    let constraint = if keyword == "other" {
        if !condition.is_empty() {
            return Err(ParseError::ConstrainedOther { constraint: condition.to_string() });
        }
        Constraint::Always
    } else {
        parse_constraint(condition)?
    };

    Ok(Rule { keyword: keyword.to_string(), constraint, integer_samples, decimal_samples })
}

/// Parses a `;`-separated rule chain into an ordered rule list.
///
/// `other` always ends up last regardless of where it was declared, and is
/// synthesized as the unconditional fallback when absent.
pub(crate) fn parse_rule_chain(description: &str) -> Result<RuleList, ParseError> {
    let description = description.trim();
    let description = description.strip_suffix(';').unwrap_or(description);

    let mut rules: Vec<Rule> = Vec::new();
    let mut has_explicit_bounds = false;
    for segment in description.split(';') {
        let segment = segment.trim();
        if !segment.is_empty() {
            let rule = parse_rule(segment)?;
            if rules.iter().any(|existing| existing.keyword == rule.keyword) {
                return Err(ParseError::DuplicateKeyword { keyword: rule.keyword });
            }
            has_explicit_bounds |= has_samples(&rule);
            rules.push(rule);
        }
    }

    let other = match rules.iter().position(|rule| rule.keyword == "other") {
        Some(index) => rules.remove(index),
        None => Rule::fallback(),
    };
    rules.push(other);
    Ok(RuleList { rules, has_explicit_bounds })
}

fn has_samples(rule: &Rule) -> bool {
    rule.integer_samples.is_some() || rule.decimal_samples.is_some()
}
