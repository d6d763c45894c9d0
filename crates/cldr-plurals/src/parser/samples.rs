//! Parser for `@integer` / `@decimal` sample sections.

use crate::operands::FixedDecimal;
use crate::parser::error::ParseError;
use crate::plural_rules::SampleType;
use crate::rules::{SampleRange, Samples};

/// Parses one sample section (the text after an `@`).
///
/// The section names its kind, then lists comma-separated values or `low~high`
/// ranges; a trailing `…` (or `...`) marks the set as unbounded.
pub(crate) fn parse_samples(section: &str) -> Result<Samples, ParseError> {
    let section = section.trim();
    let (kind, list) = if let Some(rest) = section.strip_prefix("integer") {
        (SampleType::Integer, rest)
    } else if let Some(rest) = section.strip_prefix("decimal") {
        (SampleType::Decimal, rest)
    } else {
        return Err(ParseError::MalformedSampleHeader { section: section.to_string() });
    };

    let mut ranges = Vec::new();
    let mut bounded = true;
    for item in list.split(',') {
        let item = item.trim();
        if item == "…" || item == "..." {
            if !bounded {
                return Err(ParseError::MisplacedEllipsis { section: section.to_string() });
            }
            bounded = false;
        } else if !bounded {
            // Nothing may follow the ellipsis.
            return Err(ParseError::MisplacedEllipsis { section: section.to_string() });
        } else {
            ranges.push(parse_range(item, kind, section)?);
        }
    }
    Ok(Samples { kind, ranges, bounded })
}

fn parse_range(item: &str, kind: SampleType, section: &str) -> Result<SampleRange, ParseError> {
    let parts: Vec<&str> = item.split('~').collect();
    match parts.as_slice() {
        [value] => {
            let sample = parse_sample_value(value, kind)?;
            Ok(SampleRange::point(sample))
        }
        [start, end] => {
            let start = parse_sample_value(start, kind)?;
            let end = parse_sample_value(end, kind)?;
            if start.visible_digit_count() != end.visible_digit_count() {
                return Err(ParseError::MalformedSampleRange { range: item.to_string() });
            }
            Ok(SampleRange { start, end })
        }
        _ => Err(ParseError::MalformedSampleRange { range: item.to_string() }),
    }
}

fn parse_sample_value(text: &str, kind: SampleType) -> Result<FixedDecimal, ParseError> {
    let text = text.trim();
    let value: FixedDecimal = text.parse()?;
    let integral = value.visible_digit_count() == 0;
    if integral != (kind == SampleType::Integer) {
        return Err(ParseError::SampleDigitMismatch { value: text.to_string(), kind });
    }
    Ok(value)
}
