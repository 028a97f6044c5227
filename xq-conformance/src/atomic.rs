use std::str::FromStr;

use ibig::IBig;
use ordered_float::OrderedFloat;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::sequence::Item;

/// A typed value, parsed from a lexical form under its declared type. Only
/// the types the assertion language compares by value are modeled; anything
/// else falls back to codepoint comparison of lexical forms.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Atomic {
    Integer(IBig),
    Decimal(Decimal),
    Double(OrderedFloat<f64>),
    Boolean(bool),
    String(String),
}

const INTEGER_TYPES: &[&str] = &[
    "xs:integer",
    "xs:long",
    "xs:int",
    "xs:short",
    "xs:byte",
    "xs:unsignedLong",
    "xs:unsignedInt",
    "xs:unsignedShort",
    "xs:unsignedByte",
    "xs:nonPositiveInteger",
    "xs:negativeInteger",
    "xs:nonNegativeInteger",
    "xs:positiveInteger",
];

impl Atomic {
    /// Parses an engine-produced item under its own declared type.
    pub(crate) fn of_item(item: &Item) -> Result<Self> {
        let lexical = item.lexical_form();
        let type_name = item.type_name();
        if INTEGER_TYPES.contains(&type_name) {
            return Ok(Atomic::Integer(parse_integer(lexical)?));
        }
        match type_name {
            "xs:decimal" => Ok(Atomic::Decimal(parse_decimal(lexical)?)),
            "xs:double" | "xs:float" => Ok(Atomic::Double(OrderedFloat(parse_double(lexical)?))),
            "xs:boolean" => Ok(Atomic::Boolean(parse_boolean(lexical)?)),
            _ => Ok(Atomic::String(lexical.to_string())),
        }
    }

    /// Parses an expected literal as a test author writes it: a quoted
    /// string, `true()`/`false()`, or a numeric literal whose shape picks
    /// the numeric type, as in XPath.
    pub(crate) fn of_literal(literal: &str) -> Result<Self> {
        let s = literal.trim();
        if let Some(string) = parse_quoted(s) {
            return Ok(Atomic::String(string));
        }
        match s {
            "true()" => return Ok(Atomic::Boolean(true)),
            "false()" => return Ok(Atomic::Boolean(false)),
            _ => {}
        }
        if is_integer_literal(s) {
            return Ok(Atomic::Integer(parse_integer(s)?));
        }
        if is_decimal_literal(s) {
            return Ok(Atomic::Decimal(parse_decimal(s)?));
        }
        if is_double_literal(s) {
            return Ok(Atomic::Double(OrderedFloat(parse_double(s)?)));
        }
        Err(Error::InvalidLiteral(literal.to_string()))
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            Atomic::Integer(i) => Some(i.to_f64()),
            Atomic::Decimal(d) => d.to_f64(),
            Atomic::Double(d) => Some(d.0),
            _ => None,
        }
    }

    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Atomic::Integer(i) => Decimal::from_str(&i.to_string()).ok(),
            Atomic::Decimal(d) => Some(*d),
            _ => None,
        }
    }
}

/// Numeric equality across numeric kinds. Doubles compare with NaN equal to
/// NaN; integer/decimal comparisons are exact.
pub(crate) fn numeric_eq(a: &Atomic, b: &Atomic) -> bool {
    match (a, b) {
        (Atomic::Double(_), _) | (_, Atomic::Double(_)) => match (a.to_f64(), b.to_f64()) {
            (Some(x), Some(y)) => OrderedFloat(x) == OrderedFloat(y),
            _ => false,
        },
        _ => match (a.to_decimal(), b.to_decimal()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

fn parse_quoted(s: &str) -> Option<String> {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            let inner = &s[1..s.len() - 1];
            // a doubled quote character is the XPath escape for the quote
            // itself
            let doubled = format!("{}{}", quote, quote);
            return Some(inner.replace(&doubled, &quote.to_string()));
        }
    }
    None
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
    match unsigned.split_once('.') {
        // the fraction may be omitted (`1.`) but not both parts (`.`)
        Some((whole, fraction)) => {
            (!whole.is_empty() || !fraction.is_empty())
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

fn is_double_literal(s: &str) -> bool {
    matches!(s, "INF" | "-INF" | "NaN") || s.contains(['e', 'E'])
}

fn parse_integer(s: &str) -> Result<IBig> {
    let s = s.trim();
    let digits = s.strip_prefix('+').unwrap_or(s);
    IBig::from_str(digits).map_err(|_| Error::InvalidLiteral(s.to_string()))
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let trimmed = s.trim();
    // a trailing point with no fraction digits is a valid lexical form
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    Decimal::from_str(trimmed).map_err(|_| Error::InvalidLiteral(s.to_string()))
}

fn parse_double(s: &str) -> Result<f64> {
    match s.trim() {
        "INF" => Ok(f64::INFINITY),
        "-INF" => Ok(f64::NEG_INFINITY),
        "NaN" => Ok(f64::NAN),
        other => f64::from_str(other).map_err(|_| Error::InvalidLiteral(s.to_string())),
    }
}

fn parse_boolean(s: &str) -> Result<bool> {
    match s.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::InvalidLiteral(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn literal_shapes_pick_the_type() {
        assert_eq!(Atomic::of_literal("3").unwrap(), Atomic::Integer(3.into()));
        assert_eq!(
            Atomic::of_literal("-42").unwrap(),
            Atomic::Integer((-42).into())
        );
        assert_eq!(
            Atomic::of_literal("6.4").unwrap(),
            Atomic::Decimal(dec!(6.4))
        );
        // either side of the point may be empty, but not both
        assert_eq!(Atomic::of_literal("1.").unwrap(), Atomic::Decimal(dec!(1)));
        assert_eq!(
            Atomic::of_literal(".5").unwrap(),
            Atomic::Decimal(dec!(0.5))
        );
        assert!(Atomic::of_literal(".").is_err());
        assert_eq!(
            Atomic::of_literal("1.5e0").unwrap(),
            Atomic::Double(OrderedFloat(1.5))
        );
        assert_eq!(Atomic::of_literal("true()").unwrap(), Atomic::Boolean(true));
        assert_eq!(
            Atomic::of_literal("\"abc\"").unwrap(),
            Atomic::String("abc".to_string())
        );
    }

    #[test]
    fn quoted_literals_unescape_doubled_quotes() {
        assert_eq!(
            Atomic::of_literal("\"say \"\"hi\"\"\"").unwrap(),
            Atomic::String("say \"hi\"".to_string())
        );
        assert_eq!(
            Atomic::of_literal("'it''s'").unwrap(),
            Atomic::String("it's".to_string())
        );
    }

    #[test]
    fn garbage_literal_is_rejected() {
        assert!(matches!(
            Atomic::of_literal("three"),
            Err(Error::InvalidLiteral(_))
        ));
        assert!(matches!(
            Atomic::of_literal(""),
            Err(Error::InvalidLiteral(_))
        ));
    }

    #[test]
    fn item_parses_under_its_declared_type() {
        let item = Item::new("3", "xs:integer");
        assert_eq!(Atomic::of_item(&item).unwrap(), Atomic::Integer(3.into()));

        let item = Item::new("true", "xs:boolean");
        assert_eq!(Atomic::of_item(&item).unwrap(), Atomic::Boolean(true));

        let item = Item::new("INF", "xs:double");
        assert_eq!(
            Atomic::of_item(&item).unwrap(),
            Atomic::Double(OrderedFloat(f64::INFINITY))
        );

        // unknown types keep their lexical form
        let item = Item::new("<a/>", "element");
        assert_eq!(
            Atomic::of_item(&item).unwrap(),
            Atomic::String("<a/>".to_string())
        );
    }

    #[test]
    fn malformed_item_value_is_rejected() {
        let item = Item::new("3.5", "xs:integer");
        assert!(Atomic::of_item(&item).is_err());
    }

    #[test]
    fn numeric_eq_spans_numeric_kinds() {
        let three = Atomic::Integer(3.into());
        assert!(numeric_eq(&three, &Atomic::Decimal(dec!(3.0))));
        assert!(numeric_eq(&three, &Atomic::Double(OrderedFloat(3.0))));
        assert!(numeric_eq(
            &Atomic::Decimal(dec!(6.4)),
            &Atomic::Decimal(dec!(6.40))
        ));
        assert!(!numeric_eq(&three, &Atomic::Decimal(dec!(3.1))));
        assert!(!numeric_eq(&three, &Atomic::String("3".to_string())));
    }

    #[test]
    fn numeric_eq_treats_nan_as_equal_to_nan() {
        let nan = Atomic::Double(OrderedFloat(f64::NAN));
        assert!(numeric_eq(&nan, &nan.clone()));
        assert!(!numeric_eq(&nan, &Atomic::Double(OrderedFloat(0.0))));
    }
}
