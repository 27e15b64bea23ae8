//! # Catalog Line Format
//!
//! One pizza per line, no header, no quoting:
//!
//! ```text
//! Margherita,10.00,1
//! Quattro Stagioni,14.50,1
//! Hawaiian,13.00,0
//! ```
//!
//! ## Parsing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <name>,<price>,<available>                                             │
//! │                                                                         │
//! │  name       everything up to the first comma, 1..=49 characters         │
//! │  price      decimal literal, leading blanks allowed, >= 0               │
//! │  available  leading [+-]?digits, nonzero = true, rest of line ignored   │
//! │                                                                         │
//! │  Anything else: the line is malformed and skipped                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A comma inside a name cannot be represented. The catalog never holds one,
//! whether added or inserted; a hand-edited file that does will split
//! the name at the comma and, usually, fail to parse the rest of the line.

use pizza_core::{Money, PizzaType, MAX_NAME_LENGTH};

/// Parses one catalog line.
///
/// Returns `None` for malformed lines. A trailing `\n` / `\r\n` is ignored.
pub fn parse_line(line: &str) -> Option<PizzaType> {
    let line = line.trim_end_matches(['\n', '\r']);

    let (name, rest) = line.split_once(',')?;
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return None;
    }

    let (price, flag) = rest.split_once(',')?;
    let price = price
        .trim_start()
        .parse::<f64>()
        .ok()
        .and_then(Money::from_decimal)?;
    if price.is_negative() {
        return None;
    }

    let available = parse_flag(flag)?;

    Some(PizzaType {
        name: name.to_string(),
        price,
        available,
    })
}

/// Reads the leading integer of `text` as a boolean.
fn parse_flag(text: &str) -> Option<bool> {
    let text = text.trim_start();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let digits: &str = match unsigned.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &unsigned[..end],
        None => unsigned,
    };

    if digits.is_empty() {
        return None;
    }

    Some(digits.bytes().any(|b| b != b'0'))
}

/// Formats one catalog line, without the trailing newline.
pub fn format_line(pizza: &PizzaType) -> String {
    format!("{},{},{}", pizza.name, pizza.price, u8::from(pizza.available))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> (String, i64, bool) {
        let pizza = parse_line(line).unwrap();
        (pizza.name, pizza.price.cents(), pizza.available)
    }

    #[test]
    fn test_parse_basic_lines() {
        assert_eq!(parsed("Margherita,10.00,1"), ("Margherita".to_string(), 1000, true));
        assert_eq!(parsed("Hawaiian,13,0\n"), ("Hawaiian".to_string(), 1300, false));
        assert_eq!(parsed("Vegetarian,11.5,1\r\n"), ("Vegetarian".to_string(), 1150, true));
    }

    #[test]
    fn test_parse_loose_flag() {
        assert!(parsed("A,1.00,2").2);
        assert!(parsed("A,1.00,-1").2);
        assert!(parsed("A,1.00, 7 trailing text").2);
        assert!(!parsed("A,1.00,000").2);
        assert!(!parsed("A,1.00,0abc").2);
        assert!(parsed("A,1.00,99999999999999999999999").2);
    }

    #[test]
    fn test_parse_keeps_name_verbatim() {
        assert_eq!(parsed(" Spaced ,9.99,1").0, " Spaced ");
        assert_eq!(parsed(&format!("{},5,1", "N".repeat(49))).0.len(), 49);
    }

    #[test]
    fn test_parse_price_forms() {
        assert_eq!(parsed("A,  12.5,1").1, 1250);
        assert_eq!(parsed("A,1.25e1,1").1, 1250);
        assert_eq!(parsed("A,0,1").1, 0);
        assert_eq!(parsed("A,9.999,1").1, 1000);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_line("").is_none());
        assert!(parse_line("Margherita").is_none());
        assert!(parse_line("Margherita,10.00").is_none());
        assert!(parse_line(",10.00,1").is_none());
        assert!(parse_line("Margherita,ten,1").is_none());
        assert!(parse_line("Margherita,10.00 ,1").is_none());
        assert!(parse_line("Margherita,10.00,").is_none());
        assert!(parse_line("Margherita,10.00,yes").is_none());
        assert!(parse_line("Margherita,-1.00,1").is_none());
        assert!(parse_line("Margherita,inf,1").is_none());
        assert!(parse_line("Margherita,1e30,1").is_none());
        assert!(parse_line(&format!("{},5,1", "N".repeat(50))).is_none());
    }

    #[test]
    fn test_comma_in_name_truncates() {
        // "Ham, Pineapple,12.00,1" splits after "Ham"; " Pineapple" is not a price.
        assert!(parse_line("Ham, Pineapple,12.00,1").is_none());
        // When the tail happens to parse, the name is silently shortened.
        assert_eq!(parsed("Ham,12.00,1,extra").0, "Ham");
    }

    #[test]
    fn test_format_line() {
        let mut pizza = PizzaType::new("Pepperoni", Money::from_cents(1250));
        assert_eq!(format_line(&pizza), "Pepperoni,12.50,1");

        pizza.available = false;
        assert_eq!(format_line(&pizza), "Pepperoni,12.50,0");
    }

    #[test]
    fn test_format_then_parse() {
        let pizza = PizzaType::new("Quattro Stagioni", Money::from_cents(1450));
        assert_eq!(parse_line(&format_line(&pizza)), Some(pizza));
    }
}
