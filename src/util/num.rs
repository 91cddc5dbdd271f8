use crate::ast::Name;

/// Text shown for a NaN result.
pub const NAN_TEXT: &str = "NaN";
/// Text shown for positive infinity.
pub const INFINITY_TEXT: &str = "Infinity";
/// Text shown for negative infinity.
pub const NEG_INFINITY_TEXT: &str = "-Infinity";

/// Formats a value for display, independent of any locale.
///
/// Finite values use the shortest decimal that round-trips to the same
/// `f64`, without a trailing `.0` for integral values. NaN and the
/// infinities use fixed spellings.
///
/// ## Example
/// ```
/// use linecalc::util::num::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(3.14159), "3.14159");
/// assert_eq!(format_number(-0.5), "-0.5");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        NAN_TEXT.to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            INFINITY_TEXT.to_string()
        } else {
            NEG_INFINITY_TEXT.to_string()
        }
    } else {
        value.to_string()
    }
}

/// Parses a `NAME=VALUE` definition such as `e=2.71828`.
///
/// Used to seed extra constants at startup. Whitespace around either side is
/// ignored.
///
/// ## Errors
/// Returns a message when the `=` is missing, the name is not a valid
/// variable name, or the value is not a finite number.
///
/// ## Example
/// ```
/// use linecalc::util::num::parse_definition;
///
/// let (name, value) = parse_definition("e = 2.5").unwrap();
/// assert_eq!((name.as_str(), value), ("e", 2.5));
/// assert!(parse_definition("2e=1").is_err());
/// assert!(parse_definition("e").is_err());
/// assert!(parse_definition("e=abc").is_err());
/// ```
pub fn parse_definition(text: &str) -> Result<(Name, f64), String> {
    let (name, value) = text.split_once('=')
                            .ok_or_else(|| format!("expected NAME=VALUE, found '{text}'"))?;
    let name = Name::new(name.trim()).ok_or_else(|| format!("'{}' is not a valid name", name.trim()))?;
    let value: f64 = value.trim()
                          .parse()
                          .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    if !value.is_finite() {
        return Err(format!("'{value}' is not a finite number"));
    }
    Ok((name, value))
}
