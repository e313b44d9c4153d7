//! JSON bodies for the HTTP surface.
//!
//! Responses are rendered as `{"a": 10, "b": 5, "operation": "add",
//! "result": 15}`: a space after each colon and comma, and numbers in
//! general (`%g`-style) notation rather than fixed precision. The CLI keeps
//! its own two-decimal format; the two surfaces are intentionally different.
//!
//! | value      | rendered      |
//! |------------|---------------|
//! | `15.0`     | `15`          |
//! | `2.5`      | `2.5`         |
//! | `1e6`      | `1e+06`       |
//! | `0.0001`   | `0.0001`      |
//! | `0.00001`  | `1e-05`       |

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

/// Exponent at or above which the exponent form is used.
const EXPONENT_THRESHOLD: i32 = 6;

/// Exponent below which the exponent form is used.
const SMALL_EXPONENT: i32 = -4;

/// Formats `value` in shortest general notation.
///
/// Uses the shortest digit string that round-trips, then picks plain or
/// exponent notation from the decimal exponent. Exponents carry a sign and
/// at least two digits.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e3".
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::from(sign);
    if exponent < SMALL_EXPONENT || exponent >= EXPONENT_THRESHOLD {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        out.push_str(&format!("e{exp_sign}{:02}", exponent.unsigned_abs()));
        return out;
    }

    // Position of the decimal point within `digits`.
    let point = exponent + 1;
    if point <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let point = point as usize;
        if point >= digits.len() {
            out.push_str(&digits);
            out.push_str(&"0".repeat(point - digits.len()));
        } else {
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        }
    }
    out
}

/// `serde_json` formatter producing `"key": value, "key": value`.
///
/// Floats go through [`format_general`]. Non-finite floats never reach it:
/// serde_json writes them as `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_general(value).as_bytes())
    }

    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.write_f64(writer, f64::from(value))
    }
}

/// Serializes `value` with [`SpacedFormatter`].
pub fn to_body<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| {
        serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()))
    })
}
