//! JavaScript literals for route attribute values.
//!
//! Scalars read like Python literals (single-quoted strings, `1.0` for
//! integral floats). Lists and maps are written as single-line JSON through
//! `serde_json` with `, ` and `: ` separators and ASCII-only strings.

use std::io;

use eyre::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use stone_ir::AttrValue;

/// Render an attribute value as a JavaScript literal. A missing value is `null`.
pub fn format_literal(value: Option<&AttrValue>) -> Result<String> {
    Ok(match value {
        None | Some(AttrValue::Null) => "null".to_string(),
        Some(AttrValue::Bool(b)) => b.to_string(),
        Some(AttrValue::Integer(i)) => i.to_string(),
        Some(AttrValue::Float(f)) => format_float(*f),
        Some(AttrValue::String(s)) => quote_string(s),
        Some(collection) => to_json(collection)?,
    })
}

/// Quote a string, preferring single quotes.
///
/// Control characters and whitespace other than a plain space are escaped;
/// everything else is kept as-is.
fn quote_string(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                let code = c as u32;
                if code <= 0xff {
                    out.push_str(&format!("\\x{code:02x}"));
                } else {
                    out.push_str(&format!("\\u{code:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn to_json(value: &AttrValue) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SingleLine);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Compact JSON with a space after each separator.
///
/// Non-ASCII characters are written as `\uXXXX` escapes. Finite floats use
/// the same form as scalar literals; `serde_json` writes non-finite ones as
/// `null`.
struct SingleLine;

impl Formatter for SingleLine {
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
        writer.write_all(format_float(value).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Shortest representation that reads back as the same value.
///
/// Integral values keep a `.0`; exponents are used below `1e-4` and from
/// `1e16` on.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exponent) {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exponent.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{sign}0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() > int_len {
        format!("{sign}{}.{}", &digits[..int_len], &digits[int_len..])
    } else {
        format!("{sign}{digits:0<int_len$}.0")
    }
}

#[cfg(test)]
mod tests {
    use stone_ir::AttrValue;

    use super::*;

    fn lit(value: impl Into<AttrValue>) -> String {
        format_literal(Some(&value.into())).unwrap()
    }

    #[test]
    fn test_null_and_missing() {
        assert_eq!(format_literal(None).unwrap(), "null");
        assert_eq!(format_literal(Some(&AttrValue::Null)).unwrap(), "null");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(lit(true), "true");
        assert_eq!(lit(false), "false");
        assert_eq!(lit(42i64), "42");
        assert_eq!(lit(-7i64), "-7");
    }

    #[test]
    fn test_strings_prefer_single_quotes() {
        assert_eq!(lit("content"), "'content'");
        assert_eq!(lit(""), "''");
        assert_eq!(lit("it's"), "\"it's\"");
        assert_eq!(lit("say \"hi\""), "'say \"hi\"'");
        assert_eq!(lit("it's \"both\""), "'it\\'s \"both\"'");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(lit("a\\b"), "'a\\\\b'");
        assert_eq!(lit("line\nbreak\ttab\r"), "'line\\nbreak\\ttab\\r'");
        assert_eq!(lit("\u{01}\u{7f}"), "'\\x01\\x7f'");
        assert_eq!(lit("héllo ✓"), "'héllo ✓'");
    }

    #[test]
    fn test_unusual_whitespace_escaped() {
        assert_eq!(lit("a\u{a0}b"), "'a\\xa0b'");
        assert_eq!(lit("\u{2028}\u{2029}"), "'\\u2028\\u2029'");
        assert_eq!(lit("\u{3000}"), "'\\u3000'");
        assert_eq!(lit("\u{85}"), "'\\x85'");
        assert_eq!(lit("a b"), "'a b'");
    }

    #[test]
    fn test_floats() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(-0.25), "-0.25");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(100.0), "100.0");
        assert_eq!(format_float(123.456), "123.456");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.25e100), "1.25e+100");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "Infinity");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(lit(2.0), "2.0");
    }

    #[test]
    fn test_floats_inside_collections() {
        let value = AttrValue::List(vec![1.0.into(), 1e16.into(), 0.00001.into()]);
        assert_eq!(lit(value), "[1.0, 1e+16, 1e-05]");

        let value = AttrValue::List(vec![f64::NAN.into(), f64::INFINITY.into()]);
        assert_eq!(lit(value), "[null, null]");
    }

    #[test]
    fn test_list_single_line_json() {
        let value = AttrValue::List(vec![1i64.into(), "a".into(), AttrValue::Null, 0.5.into()]);
        assert_eq!(lit(value), "[1, \"a\", null, 0.5]");
        assert_eq!(lit(AttrValue::List(vec![])), "[]");
        assert_eq!(lit(AttrValue::Map(Default::default())), "{}");
    }

    #[test]
    fn test_map_single_line_json() {
        let value = AttrValue::Map(
            [
                ("host".to_string(), "content".into()),
                ("retries".to_string(), 3i64.into()),
                ("nested".to_string(), AttrValue::List(vec![true.into()])),
            ]
            .into_iter()
            .collect(),
        );
        assert_eq!(
            lit(value),
            "{\"host\": \"content\", \"retries\": 3, \"nested\": [true]}"
        );
    }

    #[test]
    fn test_json_strings_ascii_only() {
        let value = AttrValue::List(vec!["é\"\\\n".into(), "😀".into(), "\u{01}".into()]);
        assert_eq!(
            lit(value),
            "[\"\\u00e9\\\"\\\\\\n\", \"\\ud83d\\ude00\", \"\\u0001\"]"
        );
    }
}
