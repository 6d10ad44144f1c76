#![allow(dead_code)]

pub mod fixtures;

use cartograph::MapRequest;
use serde_json::Value;

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Builds a typed request from a JSON fixture.
pub fn request_from(value: Value) -> MapRequest {
    serde_json::from_value(value).expect("fixture should be a valid map request")
}

/// Counts the elements with the given tag name.
pub fn count_elements(svg: &str, tag: &str) -> usize {
    svg.matches(&format!("<{tag} ")).count()
}

/// Rewrites every long number in `svg` with six significant digits.
///
/// Shorter numbers are left alone so names, colors and the XML version
/// survive untouched. This lets full-precision output be compared with
/// documents that were written with `%g`-style formatting.
pub fn round_numbers(svg: &str) -> String {
    let mut out = String::with_capacity(svg.len());
    let mut rest = svg;
    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(tail.len());
        let token = &tail[..end];
        let digits = token.chars().filter(char::is_ascii_digit).count();
        match token.parse::<f64>() {
            Ok(value) if digits > 6 => out.push_str(&six_significant_digits(value)),
            _ => out.push_str(token),
        }
        rest = &tail[end..];
    }
    out.push_str(rest);
    out
}

fn six_significant_digits(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    let decimals = (5 - exponent).max(0) as usize;
    let formatted = format!("{value:.decimals$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
