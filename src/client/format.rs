//! Display helpers for optional backend values.

use chrono::{NaiveDate, NaiveDateTime};
use pulldown_cmark::{html, Options, Parser};

pub const PLACEHOLDER: &str = "-";

pub fn date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn date_time(value: Option<NaiveDateTime>) -> String {
    value
        .map(|d| d.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn text(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

pub fn number<N: ToString>(value: Option<N>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Label of an optional backend enum, through its `Display`.
pub fn label<E: ToString>(value: Option<&E>) -> String {
    value
        .map(ToString::to_string)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Value for an `<input type="date">`.
pub fn input_date(value: Option<NaiveDate>) -> String {
    value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Value for an `<input type="datetime-local">`.
pub fn input_date_time(value: Option<NaiveDateTime>) -> String {
    value
        .map(|d| d.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

pub fn parse_input_date_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

/// Renders descriptions and message bodies written in Markdown.
pub fn markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all());
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Empty input means "not set".
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
