use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Money;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("INR")
    }
}

/// How the integer part of a number is split into groups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DigitGrouping {
    /// Groups of three: `1,234,567`.
    Western,
    /// Last three digits, then groups of two: `12,34,567`.
    Indian,
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping: DigitGrouping,
    pub date_format: DateFormatStyle,
    pub time_format: TimeFormatStyle,
}

impl LocaleConfig {
    pub fn en_in() -> Self {
        Self {
            language_tag: "en-IN".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            grouping: DigitGrouping::Indian,
            date_format: DateFormatStyle::Short,
            time_format: TimeFormatStyle::TwelveHour,
        }
    }

    pub fn en_us() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            grouping: DigitGrouping::Western,
            date_format: DateFormatStyle::Medium,
            time_format: TimeFormatStyle::TwelveHour,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::en_in()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
    pub screen_reader_mode: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
            screen_reader_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyDisplay {
    Symbol,
    Code,
    SymbolAndCode,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DateFormatStyle {
    /// `2024-01-15`
    Short,
    /// `15 Jan 2024`
    Medium,
    /// `Monday, 15 January 2024`
    Long,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TimeFormatStyle {
    /// `14:05`
    TwentyFourHour,
    /// `02:05 pm`
    TwelveHour,
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "INR" => "₹".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        "CAD" => "CAD".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats an integer with the locale's digit grouping, e.g. admin counters.
pub fn format_count(locale: &LocaleConfig, value: i64) -> String {
    let digits = group_digits(&value.unsigned_abs().to_string(), locale);
    if value < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Renders the absolute value of `minor` with `precision` fractional digits.
///
/// Works on integers only, so the same input always yields the same string.
pub fn format_minor_units(locale: &LocaleConfig, minor: i64, precision: u8) -> String {
    let scale = 10u64.pow(precision as u32);
    let abs = minor.unsigned_abs();
    let int_part = group_digits(&(abs / scale).to_string(), locale);
    if precision == 0 {
        return int_part;
    }
    format!(
        "{}{}{:0width$}",
        int_part,
        locale.decimal_separator,
        abs % scale,
        width = precision as usize
    )
}

fn group_digits(digits: &str, locale: &LocaleConfig) -> String {
    let separator = locale.grouping_separator;
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped: Vec<char> = Vec::with_capacity(chars.len() + chars.len() / 2);
    for (count, ch) in chars.iter().rev().enumerate() {
        let boundary = match locale.grouping {
            DigitGrouping::Western => count != 0 && count % 3 == 0,
            DigitGrouping::Indian => count == 3 || (count > 3 && (count - 3) % 2 == 0),
        };
        if boundary {
            grouped.push(separator);
        }
        grouped.push(*ch);
    }
    grouped.iter().rev().collect()
}

pub fn format_currency_value(
    amount: Money,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = minor_units_for(code.as_str());
    let digits = format_minor_units(locale, amount.minor(), precision);
    let negative = amount.is_negative();
    let signed = match (negative, options.negative_style) {
        (false, _) => digits.clone(),
        (true, NegativeStyle::Sign) => format!("-{}", digits),
        (true, NegativeStyle::Parentheses) => format!("({})", digits),
    };
    let symbol = symbol_for(code.as_str());
    let formatted = match options.currency_display {
        CurrencyDisplay::Symbol => match (negative, options.negative_style) {
            (true, NegativeStyle::Sign) => format!("-{}{}", symbol, digits),
            (true, NegativeStyle::Parentheses) => format!("{} {}", symbol, signed),
            (false, _) => format!("{}{}", symbol, digits),
        },
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), signed),
        CurrencyDisplay::SymbolAndCode => {
            format!("{} {} ({})", symbol, signed, code.as_str())
        }
    };
    if !options.screen_reader_mode {
        return formatted;
    }
    // Spoken form ignores the display and negative styles: "minus INR 50.00".
    let minus = if negative { "minus " } else { "" };
    format!("{}{} {}", minus, code.as_str(), digits)
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    match locale.date_format {
        DateFormatStyle::Short => date.format("%Y-%m-%d").to_string(),
        DateFormatStyle::Medium => format!(
            "{:02} {} {}",
            date.day(),
            month_label(date.month()),
            date.year()
        ),
        DateFormatStyle::Long => date.format("%A, %-d %B %Y").to_string(),
    }
}

pub fn format_time(locale: &LocaleConfig, timestamp: DateTime<Utc>) -> String {
    match locale.time_format {
        TimeFormatStyle::TwentyFourHour => {
            format!("{:02}:{:02}", timestamp.hour(), timestamp.minute())
        }
        TimeFormatStyle::TwelveHour => {
            let (pm, hour) = timestamp.hour12();
            format!(
                "{:02}:{:02} {}",
                hour,
                timestamp.minute(),
                if pm { "pm" } else { "am" }
            )
        }
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
