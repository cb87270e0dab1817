use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// display currencies the formatter recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Sar,
    Egp,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// parse a display code, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "SAR" => Some(Currency::Sar),
            "EGP" => Some(Currency::Egp),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Sar => "SAR",
            Currency::Egp => "EGP",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// locale symbol placed before the amount, when the locale has one
    fn prefix_symbol(&self) -> Option<&'static str> {
        match self {
            Currency::Usd => Some("$"),
            Currency::Eur => Some("€"),
            Currency::Gbp => Some("£"),
            _ => None,
        }
    }
}

/// format a monetary value for display in the given currency
///
/// SAR carries its own suffix symbol; USD/EUR/GBP are symbol-prefixed;
/// EGP and unrecognized codes fall back to code-prefixed formatting.
/// non-finite values surface as-is - guarding them is the caller's concern
pub fn format_currency(value: f64, currency_code: &str) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let amount = grouped2(value);
    match Currency::from_code(currency_code) {
        Some(Currency::Sar) => format!("{} \u{FDFC}", amount),
        Some(currency) => match currency.prefix_symbol() {
            Some(symbol) => prefix_with_symbol(symbol, &amount),
            None => format!("{} {}", currency.code(), amount),
        },
        None => format!("{} {}", currency_code, amount),
    }
}

/// two-decimal string, rounding midpoints away from zero
///
/// `f64` formatting rounds half to even; going through `Decimal` keeps
/// exact midpoints (0.125 -> "0.13") on the side a ledger reader expects
pub fn fixed2(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(d) => format!(
            "{:.2}",
            d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        // non-finite and out-of-range values have no decimal form
        None => format!("{:.2}", value),
    }
}

/// grouped thousands with two decimals
fn grouped2(value: f64) -> String {
    let fixed = fixed2(value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

fn prefix_with_symbol(symbol: &str, amount: &str) -> String {
    match amount.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, amount),
    }
}
