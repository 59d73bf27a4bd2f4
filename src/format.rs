// src/format.rs
//
// Brazilian Portuguese rendering of money and dates. Everything the
// documents print goes through here so the same number always reads the same.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Shown wherever a text or date field is missing.
pub const PLACEHOLDER: &str = "-";

/// Full month names, lowercase as they appear inside a sentence.
pub const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const UNITS: [&str; 20] = [
    "zero",
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta", "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `2300.5` -> `R$ 2.300,50`
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_cents(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{sign}R$ {},{fraction}", group_thousands(integer))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Spells out an amount in reais and centavos, first letter capitalised.
///
/// Amounts of a trillion reais or more are returned as figures.
pub fn amount_in_words(value: Decimal) -> String {
    let rounded = round_cents(value).abs();
    let reais = match rounded.trunc().to_u64() {
        Some(n) if n < 1_000_000_000_000 => n,
        _ => return format_brl(value),
    };
    let centavos = (rounded.fract() * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or(0);

    let mut parts = Vec::new();
    if reais > 0 {
        let words = integer_in_words(reais);
        parts.push(match reais {
            1 => format!("{words} real"),
            n if n >= 1_000_000 && n % 1_000_000 == 0 => format!("{words} de reais"),
            _ => format!("{words} reais"),
        });
    }
    if centavos > 0 {
        let words = below_thousand(centavos);
        parts.push(if centavos == 1 {
            format!("{words} centavo")
        } else {
            format!("{words} centavos")
        });
    }
    if parts.is_empty() {
        parts.push("zero reais".to_string());
    }

    capitalize(&parts.join(" e "))
}

fn below_thousand(n: u32) -> String {
    if n == 100 {
        return "cem".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let hundreds = (n / 100) as usize;
    let rest = n % 100;

    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds].to_string());
    }
    if rest > 0 {
        if rest < 20 {
            parts.push(UNITS[rest as usize].to_string());
        } else {
            let tens = TENS[(rest / 10) as usize];
            match rest % 10 {
                0 => parts.push(tens.to_string()),
                unit => parts.push(format!("{tens} e {}", UNITS[unit as usize])),
            }
        }
    }

    parts.join(" e ")
}

fn integer_in_words(n: u64) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }

    let groups = [
        ((n / 1_000_000_000) % 1000) as u32,
        ((n / 1_000_000) % 1000) as u32,
        ((n / 1000) % 1000) as u32,
        (n % 1000) as u32,
    ];

    let mut named: Vec<(u32, String)> = Vec::new();
    for (scale, &value) in groups.iter().enumerate() {
        if value == 0 {
            continue;
        }
        let words = below_thousand(value);
        let text = match (scale, value) {
            (0, 1) => "um bilhão".to_string(),
            (0, _) => format!("{words} bilhões"),
            (1, 1) => "um milhão".to_string(),
            (1, _) => format!("{words} milhões"),
            (2, 1) => "mil".to_string(),
            (2, _) => format!("{words} mil"),
            _ => words,
        };
        named.push((value, text));
    }

    let last = named.len() - 1;
    let mut out = String::new();
    for (i, (value, text)) in named.iter().enumerate() {
        if i > 0 {
            // "dois mil e trezentos", "dois mil trezentos e cinquenta"
            if i == last && (*value < 100 || value % 100 == 0) {
                out.push_str(" e ");
            } else {
                out.push(' ');
            }
        }
        out.push_str(text);
    }
    out
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parses the date part of an ISO string (`2024-03-01` or `2024-03-01T00:00:00Z`).
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// `dd/mm/yyyy`, or the placeholder when absent or unparseable.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_iso_date)
        .map(format_naive_date)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `19 de outubro de 2026`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

/// Trimmed text, or the placeholder when blank.
pub fn or_placeholder(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// `01234567` -> `01234-567`; anything else is returned trimmed.
pub fn format_zip(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 8 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        raw.trim().to_string()
    }
}
