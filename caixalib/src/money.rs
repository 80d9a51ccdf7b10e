//! Денежный текст в обе стороны: `R$ 1.234,56` <-> `Decimal`.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

/// Вся ячейка целиком: `R$ 1.234,56`, `-R$ 10,00`, `R$ -10,00`, `(10,00)`, `87.1`.
static CELL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\()?\s*(-)?\s*(?:R\$)?\s*(-)?\s*([\d.,]+)\s*(\))?$").expect("cell regex")
});

/// `87.5` -> `R$ 87,50`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let s = format!("{rounded:.2}").replace('.', ",");
    format!("R$ {s}")
}

/// Нормализация суммы из команды: `87,10` -> 87.10, `1.234,56` -> 1234.56.
///
/// Запятая становится точкой; если точек больше одной, все кроме последней
/// считаются разделителями тысяч.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    let parts: Vec<&str> = normalized.split('.').collect();
    let normalized = if parts.len() > 2 {
        let (last, head) = parts.split_last()?;
        format!("{}.{}", head.concat(), last)
    } else {
        normalized
    };
    normalized.parse::<Decimal>().ok()
}

/// Значение ячейки в число. Пустое или битое значение -> 0.
pub fn parse_cell_value(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let parsed = CELL_RE.captures(trimmed).and_then(|caps| {
        let parens = match (caps.get(1), caps.get(5)) {
            (Some(_), Some(_)) => true,
            (None, None) => false,
            _ => return None,
        };
        let negative = parens || caps.get(2).is_some() || caps.get(3).is_some();
        let digits = &caps[4];
        let value = if digits.contains(',') {
            digits.replace('.', "").replace(',', ".").parse::<Decimal>().ok()?
        } else {
            parse_amount(digits)?
        };
        Some(if negative { -value } else { value })
    });

    match parsed {
        Some(v) => v,
        None => {
            tracing::warn!(cell = trimmed, "malformed cell value, using 0");
            Decimal::ZERO
        }
    }
}
