//! Разбор текстовых команд в `Command`.
//!
//! Примеры:
//! - `diario 87,10` -> Diário 87.10 сегодня
//! - `diario 400 amanha` -> Diário 400 завтра
//! - `517` -> Diário 517 сегодня
//! - `entrada 352,91 01/01` -> Entrada 352.91 на 01/01 текущего года
//! - `saldo semana` -> запрос за неделю

use crate::{
    dates::{self, fold, DATE_RE},
    model::{Command, EntryKind, QueryCommand, Scope, UpdateCommand},
    money::parse_amount,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static QUERY_TODAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(saldo|resumo|extrato)\s*(hoje|hj)?$").expect("query today regex"));

static QUERY_WEEK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(saldo|resumo|extrato)\s*(semana|semanal)$").expect("query week regex"));

static QUERY_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(saldo|resumo|extrato)\s*(mes|mensal)$").expect("query month regex"));

static KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"entrada|saida|diario|hoje|amanha").expect("keyword regex"));

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:[.,]\d+)*").expect("number regex"));

enum Intent {
    Query(Scope),
    Update(EntryKind),
}

/// Порядок проверок задаёт приоритет: запросы, `entrada`, `saida`, иначе Diário.
fn detect(lower: &str) -> Intent {
    if QUERY_TODAY_RE.is_match(lower) {
        return Intent::Query(Scope::Today);
    }
    if QUERY_WEEK_RE.is_match(lower) {
        return Intent::Query(Scope::Week);
    }
    if QUERY_MONTH_RE.is_match(lower) {
        return Intent::Query(Scope::Month);
    }
    if lower.contains("entrada") {
        return Intent::Update(EntryKind::Entrada);
    }
    if lower.contains("saida") {
        return Intent::Update(EntryKind::Saida);
    }
    Intent::Update(EntryKind::Diario)
}

/// Первая числовая подстрока после удаления ключевых слов и дат.
fn extract_amount(lower: &str) -> Option<rust_decimal::Decimal> {
    let without_keywords = KEYWORD_RE.replace_all(lower, "");
    let clean = DATE_RE.replace_all(&without_keywords, "");
    let m = NUMBER_RE.find(&clean)?;
    parse_amount(m.as_str())
}

/// Разбирает сообщение. `None` означает «не команда», вызывающий показывает справку.
pub fn parse(text: &str, today: NaiveDate) -> Option<Command> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lower = fold(trimmed);
    let lower = lower.split_whitespace().collect::<Vec<_>>().join(" ");

    let kind = match detect(&lower) {
        Intent::Query(scope) => return Some(Command::Query(QueryCommand { scope })),
        Intent::Update(kind) => kind,
    };

    let amount = extract_amount(&lower)?;
    let date = dates::extract(trimmed, today);

    Some(Command::Update(UpdateCommand { kind, amount, date }))
}

/// Является ли сообщение распознаваемой командой.
pub fn is_valid_command(text: &str, today: NaiveDate) -> bool {
    parse(text, today).is_some()
}
