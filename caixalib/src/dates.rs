//! Разрешение относительных и абсолютных дат: `hoje`, `amanhã`, `dd/mm[/yyyy]`.
//!
//! Функции никогда не падают: нераспознанная дата превращается в опорную дату.

use crate::model::CalendarDate;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// `dd/mm`, `dd/mm/yy`, `dd/mm/yyyy`.
pub(crate) static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?").expect("date regex"));

static FULL_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?$").expect("full date regex"));

/// Нижний регистр без диакритики: `Amanhã` -> `amanha`, `MÊS` -> `mes`.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Двузначный год: `yy < 70` -> 20yy, иначе 19yy.
pub fn expand_two_digit_year(yy: i32) -> i32 {
    if yy < 70 {
        2000 + yy
    } else {
        1900 + yy
    }
}

fn tomorrow(reference: NaiveDate) -> CalendarDate {
    reference.succ_opt().unwrap_or(reference).into()
}

fn numeric(day: &str, month: &str, year: Option<&str>, reference: NaiveDate) -> Option<CalendarDate> {
    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    let year = match year {
        None => CalendarDate::from(reference).year,
        Some(y) if y.len() == 2 => expand_two_digit_year(y.parse().ok()?),
        Some(y) if y.len() == 4 => y.parse().ok()?,
        Some(_) => return None,
    };
    Some(CalendarDate::new(day, month, year))
}

fn from_captures(caps: &regex::Captures<'_>, reference: NaiveDate) -> CalendarDate {
    let parsed = numeric(
        &caps[1],
        &caps[2],
        caps.get(3).map(|m| m.as_str()),
        reference,
    );
    if parsed.is_none() {
        tracing::debug!(token = &caps[0], "unparseable date, falling back to reference");
    }
    parsed.unwrap_or_else(|| reference.into())
}

/// Разрешает одиночный токен даты относительно `reference`.
pub fn resolve(token: &str, reference: NaiveDate) -> CalendarDate {
    let token = fold(token.trim());
    match token.as_str() {
        "" | "hoje" => reference.into(),
        "amanha" => tomorrow(reference),
        other => match FULL_DATE_RE.captures(other) {
            Some(caps) => from_captures(&caps, reference),
            None => reference.into(),
        },
    }
}

/// Ищет дату в любом месте сообщения; порядок проверок: `hoje`, `amanhã`, `dd/mm`.
pub fn extract(text: &str, reference: NaiveDate) -> CalendarDate {
    let lower = fold(text);
    if lower.contains("hoje") {
        return reference.into();
    }
    if lower.contains("amanha") {
        return tomorrow(reference);
    }
    match DATE_RE.captures(&lower) {
        Some(caps) => from_captures(&caps, reference),
        None => reference.into(),
    }
}
