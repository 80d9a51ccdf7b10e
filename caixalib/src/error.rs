//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaixaError {
    /// День вне диапазона `1..=max_day` для месяца.
    #[error("day {day} out of range for {month}/{year} (max {max_day})")]
    InvalidDate {
        month: u32,
        year: i32,
        day: u32,
        max_day: u32,
    },

    /// Отказ внешнего хранилища (сеть, авторизация, квоты).
    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CaixaError>;
