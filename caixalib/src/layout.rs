//! Геометрия блока месяца на годовом листе.
//!
//! Каждый месяц занимает 6 колонок (Dia, Entrada, Saída, Diário, Saldo и одна
//! пустая), январь слева, декабрь справа. День 1 всегда в строке 6.

use crate::dates::days_in_month;
use crate::model::MonthLayout;

pub const START_ROW: u32 = 6;
pub const BLOCK_WIDTH: u32 = 6;

/// `month` ожидается в `1..=12`.
pub fn layout(month: u32, year: i32) -> MonthLayout {
    MonthLayout {
        month,
        year,
        start_row: START_ROW,
        end_row: START_ROW + days_in_month(month, year) - 1,
        column_offset: (month - 1) * BLOCK_WIDTH,
    }
}
