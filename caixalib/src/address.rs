//! Перевод (поле, день, блок месяца) в адрес ячейки вида `E6`.

use crate::{
    error::{CaixaError, Result},
    model::{CellCoordinate, Field, MonthLayout},
};

/// Биективная нумерация колонок: 0 -> A, 25 -> Z, 26 -> AA.
pub fn column_letter(index: u32) -> String {
    let mut n = index as i64;
    let mut letters = Vec::new();
    while n >= 0 {
        letters.push(char::from(b'A' + (n % 26) as u8));
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Обратное к `column_letter`. Регистр не важен.
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut n: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    Some(n - 1)
}

impl CellCoordinate {
    pub fn new(column_index: u32, row: u32) -> Self {
        Self {
            column: column_letter(column_index),
            row,
        }
    }

    pub fn column_index(&self) -> Option<u32> {
        column_index(&self.column)
    }

    /// Разбор адреса в нотации A1.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| CaixaError::Parse(format!("cell without row: {s}")))?;
        let (letters, digits) = s.split_at(split);
        let index = column_index(letters)
            .ok_or_else(|| CaixaError::Parse(format!("bad column: {s}")))?;
        let row: u32 = digits
            .parse()
            .map_err(|e| CaixaError::Parse(format!("bad row in {s}: {e}")))?;
        if row == 0 {
            return Err(CaixaError::Parse(format!("row 0 in {s}")));
        }
        Ok(Self::new(index, row))
    }
}

/// Адрес ячейки поля `field` за день `day` внутри блока `layout`.
pub fn address(field: Field, day: u32, layout: &MonthLayout) -> Result<CellCoordinate> {
    let max_day = layout.days();
    if day < 1 || day > max_day {
        return Err(CaixaError::InvalidDate {
            month: layout.month,
            year: layout.year,
            day,
            max_day,
        });
    }
    let coordinate = CellCoordinate::new(
        field.base_column() + layout.column_offset,
        layout.start_row + (day - 1),
    );
    tracing::trace!(?field, day, month = layout.month, cell = %coordinate, "resolved cell");
    Ok(coordinate)
}
