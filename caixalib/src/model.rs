//! Доменные модели: команды, геометрия листа, дневные записи и сводки.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Календарная дата «как ввёл пользователь»: день не сверяется с длиной месяца,
/// это делает `address::address`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { year, month, day }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        Self::new(d.day(), d.month(), d.year())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Поле, в которое пишет команда обновления.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Entrada,
    Saida,
    Diario,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Entrada => "Entrada",
            EntryKind::Saida => "Saída",
            EntryKind::Diario => "Diário",
        }
    }

    pub fn field(self) -> Field {
        match self {
            EntryKind::Entrada => Field::Entrada,
            EntryKind::Saida => Field::Saida,
            EntryKind::Diario => Field::Diario,
        }
    }
}

/// Колонки внутри блока месяца.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Field {
    Day,
    Entrada,
    Saida,
    Diario,
    Saldo,
}

impl Field {
    /// Смещение колонки от первой колонки блока месяца.
    pub fn base_column(self) -> u32 {
        match self {
            Field::Day => 1,
            Field::Entrada => 2,
            Field::Saida => 3,
            Field::Diario => 4,
            Field::Saldo => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Scope {
    Today,
    Week,
    Month,
}

impl Scope {
    pub fn label(self) -> &'static str {
        match self {
            Scope::Today => "Hoje",
            Scope::Week => "Semana",
            Scope::Month => "Mês",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCommand {
    pub kind: EntryKind,
    pub amount: Decimal,
    pub date: CalendarDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryCommand {
    pub scope: Scope,
}

/// Результат разбора одного сообщения.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Command {
    Update(UpdateCommand),
    Query(QueryCommand),
}

/// Геометрия блока одного месяца на годовом листе.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthLayout {
    pub month: u32,
    pub year: i32,
    pub start_row: u32,
    pub end_row: u32,
    pub column_offset: u32,
}

impl MonthLayout {
    pub fn days(&self) -> u32 {
        self.end_row - self.start_row + 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CellCoordinate {
    pub column: String,
    pub row: u32,
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayRecord {
    pub date: CalendarDate,
    pub entrada: Decimal,
    pub saida: Decimal,
    pub diario: Decimal,
    pub saldo: Decimal,
}

impl DayRecord {
    pub fn empty(date: CalendarDate) -> Self {
        Self {
            date,
            entrada: Decimal::ZERO,
            saida: Decimal::ZERO,
            diario: Decimal::ZERO,
            saldo: Decimal::ZERO,
        }
    }

    /// Есть ли в дне хоть одно ненулевое движение (saldo не считается).
    pub fn has_data(&self) -> bool {
        !(self.entrada.is_zero() && self.saida.is_zero() && self.diario.is_zero())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummary {
    pub scope: Scope,
    pub total_entrada: Decimal,
    pub total_saida: Decimal,
    pub total_diario: Decimal,
    /// Saldo последнего дня периода, а не сумма.
    pub closing_saldo: Decimal,
    /// Дни с ненулевыми entrada/saida/diario.
    pub days_counted: u32,
    /// `None`, когда делить не на что.
    pub average: Option<Decimal>,
    pub day_records: Vec<DayRecord>,
}

/// Подтверждение записи одной ячейки.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WriteReceipt {
    pub kind: EntryKind,
    pub amount: Decimal,
    pub date: CalendarDate,
    pub cell: CellCoordinate,
    /// Текст, записанный в ячейку, например `R$ 87,10`.
    pub written: String,
}
