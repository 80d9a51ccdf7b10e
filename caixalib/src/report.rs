//! Сводки за день, неделю и месяц по данным листа.

use crate::{
    address::address,
    error::Result,
    layout::layout,
    model::{CalendarDate, DayRecord, Field, PeriodSummary, Scope},
    money::parse_cell_value,
    traits::CellReader,
};
use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

const VALUE_FIELDS: [Field; 4] = [Field::Entrada, Field::Saida, Field::Diario, Field::Saldo];

pub struct ReportAggregator<'a, R: CellReader + ?Sized> {
    reader: &'a R,
}

#[derive(Default)]
struct Totals {
    entrada: Decimal,
    saida: Decimal,
    diario: Decimal,
    days_with_data: u32,
}

impl Totals {
    fn add(&mut self, r: &DayRecord) {
        self.entrada += r.entrada;
        self.saida += r.saida;
        self.diario += r.diario;
        if r.has_data() {
            self.days_with_data += 1;
        }
    }

    fn movement(&self) -> Decimal {
        self.entrada + self.saida + self.diario
    }
}

impl<'a, R: CellReader + ?Sized> ReportAggregator<'a, R> {
    pub fn new(reader: &'a R) -> Self {
        Self { reader }
    }

    /// Четыре ячейки дня читаются одним пакетом.
    pub async fn day_report(&self, date: CalendarDate) -> Result<DayRecord> {
        let block = layout(date.month, date.year);
        let cells = VALUE_FIELDS
            .iter()
            .map(|f| address(*f, date.day, &block))
            .collect::<Result<Vec<_>>>()?;

        let values = self.reader.batch_read(&cells).await?;
        let value = |i: usize| parse_cell_value(values.get(i).and_then(|v| v.as_deref()));

        Ok(DayRecord {
            date,
            entrada: value(0),
            saida: value(1),
            diario: value(2),
            saldo: value(3),
        })
    }

    /// Семь дней, заканчивая `today` включительно, от старого к новому.
    pub async fn week_report(&self, today: NaiveDate) -> Result<PeriodSummary> {
        let mut totals = Totals::default();
        let mut records = Vec::with_capacity(7);

        for offset in (0..7).rev() {
            let date = today - Duration::days(offset);
            let record = self.day_report(date.into()).await?;
            totals.add(&record);
            records.push(record);
        }

        let closing_saldo = records.last().map(|r| r.saldo).unwrap_or_default();
        tracing::debug!(%closing_saldo, days_with_data = totals.days_with_data, "week report");

        Ok(PeriodSummary {
            scope: Scope::Week,
            total_entrada: totals.entrada,
            total_saida: totals.saida,
            total_diario: totals.diario,
            closing_saldo,
            days_counted: totals.days_with_data,
            average: Some(totals.movement() / Decimal::from(7)),
            day_records: records,
        })
    }

    /// С первого дня месяца по `today`. Saldo берётся отдельным чтением ячейки `today`.
    pub async fn month_report(&self, today: NaiveDate) -> Result<PeriodSummary> {
        let mut totals = Totals::default();
        let mut records = Vec::with_capacity(today.day() as usize);

        for day in 1..=today.day() {
            let date = CalendarDate::new(day, today.month(), today.year());
            let record = self.day_report(date).await?;
            totals.add(&record);
            records.push(record);
        }

        let block = layout(today.month(), today.year());
        let saldo_cell = address(Field::Saldo, today.day(), &block)?;
        let raw = self.reader.read_cell(&saldo_cell).await?;
        let closing_saldo = parse_cell_value(raw.as_deref());

        let average = match totals.days_with_data {
            0 => None,
            n => Some(totals.movement() / Decimal::from(n)),
        };
        tracing::debug!(%closing_saldo, days_with_data = totals.days_with_data, "month report");

        Ok(PeriodSummary {
            scope: Scope::Month,
            total_entrada: totals.entrada,
            total_saida: totals.saida,
            total_diario: totals.diario,
            closing_saldo,
            days_counted: totals.days_with_data,
            average,
            day_records: records,
        })
    }
}
