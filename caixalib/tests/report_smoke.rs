use caixalib::{
    address::address,
    error::{CaixaError, Result},
    layout::layout,
    model::{CalendarDate, CellCoordinate, DayRecord, Field, Scope},
    report::ReportAggregator,
    stores::memory::MemoryGrid,
    traits::{CellReader, CellWriter},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn put(grid: &MemoryGrid, field: Field, day: NaiveDate, value: &str) {
    let day: CalendarDate = day.into();
    let cell = address(field, day.day, &layout(day.month, day.year)).expect("address");
    grid.write_cell(&cell, value).await.expect("write");
}

#[tokio::test]
async fn day_report_reads_four_fields() {
    let grid = MemoryGrid::new();
    let today = date(2026, 10, 18);
    grid.set("BE23", "R$ 100,00").expect("entrada");
    grid.set("BF23", "R$ 1.250,50").expect("saida");
    grid.set("BG23", "lixo").expect("diario");
    grid.set("BH23", "-R$ 30,00").expect("saldo");

    let record = ReportAggregator::new(&grid)
        .day_report(today.into())
        .await
        .expect("day report");

    assert_eq!(record.entrada, Decimal::from(100));
    assert_eq!(record.saida, Decimal::new(125050, 2));
    assert_eq!(record.diario, Decimal::ZERO);
    assert_eq!(record.saldo, Decimal::from(-30));
}

#[tokio::test]
async fn day_report_rejects_impossible_day() {
    let grid = MemoryGrid::new();
    let err = ReportAggregator::new(&grid)
        .day_report(CalendarDate::new(31, 4, 2026))
        .await
        .expect_err("31 april");
    assert!(matches!(err, CaixaError::InvalidDate { max_day: 30, .. }));
}

#[tokio::test]
async fn empty_week_is_all_zero() {
    let grid = MemoryGrid::new();
    let today = date(2026, 10, 18);
    let week = ReportAggregator::new(&grid)
        .week_report(today)
        .await
        .expect("week report");

    assert_eq!(week.scope, Scope::Week);
    assert_eq!(week.total_entrada, Decimal::ZERO);
    assert_eq!(week.total_saida, Decimal::ZERO);
    assert_eq!(week.total_diario, Decimal::ZERO);
    assert_eq!(week.closing_saldo, Decimal::ZERO);
    assert_eq!(week.days_counted, 0);
    assert_eq!(week.average, Some(Decimal::ZERO));
    assert_eq!(week.day_records.len(), 7);
    assert_eq!(week.day_records[0], DayRecord::empty(CalendarDate::new(12, 10, 2026)));
    assert_eq!(week.day_records[6].date, CalendarDate::new(18, 10, 2026));
}

#[tokio::test]
async fn week_crosses_month_boundary() {
    let grid = MemoryGrid::new();
    let today = date(2026, 3, 3);
    put(&grid, Field::Diario, date(2026, 2, 20), "R$ 999,00").await;
    put(&grid, Field::Diario, date(2026, 2, 26), "R$ 10,00").await;
    put(&grid, Field::Saldo, date(2026, 2, 26), "R$ 7.000,00").await;
    put(&grid, Field::Entrada, date(2026, 3, 1), "R$ 100,00").await;
    put(&grid, Field::Saldo, today, "R$ 500,00").await;

    let week = ReportAggregator::new(&grid)
        .week_report(today)
        .await
        .expect("week report");

    assert_eq!(week.day_records[0].date, CalendarDate::new(25, 2, 2026));
    assert_eq!(week.total_diario, Decimal::from(10));
    assert_eq!(week.total_entrada, Decimal::from(100));
    assert_eq!(week.closing_saldo, Decimal::from(500));
    assert_eq!(week.days_counted, 2);
    assert_eq!(week.average, Some(Decimal::from(110) / Decimal::from(7)));
}

#[tokio::test]
async fn month_report_sums_to_today() {
    let grid = MemoryGrid::new();
    let today = date(2026, 10, 5);
    put(&grid, Field::Entrada, date(2026, 10, 1), "R$ 100,00").await;
    put(&grid, Field::Saida, date(2026, 10, 3), "R$ 40,00").await;
    put(&grid, Field::Saldo, date(2026, 10, 4), "R$ 60,00").await;
    put(&grid, Field::Diario, today, "R$ 5,00").await;
    put(&grid, Field::Saldo, today, "R$ 55,00").await;
    put(&grid, Field::Diario, date(2026, 10, 6), "R$ 1.000,00").await;

    let month = ReportAggregator::new(&grid)
        .month_report(today)
        .await
        .expect("month report");

    assert_eq!(month.scope, Scope::Month);
    assert_eq!(month.day_records.len(), 5);
    assert_eq!(month.total_entrada, Decimal::from(100));
    assert_eq!(month.total_saida, Decimal::from(40));
    assert_eq!(month.total_diario, Decimal::from(5));
    assert_eq!(month.closing_saldo, Decimal::from(55));
    assert_eq!(month.days_counted, 3);
    assert_eq!(month.average, Some(Decimal::from(145) / Decimal::from(3)));
}

#[tokio::test]
async fn month_without_data_has_no_average() {
    let grid = MemoryGrid::new();
    let month = ReportAggregator::new(&grid)
        .month_report(date(2026, 2, 28))
        .await
        .expect("month report");
    assert_eq!(month.day_records.len(), 28);
    assert_eq!(month.days_counted, 0);
    assert_eq!(month.average, None);
}

struct Unreachable;

#[async_trait]
impl CellReader for Unreachable {
    async fn read_cell(&self, _cell: &CellCoordinate) -> Result<Option<String>> {
        Err(CaixaError::ExternalService("quota exceeded".into()))
    }
}

#[tokio::test]
async fn reader_failure_propagates() {
    let err = ReportAggregator::new(&Unreachable)
        .week_report(date(2026, 10, 18))
        .await
        .expect_err("unreachable");
    assert!(matches!(err, CaixaError::ExternalService(_)));
}
