//! Точка входа для транспорта: текст сообщения -> текст ответа.

use crate::{
    address::address,
    error::{CaixaError, Result},
    format,
    layout::layout,
    model::{Command, DayRecord, PeriodSummary, Scope, UpdateCommand, WriteReceipt},
    money::format_brl,
    parser,
    report::ReportAggregator,
    traits::CellStore,
};
use chrono::{Local, NaiveDate};

/// Типизированный результат выполнения команды.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Written(WriteReceipt),
    Day(DayRecord),
    Period(PeriodSummary),
}

impl Reply {
    pub fn render(&self) -> String {
        match self {
            Reply::Written(receipt) => format::write_confirmation(receipt),
            Reply::Day(record) => format::day_report(record),
            Reply::Period(summary) => format::period_report(summary),
        }
    }
}

pub struct MessageHandler<S> {
    store: S,
}

impl<S: CellStore> MessageHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Обработка сообщения относительно текущей локальной даты.
    pub async fn handle(&self, raw: &str) -> String {
        self.handle_at(raw, Local::now().date_naive()).await
    }

    /// Всегда возвращает текст: справку, подтверждение, отчёт или сообщение об ошибке.
    pub async fn handle_at(&self, raw: &str, today: NaiveDate) -> String {
        let Some(command) = parser::parse(raw, today) else {
            tracing::debug!(message = raw, "not a command, replying with help");
            return format::help().to_string();
        };
        tracing::debug!(?command, "parsed");

        match self.execute(command, today).await {
            Ok(reply) => reply.render(),
            Err(err) => {
                match &err {
                    CaixaError::InvalidDate { .. } => tracing::warn!(error = %err, "rejected date"),
                    _ => tracing::error!(error = %err, message = raw, "command failed"),
                }
                format::error_reply(&err)
            }
        }
    }

    pub async fn execute(&self, command: Command, today: NaiveDate) -> Result<Reply> {
        match command {
            Command::Update(update) => self.record(&update).await.map(Reply::Written),
            Command::Query(query) => {
                let reports = ReportAggregator::new(&self.store);
                match query.scope {
                    Scope::Today => reports.day_report(today.into()).await.map(Reply::Day),
                    Scope::Week => reports.week_report(today).await.map(Reply::Period),
                    Scope::Month => reports.month_report(today).await.map(Reply::Period),
                }
            }
        }
    }

    /// Пишет сумму в ячейку поля за указанный день.
    pub async fn record(&self, update: &UpdateCommand) -> Result<WriteReceipt> {
        let date = update.date;
        let block = layout(date.month, date.year);
        let cell = address(update.kind.field(), date.day, &block)?;
        let written = format_brl(update.amount);

        self.store.write_cell(&cell, &written).await?;
        tracing::info!(kind = ?update.kind, %cell, value = %written, %date, "cell written");

        Ok(WriteReceipt {
            kind: update.kind,
            amount: update.amount,
            date,
            cell,
            written,
        })
    }
}
