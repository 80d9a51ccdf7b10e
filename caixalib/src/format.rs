//! Текст ответов пользователю.

use crate::{
    error::CaixaError,
    model::{DayRecord, PeriodSummary, WriteReceipt},
    money::format_brl,
};
use rust_decimal::Decimal;
use std::fmt::Write as FmtWrite;

pub const HELP: &str = "🤖 *Bot de Controle Financeiro*

📝 *Comandos disponíveis:*

*DIÁRIO:*
• diario 87,10
• diario 400 amanha
• diario 100 07/01
• 517 (adiciona no diário de hoje)
• 35 amanha

*ENTRADA:*
• entrada 352,91 01/01
• entrada 200 hoje

*SAÍDA:*
• saida 94,90 hoje
• saida 600 06/02

*CONSULTAS:*
• saldo (ou resumo, extrato) hoje
• saldo semana
• saldo mes

📅 *Datas aceitas:*
• hoje
• amanha
• dd/mm
• dd/mm/aaaa

💡 *Dica:* Valores podem usar vírgula ou ponto como decimal.";

pub fn help() -> &'static str {
    HELP
}

pub fn write_confirmation(receipt: &WriteReceipt) -> String {
    format!(
        "✅ {} de {} registrado para {}",
        receipt.kind.label(),
        receipt.written,
        receipt.date
    )
}

/// Оценка остатка: плюс, минус или ноль.
pub fn saldo_note(saldo: Decimal) -> &'static str {
    if saldo > Decimal::ZERO {
        "✅ Saldo positivo! Continue assim."
    } else if saldo < Decimal::ZERO {
        "⚠️ Saldo negativo! Cuidado com os gastos."
    } else {
        "➖ Saldo zerado."
    }
}

pub fn day_report(record: &DayRecord) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "📊 *Resumo de {}*", record.date);
    let _ = writeln!(s);
    let _ = writeln!(s, "💰 Entrada: {}", format_brl(record.entrada));
    let _ = writeln!(s, "💸 Saída: {}", format_brl(record.saida));
    let _ = writeln!(s, "📝 Diário: {}", format_brl(record.diario));
    let _ = writeln!(s, "🏦 Saldo: {}", format_brl(record.saldo));
    let _ = writeln!(s);
    s.push_str(saldo_note(record.saldo));
    s
}

pub fn period_report(summary: &PeriodSummary) -> String {
    let mut s = String::new();
    let _ = write!(s, "📊 *Resumo - {}*", summary.scope.label());
    if let (Some(first), Some(last)) = (summary.day_records.first(), summary.day_records.last()) {
        let _ = write!(s, " ({} a {})", first.date, last.date);
    }
    let _ = writeln!(s);
    let _ = writeln!(s);
    let _ = writeln!(s, "💰 Entradas: {}", format_brl(summary.total_entrada));
    let _ = writeln!(s, "💸 Saídas: {}", format_brl(summary.total_saida));
    let _ = writeln!(s, "📝 Diário: {}", format_brl(summary.total_diario));
    let _ = writeln!(s, "🏦 Saldo final: {}", format_brl(summary.closing_saldo));
    let average = summary
        .average
        .map(format_brl)
        .unwrap_or_else(|| "n/d".to_string());
    let _ = writeln!(s, "📈 Média diária: {average}");
    let _ = writeln!(
        s,
        "📅 Dias com movimento: {} de {}",
        summary.days_counted,
        summary.day_records.len()
    );
    let _ = writeln!(s);
    s.push_str(saldo_note(summary.closing_saldo));
    s
}

pub fn error_reply(err: &CaixaError) -> String {
    match err {
        CaixaError::InvalidDate {
            month,
            year,
            max_day,
            ..
        } => format!("❌ O mês {month}/{year} só tem {max_day} dias"),
        CaixaError::ExternalService(cause) => format!("❌ Erro ao acessar a planilha: {cause}"),
        other => format!("❌ Erro ao processar sua mensagem: {other}"),
    }
}
