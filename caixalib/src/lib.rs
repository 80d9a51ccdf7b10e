//! caixalib — разбор текстовых команд и адресация ячеек годового листа «caixa diário».

pub mod error;
pub mod model;
pub mod traits;

pub mod dates;
pub mod layout;
pub mod address;
pub mod money;
pub mod parser;
pub mod report;
pub mod format;
pub mod handler;

pub mod stores;
