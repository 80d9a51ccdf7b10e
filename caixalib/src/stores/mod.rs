//! Реализации `CellStore`: в памяти и поверх CSV-выгрузки листа.

pub mod csv;
pub mod memory;
