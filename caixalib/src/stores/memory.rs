//! Лист в памяти: для тестов и режима `--dry-run`.

use crate::{
    error::{CaixaError, Result},
    model::CellCoordinate,
    traits::{CellReader, CellWriter},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct MemoryGrid {
    cells: Mutex<HashMap<CellCoordinate, String>>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<CellCoordinate, String>>> {
        self.cells
            .lock()
            .map_err(|_| CaixaError::ExternalService("memory grid lock poisoned".into()))
    }

    /// Заполнение по адресу в нотации A1, например `set("E6", "R$ 10,00")`.
    pub fn set(&self, cell: &str, value: &str) -> Result<()> {
        let cell = CellCoordinate::parse(cell)?;
        let mut cells = self.lock()?;
        if value.is_empty() {
            cells.remove(&cell);
        } else {
            cells.insert(cell, value.to_string());
        }
        Ok(())
    }

    pub fn get(&self, cell: &str) -> Result<Option<String>> {
        let cell = CellCoordinate::parse(cell)?;
        Ok(self.lock()?.get(&cell).cloned())
    }

    /// Число непустых ячеек.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }
}

#[async_trait]
impl CellReader for MemoryGrid {
    async fn read_cell(&self, cell: &CellCoordinate) -> Result<Option<String>> {
        Ok(self.lock()?.get(cell).cloned())
    }
}

#[async_trait]
impl CellWriter for MemoryGrid {
    async fn write_cell(&self, cell: &CellCoordinate, value: &str) -> Result<()> {
        let mut cells = self.lock()?;
        if value.is_empty() {
            cells.remove(cell);
        } else {
            cells.insert(cell.clone(), value.to_string());
        }
        Ok(())
    }
}
