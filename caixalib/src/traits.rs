//! Узкие трэйты доступа к ячейкам листа. Реализации живут в `stores`
//! (или снаружи крейта, например поверх HTTP API таблиц).

use crate::{error::Result, model::CellCoordinate};
use async_trait::async_trait;
use futures::future::try_join_all;

#[async_trait]
pub trait CellReader: Send + Sync {
    /// Сырой текст ячейки; `None`, если ячейка пустая.
    async fn read_cell(&self, cell: &CellCoordinate) -> Result<Option<String>>;

    /// Чтение нескольких ячеек; результат в том же порядке, что и `cells`.
    /// По умолчанию запросы идут параллельно.
    async fn batch_read(&self, cells: &[CellCoordinate]) -> Result<Vec<Option<String>>> {
        try_join_all(cells.iter().map(|c| self.read_cell(c))).await
    }
}

#[async_trait]
pub trait CellWriter: Send + Sync {
    /// Перезаписывает одну ячейку.
    async fn write_cell(&self, cell: &CellCoordinate, value: &str) -> Result<()>;
}

pub trait CellStore: CellReader + CellWriter {}
impl<T: CellReader + CellWriter> CellStore for T {}
