//! Лист в CSV-файле без заголовков: строка N файла = строка N листа,
//! поле i = колонка `column_letter(i)`. Каждая запись сразу сохраняется на диск:
//! файл пишется рядом во временный и переименовывается поверх листа, запись на
//! диск идёт в `spawn_blocking`. Записи выполняются строго по очереди.

use crate::{
    error::{CaixaError, Result},
    model::CellCoordinate,
    traits::{CellReader, CellWriter},
};
use async_trait::async_trait;
use csv::{ReaderBuilder, WriterBuilder};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

type Rows = Vec<Vec<String>>;

pub struct CsvGrid {
    path: PathBuf,
    rows: Mutex<Rows>,
}

impl CsvGrid {
    /// Открывает файл; если его нет, создаёт пустой.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let rows = if path.exists() {
            read_rows(std::fs::File::open(&path)?)?
        } else {
            tracing::info!(path = %path.display(), "creating empty sheet file");
            std::fs::File::create(&path)?;
            Vec::new()
        };
        tracing::debug!(path = %path.display(), rows = rows.len(), "sheet loaded");
        Ok(Self {
            path,
            rows: Mutex::new(rows),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Сохраняет `rows` атомарно: временный файл рядом с листом, затем rename.
fn save(path: &Path, rows: &Rows) -> Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    let written = std::fs::File::create(&tmp)
        .map_err(CaixaError::from)
        .and_then(|file| write_rows(file, rows))
        .and_then(|()| std::fs::rename(&tmp, path).map_err(CaixaError::from));
    if written.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    written
}

fn read_rows<R: Read>(r: R) -> Result<Rows> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(r);
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Строки выравниваются по самой широкой, чтобы файл оставался прямоугольной таблицей.
fn write_rows<W: Write>(w: W, rows: &Rows) -> Result<()> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
    let mut wrt = WriterBuilder::new().has_headers(false).from_writer(w);
    for row in rows {
        let mut padded = row.clone();
        padded.resize(width, String::new());
        wrt.write_record(&padded)?;
    }
    wrt.flush()?;
    Ok(())
}

fn position(cell: &CellCoordinate) -> Result<(usize, usize)> {
    let col = cell
        .column_index()
        .ok_or_else(|| CaixaError::Parse(format!("bad column: {cell}")))?;
    if cell.row == 0 {
        return Err(CaixaError::Parse(format!("row 0: {cell}")));
    }
    Ok((cell.row as usize - 1, col as usize))
}

#[async_trait]
impl CellReader for CsvGrid {
    async fn read_cell(&self, cell: &CellCoordinate) -> Result<Option<String>> {
        let (row, col) = position(cell)?;
        let rows = self.rows.lock().await;
        Ok(rows
            .get(row)
            .and_then(|r| r.get(col))
            .filter(|v| !v.trim().is_empty())
            .cloned())
    }
}

#[async_trait]
impl CellWriter for CsvGrid {
    /// Память меняется только после успешной записи файла.
    async fn write_cell(&self, cell: &CellCoordinate, value: &str) -> Result<()> {
        let (row, col) = position(cell)?;
        let mut rows = self.rows.lock().await;

        let mut next = rows.clone();
        if next.len() <= row {
            next.resize_with(row + 1, Vec::new);
        }
        let target = &mut next[row];
        if target.len() <= col {
            target.resize(col + 1, String::new());
        }
        target[col] = value.to_string();

        let path = self.path.clone();
        let saved = tokio::task::spawn_blocking(move || save(&path, &next).map(|()| next))
            .await
            .map_err(|e| CaixaError::ExternalService(format!("save task failed: {e}")))
            .and_then(|r| r);

        match saved {
            Ok(next) => {
                *rows = next;
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to persist sheet");
                Err(CaixaError::ExternalService(format!(
                    "falha ao salvar {}: {e}",
                    self.path.display()
                )))
            }
        }
    }
}
