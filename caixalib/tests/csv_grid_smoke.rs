use caixalib::{
    handler::MessageHandler,
    model::CellCoordinate,
    stores::csv::CsvGrid,
    traits::{CellReader, CellWriter},
};
use chrono::NaiveDate;

fn cell(a1: &str) -> CellCoordinate {
    CellCoordinate::parse(a1).expect("cell")
}

#[tokio::test]
async fn missing_file_is_created_and_persisted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("caixa.csv");

    let grid = CsvGrid::open(&path).expect("open");
    assert!(path.exists());
    assert_eq!(grid.read_cell(&cell("E6")).await.expect("read"), None);

    grid.write_cell(&cell("E6"), "R$ 87,10").await.expect("write");

    let reopened = CsvGrid::open(&path).expect("reopen");
    assert_eq!(
        reopened.read_cell(&cell("E6")).await.expect("read"),
        Some("R$ 87,10".to_string())
    );
    assert_eq!(reopened.read_cell(&cell("A1")).await.expect("read"), None);
    assert_eq!(reopened.read_cell(&cell("ZZ99")).await.expect("read"), None);

    let text = std::fs::read_to_string(&path).expect("read file");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], ",,,,");
    assert_eq!(lines[5], r#",,,,"R$ 87,10""#);
}

#[tokio::test]
async fn existing_grid_is_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("grid.csv");
    std::fs::write(&path, "a,b\n,,x\n").expect("seed");

    let grid = CsvGrid::open(&path).expect("open");
    assert_eq!(grid.read_cell(&cell("B1")).await.expect("read"), Some("b".into()));
    assert_eq!(grid.read_cell(&cell("C2")).await.expect("read"), Some("x".into()));
    assert_eq!(grid.read_cell(&cell("A2")).await.expect("read"), None);
}

#[tokio::test]
async fn handler_over_csv_grid() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("caixa.csv");
    let handler = MessageHandler::new(CsvGrid::open(&path).expect("open"));
    let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();

    let reply = handler.handle_at("saida 20 02/01", today).await;
    assert_eq!(reply, "✅ Saída de R$ 20,00 registrado para 02/01/2026");

    let reopened = CsvGrid::open(&path).expect("reopen");
    assert_eq!(
        reopened.read_cell(&cell("D7")).await.expect("read"),
        Some("R$ 20,00".to_string())
    );
}

#[tokio::test]
async fn failed_save_keeps_previous_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("caixa.csv");

    let grid = CsvGrid::open(&path).expect("open");
    grid.write_cell(&cell("E5"), "R$ 1,00").await.expect("first write");

    // лист больше нельзя перезаписать: на его месте каталог
    std::fs::remove_file(&path).expect("remove sheet");
    std::fs::create_dir(&path).expect("dir in place of sheet");

    assert!(grid.write_cell(&cell("E6"), "R$ 87,10").await.is_err());
    assert_eq!(grid.read_cell(&cell("E6")).await.expect("read"), None);
    assert_eq!(
        grid.read_cell(&cell("E5")).await.expect("read"),
        Some("R$ 1,00".to_string())
    );
    assert!(!dir.path().join("caixa.csv.tmp").exists());
}

#[tokio::test]
async fn no_temp_file_left_after_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("caixa.csv");

    let grid = CsvGrid::open(&path).expect("open");
    grid.write_cell(&cell("B2"), "x").await.expect("write");

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .expect("list")
        .map(|e| e.expect("entry").file_name())
        .collect();
    assert_eq!(names, ["caixa.csv"]);
}
