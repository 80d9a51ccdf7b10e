use caixalib::{
    error::{CaixaError, Result},
    handler::MessageHandler,
    stores::{csv::CsvGrid, memory::MemoryGrid},
    traits::CellStore,
};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "caixa", version, about = "Registro de caixa diário por comandos de texto")]
struct Cli {
    /// Planilha em CSV (criada se não existir)
    #[arg(short = 's', long = "sheet", env = "CAIXA_SHEET", required_unless_present = "dry_run")]
    sheet: Option<String>,

    /// Usa uma planilha em memória, nada é gravado
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Data de referência no lugar de hoje (AAAA-MM-DD)
    #[arg(long = "today", env = "CAIXA_TODAY")]
    today: Option<NaiveDate>,

    /// Filtro de log do tracing
    #[arg(long = "log", env = "CAIXA_LOG", default_value = "caixa=info,caixalib=info")]
    log: String,

    /// Mensagem; sem ela, lê uma mensagem por linha da entrada padrão
    message: Vec<String>,
}

async fn run<S: CellStore>(handler: MessageHandler<S>, cli: &Cli) -> Result<()> {
    let today = || cli.today.unwrap_or_else(|| Local::now().date_naive());

    if !cli.message.is_empty() {
        let reply = handler.handle_at(&cli.message.join(" "), today()).await;
        println!("{reply}");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut out = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let reply = handler.handle_at(&line, today()).await;
        writeln!(out, "{reply}\n")?;
        out.flush()?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_writer(io::stderr)
        .init();

    if cli.dry_run {
        tracing::info!("dry run: using in-memory sheet");
        return run(MessageHandler::new(MemoryGrid::new()), &cli).await;
    }

    let path = cli
        .sheet
        .as_deref()
        .ok_or_else(|| CaixaError::Parse("--sheet or --dry-run is required".into()))?;
    let grid = CsvGrid::open(path)?;
    tracing::info!(path = %grid.path().display(), "sheet opened");
    run(MessageHandler::new(grid), &cli).await
}
