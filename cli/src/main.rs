use anyhow::{Context, Result};
use clap::Parser;

use siftsql::{QueryInput, QueryPlan};

#[derive(Parser)]
#[command(name = "siftsql")]
#[command(version, about = "Translate URL-style query strings into SQL", long_about = None)]
struct Cli {
    /// Query string to translate, e.g. '?name=John&age=>_18&orderby=name'
    query: String,

    /// Table to select from; omit to print only the WHERE fragment
    #[arg(long, short = 't')]
    table: Option<String>,

    /// Print the resolved plan as JSON before the statement
    #[arg(long)]
    plan: bool,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let input = QueryInput::parse(&cli.query);
    let plan = QueryPlan::from_input(&input).context("failed to resolve query")?;

    if cli.plan {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }

    let sql = plan
        .sql(cli.table.as_deref())
        .context("failed to assemble statement")?;
    println!("{sql}");
    Ok(())
}

fn init_logging() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_env_filter(filter)
        .init();
}
