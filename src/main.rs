use bdbfetch::{confirmation_message, BindingDbClient, Error, Query, DEFAULT_BASE_URL};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Query BindingDB for binding affinities and save them as CSV
#[derive(Parser, Debug)]
#[command(name = "bdbfetch")]
#[command(about = "Query BindingDB by UniProt id or by SMILES and save the results as CSV", long_about = None)]
struct Args {
    /// UniProt ID
    #[arg(long)]
    uniprot: Option<String>,

    /// IC50 (in nM) cutoff
    #[arg(long = "ic50_cutoff", alias = "ic50-cutoff")]
    ic50_cutoff: Option<f64>,

    /// SMILES string
    #[arg(long)]
    smiles: Option<String>,

    /// Molecular similarity cutoff
    #[arg(long = "similarity_cutoff", alias = "similarity-cutoff")]
    similarity_cutoff: Option<f64>,

    /// Directory the CSV is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// BDBService endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout carries only the confirmation line
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let query = match Query::from_options(
        args.uniprot,
        args.ic50_cutoff,
        args.smiles,
        args.similarity_cutoff,
    ) {
        Ok(query) => query,
        Err(Error::NoModeSelected) => {
            debug!("{}", Error::NoModeSelected);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    info!("bdbfetch v{}", env!("CARGO_PKG_VERSION"));
    info!("Query: {:?}", query);

    let client = BindingDbClient::new(args.base_url)?;
    let today = chrono::Local::now().date_naive();
    let path = bdbfetch::run(&client, &query, &args.output_dir, today).await?;

    println!("{}", confirmation_message(&path)?);
    Ok(())
}
