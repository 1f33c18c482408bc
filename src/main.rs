use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use pajek_tools::table;
use pajek_tools::{PajekWriter, VertexOrder, WriterConfig};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "pajek-tools")]
#[command(about = "Convert tabular edge lists into Pajek (.net) network files")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an edge list into a Pajek .net file
    Convert(ConvertArgs),
    /// Write the label-to-vertex-index table as CSV
    Vertices(VerticesArgs),
}

#[derive(Args)]
struct TableArgs {
    /// Path to the edge list (CSV with a header row)
    #[arg(short, long)]
    input: String,

    /// JSON file with writer settings; flags below override it
    #[arg(long)]
    config: Option<String>,

    /// Field delimiter of the input ("\t" for tab-separated)
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// Column holding the source (citing) node
    #[arg(long)]
    source_column: Option<String>,

    /// Column holding the target (cited) node
    #[arg(long)]
    target_column: Option<String>,

    /// Column holding edge weights
    #[arg(long)]
    weight_column: Option<String>,

    /// Treat the network as undirected (*Edges instead of *Arcs)
    #[arg(long)]
    undirected: bool,

    /// Number vertices in sorted label order instead of first appearance
    #[arg(long, conflicts_with = "vertex_order")]
    sort_vertices: bool,

    /// File listing labels one per line, giving the vertex numbering
    #[arg(long)]
    vertex_order: Option<String>,
}

#[derive(Args)]
struct ConvertArgs {
    #[command(flatten)]
    table: TableArgs,

    /// Output path for the .net file (overwritten if it exists)
    #[arg(short, long)]
    output: String,

    /// Append the edge count to the *Arcs/*Edges header
    #[arg(long)]
    annotate_edge_count: bool,

    /// Fixed number of decimals for edge weights
    #[arg(long)]
    weight_precision: Option<usize>,
}

#[derive(Args)]
struct VerticesArgs {
    #[command(flatten)]
    table: TableArgs,

    /// Output path for the vertex CSV
    #[arg(short, long)]
    output: String,
}

fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "\\t" | "\t" | "tab" => Ok(b'\t'),
        s if s.len() == 1 => Ok(s.as_bytes()[0]),
        s => bail!("Delimiter must be a single byte, got {:?}", s),
    }
}

fn build_config(args: &TableArgs) -> Result<WriterConfig> {
    let mut config = match &args.config {
        Some(path) => WriterConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => WriterConfig::default(),
    };

    if let Some(col) = &args.source_column {
        config.source_column = col.clone();
    }
    if let Some(col) = &args.target_column {
        config.target_column = col.clone();
    }
    if let Some(col) = &args.weight_column {
        config.weight_column = Some(col.clone());
    }
    if args.undirected {
        config.directed = false;
    }
    if args.sort_vertices {
        config.vertex_order = VertexOrder::Sorted;
    }
    if let Some(path) = &args.vertex_order {
        let labels = table::read_label_list(path)
            .with_context(|| format!("Failed to read vertex order: {}", path))?;
        debug!(labels = labels.len(), "Loaded explicit vertex order");
        config.vertex_order = VertexOrder::Explicit(labels);
    }

    Ok(config)
}

fn load_table(args: &TableArgs) -> Result<pajek_tools::EdgeTable> {
    let delimiter = parse_delimiter(&args.delimiter)?;
    table::read_csv(&args.input, delimiter)
        .with_context(|| format!("Failed to read edge list: {}", args.input))
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let mut config = build_config(&args.table)?;
    config.annotate_edge_count |= args.annotate_edge_count;
    if args.weight_precision.is_some() {
        config.weight_precision = args.weight_precision;
    }
    info!(
        directed = config.directed,
        source = %config.source_column,
        target = %config.target_column,
        "Starting conversion"
    );

    let start_loading = Instant::now();
    let edges = load_table(&args.table)?;
    let loading_duration = start_loading.elapsed();

    let start_writing = Instant::now();
    let writer = PajekWriter::new(&edges, config)?;
    let summary = writer
        .write(&args.output)
        .with_context(|| format!("Failed to write Pajek file: {}", args.output))?;
    let writing_duration = start_writing.elapsed();

    println!();
    println!("=== Summary ===");
    println!("Loading time:  {:.2}s", loading_duration.as_secs_f64());
    println!("Writing time:  {:.2}s", writing_duration.as_secs_f64());
    println!();
    println!("Network:       {}", summary.kind());
    println!("Vertices:      {}", summary.vertices);
    println!("Edges:         {}", summary.edges);
    println!("Mean degree:   {:.2}", summary.mean_degree());
    println!("Output:        {}", args.output);

    Ok(())
}

fn run_vertices(args: VerticesArgs) -> Result<()> {
    let config = build_config(&args.table)?;
    let edges = load_table(&args.table)?;
    let writer = PajekWriter::new(&edges, config)?;
    let count = writer
        .write_vertices_csv(&args.output)
        .with_context(|| format!("Failed to write vertex table: {}", args.output))?;
    println!("Wrote {} vertices to {}", count, args.output);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let result = match cli.command {
        Commands::Convert(args) => run_convert(args),
        Commands::Vertices(args) => run_vertices(args),
    };

    match result {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
