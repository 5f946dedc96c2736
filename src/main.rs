use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use memechart_core::graph::plot_prices;
use memechart_core::{
    build_price_history_set, create_history_table, export_csv, export_json,
    generate_random_walk, Clock, FixedClock, HistoryConfig, PriceChart, PriceHistorySet,
    SystemClock, Timeframe,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the price chart for one timeframe
    #[command(about = "Draw the price chart for one timeframe")]
    #[command(long_about = "Generate the synthetic price history and draw the chart for a single timeframe, with the latest price and change since the start of the window.")]
    Show(ShowCommand),

    /// Summarize every timeframe in a table
    #[command(about = "Summarize every timeframe in a table")]
    Summary(SummaryCommand),

    /// Export the generated history to a file
    #[command(about = "Export the generated history to a file")]
    #[command(long_about = "Export the generated history for every timeframe to a CSV or JSON file.")]
    Export(ExportCommand),

    /// Draw a chart of the fallback random walk
    #[command(about = "Draw a chart of the fallback random walk")]
    #[command(long_about = "Draw the free-running random walk a token chart falls back to when it has no price history.")]
    Walk(WalkCommand),
}

#[derive(Args)]
struct GenerationArgs {
    /// JSON file with timeframe settings (-c, --config)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Seed for reproducible prices (-s, --seed)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Date the history ends on (-r, --reference-date)
    #[arg(short = 'r', long, conflicts_with = "today")]
    reference_date: Option<NaiveDate>,

    /// End the history on today's date
    #[arg(long)]
    today: bool,
}

impl GenerationArgs {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn build(&self) -> anyhow::Result<PriceHistorySet> {
        let config = match &self.config {
            Some(path) => HistoryConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => HistoryConfig::default(),
        };

        let reference_date = if self.today {
            SystemClock.today()
        } else {
            self.reference_date
                .or(config.reference_date)
                .unwrap_or_else(|| FixedClock::default().today())
        };

        let configs = config.timeframe_configs()?;
        info!("Generating {} timeframes ending {}", configs.len(), reference_date);
        Ok(build_price_history_set(&mut self.rng(), reference_date, &configs)?)
    }
}

#[derive(Parser)]
struct ShowCommand {
    /// Timeframe to draw (-t, --timeframe)
    #[arg(short = 't', long, default_value = "7d")]
    timeframe: Timeframe,

    /// Name shown above the chart (-n, --token-name)
    #[arg(short = 'n', long, default_value = "Trump Money Glitch")]
    token_name: String,

    /// Graph width in columns (-w, --width)
    #[arg(short = 'w', long, default_value_t = 60)]
    width: usize,

    /// Graph height in lines (-g, --height)
    #[arg(short = 'g', long, default_value_t = 12)]
    height: usize,

    #[command(flatten)]
    generation: GenerationArgs,
}

#[derive(Parser)]
struct SummaryCommand {
    /// Height of the history sparkline in lines (-g, --graph-height)
    #[arg(short = 'g', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=5))]
    graph_height: u8,

    #[command(flatten)]
    generation: GenerationArgs,
}

#[derive(Parser)]
struct ExportCommand {
    /// Output file path (-o, --output)
    #[arg(short = 'o', long, default_value = "price_history.csv")]
    output: PathBuf,

    /// Output format (-f, --format)
    #[arg(short = 'f', long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    #[command(flatten)]
    generation: GenerationArgs,
}

#[derive(Parser)]
struct WalkCommand {
    /// Number of points in the walk (-p, --points)
    #[arg(short = 'p', long, default_value_t = memechart_core::generator::WALK_POINTS)]
    points: usize,

    /// Seed for reproducible prices (-s, --seed)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Graph width in columns (-w, --width)
    #[arg(short = 'w', long, default_value_t = 60)]
    width: usize,

    /// Graph height in lines (-g, --height)
    #[arg(short = 'g', long, default_value_t = 12)]
    height: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(cmd) => {
            let set = cmd.generation.build()?;
            let points = set
                .get(cmd.timeframe)
                .with_context(|| format!("timeframe {} is not configured", cmd.timeframe))?;

            let chart = PriceChart::from_slice(points);
            println!("{}", chart.header(&cmd.token_name));
            println!("{}", chart.to_ascii_graph(cmd.width, cmd.height));
            println!("{}", chart.date_axis(cmd.width));
        }
        Commands::Summary(cmd) => {
            let set = cmd.generation.build()?;
            println!("{}", create_history_table(&set, cmd.graph_height));
        }
        Commands::Export(cmd) => {
            let set = cmd.generation.build()?;
            match cmd.format {
                ExportFormat::Csv => export_csv(&set, &cmd.output)?,
                ExportFormat::Json => export_json(&set, &cmd.output)?,
            }
        }
        Commands::Walk(cmd) => {
            let mut rng = match cmd.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let walk = generate_random_walk(&mut rng, cmd.points);
            if let (Some(first), Some(last)) = (walk.first(), walk.last()) {
                info!("Walk moved from ${:.6} to ${:.6}", first, last);
            }
            println!("{}", plot_prices(&walk, cmd.width, cmd.height));
        }
    }

    Ok(())
}
