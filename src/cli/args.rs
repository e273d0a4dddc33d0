use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "outlet-mapper")]
#[command(about = "Load outlet datasets, filter them and produce clustered map sources")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Settings file [default: outlet-mapper.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(short, long, help = "Search text matched against outlet names")]
    pub search: Option<String>,

    #[arg(short = 'm', long, help = "Market segment (exact, case-sensitive)")]
    pub segment: Option<String>,

    #[arg(long, help = "Use contiguous substring matching for --search")]
    pub substring: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the (optionally filtered) outlets as a clustered map source
    Export {
        #[arg(short, long, help = "Input CSV file [default: from settings]")]
        input: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Output file path [default: output/outlets-{YYMMDD}.geojson]"
        )]
        output_file: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, help = "Write a bare FeatureCollection without map settings")]
        bare: bool,

        #[arg(long, help = "Pretty-print the JSON output")]
        pretty: bool,
    },

    /// List the distinct market segments
    Segments {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the outlets visible under the given filters
    List {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, default_value = "0", help = "Maximum rows to print (0 = all)")]
        limit: usize,
    },

    /// Print the camera update for selecting the N-th visible outlet (1-based)
    Focus {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(short = 'n', long)]
        index: usize,
    },

    /// Summarise a dataset or a previously exported GeoJSON file
    Info {
        #[arg(short, long, help = "Input CSV file [default: from settings]")]
        input: Option<PathBuf>,

        #[arg(long, help = "Inspect an exported GeoJSON file instead")]
        geojson: Option<PathBuf>,
    },

    /// Run a line-based filter session on stdin
    Interactive {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}
