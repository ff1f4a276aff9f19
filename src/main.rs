use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use readlocate::config::{EdgeMode, Mode, OutputFormat, SearchOpt, SeedKind};
use readlocate::pipeline;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "readlocate", author, version, about = "Locate short reads in a reference, exactly or with k mismatches", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the suffix order and FM index in memory and report their sizes
    Index {
        /// Reference FASTA file (records are concatenated)
        reference: PathBuf,
        #[arg(long = "occ-block", default_value_t = 64)]
        occ_block: usize,
    },
    /// Search reads (FASTA or FASTQ) against a reference
    Search {
        /// Reference FASTA file (records are concatenated)
        #[arg(short = 'r', long = "reference")]
        reference: PathBuf,
        /// Reads file, FASTA or FASTQ
        #[arg(short = 'q', long = "reads")]
        reads: PathBuf,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = Mode::Suffix)]
        mode: Mode,
        /// Allowed substitutions (filter mode only)
        #[arg(short = 'k', long = "errors", default_value_t = 0)]
        errors: usize,
        /// Exact index used for seeds in filter mode
        #[arg(long = "seed-index", value_enum, default_value_t = SeedKind::Suffix)]
        seed: SeedKind,
        /// How to treat alignments that run off the reference
        #[arg(long = "edge", value_enum, default_value_t = EdgeMode::Truncate)]
        edge: EdgeMode,
        /// Repeat or truncate the reads to exactly this many queries
        #[arg(long = "query-count")]
        query_count: Option<usize>,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        #[arg(long = "format", value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
        #[arg(long = "occ-block", default_value_t = 64)]
        occ_block: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Index { reference, occ_block } => {
            let stats = pipeline::run_index(&reference, occ_block)?;
            info!("reference: {}", reference.display());
            println!("reference_len\t{}", stats.reference_len);
            println!("suffix_order_len\t{}", stats.suffix_order_len);
            println!("bwt_len\t{}", stats.bwt_len);
            Ok(())
        }
        Commands::Search {
            reference,
            reads,
            out,
            mode,
            errors,
            seed,
            edge,
            query_count,
            threads,
            format,
            occ_block,
        } => {
            let opt = SearchOpt { mode, errors, seed, edge, query_count, threads, format, occ_block };
            pipeline::run_search(&reference, &reads, out.as_deref(), &opt)
        }
    }
}
