//! ReQL command-line interface

use clap::{Parser, Subcommand};
use reql::cli::{build, ops, output};
use std::path::PathBuf;

/// ReQL command-line tool
#[derive(Parser)]
#[command(name = "reql")]
#[command(author, version, about = "ReQL query construction tools", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a JSON query document into a serialized term
    Build {
        /// Query document (`-` for stdin)
        #[arg(default_value = "-")]
        file: PathBuf,

        /// Builder configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List operations, arities and aliases
    Ops {
        /// Only show operations containing this text
        filter: Option<String>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    output::setup_colors(&cli.color);

    let result = match cli.command {
        Commands::Build {
            file,
            config,
            pretty,
        } => build::build(build::BuildConfig {
            file,
            builder_config: config,
            pretty,
            verbose: cli.verbose,
            output_file: cli.output,
        }),
        Commands::Ops { filter } => ops::list(filter.as_deref(), cli.output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
