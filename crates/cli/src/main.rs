use anyhow::Result;
use clap::{Parser, Subcommand};
use fatar::commands::{list_command, merge_command};

/// Deduplicating static-archive merger CLI.
///
/// This CLI is a thin wrapper around `fatar-core` (exposed in code as
/// `fatar_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "fatar",
    version,
    about = "Merge static archives into one deduplicated fat archive",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge static archives into one deduplicated output archive.
    ///
    /// Members are deduplicated by content hash across all inputs, duplicate
    /// member names within one archive are kept under disambiguated names,
    /// and output membership is sorted by member name so reruns on the same
    /// inputs are byte-identical.
    Merge {
        /// Explicit archive paths to merge, in order.
        inputs: Vec<String>,

        /// Directory to scan recursively for `*.a` archives (appended after
        /// explicit inputs, in sorted order).
        #[arg(long)]
        dir: Option<String>,

        /// Path of the merged output archive.
        #[arg(long)]
        output: String,

        /// Additional exclusion pattern, matched case-insensitively against
        /// archive base names. May be repeated.
        #[arg(long = "exclude")]
        excludes: Vec<String>,

        /// Disable the default exclusions (test, benchmark, gmock, gtest).
        #[arg(long, default_value_t = false)]
        no_default_excludes: bool,

        /// Emit the merge report as JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the object members of a single archive.
    ///
    /// Shows each member's resolved name, content size, and SHA-256 content
    /// fingerprint.
    List {
        /// Path to the archive to inspect.
        #[arg(long)]
        archive: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Merge { inputs, dir, output, excludes, no_default_excludes, json } => {
            merge_command(&inputs, dir.as_deref(), &output, &excludes, no_default_excludes, json)?
        }
        Command::List { archive, json } => list_command(&archive, json)?,
    }

    Ok(())
}
