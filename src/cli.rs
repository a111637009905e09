use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "codebase-concat",
    version,
    about = "Concatenate codebase files for LLM processing",
    long_about = "codebase-concat walks a directory, skips ignored and binary files, and writes every \
                  remaining source file to a single stream with a comment header naming its path.",
    after_help = "Examples:\n  \
                  codebase-concat                      Process current directory, output to stdout\n  \
                  codebase-concat /path/to/project     Process specific directory\n  \
                  codebase-concat -o output.txt        Save to file\n  \
                  codebase-concat --ext .py .js .md    Only process specific extensions\n  \
                  codebase-concat --all-ext            Process all text files"
)]
pub struct Cli {
    /// Directory to process
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File extensions to include (e.g., .py .js .md)
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub ext: Option<Vec<String>>,

    /// Process all text files regardless of extension
    #[arg(long)]
    pub all_ext: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
