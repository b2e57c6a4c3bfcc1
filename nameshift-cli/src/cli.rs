use clap::Parser;
use nameshift_core::PermutationMode;
use std::ffi::OsString;

/// Batch-rename files with transform expressions or cyclic permutations
#[derive(Parser, Debug)]
#[command(name = "nameshift")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Expressions are applied in order. Substitutions use
s<delim>PATTERN<delim>TEMPLATE<delim>[gi]; templates may reference capture
groups ($1) and the per-run counter ({n}). Bare operation names come from
loaded modules:
  case: lower, upper, title
  text: trim, squeeze, sanitize

When no paths are given, names are read from standard input, one per line
(or NUL-separated with -0); shell-style wildcards in those names are
expanded when they match.")]
pub struct Cli {
    /// Print each action as `<verb> 'source' 'destination'`
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Show what would happen without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Copy files instead of moving them
    #[arg(short = 'c', long)]
    pub copy: bool,

    /// Overwrite an existing destination instead of skipping it
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Apply transform expressions to the base name only, leaving the
    /// directory part untouched
    #[arg(short = 'd', long = "filename-only")]
    pub filename_only: bool,

    /// Treat standard input as NUL-delimited instead of line-delimited
    #[arg(short = '0', long = "null")]
    pub null: bool,

    /// Cyclically permute the given paths instead of transforming names:
    /// l|rotate-left, r|rotate-right, s|swap, f|flip (or any unambiguous
    /// prefix)
    #[arg(
        short = 'p',
        long = "permute",
        value_name = "MODE",
        value_parser = parse_mode,
        conflicts_with_all = ["expr", "modules", "transcode"]
    )]
    pub permute: Option<PermutationMode>,

    /// Transform expression; may be repeated, applied in order
    #[arg(
        short = 'e',
        long = "expr",
        value_name = "EXPR",
        required_unless_present = "permute"
    )]
    pub expr: Vec<String>,

    /// Load a named operation module; may be repeated
    #[arg(short = 'M', long = "module", value_name = "NAME")]
    pub modules: Vec<String>,

    /// Transcode names through DECODE[,ENCODE] codecs around the transform
    #[arg(short = 'T', long = "transcode", value_name = "CODEC[,CODEC]")]
    pub transcode: Option<String>,

    /// Paths to rename; read from standard input when omitted
    pub paths: Vec<OsString>,
}

fn parse_mode(s: &str) -> Result<PermutationMode, nameshift_core::Error> {
    s.parse()
}
