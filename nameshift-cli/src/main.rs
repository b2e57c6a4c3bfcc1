use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use nameshift_core::{
    permute_operation, transform_operation, CodecPair, CompiledTransform, Config, ModuleRegistry,
    Reporter, TransformOptions, TransformPipeline, Verb,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

mod cli;
mod input;

use cli::Cli;

/// Fatal post-parse failure: broken configuration, violated permutation
/// precondition, or a mid-cycle rename error.
const EXIT_FATAL: i32 = 255;
/// Argument-parsing failure (clap's default of 2 is remapped).
const EXIT_USAGE: i32 = 1;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            err.print().expect("failed to write clap error");
            process::exit(code);
        },
    };

    if let Err(err) = run(cli) {
        eprintln!("nameshift: {err:#}");
        process::exit(EXIT_FATAL);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Config supplies defaults; flags extend or override them.
    let config = Config::load().unwrap_or_default();
    let verbose = cli.verbose || config.defaults.verbose;
    let filename_only = cli.filename_only || config.defaults.filename_only;
    let use_color = io::stdout().is_terminal();

    let reporter = Reporter::new(verbose, cli.dry_run, use_color);
    let inputs = input::collect_inputs(&cli.paths, cli.null)?;

    if let Some(mode) = cli.permute {
        let paths: Vec<PathBuf> = inputs.iter().map(PathBuf::from).collect();
        permute_operation(&paths, mode, cli.dry_run, &reporter)?;
        return Ok(());
    }

    let mut registry = ModuleRegistry::new();
    for module in config.modules.iter().chain(cli.modules.iter()) {
        registry.load(module)?;
    }
    let transform = CompiledTransform::compile(&cli.expr, &registry)?;

    let transcode = cli
        .transcode
        .as_deref()
        .or(config.defaults.transcode.as_deref());
    let codec = match transcode {
        Some(spec) => Some(CodecPair::from_spec(spec)?),
        None => None,
    };

    let mut pipeline = TransformPipeline::new(Box::new(transform), codec, filename_only);
    let options = TransformOptions {
        verb: if cli.copy { Verb::Copy } else { Verb::Move },
        force: cli.force,
        dry_run: cli.dry_run,
    };

    transform_operation(&inputs, &mut pipeline, &options, &reporter)?;
    Ok(())
}
