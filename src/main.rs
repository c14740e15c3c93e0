// Plot a Bezier curve and its control polygon to a BMP file.
//
// Usage:
//   bezier-raster [--config <plot.toml>] [-o <output.bmp>] [--backup <old.bmp>] [--resolution <n>]

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use bezier_raster::PlotConfig;
use log::error;

fn print_usage() {
    eprintln!("bezier-raster: plot a Bezier curve to a bitmap");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  bezier-raster [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <file>      Read plot settings from a TOML file.");
    eprintln!("  -o, --output <file>  Output image (default out.bmp).");
    eprintln!("  --backup <file>      Name the previous output is moved to (default old.bmp).");
    eprintln!("  --resolution <n>     Number of curve samples (default 200).");
    eprintln!("  -h, --help           Show this help.");
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    backup: Option<PathBuf>,
    resolution: Option<usize>,
    help: bool,
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a String> {
    *i += 1;
    args.get(*i)
        .with_context(|| format!("missing value for {}", flag))
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || take_value(args, &mut i, flag);
        match flag {
            "--config" => parsed.config = Some(value()?.into()),
            "-o" | "--output" => parsed.output = Some(value()?.into()),
            "--backup" => parsed.backup = Some(value()?.into()),
            "--resolution" => {
                let v = value()?;
                parsed.resolution = Some(
                    v.parse()
                        .with_context(|| format!("invalid resolution {:?}", v))?,
                );
            }
            "-h" | "--help" => parsed.help = true,
            other => bail!("unknown argument {:?}", other),
        }
        i += 1;
    }
    Ok(parsed)
}

fn build_config(args: &Args) -> Result<PlotConfig> {
    let mut config = match &args.config {
        Some(path) => PlotConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PlotConfig::default(),
    };
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(backup) = &args.backup {
        config.backup = backup.clone();
    }
    if let Some(resolution) = args.resolution {
        config.resolution = resolution;
    }
    config.validate()?;
    Ok(config)
}

fn try_main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            print_usage();
            return Err(e);
        }
    };
    if args.help {
        print_usage();
        return Ok(());
    }

    let config = build_config(&args)?;
    bezier_raster::run(&config)
        .with_context(|| format!("plotting to {}", config.output.display()))?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = try_main() {
        error!("{:#}", e);
        process::exit(1);
    }
}
