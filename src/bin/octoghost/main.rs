use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use spdlog::{error, info, warn};

use octoghost::config::{Config, DEFAULT_OUTPUT_FILE};
use octoghost::converter::convert_files;
use octoghost::logger::configure_logger;
use octoghost::post_list::PostList;
use octoghost::util::os_helper::expand_path;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "octoghost.toml";

#[derive(Parser, Debug)]
#[command(version, about = "For converting your Octopress blog to Ghost", long_about = None)]
struct Args {
    /// Path to the Octopress installation
    octopress_dir: Option<String>,

    /// Export file to create. Defaults to GhostData.json
    out_file: Option<String>,

    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Writes indented JSON
    #[arg(short, long)]
    pretty: bool,

    /// Logs debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn resolve_octopress_dir(args: &Args, config: &Config) -> Result<PathBuf> {
    let octopress_dir = args.octopress_dir.as_ref().map(PathBuf::from)
        .or_else(|| config.paths.octopress_dir.clone());

    let Some(octopress_dir) = octopress_dir else {
        bail!("You must specify the path to your Octopress installation, like this: octoghost /path/to/octopress");
    };

    let octopress_dir = expand_path(&octopress_dir)?;
    if !octopress_dir.is_dir() {
        bail!("You must specify the path to your Octopress installation. Not a directory: {}", octopress_dir.display());
    }

    Ok(octopress_dir)
}

fn resolve_out_file(args: &Args, config: &Config) -> Result<PathBuf> {
    let out_file = args.out_file.as_ref().map(PathBuf::from)
        .or_else(|| config.paths.output_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

    Ok(expand_path(&out_file)?)
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let octopress_dir = resolve_octopress_dir(args, config)?;
    let out_file = resolve_out_file(args, config)?;

    let post_list = PostList::from_octopress_dir(&octopress_dir, &config.export.post_extension);
    let posts_dir = post_list.root_dir.clone();
    if !posts_dir.is_dir() {
        bail!("Posts dir not found: {}", posts_dir.display());
    }

    let post_files = post_list.retrieve_files()?;
    if post_files.is_empty() {
        bail!("No post found in dir: {}", posts_dir.display());
    }

    info!("{} Octopress blog posts found. Importing...", post_files.len());

    let export = convert_files(&posts_dir, &post_files)
        .context("Import stopped, no export file was written")?;

    write_export(&export, &out_file, args.pretty || config.export.pretty)
}

fn write_export(export: &octoghost::export::ExportDocument, out_file: &Path, pretty: bool) -> Result<()> {
    export.write_to(out_file, pretty)?;
    info!("Export file created: {}", out_file.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config_path = args.config_path.as_ref().map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run octoghost --help");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = configure_logger(&config, args.verbose) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            spdlog::default_logger().flush();
            ExitCode::FAILURE
        }
    }
}
