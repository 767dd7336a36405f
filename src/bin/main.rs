extern crate rust_raycaster as root;

use root::parsing::config::{Config, TOMLConfig};
use root::parsing::{get_settings, load_scene};
use root::renderer::{NaiveRenderer, Renderer};

use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::Context;
use structopt::StructOpt;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "warn")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        "off" => LevelFilter::OFF,
        _ => default,
    }
}

fn init_logging(opts: &Opt) -> anyhow::Result<()> {
    let term_log_level = parse_log_level(&opts.print_log_level, LevelFilter::WARN);
    let write_log_level = parse_log_level(&opts.write_log_level, LevelFilter::INFO);
    let log_file = File::create("main.log").context("couldn't create main.log")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(term_log_level),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .with_filter(write_log_level),
        )
        .try_init()
        .context("couldn't install the logger")?;
    Ok(())
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config: TOMLConfig = get_settings(&opts.config_file)
        .with_context(|| format!("couldn't read {}", opts.config_file))?;

    let threads = config
        .render_settings
        .iter()
        .map(|i| &i.threads)
        .fold(1, |a, &b| a.max(b.unwrap_or(1)));
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()
        .context("couldn't build the render thread pool")?;

    // override scene file based on provided command line argument
    if let Some(scene_file) = opts.scene_file {
        config.default_scene_file = scene_file;
    }
    let config = Config::from(config);

    let world = load_scene(&config.scene_file)
        .with_context(|| format!("fatal error parsing scene {}, aborting", config.scene_file))?;

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }
    NaiveRenderer::new().render(world, &config)
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    if let Err(e) = init_logging(&opts) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }
    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
