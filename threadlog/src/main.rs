mod cli;

use crate::cli::demo::{DemoOptions, run_demo};
use crate::cli::render::run_render;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use threadlog_core::logging::{default_render_mode, init_logging, init_pretty_logging};
use threadlog_core::{EngineConfig, RenderMode};

#[derive(Parser, Debug)]
#[command(
    name = "threadlog",
    version,
    about = "threadlog: per-request log aggregation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render thread records read as JSON lines from stdin
    Render {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Push simulated requests and sessions through an engine
    Demo {
        #[arg(long, default_value_t = 20)]
        requests: usize,

        #[arg(long, default_value_t = 4)]
        workers: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate an engine config file
    CheckConfig {
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    #[arg(long)]
    pretty: bool,

    #[arg(long)]
    terse: bool,

    #[arg(long)]
    raw: bool,

    /// Path to an HCL engine config file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl OutputArgs {
    fn load_config(&self) -> Result<Option<EngineConfig>> {
        self.config.as_deref().map(load_config).transpose()
    }

    fn mode(&self, config: Option<&EngineConfig>) -> RenderMode {
        if self.raw {
            RenderMode::Raw
        } else if self.terse {
            RenderMode::Terse
        } else if self.pretty {
            RenderMode::Pretty
        } else {
            config
                .map(|c| c.render)
                .unwrap_or_else(default_render_mode)
        }
    }
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    EngineConfig::from_file(path)
        .with_context(|| format!("failed to load config {}", path.display()))
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render { output } => {
            let config = output.load_config()?;
            let mode = output.mode(config.as_ref());
            let config = config.unwrap_or_default();

            run_render(mode, &config.path_marker)
        }

        Command::Demo {
            requests,
            workers,
            output,
        } => {
            let config = output.load_config()?;
            let mode = output.mode(config.as_ref());

            match mode {
                RenderMode::Pretty => init_pretty_logging(),
                _ => init_logging(),
            }

            run_demo(DemoOptions {
                requests,
                workers,
                mode,
                config: config.unwrap_or_default(),
            })
        }

        Command::CheckConfig { path } => {
            let config = load_config(&path)?;
            println!("{config:#?}");
            Ok(())
        }
    }
}
