use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use planit::config::{ConfigError, EditorConfig};
use planit::engine::Editor;
use planit::geom::Size;
use planit::render::{JsonLinesSink, RenderError};
use planit::script::{self, ScriptError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot open script {path}: {source}")]
    OpenScript { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Replay a floor-plan command script and print one JSON frame per render.
#[derive(Parser, Debug)]
#[command(name = "planit", about = "Headless 2D floor-plan layout engine")]
struct Cli {
    /// JSON-lines command script; reads stdin when omitted.
    script: Option<PathBuf>,

    /// Canvas width (overrides PLANIT_CANVAS_WIDTH).
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    width: Option<i32>,

    /// Canvas height (overrides PLANIT_CANVAS_HEIGHT).
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    height: Option<i32>,

    /// Placement search cap (overrides PLANIT_MAX_PLACEMENT_ATTEMPTS).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_placement_attempts: Option<u32>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let mut config = EditorConfig::from_env()?;
    config.canvas = Size::new(
        cli.width.unwrap_or(config.canvas.width),
        cli.height.unwrap_or(config.canvas.height),
    );
    if let Some(attempts) = cli.max_placement_attempts {
        config.max_placement_attempts = attempts;
    }

    let commands = match &cli.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::OpenScript { path: path.clone(), source })?;
            script::parse_script(BufReader::new(file))?
        }
        None => script::parse_script(io::stdin().lock())?,
    };
    tracing::info!(commands = commands.len(), "script loaded");

    let mut editor = Editor::open(&config, JsonLinesSink::new(io::stdout().lock()))?;
    for command in &commands {
        editor.apply(command)?;
    }

    tracing::info!(rooms = editor.session.rooms().len(), "script finished");
    Ok(())
}
