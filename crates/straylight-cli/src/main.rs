mod config;
mod source;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use straylight_lexer::HighlightedLine;
use straylight_render::{RenderOptions, Theme};

use config::Settings;
use source::load_source;

#[derive(Parser)]
#[command(name = "straylight")]
#[command(about = "Straylight: render Lean 4 source as highlighted HTML")]
#[command(version)]
struct Cli {
    /// Settings file
    #[arg(long, global = true, env = "STRAYLIGHT_CONFIG", default_value = "straylight.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a .lean file to a standalone HTML page
    Render {
        /// Input .lean file
        path: PathBuf,

        /// Output file (defaults to <input>.html next to the source)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use category classes and a stylesheet instead of inline colors
        #[arg(long)]
        classes: bool,
    },

    /// Print every token as `line<TAB>category<TAB>text`
    Tokens {
        /// Input .lean file
        path: PathBuf,
    },

    /// Show or change the page theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current theme
    Get,
    /// Store a new theme (dark or light)
    Set { name: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("straylight=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            path,
            output,
            classes,
        } => cmd_render(&cli.config, &path, output, classes),
        Command::Tokens { path } => cmd_tokens(&path),
        Command::Theme { action } => cmd_theme(&cli.config, action.unwrap_or(ThemeAction::Get)),
    }
}

fn cmd_render(config: &Path, path: &Path, output: Option<PathBuf>, classes: bool) -> Result<()> {
    let settings = Settings::load(config)?;
    let theme = settings.theme()?;
    let source = load_source(path);

    let options = if classes {
        RenderOptions::classes()
    } else {
        RenderOptions::default()
    };
    let rendered = straylight_render::render(&source, &options);

    let title = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let page = straylight_render::render_page(&title, &rendered, theme);

    let out_path = output.unwrap_or_else(|| default_output_path(path));
    std::fs::write(&out_path, page)
        .with_context(|| format!("Error writing {}", out_path.display()))?;

    tracing::info!(
        lines = rendered.stats.lines,
        theorems = rendered.stats.theorems,
        "Rendered {}",
        path.display()
    );
    eprintln!("Built: {}", out_path.display());
    Ok(())
}

fn cmd_tokens(path: &Path) -> Result<()> {
    let source = load_source(path);
    let lines = straylight_lexer::highlight(&source);
    print!("{}", format_tokens(&lines));
    Ok(())
}

fn cmd_theme(config: &Path, action: ThemeAction) -> Result<()> {
    let mut settings = Settings::load(config)?;
    match action {
        ThemeAction::Get => {
            println!("{}", settings.theme()?);
        }
        ThemeAction::Set { name } => {
            let theme: Theme = name.parse()?;
            settings.set_theme(theme);
            settings.save(config)?;
            tracing::info!("Theme set to {theme} in {}", config.display());
        }
    }
    Ok(())
}

/// `Lemmas.lean` → `Lemmas.html` in the same directory.
fn default_output_path(path: &Path) -> PathBuf {
    path.with_extension("html")
}

/// One line per token, 1-based line numbers, control characters escaped.
fn format_tokens(lines: &[HighlightedLine<'_>]) -> String {
    let mut out = String::new();
    for line in lines {
        for token in &line.tokens {
            out.push_str(&format!(
                "{}\t{}\t{}\n",
                line.index + 1,
                token.category.name(),
                token.text.escape_debug()
            ));
        }
    }
    out
}
