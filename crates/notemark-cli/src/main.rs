use anyhow::{Context, Result, bail};
use clap::Parser;
use notemark_config::{Config, OutputFormat};
use notemark_engine::{Ast, ParseOptions, parse_bytes, render_html, render_string, restore, wire};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "notemark")]
#[command(about = "Parse a notemark document and print one projection of it")]
struct Args {
    /// File to read; standard input when omitted
    file: Option<PathBuf>,

    /// Output projection: html, text, markdown, json, tags or properties
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Nesting limit for quotes and bold
    #[arg(long)]
    max_depth: Option<usize>,

    /// Config file to use instead of ~/.config/notemark/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the given --format and --max-depth to the config file and exit
    #[arg(long)]
    write_config: bool,
}

/// Settings after layering flags over the config file over defaults.
#[derive(Debug, PartialEq)]
struct Settings {
    format: OutputFormat,
    options: ParseOptions,
}

impl Settings {
    fn resolve(args: &Args, config: Option<Config>) -> Self {
        let config = config.unwrap_or_default();
        let mut options = ParseOptions::default();
        if let Some(max_depth) = args.max_depth.or(config.max_depth) {
            options.max_depth = max_depth;
        }
        Settings {
            format: args.format.unwrap_or(config.format),
            options,
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Option<Config>> {
    let Some(path) = explicit else {
        let config_path = Config::config_path();
        log::debug!("Config path: {}", config_path.display());
        return Ok(Config::load()?);
    };
    let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
    match Config::load_from_path(&path)? {
        Some(config) => Ok(Some(config)),
        None => bail!("config file '{}' does not exist", path.display()),
    }
}

/// Merge the format and depth flags into the config file, creating it if needed.
fn write_config(args: &Args) -> Result<PathBuf> {
    let path = match &args.config {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.clone()),
        None => Config::config_path(),
    };
    let existing = Config::load_from_path(&path)?.unwrap_or_default();
    let config = Config {
        format: args.format.unwrap_or(existing.format),
        max_depth: args.max_depth.or(existing.max_depth),
    };
    config
        .save_to_path(&path)
        .with_context(|| format!("failed to write config '{}'", path.display()))?;
    Ok(path)
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("failed to read standard input")?;
            Ok(bytes)
        }
    }
}

fn project(ast: &Ast, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Html => render_html(ast),
        OutputFormat::Text => render_string(ast),
        OutputFormat::Markdown => restore(ast),
        OutputFormat::Json => wire::to_json(ast)?,
        OutputFormat::Tags => ast
            .properties()
            .tags
            .into_iter()
            .map(|tag| format!("{tag}\n"))
            .collect(),
        OutputFormat::Properties => serde_json::to_string_pretty(&ast.properties())?,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    if args.write_config {
        let path = write_config(&args)?;
        log::info!("Wrote config to {}", path.display());
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config);
    log::debug!("settings: {settings:?}");

    let bytes = read_input(args.file.as_deref())?;
    let ast = parse_bytes(&bytes, &settings.options).with_context(|| match &args.file {
        Some(path) => format!("failed to parse '{}'", path.display()),
        None => "failed to parse standard input".to_string(),
    })?;

    let output = project(&ast, settings.format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if matches!(
        settings.format,
        OutputFormat::Html | OutputFormat::Json | OutputFormat::Properties
    ) {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
