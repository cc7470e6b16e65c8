//! Command dispatch: one function per subcommand.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::arena::{Outline, DEFAULT_LANG};
use crate::builder::OutlineBuilder;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, Settings};
use crate::errors::OutlineError;
use crate::markup::to_markup;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Build {
            source,
            output,
            lang,
        } => _build(source, output.as_deref(), lang.as_deref()),
        Commands::Tree { source } => _tree(source),
        Commands::Trace { source } => _trace(source),
        Commands::Config { command } => _config(command),
        Commands::Completion { shell } => _completion(*shell),
    }
}

#[instrument]
fn _build(source: &Path, target: Option<&Path>, lang: Option<&str>) -> CliResult<()> {
    debug!("source: {:?}, target: {:?}, lang: {:?}", source, target, lang);
    let fallback = resolve_lang(lang)?;
    let outline = load_outline(source, &fallback)?;
    let markup = to_markup(&outline);

    match target {
        Some(path) => {
            fs::write(path, &markup).map_err(|e| CliError::Output {
                path: path.to_path_buf(),
                source: e,
            })?;
            output::success(&format!(
                "wrote {} ({} topics)",
                path.display(),
                outline.len()
            ));
        }
        None => print!("{}", markup),
    }
    Ok(())
}

#[instrument]
fn _tree(source: &Path) -> CliResult<()> {
    let fallback = resolve_lang(None)?;
    let outline = load_outline(source, &fallback)?;
    println!("{}", outline.to_display_tree());
    Ok(())
}

#[instrument]
fn _trace(source: &Path) -> CliResult<()> {
    let outline = load_outline(source, DEFAULT_LANG)?;
    for id in outline.trace() {
        println!("{}", id);
    }
    Ok(())
}

#[instrument]
fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            print!("{}", settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", require_config_path()?.display());
            Ok(())
        }
        ConfigCommands::Init => {
            let path = require_config_path()?;
            if path.exists() {
                output::warning(&format!(
                    "{} already exists, leaving it untouched",
                    path.display()
                ));
                return Ok(());
            }
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).map_err(|e| CliError::Output {
                    path: dir.to_path_buf(),
                    source: e,
                })?;
            }
            fs::write(&path, Settings::template()).map_err(|e| CliError::Output {
                path: path.clone(),
                source: e,
            })?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}

#[instrument]
fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Read the source file and run the one-pass build.
fn load_outline(source: &Path, fallback_lang: &str) -> CliResult<Outline> {
    let content = fs::read_to_string(source).map_err(|e| CliError::Input {
        path: source.to_path_buf(),
        source: e,
    })?;
    let outline = OutlineBuilder::build_from_lines_with_lang(content.lines(), fallback_lang)?;
    debug!(
        "built outline: {} topics, depth {}",
        outline.len(),
        outline.depth()
    );
    Ok(outline)
}

/// Effective fallback language: a valid --lang flag wins, otherwise the
/// layered settings decide.
fn resolve_lang(flag: Option<&str>) -> CliResult<String> {
    match flag {
        Some(tag) if config::is_lang_code(tag) => Ok(tag.to_string()),
        Some(tag) => Err(CliError::InvalidLang(tag.to_string())),
        None => Ok(Settings::load()?.default_lang),
    }
}

fn require_config_path() -> CliResult<PathBuf> {
    config::global_config_path().ok_or_else(|| {
        CliError::Outline(OutlineError::Config {
            message: "cannot determine the user config directory".to_string(),
        })
    })
}
