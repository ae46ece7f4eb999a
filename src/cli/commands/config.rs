use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let path = cli.config.clone().unwrap_or_else(Config::config_file);
            if !path.exists() {
                Config::init_all(Some(path.as_path()), false)?;
            }
            edit(&path, editor.as_deref());
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

/// Open `path` in the requested editor, falling back to the default one.
fn edit(path: &Path, requested: Option<&str>) {
    let fallback = default_editor();
    let editor = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    if run_editor(&editor, path) {
        success(format!("Configuration file edited successfully using '{editor}'"));
        return;
    }

    warning(format!(
        "Editor '{editor}' not available, falling back to '{fallback}'"
    ));
    if run_editor(&fallback, path) {
        success(format!(
            "Configuration file edited successfully using fallback '{fallback}'"
        ));
    } else {
        error(format!(
            "Failed to edit configuration file using fallback '{fallback}'"
        ));
    }
}
