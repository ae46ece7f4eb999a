use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `init` command
///
/// Writes the default configuration to `--config FILE` or to the standard
/// location. In test mode without `--config` nothing is written; the
/// defaults are printed instead.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { force } = &cli.command else {
        return Ok(());
    };

    if cli.test && cli.config.is_none() {
        println!("{}", serde_yaml::to_string(&Config::default())?);
        return Ok(());
    }

    let path = Config::init_all(cli.config.as_deref(), *force)?;
    info(format!(
        "Adjust the column positions in {} if your export uses a different layout.",
        path.display()
    ));
    Ok(())
}
