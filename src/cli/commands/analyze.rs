use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyze;
use crate::errors::AppResult;
use crate::source::load_rows;
use crate::ui::report::{ReportOptions, print_json, print_report};

/// Handle the `analyze` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        file,
        sheet,
        label,
        lang,
        bookings,
        json,
    } = cmd
    {
        // CLI flags win over the configuration file for this run
        let mut cfg = cfg.clone();
        if let Some(label) = label {
            cfg.home_office_label = label.clone();
        }
        if let Some(lang) = lang {
            cfg.month_language = *lang;
        }
        cfg.validate()?;

        let rows = load_rows(file, &cfg, sheet.as_deref())?;
        let analysis = analyze(&rows, &cfg.home_office_label);

        if *json {
            print_json(&analysis)?;
        } else {
            let opts = ReportOptions {
                show_bookings: *bookings,
                language: cfg.month_language,
                separator: cfg.separator(),
            };
            print_report(&analysis, &opts);
        }
    }
    Ok(())
}
