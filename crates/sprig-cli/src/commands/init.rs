//! `sprig init` - create a default configuration file.

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "\
# Sprig configuration.
#
# [defaults]
# template = \"vue\"          # used when --template is omitted
# directory = \"~/code\"      # parent directory for new projects
#
# [templates.my-starter]
# description = \"Team starter\"
# repository = \"git@example.com:web/starter.git\"
# branch = \"stable\"
#
# Any key can be overridden from the environment, e.g. SPRIG_GIT__ENABLED=false

";

/// Create a default Sprig configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::config_path();
    output.info(&format!("Initialising configuration at {}", config_path.display()))?;

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let body = AppConfig::default().to_toml()?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, format!("{HEADER}{body}")).with_cli_context(|| {
        format!("Failed to write config to '{}'", config_path.display())
    })?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_file_parses_back_to_defaults() {
        let body = AppConfig::default().to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&format!("{HEADER}{body}")).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
