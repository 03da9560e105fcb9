//! Implementation of the `sprig list` command.

use sprig_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = TemplateService::new(config.template_registry()?);
    let templates = service.list();

    // The global JSON mode wins over the per-command format.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for line in table_lines(&templates) {
                output.print(&line)?;
            }
        }
        ListFormat::Json => {
            // Bypasses quiet mode: JSON must be parseable even in pipes.
            let json = serde_json::to_string_pretty(&templates).map_err(|e| {
                CliError::InvalidInput {
                    message: format!("cannot serialise template list: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;
            println!("{json}");
        }
        ListFormat::List => {
            for t in &templates {
                println!("{}", t.name);
            }
        }
    }

    Ok(())
}

fn table_lines(templates: &[TemplateInfo]) -> Vec<String> {
    let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
    templates
        .iter()
        .map(|t| {
            format!(
                "  {:<width$}  {:<5}  {}  ({})",
                t.name, t.kind, t.description, t.location
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> TemplateInfo {
        TemplateInfo {
            name: name.into(),
            description: "desc".into(),
            kind: "git",
            location: "https://example.com/x.git".into(),
        }
    }

    #[test]
    fn table_aligns_names() {
        let lines = table_lines(&[info("a"), info("longer-name")]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  a            git"));
        assert!(lines[1].contains("(https://example.com/x.git)"));
    }

    #[test]
    fn empty_table_is_empty() {
        assert!(table_lines(&[]).is_empty());
    }
}
