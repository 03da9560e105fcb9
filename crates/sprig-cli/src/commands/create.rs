//! Implementation of the `sprig create` command.
//!
//! Responsibility: translate CLI arguments and config into a
//! `CreationContext`, wire the adapters into a `Creator`, and display the
//! result. The workflow itself lives in `sprig-core`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use sprig_adapters::{GitProbe, LocalFilesystem, SourceMaterializer, SystemProcessRunner};
use sprig_core::{
    application::{ApplicationError, Creator, GitLifecycle, TemplateInfo, TemplateService},
    domain::{CreationContext, CreationEvent, CreationReport, GitCommitOutcome, TemplateRef},
    error::SprigError,
};

use crate::{
    cli::{CreateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    progress::{JsonEventObserver, SpinnerReporter},
};

/// Execute the `sprig create` command.
///
/// Dispatch sequence:
/// 1. Resolve the parent directory and validate the project name
/// 2. Pick the template (flag, config default, or interactive picker)
/// 3. Describe the template source without fetching it
/// 4. Refuse a non-empty target unless `--force`
/// 5. Confirm with user unless `--yes`, `--quiet`, or non-interactive
/// 6. Early-exit if `--dry-run`
/// 7. Run the `Creator`
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Where
    let parent = resolve_parent_directory(args.directory.as_deref(), &config)?;
    let context = CreationContext::new(args.name.as_str(), parent.join(&args.name))
        .map_err(SprigError::from)?;
    let target = context.target_directory().to_path_buf();

    // 2. What
    let service = TemplateService::new(config.template_registry()?);
    let template = select_template(args.template.as_deref(), &config, &service, &output)?;

    // 3. Fail fast on references nothing can fetch.
    let info = service.describe(&template)?;
    debug!(kind = info.kind, location = %info.location, "template source");

    // 4. Existing target
    if !args.force && !is_empty_or_missing(&target)? {
        return Err(SprigError::from(ApplicationError::ProjectExists { path: target }).into());
    }

    let git_enabled = config.git.enabled && !args.no_git;

    // 5. Confirm
    if !args.yes && !global.quiet && output.is_interactive() && !args.dry_run {
        show_plan(&context, &info, git_enabled, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 6. Dry run: describe but do not write.
    if args.dry_run {
        if output.is_json() {
            output.json(&serde_json::json!({
                "dry_run": true,
                "project": context.project_name(),
                "target": context.target_directory(),
                "template": info,
                "git": git_enabled,
            }))?;
        } else {
            output.info(&format!(
                "Dry run: would create '{}' at {}",
                context.project_name(),
                target.display(),
            ))?;
            show_plan(&context, &info, git_enabled, &output)?;
        }
        return Ok(());
    }

    // 7. Create
    output.clear()?;
    info!(
        id = %context.id(),
        template = %template,
        path = %target.display(),
        "Creation started"
    );

    let git = GitLifecycle::new(
        Box::new(GitProbe::new()),
        Box::new(SystemProcessRunner::new()),
    )
    .enabled(git_enabled);

    let mut creator = Creator::new(
        context,
        template,
        Box::new(SourceMaterializer::new(service.registry().clone())),
        Box::new(LocalFilesystem::new()),
        git,
    )
    .subscribe(|event: &CreationEvent| debug!(%event, "creation event"));

    creator = if output.is_json() {
        creator.subscribe(JsonEventObserver::new(output.clone()))
    } else {
        creator.with_reporter(SpinnerReporter::new(output.clone()))
    };

    let report = creator.create()?;
    info!(
        files = report.files_copied,
        git = report.git_initialized,
        elapsed_ms = (report.finished_at - report.started_at).num_milliseconds(),
        "Creation completed"
    );

    print_report(&report, &output)
}

// ── Inputs ────────────────────────────────────────────────────────────────────

/// `--directory`, then `defaults.directory`, then the current directory.
fn resolve_parent_directory(flag: Option<&Path>, config: &AppConfig) -> CliResult<PathBuf> {
    match flag.or(config.defaults.directory.as_deref()) {
        Some(dir) => Ok(expand_home(dir)),
        None => std::env::current_dir().with_cli_context(|| "cannot read current directory"),
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match directories::BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => path.to_path_buf(),
    }
}

fn select_template(
    flag: Option<&str>,
    config: &AppConfig,
    service: &TemplateService,
    output: &OutputManager,
) -> CliResult<TemplateRef> {
    if let Some(reference) = flag.or(config.defaults.template.as_deref()) {
        return Ok(TemplateRef::new(reference).map_err(SprigError::from)?);
    }
    if !output.is_interactive() {
        return Err(CliError::NoTemplate);
    }
    pick_template(service)
}

#[cfg(feature = "interactive")]
fn pick_template(service: &TemplateService) -> CliResult<TemplateRef> {
    use dialoguer::{FuzzySelect, theme::ColorfulTheme};

    let templates = service.list();
    if templates.is_empty() {
        return Err(CliError::NoTemplate);
    }
    let items: Vec<String> = templates
        .iter()
        .map(|t| format!("{:<16} {}", t.name, t.description))
        .collect();

    let choice = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Pick a template")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| CliError::InvalidInput {
            message: format!("template selection failed: {e}"),
            source: Some(Box::new(e)),
        })?
        .ok_or(CliError::Cancelled)?;

    Ok(TemplateRef::new(templates[choice].name.as_str()).map_err(SprigError::from)?)
}

#[cfg(not(feature = "interactive"))]
fn pick_template(_service: &TemplateService) -> CliResult<TemplateRef> {
    Err(CliError::NoTemplate)
}

fn is_empty_or_missing(path: &Path) -> CliResult<bool> {
    if !path.exists() {
        return Ok(true);
    }
    if !path.is_dir() {
        return Ok(false);
    }
    let mut entries =
        std::fs::read_dir(path).with_cli_context(|| format!("cannot read {}", path.display()))?;
    Ok(entries.next().is_none())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(
    context: &CreationContext,
    template: &TemplateInfo,
    git_enabled: bool,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", context.project_name()))?;
    out.print(&format!("  Location:  {}", context.target_directory().display()))?;
    out.print(&format!(
        "  Template:  {} ({} {})",
        template.name, template.kind, template.location
    ))?;
    out.print(&format!(
        "  Git:       {}",
        if git_enabled {
            "init + initial commit"
        } else {
            "skipped"
        }
    ))?;
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    use dialoguer::{Confirm, theme::ColorfulTheme};

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("confirmation failed: {e}"),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

fn print_report(report: &CreationReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    if !output.is_quiet() {
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.target_directory.display()))?;
        if report.commit == GitCommitOutcome::FailedNonFatal {
            output.print("  git commit -m init")?;
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
