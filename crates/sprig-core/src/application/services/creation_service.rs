//! Creation Service - the end-to-end workflow controller.
//!
//! This service coordinates one creation run:
//! 1. Resolve the template to a local directory
//! 2. Copy it into the target directory
//! 3. Initialize git when the tool is present and the target is not a repo
//! 4. Stage and commit (non-fatal on failure)
//! 5. Report success and emit `done`
//!
//! Steps run strictly in order; each one blocks on its external operation.

use chrono::Utc;
use tracing::{debug, error, info, info_span, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{
            CreationObserver, NullReporter, ProgressReporter, ProjectFilesystem,
            TemplateMaterializer,
        },
        services::git_service::GitLifecycle,
    },
    domain::{
        CreationContext, CreationEvent, CreationReport, CreationStage, GitCommitOutcome,
        TemplateRef,
    },
    error::{SprigError, SprigResult},
};

/// Printed after a successful run when the initial commit could not be made.
pub const COMMIT_SKIPPED_WARNING: &str = "Skipped git commit due to missing username and email in git config.\n\
     You will need to perform the initial commit yourself.\n";

/// Drives a single creation run from template to committed project.
///
/// Built once per run; [`Creator::create`] consumes it.
pub struct Creator {
    context: CreationContext,
    template: TemplateRef,
    materializer: Box<dyn TemplateMaterializer>,
    filesystem: Box<dyn ProjectFilesystem>,
    git: GitLifecycle,
    reporter: Box<dyn ProgressReporter>,
    observers: Vec<Box<dyn CreationObserver>>,
}

impl Creator {
    /// Create a new creator with the given adapters.
    ///
    /// Output goes to a [`NullReporter`] until [`Creator::with_reporter`] is
    /// called.
    pub fn new(
        context: CreationContext,
        template: TemplateRef,
        materializer: Box<dyn TemplateMaterializer>,
        filesystem: Box<dyn ProjectFilesystem>,
        git: GitLifecycle,
    ) -> Self {
        Self {
            context,
            template,
            materializer,
            filesystem,
            git,
            reporter: Box::new(NullReporter),
            observers: Vec::new(),
        }
    }

    pub fn with_reporter(mut self, reporter: impl ProgressReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Register a listener. Every listener sees every event, in order.
    pub fn subscribe(mut self, observer: impl CreationObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn context(&self) -> &CreationContext {
        &self.context
    }

    /// Run the workflow.
    ///
    /// Returns an error for the fatal failures (resolution, copy, `git init`).
    /// A failed commit is reported in [`CreationReport::commit`] instead.
    pub fn create(self) -> SprigResult<CreationReport> {
        let span = info_span!(
            "create",
            id = %self.context.id(),
            project = %self.context.project_name(),
            template = %self.template,
        );
        let _enter = span.enter();

        let result = self.run();
        if let Err(e) = &result {
            self.reporter.finish();
            error!(error = %e, "creation aborted");
        }
        result
    }

    fn run(&self) -> SprigResult<CreationReport> {
        let started_at = Utc::now();
        let target = self.context.target_directory();

        self.reporter.step(
            "\u{2728}",
            &format!("Creating project in {}.", target.display()),
        );

        // ── Resolving ──────────────────────────────────────────────────────
        self.enter(CreationStage::Resolving);
        let template = self.materializer.materialize(&self.template)?;
        info!(root = %template.root().display(), "template resolved");

        // ── Copying ────────────────────────────────────────────────────────
        self.enter(CreationStage::Copying);
        let files_copied = self
            .filesystem
            .copy_tree(template.root(), target)
            .map_err(|e| copy_error(e, template.root(), target))?;
        info!(files = files_copied, "template copied");
        drop(template);

        // ── VersionControlInit ─────────────────────────────────────────────
        self.enter(CreationStage::VersionControlInit);
        let git_initialized = self.git.should_initialize(target);
        if git_initialized {
            self.reporter
                .step("\u{1f5c3}", "Initializing git repository...");
            self.emit(CreationEvent::GitInit);
            self.git.init(target)?;
        }
        self.reporter.finish();

        // ── CommitInit ─────────────────────────────────────────────────────
        let commit = if git_initialized {
            self.enter(CreationStage::CommitInit);
            self.git.commit_initial(target)
        } else {
            GitCommitOutcome::NotAttempted
        };

        // ── Finalizing ─────────────────────────────────────────────────────
        self.enter(CreationStage::Finalizing);
        self.reporter.finish();
        self.reporter.success(&format!(
            "\u{1f389}  Successfully created project {}.",
            self.context.project_name()
        ));
        self.emit(CreationEvent::Done);
        if commit.failed() {
            warn!("initial commit failed, user must commit manually");
            self.reporter.warning(COMMIT_SKIPPED_WARNING);
        }

        Ok(CreationReport {
            project_name: self.context.project_name().clone(),
            target_directory: target.to_path_buf(),
            files_copied,
            git_initialized,
            commit,
            started_at,
            finished_at: Utc::now(),
        })
    }

    fn enter(&self, stage: CreationStage) {
        debug!(%stage, "entering stage");
    }

    fn emit(&self, event: CreationEvent) {
        debug!(%event, observers = self.observers.len(), "emitting event");
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }
}

/// Anything the filesystem port returns while copying becomes `CopyFailed`.
fn copy_error(err: SprigError, from: &std::path::Path, to: &std::path::Path) -> SprigError {
    match err {
        SprigError::Application(ApplicationError::CopyFailed { .. }) => err,
        other => ApplicationError::CopyFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            reason: other.to_string(),
        }
        .into(),
    }
}
