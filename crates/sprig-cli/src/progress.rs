//! Terminal rendering of workflow progress.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use sprig_core::{
    application::ports::{CreationObserver, ProgressReporter},
    domain::CreationEvent,
};

use crate::output::OutputManager;

/// Spinner on an interactive terminal, plain lines everywhere else.
pub struct SpinnerReporter {
    output: OutputManager,
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            spinner: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {prefix} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl ProgressReporter for SpinnerReporter {
    fn step(&self, icon: &str, message: &str) {
        if !self.output.is_interactive() {
            if let Err(e) = self.output.print(&format!("{icon}  {message}")) {
                debug!(error = %e, "progress line not written");
            }
            return;
        }

        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        let bar = slot.get_or_insert_with(|| {
            let bar = ProgressBar::new_spinner().with_style(Self::style());
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        });
        bar.set_prefix(icon.to_owned());
        bar.set_message(message.to_owned());
    }

    fn finish(&self) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(bar) = slot.take() {
            bar.finish_and_clear();
        }
    }

    fn success(&self, message: &str) {
        let result = self
            .output
            .print("")
            .and_then(|()| self.output.print(message))
            .and_then(|()| self.output.print(""));
        if let Err(e) = result {
            debug!(error = %e, "success line not written");
        }
    }

    fn warning(&self, message: &str) {
        if let Err(e) = self.output.warning(message) {
            debug!(error = %e, "warning not written");
        }
    }
}

impl Drop for SpinnerReporter {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Prints each event as a JSON line for `--output-format json`.
pub struct JsonEventObserver {
    output: OutputManager,
}

impl JsonEventObserver {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl CreationObserver for JsonEventObserver {
    fn on_event(&self, event: &CreationEvent) {
        if let Err(e) = self.output.json(event) {
            debug!(error = %e, %event, "event not written");
        }
    }
}
