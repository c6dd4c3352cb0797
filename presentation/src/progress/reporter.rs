//! Progress reporting while waiting for the model

use biosense_application::ExchangeProgress;
use biosense_domain::Model;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while an exchange is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeProgress for ProgressReporter {
    fn on_exchange_start(&self, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Pensando... {}", format!("({})", model).dimmed()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_exchange_end(&self, _success: bool) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut s| s.take()) {
            pb.finish_and_clear();
        }
    }
}

/// Plain-text progress for terminals without spinner support
pub struct SimpleProgress;

impl ExchangeProgress for SimpleProgress {
    fn on_exchange_start(&self, model: &Model) {
        println!("{} Pensando... ({})", "->".cyan(), model);
    }

    fn on_exchange_end(&self, success: bool) {
        if !success {
            println!("  {} sin respuesta", "x".red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_is_cleared_after_exchange() {
        let reporter = ProgressReporter::new();
        reporter.on_exchange_start(&Model::default());
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_exchange_end(true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_end_without_start_is_harmless() {
        ProgressReporter::new().on_exchange_end(false);
    }
}
