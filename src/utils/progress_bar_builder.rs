use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static PROGRESS_HIDDEN: AtomicBool = AtomicBool::new(false);

/// Turns every bar built afterwards into a no-op (`--quiet`, tests).
pub fn hide_progress(hidden: bool) {
    PROGRESS_HIDDEN.store(hidden, Ordering::Relaxed);
}

pub(crate) struct ProgressBarBuilder {
    style_template: &'static str,
    message: String,
    length: Option<u64>,
    enable_tick: bool,
}

impl ProgressBarBuilder {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            style_template: "{spinner:.green} {msg}",
            message: message.into(),
            length: None,
            enable_tick: false,
        }
    }

    pub(crate) fn with_template(mut self, template: &'static str) -> Self {
        self.style_template = template;
        self
    }

    /// A bar instead of a spinner; the length may be set later.
    pub(crate) fn with_progress_bar(mut self) -> Self {
        self.length = Some(self.length.unwrap_or(0));
        self
    }

    pub(crate) fn with_tick(mut self) -> Self {
        self.enable_tick = true;
        self
    }

    pub(crate) fn build(self) -> Result<ProgressBar> {
        let pb = match self.length {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };

        if PROGRESS_HIDDEN.load(Ordering::Relaxed) {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }

        pb.set_style(ProgressStyle::default_spinner().template(self.style_template)?);
        pb.set_message(self.message);

        if self.enable_tick {
            pb.enable_steady_tick(Duration::from_millis(250));
        }

        Ok(pb)
    }
}
