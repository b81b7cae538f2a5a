#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared CLI utilities for the wilayah toolchain.
//!
//! Provides an `indicatif`-backed progress bar behind the
//! [`ProgressCallback`] trait, plus [`init_logger`] which sets up
//! `indicatif-log-bridge` so that `log::info!` and friends are suspended
//! while progress bars redraw.

use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use wilayah_source::progress::ProgressCallback;

pub use indicatif::MultiProgress;

/// Terminal progress indicator for remote fan-outs.
pub struct IndicatifProgress {
    inner: ProgressBar,
    /// Applied when `set_total()` makes the length known.
    sized_style: ProgressStyle,
}

impl IndicatifProgress {
    /// Spinner showing `message` until the number of parents is known,
    /// then a bar counting fetched parents (one request per province).
    #[must_use]
    pub fn fetch_bar(multi: &MultiProgress, message: &str) -> Arc<dyn ProgressCallback> {
        let bar = multi.add(ProgressBar::new_spinner());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());

        let sized_style =
            ProgressStyle::with_template("  {msg:<40} {bar:30.cyan/dim} {pos:>3}/{len} [{eta}]")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> ");

        Arc::new(Self {
            inner: bar,
            sized_style,
        })
    }
}

impl ProgressCallback for IndicatifProgress {
    fn set_total(&self, total: u64) {
        self.inner.reset();
        self.inner.set_length(total);
        self.inner.set_style(self.sized_style.clone());
    }

    fn inc(&self, delta: u64) {
        self.inner.inc(delta);
    }

    fn set_message(&self, msg: String) {
        self.inner.set_message(msg);
    }

    fn finish(&self, msg: String) {
        self.inner.finish_with_message(msg);
    }

    fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}

/// Initializes the global logger wrapped in `indicatif-log-bridge` so that
/// `log::info!` and friends are suspended while progress bars redraw.
///
/// Returns the [`MultiProgress`] that all progress bars must be added to.
#[must_use]
pub fn init_logger() -> MultiProgress {
    let multi = MultiProgress::new();

    let logger = pretty_env_logger::formatted_builder()
        .parse_env("RUST_LOG")
        .build();
    let level = logger.filter();

    // Already set when called twice (e.g. from tests)
    indicatif_log_bridge::LogWrapper::new(multi.clone(), logger)
        .try_init()
        .ok();

    log::set_max_level(level);

    multi
}
