use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::models::AnalysisSettings;
use crate::services::controller::Completion;
use crate::utils::trimmed_char_count;

/// Debounce timer and request token for live content analysis, owned by one controller.
pub struct AnalysisScheduler {
    delay: Duration,
    min_chars: usize,
    pending: Option<JoinHandle<()>>,
    latest_token: u64,
}

impl AnalysisScheduler {
    pub fn new(settings: &AnalysisSettings) -> Self {
        Self {
            delay: Duration::from_millis(settings.debounce_ms),
            min_chars: settings.min_chars,
            pending: None,
            latest_token: 0,
        }
    }

    pub fn worth_analyzing(&self, text: &str) -> bool {
        trimmed_char_count(text) >= self.min_chars
    }

    /// Restarts the quiet period; only the newest timer can post `AnalysisDue`.
    pub fn schedule(&mut self, text: String, completions: UnboundedSender<Completion>) -> u64 {
        let token = self.invalidate();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = completions.send(Completion::AnalysisDue { token, text });
        }));
        token
    }

    /// Cancels the pending timer and orphans any request still in flight.
    pub fn invalidate(&mut self) -> u64 {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.latest_token += 1;
        self.latest_token
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest_token
    }
}

impl Drop for AnalysisScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
