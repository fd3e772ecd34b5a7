use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::{ClientError, ClientResult};
use crate::models::{AnalysisResult, JournalEntry, JournalState, Operation, Settings};
use crate::services::analysis_scheduler::AnalysisScheduler;
use crate::services::journal_api::JournalApi;

/// Result of a spawned timer or request, applied on the controller's task.
#[derive(Debug)]
pub enum Completion {
    EntriesLoaded(ClientResult<Vec<JournalEntry>>),
    EntryCreated(ClientResult<JournalEntry>),
    EntryDeleted { id: String, result: ClientResult<()> },
    EntryFetched { id: String, result: ClientResult<JournalEntry> },
    AnalysisDue { token: u64, text: String },
    AnalysisFinished { token: u64, result: ClientResult<AnalysisResult> },
}

/// What applying a completion changed, for the caller to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    EntriesLoaded(usize),
    EntryCreated(String),
    EntryDeleted(String),
    EntryFetched(String),
    AnalysisStarted,
    AnalysisReady,
    Stale,
    Failed(Operation),
}

pub struct JournalController<A: JournalApi> {
    api: Arc<A>,
    state: JournalState,
    scheduler: AnalysisScheduler,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl<A: JournalApi> JournalController<A> {
    pub fn new(api: A, settings: &Settings) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            api: Arc::new(api),
            state: JournalState::default(),
            scheduler: AnalysisScheduler::new(&settings.analysis),
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &JournalState {
        &self.state
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    fn spawn_request<F, Fut>(&self, request: F)
    where
        F: FnOnce(Arc<A>) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Completion> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let completion = request(api).await;
            let _ = completions.send(completion);
        });
    }

    // ─── Entry list ───

    pub fn load_entries(&mut self) {
        self.spawn_request(|api| async move { Completion::EntriesLoaded(api.list_entries().await) });
    }

    pub fn fetch_entry(&mut self, selector: &str) -> ClientResult<()> {
        let id = self
            .state
            .resolve_entry_id(selector)
            .ok_or_else(|| ClientError::NotFound(selector.trim().to_string()))?;
        self.spawn_fetch(id);
        Ok(())
    }

    fn spawn_fetch(&self, id: String) {
        self.spawn_request(move |api| async move {
            let result = api.get_entry(&id).await;
            Completion::EntryFetched { id, result }
        });
    }

    // ─── Form ───

    pub fn toggle_form(&mut self) -> ClientResult<()> {
        if self.state.show_form {
            self.cancel_form()
        } else {
            self.open_form();
            Ok(())
        }
    }

    pub fn open_form(&mut self) {
        self.state.show_form = true;
    }

    /// Refused while a save is in flight: its completion resets the form.
    pub fn cancel_form(&mut self) -> ClientResult<()> {
        if self.state.loading {
            return Err(ClientError::Busy);
        }
        self.scheduler.invalidate();
        self.state.show_form = false;
        self.state.reset_form();
        // both notices refer to the draft that was just discarded
        self.state.clear_failure(&Operation::CreateEntry);
        self.state.clear_failure(&Operation::AnalyzeText);
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.form.title = title.into();
    }

    /// A content edit: restarts the analysis quiet period, or drops analysis for short text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.state.form.content = content.into();
        if self.scheduler.worth_analyzing(&self.state.form.content) {
            self.scheduler
                .schedule(self.state.form.content.clone(), self.completions_tx.clone());
        } else {
            self.scheduler.invalidate();
            self.state.analysis = None;
            self.state.analyzing = false;
            self.state.clear_failure(&Operation::AnalyzeText);
        }
    }

    pub fn append_content(&mut self, line: &str) {
        let mut content = self.state.form.content.clone();
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(line);
        self.set_content(content);
    }

    pub fn submit_form(&mut self) -> ClientResult<()> {
        if self.state.loading {
            return Err(ClientError::Busy);
        }
        if self.state.form.title.trim().is_empty() {
            return Err(ClientError::Validation("Title is required"));
        }
        if self.state.form.content.trim().is_empty() {
            return Err(ClientError::Validation("Content is required"));
        }

        self.state.loading = true;
        let request = self.state.form.to_request();
        log::debug!("Creating entry '{}'", request.title);
        self.spawn_request(|api| async move { Completion::EntryCreated(api.create_entry(request).await) });
        Ok(())
    }

    // ─── Delete ───

    pub fn request_delete(&mut self, selector: &str) -> ClientResult<()> {
        let id = self
            .state
            .resolve_entry_id(selector)
            .ok_or_else(|| ClientError::NotFound(selector.trim().to_string()))?;
        self.state.pending_delete = Some(id);
        Ok(())
    }

    pub fn dismiss_delete(&mut self) {
        self.state.pending_delete = None;
    }

    /// Returns false when there was nothing waiting for confirmation.
    pub fn confirm_delete(&mut self) -> bool {
        match self.state.pending_delete.take() {
            Some(id) => {
                self.spawn_delete(id);
                true
            }
            None => false,
        }
    }

    fn spawn_delete(&self, id: String) {
        self.spawn_request(move |api| async move {
            let result = api.delete_entry(&id).await;
            Completion::EntryDeleted { id, result }
        });
    }

    // ─── Retry ───

    /// Re-issues the operation behind the current failure notice.
    pub fn retry(&mut self) -> ClientResult<Option<Operation>> {
        let Some(failure) = self.state.failure.take() else {
            return Ok(None);
        };
        let operation = failure.operation.clone();
        let reissued = match &operation {
            Operation::ListEntries => {
                self.load_entries();
                Ok(())
            }
            Operation::CreateEntry => self.submit_form(),
            Operation::DeleteEntry { id } => {
                self.spawn_delete(id.clone());
                Ok(())
            }
            Operation::AnalyzeText => {
                let content = self.state.form.content.clone();
                if !self.scheduler.worth_analyzing(&content) {
                    log::debug!("Dropping analysis retry, content is too short");
                    return Ok(None);
                }
                self.set_content(content);
                Ok(())
            }
            Operation::FetchEntry { id } => {
                self.spawn_fetch(id.clone());
                Ok(())
            }
        };
        if let Err(e) = reissued {
            self.state.failure = Some(failure);
            return Err(e);
        }
        Ok(Some(operation))
    }

    // ─── Completions ───

    /// Waits for the next completion and applies it. Cancel-safe.
    pub async fn next_update(&mut self) -> Option<Update> {
        let completion = self.completions_rx.recv().await?;
        Some(self.apply(completion))
    }

    fn fail(&mut self, operation: Operation, error: ClientError) -> Update {
        log::error!("Failed to {}: {}", operation.describe(), error);
        self.state.record_failure(operation.clone(), error.to_string());
        Update::Failed(operation)
    }

    fn apply(&mut self, completion: Completion) -> Update {
        match completion {
            Completion::EntriesLoaded(Ok(entries)) => {
                let count = entries.len();
                self.state.entries = entries;
                let prompt_vanished = self
                    .state
                    .pending_delete
                    .as_deref()
                    .is_some_and(|id| self.state.find_entry(id).is_none());
                if prompt_vanished {
                    self.state.pending_delete = None;
                }
                self.state.clear_failure(&Operation::ListEntries);
                log::info!("Loaded {} journal entries", count);
                Update::EntriesLoaded(count)
            }
            Completion::EntriesLoaded(Err(e)) => self.fail(Operation::ListEntries, e),

            Completion::EntryCreated(Ok(entry)) => {
                self.state.loading = false;
                let id = entry.id.clone();
                self.state.entries.insert(0, entry);
                self.scheduler.invalidate();
                self.state.show_form = false;
                self.state.reset_form();
                self.state.clear_failure(&Operation::CreateEntry);
                log::info!("Created journal entry {}", id);
                Update::EntryCreated(id)
            }
            Completion::EntryCreated(Err(e)) => {
                self.state.loading = false;
                self.fail(Operation::CreateEntry, e)
            }

            Completion::EntryDeleted { id, result: Ok(()) } => {
                self.state.entries.retain(|entry| entry.id != id);
                self.state.clear_failure(&Operation::DeleteEntry { id: id.clone() });
                log::info!("Deleted journal entry {}", id);
                Update::EntryDeleted(id)
            }
            Completion::EntryDeleted { id, result: Err(e) } => self.fail(Operation::DeleteEntry { id }, e),

            Completion::EntryFetched { id, result: Ok(entry) } => {
                if let Some(cached) = self.state.entries.iter_mut().find(|e| e.id == id) {
                    *cached = entry;
                }
                self.state.clear_failure(&Operation::FetchEntry { id: id.clone() });
                Update::EntryFetched(id)
            }
            Completion::EntryFetched { id, result: Err(e) } => self.fail(Operation::FetchEntry { id }, e),

            Completion::AnalysisDue { token, text } => {
                if !self.scheduler.is_current(token) {
                    return Update::Stale;
                }
                self.state.analyzing = true;
                self.spawn_request(move |api| async move {
                    let result = api.analyze_text(&text).await;
                    Completion::AnalysisFinished { token, result }
                });
                Update::AnalysisStarted
            }
            Completion::AnalysisFinished { token, result } => {
                if !self.scheduler.is_current(token) {
                    log::debug!("Discarding stale analysis response (token {})", token);
                    return Update::Stale;
                }
                self.state.analyzing = false;
                match result {
                    Ok(analysis) => {
                        self.state.analysis = Some(analysis);
                        self.state.clear_failure(&Operation::AnalyzeText);
                        Update::AnalysisReady
                    }
                    Err(e) => self.fail(Operation::AnalyzeText, e),
                }
            }
        }
    }
}
