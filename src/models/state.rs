use crate::models::{AnalysisResult, FormData, JournalEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FormOpen,
    Submitting,
}

/// Remote operation whose failure is shown to the user, with what `retry` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListEntries,
    CreateEntry,
    DeleteEntry { id: String },
    AnalyzeText,
    FetchEntry { id: String },
}

impl Operation {
    pub fn describe(&self) -> &'static str {
        match self {
            Operation::ListEntries => "load entries",
            Operation::CreateEntry => "save entry",
            Operation::DeleteEntry { .. } => "delete entry",
            Operation::AnalyzeText => "analyze content",
            Operation::FetchEntry { .. } => "fetch entry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailure {
    pub operation: Operation,
    pub message: String,
}

/// Session view state. Mutated only by the controller.
#[derive(Debug, Clone, Default)]
pub struct JournalState {
    /// Newest first.
    pub entries: Vec<JournalEntry>,
    pub show_form: bool,
    pub form: FormData,
    pub loading: bool,
    pub analysis: Option<AnalysisResult>,
    pub analyzing: bool,
    pub pending_delete: Option<String>,
    pub failure: Option<OperationFailure>,
}

impl JournalState {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Submitting
        } else if self.show_form {
            Phase::FormOpen
        } else {
            Phase::Idle
        }
    }

    pub fn find_entry(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Accepts a 1-based timeline index or an entry id.
    pub fn resolve_entry_id(&self, selector: &str) -> Option<String> {
        let selector = selector.trim();
        if let Ok(index) = selector.parse::<usize>() {
            if let Some(entry) = index.checked_sub(1).and_then(|i| self.entries.get(i)) {
                return Some(entry.id.clone());
            }
        }
        self.find_entry(selector).map(|e| e.id.clone())
    }

    pub fn record_failure(&mut self, operation: Operation, message: String) {
        self.failure = Some(OperationFailure { operation, message });
    }

    /// Clears the notice only when it belongs to this operation, entry id included.
    pub fn clear_failure(&mut self, operation: &Operation) {
        if self.failure.as_ref().is_some_and(|f| f.operation == *operation) {
            self.failure = None;
        }
    }

    pub fn reset_form(&mut self) {
        self.form.clear();
        self.analysis = None;
        self.analyzing = false;
    }
}
