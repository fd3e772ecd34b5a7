use crate::models::CreateEntryRequest;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub title: String,
    pub content: String,
}

impl FormData {
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    /// Fields are sent as typed; only the emptiness check trims.
    pub fn to_request(&self) -> CreateEntryRequest {
        CreateEntryRequest {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}
