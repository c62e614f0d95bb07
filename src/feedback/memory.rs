use crate::error::{PetDietError, Result};
use crate::feedback::{build_entry, Feedback, FeedbackStore, NewFeedback};
use std::sync::Mutex;

/// In-memory feedback store for tests and demos
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<Vec<Feedback>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedbackStore for InMemoryStore {
    fn list(&self) -> Result<Vec<Feedback>> {
        Ok(self.entries.lock().unwrap().clone())
    }

    fn append(&self, feedback: NewFeedback) -> Result<Feedback> {
        let entry = build_entry(feedback);
        self.entries.lock().unwrap().insert(0, entry.clone());
        Ok(entry)
    }

    fn increment_likes(&self, id: &str) -> Result<u32> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| PetDietError::NotFound(format!("feedback {id}")))?;
        entry.likes += 1;
        Ok(entry.likes)
    }

    fn set_reply(&self, id: &str, reply: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| PetDietError::NotFound(format!("feedback {id}")))?;
        entry.reply = Some(reply.to_string());
        Ok(())
    }
}
