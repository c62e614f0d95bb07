use crate::error::{PetDietError, Result};
use crate::feedback::{build_entry, Feedback, FeedbackStore, NewFeedback};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Feedback store persisted as a pretty-printed JSON array on disk.
///
/// The parent directory and an empty file are created on first use. Every
/// mutation rewrites the whole file; concurrent writers are last-write-wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file, initializing it if absent
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            fs::write(&path, "[]")?;
        }

        Ok(Self { path })
    }

    fn load(&self) -> Result<Vec<Feedback>> {
        let contents = fs::read_to_string(&self.path)?;
        let entries = serde_json::from_str(&contents)?;
        Ok(entries)
    }

    fn save(&self, entries: &[Feedback]) -> Result<()> {
        debug!("Writing {} feedback entries to {:?}", entries.len(), self.path);
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl FeedbackStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Feedback>> {
        self.load()
    }

    fn append(&self, feedback: NewFeedback) -> Result<Feedback> {
        let mut entries = self.load()?;
        let entry = build_entry(feedback);
        entries.insert(0, entry.clone());
        self.save(&entries)?;
        Ok(entry)
    }

    fn increment_likes(&self, id: &str) -> Result<u32> {
        let mut entries = self.load()?;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| PetDietError::NotFound(format!("feedback {id}")))?;
        entry.likes += 1;
        let likes = entry.likes;
        self.save(&entries)?;
        Ok(likes)
    }

    fn set_reply(&self, id: &str, reply: &str) -> Result<()> {
        let mut entries = self.load()?;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| PetDietError::NotFound(format!("feedback {id}")))?;
        entry.reply = Some(reply.to_string());
        self.save(&entries)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(text: &str) -> NewFeedback {
        NewFeedback {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_new_initializes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("feedback.json");

        let store = JsonFileStore::new(&path).unwrap();

        assert!(path.exists());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_append_persists_newest_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedback.json");
        let store = JsonFileStore::new(&path).unwrap();

        store.append(sample("first")).unwrap();
        store.append(sample("second")).unwrap();

        // Reopen to prove it went to disk.
        let reopened = JsonFileStore::new(&path).unwrap();
        let entries = reopened.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "second");
        assert_eq!(entries[1].text, "first");
    }

    #[test]
    fn test_likes_and_reply_survive_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedback.json");
        let store = JsonFileStore::new(&path).unwrap();
        let entry = store.append(sample("note")).unwrap();

        assert_eq!(store.increment_likes(&entry.id).unwrap(), 1);
        store.set_reply(&entry.id, "Thank you!").unwrap();

        let reopened = JsonFileStore::new(&path).unwrap();
        let entries = reopened.list().unwrap();
        assert_eq!(entries[0].likes, 1);
        assert_eq!(entries[0].reply.as_deref(), Some("Thank you!"));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("feedback.json")).unwrap();

        assert!(matches!(
            store.increment_likes("missing"),
            Err(PetDietError::NotFound(_))
        ));
        assert!(matches!(
            store.set_reply("missing", "hi"),
            Err(PetDietError::NotFound(_))
        ));
    }

    #[test]
    fn test_corrupt_file_surfaces_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedback.json");
        let store = JsonFileStore::new(&path).unwrap();
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            store.list(),
            Err(PetDietError::SerializationError(_))
        ));
    }
}
