use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::*;

/// Flat text key-value slot store, the browser's LocalStorage being the
/// canonical implementation.
pub trait Storage {
    fn read(&self, key: &str) -> core::result::Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> core::result::Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn read(&self, key: &str) -> core::result::Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> core::result::Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Associates a persisted value with the storage slot it lives in.
pub trait StorageKey {
    const KEY: &'static str;
}

/// Named, timestamped snapshot of a curated game. Never mutated once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub name: String,
    pub config: GameConfig,
    pub images: Vec<TriviaImage>,
    pub assigned_rounds: RoundAssignment,
    pub created_at: Timestamp,
}

impl StorageKey for Vec<SavedGame> {
    const KEY: &'static str = "trivia_saved_games";
}

pub const SAVED_GAMES_KEY: &str = <Vec<SavedGame> as StorageKey>::KEY;

/// Reads the saved games slot. A missing slot, a failed read or an unparsable
/// value all yield an empty list, the latter two are logged.
pub fn read_saved_games<S: Storage + ?Sized>(storage: &S) -> Vec<SavedGame> {
    let text = match storage.read(SAVED_GAMES_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::error!("Could not read saved games: {}", err);
            return Vec::new();
        }
    };

    match serde_json::from_str(&text) {
        Ok(saved_games) => saved_games,
        Err(err) => {
            log::error!("Failed to parse saved games: {}", err);
            Vec::new()
        }
    }
}

/// Serializes the whole list and overwrites the saved games slot.
pub fn write_saved_games<S: Storage + ?Sized>(
    storage: &mut S,
    saved_games: &[SavedGame],
) -> Result<()> {
    let text = serde_json::to_string(saved_games)?;
    storage.write(SAVED_GAMES_KEY, &text)?;
    log::debug!("persisted {} saved games", saved_games.len());
    Ok(())
}

/// In-process [`Storage`] for hosts without browser storage and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following write fail, like a browser whose quota is exhausted.
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.slots.insert(key.into(), value.into());
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> core::result::Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> core::result::Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::WriteRejected(format!(
                "quota exceeded writing {key}"
            )));
        }
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn read(&self, _key: &str) -> core::result::Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn write(&mut self, _key: &str, _value: &str) -> core::result::Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
    }

    fn saved_game() -> SavedGame {
        let config = GameConfig::new(1, 2, 45);
        let images = vec![
            TriviaImage::new("a", "a.png", "Apple", ImageSource::Local).with_category("fruit"),
            TriviaImage::new("b", "https://x/b.png", "Banana", ImageSource::Web),
        ];
        SavedGame {
            name: "Fruit".into(),
            assigned_rounds: RoundAssignment::sequential(&config, &images),
            config,
            images,
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn saved_games_key_is_stable() {
        assert_eq!(SAVED_GAMES_KEY, "trivia_saved_games");
    }

    #[test]
    fn missing_slot_reads_as_empty() {
        assert!(read_saved_games(&MemoryStorage::new()).is_empty());
    }

    #[test]
    fn unparsable_slot_reads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.insert(SAVED_GAMES_KEY, "{not json");

        assert!(read_saved_games(&storage).is_empty());
    }

    #[test]
    fn failing_read_reads_as_empty() {
        assert!(read_saved_games(&BrokenStorage).is_empty());
    }

    #[test]
    fn written_games_read_back_equal() {
        let mut storage = MemoryStorage::new();
        let games = vec![saved_game()];

        write_saved_games(&mut storage, &games).unwrap();

        assert_eq!(read_saved_games(&storage), games);
    }

    #[test]
    fn written_layout_uses_persisted_field_names() {
        let mut storage = MemoryStorage::new();
        write_saved_games(&mut storage, &[saved_game()]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(storage.get(SAVED_GAMES_KEY).unwrap()).unwrap();
        let entry = &value[0];

        assert_eq!(entry["name"], "Fruit");
        assert_eq!(entry["config"]["picturesPerRound"], 2);
        assert_eq!(entry["config"]["timePerRound"], 45);
        assert_eq!(entry["images"][0]["category"], "fruit");
        assert_eq!(entry["images"][1]["source"], "web");
        assert_eq!(entry["assignedRounds"][0][1]["id"], "b");
        assert_eq!(entry["createdAt"], 1_700_000_000_000u64);
    }

    #[test]
    fn layout_written_by_browser_build_parses() {
        let mut storage = MemoryStorage::new();
        storage.insert(
            SAVED_GAMES_KEY,
            r#"[{"name":"Xmas","config":{"rounds":1,"picturesPerRound":1,"timePerRound":600,"theme":"christmas"},
                "images":[{"id":"1","url":"u","name":"Tree","source":"local"}],
                "assignedRounds":[],"createdAt":1}]"#,
        );

        let games = read_saved_games(&storage);

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].config.theme, Theme::Christmas);
        assert!(games[0].assigned_rounds.is_empty());
        assert_eq!(games[0].images[0].category, None);
    }

    #[test]
    fn rejected_write_propagates() {
        let mut storage = MemoryStorage::new();
        storage.reject_writes(true);

        let err = write_saved_games(&mut storage, &[saved_game()]).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Storage(StorageError::WriteRejected(_))
        ));
        assert_eq!(storage.get(SAVED_GAMES_KEY), None);
    }
}
