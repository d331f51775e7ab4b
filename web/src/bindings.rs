use serde::Serialize;
use serde::de::DeserializeOwned;
use trivia_core::{ConfigPatch, GameStore, SavedGame, TriviaImage};
use wasm_bindgen::prelude::*;

use crate::storage::LocalStorageBackend;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    Ok(serde_json::to_string(value)?)
}

fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsError> {
    Ok(serde_json::from_str(text)?)
}

/// Store handle for the JS screens. Structured values cross the boundary as
/// JSON text using the same field names as the persisted saved games.
#[wasm_bindgen]
pub struct TriviaStore {
    inner: GameStore<LocalStorageBackend>,
}

#[wasm_bindgen]
impl TriviaStore {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: GameStore::new(LocalStorageBackend),
        }
    }

    pub fn config(&self) -> Result<String, JsError> {
        to_json(self.inner.config())
    }

    /// Merges a partial config object such as `{"rounds": 2}`.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, patch: &str) -> Result<(), JsError> {
        let patch: ConfigPatch = from_json(patch)?;
        self.inner.set_config(patch);
        Ok(())
    }

    #[wasm_bindgen(js_name = totalImagesNeeded)]
    pub fn total_images_needed(&self) -> usize {
        self.inner.total_images_needed()
    }

    #[wasm_bindgen(js_name = isValidGame)]
    pub fn is_valid_game(&self) -> bool {
        self.inner.is_valid_game()
    }

    #[wasm_bindgen(js_name = validationErrors)]
    pub fn validation_errors(&self) -> Vec<String> {
        self.inner.validation_errors()
    }

    pub fn state(&self) -> Result<String, JsError> {
        to_json(self.inner.state())
    }

    #[wasm_bindgen(js_name = assignedRounds)]
    pub fn assigned_rounds(&self) -> Result<String, JsError> {
        to_json(self.inner.assigned_rounds())
    }

    #[wasm_bindgen(js_name = currentRoundImages)]
    pub fn current_round_images(&self) -> Result<String, JsError> {
        to_json(self.inner.current_round_images())
    }

    #[wasm_bindgen(js_name = setImages)]
    pub fn set_images(&mut self, images: &str) -> Result<(), JsError> {
        let images: Vec<TriviaImage> = from_json(images)?;
        self.inner.set_images(images);
        Ok(())
    }

    #[wasm_bindgen(js_name = initializeRounds)]
    pub fn initialize_rounds(&mut self) {
        self.inner.initialize_rounds();
    }

    /// Returns whether a round at `index` existed and was replaced.
    #[wasm_bindgen(js_name = updateRoundAssignment)]
    pub fn update_round_assignment(&mut self, index: usize, images: &str) -> Result<bool, JsError> {
        let images: Vec<TriviaImage> = from_json(images)?;
        Ok(self.inner.update_round_assignment(index, images).has_update())
    }

    #[wasm_bindgen(js_name = startGame)]
    pub fn start_game(&mut self, images: &str) -> Result<(), JsError> {
        let images: Vec<TriviaImage> = from_json(images)?;
        self.inner.start_game(images);
        Ok(())
    }

    #[wasm_bindgen(js_name = startRound)]
    pub fn start_round(&mut self) {
        self.inner.start_round();
    }

    #[wasm_bindgen(js_name = timeoutRound)]
    pub fn timeout_round(&mut self) {
        self.inner.timeout_round();
    }

    /// Returns `true` while another round follows, `false` once the game is over.
    #[wasm_bindgen(js_name = endRound)]
    pub fn end_round(&mut self) -> bool {
        !self.inner.end_round().is_game_over()
    }

    #[wasm_bindgen(js_name = endGame)]
    pub fn end_game(&mut self) {
        self.inner.end_game();
    }

    #[wasm_bindgen(js_name = savedGames)]
    pub fn saved_games(&self) -> Result<String, JsError> {
        to_json(self.inner.saved_games())
    }

    #[wasm_bindgen(js_name = reloadSavedGames)]
    pub fn reload_saved_games(&mut self) {
        self.inner.load_saved_games();
    }

    #[wasm_bindgen(js_name = saveGame)]
    pub fn save_game(&mut self, name: &str) -> Result<(), JsError> {
        Ok(self.inner.save_game(name)?)
    }

    #[wasm_bindgen(js_name = loadGame)]
    pub fn load_game(&mut self, saved: &str) -> Result<(), JsError> {
        let saved: SavedGame = from_json(saved)?;
        self.inner.load_game(&saved);
        Ok(())
    }

    #[wasm_bindgen(js_name = loadGameAt)]
    pub fn load_game_at(&mut self, index: usize) -> bool {
        self.inner.load_game_at(index)
    }

    /// Returns whether an entry was removed.
    #[wasm_bindgen(js_name = deleteGame)]
    pub fn delete_game(&mut self, index: usize) -> Result<bool, JsError> {
        Ok(self.inner.delete_game(index)?.is_some())
    }
}

impl Default for TriviaStore {
    fn default() -> Self {
        Self::new()
    }
}
