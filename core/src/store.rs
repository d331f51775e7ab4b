use crate::*;

/// The trivia game store: configuration, curated images, round assignment,
/// lifecycle state and the saved games library.
///
/// Derived values (`total_images_needed`, `is_valid_game`,
/// `validation_errors`, `current_round_images`) are computed on every call from
/// the current fields, so they are always consistent with the last mutation.
#[derive(Debug)]
pub struct GameStore<S: Storage> {
    config: GameConfig,
    state: GameState,
    assigned_rounds: RoundAssignment,
    saved_games: Vec<SavedGame>,
    storage: S,
}

impl<S: Storage> GameStore<S> {
    /// Builds a store with default settings and the saved games found in `storage`.
    pub fn new(storage: S) -> Self {
        let mut store = Self {
            config: GameConfig::default(),
            state: GameState::default(),
            assigned_rounds: RoundAssignment::default(),
            saved_games: Vec::new(),
            storage,
        };
        store.load_saved_games();
        store
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn images(&self) -> &[TriviaImage] {
        &self.state.images
    }

    pub fn assigned_rounds(&self) -> &RoundAssignment {
        &self.assigned_rounds
    }

    pub fn saved_games(&self) -> &[SavedGame] {
        &self.saved_games
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // Configuration

    pub fn set_config(&mut self, patch: ConfigPatch) {
        self.config.merge(patch);
        log::debug!("config updated: {:?}", self.config);
    }

    pub fn total_images_needed(&self) -> ImageCount {
        self.config.total_images_needed()
    }

    // Validation

    pub fn is_valid_game(&self) -> bool {
        validation::is_valid_game(&self.config, &self.state.images)
    }

    pub fn validation_errors(&self) -> Vec<String> {
        validation::validation_errors(&self.config, &self.state.images)
    }

    pub fn validation_issues(&self) -> Vec<ValidationIssue> {
        validation::validate(&self.config, &self.state.images)
    }

    // Round assignment

    /// Replaces the curated images and drops any assignment made for the old set.
    pub fn set_images(&mut self, images: Vec<TriviaImage>) {
        self.state.images = images;
        self.assigned_rounds.clear();
    }

    pub fn initialize_rounds(&mut self) {
        self.assigned_rounds = RoundAssignment::sequential(&self.config, &self.state.images);
        log::debug!(
            "assigned {} images over {} rounds",
            self.assigned_rounds.iter_images().count(),
            self.assigned_rounds.len()
        );
    }

    /// Replaces the images of the zero-based round `index`, ignored when the
    /// round does not exist.
    pub fn update_round_assignment(
        &mut self,
        index: usize,
        images: Vec<TriviaImage>,
    ) -> AssignOutcome {
        self.assigned_rounds.replace(index, images)
    }

    /// Images to show for the round being played, empty when no game is running.
    pub fn current_round_images(&self) -> &[TriviaImage] {
        if !self.state.is_playing {
            return &[];
        }

        let round = self.state.current_round;
        if self.assigned_rounds.is_empty() {
            slice_round(&self.state.images, round, self.config.pictures_per_round)
        } else {
            self.assigned_rounds.round(round).unwrap_or_default()
        }
    }

    // Lifecycle

    /// Starts a game over `images`. An existing assignment is kept, otherwise
    /// rounds are filled sequentially.
    pub fn start_game(&mut self, images: Vec<TriviaImage>) {
        self.state.images = images;
        if self.assigned_rounds.is_empty() {
            self.initialize_rounds();
        }
        self.state.begin();
    }

    pub fn start_round(&mut self) {
        self.state.start_round();
    }

    pub fn timeout_round(&mut self) {
        self.state.timeout_round();
    }

    pub fn end_round(&mut self) -> RoundOutcome {
        self.state.end_round(self.config.rounds)
    }

    pub fn end_game(&mut self) {
        self.state.end_game();
    }

    // Saved games

    /// Re-reads the saved games from storage, replacing the in-memory list.
    /// Unreadable data leaves the list empty.
    pub fn load_saved_games(&mut self) {
        self.saved_games = read_saved_games(&self.storage);
        log::debug!("loaded {} saved games", self.saved_games.len());
    }

    /// Snapshots the current setup under `name` with the current time.
    pub fn save_game(&mut self, name: impl Into<String>) -> Result<()> {
        self.save_game_at(name, now_millis())
    }

    /// Snapshots the current setup and rewrites the whole saved games slot.
    /// The snapshot stays in the list even when the write fails.
    pub fn save_game_at(&mut self, name: impl Into<String>, created_at: Timestamp) -> Result<()> {
        let saved = SavedGame {
            name: name.into(),
            config: self.config.clone(),
            images: self.state.images.clone(),
            assigned_rounds: self.assigned_rounds.clone(),
            created_at,
        };
        log::info!("saving game {:?}", saved.name);
        self.saved_games.push(saved);
        write_saved_games(&mut self.storage, &self.saved_games)
    }

    /// Restores config, images and assignment from `saved`. Lifecycle state is
    /// left as it is.
    pub fn load_game(&mut self, saved: &SavedGame) {
        self.config = saved.config.clone();
        self.state.images = saved.images.clone();
        self.assigned_rounds = saved.assigned_rounds.clone();
        log::info!("loaded game {:?}", saved.name);
    }

    /// Restores the saved game at `index`, returning whether one was found.
    pub fn load_game_at(&mut self, index: usize) -> bool {
        let Some(saved) = self.saved_games.get(index).cloned() else {
            return false;
        };
        self.load_game(&saved);
        true
    }

    /// Removes the saved game at `index` and rewrites the slot. An out of range
    /// index removes nothing but still rewrites.
    pub fn delete_game(&mut self, index: usize) -> Result<Option<SavedGame>> {
        let removed = (index < self.saved_games.len()).then(|| self.saved_games.remove(index));
        write_saved_games(&mut self.storage, &self.saved_games)?;
        Ok(removed)
    }
}

impl Default for GameStore<MemoryStorage> {
    fn default() -> Self {
        Self::new(MemoryStorage::new())
    }
}
