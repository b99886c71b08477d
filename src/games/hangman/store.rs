use std::{collections::HashMap, fmt, hash::Hash, sync::Arc};

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, trace};

use super::{Game, State};

type Slot = Arc<Mutex<Option<Game>>>;

/// Live games, one per key.
///
/// The map lock is only held to find, add or remove a slot. Each slot has its
/// own lock, so guesses for one key are applied one batch at a time while
/// other keys carry on. A slot is emptied as soon as its game finishes.
pub struct GameStore<K>(Arc<RwLock<HashMap<K, Slot>>>);

/// What a batch of guesses left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: State,
    pub word: String,
    pub board: String,
}

impl Outcome {
    fn of(game: &Game) -> Self {
        Self {
            state: game.state(),
            word: game.word().to_owned(),
            board: game.render_full(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("there's already a game in progress")]
pub struct AlreadyInProgress(pub Game);

impl<K> GameStore<K>
where
    K: Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self(Arc::default())
    }

    async fn slot(&self, key: &K) -> Option<Slot> {
        self.0.read().await.get(key).cloned()
    }

    /// Removes `slot` if it is still the one stored under `key`.
    async fn forget(&self, key: &K, slot: &Slot) {
        let mut map = self.0.write().await;

        if map.get(key).is_some_and(|current| Arc::ptr_eq(current, slot)) {
            map.remove(key);
        }
    }

    pub async fn contains(&self, key: &K) -> bool {
        match self.slot(key).await {
            Some(slot) => slot.lock().await.is_some(),
            None => false,
        }
    }

    /// Adds a game unless one is already live for `key`.
    ///
    /// A game that is finished from the start (nothing to guess) is never
    /// stored; its outcome is returned all the same.
    pub async fn start(&self, key: K, game: Game) -> Result<Outcome, AlreadyInProgress> {
        let mut map = self.0.write().await;

        if let Some(slot) = map.get(&key) {
            if slot.lock().await.is_some() {
                return Err(AlreadyInProgress(game));
            }
        }

        let outcome = Outcome::of(&game);

        if outcome.state.is_finished() {
            trace!(?key, state = ?outcome.state, "game finished before any guess");
            map.remove(&key);
        } else {
            debug!(?key, "game started");
            map.insert(key, Arc::new(Mutex::new(Some(game))));
        }

        Ok(outcome)
    }

    /// Applies `letters` in order, stopping once the game is over.
    ///
    /// Returns `None` if there is no live game for `key`, including when the
    /// game finished while this batch was waiting its turn.
    pub async fn guess(
        &self,
        key: &K,
        letters: impl IntoIterator<Item = char>,
    ) -> Option<Outcome> {
        let slot = self.slot(key).await?;
        let mut guard = slot.lock().await;
        let game = guard.as_mut()?;

        for letter in letters {
            if game.guess(letter).is_finished() {
                break;
            }
        }

        let outcome = Outcome::of(game);

        if outcome.state.is_finished() {
            debug!(?key, state = ?outcome.state, "game finished");
            guard.take();
            drop(guard);
            self.forget(key, &slot).await;
        }

        Some(outcome)
    }

    /// Removes and returns the live game for `key`.
    pub async fn stop(&self, key: &K) -> Option<Game> {
        let slot = self.0.write().await.remove(key)?;
        let game = slot.lock().await.take();

        if game.is_some() {
            debug!(?key, "game stopped");
        }

        game
    }
}

impl<K> Clone for GameStore<K> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K> Default for GameStore<K>
where
    K: Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for GameStore<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameStore").finish_non_exhaustive()
    }
}
