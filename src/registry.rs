//! Registry of concurrently running matches.
//!
//! Each match sits behind its own lock so moves in different matches never
//! contend; the map lock is only held to look a match up or change the set.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::board::{MoveError, Square};
use crate::game::{Match, MatchConfig, MoveReport};

/// Identifier handed out by [`MatchRegistry::create`].
pub type MatchId = u64;

/// Shared handle to one match
pub type MatchHandle = Arc<Mutex<Match>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    UnknownMatch { id: MatchId },
    Move(MoveError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownMatch { id } => write!(f, "No match with id {id}"),
            RegistryError::Move(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Move(err) => Some(err),
            RegistryError::UnknownMatch { .. } => None,
        }
    }
}

impl From<MoveError> for RegistryError {
    fn from(err: MoveError) -> Self {
        RegistryError::Move(err)
    }
}

#[derive(Debug, Default)]
pub struct MatchRegistry {
    matches: RwLock<HashMap<MatchId, MatchHandle>>,
    next_id: AtomicU64,
}

impl MatchRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new match from the initial position.
    pub fn create(&self, config: MatchConfig) -> MatchId {
        self.insert(Match::new(config))
    }

    /// Register an existing match and return its id.
    pub fn insert(&self, game: Match) -> MatchId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.matches.write().insert(id, Arc::new(Mutex::new(game)));

        #[cfg(feature = "logging")]
        log::debug!("registered match {id}");

        id
    }

    #[must_use]
    pub fn get(&self, id: MatchId) -> Option<MatchHandle> {
        self.matches.read().get(&id).map(Arc::clone)
    }

    /// Run `f` with exclusive access to the match.
    pub fn with_match<T>(
        &self,
        id: MatchId,
        f: impl FnOnce(&mut Match) -> T,
    ) -> Result<T, RegistryError> {
        let handle = self.get(id).ok_or(RegistryError::UnknownMatch { id })?;
        let mut game = handle.lock();
        Ok(f(&mut game))
    }

    pub fn play(&self, id: MatchId, from: Square, to: Square) -> Result<MoveReport, RegistryError> {
        self.with_match(id, |game| game.play(from, to))?
            .map_err(RegistryError::from)
    }

    pub fn remove(&self, id: MatchId) -> Option<MatchHandle> {
        let removed = self.matches.write().remove(&id);

        #[cfg(feature = "logging")]
        {
            if removed.is_some() {
                log::debug!("removed match {id}");
            }
        }

        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.read().is_empty()
    }

    /// Ids of all registered matches, ascending.
    #[must_use]
    pub fn ids(&self) -> Vec<MatchId> {
        let mut ids: Vec<_> = self.matches.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
