//! Client-side favorite set kept consistent with the server-of-record.
//!
//! [`FavoriteSync`] owns the local set for one session. Membership only ever
//! changes after the corresponding server request settles successfully, so
//! the local view is never more than one round trip behind server truth:
//!
//! - `hydrate` replaces the whole set, or on failure leaves it untouched
//! - `toggle` marks the pet pending first, issues exactly one mutating
//!   request, and applies the result only if the session is still open
//! - a second `toggle` for the same pet while one is in flight is rejected,
//!   so add/remove responses for one id can never interleave
//!
//! The internal mutex is held only across local-state transitions, never
//! across an await of the network.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use petpals_types::Pet;

use crate::error::ClientError;


/// Network seam for the synchronizer; implemented by
/// [`crate::PetPalsClient`] and mocked in tests.
#[async_trait]
pub trait FavoritesTransport: Send + Sync {
    /// Full favorite list, newest first.
    async fn fetch_favorites(&self) -> Result<Vec<Pet>, ClientError>;
    /// Add by id. A duplicate add must be reported as success.
    async fn add_favorite(&self, pet_id: &str) -> Result<(), ClientError>;
    /// Remove by id.
    async fn remove_favorite(&self, pet_id: &str) -> Result<(), ClientError>;
    /// One pet's full denormalized detail, used after a successful add.
    async fn fetch_pet(&self, pet_id: &str) -> Result<Pet, ClientError>;
}

/// Coarse lifecycle of the local set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// Nothing fetched yet.
    Empty,
    /// Local set reflects the last known server state.
    Hydrated,
}

/// What a settled [`FavoriteSync::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

#[derive(Default)]
struct SyncState {
    favorites: Vec<Pet>,
    pending: HashSet<String>,
    hydrated: bool,
    closed: bool,
}

impl SyncState {
    fn contains(&self, pet_id: &str) -> bool {
        self.favorites.iter().any(|pet| pet.id == pet_id)
    }
}

enum Direction {
    Add,
    Remove,
}

/// Session-scoped synchronizer for one user's favorite set.
///
/// Construct at session start, drop (after [`close`](Self::close)) at
/// logout. Not a global: the owning UI layer passes it by reference to
/// whatever needs it.
pub struct FavoriteSync<T: FavoritesTransport> {
    transport: Arc<T>,
    state: Mutex<SyncState>,
}

impl<T: FavoritesTransport> FavoriteSync<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport, state: Mutex::new(SyncState::default()) }
    }

    /// Fetch the full favorite list and replace the local set.
    ///
    /// On transport failure the previous local set is retained unchanged and
    /// the error propagates; hydrate never partially clears local state.
    pub async fn hydrate(&self) -> Result<usize, ClientError> {
        if self.lock().closed {
            return Err(ClientError::SessionClosed);
        }

        let favorites = self.transport.fetch_favorites().await?;

        let mut state = self.lock();
        if state.closed {
            return Err(ClientError::SessionClosed);
        }
        let count = favorites.len();
        state.favorites = favorites;
        state.hydrated = true;
        tracing::debug!("Hydrated {} favorites", count);
        Ok(count)
    }

    /// Flip the membership of one pet, mirroring the change on the server.
    ///
    /// Exactly one mutating request per call. While it is in flight the pet
    /// is pending ([`is_pending`](Self::is_pending)) and further toggles for
    /// the same id are rejected with [`ClientError::ToggleInFlight`]; other
    /// ids may toggle concurrently. On any failure the local set is left at
    /// its pre-toggle value and the error propagates.
    pub async fn toggle(&self, pet_id: &str) -> Result<Toggle, ClientError> {
        let direction = {
            let mut state = self.lock();
            if state.closed {
                return Err(ClientError::SessionClosed);
            }
            if !state.pending.insert(pet_id.to_string()) {
                return Err(ClientError::ToggleInFlight(pet_id.to_string()));
            }
            if state.contains(pet_id) { Direction::Remove } else { Direction::Add }
        };

        let outcome = match direction {
            Direction::Remove => self.transport.remove_favorite(pet_id).await.map(|()| None),
            // The add confirmation lacks denormalized fields (category,
            // timestamps), so re-fetch this one pet's full detail. If that
            // fetch fails the local set stays pre-toggle; the server-side add
            // is picked up by the next hydrate.
            Direction::Add => match self.transport.add_favorite(pet_id).await {
                Ok(()) => self.transport.fetch_pet(pet_id).await.map(Some),
                Err(err) => Err(err),
            },
        };

        let mut state = self.lock();
        state.pending.remove(pet_id);
        if state.closed {
            // Session ended while the request was in flight: the response
            // must not be applied to a set belonging to a finished session.
            return Err(ClientError::SessionClosed);
        }

        match outcome {
            Ok(None) => {
                state.favorites.retain(|pet| pet.id != pet_id);
                Ok(Toggle::Removed)
            }
            Ok(Some(pet)) => {
                if !state.contains(pet_id) {
                    state.favorites.insert(0, pet);
                }
                Ok(Toggle::Added)
            }
            Err(err) => Err(err),
        }
    }

    /// Pure lookup against the local set; never touches the network.
    pub fn is_member(&self, pet_id: &str) -> bool {
        self.lock().contains(pet_id)
    }

    /// True while a toggle for this pet is in flight; lets the UI suppress
    /// duplicate user-initiated toggles.
    pub fn is_pending(&self, pet_id: &str) -> bool {
        self.lock().pending.contains(pet_id)
    }

    /// Snapshot of the local set, newest favorite first.
    pub fn favorites(&self) -> Vec<Pet> {
        self.lock().favorites.clone()
    }

    pub fn phase(&self) -> SyncPhase {
        if self.lock().hydrated { SyncPhase::Hydrated } else { SyncPhase::Empty }
    }

    /// End the session. In-flight responses are discarded on arrival and all
    /// subsequent operations fail with [`ClientError::SessionClosed`].
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.favorites.clear();
        state.pending.clear();
    }

    fn lock(&self) -> MutexGuard<'_, SyncState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
