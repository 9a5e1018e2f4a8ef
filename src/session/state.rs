//! Shared session state
//!
//! Written only by the refresh path, read by every lookup. Token and index
//! are swapped as whole values under the exclusive lock, so readers see
//! either the old or the new value and never a mix.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{AntiForgeryToken, IdentifierIndex};
use crate::error::ApiError;

#[derive(Debug, Default)]
struct SessionInner {
    token: Option<AntiForgeryToken>,
    index: Option<IdentifierIndex>,
}

// == Session State ==
#[derive(Debug, Default)]
pub struct SessionState {
    inner: RwLock<SessionInner>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // == Token ==
    /// Returns the token value to attach to an authenticated request.
    pub async fn token_for_request(&self, now: DateTime<Utc>) -> Result<String, ApiError> {
        let inner = self.inner.read().await;
        match &inner.token {
            Some(token) if token.is_usable(now) => Ok(token.value.clone()),
            Some(token) if !token.value.is_empty() => Err(ApiError::TokenExpired),
            _ => Err(ApiError::TokenMissing),
        }
    }

    /// True if the token is absent or within `guard` of expiry.
    pub async fn needs_token_renewal(&self, now: DateTime<Utc>, guard: Duration) -> bool {
        let inner = self.inner.read().await;
        inner
            .token
            .as_ref()
            .map_or(true, |token| token.is_stale(now, guard))
    }

    pub async fn replace_token(&self, token: AntiForgeryToken) {
        self.inner.write().await.token = Some(token);
    }

    pub async fn token(&self) -> Option<AntiForgeryToken> {
        self.inner.read().await.token.clone()
    }

    // == Index ==
    /// Resolves an ID, failing if the index has never been built.
    pub async fn slug_for_id(&self, id: u32) -> Result<Option<String>, ApiError> {
        let inner = self.inner.read().await;
        let index = inner
            .index
            .as_ref()
            .ok_or(ApiError::NotInitialized("problem id map"))?;
        Ok(index.slug_for_id(id).map(str::to_string))
    }

    /// Resolves a display title, failing if the index has never been built.
    pub async fn slug_for_title(&self, title: &str) -> Result<Option<String>, ApiError> {
        let inner = self.inner.read().await;
        let index = inner
            .index
            .as_ref()
            .ok_or(ApiError::NotInitialized("problem title map"))?;
        Ok(index.slug_for_title(title).map(str::to_string))
    }

    /// Catalog size the current index was built against.
    pub async fn known_total(&self) -> Option<usize> {
        self.inner.read().await.index.as_ref().map(IdentifierIndex::total)
    }

    pub async fn index_len(&self) -> Option<usize> {
        self.inner.read().await.index.as_ref().map(IdentifierIndex::len)
    }

    pub async fn replace_index(&self, index: IdentifierIndex) {
        self.inner.write().await.index = Some(index);
    }

    /// Drops both lookup tables; lookups by ID or title then fail as
    /// uninitialized.
    pub async fn clear_index(&self) {
        self.inner.write().await.index = None;
    }
}
