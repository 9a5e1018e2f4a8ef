//! Catalog Client
//!
//! Composes the problem cache, the session state and the transport. Every
//! lookup resolves to a slug first, then serves the slug from the cache or
//! fetches and caches it. `run` starts the sweep and refresh tasks and `stop`
//! tears them down.

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::cache::{CacheStats, TtlCache};
use crate::config::Config;
use crate::error::{ApiError, CatalogError, Result};
use crate::graphql::wire::{
    DailyChallengeData, ProblemDataWrapper, ProblemListData, TotalProblemsData,
};
use crate::graphql::{self, GraphQlRequest};
use crate::models::Problem;
use crate::session::{AntiForgeryToken, IdentifierIndex, SessionState};
use crate::tasks::{spawn_refresh_task, spawn_sweep_task};
use crate::transport::{ApiRequest, ReqwestTransport, Transport};

/// Outcome of a token renewal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRefresh {
    /// Stored token was outside the guard window; no request made
    Skipped,
    Renewed,
}

/// Outcome of an index reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRefresh {
    /// Remote catalog size matched the indexed size
    Unchanged,
    /// Tables rebuilt with this many problems
    Rebuilt(usize),
}

// == Client Inner ==
/// State shared between the foreground client and its background tasks.
pub(crate) struct ClientInner {
    pub(crate) config: Config,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) cache: Arc<TtlCache>,
    pub(crate) session: SessionState,
}

struct Running {
    shutdown: CancellationToken,
    sweeper: JoinHandle<()>,
    refresher: JoinHandle<()>,
}

// == Catalog Client ==
/// Stateful client for the problem catalog.
///
/// # Example
/// ```ignore
/// let client = CatalogClient::new(Config::from_env())?;
/// client.run().await;
/// let problem = client.resolve_by_id(1).await?;
/// client.stop().await;
/// ```
pub struct CatalogClient {
    inner: Arc<ClientInner>,
    lifecycle: Mutex<Option<Running>>,
}

impl CatalogClient {
    // == Constructors ==
    /// Creates a client over the default reqwest transport.
    pub fn new(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::new(config.request_timeout)
            .map_err(|e| CatalogError::system("build http transport", e))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        let cache = Arc::new(TtlCache::new(config.problem_ttl));
        Self {
            inner: Arc::new(ClientInner {
                config,
                transport,
                cache,
                session: SessionState::new(),
            }),
            lifecycle: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn cache(&self) -> &Arc<TtlCache> {
        &self.inner.cache
    }

    pub fn session(&self) -> &SessionState {
        &self.inner.session
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.inner.cache.stats().await
    }

    // == Lookups ==
    /// Resolves a problem by its display title.
    pub async fn resolve_by_title(&self, title: &str) -> Result<Problem> {
        let slug = self
            .inner
            .session
            .slug_for_title(title)
            .await
            .map_err(|e| CatalogError::system("lookup by title", e))?
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;

        self.inner.resolve_by_slug(&slug).await
    }

    /// Resolves a problem by its numeric (frontend) ID.
    pub async fn resolve_by_id(&self, id: u32) -> Result<Problem> {
        let slug = self
            .inner
            .session
            .slug_for_id(id)
            .await
            .map_err(|e| CatalogError::system("lookup by id", e))?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        self.inner.resolve_by_slug(&slug).await
    }

    /// Resolves a problem by slug, serving from the cache when possible.
    pub async fn resolve_by_slug(&self, slug: &str) -> Result<Problem> {
        self.inner.resolve_by_slug(slug).await
    }

    /// Resolves today's featured problem. The daily slug is always fetched
    /// live; the problem itself goes through the cache.
    pub async fn resolve_daily(&self) -> Result<Problem> {
        let slug = self
            .inner
            .fetch_daily_slug()
            .await
            .map_err(|e| CatalogError::system("get daily problem title", e))?;

        self.inner.resolve_by_slug(&slug).await
    }

    // == Refresh ==
    /// Renews the anti-forgery token if it is absent or close to expiry.
    pub async fn refresh_token(&self) -> std::result::Result<TokenRefresh, ApiError> {
        self.inner.refresh_token().await
    }

    /// Rebuilds the ID/title index if the catalog size changed.
    pub async fn refresh_index(&self) -> std::result::Result<IndexRefresh, ApiError> {
        self.inner.refresh_index().await
    }

    // == Lifecycle ==
    /// Starts the cache sweep and the session refresh tasks.
    ///
    /// Calling `run` while already running does nothing.
    pub async fn run(&self) {
        let mut lifecycle = self.lifecycle.lock().await;
        if lifecycle.is_some() {
            warn!("Catalog client already running");
            return;
        }

        info!("Running catalog client");
        let shutdown = CancellationToken::new();
        let sweeper = spawn_sweep_task(
            self.inner.cache.clone(),
            self.inner.config.sweep_interval,
            shutdown.clone(),
        );
        let refresher = spawn_refresh_task(
            self.inner.clone(),
            self.inner.config.refresh_interval,
            shutdown.clone(),
        );

        *lifecycle = Some(Running {
            shutdown,
            sweeper,
            refresher,
        });
    }

    /// Stops both background tasks and waits for them to exit.
    ///
    /// The index is cleared on the way out. Safe to call repeatedly and
    /// without a prior `run`.
    pub async fn stop(&self) {
        let mut lifecycle = self.lifecycle.lock().await;
        let Some(running) = lifecycle.take() else {
            debug!("Catalog client not running, nothing to stop");
            return;
        };

        info!("Stopping catalog client");
        running.shutdown.cancel();

        if let Err(e) = running.sweeper.await {
            error!(error = %e, "Cache sweep task ended abnormally");
        }
        if let Err(e) = running.refresher.await {
            error!(error = %e, "Session refresh task ended abnormally");
            // The task clears the index itself on a clean exit
            self.inner.session.clear_index().await;
        }

        info!("Catalog client stopped");
    }

    pub async fn is_running(&self) -> bool {
        self.lifecycle.lock().await.is_some()
    }
}

impl ClientInner {
    pub(crate) async fn resolve_by_slug(&self, slug: &str) -> Result<Problem> {
        if slug.trim().is_empty() {
            return Err(CatalogError::NotFound(slug.to_string()));
        }

        if let Some(problem) = self.cache.get(slug).await {
            debug!(slug, "problem cache hit");
            return Ok(problem);
        }
        debug!(slug, "problem cache miss");

        let problem = self
            .fetch_problem(slug)
            .await
            .map_err(|e| CatalogError::system("get problem data from API", e))?
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))?;

        self.cache.put(slug, problem.clone()).await;
        Ok(problem)
    }

    /// Fetches and converts one problem; `None` if the catalog has no such slug.
    async fn fetch_problem(&self, slug: &str) -> std::result::Result<Option<Problem>, ApiError> {
        let referer = self.config.problem_referer(slug);
        let wrapper: ProblemDataWrapper = self
            .query(&GraphQlRequest::problem_by_slug(slug), &referer, "problem")
            .await?;

        let Some(mut data) = wrapper.question else {
            return Ok(None);
        };
        data.decode_embedded()?;
        Problem::try_from(data).map(Some)
    }

    async fn fetch_daily_slug(&self) -> std::result::Result<String, ApiError> {
        let referer = self.config.problem_list_referer();
        let daily: DailyChallengeData = self
            .query(&GraphQlRequest::daily_problem(), &referer, "daily problem")
            .await?;

        daily
            .challenge
            .map(|c| c.question.title_slug)
            .filter(|slug| !slug.is_empty())
            .ok_or(ApiError::MissingData("daily problem"))
    }

    /// Sends an authenticated query and decodes its `data` field.
    ///
    /// The session lock is released before the transport call.
    async fn query<T: DeserializeOwned>(
        &self,
        body: &GraphQlRequest,
        referer: &str,
        what: &'static str,
    ) -> std::result::Result<T, ApiError> {
        let token = self.session.token_for_request(Utc::now()).await?;
        let request = graphql::build_request(&self.config.graphql_url(), &token, body, referer)?;
        let response = self.transport.execute(request).await?;
        graphql::decode_data(&response, what)
    }

    pub(crate) async fn refresh_token(&self) -> std::result::Result<TokenRefresh, ApiError> {
        if !self
            .session
            .needs_token_renewal(Utc::now(), self.config.token_guard)
            .await
        {
            debug!("csrf token still fresh, skipping renewal");
            return Ok(TokenRefresh::Skipped);
        }

        let response = self
            .transport
            .execute(ApiRequest::get(self.config.base_url.as_str()))
            .await?;
        let token =
            AntiForgeryToken::from_response(&response, Utc::now(), self.config.refresh_interval)?;

        info!(expires_at = %token.expires_at, "csrf token renewed");
        self.session.replace_token(token).await;
        Ok(TokenRefresh::Renewed)
    }

    pub(crate) async fn refresh_index(&self) -> std::result::Result<IndexRefresh, ApiError> {
        let referer = self.config.problem_list_referer();
        let count: TotalProblemsData = self
            .query(&GraphQlRequest::total_problems(), &referer, "problem count")
            .await?;
        let total = count.question_list.total;

        if self.session.known_total().await == Some(total) {
            debug!(total, "catalog size unchanged, skipping index rebuild");
            return Ok(IndexRefresh::Unchanged);
        }

        let list: ProblemListData = self
            .query(&GraphQlRequest::problem_list(total), &referer, "problem list")
            .await?;
        let index = IdentifierIndex::from_references(list.question_list.questions, total)?;
        let size = index.len();

        self.session.replace_index(index).await;
        info!(total, indexed = size, "problem index rebuilt");
        Ok(IndexRefresh::Rebuilt(size))
    }

    /// One refresh tick. Failures are logged and left for the next tick;
    /// a failed step leaves the previous token or index in place.
    pub(crate) async fn refresh_session(&self) {
        if let Err(e) = self.refresh_token().await {
            error!(error = %e, "Error refreshing csrf token");
        }
        if let Err(e) = self.refresh_index().await {
            error!(error = %e, "Error refreshing problem index");
        }
    }
}
