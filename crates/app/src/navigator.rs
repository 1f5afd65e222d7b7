//! Navigation — resolves a client-side path and loads its page.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ApiClient;
use crate::ports::HttpTransport;
use crate::routes::{Page, RouteMatch, RouteParams, RouteTable};
use crate::views::{PageData, View, ViewError, ViewRegistry};

/// A page reached by [`Navigator::open`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navigation {
    pub page: Page,
    pub params: RouteParams,
    pub data: PageData,
}

/// Navigation failures.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// No route matches; the host shows its not-found page.
    #[error("no page matches {0:?}")]
    NotFound(String),

    #[error(transparent)]
    View(#[from] ViewError),
}

/// Glue between the route table, the view registry, and the API client.
pub struct Navigator<T> {
    routes: RouteTable,
    views: ViewRegistry,
    client: ApiClient<T>,
}

impl<T: HttpTransport + Send + Sync> Navigator<T> {
    #[must_use]
    pub fn new(routes: RouteTable, views: ViewRegistry, client: ApiClient<T>) -> Self {
        Self {
            routes,
            views,
            client,
        }
    }

    /// Standard routes and views over `client`.
    #[must_use]
    pub fn standard(client: ApiClient<T>) -> Self {
        Self::new(RouteTable::standard(), ViewRegistry::standard(), client)
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    #[must_use]
    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Match `path` and instantiate its view if needed, without fetching
    /// any data.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NotFound`] when no route matches, or
    /// [`ViewError::Unregistered`] when the route names an unknown view.
    pub fn resolve(&self, path: &str) -> Result<(RouteMatch, Arc<View>), NavigationError> {
        let route = self
            .routes
            .resolve(path)
            .ok_or_else(|| NavigationError::NotFound(path.to_string()))?;
        let view = self.views.load(route.view)?;
        Ok((route, view))
    }

    /// Resolve `path`, then load the data its view shows.
    ///
    /// # Errors
    ///
    /// As for [`resolve`](Self::resolve), plus any error from the view's
    /// API calls.
    pub async fn open(&self, path: &str) -> Result<Navigation, NavigationError> {
        let (route, view) = self.resolve(path)?;
        let data = view.load(&self.client, &route.params).await?;
        Ok(Navigation {
            page: route.page,
            params: route.params,
            data,
        })
    }
}
