//! Application state shared across the view layer.
//!
//! There is no implicit global: the state is constructed exactly once at
//! startup and passed by reference (or cheap clone) to whichever part of the
//! view layer needs it. Cart hydration happens inside the constructor, so a
//! reachable `AppState` always holds a hydrated cart manager.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::cart::{CartManager, CartStore, FileStore, LogSink, NotificationSink};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::content::{ContactInfo, ContentStore};

/// Application state shared across the storefront.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    content: ContentStore,
    contact: ContactInfo,
    cart: Mutex<CartManager>,
}

impl AppState {
    /// Create the application state with production wiring: the built-in
    /// catalog and content, a file-backed cart store under the configured
    /// data directory, and tracing-backed notifications.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let store = FileStore::new(config.data_dir.clone());
        Self::with_parts(
            config,
            Catalog::kranian(),
            ContentStore::kranian(),
            Box::new(store),
            Box::new(LogSink),
        )
    }

    /// Create the application state with explicit collaborators. Used by
    /// tests to swap in an in-memory store or a recording sink.
    #[must_use]
    pub fn with_parts(
        config: StorefrontConfig,
        catalog: Catalog,
        content: ContentStore,
        store: Box<dyn CartStore>,
        sink: Box<dyn NotificationSink>,
    ) -> Self {
        let cart = CartManager::new(store, sink, config.currency);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                content,
                contact: ContactInfo::kranian(),
                cart: Mutex::new(cart),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the blog content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Get a reference to the contact page details.
    #[must_use]
    pub fn contact(&self) -> &ContactInfo {
        &self.inner.contact
    }

    /// Lock the cart manager for a sequence of operations.
    ///
    /// # Panics
    ///
    /// Panics if a previous holder panicked mid-operation. That is a
    /// programming-contract violation, not a recoverable state: the cart may
    /// be between mutation and persist.
    #[must_use]
    pub fn cart(&self) -> MutexGuard<'_, CartManager> {
        self.inner
            .cart
            .lock()
            .expect("cart manager lock poisoned")
    }
}
