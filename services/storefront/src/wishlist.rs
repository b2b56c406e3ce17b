//! services/storefront/src/wishlist.rs
//!
//! The wishlist view-model. Unlike the cart there are no derived totals here,
//! so a confirmed removal just filters the local list instead of re-fetching.

use std::sync::Arc;

use storefront_core::domain::{Notification, WishlistEntry};
use storefront_core::ports::{Notifier, WishlistStore};
use tracing::{debug, warn};

pub struct WishlistView {
    user_id: String,
    store: Arc<dyn WishlistStore>,
    notifier: Arc<dyn Notifier>,
    entries: Vec<WishlistEntry>,
    loading: bool,
}

impl WishlistView {
    pub fn new(user_id: impl Into<String>, store: Arc<dyn WishlistStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            user_id: user_id.into(),
            store,
            notifier,
            entries: Vec::new(),
            loading: true,
        }
    }

    /// Fetches the wishlist. On failure the view degrades to an empty list
    /// with an error notification rather than a broken screen.
    pub async fn load(&mut self) {
        match self.store.fetch_wishlist(&self.user_id).await {
            Ok(entries) => {
                debug!(user_id = %self.user_id, count = entries.len(), "wishlist loaded");
                self.entries = entries;
            }
            Err(err) => {
                warn!(user_id = %self.user_id, error = %err, "failed to load wishlist");
                self.entries.clear();
                self.notifier
                    .notify(Notification::error("Could not load your wishlist"));
            }
        }
        self.loading = false;
    }

    /// Removes one product. The local list is filtered only after the remote
    /// store confirms.
    pub async fn remove(&mut self, product_id: &str) {
        match self.store.remove(&self.user_id, product_id).await {
            Ok(()) => {
                self.entries.retain(|e| e.product_id != product_id);
                self.notifier
                    .notify(Notification::success("Item removed from wishlist"));
            }
            Err(err) => {
                warn!(user_id = %self.user_id, product_id, error = %err, "wishlist removal failed");
                self.notifier
                    .notify(Notification::error("Could not remove item from wishlist"));
            }
        }
    }

    /// Saves a product to the wishlist. The entry list refreshes on the next
    /// [`WishlistView::load`]; product pages call this without holding a
    /// loaded view.
    pub async fn add(&mut self, product_id: &str) {
        match self.store.add(&self.user_id, product_id).await {
            Ok(()) => {
                self.notifier.notify(Notification::success("Added to your wishlist"));
            }
            Err(err) => {
                warn!(user_id = %self.user_id, product_id, error = %err, "wishlist add failed");
                self.notifier
                    .notify(Notification::error("Could not update your wishlist"));
            }
        }
    }

    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
