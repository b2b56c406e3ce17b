//! services/storefront/src/cart.rs
//!
//! The cart view-model: keeps a local cart in sync with the remote cart
//! store and drives the pricing engine. One `CartSession` exists per signed-in
//! user and owns that user's cart for its lifetime.

use std::sync::Arc;

use rust_decimal::Decimal;
use storefront_core::domain::{LineItem, Notification, PriceBreakdown};
use storefront_core::ports::{CartStore, Notifier, WishlistStore};
use storefront_core::pricing::{self, AppliedCoupon, CouponError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

//=========================================================================================
// Session Phase
//=========================================================================================

/// Where the session is in its lifecycle.
///
/// Failures never produce a terminal state: a failed call surfaces as a
/// notification and the session returns to `Ready` with its previous list
/// intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPhase {
    /// No load has been issued yet.
    Idle,
    /// The initial fetch is in flight.
    Loading,
    /// A list and breakdown are available.
    Ready,
    /// An update, removal or clear is in flight; the list is frozen.
    Mutating,
}

//=========================================================================================
// CartSession
//=========================================================================================

/// The view-model behind the cart screen.
///
/// Every mutating operation takes `&mut self`, so mutations from one session
/// are serialized by construction: rapid UI events queue behind the exclusive
/// borrow instead of racing each other. After every successful mutation the
/// session re-fetches the authoritative list from the remote store and
/// recomputes the breakdown, so there is exactly one subtotal path.
pub struct CartSession {
    user_id: String,
    store: Arc<dyn CartStore>,
    notifier: Arc<dyn Notifier>,
    phase: CartPhase,
    items: Vec<LineItem>,
    /// The accepted coupon, if any. Only the rate is stored; the absolute
    /// discount is rederived from the current subtotal on every recompute.
    coupon: Option<AppliedCoupon>,
    breakdown: PriceBreakdown,
    /// Requested when the owning view is torn down; responses that resolve
    /// afterwards are discarded instead of mutating unmounted state.
    cancel: CancellationToken,
}

impl CartSession {
    /// Creates a session for one user. The identity is an explicit parameter;
    /// there is no ambient "current user".
    pub fn new(user_id: impl Into<String>, store: Arc<dyn CartStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            user_id: user_id.into(),
            store,
            notifier,
            phase: CartPhase::Idle,
            items: Vec::new(),
            coupon: None,
            breakdown: pricing::compute_breakdown(&[], Decimal::ZERO),
            cancel: CancellationToken::new(),
        }
    }

    /// Performs the initial fetch.
    ///
    /// On failure the session still becomes `Ready`, degraded to an empty
    /// cart with an error notification, so the screen renders instead of
    /// wedging on a spinner. Any previously applied coupon is dropped.
    pub async fn load(&mut self) {
        self.phase = CartPhase::Loading;
        let fetched = self.store.fetch_cart(&self.user_id).await;
        if self.cancel.is_cancelled() {
            return;
        }

        match fetched {
            Ok(items) => {
                debug!(user_id = %self.user_id, count = items.len(), "cart loaded");
                self.items = items;
            }
            Err(err) => {
                warn!(user_id = %self.user_id, error = %err, "failed to load cart");
                self.items.clear();
                self.notifier
                    .notify(Notification::error("Failed to load cart. Please try again."));
            }
        }

        self.coupon = None;
        self.recompute();
        self.phase = CartPhase::Ready;
    }

    /// Sets the quantity of one line.
    ///
    /// A negative quantity is a silent no-op. Zero removes the line entirely
    /// (a quantity of 0 means "absent", never "present with zero"). On any
    /// failure the prior cart stays untouched and an error notification is
    /// emitted; there is no automatic retry.
    pub async fn set_quantity(&mut self, product_id: &str, new_quantity: i32) {
        if new_quantity < 0 {
            return;
        }

        self.phase = CartPhase::Mutating;
        let outcome = if new_quantity == 0 {
            self.store
                .remove_item(&self.user_id, product_id)
                .await
                .map(|()| "Item removed from cart")
        } else {
            self.store
                .set_quantity(&self.user_id, product_id, new_quantity as u32)
                .await
                .map(|()| "Cart updated")
        };

        match outcome {
            Ok(message) => {
                self.notifier.notify(Notification::success(message));
                self.resync().await;
            }
            Err(err) => {
                warn!(user_id = %self.user_id, product_id, error = %err, "cart update failed");
                self.notifier
                    .notify(Notification::error("Failed to update cart. Please try again."));
            }
        }
        self.phase = CartPhase::Ready;
    }

    /// Removes one line from the cart.
    pub async fn remove_item(&mut self, product_id: &str) {
        self.phase = CartPhase::Mutating;
        match self.store.remove_item(&self.user_id, product_id).await {
            Ok(()) => {
                self.notifier.notify(Notification::success("Item removed from cart"));
                self.resync().await;
            }
            Err(err) => {
                warn!(user_id = %self.user_id, product_id, error = %err, "cart removal failed");
                self.notifier
                    .notify(Notification::error("Failed to remove item. Please try again."));
            }
        }
        self.phase = CartPhase::Ready;
    }

    /// Empties the cart with one removal call per line, tracking per-item
    /// outcomes.
    ///
    /// Only lines the server confirmed removed disappear locally; lines whose
    /// removal failed remain in the cart and are reported as still present.
    /// The success notification is emitted only for a clean sweep.
    pub async fn clear_cart(&mut self) {
        self.phase = CartPhase::Mutating;

        let targets = std::mem::take(&mut self.items);
        let mut kept = Vec::new();
        for item in targets {
            match self.store.remove_item(&self.user_id, &item.product_id).await {
                Ok(()) => {}
                Err(err) => {
                    warn!(
                        user_id = %self.user_id,
                        product_id = %item.product_id,
                        error = %err,
                        "removal failed while clearing cart"
                    );
                    kept.push(item);
                }
            }
            if self.cancel.is_cancelled() {
                return;
            }
        }

        let cleared = kept.is_empty();
        self.items = kept;
        self.recompute();

        if cleared {
            self.notifier.notify(Notification::success("Cart cleared"));
        } else {
            self.notifier.notify(Notification::error(format!(
                "Failed to clear cart. {} item(s) are still in your cart.",
                self.items.len()
            )));
        }
        self.phase = CartPhase::Ready;
    }

    /// Validates a coupon code against the fixed table and applies it.
    ///
    /// Purely local; coupon validation never reaches the network. On any
    /// rejection the currently applied discount is left unchanged.
    pub fn apply_coupon(&mut self, code: &str) {
        match pricing::resolve_coupon(code) {
            Ok(coupon) => {
                self.notifier.notify(Notification::success(format!(
                    "Coupon applied: {}% discount",
                    coupon.percent
                )));
                self.coupon = Some(coupon);
                self.recompute();
            }
            Err(CouponError::Empty) => {
                self.notifier
                    .notify(Notification::warning("Please enter a coupon code"));
            }
            Err(CouponError::Invalid) => {
                self.notifier.notify(Notification::error("Invalid coupon code"));
            }
        }
    }

    /// Moves one line to the user's wishlist: adds it there, removes it from
    /// the cart, then resyncs. Unknown product ids are a no-op.
    pub async fn move_to_wishlist(&mut self, product_id: &str, wishlist: &dyn WishlistStore) {
        let Some(item) = self.items.iter().find(|i| i.product_id == product_id).cloned() else {
            return;
        };

        self.phase = CartPhase::Mutating;
        let moved = match wishlist.add(&self.user_id, product_id).await {
            Ok(()) => self.store.remove_item(&self.user_id, product_id).await,
            Err(err) => Err(err),
        };

        match moved {
            Ok(()) => {
                self.notifier
                    .notify(Notification::success(format!("{} moved to your wishlist", item.name)));
                self.resync().await;
            }
            Err(err) => {
                warn!(user_id = %self.user_id, product_id, error = %err, "move to wishlist failed");
                self.notifier.notify(Notification::error(
                    "Failed to move item to your wishlist. Please try again.",
                ));
            }
        }
        self.phase = CartPhase::Ready;
    }

    /// A handle the owning view can use to cancel this session on teardown.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    //=====================================================================================
    // Derived state
    //=====================================================================================

    pub fn phase(&self) -> CartPhase {
        self.phase
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        self.breakdown
    }

    pub fn coupon(&self) -> Option<&AppliedCoupon> {
        self.coupon.as_ref()
    }

    /// Total number of units in the cart (the navbar badge number).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    //=====================================================================================
    // Internals
    //=====================================================================================

    /// Re-fetches the authoritative list after a successful mutation. On
    /// failure the prior local list stays in place alongside an error
    /// notification.
    async fn resync(&mut self) {
        let fetched = self.store.fetch_cart(&self.user_id).await;
        if self.cancel.is_cancelled() {
            return;
        }

        match fetched {
            Ok(items) => {
                self.items = items;
                self.recompute();
            }
            Err(err) => {
                warn!(user_id = %self.user_id, error = %err, "failed to refresh cart after mutation");
                self.notifier
                    .notify(Notification::error("Failed to update cart. Please try again."));
            }
        }
    }

    fn recompute(&mut self) {
        let subtotal = pricing::subtotal(&self.items);
        let discount = self
            .coupon
            .as_ref()
            .map(|c| c.amount_for(subtotal))
            .unwrap_or(Decimal::ZERO);
        self.breakdown = pricing::compute_breakdown(&self.items, discount);
    }
}
