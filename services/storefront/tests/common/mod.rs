// tests/common/mod.rs
//
// In-memory port implementations shared by the integration tests. Each test
// binary uses a different subset of these.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;
use storefront_core::domain::{AdminLogin, LineItem, Notification, Severity, WishlistEntry};
use storefront_core::ports::{
    AdminGateway, CartStore, Notifier, PortError, PortResult, WishlistStore,
};

pub fn line(product_id: &str, unit_price: i64, quantity: u32) -> LineItem {
    LineItem {
        product_id: product_id.to_string(),
        name: format!("Item {product_id}"),
        unit_price: Decimal::from(unit_price),
        quantity,
        image: None,
        artisan: None,
    }
}

pub fn wishlist_entry(product_id: &str) -> WishlistEntry {
    WishlistEntry {
        product_id: product_id.to_string(),
        name: format!("Item {product_id}"),
        price: Decimal::from(10),
        image: None,
        artisan: None,
    }
}

//=========================================================================================
// RecordingNotifier
//=========================================================================================

/// Captures every notification a view-model emits so tests can assert on the
/// exact toasts a user would see.
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.severity)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.lock().unwrap().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

//=========================================================================================
// InMemoryCartStore
//=========================================================================================

/// A `CartStore` backed by a plain vector, with switches to simulate the
/// failure modes of the remote service.
pub struct InMemoryCartStore {
    items: Mutex<Vec<LineItem>>,
    pub fail_fetch: AtomicBool,
    pub fail_mutations: AtomicBool,
    failing_removals: Mutex<HashSet<String>>,
}

impl InMemoryCartStore {
    pub fn with_items(items: Vec<LineItem>) -> Self {
        Self {
            items: Mutex::new(items),
            fail_fetch: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            failing_removals: Mutex::new(HashSet::new()),
        }
    }

    /// Make removals of one specific product fail while others succeed.
    pub fn fail_removal_of(&self, product_id: &str) {
        self.failing_removals
            .lock()
            .unwrap()
            .insert(product_id.to_string());
    }

    /// The server-side view of the cart.
    pub fn server_items(&self) -> Vec<LineItem> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn fetch_cart(&self, _user_id: &str) -> PortResult<Vec<LineItem>> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(PortError::Network("connection refused".to_string()));
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn add_item(&self, _user_id: &str, product_id: &str, quantity: u32) -> PortResult<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(PortError::Network("connection refused".to_string()));
        }
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity += quantity,
            None => return Err(PortError::NotFound(product_id.to_string())),
        }
        Ok(())
    }

    async fn set_quantity(&self, _user_id: &str, product_id: &str, quantity: u32) -> PortResult<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(PortError::Network("connection refused".to_string()));
        }
        if quantity < 1 {
            return Err(PortError::Validation("quantity must be at least 1".to_string()));
        }
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity = quantity,
            None => return Err(PortError::NotFound(product_id.to_string())),
        }
        Ok(())
    }

    async fn remove_item(&self, _user_id: &str, product_id: &str) -> PortResult<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(PortError::Network("connection refused".to_string()));
        }
        if self.failing_removals.lock().unwrap().contains(product_id) {
            return Err(PortError::Network("connection reset".to_string()));
        }
        self.items
            .lock()
            .unwrap()
            .retain(|i| i.product_id != product_id);
        Ok(())
    }
}

//=========================================================================================
// InMemoryWishlistStore
//=========================================================================================

pub struct InMemoryWishlistStore {
    entries: Mutex<Vec<WishlistEntry>>,
    pub fail_fetch: AtomicBool,
    pub fail_mutations: AtomicBool,
}

impl InMemoryWishlistStore {
    pub fn empty() -> Self {
        Self::with_entries(Vec::new())
    }

    pub fn with_entries(entries: Vec<WishlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            fail_fetch: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
        }
    }

    pub fn server_entries(&self) -> Vec<WishlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WishlistStore for InMemoryWishlistStore {
    async fn fetch_wishlist(&self, _user_id: &str) -> PortResult<Vec<WishlistEntry>> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(PortError::Network("connection refused".to_string()));
        }
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn add(&self, _user_id: &str, product_id: &str) -> PortResult<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(PortError::Network("connection refused".to_string()));
        }
        self.entries.lock().unwrap().push(wishlist_entry(product_id));
        Ok(())
    }

    async fn remove(&self, _user_id: &str, product_id: &str) -> PortResult<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(PortError::Network("connection refused".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .retain(|e| e.product_id != product_id);
        Ok(())
    }
}

//=========================================================================================
// MockAdminGateway
//=========================================================================================

pub enum GatewayBehavior {
    /// Accept any credentials and hand back this token.
    Accept { token: Option<String> },
    /// Respond, but refuse, with this server message.
    Deny { message: String },
    /// Simulate the service being unreachable.
    Offline,
}

pub struct MockAdminGateway {
    behavior: GatewayBehavior,
    pub login_calls: AtomicUsize,
    pub register_calls: AtomicUsize,
}

impl MockAdminGateway {
    pub fn new(behavior: GatewayBehavior) -> Self {
        Self {
            behavior,
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AdminGateway for MockAdminGateway {
    async fn login(&self, _email: &str, _password: &str) -> PortResult<AdminLogin> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            GatewayBehavior::Accept { token } => Ok(AdminLogin {
                token: token.clone(),
                message: "Login successful".to_string(),
            }),
            GatewayBehavior::Deny { message } => Err(PortError::Unauthorized(message.clone())),
            GatewayBehavior::Offline => Err(PortError::Network("connection refused".to_string())),
        }
    }

    async fn register(&self, _user_name: &str, _email: &str, _password: &str) -> PortResult<()> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            GatewayBehavior::Accept { .. } => Ok(()),
            GatewayBehavior::Deny { message } => Err(PortError::Validation(message.clone())),
            GatewayBehavior::Offline => Err(PortError::Network("connection refused".to_string())),
        }
    }
}
