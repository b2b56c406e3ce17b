pub mod adapters;
pub mod auth;
pub mod cart;
pub mod config;
pub mod error;
pub mod notify;
pub mod wishlist;
