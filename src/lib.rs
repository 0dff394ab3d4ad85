pub mod auction;
pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod notifications;
pub mod service;
pub mod store;
