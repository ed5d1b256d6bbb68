pub mod capture;
pub mod catalog;
pub mod config;
pub mod expiry;
pub mod intercept;
pub mod logging;
pub mod reconcile;
pub mod reload;
pub mod store;
