//! # Permaweave Gateway
//!
//! The remote-node collaborator seam: the [`Gateway`] trait exposes the
//! handful of request/response operations transaction preparation needs
//! (anchor, price, submit, lookups), the [`Route`] model describes their
//! paths and methods, and [`GatewayConfig`] carries the injected base URL.
//!
//! No HTTP client ships here; bind any client to the trait out-of-tree. An
//! in-memory implementation for tests lives in [`memory`].

pub mod config;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod response;
pub mod routes;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use gateway::Gateway;
pub use memory::MemoryGateway;
pub use response::{ensure_success, parse_winston};
pub use routes::{Method, Route};
