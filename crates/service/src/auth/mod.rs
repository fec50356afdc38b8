//! Authentication: token issuing, refresh-token persistence, login/refresh/logout.
//!
//! Access tokens are short-lived and never stored. Refresh tokens are signed
//! with a separate key and are only honoured while their row exists.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod token;
pub mod service;

pub use service::AuthService;
pub use token::TokenManager;
