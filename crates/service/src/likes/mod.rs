//! Album likes with a cache-aside counter.
//!
//! Reads go cache first and fall back to the store. Every like-row write goes
//! through [`writer::LikeWriter`], which hands the committed
//! [`domain::LikeMutation`] to a [`invalidation::LikeInvalidation`] hook. The
//! hook is the only place `like:*` keys are removed.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod invalidation;
pub mod writer;
pub mod service;

pub use service::LikeService;
