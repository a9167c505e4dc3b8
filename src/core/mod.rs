//! Core logic - storage, repositories, sessions and search, independent of
//! any rendering layer.

/// Generic search/filter engine
pub mod filter;
/// Record id generation
pub mod id;
/// Member directory helpers
pub mod members;
/// User-facing notices
pub mod notice;
/// Entity repositories over the key-value store
pub mod repository;
/// Login, logout and the current session
pub mod session;
/// Key-value store adapter
pub mod store;
