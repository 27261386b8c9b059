/// State management module
///
/// This module holds all application state, including:
/// - Shared data structures (data.rs)
/// - The product/version selection and its cascading resets (session.rs)
/// - The version and item resolvers (versions.rs, items.rs)
/// - Download link derivation and copy acknowledgement (presenter.rs)
/// - The one-slot request arena the resolvers share (slot.rs)
///
/// Nothing here performs I/O; the application turns tickets into tasks.

pub mod data;
pub mod items;
pub mod presenter;
pub mod session;
pub mod slot;
pub mod versions;

pub use session::Session;
