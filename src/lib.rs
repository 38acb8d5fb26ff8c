// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod session;

pub use crate::config::Config;
pub use crate::core::browser::CatalogFilter;
pub use crate::core::catalog::CatalogStore;
pub use crate::core::collection::UserCollection;
pub use crate::core::engine::{Analysis, NoteProfile, ProfileEngine};
pub use crate::core::types::{FragranceEntry, LayeringSuggestion, NoteCount};
pub use crate::error::{Error, Result};
pub use crate::session::{HybridStore, Session};
