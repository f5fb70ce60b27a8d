//! Public runtime API surface.
//!
//! This module gathers the collaborator contracts and the error types the
//! service exposes, so orchestration code stays focused on flow.

pub mod errors;
pub mod traits;

pub use errors::{BoxError, Result, RuntimeError};
pub use traits::{
    Catalog, ContainerStore, FeatureToggles, IdentifyHook, LogNotifier, Notifier,
    NullIdentifyHook, SelectionStore, Toggle,
};
