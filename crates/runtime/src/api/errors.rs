//! Unified error types surfaced by the runtime API.
//!
//! Only collaborator-boundary failures travel through these variants.
//! Within-contract irregularities (partial draws, incompatible grades) are
//! absorbed by the engines and never appear here.
use thiserror::Error;

use loot_core::TableId;

/// Boxed source error produced by a collaborator backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("rollable table '{0}' not found in the catalog")]
    TableNotFound(TableId),

    #[error("catalog backend failed")]
    Catalog(#[source] BoxError),

    #[error("container store failed")]
    Store(#[source] BoxError),

    #[error("resolution task failed to join")]
    ResolveJoin(#[source] tokio::task::JoinError),

    #[error("loot service requires a {0} collaborator before building")]
    MissingCollaborator(&'static str),
}
