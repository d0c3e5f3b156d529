//! Content-type resolution from a bare numeric id
//!
//! The catalog's title paths carry only an id, so the resolver probes the
//! movie endpoint first and falls back to the series endpoint. The fallback
//! happens only on a genuine "not found": a transport fault on either probe
//! surfaces directly instead of silently changing the inferred kind.

use thiserror::Error;

use crate::api::{TmdbClient, TmdbError};
use crate::models::{ResolvedTitle, TitleKind};

/// Resolution failure
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The id resolves under neither kind
    #[error("Title {0} not found as movie or series")]
    NotFound(u64),

    /// A probe failed for a reason other than absence; retryable
    #[error(transparent)]
    Transport(TmdbError),
}

/// Resolves a numeric id to a typed title via ordered probing
pub struct TitleResolver<'a> {
    client: &'a TmdbClient,
}

impl<'a> TitleResolver<'a> {
    pub fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Probe movie, then series; report kind and metadata of the hit
    pub async fn resolve(&self, id: u64) -> Result<ResolvedTitle, ResolveError> {
        match self.client.movie(id).await {
            Ok(metadata) => Ok(ResolvedTitle {
                kind: TitleKind::Movie,
                metadata,
            }),
            Err(e) if e.is_not_found() => match self.client.series(id).await {
                Ok(metadata) => Ok(ResolvedTitle {
                    kind: TitleKind::Series,
                    metadata,
                }),
                Err(e) if e.is_not_found() => Err(ResolveError::NotFound(id)),
                Err(e) => Err(ResolveError::Transport(e)),
            },
            Err(e) => Err(ResolveError::Transport(e)),
        }
    }
}
