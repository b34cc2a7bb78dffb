//! Index lifecycle management.
//!
//! An index must exist on the search service before documents can be stored
//! or queried. The lifecycle check runs once per client construction and is
//! deliberately best-effort: a transient probe failure must not make the
//! whole service unavailable, so failures are logged and startup proceeds,
//! deferring the error to the first real operation.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{error, info, warn};

use textstore_shared::Entity;

/// Name and creation body of a search index, derived once from the entity
/// type and a template. Immutable after construction.
#[derive(Debug, Clone)]
pub struct IndexDescriptor {
    pub name: String,
    pub creation_body: String,
}

impl IndexDescriptor {
    /// Derive the descriptor for an entity type: the index name is the
    /// lower-cased entity name.
    pub fn for_entity<E: Entity>(creation_body: String) -> Self {
        Self {
            name: E::NAME.to_lowercase(),
            creation_body,
        }
    }
}

/// Ensure the index exists, creating it from the descriptor's body if the
/// existence probe reports not-found.
///
/// An existing index is trusted as-is; no drift reconciliation is attempted.
/// Creation is fire-and-forget: the resulting state is not re-read.
pub(crate) async fn ensure_index(
    http: &reqwest::Client,
    index_url: &str,
    descriptor: &IndexDescriptor,
) {
    info!(index = %descriptor.name, "Checking for existing search index");

    match http.get(index_url).send().await {
        Ok(response) if response.status().is_success() => {
            info!(
                index = %descriptor.name,
                "Found existing search index, will not attempt re-creation"
            );
            return;
        }
        Ok(response) if response.status() == StatusCode::NOT_FOUND => {
            info!(
                index = %descriptor.name,
                "Did not find existing search index, proceeding with creation"
            );
        }
        Ok(response) => {
            // Not a definitive "missing" signal; proceed optimistically and
            // let the first real operation surface the problem.
            warn!(
                index = %descriptor.name,
                status = %response.status(),
                "Unexpected status while checking for search index"
            );
            return;
        }
        Err(e) => {
            error!(
                index = %descriptor.name,
                error = %e,
                "Error while checking for search index"
            );
            return;
        }
    }

    match http
        .put(index_url)
        .header(CONTENT_TYPE, "application/json")
        .body(descriptor.creation_body.clone())
        .send()
        .await
    {
        Ok(response) if response.status().is_success() => {
            info!(index = %descriptor.name, "Created search index");
        }
        Ok(response) => {
            warn!(
                index = %descriptor.name,
                status = %response.status(),
                "Search index creation returned non-success status"
            );
        }
        Err(e) => {
            error!(
                index = %descriptor.name,
                error = %e,
                "Search index creation request failed"
            );
        }
    }
}
