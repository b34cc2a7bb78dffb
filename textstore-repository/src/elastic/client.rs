//! Search index client implementation.
//!
//! This module provides the HTTP client for the search index service. It
//! implements the backend capability (save/find/delete) and adds the paged
//! fuzzy search that only this backend supports.

use std::marker::PhantomData;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::elastic::config::ElasticConfig;
use crate::elastic::index::{ensure_index, IndexDescriptor};
use crate::elastic::queries::{build_fuzzy_search_query, build_id_query, DateRangeFilter};
use crate::elastic::response::SearchEnvelope;
use crate::elastic::templates::QueryTemplates;
use crate::errors::RepositoryError;
use crate::interfaces::Repository;
use textstore_shared::{Entity, PageRequest, SearchHit, SearchPage};

/// Edit-distance tolerance passed to the search service's matching
/// algorithm.
const FUZZINESS: u32 = 1;

/// HTTP client for one entity's search index.
///
/// The index existence check runs once at construction (best-effort, see
/// the index module); every other call is a single request/response cycle.
/// The client holds no mutable state and is safe for concurrent use.
pub struct ElasticClient<E> {
    http: reqwest::Client,
    descriptor: IndexDescriptor,
    index_url: String,
    search_url: String,
    templates: QueryTemplates,
    _entity: PhantomData<fn() -> E>,
}

impl<E> ElasticClient<E>
where
    E: Entity + Serialize + DeserializeOwned + 'static,
{
    /// Create a client for the entity's index and ensure the index exists.
    ///
    /// A failed existence probe does not fail construction; the error is
    /// deferred to the first real operation.
    pub async fn new(
        config: &ElasticConfig,
        templates: QueryTemplates,
    ) -> Result<Self, RepositoryError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RepositoryError::connection("client setup", e.to_string()))?;

        let descriptor = IndexDescriptor::for_entity::<E>(templates.create_index.clone());
        let index_url = config.index_url(&descriptor.name);
        let search_url = format!("{}/_search", index_url);

        ensure_index(&http, &index_url, &descriptor).await;

        info!(
            index = %descriptor.name,
            url = %index_url,
            "Created search index client"
        );

        Ok(Self {
            http,
            descriptor,
            index_url,
            search_url,
            templates,
            _entity: PhantomData,
        })
    }

    fn doc_url(&self, id: &str) -> String {
        format!("{}/_doc/{}", self.index_url, id)
    }

    async fn post_search(
        &self,
        operation: &'static str,
        query: String,
    ) -> Result<SearchEnvelope<E>, RepositoryError> {
        let response = self
            .http
            .post(&self.search_url)
            .header(CONTENT_TYPE, "application/json")
            .body(query)
            .send()
            .await
            .map_err(|e| RepositoryError::connection(operation, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                index = %self.descriptor.name,
                operation,
                status = %status,
                body = %body,
                "Search request failed"
            );
            return Err(RepositoryError::backend(operation, status.as_u16(), body));
        }

        response
            .json::<SearchEnvelope<E>>()
            .await
            .map_err(|e| RepositoryError::parse(operation, e.to_string()))
    }

    /// Run a paged fuzzy search over the entity's search field.
    ///
    /// Items come back in server relevance order, which is preserved, each
    /// with its highlight fragments verbatim.
    #[instrument(skip(self, dates), fields(index = %self.descriptor.name))]
    pub async fn search_page(
        &self,
        search_string: &str,
        dates: &DateRangeFilter,
        page: PageRequest,
    ) -> Result<SearchPage<E>, RepositoryError> {
        let query = build_fuzzy_search_query(
            &self.templates.fuzzy_search,
            search_string,
            FUZZINESS,
            dates,
            page,
        )?;
        let envelope = self.post_search("search", query).await?;

        let total_matches = envelope.hits.total.value;
        let items = envelope
            .hits
            .hits
            .into_iter()
            .map(|hit| {
                let highlights = hit.highlights_for(&self.templates.highlight_field);
                SearchHit::new(hit.source, highlights)
            })
            .collect::<Vec<_>>();

        debug!(
            index = %self.descriptor.name,
            total_matches,
            returned = items.len(),
            "Search page mapped"
        );

        Ok(SearchPage::new(items, total_matches, page))
    }
}

#[async_trait::async_trait]
impl<E> Repository<E> for ElasticClient<E>
where
    E: Entity + Serialize + DeserializeOwned + 'static,
{
    async fn save(&self, entity: E) -> Result<E, RepositoryError> {
        let id = entity
            .id()
            .ok_or_else(|| RepositoryError::invalid_query("cannot save an entity without an id"))?
            .to_string();

        let response = self
            .http
            .put(self.doc_url(&id))
            .json(&entity)
            .send()
            .await
            .map_err(|e| RepositoryError::connection("save", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                index = %self.descriptor.name,
                id = %id,
                status = %status,
                body = %body,
                "Save request failed"
            );
            return Err(RepositoryError::backend("save", status.as_u16(), body));
        }

        debug!(index = %self.descriptor.name, id = %id, "Stored document");
        // Trust the write: the stored value is not read back, given request
        // latency and the non-blocking refresh of the search service.
        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<E>, RepositoryError> {
        let query = build_id_query(&self.templates.search_by_id, id);
        let envelope = self.post_search("find_by_id", query).await?;
        Ok(envelope.hits.hits.into_iter().next().map(|hit| hit.source))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        let response = self
            .http
            .delete(self.doc_url(id))
            .send()
            .await
            .map_err(|e| RepositoryError::connection("delete_by_id", e.to_string()))?;

        let status = response.status();
        // Deleting an id that was never stored is a normal no-op.
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            error!(
                index = %self.descriptor.name,
                id = %id,
                status = %status,
                body = %body,
                "Delete request failed"
            );
            return Err(RepositoryError::backend(
                "delete_by_id",
                status.as_u16(),
                body,
            ));
        }

        debug!(index = %self.descriptor.name, id = %id, "Deleted document");
        Ok(())
    }
}
