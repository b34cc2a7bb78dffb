//! The generic persistence service.
//!
//! Coordinates a converter and a backend repository for one entity type,
//! assigning tracking timestamps and enforcing identity invariants. All
//! state lives in the backend; the service itself is stateless across calls.

use std::marker::PhantomData;

use chrono::{Local, NaiveDateTime};
use tracing::{error, info};

use crate::converter::DtoEntityConverter;
use crate::errors::ServiceError;
use textstore_repository::Repository;
use textstore_shared::{Dto, Entity};

/// Persistence service over a converter and a backend repository.
///
/// The backend is bound once at construction; the service works identically
/// whether it is the document store or the search index client. Concurrent
/// mutations of the same id are not coordinated here: last write wins.
///
/// Tracking timestamps are assigned exclusively by this service. Values a
/// caller sets on the DTO are ignored, avoiding clock-authority conflicts
/// between client and server.
pub struct DataService<D, E, C, R> {
    converter: C,
    repository: R,
    _types: PhantomData<fn() -> (D, E)>,
}

impl<D, E, C, R> DataService<D, E, C, R>
where
    D: Dto,
    E: Entity,
    C: DtoEntityConverter<D, E>,
    R: Repository<E>,
{
    pub fn new(converter: C, repository: R) -> Self {
        Self {
            converter,
            repository,
            _types: PhantomData,
        }
    }

    /// Look up a record by id.
    pub async fn get_by_id(&self, id: &str) -> Result<D, ServiceError> {
        let entity = self.get_if_exists(id).await?;
        Ok(self.converter.convert_entity(&entity))
    }

    /// Create a record with the supplied timestamp as both create and
    /// update time.
    ///
    /// The converted entity must already carry an id; the service never
    /// assigns one.
    pub async fn create(&self, dto: &D, at: NaiveDateTime) -> Result<D, ServiceError> {
        let mut entity = self.converter.convert_dto(dto);
        let id = self.require_id(&entity)?;
        entity.set_create_date_time(at);
        entity.set_update_date_time(at);
        let entity = self.repository.save(entity).await?;
        info!(entity = E::NAME, id = %id, "Wrote new record");
        Ok(self.converter.convert_entity(&entity))
    }

    /// Create a record stamped with the current wall-clock time.
    pub async fn create_now(&self, dto: &D) -> Result<D, ServiceError> {
        self.create(dto, Local::now().naive_local()).await
    }

    /// Apply the DTO's present fields onto the stored record and stamp the
    /// supplied update time. The create time is untouched.
    pub async fn update(&self, dto: &D, at: NaiveDateTime) -> Result<D, ServiceError> {
        let id = dto
            .id()
            .ok_or(ServiceError::MissingId(E::NAME))?
            .to_string();
        let entity = self.get_if_exists(&id).await?;
        let mut entity = self.converter.update_from_dto(entity, dto);
        entity.set_update_date_time(at);
        let entity = self.repository.save(entity).await?;
        info!(entity = E::NAME, id = %id, "Updated record");
        Ok(self.converter.convert_entity(&entity))
    }

    /// Update a record stamped with the current wall-clock time.
    pub async fn update_now(&self, dto: &D) -> Result<D, ServiceError> {
        self.update(dto, Local::now().naive_local()).await
    }

    /// Delete a record by id, returning the pre-delete state so callers can
    /// observe what was removed.
    pub async fn delete_by_id(&self, id: &str) -> Result<D, ServiceError> {
        let entity = self.get_if_exists(id).await?;
        self.repository.delete_by_id(id).await?;
        info!(entity = E::NAME, id = %id, "Deleted record");
        Ok(self.converter.convert_entity(&entity))
    }

    /// Delete the record identified by the DTO's id.
    pub async fn delete(&self, dto: &D) -> Result<D, ServiceError> {
        let id = dto
            .id()
            .ok_or(ServiceError::MissingId(E::NAME))?
            .to_string();
        self.delete_by_id(&id).await
    }

    /// Whether a record exists for the id. Absence is not an error.
    pub async fn exists(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.repository.find_by_id(id).await?.is_some())
    }

    async fn get_if_exists(&self, id: &str) -> Result<E, ServiceError> {
        match self.repository.find_by_id(id).await? {
            Some(entity) => Ok(entity),
            None => {
                error!(entity = E::NAME, id = %id, "No entity found");
                Err(ServiceError::NotFound(id.to_string()))
            }
        }
    }

    fn require_id(&self, entity: &E) -> Result<String, ServiceError> {
        match entity.id() {
            Some(id) => Ok(id.to_string()),
            None => {
                error!(entity = E::NAME, "No id found on entity after conversion");
                Err(ServiceError::MissingId(E::NAME))
            }
        }
    }
}
