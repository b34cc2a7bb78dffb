//! DTO/entity converters.
//!
//! Converters translate between the caller-facing DTO shape and the stored
//! entity shape. Updates copy only fields that are present on the source;
//! absent fields leave the target untouched (partial-update semantics).

use textstore_shared::{Dto, Entity, RawTextDocument, RawTextDto};

/// Copy the DTO's id onto the entity when present.
///
/// The base step of every `update_from_dto`; overriding converters call
/// this before copying their payload fields.
pub fn apply_dto_identity<D: Dto, E: Entity>(mut entity: E, dto: &D) -> E {
    if let Some(id) = dto.id() {
        entity.set_id(id.to_string());
    }
    entity
}

/// Copy the entity's id and tracking timestamps onto the DTO when present.
///
/// The base step of every `update_from_entity`.
pub fn apply_entity_tracking<D: Dto, E: Entity>(mut dto: D, entity: &E) -> D {
    if let Some(id) = entity.id() {
        dto.set_id(id.to_string());
    }
    if let Some(at) = entity.create_date_time() {
        dto.set_create_date_time(at);
    }
    if let Some(at) = entity.update_date_time() {
        dto.set_update_date_time(at);
    }
    dto
}

/// Conversion capability between a DTO type and an entity type.
///
/// `convert_*` build a fresh target from the source; `update_from_*` apply
/// the source's present fields onto an existing target.
pub trait DtoEntityConverter<D: Dto, E: Entity>: Send + Sync {
    fn convert_dto(&self, dto: &D) -> E;

    fn convert_entity(&self, entity: &E) -> D;

    fn update_from_dto(&self, entity: E, dto: &D) -> E {
        apply_dto_identity(entity, dto)
    }

    fn update_from_entity(&self, dto: D, entity: &E) -> D {
        apply_entity_tracking(dto, entity)
    }
}

/// Converter for the raw text record.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawTextConverter;

impl DtoEntityConverter<RawTextDto, RawTextDocument> for RawTextConverter {
    fn convert_dto(&self, dto: &RawTextDto) -> RawTextDocument {
        self.update_from_dto(RawTextDocument::default(), dto)
    }

    fn convert_entity(&self, entity: &RawTextDocument) -> RawTextDto {
        self.update_from_entity(RawTextDto::default(), entity)
    }

    fn update_from_dto(&self, entity: RawTextDocument, dto: &RawTextDto) -> RawTextDocument {
        let mut entity = apply_dto_identity(entity, dto);
        if let Some(text) = &dto.text_content {
            entity.text_content = Some(text.clone());
        }
        entity
    }

    fn update_from_entity(&self, dto: RawTextDto, entity: &RawTextDocument) -> RawTextDto {
        let mut dto = apply_entity_tracking(dto, entity);
        if let Some(text) = &entity.text_content {
            dto.text_content = Some(text.clone());
        }
        dto
    }
}
