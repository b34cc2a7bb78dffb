//! # Textstore Shared
//!
//! Shared domain types for the textstore persistence core: the entity and
//! DTO contracts, the raw text record itself, pagination types for search
//! results, and the timestamp wire format used by every backend.

pub mod entity;
pub mod page;
pub mod raw_text;
pub mod time;

pub use entity::{Dto, Entity};
pub use page::{PageRequest, SearchHit, SearchPage};
pub use raw_text::{RawTextDocument, RawTextDto};
