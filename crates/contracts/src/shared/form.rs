//! Create-or-update contract shared by every entity form.

use super::validation::ValidationErrors;
use serde::Serialize;

/// What a form submission turns into. Create and update are distinct
/// variants; only updates carry an identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest<C, U> {
    Create(C),
    Update { id: String, patch: U },
}

impl<C, U> SubmitRequest<C, U> {
    pub fn is_update(&self) -> bool {
        matches!(self, SubmitRequest::Update { .. })
    }
}

/// A form draft for one entity type.
///
/// Drafts start blank (create mode) or seeded from an existing entity (edit
/// mode). Validation never touches the network; only a valid draft is turned
/// into a DTO, and DTOs never contain server-computed fields.
pub trait EntityForm: Clone + Sized {
    type Entity;
    type Create: Serialize;
    type Update: Serialize;

    fn blank() -> Self;

    fn from_entity(entity: &Self::Entity) -> Self;

    fn validate(&self) -> Result<(), ValidationErrors>;

    fn to_create(&self) -> Self::Create;

    fn to_update(&self) -> Self::Update;

    /// Validate, then build a create request, or an update request when
    /// `editing_id` is set.
    fn submit(
        &self,
        editing_id: Option<&str>,
    ) -> Result<SubmitRequest<Self::Create, Self::Update>, ValidationErrors> {
        self.validate()?;
        Ok(match editing_id {
            Some(id) => SubmitRequest::Update {
                id: id.to_string(),
                patch: self.to_update(),
            },
            None => SubmitRequest::Create(self.to_create()),
        })
    }
}
