use crate::schema::DocsSchema;
use crate::schema::SchemaService;
use crate::schema::SchemaServiceError;
use crate::ArgumentDefinition;
use crate::DirectiveDefinition;
use std::sync::OnceLock;

/// A [`SchemaService`] whose [`DocsSchema`] is filled in after construction,
/// e.g. by a background loader.
///
/// Until [`SchemaSlot::fill()`] is called every lookup reports
/// [`SchemaServiceError::NotLoaded`]. A slot can be filled at most once.
#[derive(Debug, Default)]
pub struct SchemaSlot {
    schema: OnceLock<DocsSchema>,
}
impl SchemaSlot {
    /// Stores `schema` in this slot. If the slot was already filled, the
    /// rejected schema is handed back.
    pub fn fill(&self, schema: DocsSchema) -> Result<(), DocsSchema> {
        self.schema.set(schema)?;
        log::debug!("Schema slot filled.");
        Ok(())
    }

    pub fn get(&self) -> Option<&DocsSchema> {
        self.schema.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.schema.get().is_some()
    }

    pub fn new() -> Self {
        Self::default()
    }

    fn loaded(&self) -> Result<&DocsSchema, SchemaServiceError> {
        self.schema.get().ok_or(SchemaServiceError::NotLoaded)
    }
}
impl SchemaService for SchemaSlot {
    fn is_allowed_directive(
        &self,
        directive_name: &str,
    ) -> Result<bool, SchemaServiceError> {
        self.loaded()?.is_allowed_directive(directive_name)
    }

    fn directive(
        &self,
        directive_name: &str,
    ) -> Result<Option<&DirectiveDefinition>, SchemaServiceError> {
        self.loaded()?.directive(directive_name)
    }

    fn allowed_arguments<'def>(
        &self,
        definition: &'def DirectiveDefinition,
    ) -> Result<Vec<&'def ArgumentDefinition>, SchemaServiceError> {
        self.loaded()?.allowed_arguments(definition)
    }
}
