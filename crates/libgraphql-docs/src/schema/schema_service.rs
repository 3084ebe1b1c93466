use crate::ArgumentDefinition;
use crate::DirectiveDefinition;
use thiserror::Error;

/// Read-only access to the schema metadata that directive tags are computed
/// from.
///
/// Implementations may be backed by a schema that is still loading; lookups
/// made before it is ready return [`SchemaServiceError::NotLoaded`].
pub trait SchemaService {
    /// Whether `directive_name` is on this schema's allow-list of directives
    /// that documentation should display.
    fn is_allowed_directive(
        &self,
        directive_name: &str,
    ) -> Result<bool, SchemaServiceError>;

    /// Looks up the definition of `directive_name`. An unknown directive is
    /// `Ok(None)`, not an error.
    fn directive(
        &self,
        directive_name: &str,
    ) -> Result<Option<&DirectiveDefinition>, SchemaServiceError>;

    /// The declared arguments of `definition` that documentation should
    /// display, in declaration order.
    fn allowed_arguments<'def>(
        &self,
        definition: &'def DirectiveDefinition,
    ) -> Result<Vec<&'def ArgumentDefinition>, SchemaServiceError> {
        Ok(definition.arguments().iter().collect())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaServiceError {
    #[error("The schema has not finished loading")]
    NotLoaded,
}
