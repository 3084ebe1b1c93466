use crate::schema::DocsSchemaBuilder;
use crate::schema::SchemaService;
use crate::schema::SchemaServiceError;
use crate::ArgumentDefinition;
use crate::DirectiveDefinition;
use crate::DirectiveSite;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

/// Which directives documentation is allowed to display.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DirectiveAllowList {
    /// Every directive the schema defines (including built-ins).
    #[default]
    AllDefined,

    /// Only the named directives, and only if the schema defines them.
    Only(HashSet<String>),
}
impl DirectiveAllowList {
    pub fn permits(&self, directive_name: &str) -> bool {
        match self {
            Self::AllDefined => true,
            Self::Only(names) => names.contains(directive_name),
        }
    }
}

/// A fully loaded, immutable schema snapshot for documentation purposes.
#[derive(Clone, Debug, PartialEq)]
pub struct DocsSchema {
    pub(crate) allow_list: DirectiveAllowList,
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) directive_sites: Vec<DirectiveSite>,
    pub(crate) hidden_arguments: HashMap<String, HashSet<String>>,
}
impl DocsSchema {
    /// Returns an [`IndexMap<String, DirectiveDefinition>`] containing all
    /// directives known to this [`DocsSchema`], in the order they were
    /// defined.
    ///
    /// [^note] This map includes both directives defined in the loaded SDL
    /// as well as implicitly-defined, built-in directives like
    /// `@deprecated`.
    pub fn all_directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    pub fn allow_list(&self) -> &DirectiveAllowList {
        &self.allow_list
    }

    /// Helper function that just delegates to [`DocsSchemaBuilder::new()`].
    pub fn builder() -> DocsSchemaBuilder {
        DocsSchemaBuilder::new()
    }

    /// Every directive usage written in the loaded SDL, in document order.
    pub fn directive_sites(&self) -> &[DirectiveSite] {
        self.directive_sites.as_slice()
    }
}
impl SchemaService for DocsSchema {
    fn is_allowed_directive(
        &self,
        directive_name: &str,
    ) -> Result<bool, SchemaServiceError> {
        Ok(self.directive_defs.contains_key(directive_name)
            && self.allow_list.permits(directive_name))
    }

    fn directive(
        &self,
        directive_name: &str,
    ) -> Result<Option<&DirectiveDefinition>, SchemaServiceError> {
        Ok(self.directive_defs.get(directive_name))
    }

    fn allowed_arguments<'def>(
        &self,
        definition: &'def DirectiveDefinition,
    ) -> Result<Vec<&'def ArgumentDefinition>, SchemaServiceError> {
        let hidden = self.hidden_arguments.get(definition.name());
        Ok(definition.arguments().iter()
            .filter(|arg| !hidden.is_some_and(|names| names.contains(arg.name())))
            .collect())
    }
}
