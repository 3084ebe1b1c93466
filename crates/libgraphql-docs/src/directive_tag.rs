use crate::formatter::format_directive_with_schema;
use crate::link::directive_href;
use crate::link::UrlPathJoiner;
use crate::schema::SchemaService;
use crate::visibility;
use crate::DirectiveDefinition;
use crate::DirectiveUsage;
use serde::Serialize;

/// Everything a rendering layer needs to draw one directive tag.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectiveTag {
    pub href: String,
    pub tooltip_text: String,
}
impl DirectiveTag {
    /// Computes the tag for `usage`, or `None` if the directive should not be
    /// displayed.
    pub fn compute<S, J>(
        usage: &DirectiveUsage,
        schema: &S,
        joiner: &J,
        base: &str,
    ) -> Option<Self>
    where
        S: SchemaService + ?Sized,
        J: UrlPathJoiner + ?Sized,
    {
        DirectiveTagModel::new(schema, usage.clone()).tag(joiner, base)
    }
}

/// Holds one directive usage and the values derived from it.
///
/// The directive's definition is resolved once per usage name: replacing the
/// usage with one of the same name only recomputes the tooltip text. Call
/// [`DirectiveTagModel::schema_changed()`] after the schema finishes loading
/// to resolve the definition again.
#[derive(Debug)]
pub struct DirectiveTagModel<'s, S: SchemaService + ?Sized> {
    definition: Option<&'s DirectiveDefinition>,
    schema: &'s S,
    tooltip_text: String,
    usage: DirectiveUsage,
}
impl<'s, S: SchemaService + ?Sized> DirectiveTagModel<'s, S> {
    pub fn new(schema: &'s S, usage: DirectiveUsage) -> Self {
        let definition = visibility::resolve_definition(usage.name(), schema);
        let tooltip_text = format_directive_with_schema(&usage, definition, schema);
        Self {
            definition,
            schema,
            tooltip_text,
            usage,
        }
    }

    pub fn definition(&self) -> Option<&'s DirectiveDefinition> {
        self.definition
    }

    pub fn href<J: UrlPathJoiner + ?Sized>(&self, joiner: &J, base: &str) -> String {
        directive_href(joiner, base, self.usage.name())
    }

    /// Whether the tag should be rendered at all.
    pub fn is_visible(&self) -> bool {
        self.definition.is_some()
            && visibility::is_allowed(self.usage.name(), self.schema)
    }

    /// Re-resolves the definition and tooltip text against the current state
    /// of the schema.
    pub fn schema_changed(&mut self) {
        self.definition = visibility::resolve_definition(
            self.usage.name(),
            self.schema,
        );
        self.refresh_tooltip_text();
    }

    pub fn set_usage(&mut self, usage: DirectiveUsage) {
        let name_changed = usage.name() != self.usage.name();
        self.usage = usage;
        if name_changed {
            self.definition = visibility::resolve_definition(
                self.usage.name(),
                self.schema,
            );
        }
        self.refresh_tooltip_text();
    }

    pub fn tag<J: UrlPathJoiner + ?Sized>(&self, joiner: &J, base: &str) -> Option<DirectiveTag> {
        self.is_visible().then(|| DirectiveTag {
            href: self.href(joiner, base),
            tooltip_text: self.tooltip_text.clone(),
        })
    }

    pub fn tooltip_text(&self) -> &str {
        self.tooltip_text.as_str()
    }

    pub fn usage(&self) -> &DirectiveUsage {
        &self.usage
    }

    fn refresh_tooltip_text(&mut self) {
        self.tooltip_text = format_directive_with_schema(
            &self.usage,
            self.definition,
            self.schema,
        );
    }
}
