use crate::schema::SchemaService;
use crate::DirectiveDefinition;

/// Looks up the definition of `directive_name`.
///
/// A schema that has not finished loading is treated the same as a schema
/// that does not define the directive.
pub fn resolve_definition<'s, S: SchemaService + ?Sized>(
    directive_name: &str,
    schema: &'s S,
) -> Option<&'s DirectiveDefinition> {
    match schema.directive(directive_name) {
        Ok(definition) => definition,
        Err(err) => {
            log::warn!(
                "Unable to resolve the definition of `@{directive_name}`: {err}",
            );
            None
        },
    }
}

/// Whether a tag for `directive_name` should be displayed at all.
///
/// Only directives that the schema both defines and allow-lists are
/// displayed. Lookup failures hide the directive rather than propagate.
pub fn should_display<S: SchemaService + ?Sized>(
    directive_name: &str,
    schema: &S,
) -> bool {
    resolve_definition(directive_name, schema).is_some()
        && is_allowed(directive_name, schema)
}

pub(crate) fn is_allowed<S: SchemaService + ?Sized>(
    directive_name: &str,
    schema: &S,
) -> bool {
    schema.is_allowed_directive(directive_name).unwrap_or_else(|err| {
        log::warn!("Hiding `@{directive_name}`: {err}");
        false
    })
}
