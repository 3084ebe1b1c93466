use crate::schema::SchemaService;
use crate::value::serialize_literal;
use crate::AppliedArgument;
use crate::ArgumentDefinition;
use crate::DirectiveDefinition;
use crate::DirectiveUsage;

/// Text used for a declared argument that has neither an explicit value nor
/// a declared default. This is what a JavaScript host prints for
/// `JSON.stringify(undefined)` interpolated into a string.
pub const UNDEFINED_DEFAULT: &str = "undefined";

/// Formats `usage` as `@name(arg: value, ...)`.
///
/// Arguments are listed in the order `definition` declares them. Explicitly
/// supplied values go through [`serialize_literal`]; missing ones fall back
/// to the JSON encoding of the declared default. With no definition, or a
/// definition that declares no arguments, the result is just `@name`.
pub fn format_directive(
    usage: &DirectiveUsage,
    definition: Option<&DirectiveDefinition>,
) -> String {
    let declared = definition
        .map(|def| def.arguments().iter().collect::<Vec<_>>())
        .unwrap_or_default();
    format_declared_arguments(usage, &declared)
}

/// Like [`format_directive`], but lists only the arguments that `schema`
/// reports as allowed for `definition`.
pub fn format_directive_with_schema<S: SchemaService + ?Sized>(
    usage: &DirectiveUsage,
    definition: Option<&DirectiveDefinition>,
    schema: &S,
) -> String {
    let declared = match definition {
        Some(def) => schema.allowed_arguments(def).unwrap_or_else(|err| {
            log::warn!(
                "Formatting `@{}` without arguments: {err}",
                usage.name(),
            );
            vec![]
        }),
        None => vec![],
    };
    format_declared_arguments(usage, &declared)
}

/// The text shown for one declared argument: the explicitly supplied value
/// if `applied` has one with the same name, otherwise the declared default.
pub fn argument_value(
    declared: &ArgumentDefinition,
    applied: &[AppliedArgument],
) -> String {
    match applied.iter().find(|arg| arg.name() == declared.name()) {
        Some(arg) => serialize_literal(arg.value()),
        None => encode_default_value(declared.default_value()),
    }
}

/// JSON-encodes a declared default value.
///
/// This is a different encoding than [`serialize_literal`]: strings are
/// escaped, and lists and objects are written without spaces (`["a","b"]`).
pub fn encode_default_value(default_value: Option<&serde_json::Value>) -> String {
    match default_value {
        Some(value) => value.to_string(),
        None => UNDEFINED_DEFAULT.to_string(),
    }
}

fn format_declared_arguments(
    usage: &DirectiveUsage,
    declared: &[&ArgumentDefinition],
) -> String {
    let mut text = format!("@{}", usage.name());
    if !declared.is_empty() {
        let args = declared.iter()
            .map(|arg_def| format!(
                "{}: {}",
                arg_def.name(),
                argument_value(arg_def, usage.arguments()),
            ))
            .collect::<Vec<_>>()
            .join(", ");
        text.push('(');
        text.push_str(&args);
        text.push(')');
    }
    text.trim().to_string()
}
