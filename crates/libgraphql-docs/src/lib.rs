//! Computes the values behind a directive "tag" in GraphQL schema
//! documentation: whether a directive usage is displayed at all, the
//! `@name(arg: value, ...)` text shown in its tooltip, and the link to its
//! reference page.
//!
//! The schema is always passed in explicitly as a [`SchemaService`]. The
//! in-crate implementation is [`DocsSchema`](schema::DocsSchema), built from
//! SDL files with a [`DocsSchemaBuilder`](schema::DocsSchemaBuilder).

pub mod ast;
mod directive_definition;
mod directive_tag;
mod directive_usage;
mod file_reader;
mod formatter;
mod link;
pub mod loc;
pub mod schema;
mod value;
mod visibility;

pub use directive_definition::ArgumentDefinition;
pub use directive_definition::DirectiveDefinition;
pub use directive_tag::DirectiveTag;
pub use directive_tag::DirectiveTagModel;
pub use directive_usage::AppliedArgument;
pub use directive_usage::DirectiveSite;
pub use directive_usage::DirectiveUsage;
pub use file_reader::ReadContentError;
pub use formatter::argument_value;
pub use formatter::encode_default_value;
pub use formatter::format_directive;
pub use formatter::format_directive_with_schema;
pub use formatter::UNDEFINED_DEFAULT;
pub use link::directive_href;
pub use link::directive_reference_path;
pub use link::SlashJoiner;
pub use link::UrlPathJoiner;
pub use schema::SchemaService;
pub use schema::SchemaServiceError;
pub use value::serialize_literal;
pub use value::FloatLiteral;
pub use value::LiteralConversionError;
pub use value::ValueLiteral;
pub use visibility::resolve_definition;
pub use visibility::should_display;

#[cfg(test)]
mod tests;
