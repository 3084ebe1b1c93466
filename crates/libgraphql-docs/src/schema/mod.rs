mod docs_schema;
mod schema_builder;
mod schema_service;
mod schema_slot;

pub use docs_schema::DirectiveAllowList;
pub use docs_schema::DocsSchema;
pub use schema_builder::DocsSchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use schema_service::SchemaService;
pub use schema_service::SchemaServiceError;
pub use schema_slot::SchemaSlot;
