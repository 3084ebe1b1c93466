mod directive_tag_tests;
mod schema_builder_tests;
mod utils;
