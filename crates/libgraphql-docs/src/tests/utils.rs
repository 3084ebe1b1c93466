use crate::ast::cst;
use crate::schema::DocsSchema;
use crate::AppliedArgument;
use crate::DirectiveUsage;
use crate::LiteralConversionError;
use crate::ValueLiteral;

pub(super) fn build_schema(sdl: &str) -> DocsSchema {
    DocsSchema::builder()
        .load_str(None, sdl)
        .expect("schema parses")
        .build()
        .expect("schema builds")
}

pub(super) fn usage(name: &str, args: Vec<(&str, ValueLiteral)>) -> DirectiveUsage {
    DirectiveUsage::new(
        name,
        args.into_iter()
            .map(|(arg_name, value)| AppliedArgument::new(arg_name, value))
            .collect(),
    )
}

/// Parses `value_src` as a field argument in a query document, where
/// variables are permitted, and converts it.
pub(super) fn parse_literal(
    value_src: &str,
) -> Result<ValueLiteral, LiteralConversionError> {
    let src = format!("{{ f(v: {value_src}) }}");
    let tree = apollo_parser::Parser::new(&src).parse();
    assert_eq!(tree.errors().len(), 0, "`{value_src}` should parse");

    let Some(cst::Definition::OperationDefinition(op)) =
        tree.document().definitions().next() else {
        panic!("Expected an operation for `{src}`");
    };
    let Some(cst::Selection::Field(field)) =
        op.selection_set().and_then(|set| set.selections().next()) else {
        panic!("Expected a field selection for `{src}`");
    };
    let value = field.arguments()
        .and_then(|args| args.arguments().next())
        .and_then(|arg| arg.value())
        .expect("field argument has a value");

    ValueLiteral::from_cst(&value)
}
