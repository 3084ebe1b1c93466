use crate::loc;
use crate::schema::DocsSchema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaService;
use crate::tests::utils::build_schema;
use crate::AppliedArgument;
use crate::ReadContentError;
use crate::ValueLiteral;
use serde_json::json;
use std::path::PathBuf;

#[test]
fn builtin_directives_are_injected() {
    let schema = build_schema("type Query { a: String }");

    let names = schema.all_directives().keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(names, vec!["skip", "include", "deprecated", "specifiedBy"]);

    let deprecated = schema.directive("deprecated").unwrap().unwrap();
    assert_eq!(deprecated.def_location(), &loc::SchemaDefLocation::GraphQLBuiltIn);
    assert_eq!(
        deprecated.arguments()[0].default_value(),
        Some(&json!("No longer supported")),
    );
}

#[test]
fn custom_directive_arguments_keep_declared_order() {
    let schema = build_schema(r#"
        "Limits how often a field may be requested."
        directive @rateLimit(
            "Requests per window."
            max: Int! = 10
            window: String
            burst: [Int!] = [1, 2]
            opts: RateOpts = { strict: true, mode: FAST }
            note: String = null
        ) on FIELD_DEFINITION
    "#);

    let def = schema.directive("rateLimit").unwrap().unwrap();
    assert_eq!(def.description(), Some("Limits how often a field may be requested."));

    let args = def.arguments();
    let names = args.iter().map(|arg| arg.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["max", "window", "burst", "opts", "note"]);

    assert_eq!(args[0].description(), Some("Requests per window."));
    assert_eq!(args[0].type_annotation(), "Int!");
    assert_eq!(args[0].default_value(), Some(&json!(10)));
    assert_eq!(args[1].default_value(), None);
    assert_eq!(args[2].type_annotation(), "[Int!]");
    assert_eq!(args[2].default_value(), Some(&json!([1, 2])));
    assert_eq!(
        args[3].default_value().map(ToString::to_string).as_deref(),
        Some(r#"{"strict":true,"mode":"FAST"}"#),
    );
    assert_eq!(args[4].default_value(), Some(&serde_json::Value::Null));

    match def.def_location() {
        loc::SchemaDefLocation::Schema(pos) =>
            assert_eq!(pos.file, PathBuf::from("str://0")),
        other => panic!("Expected a schema location, found {other:?}"),
    }
}

#[test]
fn declared_builtin_directive_replaces_the_builtin() {
    let schema = build_schema(r#"
        directive @deprecated(
            reason: String = "Superseded"
            since: String
        ) on FIELD_DEFINITION | ENUM_VALUE
    "#);

    let deprecated = schema.directive("deprecated").unwrap().unwrap();
    assert!(matches!(deprecated.def_location(), loc::SchemaDefLocation::Schema(_)));
    let names = deprecated.arguments().iter().map(|arg| arg.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["reason", "since"]);
    assert_eq!(deprecated.arguments()[0].default_value(), Some(&json!("Superseded")));

    // The remaining built-ins are still injected, after the declared ones.
    let names = schema.all_directives().keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(names, vec!["deprecated", "skip", "include", "specifiedBy"]);
}

#[test]
fn declaring_a_builtin_directive_twice_fails() {
    let result = DocsSchema::builder()
        .load_str(None, "directive @skip(if: Boolean!) on FIELD")
        .unwrap()
        .load_str(None, "directive @skip(if: Boolean!) on FIELD");
    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateDirectiveDefinition { directive_name, .. })
            if directive_name == "skip",
    ));
}

#[test]
fn duplicate_directive_definitions_fail() {
    let result = DocsSchema::builder()
        .load_str(None, "directive @auth on FIELD_DEFINITION")
        .unwrap()
        .load_str(None, "directive @auth on OBJECT");
    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateDirectiveDefinition { directive_name, .. })
            if directive_name == "auth",
    ));
}

#[test]
fn dunder_prefixed_directive_names_fail() {
    let result = DocsSchema::builder()
        .load_str(None, "directive @__private on FIELD_DEFINITION");
    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName { .. }),
    ));
}

#[test]
fn parse_errors_name_the_source() {
    let result = DocsSchema::builder()
        .load_str(Some(PathBuf::from("broken.graphql")), "type Query {");
    assert!(matches!(
        result,
        Err(SchemaBuildError::ParseError { location, .. })
            if location.file == PathBuf::from("broken.graphql"),
    ));
}

#[test]
fn variables_in_directive_usages_fail() {
    let result = DocsSchema::builder().load_str(
        None,
        "type Query { legacy: String @deprecated(reason: $why) }",
    );
    assert!(matches!(result, Err(SchemaBuildError::ParseError { .. })));
}

#[test]
fn usages_keep_argument_order_and_position() {
    let schema = DocsSchema::builder()
        .load_str(
            Some(PathBuf::from("schema.graphql")),
            "type Query {\n  a: Int @cacheControl(scope: PRIVATE, maxAge: 30)\n}",
        )
        .unwrap()
        .build()
        .unwrap();

    let usage = schema.directive_sites()[0].usage();
    assert_eq!(usage.name(), "cacheControl");
    assert_eq!(usage.arguments(), &[
        AppliedArgument::new("scope", ValueLiteral::Enum("PRIVATE".to_string())),
        AppliedArgument::new("maxAge", ValueLiteral::Int(30)),
    ]);
    assert_eq!(usage.location(), Some(&loc::FilePosition {
        col: 10,
        file: PathBuf::from("schema.graphql"),
        line: 2,
    }));
}

#[test]
fn usages_keep_object_fields_in_source_order() {
    let schema = build_schema(r#"
        type Query { a: Int @limit(window: {unit: "S", size: 10}) }
    "#);

    let usage = schema.directive_sites()[0].usage();
    let ValueLiteral::Object(fields) = usage.arguments()[0].value() else {
        panic!("Expected an object literal");
    };
    let names = fields.keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(names, vec!["unit", "size"]);
}

#[test]
fn unnamed_sources_keep_counting_past_u16() {
    let mut builder = DocsSchema::builder();
    builder.str_load_counter = u16::MAX as usize;
    let schema = builder
        .load_str(None, "directive @first on FIELD_DEFINITION")
        .unwrap()
        .load_str(None, "directive @second on FIELD_DEFINITION")
        .unwrap()
        .build()
        .unwrap();

    let files = ["first", "second"].map(|name| {
        match schema.directive(name).unwrap().unwrap().def_location() {
            loc::SchemaDefLocation::Schema(pos) => pos.file.clone(),
            other => panic!("Expected a schema location, found {other:?}"),
        }
    });
    assert_eq!(files, [PathBuf::from("str://65535"), PathBuf::from("str://65536")]);
}

#[test]
fn missing_schema_file_fails() {
    let path = PathBuf::from("/this/path/does/not/exist.graphql");
    let result = DocsSchema::builder().load_file(&path);
    assert_eq!(
        result.unwrap_err(),
        SchemaBuildError::SchemaFileReadError(Box::new(
            ReadContentError::PathIsNotAFile(path),
        )),
    );
}

#[test]
fn directive_sites_are_collected_with_coordinates() {
    let schema = build_schema(r#"
        schema @contact(name: "team") { query: Query }
        directive @contact(name: String!) on SCHEMA
        directive @tag(name: String!) on OBJECT | FIELD_DEFINITION | ARGUMENT_DEFINITION | ENUM_VALUE | INPUT_FIELD_DEFINITION | SCALAR | UNION

        type Query @tag(name: "root") {
            user(id: ID! @tag(name: "lookup")): User
            legacy: String @deprecated
        }
        type User { id: ID! }
        enum Role { ADMIN VIEWER @deprecated(reason: "use READER") }
        input Filter { role: Role @tag(name: "filter") }
        scalar Url @specifiedBy(url: "https://url.spec.whatwg.org/")
        union Node @tag(name: "node") = User
        extend type User @tag(name: "ext")
    "#);

    let sites = schema.directive_sites().iter()
        .map(|site| (site.schema_coordinate(), site.usage().name()))
        .collect::<Vec<_>>();

    assert_eq!(sites, vec![
        ("schema", "contact"),
        ("Query", "tag"),
        ("Query.user(id:)", "tag"),
        ("Query.legacy", "deprecated"),
        ("Role.VIEWER", "deprecated"),
        ("Filter.role", "tag"),
        ("Url", "specifiedBy"),
        ("Node", "tag"),
        ("User", "tag"),
    ]);

    let viewer = &schema.directive_sites()[4].usage;
    assert_eq!(viewer.arguments()[0].name(), "reason");
    assert_eq!(viewer.arguments()[0].value(), &ValueLiteral::String("use READER".to_string()));

    let location = viewer.location().expect("usage read from SDL has a location");
    assert_eq!(location.file, PathBuf::from("str://0"));
    assert_eq!(location.line, 11);
}

#[test]
fn hidden_arguments_only_affect_their_directive() {
    let schema = DocsSchema::builder()
        .load_str(None, r#"
            directive @a(x: Int = 1, y: Int = 2) on FIELD_DEFINITION
            directive @b(x: Int = 1) on FIELD_DEFINITION
        "#)
        .unwrap()
        .hide_argument("a", "x")
        .build()
        .unwrap();

    let a = schema.directive("a").unwrap().unwrap();
    let b = schema.directive("b").unwrap().unwrap();
    let allowed_a = schema.allowed_arguments(a).unwrap()
        .into_iter().map(|arg| arg.name()).collect::<Vec<_>>();
    let allowed_b = schema.allowed_arguments(b).unwrap()
        .into_iter().map(|arg| arg.name()).collect::<Vec<_>>();

    assert_eq!(allowed_a, vec!["y"]);
    assert_eq!(allowed_b, vec!["x"]);
}

#[test]
fn files_are_loaded_in_order() {
    let dir = std::env::temp_dir().join(format!(
        "libgraphql-docs-schema-builder-{}",
        std::process::id(),
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let first = dir.join("a.graphql");
    let second = dir.join("b.graphql");
    std::fs::write(&first, "directive @first on FIELD_DEFINITION").unwrap();
    std::fs::write(&second, "directive @second(n: Int = 3) on FIELD_DEFINITION").unwrap();

    let schema = DocsSchema::builder()
        .load_files(vec![&first, &second])
        .unwrap()
        .build()
        .unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    let names = schema.all_directives().keys().take(2).map(String::as_str).collect::<Vec<_>>();
    assert_eq!(names, vec!["first", "second"]);
    match schema.directive("second").unwrap().unwrap().def_location() {
        loc::SchemaDefLocation::Schema(pos) => assert_eq!(pos.file, second),
        other => panic!("Expected a schema location, found {other:?}"),
    }
}
