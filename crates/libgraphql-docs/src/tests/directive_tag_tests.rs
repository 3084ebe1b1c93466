use crate::schema::SchemaService;
use crate::schema::SchemaServiceError;
use crate::schema::SchemaSlot;
use crate::tests::utils::build_schema;
use crate::tests::utils::usage;
use crate::DirectiveDefinition;
use crate::DirectiveTag;
use crate::DirectiveTagModel;
use crate::SlashJoiner;
use crate::ValueLiteral;
use std::cell::Cell;

const SDL: &str = r#"
    directive @auth(requires: String = "USER") on FIELD_DEFINITION
"#;

/// Counts how many times a definition was looked up.
struct CountingSchema {
    auth: DirectiveDefinition,
    lookups: Cell<usize>,
}
impl SchemaService for CountingSchema {
    fn is_allowed_directive(&self, name: &str) -> Result<bool, SchemaServiceError> {
        Ok(name == "auth")
    }

    fn directive(&self, name: &str) -> Result<Option<&DirectiveDefinition>, SchemaServiceError> {
        self.lookups.set(self.lookups.get() + 1);
        Ok((name == "auth").then_some(&self.auth))
    }
}

#[test]
fn compute_builds_tooltip_and_href() {
    let schema = build_schema(SDL);
    let tag = DirectiveTag::compute(
        &usage("auth", vec![("requires", ValueLiteral::Enum("ADMIN".to_string()))]),
        &schema,
        &SlashJoiner,
        "/docs",
    );

    assert_eq!(tag, Some(DirectiveTag {
        href: "/docs/directives/auth".to_string(),
        tooltip_text: r#"@auth(requires: "ADMIN")"#.to_string(),
    }));
}

#[test]
fn deprecated_tag_uses_default_reason() {
    let schema = build_schema(SDL);
    let tag = DirectiveTag::compute(&usage("deprecated", vec![]), &schema, &SlashJoiner, "")
        .expect("deprecated is displayed");

    assert_eq!(tag.tooltip_text, r#"@deprecated(reason: "No longer supported")"#);
    assert_eq!(tag.href, "/directives/deprecated");
}

#[test]
fn unknown_directive_has_no_tag_but_bare_text() {
    let schema = build_schema(SDL);
    let model = DirectiveTagModel::new(
        &schema,
        usage("custom", vec![("x", ValueLiteral::Int(1))]),
    );

    assert!(!model.is_visible());
    assert_eq!(model.tooltip_text(), "@custom");
    assert_eq!(model.tag(&SlashJoiner, "/docs"), None);
    assert_eq!(model.href(&SlashJoiner, "/docs"), "/docs/directives/custom");
}

#[test]
fn definition_is_resolved_once_per_name() {
    let schema = CountingSchema {
        auth: DirectiveDefinition::new("auth", vec![
            crate::ArgumentDefinition::new("requires", "String")
                .with_default_value("USER".into()),
        ]),
        lookups: Cell::new(0),
    };

    let mut model = DirectiveTagModel::new(&schema, usage("auth", vec![]));
    assert_eq!(schema.lookups.get(), 1);
    assert_eq!(model.tooltip_text(), r#"@auth(requires: "USER")"#);

    model.set_usage(usage("auth", vec![("requires", ValueLiteral::String("ADMIN".to_string()))]));
    assert_eq!(schema.lookups.get(), 1);
    assert_eq!(model.tooltip_text(), r#"@auth(requires: "ADMIN")"#);

    model.set_usage(usage("other", vec![]));
    assert_eq!(schema.lookups.get(), 2);
    assert_eq!(model.tooltip_text(), "@other");
    assert!(!model.is_visible());
}

#[test]
fn model_catches_up_once_schema_loads() {
    let slot = SchemaSlot::new();
    let mut model = DirectiveTagModel::new(&slot, usage("auth", vec![]));

    assert!(!model.is_visible());
    assert_eq!(model.tooltip_text(), "@auth");
    assert!(model.definition().is_none());

    slot.fill(build_schema(SDL)).unwrap();
    model.schema_changed();

    assert!(model.is_visible());
    assert_eq!(model.tooltip_text(), r#"@auth(requires: "USER")"#);
    assert_eq!(model.definition().map(|def| def.name()), Some("auth"));
}

#[test]
fn tag_serializes_for_rendering_layer() {
    let tag = DirectiveTag {
        href: "/directives/skip".to_string(),
        tooltip_text: "@skip(if: false)".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&tag).unwrap(),
        serde_json::json!({
            "href": "/directives/skip",
            "tooltip_text": "@skip(if: false)",
        }),
    );
}

#[test]
fn tooltips_of_sdl_usages_keep_source_literals() {
    let schema = build_schema(r#"
        directive @cost(weight: Float) on FIELD_DEFINITION
        directive @limit(window: LimitWindow) on FIELD_DEFINITION
        input LimitWindow { unit: String size: Int }

        type Query {
            a: Int @cost(weight: 1.0)
            b: Int @cost(weight: 2e3)
            c: Int @limit(window: {unit: "S", size: 10})
        }
    "#);

    let tooltips = schema.directive_sites().iter()
        .map(|site| DirectiveTagModel::new(&schema, site.usage().clone()))
        .map(|model| model.tooltip_text().to_string())
        .collect::<Vec<_>>();
    assert_eq!(tooltips, vec![
        "@cost(weight: 1.0)",
        "@cost(weight: 2e3)",
        r#"@limit(window: {unit: "S", size: 10})"#,
    ]);
}
