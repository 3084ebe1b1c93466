use crate::ast;
use crate::ast::cst;
use crate::loc;
use crate::value::LiteralConversionError;
use crate::value::ValueLiteral;
use apollo_parser::cst::CstNode;
use serde::Deserialize;
use serde::Serialize;

/// An argument declared in a directive's definition.
///
/// The default value is kept as the JSON value a schema-introspection service
/// would report for it, not as a [`ValueLiteral`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArgumentDefinition {
    pub(crate) default_value: Option<serde_json::Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: String,
}
impl ArgumentDefinition {
    pub fn new(
        name: impl Into<String>,
        type_annotation: impl Into<String>,
    ) -> Self {
        Self {
            default_value: None,
            description: None,
            name: name.into(),
            type_annotation: type_annotation.into(),
        }
    }

    pub fn with_default_value(mut self, default_value: serde_json::Value) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The declared default value, or `None` if the definition declares no
    /// default at all. An explicit `= null` default is `Some(Value::Null)`.
    pub fn default_value(&self) -> Option<&serde_json::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared input type, as written in SDL (e.g. `[String!]!`).
    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }

    pub(crate) fn from_cst(
        input_val: &cst::InputValueDefinition,
    ) -> Result<Self, LiteralConversionError> {
        let malformed = || LiteralConversionError::MalformedLiteral(
            input_val.source_string(),
        );

        let default_value = input_val.default_value()
            .map(|default| default.value().ok_or_else(malformed))
            .transpose()?;

        Ok(ArgumentDefinition {
            default_value: default_value.as_ref()
                .map(|val| ValueLiteral::from_cst(val).map(|lit| lit.to_json()))
                .transpose()?,
            description: ast::description_str(input_val.description()),
            name: ast::name_str(input_val.name()).ok_or_else(malformed)?,
            type_annotation: input_val.ty().as_ref()
                .and_then(ast::type_annotation_str)
                .ok_or_else(malformed)?,
        })
    }
}

/// Schema metadata for a directive: its name and the arguments it declares,
/// in declaration order.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DirectiveDefinition {
    pub(crate) arguments: Vec<ArgumentDefinition>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl DirectiveDefinition {
    pub fn new(
        name: impl Into<String>,
        arguments: Vec<ArgumentDefinition>,
    ) -> Self {
        Self {
            arguments,
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            description: None,
            name: name.into(),
        }
    }

    pub fn arguments(&self) -> &[ArgumentDefinition] {
        self.arguments.as_slice()
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_cst(
        def_location: loc::FilePosition,
        def: &cst::DirectiveDefinition,
    ) -> Result<Self, LiteralConversionError> {
        Ok(DirectiveDefinition {
            arguments: def.arguments_definition().iter()
                .flat_map(|args_def| args_def.input_value_definitions())
                .map(|input_val| ArgumentDefinition::from_cst(&input_val))
                .collect::<Result<_, _>>()?,
            def_location: def_location.into(),
            description: ast::description_str(def.description()),
            name: ast::name_str(def.name()).ok_or_else(|| {
                LiteralConversionError::MalformedLiteral(def.source_string())
            })?,
        })
    }

    /// `@deprecated(reason: String = "No longer supported")`
    pub fn deprecated() -> Self {
        Self::new("deprecated", vec![
            ArgumentDefinition::new("reason", "String")
                .with_default_value("No longer supported".into()),
        ])
    }

    /// `@include(if: Boolean!)`
    pub fn include() -> Self {
        Self::new("include", vec![
            ArgumentDefinition::new("if", "Boolean!"),
        ])
    }

    /// `@skip(if: Boolean!)`
    pub fn skip() -> Self {
        Self::new("skip", vec![
            ArgumentDefinition::new("if", "Boolean!"),
        ])
    }

    /// `@specifiedBy(url: String!)`
    pub fn specified_by() -> Self {
        Self::new("specifiedBy", vec![
            ArgumentDefinition::new("url", "String!"),
        ])
    }
}
