use crate::ast::cst;
use crate::loc;
use crate::value::LiteralConversionError;
use crate::value::ValueLiteral;
use apollo_parser::cst::CstNode;
use serde::Deserialize;
use serde::Serialize;

/// An argument explicitly passed to a directive at its usage site.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AppliedArgument {
    pub(crate) name: String,
    pub(crate) value: ValueLiteral,
}
impl AppliedArgument {
    pub fn new(name: impl Into<String>, value: ValueLiteral) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &ValueLiteral {
        &self.value
    }
}

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// as written in a document: the directive's name and the arguments passed
/// to it, in the order they were written.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DirectiveUsage {
    pub(crate) arguments: Vec<AppliedArgument>,
    pub(crate) location: Option<loc::FilePosition>,
    pub(crate) name: String,
}
impl DirectiveUsage {
    pub fn new(
        name: impl Into<String>,
        arguments: Vec<AppliedArgument>,
    ) -> Self {
        Self {
            arguments,
            location: None,
            name: name.into(),
        }
    }

    pub fn arguments(&self) -> &[AppliedArgument] {
        self.arguments.as_slice()
    }

    /// Where this usage was written, if it was read from a file.
    pub fn location(&self) -> Option<&loc::FilePosition> {
        self.location.as_ref()
    }

    /// The name of the directive, without the leading `@`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Reads a usage from a parsed directive. `location` is where the `@`
    /// was written, when the document came from a file.
    pub fn from_cst(
        location: Option<loc::FilePosition>,
        cst_directive: &cst::Directive,
    ) -> Result<Self, LiteralConversionError> {
        let name = cst_directive.name().ok_or_else(|| {
            LiteralConversionError::MalformedLiteral(cst_directive.source_string())
        })?;

        let mut arguments = vec![];
        for cst_arg in cst_directive.arguments().iter().flat_map(|args| args.arguments()) {
            let (Some(arg_name), Some(arg_val)) = (cst_arg.name(), cst_arg.value()) else {
                return Err(LiteralConversionError::MalformedLiteral(
                    cst_arg.source_string(),
                ));
            };
            arguments.push(AppliedArgument {
                name: arg_name.text().to_string(),
                value: ValueLiteral::from_cst(&arg_val)?,
            });
        }

        Ok(DirectiveUsage {
            arguments,
            location,
            name: name.text().to_string(),
        })
    }
}

/// A [`DirectiveUsage`] found in a schema document, together with the
/// [schema coordinate](https://spec.graphql.org/draft/#sec-Schema-Coordinates)
/// of the element it annotates (e.g. `User.email` or `Query.user(id:)`).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DirectiveSite {
    pub(crate) schema_coordinate: String,
    pub(crate) usage: DirectiveUsage,
}
impl DirectiveSite {
    pub fn schema_coordinate(&self) -> &str {
        self.schema_coordinate.as_str()
    }

    pub fn usage(&self) -> &DirectiveUsage {
        &self.usage
    }
}
