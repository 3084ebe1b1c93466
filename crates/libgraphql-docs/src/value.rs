use crate::ast::cst;
use apollo_parser::cst::CstNode;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::fmt::Write;
use thiserror::Error;

/// A float literal together with the text it was written as.
///
/// Documentation shows floats exactly as they appear in the schema (`1.0`
/// stays `1.0`, `2e3` stays `2e3`), while default-value encoding works with
/// the numeric value.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FloatLiteral {
    text: String,
    value: f64,
}
impl FloatLiteral {
    pub fn parse(text: impl Into<String>) -> Result<Self, LiteralConversionError> {
        let text = text.into();
        match text.parse::<f64>() {
            Ok(value) => Ok(Self { text, value }),
            Err(_) => Err(LiteralConversionError::MalformedLiteral(text)),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
impl From<f64> for FloatLiteral {
    fn from(value: f64) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }
}

/// A constant GraphQL value passed as an argument to a directive.
///
/// [`ValueLiteral::Object`] uses an [`IndexMap`] so that fields keep the order
/// in which they were written.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum ValueLiteral {
    Int(i64),
    Float(FloatLiteral),
    String(String),
    Boolean(bool),
    Enum(String),
    Null,
    List(Vec<ValueLiteral>),
    Object(IndexMap<String, ValueLiteral>),
}
impl ValueLiteral {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Converts a value read from a parsed document into a [`ValueLiteral`].
    ///
    /// Directive arguments displayed in documentation are always constant,
    /// so a variable reference anywhere inside `cst_value` is rejected.
    pub fn from_cst(
        cst_value: &cst::Value,
    ) -> Result<Self, LiteralConversionError> {
        let malformed = || LiteralConversionError::MalformedLiteral(
            cst_value.source_string(),
        );

        Ok(match cst_value {
            cst::Value::Variable(var) =>
                return Err(LiteralConversionError::VariableReference(
                    var.name().map(|name| name.text().to_string())
                        .unwrap_or_default(),
                )),

            cst::Value::IntValue(value) => {
                let token = value.int_token().ok_or_else(malformed)?;
                ValueLiteral::Int(token.text().parse::<i64>().map_err(
                    |_| LiteralConversionError::IntOutOfRange(token.text().to_string()),
                )?)
            },

            cst::Value::FloatValue(value) => {
                let token = value.float_token().ok_or_else(malformed)?;
                ValueLiteral::Float(FloatLiteral::parse(token.text())?)
            },

            cst::Value::StringValue(value) =>
                ValueLiteral::String(String::from(value)),

            cst::Value::BooleanValue(value) =>
                ValueLiteral::Boolean(value.true_token().is_some()),

            cst::Value::NullValue(_) =>
                ValueLiteral::Null,

            cst::Value::EnumValue(value) =>
                ValueLiteral::Enum(
                    value.name().ok_or_else(malformed)?.text().to_string(),
                ),

            cst::Value::ListValue(list) =>
                ValueLiteral::List(list.values()
                    .map(|value| ValueLiteral::from_cst(&value))
                    .collect::<Result<_, _>>()?),

            cst::Value::ObjectValue(object) =>
                ValueLiteral::Object(object.object_fields()
                    .map(|field| {
                        let name = field.name().ok_or_else(malformed)?;
                        let value = field.value().ok_or_else(malformed)?;
                        Ok::<_, LiteralConversionError>((
                            name.text().to_string(),
                            ValueLiteral::from_cst(&value)?,
                        ))
                    })
                    .collect::<Result<_, _>>()?),
        })
    }

    /// The JSON value a schema reports for this literal when it is used as an
    /// argument's default value.
    ///
    /// Enum values become JSON strings. Floats with no fractional part are
    /// encoded as JSON integers, and non-finite floats as `null`, matching
    /// how a JavaScript host would stringify them.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Self::Int(value) => Json::from(*value),
            Self::Float(float) => {
                let value = float.value();
                if value.fract() == 0.0
                    && value.abs() < i64::MAX as f64 {
                    Json::from(value as i64)
                } else {
                    serde_json::Number::from_f64(value)
                        .map(Json::Number)
                        .unwrap_or(Json::Null)
                }
            },
            Self::String(value) | Self::Enum(value) => Json::from(value.as_str()),
            Self::Boolean(value) => Json::from(*value),
            Self::Null => Json::Null,
            Self::List(values) => Json::Array(
                values.iter().map(ValueLiteral::to_json).collect(),
            ),
            Self::Object(fields) => Json::Object(
                fields.iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Writes the literal the way directive tags display it.
///
/// Strings and enum values are wrapped in double quotes without any
/// escaping, so `"a "quoted" word"` is written as-is. Floats are written
/// with the text they were parsed from.
impl fmt::Display for ValueLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => fmt::Display::fmt(value, f),
            Self::Float(float) => f.write_str(float.text()),
            Self::Boolean(value) => fmt::Display::fmt(value, f),
            Self::String(value) | Self::Enum(value) => {
                f.write_char('"')?;
                f.write_str(value)?;
                f.write_char('"')
            },
            Self::Null => f.write_str("null"),
            Self::List(values) => {
                let mut values = values.iter().peekable();
                f.write_char('[')?;
                while let Some(value) = values.next() {
                    fmt::Display::fmt(value, f)?;
                    if values.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }
                f.write_char(']')
            },
            Self::Object(fields) => {
                let mut fields = fields.iter().peekable();
                f.write_char('{')?;
                while let Some((name, value)) = fields.next() {
                    write!(f, "{name}: {value}")?;
                    if fields.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }
                f.write_char('}')
            },
        }
    }
}

/// Serializes an explicitly supplied argument value into its tag text.
pub fn serialize_literal(value: &ValueLiteral) -> String {
    value.to_string()
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LiteralConversionError {
    #[error("Integer literal `{0}` does not fit in 64 bits")]
    IntOutOfRange(String),

    #[error("Malformed literal `{0}`")]
    MalformedLiteral(String),

    #[error("Variable `${0}` is not allowed where a constant value is required")]
    VariableReference(String),
}
