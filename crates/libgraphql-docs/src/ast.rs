//! Helpers for reading the lossless `apollo_parser` CST.
//!
//! The CST keeps every token as it was written, so float literals retain
//! their source text and object fields retain their source order.

pub use apollo_parser::cst;
use apollo_parser::cst::CstNode;

pub(crate) fn description_str(
    description: Option<cst::Description>,
) -> Option<String> {
    description?.string_value().map(String::from)
}

pub(crate) fn name_str(name: Option<cst::Name>) -> Option<String> {
    name.map(|name| name.text().to_string())
}

/// Byte offset at which `node` starts in its source string.
pub(crate) fn start_offset(node: &impl CstNode) -> usize {
    usize::from(node.syntax().text_range().start())
}

/// Renders a type reference the way it is written in SDL (e.g. `[String!]!`).
pub(crate) fn type_annotation_str(ty: &cst::Type) -> Option<String> {
    Some(match ty {
        cst::Type::NamedType(named) => name_str(named.name())?,
        cst::Type::ListType(list) =>
            format!("[{}]", type_annotation_str(&list.ty()?)?),
        cst::Type::NonNullType(non_null) => {
            let inner =
                if let Some(named) = non_null.named_type() {
                    name_str(named.name())?
                } else {
                    let list = non_null.list_type()?;
                    format!("[{}]", type_annotation_str(&list.ty()?)?)
                };
            format!("{inner}!")
        },
    })
}
