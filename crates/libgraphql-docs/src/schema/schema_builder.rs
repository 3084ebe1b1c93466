use crate::ast;
use crate::ast::cst;
use crate::file_reader;
use crate::loc;
use crate::schema::DirectiveAllowList;
use crate::schema::DocsSchema;
use crate::value::LiteralConversionError;
use crate::DirectiveDefinition;
use crate::DirectiveSite;
use crate::DirectiveUsage;
use apollo_parser::cst::CstNode;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn builtin_directive_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "skip",
            "include",
            "deprecated",
            "specifiedBy",
        ])
    })
}

/// Utility for building a [DocsSchema].
#[derive(Debug)]
pub struct DocsSchemaBuilder {
    allow_list: DirectiveAllowList,
    directive_defs: IndexMap<String, DirectiveDefinition>,
    directive_sites: Vec<DirectiveSite>,
    hidden_arguments: HashMap<String, HashSet<String>>,
    pub(crate) str_load_counter: usize,
}
impl DocsSchemaBuilder {
    /// Restricts the allow-list to the given directive names. Without this,
    /// every directive the schema defines is allowed.
    pub fn allow_directives<I, S>(mut self, directive_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = DirectiveAllowList::Only(
            directive_names.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn build(mut self) -> Result<DocsSchema> {
        self.inject_missing_builtin_directives();

        if let DirectiveAllowList::Only(names) = &self.allow_list {
            for name in names {
                if !self.directive_defs.contains_key(name) {
                    log::warn!(
                        "Directive `@{name}` is allow-listed but is not \
                        defined in the schema, so it will never be displayed.",
                    );
                }
            }
        }

        log::debug!(
            "Built schema with {} directive definitions and {} directive \
            usages.",
            self.directive_defs.len(),
            self.directive_sites.len(),
        );

        Ok(DocsSchema {
            allow_list: self.allow_list,
            directive_defs: self.directive_defs,
            directive_sites: self.directive_sites,
            hidden_arguments: self.hidden_arguments,
        })
    }

    /// Keeps `argument_name` out of the arguments displayed for
    /// `directive_name`.
    pub fn hide_argument(
        mut self,
        directive_name: impl Into<String>,
        argument_name: impl Into<String>,
    ) -> Self {
        self.hidden_arguments
            .entry(directive_name.into())
            .or_default()
            .insert(argument_name.into());
        self
    }

    pub fn new() -> Self {
        Self {
            allow_list: DirectiveAllowList::AllDefined,
            directive_defs: IndexMap::new(),
            directive_sites: vec![],
            hidden_arguments: HashMap::new(),
            str_load_counter: 0,
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            log::trace!("Loading schema file {file_path:#?}.");
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let tree = apollo_parser::Parser::new(content).parse();
        if let Some(err) = tree.errors().next() {
            let lines = loc::LineIndex::new(content);
            return Err(SchemaBuildError::ParseError {
                err: err.message().to_string(),
                location: loc::FilePosition::from_offset(
                    file_path.as_path(),
                    &lines,
                    err.index(),
                ),
            });
        }

        let mut visitor = SourceVisitor {
            builder: &mut self,
            file_path: file_path.as_path(),
            lines: loc::LineIndex::new(content),
        };
        for def in tree.document().definitions() {
            visitor.visit_def(&def)?;
        }

        Ok(self)
    }

    fn inject_missing_builtin_directives(&mut self) {
        for builtin in [
            DirectiveDefinition::skip(),
            DirectiveDefinition::include(),
            DirectiveDefinition::deprecated(),
            DirectiveDefinition::specified_by(),
        ] {
            if !self.directive_defs.contains_key(builtin.name()) {
                self.directive_defs.insert(builtin.name().to_string(), builtin);
            }
        }
    }
}
impl Default for DocsSchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks the definitions of a single loaded document, recording directive
/// definitions and usages on the builder.
struct SourceVisitor<'a, 'src> {
    builder: &'a mut DocsSchemaBuilder,
    file_path: &'a Path,
    lines: loc::LineIndex<'src>,
}
impl SourceVisitor<'_, '_> {
    fn position_of(&self, node: &impl CstNode) -> loc::FilePosition {
        loc::FilePosition::from_offset(
            self.file_path,
            &self.lines,
            ast::start_offset(node),
        )
    }

    fn invalid_literal(
        &self,
        node: &impl CstNode,
        err: LiteralConversionError,
    ) -> SchemaBuildError {
        SchemaBuildError::InvalidLiteral {
            location: self.position_of(node).into(),
            err,
        }
    }

    fn record_sites(
        &mut self,
        schema_coordinate: &str,
        directives: Option<cst::Directives>,
    ) -> Result<()> {
        for directive in directives.iter().flat_map(|dirs| dirs.directives()) {
            let usage = DirectiveUsage::from_cst(
                Some(self.position_of(&directive)),
                &directive,
            ).map_err(|err| self.invalid_literal(&directive, err))?;
            self.builder.directive_sites.push(DirectiveSite {
                schema_coordinate: schema_coordinate.to_string(),
                usage,
            });
        }
        Ok(())
    }

    fn visit_def(&mut self, def: &cst::Definition) -> Result<()> {
        use cst::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.record_sites("schema", schema_def.directives()),
            Definition::SchemaExtension(schema_ext) =>
                self.record_sites("schema", schema_ext.directives()),

            Definition::DirectiveDefinition(directive_def) =>
                self.visit_directive_def(directive_def),

            Definition::ScalarTypeDefinition(scalar_def) =>
                self.visit_named(scalar_def.name(), scalar_def.directives()).map(|_| ()),
            Definition::ScalarTypeExtension(scalar_ext) =>
                self.visit_named(scalar_ext.name(), scalar_ext.directives()).map(|_| ()),

            Definition::ObjectTypeDefinition(obj_def) => {
                let type_name = self.visit_named(obj_def.name(), obj_def.directives())?;
                self.visit_fields(&type_name, obj_def.fields_definition())
            },
            Definition::ObjectTypeExtension(obj_ext) => {
                let type_name = self.visit_named(obj_ext.name(), obj_ext.directives())?;
                self.visit_fields(&type_name, obj_ext.fields_definition())
            },

            Definition::InterfaceTypeDefinition(iface_def) => {
                let type_name = self.visit_named(iface_def.name(), iface_def.directives())?;
                self.visit_fields(&type_name, iface_def.fields_definition())
            },
            Definition::InterfaceTypeExtension(iface_ext) => {
                let type_name = self.visit_named(iface_ext.name(), iface_ext.directives())?;
                self.visit_fields(&type_name, iface_ext.fields_definition())
            },

            Definition::UnionTypeDefinition(union_def) =>
                self.visit_named(union_def.name(), union_def.directives()).map(|_| ()),
            Definition::UnionTypeExtension(union_ext) =>
                self.visit_named(union_ext.name(), union_ext.directives()).map(|_| ()),

            Definition::EnumTypeDefinition(enum_def) => {
                let type_name = self.visit_named(enum_def.name(), enum_def.directives())?;
                self.visit_enum_values(&type_name, enum_def.enum_values_definition())
            },
            Definition::EnumTypeExtension(enum_ext) => {
                let type_name = self.visit_named(enum_ext.name(), enum_ext.directives())?;
                self.visit_enum_values(&type_name, enum_ext.enum_values_definition())
            },

            Definition::InputObjectTypeDefinition(inputobj_def) => {
                let type_name = self.visit_named(inputobj_def.name(), inputobj_def.directives())?;
                self.visit_input_values(
                    inputobj_def.input_fields_definition().iter()
                        .flat_map(|fields| fields.input_value_definitions()),
                    |field_name| format!("{type_name}.{field_name}"),
                )
            },
            Definition::InputObjectTypeExtension(inputobj_ext) => {
                let type_name = self.visit_named(inputobj_ext.name(), inputobj_ext.directives())?;
                self.visit_input_values(
                    inputobj_ext.input_fields_definition().iter()
                        .flat_map(|fields| fields.input_value_definitions()),
                    |field_name| format!("{type_name}.{field_name}"),
                )
            },

            Definition::OperationDefinition(_) | Definition::FragmentDefinition(_) => {
                log::debug!(
                    "Ignoring executable {} in schema file {:#?}.",
                    def.kind(),
                    self.file_path,
                );
                Ok(())
            },
        }
    }

    fn visit_directive_def(&mut self, def: &cst::DirectiveDefinition) -> Result<()> {
        let file_position = match def.directive_token() {
            Some(token) => loc::FilePosition::from_offset(
                self.file_path,
                &self.lines,
                usize::from(token.text_range().start()),
            ),
            None => self.position_of(def),
        };
        let directive_def = DirectiveDefinition::from_cst(file_position.clone(), def)
            .map_err(|err| self.invalid_literal(def, err))?;
        let directive_name = directive_def.name().to_string();

        if directive_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location: file_position.into(),
                directive_name,
            });
        }

        if let Some(existing) = self.builder.directive_defs.get(directive_name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name,
                location1: existing.def_location().clone(),
                location2: file_position.into(),
            });
        }

        if builtin_directive_names().contains(directive_name.as_str()) {
            log::debug!(
                "Using the schema's own definition of built-in directive \
                `@{directive_name}` from {file_position}.",
            );
        }

        self.visit_input_values(
            def.arguments_definition().iter()
                .flat_map(|args_def| args_def.input_value_definitions()),
            |arg_name| format!("@{directive_name}({arg_name}:)"),
        )?;

        log::trace!(
            "Defined directive `@{directive_name}` with {} arguments.",
            directive_def.arguments().len(),
        );
        self.builder.directive_defs.insert(directive_name, directive_def);

        Ok(())
    }

    fn visit_enum_values(
        &mut self,
        type_name: &str,
        values_def: Option<cst::EnumValuesDefinition>,
    ) -> Result<()> {
        for value_def in values_def.iter().flat_map(|values| values.enum_value_definitions()) {
            let Some(value_name) = value_def.enum_value().and_then(|value| value.name()) else {
                continue;
            };
            self.record_sites(
                format!("{type_name}.{}", value_name.text()).as_str(),
                value_def.directives(),
            )?;
        }
        Ok(())
    }

    fn visit_fields(
        &mut self,
        type_name: &str,
        fields_def: Option<cst::FieldsDefinition>,
    ) -> Result<()> {
        for field in fields_def.iter().flat_map(|fields| fields.field_definitions()) {
            let Some(field_name) = ast::name_str(field.name()) else {
                continue;
            };
            self.record_sites(
                format!("{type_name}.{field_name}").as_str(),
                field.directives(),
            )?;
            self.visit_input_values(
                field.arguments_definition().iter()
                    .flat_map(|args_def| args_def.input_value_definitions()),
                |arg_name| format!("{type_name}.{field_name}({arg_name}:)"),
            )?;
        }
        Ok(())
    }

    fn visit_input_values(
        &mut self,
        input_values: impl Iterator<Item = cst::InputValueDefinition>,
        schema_coordinate: impl Fn(&str) -> String,
    ) -> Result<()> {
        for input_value in input_values {
            let Some(input_name) = ast::name_str(input_value.name()) else {
                continue;
            };
            self.record_sites(
                schema_coordinate(input_name.as_str()).as_str(),
                input_value.directives(),
            )?;
        }
        Ok(())
    }

    /// Records the directives on a named type definition or extension and
    /// returns the type's name.
    fn visit_named(
        &mut self,
        name: Option<cst::Name>,
        directives: Option<cst::Directives>,
    ) -> Result<String> {
        let type_name = ast::name_str(name).unwrap_or_default();
        self.record_sites(type_name.as_str(), directives)?;
        Ok(type_name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the same name")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error("Custom directive names must not start with `__`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SchemaDefLocation,
        directive_name: String,
    },

    #[error("Invalid literal value at {location}: {err}")]
    InvalidLiteral {
        location: loc::SchemaDefLocation,
        err: LiteralConversionError,
    },

    #[error("Error parsing schema at {location}: {err}")]
    ParseError {
        err: String,
        location: loc::FilePosition,
    },

    #[error("Failure while trying to read a schema file from disk")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),
}
