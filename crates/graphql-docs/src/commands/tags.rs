use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_docs::schema::DocsSchema;
use libgraphql_docs::schema::DocsSchemaBuilder;
use libgraphql_docs::schema::SchemaBuildError;
use libgraphql_docs::schema::SchemaSlot;
use libgraphql_docs::DirectiveSite;
use libgraphql_docs::DirectiveTagModel;
use libgraphql_docs::SlashJoiner;
use std::collections::HashSet;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct TagsCmd {
    #[arg(
        help="Restrict the displayed directives to this comma-separated list. \
             By default every directive defined in the schema is displayed.",
        long,
        value_delimiter = ',',
    )]
    allow_directives: Option<Vec<String>>,

    #[arg(
        default_value = "/",
        help="Base path that directive reference links are joined onto.",
        long,
    )]
    base_path: String,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Arguments to leave out of tooltips, written as \
             `directive.argument` (comma-separated).",
        long,
        value_delimiter = ',',
    )]
    hide_arguments: Vec<String>,

    #[arg(
        help="Also list directive usages that would not be displayed.",
        long,
    )]
    include_hidden: bool,

    #[arg(
        help="Print the tags as a JSON array instead of one line per tag.",
        long,
    )]
    json: bool,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// One directive usage as printed by `graphql-docs tags`.
#[derive(Debug, serde::Serialize)]
pub(crate) struct TagRow<'a> {
    pub displayed: bool,
    pub href: String,
    pub location: Option<String>,
    pub schema_coordinate: &'a str,
    pub tooltip_text: String,
}

#[derive(Debug)]
pub(crate) struct TagRows<'a> {
    pub num_hidden: usize,
    pub rows: Vec<TagRow<'a>>,
}

impl TagsCmd {
    fn find_schema_files(
        &self,
        errors: &mut Vec<Box<dyn Error + Send + Sync>>,
    ) -> Vec<PathBuf> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        if path.extension()
                            .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy())) {
                            log::trace!("Found schema file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                    },
                }
            }
        }

        // A single explicitly named file is loaded even if its extension
        // doesn't match `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to load {first_arg_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_path_buf());
        }

        file_paths
    }

    pub(crate) fn schema_builder(&self) -> anyhow::Result<DocsSchemaBuilder> {
        let mut builder = DocsSchema::builder();
        if let Some(allowed) = &self.allow_directives {
            builder = builder.allow_directives(allowed.iter().map(|name| {
                name.trim_start_matches('@').to_string()
            }));
        }
        for hidden in &self.hide_arguments {
            let Some((directive_name, arg_name)) = hidden.split_once('.') else {
                anyhow::bail!(
                    "Expected --hide-arguments entries like `directive.argument`, \
                    found `{hidden}`",
                );
            };
            builder = builder.hide_argument(
                directive_name.trim_start_matches('@'),
                arg_name,
            );
        }
        Ok(builder)
    }

    /// Computes a row per directive site. Sites that would not be displayed
    /// are counted, and only kept when `--include-hidden` is set.
    pub(crate) fn tag_rows<'a>(
        &self,
        schema: &SchemaSlot,
        sites: &'a [DirectiveSite],
    ) -> TagRows<'a> {
        let mut rows = vec![];
        let mut num_hidden = 0;
        for site in sites {
            let model = DirectiveTagModel::new(schema, site.usage().clone());
            let displayed = model.is_visible();
            if !displayed {
                num_hidden += 1;
                if !self.include_hidden {
                    continue;
                }
            }
            rows.push(TagRow {
                displayed,
                href: model.href(&SlashJoiner, &self.base_path),
                location: site.usage().location().map(ToString::to_string),
                schema_coordinate: site.schema_coordinate(),
                tooltip_text: model.tooltip_text().to_string(),
            });
        }
        TagRows {
            num_hidden,
            rows,
        }
    }

    pub(crate) fn render(
        &self,
        schema: &SchemaSlot,
        sites: &[DirectiveSite],
    ) -> CommandResult {
        let TagRows { num_hidden, rows } = self.tag_rows(schema, sites);

        if self.json {
            return match serde_json::to_string_pretty(&rows) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(e) => anyhow::Error::new(e)
                    .context("Unable to serialize tags")
                    .into(),
            };
        }

        let mut lines = rows.iter()
            .map(|row| format!(
                "{}{}\t{}\t{}\t{}",
                if row.displayed { "" } else { "(hidden) " },
                row.location.as_deref().unwrap_or("-"),
                row.schema_coordinate,
                row.tooltip_text,
                row.href,
            ))
            .collect::<Vec<_>>();
        lines.push(format!(
            "{} Rendered {} directive tags ({} directive usages hidden).",
            output_utils::GREEN_CHECK,
            sites.len() - num_hidden,
            num_hidden,
        ));
        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}

/// Loads the schema off the async runtime and hands it over through a
/// [`SchemaSlot`]. Tags computed before the slot is filled are all hidden.
async fn load_schema(
    builder: DocsSchemaBuilder,
    file_paths: Vec<PathBuf>,
) -> anyhow::Result<(Arc<SchemaSlot>, Vec<DirectiveSite>)> {
    let slot = Arc::new(SchemaSlot::new());
    let loader_slot = Arc::clone(&slot);
    let sites = tokio::task::spawn_blocking(move || {
        let schema = builder.load_files(file_paths)?.build()?;
        let sites = schema.directive_sites().to_vec();
        if loader_slot.fill(schema).is_err() {
            log::warn!("Schema slot was already filled; keeping the first schema.");
        }
        Ok::<_, SchemaBuildError>(sites)
    }).await
        .context("Schema loader task failed")?
        .context("Errors loading schema")?;
    Ok((slot, sites))
}

#[inherent::inherent]
impl RunnableCommand for TagsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<Box<dyn Error + Send + Sync>> = vec![];
        let file_paths = self.find_schema_files(&mut errors);
        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while finding schema files: {errors:#?}",
                output_utils::RED_X,
            ));
        }
        log::debug!("Found {} GraphQL schema files.", file_paths.len());

        let builder = match self.schema_builder() {
            Ok(builder) => builder,
            Err(e) => return e.into(),
        };
        match load_schema(builder, file_paths).await {
            Ok((slot, sites)) => self.render(&slot, &sites),
            Err(e) => e.into(),
        }
    }
}
