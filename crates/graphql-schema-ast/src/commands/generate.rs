use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use schema_ast::ConfiguredPlugin;
use schema_ast::PLUGIN_NAME;
use schema_ast::SchemaAstConfig;
use schema_ast_core::SchemaBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Print descriptions as `#` comments instead of block strings.",
        long,
    )]
    comment_descriptions: bool,

    #[arg(
        help="Path to a JSON file containing the plugin config \
             (`includeDirectives`, `commentDescriptions`, `federation`). \
             Flags passed on the command line are applied on top of it.",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Remove Apollo federation types, fields, and directives.",
        long,
    )]
    federation: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which make up the schema.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,

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
        help="Print directive definitions and annotations as written in the \
             schema files.",
        long,
    )]
    include_directives: bool,

    #[arg(
        help="File to write the generated SDL to. Must end in `.graphql`. \
             When omitted, the SDL is written to stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,
}
impl GenerateCmd {
    pub(super) fn load_config(&self) -> anyhow::Result<SchemaAstConfig> {
        let mut config =
            if let Some(config_path) = &self.config {
                let config_json = std::fs::read_to_string(config_path)
                    .with_context(|| format!("Failed to read config file {config_path:?}"))?;
                serde_json::from_str(&config_json)
                    .with_context(|| format!("Failed to parse config file {config_path:?}"))?
            } else {
                SchemaAstConfig::default()
            };

        config.comment_descriptions |= self.comment_descriptions;
        config.federation |= self.federation;
        config.include_directives |= self.include_directives;
        log::debug!("Using config: {config:?}");
        Ok(config)
    }

    pub(super) fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
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
                let entry = entry.with_context(|| format!(
                    "Failed while scanning for schema files at/under {path:?}",
                ))?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }

                log::trace!("Found file at {path:#?}.");
                if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                    && graphql_file_exts.contains(&*ext) {
                    file_paths.push(canonicalize(path)?);
                }
            }
        }

        // A single file passed explicitly is loaded even if its extension
        // isn't one of `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let first_arg_path = canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to load {first_arg_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path);
        }

        if file_paths.is_empty() {
            anyhow::bail!("No GraphQL schema files were found");
        }
        log::debug!("Found {} GraphQL schema files.", file_paths.len());
        Ok(file_paths)
    }

    pub(super) async fn generate(&self) -> anyhow::Result<String> {
        let config = self.load_config()?;
        let file_paths = self.find_schema_files()?;
        let schema =
            SchemaBuilder::new()
                .load_files(file_paths)
                .and_then(|builder| builder.build())
                .context("Errors loading schema")?;

        if let Some(output) = &self.output {
            schema_ast::validate(
                &schema,
                &[],
                &config,
                output,
                &[ConfiguredPlugin::new(PLUGIN_NAME)],
            ).await?;
        }

        Ok(schema_ast::plugin(&schema, &[], &config).await?)
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let sdl = match self.generate().await {
            Ok(sdl) => sdl,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let Some(output) = &self.output else {
            return CommandResult::stdout(format_args!("{sdl}"));
        };

        match std::fs::write(output, &sdl) {
            Ok(()) => CommandResult::stdout(format_args!(
                "{} Wrote schema to {}\n",
                output_utils::GREEN_CHECK,
                output.display(),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to write {}: {err}",
                output_utils::RED_X,
                output.display(),
            )),
        }
    }
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve path {path:?}"))
}
