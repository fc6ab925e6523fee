use crate::Cli;
use crate::commands::CommandEnum;
use crate::commands::generate::GenerateCmd;
use clap::Parser;
use schema_ast::SchemaAstConfig;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// A scratch directory under the system temp dir, removed on drop.
struct TempDir(PathBuf);
impl TempDir {
    fn new(name: &str) -> Result<Self> {
        let path = std::env::temp_dir().join(format!(
            "graphql-schema-ast-{name}-{}",
            std::process::id(),
        ));
        if path.exists() {
            std::fs::remove_dir_all(&path)?;
        }
        std::fs::create_dir_all(&path)?;
        Ok(Self(path))
    }

    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.0.join(file_name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }
}
impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn parse_generate_cmd(args: &[&str]) -> Result<GenerateCmd> {
    let cli = Cli::try_parse_from(
        ["graphql-schema-ast", "generate"].iter().chain(args.iter()),
    )?;
    match cli.cmd {
        Some(CommandEnum::Generate(cmd)) => Ok(*cmd),
        None => Err("expected the generate command".into()),
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn flags_are_applied_over_config_file() -> Result<()> {
    let temp_dir = TempDir::new("config")?;
    let config_path = temp_dir.write("codegen.json", r#"{"includeDirectives": true}"#)?;
    let cmd = parse_generate_cmd(&[
        "--config",
        &path_arg(&config_path),
        "--federation",
        "schema.graphql",
    ])?;

    let config = cmd.load_config()?;

    assert_eq!(config, SchemaAstConfig {
        comment_descriptions: false,
        federation: true,
        include_directives: true,
    });

    Ok(())
}

#[test]
fn invalid_config_file_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new("bad-config")?;
    let config_path = temp_dir.write("codegen.json", "{ not json")?;
    let cmd = parse_generate_cmd(&["--config", &path_arg(&config_path), "schema.graphql"])?;

    assert!(cmd.load_config().is_err());

    Ok(())
}

#[test]
fn finds_schema_files_by_extension() -> Result<()> {
    let temp_dir = TempDir::new("find")?;
    temp_dir.write("b.graphql", "type Query { a: Int }")?;
    temp_dir.write("a.graphqls", "scalar Date")?;
    temp_dir.write("notes.txt", "not a schema")?;
    let cmd = parse_generate_cmd(&[&path_arg(&temp_dir.0)])?;

    let file_paths = cmd.find_schema_files()?;

    let file_names: Vec<String> =
        file_paths.iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
    assert_eq!(file_names, vec!["a.graphqls", "b.graphql"]);

    Ok(())
}

#[test]
fn single_explicit_file_is_loaded_regardless_of_extension() -> Result<()> {
    let temp_dir = TempDir::new("explicit")?;
    let schema_path = temp_dir.write("schema.sdl", "type Query { a: Int }")?;
    let cmd = parse_generate_cmd(&[&path_arg(&schema_path)])?;

    let file_paths = cmd.find_schema_files()?;

    assert_eq!(file_paths, vec![std::fs::canonicalize(&schema_path)?]);

    Ok(())
}

#[tokio::test]
async fn generates_sdl_from_schema_files() -> Result<()> {
    let temp_dir = TempDir::new("generate")?;
    temp_dir.write("query.graphql", "type Query { me: User }")?;
    temp_dir.write("user.graphql", "\"A user\"\ntype User { id: ID! }")?;
    let cmd = parse_generate_cmd(&["--comment-descriptions", &path_arg(&temp_dir.0)])?;

    let sdl = cmd.generate().await?;

    assert_eq!(sdl, concat!(
        "type Query {\n",
        "  me: User\n",
        "}\n",
        "\n",
        "# A user\n",
        "type User {\n",
        "  id: ID!\n",
        "}\n",
    ));

    Ok(())
}

#[tokio::test]
async fn output_file_must_be_graphql() -> Result<()> {
    let temp_dir = TempDir::new("output")?;
    let schema_path = temp_dir.write("schema.graphql", "type Query { a: Int }")?;
    let output_path = temp_dir.0.join("schema.ts");
    let cmd = parse_generate_cmd(&[
        "--output",
        &path_arg(&output_path),
        &path_arg(&schema_path),
    ])?;

    let result = cmd.generate().await;

    let Err(err) = result else {
        panic!("Expected a validation error");
    };
    assert_eq!(
        err.to_string(),
        "Plugin \"schema-ast\" requires extension to be \".graphql\"!",
    );

    Ok(())
}
