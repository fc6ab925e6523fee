mod generate;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-schema-ast")]
pub(crate) enum CommandEnum {
    /// Print one or more schema files as a single SDL document.
    Generate(Box<GenerateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await
        }
    }
}

#[cfg(test)]
mod tests;
