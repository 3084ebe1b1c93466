mod tags;

use crate::Cli;
use crate::CommandResult;
pub(crate) use tags::TagsCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-docs")]
pub(crate) enum CommandEnum {
    /// Print the directive tag computed for every directive usage in a schema.
    Tags(Box<TagsCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Tags(cmd) => cmd.run(cli).await
        }
    }
}
