use clap::CommandFactory;
use crate::commands;

/// Inspect how the directive usages in a GraphQL schema render as
/// documentation tags.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-docs", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
