//! Command dispatch and handler modules.

mod publish;

use miette::Result;

use crate::cli::Cli;

/// Route a parsed CLI invocation to the publish handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    publish::exec(cli).await
}
