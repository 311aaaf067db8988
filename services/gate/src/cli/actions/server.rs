use crate::cli::actions::Action;
use crate::gate;
use anyhow::Result;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    let Action::Server { port, assets_dir } = action;

    gate::serve(port, assets_dir).await
}
