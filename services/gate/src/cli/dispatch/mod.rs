use crate::cli::actions::Action;
use anyhow::{anyhow, Result};
use clap::ArgMatches;
use std::path::PathBuf;

/// Map parsed CLI matches to the action to execute.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let port = *matches
        .get_one::<u16>("port")
        .ok_or_else(|| anyhow!("Port is required"))?;

    let assets_dir = matches
        .get_one::<String>("assets")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Assets directory is required"))?;

    Ok(Action::Server { port, assets_dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn handler_builds_the_server_action() {
        let matches = commands::new().get_matches_from(vec![
            "konto-gate",
            "--port",
            "8081",
            "--assets",
            "dist",
        ]);

        let action = handler(&matches).expect("action");
        let Action::Server { port, assets_dir } = action;
        assert_eq!(port, 8081);
        assert_eq!(assets_dir, PathBuf::from("dist"));
    }
}
