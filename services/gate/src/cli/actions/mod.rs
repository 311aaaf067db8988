pub mod server;

use std::path::PathBuf;

#[derive(Debug)]
pub enum Action {
    Server { port: u16, assets_dir: PathBuf },
}
