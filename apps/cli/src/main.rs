use anyhow::Result;
use clap::Parser;
use lbox_cli::args::{AppCommands, Cli};
use lbox_cli::handlers::{codegen, resolve, versions};
use lbox_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = Logger::builder().name(env!("CARGO_BIN_NAME")).level(cli.log_level);
    if let Some(dir) = &cli.log_dir {
        logger = logger.path(dir);
    }
    let _log = logger.init()?;

    match cli.command {
        AppCommands::Resolve { manifest, sm, name } => {
            resolve::resolve_manifest(&manifest, sm, name.as_deref())?;
        },
        AppCommands::Codegen { manifest, sm, out } => {
            codegen::codegen_manifest(&manifest, sm, out.as_deref())?;
        },
        AppCommands::Versions {} => versions::list_versions(),
    }

    Ok(())
}
