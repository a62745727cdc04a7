use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use csvview::cli::{CliArgs, StartupConfig, StartupMode};
use csvview::config::ViewerConfig;
use csvview::config_paths;
use csvview::export::export_to_path;
use csvview::load::{initial_state, read_table};
use csvview::model::{AppModel, Source};
use csvview::table::TableState;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    csvview::tracing::init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("csvview: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<()> {
    let config = ViewerConfig::load();
    let startup = args.into_config(&config).map_err(anyhow::Error::msg)?;
    tracing::debug!(?startup, "startup configuration");

    if startup.mode == StartupMode::WriteConfig {
        return write_config();
    }

    let path = startup.path.clone().context("no input file given")?;
    let table = read_table(&path, startup.delimiter)?;
    let state = initial_state(table, &startup)?;

    match startup.mode {
        StartupMode::Export(ref out) => {
            export_to_path(&state, startup.delimiter, out)?;
            Ok(())
        }
        _ => view(state, path, &startup),
    }
}

fn view(state: TableState, path: PathBuf, startup: &StartupConfig) -> Result<()> {
    let mut model = AppModel::new(state).with_source(Source {
        path,
        delimiter: startup.delimiter,
        header: startup.header,
    });
    model.case_sensitive = startup.case_sensitive;
    model.page_overlap = startup.page_overlap;

    csvview::runtime::run(&mut model)
}

fn write_config() -> Result<()> {
    if let Some(existing) = config_paths::config_file().filter(|p| p.exists()) {
        bail!("{} already exists", existing.display());
    }
    let path = ViewerConfig::default().save()?;
    println!("{}", path.display());
    Ok(())
}
