use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::{
    cli::args::InitCommand,
    config::{CONFIG_FILE_NAME, default_config_json},
};

pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let root_dir = cmd
        .common
        .source_root
        .as_deref()
        .unwrap_or_else(|| Path::new("."));
    let config_path = root_dir.join(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        true
    };

    Ok(CommandResult::new(
        CommandSummary::Init(InitSummary {
            path: config_path,
            created,
        }),
        Vec::new(),
    ))
}
