use crate::commands::{CmdMessage, CmdResult};
use crate::config::write_new_config;
use crate::error::Result;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<CmdResult> {
    write_new_config(config_path)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Config file written to {}",
        config_path.display()
    )));
    result.add_message(CmdMessage::info(
        "Create the zettel, template and destination directories it names before writing notes.",
    ));
    Ok(result)
}
