use crate::commands::{CmdMessage, CmdResult};
use crate::config::Configuration;
use crate::error::Result;

pub fn run(config: &Configuration) -> Result<CmdResult> {
    let resolved = config
        .all_paths()
        .map(|(category, paths)| (category, paths.clone()))
        .collect();

    let mut result = CmdResult::default().with_resolved(resolved);
    result.add_message(CmdMessage::success(format!(
        "Config OK, zettelkasten at {}",
        config.zettel_path().display()
    )));
    Ok(result)
}
