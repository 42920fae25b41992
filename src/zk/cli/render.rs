use colored::Colorize;
use std::path::Path;
use zk::api::{CmdMessage, MessageLevel};
use zk::category::NoteCategory;
use zk::config::ResolvedPaths;
use zk::error::ZkError;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_path(path: &Path) {
    println!("{}", path.display());
}

pub(super) fn print_resolved(resolved: &[(NoteCategory, ResolvedPaths)]) {
    for (category, paths) in resolved {
        println!("{}", category.to_string().bold());
        println!("  template     {}", paths.template.display());
        println!("  destination  {}", paths.destination.display());
    }
}

pub(super) fn print_warning(message: &str) {
    eprintln!("{}", message.yellow());
}

pub fn print_error(err: &ZkError) {
    eprintln!("{}", err.to_string().bright_red());
}
