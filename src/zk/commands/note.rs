//! Note writing.
//!
//! A note's filename comes from its category's filename template; its body is
//! the category's template file, copied line by line with tokens substituted.
//! The destination is opened with `create_new`, so an existing note is never
//! replaced, even if another process creates it after the existence check.

use crate::category::NoteCategory;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::Configuration;
use crate::error::{Result, ZkError};
use crate::template::{render_filename, render_line, Substitution};
use chrono::NaiveDateTime;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where a note of `category` about `topic` would be written at `time`. No I/O.
///
/// Only the template's file name is rendered, so a template kept in a
/// subdirectory of the templates directory still lands directly in the
/// destination directory.
pub fn resolve_destination(
    config: &Configuration,
    category: NoteCategory,
    topic: &str,
    time: NaiveDateTime,
) -> PathBuf {
    let paths = config.paths(category);
    let template_name = paths
        .template
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let subst = Substitution { time, topic };
    paths.destination.join(render_filename(&template_name, &subst))
}

/// Writes a new note from the category's template and returns its path.
pub fn write_note(
    config: &Configuration,
    category: NoteCategory,
    topic: &str,
    time: NaiveDateTime,
) -> Result<PathBuf> {
    let path = resolve_destination(config, category, topic, time);
    if path.exists() {
        return Err(exists_error(&path));
    }

    let template_path = &config.paths(category).template;
    let template = File::open(template_path).map_err(|e| {
        ZkError::write_io(
            format!("Could not read template {}", template_path.display()),
            template_path,
            e,
        )
    })?;

    let note = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => exists_error(&path),
            _ => ZkError::write_io(format!("Error writing to {}", path.display()), &path, e),
        })?;

    let subst = Substitution { time, topic };
    if let Err(e) = copy_rendered(BufReader::new(template), BufWriter::new(note), &subst) {
        let _ = fs::remove_file(&path);
        return Err(ZkError::write_io(
            format!("Error writing to {}", path.display()),
            &path,
            e,
        ));
    }

    log::debug!(
        "wrote {} note {} from {}",
        category,
        path.display(),
        template_path.display()
    );
    Ok(path)
}

fn exists_error(path: &Path) -> ZkError {
    ZkError::write(format!("Note {} exists.", path.display()), path)
}

fn copy_rendered<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    subst: &Substitution<'_>,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        writer.write_all(render_line(&line, subst).as_bytes())?;
    }
    writer.flush()
}

pub fn run(
    config: &Configuration,
    category: NoteCategory,
    topic: &str,
    time: NaiveDateTime,
) -> Result<CmdResult> {
    let path = write_note(config, category, topic, time)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note written to {}.",
        path.display()
    )));
    Ok(result.with_note_path(path))
}

pub fn run_resolve(
    config: &Configuration,
    category: NoteCategory,
    topic: &str,
    time: NaiveDateTime,
) -> Result<CmdResult> {
    let path = resolve_destination(config, category, topic, time);
    let mut result = CmdResult::default();
    if path.exists() {
        result.add_message(CmdMessage::warning(format!(
            "Note {} already exists.",
            path.display()
        )));
    }
    Ok(result.with_note_path(path))
}
