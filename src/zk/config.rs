//! # Configuration
//!
//! zk is driven by a small sectioned text file (by default `~/.zkcli`):
//!
//! ```text
//! [General]
//! ZettelkastenPath:~/Zettel
//! TemplatesDirectory:.Templates
//!
//! [Template Names]
//! fleeting:fleetingYYMMDD-HHMMtopic.md
//! ...
//!
//! [Note Destination Directory Names]
//! fleeting:Fleeting
//! ...
//! ```
//!
//! [`default_document`] builds the reference layout from the category table in
//! [`crate::category`]. The same document is written by `zk init` and used as the
//! schema when an existing file is validated, so the two cannot drift apart.
//!
//! [`Configuration::load`] is the only way to obtain a [`Configuration`]. It either
//! returns a value whose directories and template files were all present at load
//! time, or the first problem it found.

use crate::category::{CategoryMap, NoteCategory};
use crate::error::{Result, ZkError};
use directories::BaseDirs;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".zkcli";
pub const DELIMITER: char = ':';

pub const SEC_GENERAL: &str = "General";
pub const FIELD_ZETTEL_PATH: &str = "ZettelkastenPath";
pub const FIELD_TEMPLATE_DIR: &str = "TemplatesDirectory";
pub const SEC_TEMPLATE_NAMES: &str = "Template Names";
pub const SEC_NOTE_DIR_NAMES: &str = "Note Destination Directory Names";

pub const DEFAULT_ZETTEL_PATH: &str = "~/Zettel";
pub const DEFAULT_TEMPLATE_DIR: &str = ".Templates";

/// A parsed config file: ordered sections of ordered `option:value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    options: Vec<(String, String)>,
}

impl ConfigDocument {
    pub fn parse(text: &str) -> Result<Self> {
        let mut doc = ConfigDocument::default();
        let mut current: Option<usize> = None;

        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current = Some(doc.section_index_or_insert(name.trim()));
                continue;
            }

            let Some((key, value)) = line.split_once(DELIMITER) else {
                return Err(ZkError::config(format!(
                    "Config file line {} is not an option or section header: {}",
                    lineno + 1,
                    line
                )));
            };
            let Some(idx) = current else {
                return Err(ZkError::config(format!(
                    "Config file line {} has an option before any section header",
                    lineno + 1
                )));
            };
            doc.sections[idx].set(key.trim(), value.trim());
        }

        Ok(doc)
    }

    fn section_index_or_insert(&mut self, name: &str) -> usize {
        if let Some(idx) = self.sections.iter().position(|s| s.name == name) {
            return idx;
        }
        self.sections.push(Section {
            name: name.to_string(),
            options: Vec::new(),
        });
        self.sections.len() - 1
    }

    pub fn set(&mut self, section: &str, option: &str, value: &str) {
        let idx = self.section_index_or_insert(section);
        self.sections[idx].set(option, value);
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn options<'a>(&'a self, section: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.section(section)
            .into_iter()
            .flat_map(|s| s.options.iter().map(|(k, _)| k.as_str()))
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.section(section).is_some()
    }

    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        self.section(section)?
            .options
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(option))
            .map(|(_, v)| v.as_str())
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Confirms every section and option of `schema` is present here.
    /// Sections are checked before options.
    pub fn check_against(&self, schema: &ConfigDocument) -> Result<()> {
        for sec in schema.sections() {
            if !self.has_section(sec) {
                return Err(ZkError::config(format!(
                    "Config file missing section: {}",
                    sec
                )));
            }
        }
        for sec in schema.sections() {
            for opt in schema.options(sec) {
                if self.get(sec, opt).is_none() {
                    return Err(ZkError::config(format!(
                        "Config file missing option {} under section {}",
                        opt, sec
                    )));
                }
            }
        }
        Ok(())
    }

    /// Value of an option the schema check has already confirmed.
    fn required(&self, section: &str, option: &str) -> Result<&str> {
        self.get(section, option).ok_or_else(|| {
            ZkError::config(format!(
                "Config file missing option {} under section {}",
                option, section
            ))
        })
    }
}

impl Section {
    fn set(&mut self, key: &str, value: &str) {
        match self
            .options
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some((_, v)) => *v = value.to_string(),
            None => self.options.push((key.to_string(), value.to_string())),
        }
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in &section.options {
                writeln!(f, "{}{}{}", key, DELIMITER, value)?;
            }
        }
        Ok(())
    }
}

/// The reference configuration. Pure; touches nothing on disk.
pub fn default_document() -> ConfigDocument {
    let mut doc = ConfigDocument::default();
    doc.set(SEC_GENERAL, FIELD_ZETTEL_PATH, DEFAULT_ZETTEL_PATH);
    doc.set(SEC_GENERAL, FIELD_TEMPLATE_DIR, DEFAULT_TEMPLATE_DIR);
    for category in NoteCategory::ALL {
        let defaults = category.defaults();
        doc.set(SEC_TEMPLATE_NAMES, defaults.key, defaults.template_name);
    }
    for category in NoteCategory::ALL {
        let defaults = category.defaults();
        doc.set(SEC_NOTE_DIR_NAMES, defaults.key, defaults.folder);
    }
    doc
}

/// Writes the default configuration to `path`. Never overwrites.
pub fn write_new_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(ZkError::write(format!("{} exists.", path.display()), path));
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => {
                ZkError::write(format!("{} exists.", path.display()), path)
            }
            _ => ZkError::write_io(format!("Error writing to {}", path.display()), path, e),
        })?;

    file.write_all(default_document().to_string().as_bytes())
        .map_err(|e| ZkError::write_io(format!("Error writing to {}", path.display()), path, e))?;

    log::debug!("wrote default config to {}", path.display());
    Ok(())
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/")
    };

    match (rest, BaseDirs::new()) {
        (Some(rest), Some(dirs)) if rest.is_empty() => dirs.home_dir().to_path_buf(),
        (Some(rest), Some(dirs)) => dirs.home_dir().join(rest),
        _ => PathBuf::from(raw),
    }
}

/// Absolute locations for one note category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub template: PathBuf,
    pub destination: PathBuf,
}

/// A validated configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    zettel_path: PathBuf,
    resolved: CategoryMap<ResolvedPaths>,
}

impl Configuration {
    /// Reads and validates the config file at `config_path`.
    pub fn load(config_path: &Path) -> Result<Self> {
        log::debug!("loading config from {}", config_path.display());
        let text = fs::read_to_string(config_path).map_err(|e| {
            ZkError::config(format!(
                "Could not read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;
        let doc = ConfigDocument::parse(&text)?;
        Self::from_document(&doc)
    }

    /// Validates an already parsed document.
    pub fn from_document(doc: &ConfigDocument) -> Result<Self> {
        doc.check_against(&default_document())?;

        let zettel_path = expand_home(doc.required(SEC_GENERAL, FIELD_ZETTEL_PATH)?);
        if !zettel_path.is_dir() {
            return Err(ZkError::path(
                format!("Zettel path not valid: {}", zettel_path.display()),
                zettel_path,
            ));
        }

        let templates_dir = zettel_path.join(doc.required(SEC_GENERAL, FIELD_TEMPLATE_DIR)?);
        if !templates_dir.is_dir() {
            return Err(ZkError::path(
                format!("Template path not valid: {}", templates_dir.display()),
                templates_dir,
            ));
        }

        let dir_names = CategoryMap::try_from_fn(|c| {
            doc.required(SEC_NOTE_DIR_NAMES, c.key()).map(str::to_string)
        })?;
        for (_, name) in dir_names.iter() {
            let dir = zettel_path.join(name);
            if !dir.is_dir() {
                return Err(ZkError::path(
                    format!("Write destination not found: {}", dir.display()),
                    dir,
                ));
            }
        }

        let template_names = CategoryMap::try_from_fn(|c| {
            doc.required(SEC_TEMPLATE_NAMES, c.key()).map(str::to_string)
        })?;
        for (_, name) in template_names.iter() {
            let file = templates_dir.join(name);
            if !file.is_file() {
                return Err(ZkError::path(
                    format!("Template file not found: {}", file.display()),
                    file,
                ));
            }
        }

        let resolved = CategoryMap::from_fn(|c| ResolvedPaths {
            template: templates_dir.join(&template_names[c]),
            destination: zettel_path.join(&dir_names[c]),
        });
        log::debug!("config valid, zettel path {}", zettel_path.display());

        Ok(Self {
            zettel_path,
            resolved,
        })
    }

    pub fn zettel_path(&self) -> &Path {
        &self.zettel_path
    }

    pub fn paths(&self, category: NoteCategory) -> &ResolvedPaths {
        &self.resolved[category]
    }

    pub fn all_paths(&self) -> impl Iterator<Item = (NoteCategory, &ResolvedPaths)> {
        self.resolved.iter()
    }
}
