//! # API Facade
//!
//! [`ZkApi`] is the single entry point a UI calls. It owns the location of the
//! config file, loads and validates the configuration for each operation that
//! needs one, and dispatches to `commands/*.rs`.
//!
//! It does no printing and never exits the process: everything comes back as a
//! [`CmdResult`] or a [`ZkError`](crate::error::ZkError). The wall-clock time is
//! taken as an argument so callers (and tests) decide what "now" is.

use crate::category::NoteCategory;
use crate::commands;
use crate::config::Configuration;
use crate::error::{Result, ZkError};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct ZkApi {
    config_path: PathBuf,
}

impl ZkApi {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the configuration, failing with a config error if the file is absent.
    pub fn load_config(&self) -> Result<Configuration> {
        if !self.config_path.is_file() {
            return Err(ZkError::config(format!(
                "Config file {} not found. Please run zk init",
                self.config_path.display()
            )));
        }
        Configuration::load(&self.config_path)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.config_path)
    }

    pub fn write_note(
        &self,
        category: NoteCategory,
        topic: &str,
        time: NaiveDateTime,
    ) -> Result<CmdResult> {
        let config = self.load_config()?;
        commands::note::run(&config, category, topic, time)
    }

    pub fn note_path(
        &self,
        category: NoteCategory,
        topic: &str,
        time: NaiveDateTime,
    ) -> Result<CmdResult> {
        let config = self.load_config()?;
        commands::note::run_resolve(&config, category, topic, time)
    }

    pub fn check(&self) -> Result<CmdResult> {
        let config = self.load_config()?;
        commands::check::run(&config)
    }
}
