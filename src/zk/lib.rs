//! # zk Architecture
//!
//! zk writes Zettelkasten notes from templates. Like most of its kind it is a
//! small library with a thin CLI on top: the library never prints and never
//! exits, the CLI never touches note files directly.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, editor prompt, colors, exit codes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Finds and validates the config file                      │
//! │  - Returns `Result<CmdResult>`                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - init, note writing and resolution, config check          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: config.rs, category.rs, template.rs                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation Up Front
//!
//! A [`config::Configuration`] only exists once every configured directory and
//! template file has been seen on disk. Commands take one by reference and can
//! assume the layout was sound when it was loaded. Nothing is locked, so a file
//! deleted afterwards still surfaces as a write error.
//!
//! ## Time Is an Argument
//!
//! Filenames and bodies embed the current date. Every function that substitutes
//! tokens takes the time explicitly; only the CLI reads the clock.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per command
//! - [`config`]: Config file format, default schema, validation
//! - [`category`]: Note categories and their compiled-in defaults
//! - [`template`]: Token substitution for filenames and note bodies
//! - [`editor`]: Editor prompt and launch
//! - [`init`]: Config file discovery
//! - [`error`]: Error types

pub mod api;
pub mod category;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod init;
pub mod template;
