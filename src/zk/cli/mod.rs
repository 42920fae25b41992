//! # CLI Behavior
//!
//! One UI client for zk. This is the only place that reads the clock, talks to
//! the terminal, or decides exit codes.
//!
//! ## Commands
//!
//! - `zk init` writes the default config to `~/.zkcli` (or `--config`/`$ZK_CONFIG`).
//! - `zk daily`, `zk fleet [topic]`, `zk perm <topic>`, `zk lit <topic>`,
//!   `zk meet <topic>` write a new note and print its path.
//! - `zk path <category> [topic]` prints where a note would go without writing it.
//! - `zk check` validates the config and lists the resolved paths.
//!
//! Note commands take `--edit`: after the note is written (or if it already
//! exists) zk asks which editor to use and opens the file.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: Colored output
//! - `setup`: clap definitions

mod commands;
mod render;
pub mod setup;

pub use commands::run;
pub use render::print_error;
