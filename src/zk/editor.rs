use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::{Command, ExitStatus};

pub const DEFAULT_EDITOR: &str = "vim";

/// The editor offered at the prompt: $EDITOR, then $VISUAL, then vim.
pub fn default_editor() -> String {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return editor;
            }
        }
    }
    DEFAULT_EDITOR.to_string()
}

/// Asks which editor to use. An empty answer (or end of input) picks `default`.
pub fn prompt_editor<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    default: &str,
) -> io::Result<String> {
    write!(output, "Edit file? [default: {}] ", default)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Runs `editor <path>` and waits for it to exit.
pub fn open_in_editor(editor: &str, path: &Path) -> io::Result<ExitStatus> {
    log::debug!("launching {} on {}", editor, path.display());
    Command::new(editor).arg(path).status()
}
