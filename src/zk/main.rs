//! The `zk` binary. All CLI behavior lives in `cli/`; this file only runs it
//! and turns a failure into an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print_error(&e);
        std::process::exit(e.kind().exit_code());
    }
}
