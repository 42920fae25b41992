use super::render::{print_messages, print_path, print_resolved, print_warning};
use super::setup::{Cli, Commands};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use std::io;
use std::path::Path;
use zk::api::ZkApi;
use zk::category::NoteCategory;
use zk::editor::{default_editor, open_in_editor, prompt_editor};
use zk::error::{ErrorKind, Result};
use zk::init::initialize;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api = initialize(cli.config.as_deref())?;
    let now = Local::now().naive_local();

    match &cli.command {
        Commands::Init => handle_init(&api),
        Commands::Daily { edit } => handle_note(&api, NoteCategory::Daily, "", edit.edit, now),
        Commands::Fleet { topic, edit } => {
            handle_note(&api, NoteCategory::Fleeting, topic, edit.edit, now)
        }
        Commands::Perm { topic, edit } => {
            handle_note(&api, NoteCategory::Permanent, topic, edit.edit, now)
        }
        Commands::Lit { topic, edit } => {
            handle_note(&api, NoteCategory::Literature, topic, edit.edit, now)
        }
        Commands::Meet { topic, edit } => {
            handle_note(&api, NoteCategory::Meeting, topic, edit.edit, now)
        }
        Commands::Path { category, topic } => handle_path(&api, *category, topic, now),
        Commands::Check => handle_check(&api),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn handle_init(api: &ZkApi) -> Result<()> {
    let result = api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note(
    api: &ZkApi,
    category: NoteCategory,
    topic: &str,
    edit: bool,
    now: NaiveDateTime,
) -> Result<()> {
    match api.write_note(category, topic, now) {
        Ok(result) => {
            print_messages(&result.messages);
            if let (true, Some(path)) = (edit, result.note_path.as_deref()) {
                edit_file(path);
            }
            Ok(())
        }
        Err(e) => {
            // An existing note can still be opened for editing.
            if edit && e.kind() == ErrorKind::Write {
                if let Some(path) = e.related_path().filter(|p| p.is_file()) {
                    edit_file(path);
                }
            }
            Err(e)
        }
    }
}

fn handle_path(
    api: &ZkApi,
    category: NoteCategory,
    topic: &str,
    now: NaiveDateTime,
) -> Result<()> {
    let result = api.note_path(category, topic, now)?;
    if let Some(path) = &result.note_path {
        print_path(path);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(api: &ZkApi) -> Result<()> {
    let result = api.check()?;
    print_messages(&result.messages);
    print_resolved(&result.resolved);
    Ok(())
}

fn edit_file(path: &Path) {
    let default = default_editor();
    let editor = match prompt_editor(io::stdin().lock(), io::stdout(), &default) {
        Ok(editor) => editor,
        Err(e) => {
            print_warning(&format!("Could not read editor choice: {}", e));
            return;
        }
    };

    match open_in_editor(&editor, path) {
        Ok(status) if !status.success() => {
            print_warning(&format!("Editor {} exited with {}", editor, status));
        }
        Ok(_) => {}
        Err(_) => print_warning(&format!("Editor {} not found.", editor)),
    }
}
