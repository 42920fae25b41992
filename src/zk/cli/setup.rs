use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use zk::category::NoteCategory;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "1.0.0" for releases, "1.0.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "zk", bin_name = "zk", version = get_version())]
#[command(about = "Write Zettelkasten notes from templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.zkcli
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct EditArgs {
    /// Open the note in an editor afterwards
    #[arg(short, long)]
    pub edit: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the config file in the home directory
    #[command(display_order = 1)]
    Init,

    /// Create a daily note
    #[command(display_order = 2)]
    Daily {
        #[command(flatten)]
        edit: EditArgs,
    },

    /// Create a fleeting note with an optional TOPIC
    #[command(display_order = 3)]
    Fleet {
        #[arg(default_value = "")]
        topic: String,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Create a permanent note with a required TOPIC
    #[command(display_order = 4)]
    Perm {
        topic: String,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Create a literature note with a required TOPIC
    #[command(display_order = 5)]
    Lit {
        topic: String,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Create a meeting note with a required TOPIC
    #[command(display_order = 6)]
    Meet {
        topic: String,

        #[command(flatten)]
        edit: EditArgs,
    },

    /// Print where a note would be written, without writing it
    #[command(display_order = 7)]
    Path {
        #[arg(value_enum)]
        category: NoteCategory,

        #[arg(default_value = "")]
        topic: String,
    },

    /// Validate the config file and show the resolved paths
    #[command(display_order = 8)]
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_fleet_topic_optional() {
        match parse(&["zk", "fleet"]).command {
            Commands::Fleet { topic, edit } => {
                assert_eq!(topic, "");
                assert!(!edit.edit);
            }
            other => panic!("unexpected command {:?}", other),
        }

        match parse(&["zk", "fleet", "ideas", "-e"]).command {
            Commands::Fleet { topic, edit } => {
                assert_eq!(topic, "ideas");
                assert!(edit.edit);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_topic_required_for_perm_lit_meet() {
        for cmd in ["perm", "lit", "meet"] {
            assert!(Cli::try_parse_from(["zk", cmd]).is_err(), "{cmd} without topic");
        }
        match parse(&["zk", "meet", "standup", "--edit"]).command {
            Commands::Meet { topic, edit } => {
                assert_eq!(topic, "standup");
                assert!(edit.edit);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_daily_has_no_topic() {
        assert!(Cli::try_parse_from(["zk", "daily", "extra"]).is_err());
        assert!(matches!(
            parse(&["zk", "daily", "-e"]).command,
            Commands::Daily { edit: EditArgs { edit: true } }
        ));
    }

    #[test]
    fn test_path_command() {
        let cli = parse(&["zk", "path", "permanent", "idea"]);
        match cli.command {
            Commands::Path { category, topic } => {
                assert_eq!(category, NoteCategory::Permanent);
                assert_eq!(topic, "idea");
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Cli::try_parse_from(["zk", "path", "templates"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["zk", "check", "--config", "/tmp/zk.conf", "-v"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/zk.conf")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_version_flag_is_capital_v() {
        let err = Cli::try_parse_from(["zk", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        let err = Cli::try_parse_from(["zk", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
