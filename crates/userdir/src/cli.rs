use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use directory_core::SortOrder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "userdir",
    version,
    about = "Searchable, sortable user directory for JSON user APIs"
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "USERDIR_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Users endpoint URL (overrides config file)
    #[arg(long, env = "USERDIR_URL", global = true)]
    pub url: Option<String>,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum SortArg {
    /// Names A-Z
    #[value(alias = "a-z")]
    Asc,
    /// Names Z-A
    #[value(alias = "z-a")]
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Asc,
            SortArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch users and print the directory
    #[command(visible_alias = "ls")]
    List {
        /// Only show users whose name, email or username contains this text
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Sort order by name (defaults to config, then asc)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Fetch users once, then search interactively from stdin
    ///
    /// Each input line replaces the search term. ':sort' toggles the order,
    /// ':clear' clears the search and ':quit' (or end of input) exits.
    Browse {
        /// Initial sort order by name (defaults to config, then asc)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Configuration inspection
    #[command(visible_alias = "cfg")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "userdir", &mut std::io::stdout());
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file locations that are searched
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_with_search_and_sort() {
        let cli = Cli::parse_from(["userdir", "list", "--search", "bob", "--sort", "desc"]);

        match cli.command {
            Commands::List { search, sort } => {
                assert_eq!(search.as_deref(), Some("bob"));
                assert_eq!(sort.map(SortOrder::from), Some(SortOrder::Desc));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["userdir", "ls", "-o", "json", "-vv", "--url", "http://x"]);

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.url.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_sort_aliases() {
        let cli = Cli::parse_from(["userdir", "browse", "--sort", "z-a"]);

        assert!(matches!(
            cli.command,
            Commands::Browse {
                sort: Some(SortArg::Desc)
            }
        ));
    }
}
