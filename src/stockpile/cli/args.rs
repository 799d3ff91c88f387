use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockpile", version)]
#[command(about = "Keep track of stock in a plain JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file to use (overrides the configured one)
    #[arg(short, long, global = true, env = "STOCKPILE_FILE")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, env = "STOCKPILE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List items
    #[command(alias = "ls")]
    List,

    /// Add an item
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// Stock count (whole number, zero or more)
        #[arg(allow_hyphen_values = true)]
        stock: String,
    },

    /// Delete one or more items by id
    #[command(alias = "rm")]
    Delete {
        /// Ids as shown by `list` (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (inventory-file, on-load-error)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Open the interactive form (default)
    Tui,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stockpile").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_means_interactive() {
        assert_eq!(parse(&[]).command, None);
    }

    #[test]
    fn add_takes_name_and_stock() {
        assert_eq!(
            parse(&["add", "Widget", "12"]).command,
            Some(Commands::Add {
                name: "Widget".into(),
                stock: "12".into()
            })
        );
    }

    #[test]
    fn add_passes_negative_stock_through_for_validation() {
        assert_eq!(
            parse(&["a", "Widget", "-3"]).command,
            Some(Commands::Add {
                name: "Widget".into(),
                stock: "-3".into()
            })
        );
    }

    #[test]
    fn delete_accepts_several_ids_and_alias() {
        assert_eq!(
            parse(&["rm", "1", "3"]).command,
            Some(Commands::Delete {
                ids: vec!["1".into(), "3".into()]
            })
        );
    }

    #[test]
    fn delete_requires_an_id() {
        assert!(Cli::try_parse_from(["stockpile", "delete"]).is_err());
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = parse(&["list", "--file", "shop.json", "-v"]);
        assert_eq!(cli.command, Some(Commands::List));
        assert_eq!(cli.file, Some(PathBuf::from("shop.json")));
        assert!(cli.verbose);
    }
}
