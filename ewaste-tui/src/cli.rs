use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ewaste_core::filter::{FacetSelection, FilterCriteria};

use crate::app::Tab;

#[derive(Debug, Parser)]
#[command(name = "ewaste-tui")]
#[command(about = "Find e-waste collection centers from the terminal")]
#[command(version)]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Write logs to this file (the interactive UI logs nowhere otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Screen shown at startup
    #[arg(long, value_enum, default_value_t = Tab::Map)]
    pub tab: Tab,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the centers matching a filter and exit
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Free-text query over name, address, services and items
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Service label, matched as a substring (repeatable)
    #[arg(short = 's', long = "service", value_name = "LABEL")]
    pub services: Vec<String>,

    /// Accepted item label, matched exactly (repeatable)
    #[arg(short = 'i', long = "item", value_name = "LABEL")]
    pub items: Vec<String>,

    /// Print JSON instead of text cards
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub(crate) fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone(),
            services: FacetSelection::from_labels(self.services.iter().cloned()),
            items: FacetSelection::from_labels(self.items.iter().cloned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_map_tab() {
        let cli = Cli::try_parse_from(["ewaste-tui"]).expect("no arguments");
        assert_eq!(cli.tab, Tab::Map, "default tab");
        assert!(cli.command.is_none(), "interactive mode");
        assert!(!cli.debug, "debug off");
    }

    #[test]
    fn parses_initial_tab_and_logging() {
        let cli = Cli::try_parse_from([
            "ewaste-tui",
            "--tab",
            "awareness",
            "--debug",
            "--log-file",
            "/tmp/ewaste.log",
        ])
        .expect("valid flags");
        assert_eq!(cli.tab, Tab::Awareness, "tab");
        assert!(cli.debug, "debug");
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/ewaste.log")), "log file");
    }

    #[test]
    fn search_flags_build_criteria() {
        let cli = Cli::try_parse_from([
            "ewaste-tui",
            "search",
            "-q",
            "tech",
            "--service",
            "Recycling",
            "-s",
            "Recycling",
            "--item",
            "Laptops",
            "--json",
        ])
        .expect("valid search");
        let Some(Command::Search(args)) = cli.command else {
            panic!("expected search subcommand");
        };
        assert!(args.json, "json output");
        let criteria = args.criteria();
        assert_eq!(criteria.query, "tech", "query");
        assert_eq!(criteria.services.len(), 1, "duplicate service collapsed");
        assert!(criteria.items.contains("Laptops"), "item");
    }

    #[test]
    fn rejects_unknown_tab() {
        assert!(
            Cli::try_parse_from(["ewaste-tui", "--tab", "settings"]).is_err(),
            "unknown tab"
        );
    }
}
