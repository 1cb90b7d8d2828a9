//! 命令行接口

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "add-notebook-exercises")]
#[command(about = "Insert exercise cells into course notebooks and tidy their structure", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// 所有子命令共用的参数
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Plan and report only, never write
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Indentation width of the written notebook JSON
    #[arg(long, global = true)]
    pub indent: Option<usize>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Append a plain-text report of every change to this file
    #[arg(long, global = true)]
    pub report: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a question cell and a solution cell at the end of each catalog section
    Inject {
        /// Notebook to update
        notebook: PathBuf,
        /// TOML exercise catalog (defaults to the built-in list exercises)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        /// Write the result here instead of overwriting the notebook
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Report exercises that are followed by content inside their section
    Analyze {
        /// Notebook to inspect
        notebook: PathBuf,
    },
    /// Turn `###` and `####` markdown headings into <h3>/<h4> HTML headings
    HtmlHeadings {
        notebook: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Demote level-2 headings before the "Exercises" heading to level 3
    DemoteH2 {
        notebook: PathBuf,
        /// Level-2 heading text to leave untouched (repeatable, case-insensitive)
        #[arg(short, long)]
        keep: Vec<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Command {
    /// 子命令名称
    pub fn name(&self) -> &'static str {
        match self {
            Command::Inject { .. } => "inject",
            Command::Analyze { .. } => "analyze",
            Command::HtmlHeadings { .. } => "html-headings",
            Command::DemoteH2 { .. } => "demote-h2",
        }
    }

    pub fn notebook(&self) -> &PathBuf {
        match self {
            Command::Inject { notebook, .. }
            | Command::Analyze { notebook }
            | Command::HtmlHeadings { notebook, .. }
            | Command::DemoteH2 { notebook, .. } => notebook,
        }
    }

    pub fn output(&self) -> Option<&PathBuf> {
        match self {
            Command::Inject { output, .. }
            | Command::HtmlHeadings { output, .. }
            | Command::DemoteH2 { output, .. } => output.as_ref(),
            Command::Analyze { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inject() {
        let cli = Cli::try_parse_from([
            "add-notebook-exercises",
            "inject",
            "0501-list.ipynb",
            "--catalog",
            "lists.toml",
            "--dry-run",
        ])
        .unwrap();
        assert!(cli.global.dry_run);
        assert_eq!(cli.command.name(), "inject");
        assert_eq!(cli.command.notebook(), &PathBuf::from("0501-list.ipynb"));
        assert_eq!(
            cli.command,
            Command::Inject {
                notebook: PathBuf::from("0501-list.ipynb"),
                catalog: Some(PathBuf::from("lists.toml")),
                output: None,
            }
        );
    }

    #[test]
    fn test_parse_demote_with_keep() {
        let cli = Cli::try_parse_from([
            "add-notebook-exercises",
            "--indent",
            "2",
            "demote-h2",
            "ch06.ipynb",
            "--keep",
            "lists",
            "--keep",
            "tuples",
        ])
        .unwrap();
        assert_eq!(cli.global.indent, Some(2));
        match cli.command {
            Command::DemoteH2 { keep, output, .. } => {
                assert_eq!(keep, ["lists", "tuples"]);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_notebook_is_error() {
        assert!(Cli::try_parse_from(["add-notebook-exercises", "analyze"]).is_err());
    }
}
