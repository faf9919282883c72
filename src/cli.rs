//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// xpt - minimal package-fetching client
///
/// Aggregates tagged repository manifests into a local index and installs
/// packages from it.
#[derive(Parser, Debug)]
#[command(
    name = "xpt",
    author,
    version,
    arg_required_else_help = true,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Minimal package-fetching client",
    long_about = "xpt is a minimal package-fetching client. It reads the repositories listed in <root>/etc/xpt/sources.txt, merges their \
                  per-tag package manifests into <root>/var/xpt/update.txt and installs \
                  packages from that index into a local cache directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  xpt update\n    \
                  xpt install tool\n    \
                  xpt install tool lib @ beta\n    \
                  xpt list --tag beta\n    \
                  xpt cache"
)]
pub struct Cli {
    /// Installation root (defaults to two directories above the binary's directory)
    #[arg(long, global = true, env = "XPT_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download repository manifests and rebuild the package database
    Update,

    /// Install packages from the package database
    Install(InstallArgs),

    /// List packages in the package database
    List(ListArgs),

    /// Show cache location and contents
    Cache,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install from untagged repositories:\n    xpt install tool\n\n\
                   Install several packages from the beta tag:\n    xpt install tool lib @ beta")]
pub struct InstallArgs {
    /// Package names, optionally followed by '@ <tag>'
    #[arg(required = true, num_args = 1.., value_name = "NAME")]
    pub packages: Vec<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every indexed package:\n    xpt list\n\n\
                  List one package across tags:\n    xpt list tool\n\n\
                  List packages of one tag:\n    xpt list --tag beta")]
pub struct ListArgs {
    /// Only show packages with this exact name
    pub name: Option<String>,

    /// Only show packages under this tag (use 'notag' for untagged repositories)
    #[arg(long, short = 't')]
    pub tag: Option<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    xpt completions --shell bash > ~/.bash_completion.d/xpt\n\n\
                  Generate zsh completions:\n    xpt completions --shell zsh > ~/.zfunc/_xpt")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}
