//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use strata_core::prelude::ComponentKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Component and stack layout for terraform and helmfile",
    long_about = "Strata resolves where a component's working directory, varfile and \
                  planfile live for a given stack, and cleans up the artifacts \
                  terraform leaves behind.",
    after_help = "EXAMPLES:\n\
        \x20 strata terraform paths vpc -s tenant1/ue2/prod\n\
        \x20 strata terraform clean infra/vpc -s tenant1/ue2/prod\n\
        \x20 strata terraform clean --everything --force\n\
        \x20 strata components --kind terraform --prefix infra\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Terraform component operations.
    #[command(
        visible_alias = "tf",
        about = "Terraform component paths and cleanup",
        subcommand
    )]
    Terraform(TerraformCommands),

    /// Helmfile component operations.
    #[command(
        visible_alias = "helm",
        about = "Helmfile component paths",
        subcommand
    )]
    Helmfile(HelmfileCommands),

    /// List component folders under a base directory.
    #[command(
        visible_alias = "ls",
        about = "List component folders",
        after_help = "EXAMPLES:\n\
            \x20 strata components\n\
            \x20 strata components --kind helmfile\n\
            \x20 strata components --prefix infra"
    )]
    Components(ComponentsArgs),

    /// Manage the Strata configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config show\n\
            \x20 strata config path\n\
            \x20 strata config init --force"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),
}

// ── terraform / helmfile ──────────────────────────────────────────────────────

/// Subcommands for `strata terraform`.
#[derive(Debug, Subcommand)]
pub enum TerraformCommands {
    /// Print the working dir, varfile and planfile of a component in a stack.
    #[command(after_help = "EXAMPLES:\n\
        \x20 strata terraform paths vpc -s tenant1/ue2/prod\n\
        \x20 strata terraform paths infra/vpc -s prod --base-component vpc-base")]
    Paths(PathsArgs),

    /// Delete generated terraform artifacts.
    #[command(after_help = "EXAMPLES:\n\
        \x20 strata terraform clean vpc -s tenant1/ue2/prod\n\
        \x20 strata terraform clean vpc --everything\n\
        \x20 strata terraform clean --everything --skip-lock-file --force")]
    Clean(CleanArgs),
}

/// Subcommands for `strata helmfile`.
#[derive(Debug, Subcommand)]
pub enum HelmfileCommands {
    /// Print the working dir and varfile of a component in a stack.
    Paths(PathsArgs),
}

/// A component addressed within a stack.
#[derive(Debug, Args)]
pub struct PathsArgs {
    /// Component, optionally nested in folders (`infra/vpc`).
    #[arg(value_name = "COMPONENT")]
    pub component: String,

    /// Stack name (`tenant1/ue2/prod` or `tenant1-ue2-prod`).
    #[arg(short = 's', long = "stack", value_name = "STACK")]
    pub stack: String,

    /// Base component the working directory is taken from.
    #[arg(long = "base-component", value_name = "COMPONENT")]
    pub base_component: Option<String>,
}

/// Arguments for `strata terraform clean`.
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Component to clean; with `--everything`, a folder name prefix.
    #[arg(value_name = "COMPONENT")]
    pub component: Option<String>,

    /// Stack whose varfile and planfile are removed.
    #[arg(short = 's', long = "stack", value_name = "STACK")]
    pub stack: Option<String>,

    /// Base component the working directory is taken from.
    #[arg(long = "base-component", value_name = "COMPONENT", requires = "stack")]
    pub base_component: Option<String>,

    /// Clean every component folder instead of one stack's artifacts.
    #[arg(long = "everything", conflicts_with = "stack")]
    pub everything: bool,

    /// Keep `.terraform.lock.hcl`.
    #[arg(long = "skip-lock-file")]
    pub skip_lock_file: bool,

    /// Delete without asking for confirmation.
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

// ── components ────────────────────────────────────────────────────────────────

/// Arguments for `strata components`.
#[derive(Debug, Args)]
pub struct ComponentsArgs {
    /// Which component base directory to search.
    #[arg(
        short = 'k',
        long = "kind",
        value_enum,
        default_value = "terraform",
        help = "Component kind"
    )]
    pub kind: KindArg,

    /// Only folders whose name starts with this prefix.
    #[arg(short = 'p', long = "prefix", default_value = "", hide_default_value = true)]
    pub prefix: String,
}

/// Component kind as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    /// Also accepted as `tf`.
    #[value(alias = "tf")]
    Terraform,
    /// Also accepted as `helm`.
    #[value(alias = "helm")]
    Helmfile,
}

impl From<KindArg> for ComponentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Terraform => ComponentKind::Terraform,
            KindArg::Helmfile => ComponentKind::Helmfile,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Print the path to the global configuration file.
    Path,
    /// Write a configuration file with the default values.
    Init(ConfigInitArgs),
}

/// Arguments for `strata config init`.
#[derive(Debug, Args)]
pub struct ConfigInitArgs {
    /// Write to the global config location instead of `./strata.toml`.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
