//! Clap derive structures for the `gridflow` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// gridflow -- explore energy systems models and data
#[derive(Debug, Parser)]
#[command(
    name = "gridflow",
    version,
    about = "Explore energy systems models and data from the command line",
    long_about = "Query the Gridflow platform: nodes, assets, systems models,\n\
        scenarios, runs, technologies, and published data sources.\n\n\
        Authenticate once with `gridflow auth login`; the token is stored\n\
        locally and refreshed automatically.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Platform API URL (overrides configuration)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Token file location (overrides configuration)
    #[arg(long, global = true)]
    pub token_path: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "GRIDFLOW_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in, log out, and inspect authentication state
    Auth(AuthArgs),

    /// Look up nodes (countries, regions, physical assets)
    #[command(alias = "node")]
    Nodes(NodesArgs),

    /// Look up asset nodes and their properties
    #[command(alias = "asset")]
    Assets(AssetsArgs),

    /// Manage systems models
    #[command(alias = "model", alias = "m")]
    Models(ModelsArgs),

    /// Manage model scenarios
    #[command(alias = "scenario", alias = "sc")]
    Scenarios(ScenariosArgs),

    /// Manage runs (solved scenario instances)
    #[command(alias = "run", alias = "r")]
    Runs(RunsArgs),

    /// Browse the technology hierarchy
    #[command(alias = "tech")]
    Technologies(TechnologiesArgs),

    /// Browse data publishers
    Publishers(PublishersArgs),

    /// Browse published data sources
    Sources(SourcesArgs),

    /// Query historical and projected data records
    Records(RecordsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared pagination arguments for all search commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Max results per page
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: u32,

    /// Zero-based page index
    #[arg(long, default_value = "0")]
    pub page: u32,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Log in via the OAuth device flow
    Login,

    /// Remove the stored token
    Logout,

    /// Show the current authentication state
    Status,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  NODES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct NodesArgs {
    #[command(subcommand)]
    pub command: NodesCommand,
}

#[derive(Debug, Subcommand)]
pub enum NodesCommand {
    /// Get one or more nodes by id
    Get {
        /// Node ids, e.g. DEU or IDN-JW
        #[arg(required = true)]
        ids: Vec<String>,

        /// List the node's direct children instead
        #[arg(long)]
        children: bool,

        /// List the node's direct parents instead
        #[arg(long, conflicts_with = "children")]
        parents: bool,
    },

    /// Fuzzy-search nodes by alias
    Search {
        /// Alias to search for, e.g. "germany"
        alias: String,

        /// Restrict to a node type
        #[arg(long)]
        node_type: Option<String>,

        /// Minimum match confidence (0.0 - 1.0)
        #[arg(long, default_value = "0.8")]
        threshold: f64,

        #[command(flatten)]
        list: ListArgs,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ASSETS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AssetsArgs {
    #[command(subcommand)]
    pub command: AssetsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AssetsCommand {
    /// Get one or more assets by id
    Get {
        /// Asset ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Search assets
    Search {
        /// Alias to search for
        #[arg(long)]
        alias: Option<String>,

        /// Restrict to assets under these nodes
        #[arg(long = "node-id")]
        node_ids: Vec<String>,

        /// Filter by sector, e.g. power
        #[arg(long)]
        sector: Option<String>,

        /// Filter by technology slug
        #[arg(long)]
        technology: Option<String>,

        /// Filter by operating status
        #[arg(long)]
        operating_status: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MODELS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub command: ModelsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ModelsCommand {
    /// Get a model by its {owner}:{slug} id
    Get {
        /// Compound id, e.g. transition-team:global-power
        fullslug: String,

        /// List the model's scenarios instead
        #[arg(long)]
        scenarios: bool,
    },

    /// Search models
    Search {
        /// Filter by owner
        #[arg(long)]
        owner: Option<String>,

        /// Filter by slug
        #[arg(long)]
        slug: Option<String>,

        /// Only featured models
        #[arg(long)]
        featured: Option<bool>,

        /// Only public models
        #[arg(long)]
        public: Option<bool>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Create a model owned by the logged-in user
    Create {
        /// Model slug
        slug: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,

        /// Make the model publicly visible
        #[arg(long)]
        public: bool,
    },

    /// Delete a model by its {owner}:{slug} id
    Delete {
        /// Compound id, e.g. transition-team:global-power
        fullslug: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SCENARIOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ScenariosArgs {
    #[command(subcommand)]
    pub command: ScenariosCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScenariosCommand {
    /// Get a scenario by its {owner}:{model}:{scenario} id
    Get {
        /// Compound id, e.g. transition-team:global-power:net-zero
        fullslug: String,

        /// List the scenario's runs instead
        #[arg(long)]
        runs: bool,
    },

    /// Search scenarios
    Search {
        /// Filter by owner
        #[arg(long)]
        owner: Option<String>,

        /// Filter by model slug
        #[arg(long)]
        model: Option<String>,

        /// Filter by scenario slug
        #[arg(long)]
        slug: Option<String>,

        /// Only featured scenarios
        #[arg(long)]
        featured: Option<bool>,

        /// Only public scenarios
        #[arg(long)]
        public: Option<bool>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Create a scenario under one of your models
    Create {
        /// Scenario slug
        slug: String,

        /// Parent model slug
        #[arg(long)]
        model: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,

        /// Make the scenario publicly visible
        #[arg(long)]
        public: bool,
    },

    /// Delete a scenario by its {owner}:{model}:{scenario} id
    Delete {
        /// Compound id
        fullslug: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  RUNS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RunsArgs {
    #[command(subcommand)]
    pub command: RunsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RunsCommand {
    /// Get a run by its {owner}:{model}:{scenario}:{run} id
    Get {
        /// Compound id, e.g. transition-team:global-power:net-zero:baseline
        fullslug: String,
    },

    /// Search runs
    Search {
        /// Filter by owner
        #[arg(long)]
        owner: Option<String>,

        /// Filter by model slug
        #[arg(long)]
        model: Option<String>,

        /// Filter by scenario slug
        #[arg(long)]
        scenario: Option<String>,

        /// Filter by run slug
        #[arg(long)]
        slug: Option<String>,

        /// Only featured runs
        #[arg(long)]
        featured: Option<bool>,

        /// Only public runs
        #[arg(long)]
        public: Option<bool>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Create a run under one of your scenarios
    Create {
        /// Run slug
        slug: String,

        /// Parent model slug
        #[arg(long)]
        model: String,

        /// Parent scenario slug
        #[arg(long)]
        scenario: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Make the run publicly visible
        #[arg(long)]
        public: bool,
    },

    /// Delete a run by its {owner}:{model}:{scenario}:{run} id
    Delete {
        /// Compound id
        fullslug: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TECHNOLOGIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TechnologiesArgs {
    #[command(subcommand)]
    pub command: TechnologiesCommand,
}

#[derive(Debug, Subcommand)]
pub enum TechnologiesCommand {
    /// Get a technology by slug
    Get {
        /// Technology slug, e.g. coal
        slug: String,

        /// List child technologies instead
        #[arg(long)]
        children: bool,

        /// List parent technologies instead
        #[arg(long, conflicts_with = "children")]
        parents: bool,
    },

    /// Search technologies
    Search {
        /// Filter by slug
        #[arg(long)]
        slug: Option<String>,

        /// Filter by display name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PUBLISHERS & SOURCES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PublishersArgs {
    #[command(subcommand)]
    pub command: PublishersCommand,
}

#[derive(Debug, Subcommand)]
pub enum PublishersCommand {
    /// Get a publisher by slug
    Get {
        /// Publisher slug, e.g. global-energy-watch
        slug: String,

        /// List the publisher's sources instead
        #[arg(long)]
        sources: bool,
    },

    /// Search publishers by name
    Search {
        /// Name fragment to search for
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Debug, Args)]
pub struct SourcesArgs {
    #[command(subcommand)]
    pub command: SourcesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SourcesCommand {
    /// Get a source by its {publisher}:{source} id
    Get {
        /// Compound id, e.g. global-energy-watch:coal-tracker-2024
        fullslug: String,
    },

    /// Search sources
    Search {
        /// Filter by publisher slug
        #[arg(long)]
        publisher: Option<String>,

        /// Filter by source slug
        #[arg(long)]
        slug: Option<String>,

        /// Filter by release year
        #[arg(long)]
        year: Option<i32>,

        #[command(flatten)]
        list: ListArgs,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  RECORDS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RecordsArgs {
    #[command(subcommand)]
    pub command: RecordsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RecordsCommand {
    /// Search data records
    Search {
        /// Filter by node id
        #[arg(long)]
        node_id: Option<String>,

        /// Filter by record type, e.g. generation
        #[arg(long)]
        record_type: Option<String>,

        /// Filter by technology slug
        #[arg(long)]
        technology: Option<String>,

        /// Filter by source {publisher}:{source} id
        #[arg(long)]
        source: Option<String>,

        /// Earliest valid timestamp (RFC 3339)
        #[arg(long)]
        start: Option<String>,

        /// Latest valid timestamp (RFC 3339)
        #[arg(long)]
        end: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },
}
