use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "erp-admin")]
#[command(about = "Command line client for the ERP back-office API")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// API base URL (overrides ERP_ADMIN_URL and the config file)
    #[arg(long)]
    pub url: Option<String>,

    /// Bearer token for the API
    #[arg(long, env = "ERP_ADMIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Company to act on, sent as the x-company-id header
    #[arg(long, env = "ERP_ADMIN_COMPANY")]
    pub company: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    Organizations {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Companies {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Users {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Clients {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Suppliers {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Products {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Taxes {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Currencies {
        #[command(subcommand)]
        action: ResourceAction,
    },
    PaymentMethods {
        #[command(subcommand)]
        action: ResourceAction,
    },
    PaymentTerms {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Warehouses {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Zones {
        #[command(subcommand)]
        action: ResourceAction,
    },
    Visits {
        #[command(subcommand)]
        action: ResourceAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set one or more configuration values
    Set {
        #[arg(long)]
        url: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<String>,
        #[arg(long)]
        items_per_page: Option<String>,
        #[arg(long)]
        company: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// List records page by page
    List(ListArgs),
    /// Show a single record
    Get {
        id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Create a record from a JSON object
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update a record with a partial JSON object
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
    /// Pull fresh data from the upstream system
    Sync,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, default_value = "1")]
    pub page: u32,
    #[arg(long)]
    pub items_per_page: Option<u32>,
    /// asc or desc
    #[arg(long)]
    pub order: Option<String>,
    /// Filter in key=value format, repeatable
    #[arg(long, action = clap::ArgAction::Append)]
    pub filter: Vec<String>,
    /// Walk every page from --page on
    #[arg(long)]
    pub all: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}
