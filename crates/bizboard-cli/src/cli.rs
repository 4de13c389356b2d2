//! Command-line definitions.

use clap::{Parser, Subcommand};

/// Bizboard - dashboards and records from the terminal
#[derive(Parser, Debug)]
#[command(name = "bizboard", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Backend origin, overriding the config file and BIZBOARD_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token, used instead of the stored one
    #[arg(long, env = "BIZBOARD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load widgets and print them
    Dashboard {
        /// Widget id to include; repeatable. Default: all widgets
        #[arg(short, long = "widget", value_name = "ID")]
        widgets: Vec<String>,

        /// Print panels as JSON
        #[arg(long)]
        json: bool,
    },

    /// List records of a resource as JSON
    List {
        /// Resource path, e.g. `companies` or `time-entries`
        resource: String,

        /// Records to skip
        #[arg(long, default_value_t = 0)]
        skip: u32,

        /// Maximum records to return
        #[arg(long, default_value_t = bizboard_core::query::DEFAULT_LIMIT)]
        limit: u32,

        /// Filter as KEY=VALUE; repeatable
        #[arg(short, long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,
    },

    /// Watch unread notifications
    Notifications {
        /// Seconds between polls
        #[arg(long, default_value_t = 30)]
        interval: u64,

        /// Poll once and exit
        #[arg(long)]
        once: bool,
    },

    /// Store an API token for later commands
    Login {
        /// Token to store
        #[arg(long)]
        token: String,
    },

    /// Remove the stored API token
    Logout,

    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_widgets_repeat() {
        let cli = Cli::try_parse_from([
            "bizboard",
            "dashboard",
            "--widget",
            "win-rate",
            "-w",
            "api-keys",
            "--json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Dashboard {
                widgets: vec!["win-rate".into(), "api-keys".into()],
                json: true,
            }
        );
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["bizboard", "list", "companies", "-f", "industry=retail"]).unwrap();
        let Command::List {
            resource,
            skip,
            limit,
            filters,
        } = cli.command
        else {
            panic!("expected list");
        };
        assert_eq!(resource, "companies");
        assert_eq!((skip, limit), (0, 100));
        assert_eq!(filters, vec!["industry=retail"]);
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["bizboard", "config", "show", "--config", "/tmp/b.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("/tmp/b.toml"));
        assert_eq!(cli.command, Command::Config { action: ConfigAction::Show });
    }

    #[test]
    fn test_login_requires_token() {
        assert!(Cli::try_parse_from(["bizboard", "login"]).is_err());
    }
}
