//! postdeck - Entry Point

use clap::Parser;
use postdeck::client::{
    CollectionApi, HttpCollectionClient, HttpRecipeClient, MemoryCollection, MemoryRecipes,
    RecipeApi,
};
use postdeck::config::{self, CliOverrides};
use postdeck::session::{AuthProvider, ConfiguredUser};
use postdeck::AppError;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

/// postdeck - terminal dashboard for a remote posts collection
#[derive(Parser, Debug)]
#[command(name = "postdeck")]
#[command(version)]
#[command(about = "Browse, search and edit a remote posts collection from the terminal")]
pub struct Args {
    /// Base URL of the posts collection
    #[arg(long)]
    pub api_url: Option<String>,

    /// Rows per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Email of the signed-in user
    #[arg(short, long)]
    pub user: Option<String>,

    /// Use a built-in demo collection instead of the network
    #[arg(long)]
    pub offline: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.api_url.clone(),
            page_size: self.page_size.map(|n| n as usize),
            user_email: self.user.clone(),
            no_color: self.no_color,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "exiting with error");
            eprintln!("postdeck: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.overrides())
    };
    config.validate()?;

    postdeck::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    // No user, no dashboard.
    let user = ConfiguredUser::new(config.user_email.clone()).current_user()?;
    info!(user = %user, offline = args.offline, "starting dashboard");

    let (posts, recipes): (Arc<dyn CollectionApi>, Arc<dyn RecipeApi>) = if args.offline {
        (
            Arc::new(MemoryCollection::seeded()),
            Arc::new(MemoryRecipes::seeded()),
        )
    } else {
        let timeout = config.request_timeout();
        (
            Arc::new(HttpCollectionClient::new(
                &config.api_url,
                config.user_id,
                timeout,
            )?),
            Arc::new(HttpRecipeClient::new(&config.recipes_url, timeout)?),
        )
    };

    postdeck::view::run(&config, user, posts, recipes, args.search.as_deref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let err = Args::try_parse_from(["postdeck", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let err = Args::try_parse_from(["postdeck", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["postdeck"]);
        assert_eq!(args.api_url, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.search, None);
        assert_eq!(args.user, None);
        assert!(!args.offline);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "postdeck",
            "--api-url",
            "http://localhost:9000/posts",
            "--page-size",
            "25",
            "--search",
            "love",
            "--user",
            "ada@example.com",
            "--offline",
            "--no-color",
            "--config",
            "/tmp/postdeck.toml",
        ]);
        assert_eq!(args.search.as_deref(), Some("love"));
        assert!(args.offline);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/postdeck.toml")));

        let overrides = args.overrides();
        assert_eq!(overrides.api_url.as_deref(), Some("http://localhost:9000/posts"));
        assert_eq!(overrides.page_size, Some(25));
        assert_eq!(overrides.user_email.as_deref(), Some("ada@example.com"));
        assert!(overrides.no_color);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["postdeck", "-s", "love", "-u", "ada@example.com"]);
        assert_eq!(args.search.as_deref(), Some("love"));
        assert_eq!(args.user.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_page_size_zero_rejected() {
        let result = Args::try_parse_from(["postdeck", "--page-size", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_size_not_a_number_rejected() {
        let result = Args::try_parse_from(["postdeck", "--page-size", "many"]);
        assert!(result.is_err());
    }
}
