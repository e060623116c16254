//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{validate_config, Config, MediaNaming};
use crate::error::Result;

/// Mastodon account backup CLI.
#[derive(Parser, Debug)]
#[command(
    name = "mastodon-backup",
    version,
    about = "Back up a Mastodon account to a local directory",
    long_about = "Exports statuses, followers, following, lists, mutes, blocks, domain blocks,\n\
                  bookmarks and media attachments of the authenticated account.\n\n\
                  Each category is backed up independently: one failing category does not\n\
                  stop the others."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    pub config: PathBuf,

    /// Only back up the most recent N statuses (skips full pagination).
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Root directory for backups.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Access token, overriding the configuration file.
    #[arg(long, env = "MASTODON_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Name attachments after their real type instead of always using ".jpg".
    #[arg(long)]
    pub typed_media_names: bool,

    /// Don't download media attachments.
    #[arg(long)]
    pub no_media: bool,

    /// Hide spinners and progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Load the config file, apply CLI overrides and validate the result.
    ///
    /// Runs before anything touches the network or the output directory.
    pub fn load_config(self) -> Result<Config> {
        let mut config = Config::load(&self.config)?;
        self.merge_into_config(&mut config);
        validate_config(&config)?;
        Ok(config)
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(token) = self.token {
            config.mastodon.access_token = token;
        }

        if let Some(limit) = self.limit {
            config.options.status_limit = Some(limit);
        }

        if let Some(dir) = self.output {
            config.options.output_directory = Some(dir);
        }

        // Boolean flags (only override if set to non-default)
        if self.typed_media_names {
            config.options.media_names = MediaNaming::Typed;
        }

        if self.no_media {
            config.options.download_media = false;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn args_for(config: PathBuf, output: PathBuf) -> Args {
        Args {
            config,
            limit: None,
            output: Some(output),
            token: None,
            typed_media_names: false,
            no_media: false,
            quiet: true,
            debug: false,
        }
    }

    #[test]
    fn test_config_is_required() {
        assert!(Args::try_parse_from(["mastodon-backup"]).is_err());
        assert!(Args::try_parse_from(["mastodon-backup", "-c", "config.toml"]).is_ok());
    }

    #[test]
    fn test_merge_overrides() {
        let args = Args::try_parse_from([
            "mastodon-backup",
            "--config",
            "config.toml",
            "--limit",
            "25",
            "-o",
            "/backups",
            "--typed-media-names",
            "--no-media",
            "-q",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.options.status_limit, Some(25));
        assert_eq!(config.output_directory(), PathBuf::from("/backups"));
        assert_eq!(config.options.media_names, MediaNaming::Typed);
        assert!(!config.options.download_media);
        assert!(!config.options.show_progress);
    }

    #[test]
    fn test_merge_keeps_file_values() {
        let args = Args::try_parse_from(["mastodon-backup", "-c", "config.toml"]).unwrap();

        let mut config = Config::default();
        config.options.status_limit = Some(7);
        config.mastodon.access_token = "from-file".to_string();
        // The environment may carry a token; only assert when it does not.
        let env_token = args.token.clone();
        args.merge_into_config(&mut config);

        assert_eq!(config.options.status_limit, Some(7));
        assert!(config.options.download_media);
        if env_token.is_none() {
            assert_eq!(config.mastodon.access_token, "from-file");
        }
    }

    #[test]
    fn test_missing_token_fails_before_output_is_created() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[mastodon]\napi_base_url = \"https://m.example\"\n",
        )
        .unwrap();
        let output = temp.path().join("out");

        let err = args_for(config_path, output.clone())
            .load_config()
            .unwrap_err();

        assert!(matches!(err, Error::MissingConfig(ref key) if key == "mastodon.access_token"));
        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_cli_token_completes_config() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[mastodon]\napi_base_url = \"https://m.example\"\n",
        )
        .unwrap();

        let mut args = args_for(config_path, temp.path().join("out"));
        args.token = Some("secret-token".to_string());
        let config = args.load_config().unwrap();

        assert_eq!(config.mastodon.access_token, "secret-token");
        assert!(!config.options.show_progress);
    }
}
