use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{Result, WrapErr, bail};
use passforge_core::ClientSettings;
use tracing::debug;

pub const SETTINGS_ENV: &str = "PF_SETTINGS";

/// Client settings, from a JSON settings file with individual flags layered on top.
#[derive(Args, Clone, Default)]
pub struct SettingsArgs {
    #[arg(
        long = "settings",
        global = true,
        env = SETTINGS_ENV,
        help = "Path to a JSON file with client settings."
    )]
    pub settings_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = "PF_BREACH_API_URL",
        help = "Base URL of the breach lookup service."
    )]
    pub breach_api_url: Option<String>,

    #[arg(
        long,
        global = true,
        env = "PF_USER_AGENT",
        help = "User agent sent to the breach lookup service."
    )]
    pub user_agent: Option<String>,

    #[arg(
        long,
        global = true,
        env = "PF_ADD_PADDING",
        help = "Ask the breach lookup service to pad responses with decoy entries."
    )]
    pub add_padding: bool,

    #[arg(
        long,
        global = true,
        env = "PF_TIMEOUT",
        help = "Give up on a breach lookup after this many seconds."
    )]
    pub timeout: Option<u64>,
}

impl SettingsArgs {
    pub fn to_client_settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.settings_file {
            Some(path) => {
                debug!(path = %path.display(), "Loading settings file");
                let contents = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&contents)
                    .wrap_err_with(|| format!("Invalid settings in {}", path.display()))?
            }
            None => ClientSettings::default(),
        };

        if let Some(url) = &self.breach_api_url {
            settings.breach_api_url = url.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if self.add_padding {
            settings.add_padding = true;
        }
        if self.timeout.is_some() {
            settings.timeout_secs = self.timeout;
        }

        // Header values must be visible ASCII
        if !settings
            .user_agent
            .chars()
            .all(|c| c == ' ' || c.is_ascii_graphic())
        {
            bail!("User agent must only contain printable ASCII characters");
        }

        Ok(settings)
    }
}
