use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokcount_core::{EXAMPLE_TEXT, PricingTable};

/// Configuration for tokcount (config.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Model selected on startup (defaults to the first model in the table)
    #[serde(default)]
    pub default_model: Option<String>,

    /// Replaces the built-in "Show Example" text
    #[serde(default)]
    pub example_text: Option<String>,

    /// Price overrides in USD per 1000 tokens; new names are appended to the model list
    #[serde(default)]
    pub pricing: BTreeMap<String, f64>,

    #[serde(default)]
    pub web: WebConfig,

    #[serde(default)]
    pub page: PageMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Metadata injected into the web page head
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,

    /// Canonical URL of the page
    #[serde(default = "default_url")]
    pub url: String,

    /// Social preview image
    #[serde(default = "default_image_url")]
    pub image_url: String,

    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_twitter_handle")]
    pub twitter_handle: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            url: default_url(),
            image_url: default_image_url(),
            site_name: default_site_name(),
            twitter_handle: default_twitter_handle(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    17374
}

fn default_title() -> String {
    "TokenCounter | Tokenize and estimate your LLM costs".to_string()
}

fn default_description() -> String {
    "TokenCounter provides an easy-to-use interface to tokenize your text and estimate your \
     Large Language Model (LLM) costs. Understand how GPT models process your text into tokens \
     and improve your usage efficiency."
        .to_string()
}

fn default_url() -> String {
    "https://www.tokencounter.io".to_string()
}

fn default_image_url() -> String {
    "/ogg.png".to_string()
}

fn default_site_name() -> String {
    "TokenCounter".to_string()
}

fn default_twitter_handle() -> String {
    "@thecalebf".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            config.save_to(&path)?;
            tracing::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Load config from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "tokcount", "tokcount") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.tokcount/config.toml")
        }
    }

    /// Built-in prices with this config's overrides applied
    pub fn pricing_table(&self) -> anyhow::Result<PricingTable> {
        Ok(PricingTable::default().with_overrides(&self.pricing)?)
    }

    pub fn example_text(&self) -> &str {
        self.example_text.as_deref().unwrap_or(EXAMPLE_TEXT)
    }
}
