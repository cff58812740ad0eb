//! Configuration management for the Eco CLI.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::keychain;
use crate::core::llm::{AnthropicProvider, LlmProvider, OpenAiProvider};
use crate::core::tip::{EcoTipProvider, FallbackTipProvider, LlmTipProvider, OfflineTips};

/// Provider API type.
///
/// Determines which API format to use for communication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderApiType {
    /// Anthropic Messages API
    Anthropic,
    /// `OpenAI` Chat Completions API (also used by compatible providers)
    #[default]
    OpenAi,
}

/// Individual provider configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(rename = "type", default)]
    pub api_type: ProviderApiType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TUI configuration.
    pub tui: TuiConfig,

    /// Tip provider configuration.
    pub tips: TipsConfig,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// Loads global config first, then merges project-local config if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        if let Ok(project_path) = Self::project_config_path() {
            if project_path.exists() {
                let project_config = Self::load_from(&project_path)?;
                config.merge(project_config);
            }
        }

        Ok(config)
    }

    /// Load a single configuration file, falling back to defaults if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get the project-local configuration file path.
    ///
    /// Looks for `.eco/config.toml` in the current directory.
    pub fn project_config_path() -> anyhow::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(cwd.join(".eco").join("config.toml"))
    }

    /// Merge another config into this one (project overrides global).
    fn merge(&mut self, other: Self) {
        let tui_defaults = TuiConfig::default();
        if other.tui.start_view != tui_defaults.start_view {
            self.tui.start_view = other.tui.start_view;
        }
        if other.tui.reveal_delay_ms != tui_defaults.reveal_delay_ms {
            self.tui.reveal_delay_ms = other.tui.reveal_delay_ms;
        }
        if other.tui.tips != tui_defaults.tips {
            self.tui.tips = other.tui.tips;
        }
        if other.tui.mouse != tui_defaults.mouse {
            self.tui.mouse = other.tui.mouse;
        }

        let tips_defaults = TipsConfig::default();
        if other.tips.provider != tips_defaults.provider {
            self.tips.provider = other.tips.provider;
        }
        if other.tips.model != tips_defaults.model {
            self.tips.model = other.tips.model;
        }
        if other.tips.max_tokens != tips_defaults.max_tokens {
            self.tips.max_tokens = other.tips.max_tokens;
        }
        if other.tips.offline_fallback != tips_defaults.offline_fallback {
            self.tips.offline_fallback = other.tips.offline_fallback;
        }
        for (name, provider) in other.tips.providers {
            if tips_defaults.providers.get(&name) != Some(&provider) {
                self.tips.providers.insert(name, provider);
            }
        }
    }

    /// Get the configuration file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the config directory path (`~/.config/eco/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config_home).join("eco"));
        }

        if cfg!(target_os = "macos") {
            if let Ok(home) = std::env::var("HOME") {
                return Ok(PathBuf::from(home).join(".config").join("eco"));
            }
        }

        let base = directories::BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

        Ok(base.config_dir().join("eco"))
    }

    /// Save a provider configuration to the config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_provider(name: &str, config: &ProviderConfig) -> anyhow::Result<()> {
        Self::save_provider_to_path(name, config, &Self::config_path()?)
    }

    /// Write `[tips.providers.<name>]` into the file at `path`, keeping everything else.
    pub fn save_provider_to_path(
        name: &str,
        config: &ProviderConfig,
        path: &Path,
    ) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut config_value = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<toml::Value>(&contents)?
        } else {
            toml::Value::Table(toml::map::Map::new())
        };

        let config_table = config_value
            .as_table_mut()
            .ok_or_else(|| anyhow::anyhow!("config root must be a table"))?;

        let tips_table = config_table
            .entry("tips")
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()))
            .as_table_mut()
            .ok_or_else(|| anyhow::anyhow!("tips section must be a table"))?;

        let providers_table = tips_table
            .entry("providers")
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()))
            .as_table_mut()
            .ok_or_else(|| anyhow::anyhow!("providers section must be a table"))?;

        let provider_value = toml::Value::try_from(config)?;
        providers_table.insert(name.to_string(), provider_value);

        let toml_string = toml::to_string_pretty(&config_value)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

/// TUI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Enable mouse support.
    pub mouse: bool,

    /// Fetch and show the eco tip toast.
    pub tips: bool,

    /// Delay between the tip arriving and the toast appearing.
    pub reveal_delay_ms: u64,

    /// View to open on start (`home`, `dashboard`, `ai-consultant`, ...).
    pub start_view: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            tips: true,
            reveal_delay_ms: 2000,
            start_view: "home".to_string(),
        }
    }
}

impl TuiConfig {
    /// Reveal delay as a [`Duration`].
    #[must_use]
    pub const fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// Tip provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TipsConfig {
    /// Active provider name (key in providers table).
    pub provider: String,

    /// Model to use.
    pub model: String,

    /// Maximum tokens in the response.
    pub max_tokens: u32,

    /// Use a built-in tip when the provider is missing or fails.
    pub offline_fallback: bool,

    /// Provider definitions. File entries are layered over the built-in ones.
    #[serde(
        default = "TipsConfig::default_providers",
        deserialize_with = "TipsConfig::deserialize_providers"
    )]
    pub providers: HashMap<String, ProviderConfig>,
}

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            provider: "google".to_string(),
            model: "gemini-2.0-flash".to_string(),
            max_tokens: 100,
            offline_fallback: true,
            providers: Self::default_providers(),
        }
    }
}

impl TipsConfig {
    /// Get the default provider configurations.
    fn default_providers() -> HashMap<String, ProviderConfig> {
        let mut providers = HashMap::new();

        providers.insert(
            "google".to_string(),
            ProviderConfig {
                api_type: ProviderApiType::OpenAi,
                base_url: Some("https://generativelanguage.googleapis.com/v1beta/openai".to_string()),
                api_key_env: Some("GEMINI_API_KEY".to_string()),
            },
        );

        providers.insert(
            "anthropic".to_string(),
            ProviderConfig {
                api_type: ProviderApiType::Anthropic,
                base_url: None,
                api_key_env: Some("ANTHROPIC_API_KEY".to_string()),
            },
        );

        providers.insert(
            "openai".to_string(),
            ProviderConfig {
                api_type: ProviderApiType::OpenAi,
                base_url: None,
                api_key_env: Some("OPENAI_API_KEY".to_string()),
            },
        );

        providers.insert(
            "groq".to_string(),
            ProviderConfig {
                api_type: ProviderApiType::OpenAi,
                base_url: Some("https://api.groq.com/openai/v1".to_string()),
                api_key_env: Some("GROQ_API_KEY".to_string()),
            },
        );

        providers.insert(
            "ollama".to_string(),
            ProviderConfig {
                api_type: ProviderApiType::OpenAi,
                base_url: Some("http://localhost:11434/v1".to_string()),
                api_key_env: None,
            },
        );

        providers
    }

    fn deserialize_providers<'de, D>(
        deserializer: D,
    ) -> Result<HashMap<String, ProviderConfig>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let declared = HashMap::<String, ProviderConfig>::deserialize(deserializer)?;
        let mut providers = Self::default_providers();
        providers.extend(declared);
        Ok(providers)
    }

    /// Names of the built-in providers, sorted.
    #[must_use]
    pub fn known_providers() -> Vec<String> {
        let mut names: Vec<String> = Self::default_providers().into_keys().collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn resolve_api_key(provider_name: &str, config: &ProviderConfig) -> Option<String> {
        // Environment first, so development builds never hit a keychain prompt
        if let Some(env_name) = &config.api_key_env {
            if let Ok(key) = std::env::var(env_name) {
                if !key.is_empty() {
                    return Some(key);
                }
            }
        }

        keychain::get_api_key(provider_name)
    }

    /// Create the configured LLM provider.
    ///
    /// # Errors
    ///
    /// Returns error if the provider is unknown or required API key is missing.
    pub fn create_llm_provider(&self) -> anyhow::Result<Box<dyn LlmProvider>> {
        let name = &self.provider;
        let config = self.providers.get(name).ok_or_else(|| {
            anyhow::anyhow!("unknown provider '{name}', check [tips.providers] config")
        })?;

        let api_key = Self::resolve_api_key(name, config);

        match config.api_type {
            ProviderApiType::Anthropic => {
                let key = api_key.ok_or_else(|| {
                    anyhow::anyhow!(
                        "No API key configured for provider '{name}'.\n\n\
                         Run `eco auth login` to configure your credentials."
                    )
                })?;
                Ok(Box::new(AnthropicProvider::new(key)?))
            }
            ProviderApiType::OpenAi => {
                if api_key.is_none() && config.api_key_env.is_some() {
                    anyhow::bail!(
                        "No API key configured for provider '{name}'.\n\n\
                         Run `eco auth login` to configure your credentials."
                    );
                }
                Ok(Box::new(OpenAiProvider::with_config(
                    api_key,
                    config.base_url.clone(),
                )?))
            }
        }
    }

    /// Build the tip provider chain.
    ///
    /// With `offline_fallback`, a missing or failing LLM provider degrades to the
    /// built-in tips instead of an error.
    ///
    /// # Errors
    ///
    /// Returns error if no LLM provider can be created and the fallback is disabled.
    pub fn create_tip_provider(&self) -> anyhow::Result<Box<dyn EcoTipProvider>> {
        match self.create_llm_provider() {
            Ok(llm) => {
                let tips: Box<dyn EcoTipProvider> =
                    Box::new(LlmTipProvider::new(llm, &self.model, self.max_tokens));
                if self.offline_fallback {
                    Ok(Box::new(FallbackTipProvider::new(tips, Box::new(OfflineTips))))
                } else {
                    Ok(tips)
                }
            }
            Err(e) if self.offline_fallback => {
                tracing::info!("using offline tips: {e}");
                Ok(Box::new(OfflineTips))
            }
            Err(e) => Err(e),
        }
    }
}
