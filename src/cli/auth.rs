//! `eco auth` subcommands.

use dialoguer::{Password, Select, theme::ColorfulTheme};

use crate::config::{Config, TipsConfig};
use crate::core::keychain;

use super::LoginArgs;

/// Store an API key for a tip provider and register it in the config file.
///
/// # Errors
///
/// Returns an error for unknown providers, empty keys, or keychain/config failures.
pub fn auth_login(args: LoginArgs) -> anyhow::Result<()> {
    let defaults = TipsConfig::default();
    let known = TipsConfig::known_providers();

    let provider = match args.provider {
        Some(p) => {
            validate_provider(&p, &known)?;
            p
        }
        None => prompt_provider_selection(&known)?,
    };

    let api_key = match args.api_key {
        Some(key) if key.is_empty() => anyhow::bail!("API key cannot be empty"),
        Some(key) => key,
        None => prompt_api_key(&provider)?,
    };

    keychain::store_api_key(&provider, &api_key)?;

    let provider_config = defaults
        .providers
        .get(&provider)
        .cloned()
        .unwrap_or_default();
    Config::save_provider(&provider, &provider_config)?;

    println!("Stored API key in system keychain");
    println!("Tips will use '{provider}' once it is set as [tips] provider");

    Ok(())
}

/// Remove a stored API key.
///
/// # Errors
///
/// Returns an error if the keychain entry cannot be removed.
pub fn auth_logout(provider: &str) -> anyhow::Result<()> {
    keychain::delete_api_key(provider)?;
    println!("Removed API key for '{provider}'");
    Ok(())
}

fn validate_provider(provider: &str, known: &[String]) -> anyhow::Result<()> {
    if known.iter().any(|k| k == provider) {
        Ok(())
    } else {
        anyhow::bail!(
            "Unknown provider '{provider}'. Available providers: {}",
            known.join(", ")
        )
    }
}

fn prompt_provider_selection(providers: &[String]) -> anyhow::Result<String> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a tip provider")
        .items(providers)
        .default(0)
        .interact()?;

    Ok(providers[selection].clone())
}

fn prompt_api_key(provider: &str) -> anyhow::Result<String> {
    let api_key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Enter API key for {provider}"))
        .interact()?;

    if api_key.is_empty() {
        anyhow::bail!("API key cannot be empty");
    }

    Ok(api_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProviderApiType, ProviderConfig};

    #[test]
    fn unknown_provider_rejected() {
        let args = LoginArgs {
            provider: Some("nonexistent_provider".to_string()),
            api_key: Some("sk-test".to_string()),
        };

        let err = auth_login(args).unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
        assert!(err.to_string().contains("Available providers"));
    }

    #[test]
    fn empty_key_rejected() {
        let args = LoginArgs {
            provider: Some("google".to_string()),
            api_key: Some(String::new()),
        };

        let err = auth_login(args).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn validate_provider_accepts_builtins() {
        let known = TipsConfig::known_providers();
        for name in ["google", "anthropic", "openai", "groq", "ollama"] {
            assert!(validate_provider(name, &known).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn saved_provider_lands_under_tips() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let google = TipsConfig::default().providers["google"].clone();
        Config::save_provider_to_path("google", &google, &config_path).unwrap();

        let contents = std::fs::read_to_string(&config_path).unwrap();
        let loaded: toml::Value = toml::from_str(&contents).unwrap();
        let providers = loaded
            .get("tips")
            .and_then(|t| t.get("providers"))
            .and_then(|p| p.as_table())
            .expect("should have tips.providers table");
        assert!(providers.contains_key("google"));

        let config: Config = toml::from_str(&contents).unwrap();
        assert_eq!(config.tips.providers.get("google"), Some(&google));
    }

    #[test]
    fn provider_switching_keeps_both_entries() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let anthropic = ProviderConfig {
            api_type: ProviderApiType::Anthropic,
            base_url: None,
            api_key_env: Some("ANTHROPIC_API_KEY".to_string()),
        };
        let groq = ProviderConfig {
            api_type: ProviderApiType::OpenAi,
            base_url: Some("https://api.groq.com/openai/v1".to_string()),
            api_key_env: Some("GROQ_API_KEY".to_string()),
        };

        Config::save_provider_to_path("anthropic", &anthropic, &config_path).unwrap();
        Config::save_provider_to_path("groq", &groq, &config_path).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.tips.providers.get("anthropic"), Some(&anthropic));
        assert_eq!(config.tips.providers.get("groq"), Some(&groq));
    }
}
