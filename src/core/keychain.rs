//! API key storage in the system keychain.

use keyring::Entry;

const SERVICE_NAME: &str = "eco-cli";

/// Store an API key for a provider.
pub fn store_api_key(provider: &str, api_key: &str) -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE_NAME, provider)?;
    entry.set_password(api_key)?;
    Ok(())
}

/// Look up a stored API key.
#[must_use]
pub fn get_api_key(provider: &str) -> Option<String> {
    let entry = Entry::new(SERVICE_NAME, provider).ok()?;
    entry.get_password().ok()
}

/// Remove a stored API key. Removing a key that was never stored is not an error.
pub fn delete_api_key(provider: &str) -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE_NAME, provider)?;
    match entry.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => {
            tracing::debug!(provider, "no stored key to remove");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keychain_roundtrip() {
        let test_provider = "eco-cli-test-provider";
        let test_key = "test-gemini-key-12345";

        let _ = delete_api_key(test_provider);

        if store_api_key(test_provider, test_key).is_err() {
            eprintln!("Keychain not available in test environment, skipping");
            return;
        }

        let retrieved = get_api_key(test_provider);
        if retrieved.is_none() {
            eprintln!("Keychain read failed (mock backend?), skipping");
            return;
        }

        assert_eq!(retrieved, Some(test_key.to_string()));

        delete_api_key(test_provider).expect("should delete key");

        let after_delete = get_api_key(test_provider);
        assert_eq!(after_delete, None);
    }
}
