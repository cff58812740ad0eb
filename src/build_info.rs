//! Build information captured at compile time.

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short git commit hash (7 chars), or `unknown` outside a checkout.
pub const BUILD_HASH: &str = env!("BUILD_HASH");

const BUILD_DIRTY: &str = env!("BUILD_DIRTY");

/// Whether the binary was built from a working tree with uncommitted changes.
#[must_use]
pub fn is_dirty() -> bool {
    BUILD_DIRTY == "true"
}

fn hash_label() -> String {
    if is_dirty() {
        format!("{BUILD_HASH}*")
    } else {
        BUILD_HASH.to_string()
    }
}

/// Full version string, e.g. `0.1.0 (abc1234)` or `0.1.0 (abc1234*)`.
#[must_use]
pub fn version_string() -> String {
    format!("{VERSION} ({})", hash_label())
}

/// Label for the TUI footer, e.g. `eco v0.1.0 · abc1234`.
#[must_use]
pub fn footer_label() -> String {
    format!("eco v{VERSION} · {}", hash_label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_contains_hash() {
        let version = version_string();
        assert!(version.starts_with(VERSION));
        assert!(version.contains(BUILD_HASH));
    }

    #[test]
    fn footer_label_names_the_binary() {
        assert!(footer_label().starts_with("eco v"));
    }
}
