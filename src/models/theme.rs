//! Theme provider options.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// Options handed to the theme provider.
///
/// The navigation shell never inspects these; they are parsed once at
/// startup and passed through to [`ThemeProvider`](crate::components::providers::ThemeProvider).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeOptions {
    /// Attribute on `<html>` that receives the theme name (`"class"`, `"data-theme"`, ...).
    pub attribute: String,
    /// Theme used when nothing is stored.
    pub default_theme: String,
    /// Allow `"system"` to follow `prefers-color-scheme`.
    pub enable_system: bool,
    /// localStorage key of the persisted choice.
    pub storage_key: String,
    /// Accepted theme names.
    pub themes: Vec<String>,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            attribute: "class".to_string(),
            default_theme: "light".to_string(),
            enable_system: false,
            storage_key: "theme".to_string(),
            themes: vec!["light".to_string(), "dark".to_string()],
        }
    }
}

impl ThemeOptions {
    /// Parse options from TOML.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::ThemeParse(e.to_string()))
    }

    /// Options bundled with the build, defaults if they fail to parse.
    pub fn configured() -> Self {
        Self::from_toml(crate::config::THEME_TOML).unwrap_or_else(|_e| {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&_e.to_string().into());
            Self::default()
        })
    }

    /// Pick the theme to apply.
    ///
    /// A stored name wins when it is one of `themes` (or `"system"` with
    /// system support enabled). `"system"` resolves through `prefers_dark`.
    pub fn resolve(&self, stored: Option<&str>, prefers_dark: bool) -> String {
        let wanted = stored
            .filter(|name| self.accepts(name))
            .unwrap_or(&self.default_theme);

        if wanted == "system" && self.enable_system {
            let system = if prefers_dark { "dark" } else { "light" };
            system.to_string()
        } else {
            wanted.to_string()
        }
    }

    fn accepts(&self, name: &str) -> bool {
        self.themes.iter().any(|t| t == name) || (self.enable_system && name == "system")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_partial() {
        let opts = ThemeOptions::from_toml(r#"default_theme = "dark""#).unwrap();
        assert_eq!(opts.default_theme, "dark");
        assert_eq!(opts.attribute, "class");
        assert_eq!(opts.storage_key, "theme");
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(matches!(
            ThemeOptions::from_toml("enable_system = \"yes\""),
            Err(ConfigError::ThemeParse(_))
        ));
    }

    #[test]
    fn test_bundled_theme_parses() {
        let opts = ThemeOptions::from_toml(crate::config::THEME_TOML).unwrap();
        assert!(opts.themes.contains(&opts.default_theme));
        assert_eq!(ThemeOptions::configured(), opts);
    }

    #[test]
    fn test_resolve() {
        let mut opts = ThemeOptions::default();
        assert_eq!(opts.resolve(None, true), "light");
        assert_eq!(opts.resolve(Some("dark"), false), "dark");
        // Unknown stored value falls back to the default
        assert_eq!(opts.resolve(Some("neon"), false), "light");
        // "system" ignored unless enabled
        assert_eq!(opts.resolve(Some("system"), true), "light");

        opts.enable_system = true;
        assert_eq!(opts.resolve(Some("system"), true), "dark");
        assert_eq!(opts.resolve(Some("system"), false), "light");

        opts.default_theme = "system".to_string();
        assert_eq!(opts.resolve(None, true), "dark");
    }
}
