use derive_from_env::FromEnv;

use crate::style::Style;

/// Settings read from `LOG_*` environment variables.
#[derive(FromEnv, Default, Debug)]
#[from_env(prefix = "LOG")]
#[allow(non_snake_case)]
pub struct EnvConfig {
    #[from_env(default = "")]
    pub STYLE: String,
}

impl EnvConfig {
    /// Reads the environment. Missing or malformed values fall back to defaults.
    pub fn load() -> Self {
        Self::from_env().unwrap_or_default()
    }

    /// Style requested through `LOG_STYLE`, if it names a known style.
    pub fn style(&self) -> Option<Style> {
        Style::from_name(&self.STYLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_mapping() {
        let config = EnvConfig { STYLE: "spring".into() };
        assert_eq!(config.style(), Some(Style::Spring));
        let config = EnvConfig { STYLE: "NESTJS".into() };
        assert_eq!(config.style(), Some(Style::NestJs));
        let config = EnvConfig { STYLE: "fancy".into() };
        assert_eq!(config.style(), None);
        assert_eq!(EnvConfig::default().style(), None);
    }
}
