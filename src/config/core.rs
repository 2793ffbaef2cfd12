use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};

use super::Settings;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

pub struct FixturegenConfig {
    figment: Figment,
}

impl FixturegenConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // A custom config replaces the user and repository files
        if let Some(custom_path) = custom_config {
            figment = if custom_path.ends_with(".json") {
                figment.merge(Json::file(custom_path))
            } else if custom_path.ends_with(".yaml") || custom_path.ends_with(".yml") {
                figment.merge(Yaml::file(custom_path))
            } else {
                figment.merge(Toml::file(custom_path))
            };
        } else {
            let user_config = Self::user_config_path();
            figment = figment
                .merge(Toml::file(&user_config))
                .merge(Json::file(user_config.replace(".toml", ".json")))
                .merge(Yaml::file(user_config.replace(".toml", ".yaml")))
                .merge(Yaml::file(user_config.replace(".toml", ".yml")))
                .merge(Toml::file("fixturegen.toml"))
                .merge(Json::file("fixturegen.json"))
                .merge(Yaml::file("fixturegen.yaml"))
                .merge(Yaml::file("fixturegen.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("FIXTUREGEN_").split("__"));

        Ok(FixturegenConfig { figment })
    }

    /// Typed view of the merged configuration
    pub fn settings(&self) -> Result<Settings> {
        Ok(self.figment.extract()?)
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        Ok(self.figment.extract_inner(path)?)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/fixturegen/config.toml", home),
            Err(_) => "~/.config/fixturegen/config.toml".to_string(),
        }
    }
}
