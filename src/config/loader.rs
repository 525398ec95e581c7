// Configuration loader

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for an unwired analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Handlers root, relative to the project path
    pub handlers_dir: PathBuf,

    /// Application root the namespace derivation is anchored at
    pub app_root: PathBuf,

    /// Namespace prefix that replaces the application root in derived names
    pub namespace_prefix: String,

    /// Method name assumed for bare-class route targets (invokable controllers)
    pub default_method: String,

    /// Route manifest path, relative to the project path
    pub routes_file: Option<PathBuf>,

    /// Patterns to exclude from the handler walk
    pub exclude: Vec<String>,

    /// Report configuration
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: terminal, json
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            handlers_dir: PathBuf::from("app/Http/Controllers"),
            app_root: PathBuf::from("app"),
            namespace_prefix: "App".to_string(),
            default_method: "__invoke".to_string(),
            routes_file: None,
            exclude: vec![
                "**/vendor/**".to_string(),
                "**/storage/**".to_string(),
                "**/node_modules/**".to_string(),
            ],
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".unwired.yml",
            ".unwired.yaml",
            ".unwired.toml",
            "unwired.yml",
            "unwired.yaml",
            "unwired.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Check if a path matches an exclusion pattern
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pattern| glob_match(pattern, &path_str))
    }
}

/// Simple glob matching for patterns like "*Controller" or "**/vendor/**"
fn glob_match(pattern: &str, text: &str) -> bool {
    if let Some(dir) = pattern
        .strip_prefix("**/")
        .and_then(|p| p.strip_suffix("/**"))
    {
        // Must match a complete directory name, not a substring
        return text.contains(&format!("/{}/", dir));
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return text.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix('*') {
        if !pattern.contains('/') {
            return text.starts_with(prefix);
        }
    }

    text == pattern
}
