//! Optional generator configuration
//!
//! A TOML file may supply default `agents` and `out` paths. Values given on the
//! command line (or through their environment variables) take precedence.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_usage;
use crate::error::{RubricError, Result};

/// Contents of a rubricgen config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Policy document to read
    #[serde(default)]
    pub agents: Option<PathBuf>,

    /// Rubric destination
    #[serde(default)]
    pub out: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Load a config file, anchoring relative paths at the file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: GeneratorConfig =
            toml::from_str(&content).map_err(|e| RubricError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.agents = config.agents.map(|p| base.join(p));
        config.out = config.out.map(|p| base.join(p));

        tracing::debug!(path = %path.display(), "load_config");
        Ok(config)
    }
}

/// The two paths every run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub agents: PathBuf,
    pub out: PathBuf,
}

impl Inputs {
    /// Merge explicit arguments over config defaults; both paths are required
    pub fn resolve(
        agents: Option<PathBuf>,
        out: Option<PathBuf>,
        config: Option<GeneratorConfig>,
    ) -> Result<Self> {
        let config = config.unwrap_or_default();
        let Some(agents) = agents.or(config.agents) else {
            bail_usage!("missing required argument: --agents <PATH>");
        };
        let Some(out) = out.or(config.out) else {
            bail_usage!("missing required argument: --out <PATH>");
        };
        Ok(Self { agents, out })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_empty() {
        let config = GeneratorConfig::default();
        assert!(config.agents.is_none());
        assert!(config.out.is_none());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rubricgen.toml");
        fs::write(&path, "agents = \"AGENTS.md\"\nout = \"docs/rubric.md\"\n").unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.agents, Some(dir.path().join("AGENTS.md")));
        assert_eq!(config.out, Some(dir.path().join("docs/rubric.md")));
    }

    #[test]
    fn test_load_keeps_absolute_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rubricgen.toml");
        fs::write(&path, "out = \"/abs/rubric.md\"\n").unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.out, Some(PathBuf::from("/abs/rubric.md")));
        assert!(config.agents.is_none());
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rubricgen.toml");
        fs::write(&path, "agnets = \"AGENTS.md\"\n").unwrap();

        let err = GeneratorConfig::load(&path).unwrap_err();
        assert!(matches!(err, RubricError::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rubricgen.toml");
        fs::write(&path, "").unwrap();

        let loaded = GeneratorConfig::load(&path).unwrap();
        assert_eq!(loaded, GeneratorConfig::default());
    }

    #[test]
    fn test_inputs_prefer_explicit_arguments() {
        let config = GeneratorConfig {
            agents: Some(PathBuf::from("cfg/AGENTS.md")),
            out: Some(PathBuf::from("cfg/rubric.md")),
        };
        let inputs = Inputs::resolve(Some(PathBuf::from("cli/AGENTS.md")), None, Some(config))
            .unwrap();
        assert_eq!(inputs.agents, PathBuf::from("cli/AGENTS.md"));
        assert_eq!(inputs.out, PathBuf::from("cfg/rubric.md"));
    }

    #[test]
    fn test_inputs_require_both_paths() {
        let err = Inputs::resolve(Some(PathBuf::from("AGENTS.md")), None, None).unwrap_err();
        assert!(matches!(err, RubricError::UsageError(ref m) if m.contains("--out")));

        let err = Inputs::resolve(None, Some(PathBuf::from("out.md")), None).unwrap_err();
        assert!(matches!(err, RubricError::UsageError(ref m) if m.contains("--agents")));
    }
}
