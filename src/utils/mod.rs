pub mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    use crate::errors::{GraphError, Result};

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Contract {
        #[serde(default)]
        pub name: String,
        #[serde(default)]
        pub ignore_imports: Vec<String>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct ImportLinterConfig {
        #[serde(default)]
        pub root_packages: Vec<String>,
        pub root_package: Option<String>,
        #[serde(default)]
        pub contracts: Vec<Contract>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct ToolSection {
        #[serde(default)]
        pub importlinter: ImportLinterConfig,
    }

    /// Document layout of a `pyproject.toml`. Missing tables and keys read as
    /// empty, so a file without `[tool.importlinter]` yields no contracts.
    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Configuration {
        #[serde(default)]
        pub tool: ToolSection,
    }

    impl Configuration {
        #[must_use]
        pub fn contracts(&self) -> &[Contract] {
            &self.tool.importlinter.contracts
        }

        /// Root packages from both the plural and the singular key.
        #[must_use]
        pub fn root_packages(&self) -> Vec<&str> {
            let linter = &self.tool.importlinter;
            linter
                .root_package
                .iter()
                .chain(linter.root_packages.iter())
                .map(String::as_str)
                .collect()
        }
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("pyproject.toml")
    }

    /// Parse configuration text. `path` is only used for error reporting.
    ///
    /// # Errors
    /// Returns `GraphError::Parse` if `data` is not TOML or if any known key
    /// has the wrong type.
    pub fn parse_config(data: &str, path: &Path) -> Result<Configuration> {
        toml::from_str::<Configuration>(data)
            .map_err(|source| GraphError::Parse { path: path.to_path_buf(), source })
    }

    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    /// Returns `GraphError::Io` if the file cannot be read and
    /// `GraphError::Parse` if its content does not match the schema.
    pub fn load_config_at(path: &Path) -> Result<Configuration> {
        let data = fs::read_to_string(path)
            .map_err(|source| GraphError::Io { path: path.to_path_buf(), source })?;
        let cfg = parse_config(&data, path)?;
        tracing::info!(
            path = %path.display(),
            contracts = cfg.contracts().len(),
            root_packages = ?cfg.root_packages(),
            "loaded import-linter configuration"
        );
        Ok(cfg)
    }
}
