use crate::domain::ports::ConfigProvider;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub board: BoardSection,
    pub catalog: CatalogSection,
    pub api: ApiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSection {
    pub id: u64,
    pub group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub endpoint: String,
    pub version: Option<String>,
    pub key: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OrderError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| OrderError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} with the environment value; unknown variables are
    // left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for FileConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.catalog.endpoint
    }

    fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    fn api_version(&self) -> &str {
        self.api.version.as_deref().unwrap_or("2023-04")
    }

    fn api_key(&self) -> &str {
        self.api.key.as_deref().unwrap_or("")
    }

    fn board_id(&self) -> u64 {
        self.board.id
    }

    fn group_id(&self) -> &str {
        &self.board.group
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog.endpoint", &self.catalog.endpoint)?;
        validate_url("api.endpoint", &self.api.endpoint)?;
        validate_non_empty_string("board.group", &self.board.group)?;
        validate_positive_number("board.id", self.board.id, 1)?;
        Ok(())
    }
}
