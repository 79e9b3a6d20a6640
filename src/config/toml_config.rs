use crate::core::{ConfigProvider, ElementIds, QueryEncoding};
use crate::domain::model::{DEFAULT_QUERY_PARAMETER, DEFAULT_SEARCH_PATH};
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{
    validate_endpoint_path, validate_non_empty_string, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub endpoint: EndpointConfig,
    pub query: Option<QueryConfig>,
    pub elements: Option<ElementsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    pub search_path: Option<String>,
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub encoding: Option<QueryEncoding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementsConfig {
    pub input_id: Option<String>,
    pub container_id: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SearchError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOCTOR_SEARCH_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn element_ids(&self) -> ElementIds {
        let defaults = ElementIds::default();
        match &self.elements {
            Some(elements) => ElementIds {
                input_id: elements.input_id.clone().unwrap_or(defaults.input_id),
                container_id: elements
                    .container_id
                    .clone()
                    .unwrap_or(defaults.container_id),
            },
            None => defaults,
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.endpoint.base_url
    }

    fn search_path(&self) -> &str {
        self.endpoint
            .search_path
            .as_deref()
            .unwrap_or(DEFAULT_SEARCH_PATH)
    }

    fn query_parameter(&self) -> &str {
        self.endpoint
            .parameter
            .as_deref()
            .unwrap_or(DEFAULT_QUERY_PARAMETER)
    }

    fn query_encoding(&self) -> QueryEncoding {
        self.query
            .as_ref()
            .and_then(|q| q.encoding)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint.base_url", self.base_url())?;
        validate_endpoint_path("endpoint.search_path", self.search_path())?;
        validate_non_empty_string("endpoint.parameter", self.query_parameter())?;

        let ids = self.element_ids();
        validate_non_empty_string("elements.input_id", &ids.input_id)?;
        validate_non_empty_string("elements.container_id", &ids.container_id)?;
        Ok(())
    }
}
