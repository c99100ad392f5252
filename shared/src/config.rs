use crate::task::TaskId;

pub const DEFAULT_API: &str = "/api/tasks";

/// Where the task collection lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api: String,
    pub token: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api: DEFAULT_API.to_string(),
            token: String::new(),
        }
    }
}

impl ApiConfig {
    pub fn new(api: impl Into<String>, token: impl Into<String>) -> Self {
        let api: String = api.into();
        Self {
            api: api.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Builds a config from optional overrides, falling back to the defaults.
    pub fn from_overrides(api: Option<&str>, token: Option<&str>) -> Self {
        let defaults = Self::default();
        Self::new(
            api.filter(|s| !s.is_empty()).unwrap_or(&defaults.api),
            token.unwrap_or(&defaults.token),
        )
    }

    pub fn collection_url(&self) -> &str {
        &self.api
    }

    pub fn item_url(&self, id: &TaskId) -> String {
        format!("{}/{}", self.api, id)
    }
}
