use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// 完整数据库连接 URL；缺省时使用 `data_dir` 下的 SQLite 文件。
    #[serde(default)]
    pub database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            data_dir: default_data_dir(),
            database_url: None,
        }
    }
}

fn default_http_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl ServerConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// The URL the store is opened with. `mode=rwc` lets SQLite create the
    /// database file on first start.
    pub fn database_url(&self) -> String {
        self.database_url
            .clone()
            .unwrap_or_else(|| format!("sqlite://{}/notable.db?mode=rwc", self.data_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_keys() {
        let config: ServerConfig = toml::from_str("http_port = 9000").unwrap();
        assert_eq!(config.http_port, 9000);
        assert_eq!(config.data_dir, "data");
        assert!(config.database_url.is_none());
        assert_eq!(config.database_url(), "sqlite://data/notable.db?mode=rwc");
    }

    #[test]
    fn explicit_database_url_wins() {
        let config: ServerConfig =
            toml::from_str("database_url = \"sqlite::memory:\"").unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
    }
}
