use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 7860,
            static_dir: "dist".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SourcesConfig {
    pub sales: String,
    pub expenses: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            sales: "data/sales.csv".into(),
            expenses: "data/expenses.csv".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "R$".into(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 7860
static_dir = "dist"

[sources]
sales = "data/sales.csv"
expenses = "data/expenses.csv"

[display]
currency = "R$"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for `cargo run`)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.to_path_buf());
        }
    }
    let cwd = std::env::current_dir().unwrap_or_default();
    candidates.push(cwd.clone());

    load_config_from(&candidates, cwd)
}

/// First `config.toml` found in `dirs` wins; otherwise the embedded default,
/// resolved against `fallback_base`.
fn load_config_from(dirs: &[PathBuf], fallback_base: PathBuf) -> anyhow::Result<Config> {
    for dir in dirs {
        let config_path = dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            return load_config_file(&config_path);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG, fallback_base)
}

pub fn load_config_file(config_path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(config_path)?;
    let base_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    parse_config(&contents, base_dir)
}

fn parse_config(contents: &str, base_dir: PathBuf) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    config.base_dir = base_dir;
    Ok(config)
}

impl Config {
    pub fn sales_path(&self) -> PathBuf {
        self.resolve(&self.sources.sales)
    }

    pub fn expenses_path(&self) -> PathBuf {
        self.resolve(&self.sources.expenses)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.resolve(&self.server.static_dir)
    }

    /// Absolute paths are used as is, relative ones are joined to `base_dir`.
    fn resolve(&self, value: &str) -> PathBuf {
        let path = Path::new(value);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, PathBuf::from("/srv/app")).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7860);
        assert_eq!(config.display.currency, "R$");
        assert_eq!(
            config.sales_path(),
            PathBuf::from("/srv/app/data/sales.csv")
        );
        assert_eq!(
            config.expenses_path(),
            PathBuf::from("/srv/app/data/expenses.csv")
        );
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = parse_config("[display]\ncurrency = \"US$\"\n", PathBuf::new()).unwrap();
        assert_eq!(config.display.currency, "US$");
        assert_eq!(config.server.port, 7860);
        assert_eq!(config.sources.sales, "data/sales.csv");
    }

    #[test]
    fn test_absolute_source_is_kept() {
        let config = parse_config(
            "[sources]\nsales = \"/data/vendas.csv\"\n",
            PathBuf::from("/srv/app"),
        )
        .unwrap();
        assert_eq!(config.sales_path(), PathBuf::from("/data/vendas.csv"));
        assert_eq!(
            config.expenses_path(),
            PathBuf::from("/srv/app/data/expenses.csv")
        );
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "d400-config-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_search_order_prefers_exe_dir() {
        let exe_dir = scratch_dir("exe");
        let cwd = scratch_dir("cwd");
        std::fs::write(exe_dir.join("config.toml"), "[server]\nport = 9001\n").unwrap();
        std::fs::write(cwd.join("config.toml"), "[server]\nport = 9002\n").unwrap();

        let config = load_config_from(&[exe_dir.clone(), cwd.clone()], cwd.clone()).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.base_dir, exe_dir);

        std::fs::remove_dir_all(&exe_dir).unwrap();
        std::fs::remove_dir_all(&cwd).unwrap();
    }

    #[test]
    fn test_search_order_falls_through_to_cwd() {
        let exe_dir = scratch_dir("exe-empty");
        let cwd = scratch_dir("cwd-only");
        std::fs::write(cwd.join("config.toml"), "[server]\nport = 9002\n").unwrap();

        let config = load_config_from(&[exe_dir.clone(), cwd.clone()], cwd.clone()).unwrap();
        assert_eq!(config.server.port, 9002);
        assert_eq!(config.sales_path(), cwd.join("data/sales.csv"));

        std::fs::remove_dir_all(&exe_dir).unwrap();
        std::fs::remove_dir_all(&cwd).unwrap();
    }

    #[test]
    fn test_search_order_falls_back_to_embedded_default() {
        let exe_dir = scratch_dir("none-a");
        let cwd = scratch_dir("none-b");

        let config =
            load_config_from(&[exe_dir.clone(), cwd.clone()], PathBuf::from("/srv/app")).unwrap();
        assert_eq!(config.server.port, 7860);
        assert_eq!(config.sales_path(), PathBuf::from("/srv/app/data/sales.csv"));

        std::fs::remove_dir_all(&exe_dir).unwrap();
        std::fs::remove_dir_all(&cwd).unwrap();
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[server\nport = ", PathBuf::new()).is_err());
    }
}
