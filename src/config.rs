use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use crate::fs_util::default_state_dir;

/// Top-level configuration loaded from TOML.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct BraiConfig {
    pub gateway: GatewayConfig,
    pub storage: StorageConfig,
    pub knowledge: KnowledgeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

fn default_port() -> u16 {
    5000
}
fn default_bind() -> String {
    "127.0.0.1".into()
}

/// Where the two durable records live.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_state_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_memory_file")]
    pub memory_file: String,
    #[serde(default = "default_personality_file")]
    pub personality_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_state_dir(),
            memory_file: default_memory_file(),
            personality_file: default_personality_file(),
        }
    }
}

impl StorageConfig {
    pub fn memory_path(&self) -> PathBuf {
        self.dir.join(&self.memory_file)
    }

    pub fn personality_path(&self) -> PathBuf {
        self.dir.join(&self.personality_file)
    }
}

fn default_memory_file() -> String {
    "memoria.json".into()
}
fn default_personality_file() -> String {
    "personalidade.json".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeConfig {
    #[serde(default = "default_knowledge_enabled")]
    pub enabled: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            enabled: default_knowledge_enabled(),
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_knowledge_enabled() -> bool {
    true
}
fn default_base_url() -> String {
    "https://pt.wikipedia.org/api/rest_v1/page/summary".into()
}
fn default_timeout_ms() -> u64 {
    5000
}

/// Load configuration from file or use defaults.
///
/// Search order:
/// 1. `BRAI_CONFIG` env var
/// 2. `~/.brai/config.toml`
/// 3. Zero-config defaults (no file needed)
pub fn load() -> anyhow::Result<BraiConfig> {
    let path = config_path();

    if path.exists() {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        let config: BraiConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config at {}: {e}", path.display()))?;

        validate(&config)?;

        info!("loaded config from {}", path.display());
        Ok(config)
    } else {
        info!("no config file found, using zero-config defaults");
        Ok(BraiConfig::default())
    }
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("BRAI_CONFIG") {
        return PathBuf::from(path);
    }
    default_state_dir().join("config.toml")
}

/// Validate the config and return clear error messages.
pub fn validate(config: &BraiConfig) -> anyhow::Result<()> {
    if config.storage.memory_file.trim().is_empty() {
        anyhow::bail!("storage.memory_file must not be empty");
    }
    if config.storage.personality_file.trim().is_empty() {
        anyhow::bail!("storage.personality_file must not be empty");
    }
    if config.storage.memory_file == config.storage.personality_file {
        anyhow::bail!("storage.memory_file and storage.personality_file must differ");
    }

    if config.knowledge.timeout_ms == 0 {
        anyhow::bail!("knowledge.timeout_ms must be > 0");
    }

    let base = url::Url::parse(&config.knowledge.base_url).map_err(|e| {
        anyhow::anyhow!(
            "invalid knowledge.base_url '{}': {e}",
            config.knowledge.base_url
        )
    })?;
    if !matches!(base.scheme(), "http" | "https") {
        anyhow::bail!(
            "knowledge.base_url must use http or https, got '{}'",
            base.scheme()
        );
    }

    Ok(())
}
