use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use super::args::Cli;
use super::validators::validate_config;
use crate::errors::Result;
use crate::services::DEFAULT_MAX_ALIAS_ATTEMPTS;
use crate::utils::normalize_response_prefix;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Prefix of environment overrides, e.g. `SHORTENER__SERVER__ADDRESS`
pub const ENV_PREFIX: &str = "SHORTENER";

/// 静态配置（启动时加载一次）
///
/// 优先级：CLI > ENV > config.toml > 默认值
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// Load from the config file, the process environment and `cli`
    pub fn load(cli: &Cli) -> Result<Self> {
        Self::load_with_env(cli, Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as [`StaticConfig::load`] with an explicit environment source
    pub fn load_with_env(cli: &Cli, env: Environment) -> Result<Self> {
        let (path, required) = match cli.config.as_deref() {
            Some(path) => (path, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let mut builder = Config::builder()
            // 1. TOML 文件（未显式指定时可选）
            .add_source(File::with_name(path).required(required))
            // 2. 环境变量覆盖，分隔符 __
            .add_source(env.separator("__").try_parsing(true))
            // 3. 命令行参数
            .set_override_option("server.address", cli.address.clone())?
            .set_override_option("server.response_prefix", cli.response_prefix.clone())?
            .set_override_option("logging.level", cli.log_level.clone())?;

        if cli.lenient_content_type {
            builder = builder.set_override("server.strict_content_type", false)?;
        }

        let config: StaticConfig = builder.build()?.try_deserialize()?;
        config.finalize()
    }

    /// Normalize derived values and validate the result
    pub fn finalize(mut self) -> Result<Self> {
        self.server.response_prefix = normalize_response_prefix(&self.server.response_prefix);
        validate_config(&self)?;
        Ok(self)
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_address")]
    pub address: String,
    #[serde(default = "default_response_prefix")]
    pub response_prefix: String,
    #[serde(default = "default_strict_content_type")]
    pub strict_content_type: bool,
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// 短链接生成配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    #[serde(default = "default_max_alias_attempts")]
    pub max_alias_attempts: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_address() -> String {
    "localhost:8080".to_string()
}

fn default_response_prefix() -> String {
    "http://localhost:8080".to_string()
}

pub(crate) fn default_strict_content_type() -> bool {
    true
}

pub(crate) fn default_max_body_size() -> usize {
    1024 * 1024
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_max_alias_attempts() -> usize {
    DEFAULT_MAX_ALIAS_ATTEMPTS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_server_address(),
            response_prefix: default_response_prefix(),
            strict_content_type: default_strict_content_type(),
            max_body_size: default_max_body_size(),
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            max_alias_attempts: default_max_alias_attempts(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
