use shared::error::AppError;

/// 引擎配置 - 所有可调项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (未设置) | 日志目录，按天滚动 |
/// | CURRENCY_SYMBOL | ₹ | 金额显示符号 |
/// | DEFAULT_LANGUAGE | English | 菜单原文语言 |
/// | OFFLINE_FALLBACK | true | 存储不可达时本地降级 |
/// | SUBSCRIPTION_BUFFER | 256 | 订单事件广播容量 |
/// | ADMIN_PASSWORD_HASH | (未设置) | 管理员密码 Argon2 PHC 哈希 |
///
/// # 示例
///
/// ```ignore
/// CURRENCY_SYMBOL='$' OFFLINE_FALLBACK=false cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别 (tracing 过滤表达式)
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 金额显示符号
    pub currency_symbol: String,
    /// 菜单原文语言，选中时不翻译
    pub default_language: String,
    /// 存储写入失败 (不可达) 时是否在本地应用变更
    pub offline_fallback: bool,
    /// 订单事件广播通道容量
    pub subscription_buffer: usize,
    /// 管理员密码哈希；未设置时无法进入管理模式
    pub admin_password_hash: Option<String>,
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON", false),
            log_dir: env_non_empty("LOG_DIR"),
            currency_symbol: std::env::var("CURRENCY_SYMBOL").unwrap_or_else(|_| "₹".into()),
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "English".into()),
            offline_fallback: env_parse("OFFLINE_FALLBACK", true),
            subscription_buffer: env_parse("SUBSCRIPTION_BUFFER", 256),
            admin_password_hash: env_non_empty("ADMIN_PASSWORD_HASH"),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(offline_fallback: bool, admin_password_hash: Option<String>) -> Self {
        let mut config = Self::from_env();
        config.offline_fallback = offline_fallback;
        config.admin_password_hash = admin_password_hash;
        config
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> Result<(), AppError> {
        if self.subscription_buffer == 0 {
            return Err(AppError::config("SUBSCRIPTION_BUFFER must be greater than 0"));
        }
        if self.default_language.trim().is_empty() {
            return Err(AppError::config("DEFAULT_LANGUAGE must not be empty"));
        }
        Ok(())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides(false, Some("$argon2id$v=19$stub".into()));
        assert!(!config.offline_fallback);
        assert!(config.admin_password_hash.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_buffer() {
        let mut config = Config::with_overrides(true, None);
        config.subscription_buffer = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_environment_helpers() {
        let mut config = Config::with_overrides(true, None);
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
