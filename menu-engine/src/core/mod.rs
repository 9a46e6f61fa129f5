//! 核心模块 - 配置、环境初始化和应用根
//!
//! # 模块结构
//!
//! - [`Config`] - 引擎配置
//! - [`MenuApp`] - 应用根 (依赖注入)
//! - [`setup_environment`] - 加载 .env 并初始化日志

pub mod config;
pub mod state;

pub use config::Config;
pub use state::MenuApp;

/// 加载 `.env` 并按配置初始化日志
///
/// 返回加载后的配置。日志已初始化时不会重复初始化。
pub fn setup_environment() -> Config {
    // .env 不存在是正常情况
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    crate::utils::logger::init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    tracing::debug!(environment = %config.environment, "Environment loaded");
    config
}
