//! 工具模块 - 日志和输入校验
//!
//! # 内容
//!
//! - [`logger`] - tracing 初始化
//! - [`validation`] - 文本长度与价格校验

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
