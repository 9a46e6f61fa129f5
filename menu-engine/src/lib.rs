//! Menu Engine - 餐厅数字菜单与桌边点餐引擎
//!
//! # 架构概述
//!
//! 引擎核心是价格计算与购物车合并；其余部分通过两个边界与外部协作：
//! 文档存储 ([`store::DocumentStore`]) 和翻译服务 ([`translation::Translator`])。
//!
//! ```text
//! selection → pricing → cart (merge engine) → orders (materializer) → store
//! ```
//!
//! # 模块结构
//!
//! ```text
//! menu-engine/src/
//! ├── core/          # 配置、环境、应用根 MenuApp
//! ├── auth/          # 管理模式校验 (Argon2)
//! ├── pricing/       # 单价计算、金额显示
//! ├── cart/          # 行标识、合并、购物车
//! ├── orders/        # 下单快照、状态流转、实时订单
//! ├── catalog/       # 菜单/分类/站点设置、过滤
//! ├── translation/   # 翻译请求与回退
//! ├── store/         # 文档存储抽象与内存实现
//! └── utils/         # 日志、输入校验
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod orders;
pub mod pricing;
pub mod store;
pub mod translation;
pub mod utils;

// Re-export 公共类型
pub use cart::{AddOutcome, Cart, LineKey};
pub use catalog::{CatalogService, MenuFilter};
pub use core::{Config, MenuApp, setup_environment};
pub use orders::{OrdersManager, Placement};
pub use store::{DocumentStore, MemoryStore, WriteMode};
pub use translation::{Localizer, NoopTranslator, Translator};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
