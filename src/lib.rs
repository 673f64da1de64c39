//! RosterSystem - 两代学校名册后端服务
//!
//! 基于 Actix Web 构建的教学用名册管理后端，同一套 API 同时
//! 演示直接 SQL 访问（第一代）与 SeaORM 映射访问（第二代）。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（第二代 SeaORM + 第一代原始 SQL）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
