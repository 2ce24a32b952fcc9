//! 目录领域层基础库（catalog-domain）
//!
//! 提供资源管理服务核心所需的领域抽象与构件：
//! - 实体（`entity`）与类型化标识、版本（`value_object`）建模
//! - 资源能力契约（`resource`）：校验、全量替换、字段合并、过滤匹配
//! - 目录资源（`catalog`）：产品（Product）与客户（Customer）
//! - 分页窗口归一化（`page`）与过滤谓词辅助（`filter`）
//! - 乐观并发守卫（`concurrency`）
//! - 记录存储协议与内存参考实现（`persist`）
//!
//! 本 crate 尽量保持与存储与传输实现解耦，仅定义领域层接口与最小必要的错误类型，
//! 以便在不同基础设施（例如 Postgres、HTTP 网关等）上进行适配实现。
//!
//! 典型用法：
//! 1. 通过 `catalog` 中的 Draft/Patch/Filter 类型表达创建、更新与查询意图；
//! 2. 选择 `persist` 中的 `RecordStore` 协议并提供具体实现（或使用内存实现）；
//! 3. 由上层服务组合分页、过滤与并发守卫完成五类资源操作。
//!
pub mod catalog;
pub mod concurrency;
pub mod entity;
pub mod error;
pub mod filter;
pub mod page;
pub mod persist;
pub mod resource;
pub mod value_object;

// 允许在本 crate 内部通过 ::catalog_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::catalog_domain 路径。
extern crate self as catalog_domain;
