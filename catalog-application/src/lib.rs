//! 目录应用层（catalog-application）
//!
//! 面向调用方（例如 HTTP 网关）编排领域构件，提供按资源类型特化的
//! 五类操作：列表、按标识读取、创建、全量更新/部分更新与删除。
//!
//! - 服务自身无状态，所有共享可变状态都在注入的 `RecordStore` 中；
//! - "未找到"以数据（`None`/`false`）而非错误表达，由传输层翻译为状态码；
//! - 校验失败与版本冲突归入 [`error::AppError`]，存储不发生部分变更。
//!
pub mod error;
pub mod resource_service;

pub use resource_service::{CustomerService, ProductService, ResourceService};
