//! 目录领域的过程宏（catalog-macros）
//!
//! 为目录实体提供声明式建模能力：
//! - `#[entity]`：补齐标识/版本/审计时间戳字段，并实现
//!   `catalog_domain::entity::Entity`；
//! - `#[entity_id]`：为单字段 tuple struct 形式的类型化标识
//!   （例如 `struct ProductId(Uuid);`）生成常用转换实现。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity;
mod entity_id;
mod field_utils;

/// 实体宏
/// - 若缺失则追加字段：`id`、`version`、`created_at`、`updated_at`，并置于字段最前
/// - 自动实现 `::catalog_domain::entity::Entity`
/// - 支持参数：`#[entity(id = IdType, debug = true|false)]`
///   - `id` 默认 `String`
///   - `debug` 默认 `true`（派生 Debug）
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 实体 ID 宏
/// 仅支持单字段 tuple struct，为包装类型生成 `new`、`Display`、`FromStr`、
/// `AsRef` 与 `From` 转换实现。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
