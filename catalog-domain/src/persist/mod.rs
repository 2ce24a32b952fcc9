//! 记录存储（persist）
//!
//! 定义资源记录的存储协议与内存参考实现：
//! - 按标识读取/删除/存在性检查；
//! - 谓词扫描 + 固定排序 + 分页窗口；
//! - 插入时分配标识与初始版本，写回时以版本列拒绝过期写入。
//!
//! 该模块聚焦协议与装配逻辑，具体存储后端（如 Postgres）由上层提供实现并注入。
//!
mod memory_store;
mod record_store;

pub use memory_store::MemoryRecordStore;
pub use record_store::{RecordStore, ScanFilter};
