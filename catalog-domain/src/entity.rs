//! 实体（Entity）基础抽象
//!
//! 为目录记录提供统一的标识（Id）、版本（optimistic locking）与审计时间戳能力。
//! 标识与版本由存储层在写入时打点：`record_created` 在插入时分配标识并初始化
//! 版本与时间戳，`record_updated` 在每次成功变更时将版本 +1 并刷新更新时间。
//!
use crate::value_object::Version;
use chrono::{DateTime, Utc};
use std::{fmt::Display, hash::Hash, str::FromStr};

/// 具备唯一标识、版本与审计时间戳的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示、可克隆且可作散列键
    type Id: Clone + Display + FromStr + Eq + Hash + Send + Sync;

    /// 使用给定标识创建实体，其余字段取默认值
    fn new(id: Self::Id) -> Self;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;

    /// 获取当前版本（用于乐观锁与并发控制）
    fn version(&self) -> Version;

    /// 创建时间；未入库的记录为 None
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// 最近一次变更时间；未入库的记录为 None
    fn updated_at(&self) -> Option<DateTime<Utc>>;

    /// 存储层插入打点：分配标识，版本归零，创建/更新时间取 `at`
    fn record_created(&mut self, id: Self::Id, at: DateTime<Utc>);

    /// 存储层变更打点：版本 +1，更新时间取 `at`
    fn record_updated(&mut self, at: DateTime<Utc>);
}

#[cfg(test)]
mod tests {
    use super::Entity;
    use catalog_macros::entity;
    use chrono::Utc;
    use serde::{Deserialize, Serialize};

    #[entity]
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Shelf {
        label: String,
    }

    #[test]
    fn new_entity_starts_unstamped() {
        let shelf = Shelf::new("s-1".to_string());
        assert_eq!(shelf.id(), "s-1");
        assert!(shelf.version().is_new());
        assert!(shelf.created_at().is_none());
        assert!(shelf.updated_at().is_none());
    }

    #[test]
    fn stamping_assigns_identity_and_advances_version() {
        let mut shelf = Shelf::new(String::new());
        let t0 = Utc::now();
        shelf.record_created("s-2".to_string(), t0);
        assert_eq!(shelf.id(), "s-2");
        assert_eq!(shelf.version().value(), 0);
        assert_eq!(shelf.created_at(), Some(t0));
        assert_eq!(shelf.updated_at(), Some(t0));

        let t1 = Utc::now();
        shelf.record_updated(t1);
        assert_eq!(shelf.version().value(), 1);
        // 创建时间不随变更移动
        assert_eq!(shelf.created_at(), Some(t0));
        assert_eq!(shelf.updated_at(), Some(t1));
    }
}
