//! 内存版记录存储（MemoryRecordStore）
//!
//! 基于 `DashMap` 的轻量实现，满足 `RecordStore` 协议：
//! - `insert`：分配 UUID 标识并打点创建/更新时间；
//! - `save`：以版本列做比较交换，拒绝过期写入；
//! - `scan`：谓词过滤 → 名称升序排序 → 统计总数 → 截取窗口；
//! - 典型用途：测试环境、示例与本地开发。
//!
use crate::concurrency::verify_version;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::page::{Page, PageRequest};
use crate::persist::{RecordStore, ScanFilter};
use crate::resource::Resource;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

/// 简单的内存记录存储实现
pub struct MemoryRecordStore<R>
where
    R: Resource,
{
    records: DashMap<R::Id, R>,
}

impl<R> MemoryRecordStore<R>
where
    R: Resource,
{
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// 当前存量（诊断与测试用）
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> Default for MemoryRecordStore<R>
where
    R: Resource,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R> RecordStore<R> for MemoryRecordStore<R>
where
    R: Resource,
    R::Id: From<Uuid>,
{
    async fn find_by_id(&self, id: &R::Id) -> DomainResult<Option<R>> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn scan(&self, filter: ScanFilter<R>, page: PageRequest) -> DomainResult<Page<R>> {
        let mut hits: Vec<R> = self
            .records
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        hits.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));

        let total = hits.len();
        let items: Vec<R> = hits
            .into_iter()
            .skip(page.offset())
            .take(page.page_size())
            .collect();

        Ok(Page::new(items, total, page))
    }

    async fn insert(&self, mut record: R) -> DomainResult<R> {
        let id = R::Id::from(Uuid::new_v4());
        record.record_created(id.clone(), Utc::now());
        tracing::debug!(resource = R::TYPE, id = %record.id(), "record inserted");
        self.records.insert(id, record.clone());
        Ok(record)
    }

    async fn save(&self, mut record: R) -> DomainResult<R> {
        let Some(mut stored) = self.records.get_mut(record.id()) else {
            return Err(DomainError::NotFound {
                reason: format!("{} {} not stored", R::TYPE, record.id()),
            });
        };

        // 版本列比较交换：过期写入直接拒绝，由调用方重读后重试
        if let Err(conflict) = verify_version(stored.version(), record.version()) {
            tracing::warn!(
                resource = R::TYPE,
                id = %record.id(),
                observed = record.version().value(),
                current = stored.version().value(),
                "stale write rejected"
            );
            return Err(conflict);
        }

        record.record_updated(Utc::now());
        *stored = record.clone();
        tracing::debug!(resource = R::TYPE, id = %record.id(), version = %record.version(), "record saved");
        Ok(record)
    }

    async fn delete_by_id(&self, id: &R::Id) -> DomainResult<bool> {
        Ok(self.records.remove(id).is_some())
    }

    async fn exists_by_id(&self, id: &R::Id) -> DomainResult<bool> {
        Ok(self.records.contains_key(id))
    }
}
