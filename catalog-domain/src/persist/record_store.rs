//! 记录存储协议
use crate::error::DomainResult;
use crate::page::{Page, PageRequest};
use crate::resource::Resource;
use async_trait::async_trait;
use std::sync::Arc;

/// 扫描谓词：由过滤引擎组合而成，存储实现逐条求值
pub type ScanFilter<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// 资源记录的存储协议
///
/// 标识、版本与审计时间戳由存储层打点：插入分配标识并初始化版本，
/// 写回以版本列做比较交换并在成功后递增版本。
#[async_trait]
pub trait RecordStore<R>: Send + Sync
where
    R: Resource,
{
    /// 按标识读取；不存在返回 `None`
    async fn find_by_id(&self, id: &R::Id) -> DomainResult<Option<R>>;

    /// 按谓词扫描并返回指定窗口；排序固定为名称升序（忽略大小写），
    /// `total` 为过滤后、截窗前的总数
    async fn scan(&self, filter: ScanFilter<R>, page: PageRequest) -> DomainResult<Page<R>>;

    /// 插入新记录：分配标识、初始版本与创建时间，返回入库后的记录
    async fn insert(&self, record: R) -> DomainResult<R>;

    /// 写回已有记录：版本列不匹配返回 `VersionConflict`；成功后版本 +1
    async fn save(&self, record: R) -> DomainResult<R>;

    /// 按标识删除；记录存在且被删除时返回 `true`
    async fn delete_by_id(&self, id: &R::Id) -> DomainResult<bool>;

    /// 存在性检查
    async fn exists_by_id(&self, id: &R::Id) -> DomainResult<bool>;
}

#[async_trait]
impl<R, T> RecordStore<R> for Arc<T>
where
    R: Resource + 'static,
    T: RecordStore<R> + ?Sized,
{
    async fn find_by_id(&self, id: &R::Id) -> DomainResult<Option<R>> {
        (**self).find_by_id(id).await
    }

    async fn scan(&self, filter: ScanFilter<R>, page: PageRequest) -> DomainResult<Page<R>> {
        (**self).scan(filter, page).await
    }

    async fn insert(&self, record: R) -> DomainResult<R> {
        (**self).insert(record).await
    }

    async fn save(&self, record: R) -> DomainResult<R> {
        (**self).save(record).await
    }

    async fn delete_by_id(&self, id: &R::Id) -> DomainResult<bool> {
        (**self).delete_by_id(id).await
    }

    async fn exists_by_id(&self, id: &R::Id) -> DomainResult<bool> {
        (**self).exists_by_id(id).await
    }
}
