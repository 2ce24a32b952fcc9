//! 通用资源服务（Resource Service）
//!
//! 将分页归一化、过滤谓词、可见性投影、更新合并与乐观并发守卫编排为
//! 五类操作。按资源能力契约（[`Resource`]）泛型实现一次，
//! 经类型别名按资源类型特化，避免按类型复制服务。
//!
use crate::error::{AppError, AppResult};
use catalog_domain::catalog::{Customer, Product};
use catalog_domain::concurrency::verify_version;
use catalog_domain::entity::Entity;
use catalog_domain::page::{Page, PageRequest};
use catalog_domain::persist::{RecordStore, ScanFilter};
use catalog_domain::resource::Resource;
use catalog_domain::value_object::Version;
use std::marker::PhantomData;

/// 产品资源服务
pub type ProductService<S> = ResourceService<Product, S>;
/// 客户资源服务
pub type CustomerService<S> = ResourceService<Customer, S>;

/// 按资源类型特化的五类操作编排器；自身无状态，可随意克隆注入
pub struct ResourceService<R, S>
where
    R: Resource,
    S: RecordStore<R>,
{
    store: S,
    _resource: PhantomData<R>,
}

impl<R, S> ResourceService<R, S>
where
    R: Resource,
    S: RecordStore<R>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _resource: PhantomData,
        }
    }

    /// 列表：过滤谓词 → 存储扫描 → 归一化窗口 → 可见性投影
    ///
    /// `show_inventory` 显式为 `false` 时清除窗口内每条记录的库存数量；
    /// 投影严格作用于当前窗口，不影响过滤与总数。
    pub async fn list(
        &self,
        filter: R::Filter,
        page_number: Option<usize>,
        page_size: Option<usize>,
        show_inventory: Option<bool>,
    ) -> AppResult<Page<R>> {
        let request = PageRequest::normalize(page_number, page_size);
        let predicate: ScanFilter<R> = Box::new(move |record| record.matches(&filter));
        let mut page = self.store.scan(predicate, request).await?;

        if show_inventory == Some(false) {
            for record in &mut page.items {
                record.conceal_quantity();
            }
        }

        Ok(page)
    }

    /// 按标识读取；不存在即 `Ok(None)`
    pub async fn get_by_id(&self, id: &R::Id) -> AppResult<Option<R>> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// 创建：校验通过后插入，返回入库记录（含分配的标识与初始版本）
    pub async fn create(&self, draft: R::Draft) -> AppResult<R> {
        let record = R::from_draft(draft);
        record.validate()?;
        let stored = self.store.insert(record).await?;
        tracing::info!(resource = R::TYPE, id = %stored.id(), "created");
        Ok(stored)
    }

    /// 全量更新：目标缺失返回 `Ok(None)`
    ///
    /// 携带 `expected_version` 时先做显式并发校验；缺省则沿用
    /// 读取-合并-写回路径，仅由存储层版本列兜底。
    pub async fn update_by_id(
        &self,
        id: &R::Id,
        draft: R::Draft,
        expected_version: Option<Version>,
    ) -> AppResult<Option<R>> {
        let Some(mut record) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };
        Self::check_expected(&record, expected_version)?;

        record.replace_with(draft);
        record.validate()?;
        let saved = self.store.save(record).await?;
        tracing::info!(resource = R::TYPE, id = %saved.id(), version = %saved.version(), "replaced");
        Ok(Some(saved))
    }

    /// 部分更新：字段合并后走与全量更新相同的校验与写回
    pub async fn patch_by_id(
        &self,
        id: &R::Id,
        patch: R::Patch,
        expected_version: Option<Version>,
    ) -> AppResult<Option<R>> {
        let Some(mut record) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };
        Self::check_expected(&record, expected_version)?;

        record.merge(patch);
        record.validate()?;
        let saved = self.store.save(record).await?;
        tracing::info!(resource = R::TYPE, id = %saved.id(), version = %saved.version(), "patched");
        Ok(Some(saved))
    }

    /// 删除：目标缺失返回 `Ok(false)`，存储不发生变更
    pub async fn delete_by_id(&self, id: &R::Id) -> AppResult<bool> {
        if !self.store.exists_by_id(id).await? {
            return Ok(false);
        }
        let removed = self.store.delete_by_id(id).await?;
        if removed {
            tracing::info!(resource = R::TYPE, id = %id, "deleted");
        }
        Ok(removed)
    }

    // 显式并发守卫：调用方观察的版本与当前不一致即拒绝，由其重读后重试
    fn check_expected(record: &R, expected_version: Option<Version>) -> AppResult<()> {
        let Some(expected) = expected_version else {
            return Ok(());
        };
        if let Err(conflict) = verify_version(record.version(), expected) {
            tracing::warn!(
                resource = R::TYPE,
                id = %record.id(),
                expected = expected.value(),
                current = record.version().value(),
                "stale expectation rejected"
            );
            return Err(AppError::from(conflict));
        }
        Ok(())
    }
}
