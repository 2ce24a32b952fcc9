//! 资源能力契约（Resource）
//!
//! 约束一个目录资源参与五类操作所需的能力：
//! - `replace_with` 全量替换：候选的每个可变字段无条件覆盖，含清空；
//! - `merge` 字段合并：仅覆盖补丁中有效提供的字段，逐字段独立；
//! - `matches` 过滤匹配：名称子串与品类等值的交集；
//! - `validate` 入库前校验：失败则存储不发生任何变更。
//!
//! 通用资源服务对该契约做泛型编排，避免按资源类型复制服务实现。
//!
use crate::entity::Entity;
use crate::error::DomainResult;

/// 资源接口
pub trait Resource: Entity + Clone + Default {
    /// 资源类型名（用于日志与存储诊断信息）
    const TYPE: &'static str;

    /// 创建/全量更新候选：可变字段齐备，可选字段缺省即清空
    type Draft: Send + Sync + 'static;
    /// 部分更新补丁：未提供的字段保持原值
    type Patch: Send + Sync + 'static;
    /// 列表过滤维度
    type Filter: Default + Send + Sync + 'static;

    /// 以候选覆盖全部可变字段；标识、版本与时间戳不受候选影响
    fn replace_with(&mut self, draft: Self::Draft);

    /// 逐字段合并补丁：字符串字段要求非空白，其余字段要求有值
    fn merge(&mut self, patch: Self::Patch);

    /// 判断记录是否命中过滤条件；维度并存时取交集
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// 入库前校验记录当前状态
    fn validate(&self) -> DomainResult<()>;

    /// 资源名称，同时是列表的固定排序键
    fn name(&self) -> &str;

    /// 从候选构建未入库记录（标识与版本由存储层随后分配）
    fn from_draft(draft: Self::Draft) -> Self {
        let mut record = Self::default();
        record.replace_with(draft);
        record
    }

    /// 从列表投影中隐藏库存数量；无库存概念的资源保持原样
    fn conceal_quantity(&mut self) {}
}
