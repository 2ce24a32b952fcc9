//! 乐观并发守卫
//!
//! 以版本计数而非加锁的方式检测并发冲突：写入方携带其读取时观察到的版本，
//! 与当前版本不一致即拒绝写入，由调用方重新读取后重试。
//!
use crate::error::{DomainError, DomainResult};
use crate::value_object::Version;

/// 比较当前版本与调用方观察到的版本
///
/// 一致返回 `Ok(())`；不一致返回 [`DomainError::VersionConflict`]，
/// 携带双方版本号以便调用方决策重试。
pub fn verify_version(current: Version, expected: Version) -> DomainResult<()> {
    if current == expected {
        Ok(())
    } else {
        Err(DomainError::VersionConflict {
            expected: expected.value(),
            actual: current.value(),
        })
    }
}
