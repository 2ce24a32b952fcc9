use catalog_domain::error::DomainError;

/// 应用层错误分类
///
/// 传输层按分类翻译：校验失败 → 400，版本冲突 → 409；
/// 其余领域/基础设施错误原样向上传播，不在本层解释。
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("validation: field={field}, reason={reason}")]
    Validation { field: &'static str, reason: String },

    #[error("conflict: expected={expected}, actual={actual}")]
    Conflict { expected: usize, actual: usize },

    #[error("domain: {0}")]
    Domain(DomainError),
}

/// 统一 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, reason } => AppError::Validation { field, reason },
            DomainError::VersionConflict { expected, actual } => {
                AppError::Conflict { expected, actual }
            }
            other => AppError::Domain(other),
        }
    }
}
