//! 过滤谓词辅助
//!
//! 资源过滤只有两个维度：名称子串（两侧通配、忽略大小写）与品类等值。
//! 本模块提供其中可复用的纯函数；维度组合由各资源的 `matches` 实现完成。
//!
/// 判断字符串是否含有非空白内容
///
/// 同时约定了两处语义：补丁中的空白字符串视为"未提供"，
/// 过滤条件中的空白字符串视为"未过滤"。
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 名称子串匹配：两侧通配、忽略大小写
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
