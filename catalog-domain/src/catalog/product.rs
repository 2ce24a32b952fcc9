//! 产品资源（Product）
//!
//! 目录中的可售产品：名称、品类、外部编码、价格与可选库存数量。
//! 库存数量使用无符号整数，非负性由类型保证；价格的非负性在校验中约束。
//!
use crate::catalog::ProductCategory;
use crate::error::{DomainError, DomainResult};
use crate::filter::{contains_ignore_case, has_text};
use crate::resource::Resource;
use bon::Builder;
use catalog_macros::{entity, entity_id};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 产品名称长度上限
pub const PRODUCT_NAME_MAX_LEN: usize = 50;

/// 产品标识
#[entity_id]
pub struct ProductId(Uuid);

/// 产品记录
#[entity(id = ProductId)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: ProductCategory,
    pub code: String,
    pub price: Decimal,
    pub quantity_on_hand: Option<u32>,
}

/// 创建/全量更新候选
///
/// 全量更新时每个字段无条件覆盖既有记录；`quantity_on_hand` 缺省即清空库存。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
pub struct ProductDraft {
    pub name: String,
    pub category: ProductCategory,
    pub code: String,
    pub price: Decimal,
    pub quantity_on_hand: Option<u32>,
}

/// 部分更新补丁
///
/// `None` 表示保持原值；字符串字段提供空白值亦保持原值。
/// 补丁无法清空可选字段，清空属于全量更新的职责。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<ProductCategory>,
    pub code: Option<String>,
    pub price: Option<Decimal>,
    pub quantity_on_hand: Option<u32>,
}

/// 列表过滤维度：名称子串（忽略大小写）与品类等值，并存时取交集
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<ProductCategory>,
}

impl Resource for Product {
    const TYPE: &'static str = "product";

    type Draft = ProductDraft;
    type Patch = ProductPatch;
    type Filter = ProductFilter;

    fn replace_with(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.code = draft.code;
        self.price = draft.price;
        self.quantity_on_hand = draft.quantity_on_hand;
    }

    fn merge(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            if has_text(&name) {
                self.name = name;
            }
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(code) = patch.code {
            if has_text(&code) {
                self.code = code;
            }
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity_on_hand {
            self.quantity_on_hand = Some(quantity);
        }
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        let name_hit = match filter.name.as_deref().filter(|n| has_text(n)) {
            Some(needle) => contains_ignore_case(&self.name, needle),
            None => true,
        };
        let category_hit = filter.category.is_none_or(|c| self.category == c);
        name_hit && category_hit
    }

    fn validate(&self) -> DomainResult<()> {
        if !has_text(&self.name) {
            return Err(DomainError::Validation {
                field: "name",
                reason: "must not be blank".to_string(),
            });
        }
        if self.name.chars().count() > PRODUCT_NAME_MAX_LEN {
            return Err(DomainError::Validation {
                field: "name",
                reason: format!("exceeds max length {PRODUCT_NAME_MAX_LEN}"),
            });
        }
        if !has_text(&self.code) {
            return Err(DomainError::Validation {
                field: "code",
                reason: "must not be blank".to_string(),
            });
        }
        if self.price.is_sign_negative() {
            return Err(DomainError::Validation {
                field: "price",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn conceal_quantity(&mut self) {
        self.quantity_on_hand = None;
    }
}
