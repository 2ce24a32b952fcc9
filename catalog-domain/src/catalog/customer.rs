//! 客户资源（Customer）
use crate::error::{DomainError, DomainResult};
use crate::filter::{contains_ignore_case, has_text};
use crate::resource::Resource;
use bon::Builder;
use catalog_macros::{entity, entity_id};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 客户标识
#[entity_id]
pub struct CustomerId(Uuid);

/// 客户记录
#[entity(id = CustomerId)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
pub struct CustomerDraft {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
pub struct CustomerPatch {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
pub struct CustomerFilter {
    pub name: Option<String>,
}

impl Resource for Customer {
    const TYPE: &'static str = "customer";

    type Draft = CustomerDraft;
    type Patch = CustomerPatch;
    type Filter = CustomerFilter;

    fn replace_with(&mut self, draft: CustomerDraft) {
        self.name = draft.name;
    }

    fn merge(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            if has_text(&name) {
                self.name = name;
            }
        }
    }

    fn matches(&self, filter: &CustomerFilter) -> bool {
        match filter.name.as_deref().filter(|n| has_text(n)) {
            Some(needle) => contains_ignore_case(&self.name, needle),
            None => true,
        }
    }

    fn validate(&self) -> DomainResult<()> {
        if !has_text(&self.name) {
            return Err(DomainError::Validation {
                field: "name",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
