use serde::{Deserialize, Serialize};
use std::fmt;

/// 产品品类
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    #[default]
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductCategory::Lager => "lager",
            ProductCategory::Pilsner => "pilsner",
            ProductCategory::Stout => "stout",
            ProductCategory::Gose => "gose",
            ProductCategory::Porter => "porter",
            ProductCategory::Ale => "ale",
            ProductCategory::Wheat => "wheat",
            ProductCategory::Ipa => "ipa",
            ProductCategory::PaleAle => "pale ale",
            ProductCategory::Saison => "saison",
        };
        f.write_str(label)
    }
}
