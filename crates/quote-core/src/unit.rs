//! 計量單位分類

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::QuoteError;

/// 單位類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    /// 依重量計價（單價以公斤計，重量以公克填寫）
    Weight,
    /// 依件數計價
    Count,
}

/// 原料單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialUnit {
    /// kg
    Kilogram,
    /// g
    Gram,
    /// pcs
    Pieces,
    /// set
    Set,
    /// 件
    Item,
    /// 個
    Each,
}

impl MaterialUnit {
    /// 所屬類別
    pub fn class(self) -> UnitClass {
        match self {
            Self::Kilogram | Self::Gram | Self::Pieces | Self::Set => UnitClass::Weight,
            Self::Item | Self::Each => UnitClass::Count,
        }
    }

    /// 表單使用的單位代碼
    pub fn code(self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Gram => "g",
            Self::Pieces => "pcs",
            Self::Set => "set",
            Self::Item => "件",
            Self::Each => "個",
        }
    }
}

impl FromStr for MaterialUnit {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "kg" => Ok(Self::Kilogram),
            "g" => Ok(Self::Gram),
            "pcs" => Ok(Self::Pieces),
            "set" => Ok(Self::Set),
            "件" => Ok(Self::Item),
            "個" => Ok(Self::Each),
            _ => Err(QuoteError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for MaterialUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 包材容量單位（依容量分攤計價）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapacityUnit {
    /// 公斤
    Kilogram,
    /// 磅
    Pound,
}

impl CapacityUnit {
    /// 解析容量單位，非容量單位回傳 None
    pub fn parse(unit: &str) -> Option<Self> {
        match unit.trim() {
            "公斤" => Some(Self::Kilogram),
            "磅" => Some(Self::Pound),
            _ => None,
        }
    }
}
