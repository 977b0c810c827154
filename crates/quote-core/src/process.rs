//! 製程模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MaterialCostItem, MaterialCostSetting, PackagingCostItem, Percent};

/// 每小時秒數
const SECONDS_PER_HOUR: u32 = 3600;

/// 製程類別
///
/// 反序列化接受任何字串；無法識別的代碼保留在 `Unrecognized` 中，
/// 由成本彙總時回報錯誤。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProcessCategory {
    /// 廠內成型
    InHouseMolding,
    /// 委外成型
    OutsourcedMolding,
    /// 廠內後製程
    InHousePost,
    /// 委外後製程
    OutsourcedPost,
    /// 廠內出貨檢驗
    InHouseInspection,
    /// 無法識別的類別代碼
    Unrecognized(String),
}

impl ProcessCategory {
    /// 類別代碼
    pub fn code(&self) -> &str {
        match self {
            Self::InHouseMolding => "IN_HOUSE_MOLDING",
            Self::OutsourcedMolding => "OUTSOURCED_MOLDING",
            Self::InHousePost => "IN_HOUSE_POST",
            Self::OutsourcedPost => "OUTSOURCED_POST",
            Self::InHouseInspection => "IN_HOUSE_INSPECTION",
            Self::Unrecognized(code) => code,
        }
    }

    /// 是否為可計算的類別
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for ProcessCategory {
    fn from(code: String) -> Self {
        match code.as_str() {
            "IN_HOUSE_MOLDING" => Self::InHouseMolding,
            "OUTSOURCED_MOLDING" => Self::OutsourcedMolding,
            "IN_HOUSE_POST" => Self::InHousePost,
            "OUTSOURCED_POST" => Self::OutsourcedPost,
            "IN_HOUSE_INSPECTION" => Self::InHouseInspection,
            _ => Self::Unrecognized(code),
        }
    }
}

impl From<&str> for ProcessCategory {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<ProcessCategory> for String {
    fn from(category: ProcessCategory) -> Self {
        match category {
            ProcessCategory::Unrecognized(code) => code,
            other => other.code().to_string(),
        }
    }
}

impl fmt::Display for ProcessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 成型參數（不良率與稼動率以整數百分比填寫）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoldingCostConfig {
    /// 不良率（%）
    pub defective_rate: Decimal,

    /// 成型週期（秒）
    pub cycle_time: Decimal,

    /// 包裝時間（秒）
    pub package_time: Decimal,

    /// 模穴數
    pub mold_cavity: u32,

    /// 稼動率（%）
    pub work_hours_ratio: Decimal,

    /// 機台八小時試模單價，未設定時使用配置預設值
    pub unit_price: Option<Decimal>,

    /// 每秒電費
    pub electricity_cost_per_second: Option<Decimal>,
}

impl MoldingCostConfig {
    /// 創建新的成型參數
    pub fn new(
        defective_rate: Decimal,
        cycle_time: Decimal,
        package_time: Decimal,
        mold_cavity: u32,
        work_hours_ratio: Decimal,
    ) -> Self {
        Self {
            defective_rate,
            cycle_time,
            package_time,
            mold_cavity,
            work_hours_ratio,
            unit_price: None,
            electricity_cost_per_second: None,
        }
    }

    /// 建構器模式：設置試模單價
    pub fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// 建構器模式：設置每秒電費
    pub fn with_electricity_cost_per_second(mut self, cost: Decimal) -> Self {
        self.electricity_cost_per_second = Some(cost);
        self
    }

    pub fn defect_rate(&self) -> Percent {
        Percent::from_whole(self.defective_rate)
    }

    pub fn work_ratio(&self) -> Percent {
        Percent::from_whole(self.work_hours_ratio)
    }
}

/// 後製程參數
///
/// 廠內後製程使用 `work_second` 與時薪 `unit_price`；
/// 委外與檢驗直接以 `unit_price` 作為單次費用。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostProcessingConfig {
    /// 工時（秒）
    pub work_second: Option<Decimal>,

    /// 單價（廠內為時薪）
    pub unit_price: Option<Decimal>,
}

impl PostProcessingConfig {
    /// 廠內後製程
    pub fn in_house(work_second: Decimal, price_per_hour: Decimal) -> Self {
        Self {
            work_second: Some(work_second),
            unit_price: Some(price_per_hour),
        }
    }

    /// 委外或檢驗的單次費用
    pub fn flat(unit_price: Decimal) -> Self {
        Self {
            work_second: None,
            unit_price: Some(unit_price),
        }
    }

    /// 工時（小時）
    pub fn labor_hours(&self) -> Option<Decimal> {
        self.work_second
            .map(|seconds| seconds / Decimal::from(SECONDS_PER_HOUR))
    }
}

/// 製程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// 製程ID
    pub id: String,

    /// 製程類別
    pub process_category: ProcessCategory,

    /// 原料成本設定
    #[serde(default)]
    pub material_cost_setting: MaterialCostSetting,

    /// 原料明細
    #[serde(default)]
    pub materials: Vec<MaterialCostItem>,

    /// 包材明細
    #[serde(default)]
    pub packaging: Vec<PackagingCostItem>,

    /// 成型參數
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molding: Option<MoldingCostConfig>,

    /// 後製程參數
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_processing: Option<PostProcessingConfig>,
}

impl Process {
    /// 創建新的製程
    pub fn new(id: impl Into<String>, process_category: ProcessCategory) -> Self {
        Self {
            id: id.into(),
            process_category,
            material_cost_setting: MaterialCostSetting::default(),
            materials: Vec::new(),
            packaging: Vec::new(),
            molding: None,
            post_processing: None,
        }
    }

    /// 建構器模式：設置原料成本設定
    pub fn with_material_cost_setting(mut self, setting: MaterialCostSetting) -> Self {
        self.material_cost_setting = setting;
        self
    }

    /// 建構器模式：設置原料明細
    pub fn with_materials(mut self, materials: Vec<MaterialCostItem>) -> Self {
        self.materials = materials;
        self
    }

    /// 建構器模式：設置包材明細
    pub fn with_packaging(mut self, packaging: Vec<PackagingCostItem>) -> Self {
        self.packaging = packaging;
        self
    }

    /// 建構器模式：設置成型參數
    pub fn with_molding(mut self, molding: MoldingCostConfig) -> Self {
        self.molding = Some(molding);
        self
    }

    /// 建構器模式：設置後製程參數
    pub fn with_post_processing(mut self, post_processing: PostProcessingConfig) -> Self {
        self.post_processing = Some(post_processing);
        self
    }
}
