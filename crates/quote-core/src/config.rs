//! 報價計算配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{QuoteError, Result};

/// 報價計算參數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteConfig {
    /// 機台八小時試模單價（成型參數未設定單價時使用）
    pub default_trial_mold_price: Decimal,

    /// 班次長度（秒）
    pub shift_seconds: Decimal,

    /// 每趟司機工時
    pub driver_work_hours: Decimal,

    /// 製程數量達到此值時改用並行計算
    pub parallel_threshold: usize,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            default_trial_mold_price: Decimal::from(3000),
            shift_seconds: Decimal::from(60 * 60 * 8),
            driver_work_hours: Decimal::new(3, 1),
            parallel_threshold: 16,
        }
    }
}

impl QuoteConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 載入配置，未填欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| QuoteError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置試模單價
    pub fn with_default_trial_mold_price(mut self, price: Decimal) -> Self {
        self.default_trial_mold_price = price;
        self
    }

    /// 建構器模式：設置班次長度
    pub fn with_shift_seconds(mut self, seconds: Decimal) -> Self {
        self.shift_seconds = seconds;
        self
    }

    /// 建構器模式：設置司機工時
    pub fn with_driver_work_hours(mut self, hours: Decimal) -> Self {
        self.driver_work_hours = hours;
        self
    }

    /// 建構器模式：設置並行門檻
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// 檢查配置
    pub fn validate(&self) -> Result<()> {
        if self.shift_seconds <= Decimal::ZERO {
            return Err(QuoteError::InvalidConfig(format!(
                "班次長度必須大於 0: {}",
                self.shift_seconds
            )));
        }
        if self.default_trial_mold_price < Decimal::ZERO {
            return Err(QuoteError::InvalidConfig(format!(
                "試模單價不可為負: {}",
                self.default_trial_mold_price
            )));
        }
        if self.driver_work_hours < Decimal::ZERO {
            return Err(QuoteError::InvalidConfig(format!(
                "司機工時不可為負: {}",
                self.driver_work_hours
            )));
        }
        Ok(())
    }

    /// 數量是否達到並行門檻
    pub fn should_parallelize(&self, count: usize) -> bool {
        count >= self.parallel_threshold.max(1)
    }
}
