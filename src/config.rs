use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// 出题引擎配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 随机数种子，为空时使用系统熵
    pub seed: Option<u64>,
    /// 判分的绝对误差
    pub answer_tolerance: f64,
    /// 判分前正确答案保留的小数位数
    pub answer_precision: u32,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            answer_tolerance: 0.01,
            answer_precision: 2,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置或无法解析的变量使用默认值
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        let config = Self {
            seed: std::env::var("QUIZ_SEED").ok().and_then(|v| v.parse().ok()).or(default.seed),
            answer_tolerance: std::env::var("ANSWER_TOLERANCE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.answer_tolerance),
            answer_precision: std::env::var("ANSWER_PRECISION").ok().and_then(|v| v.parse().ok()).unwrap_or(default.answer_precision),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        };
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置取值
    pub fn validate(&self) -> AppResult<()> {
        if !self.answer_tolerance.is_finite() || self.answer_tolerance < 0.0 {
            return Err(AppError::invalid_config("answer_tolerance", self.answer_tolerance));
        }
        if self.answer_precision > 10 {
            return Err(AppError::invalid_config("answer_precision", self.answer_precision));
        }
        Ok(())
    }
}
