use std::str::FromStr;

use crate::error::AppError;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Difficulty {
    /// 简单：两个一位数
    Easy = 1,
    /// 普通：两个两位数
    Normal = 2,
    /// 困难：三个三位数
    Hard = 3,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// 获取等级编号
    pub fn level(self) -> u8 {
        self as u8
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// 每个操作数的位数
    pub fn digits(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }

    /// 操作数个数
    pub fn operand_count(self) -> usize {
        match self {
            Difficulty::Easy | Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }

    /// 第二个操作数是否必须非零
    pub fn requires_non_zero_divisor(self) -> bool {
        !matches!(self, Difficulty::Normal)
    }

    /// 从等级编号解析
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Normal),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = AppError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or_else(|| AppError::invalid_difficulty(level))
    }
}

/// 支持 "1" / "2" / "3" 以及 easy / normal / hard
impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(level) = trimmed.parse::<i64>() {
            return Self::try_from(level);
        }
        match trimmed.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(AppError::invalid_difficulty(s)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
