use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 题目相关错误
    Question(QuestionError),
    /// 表达式求值错误
    Expression(ExpressionError),
    /// 配置错误
    Config(ConfigError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Question(e) => write!(f, "题目错误: {}", e),
            AppError::Expression(e) => write!(f, "表达式错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Question(e) => Some(e),
            AppError::Expression(e) => Some(e),
            AppError::Config(e) => Some(e),
        }
    }
}

/// 题目错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    /// 难度等级不在 {1, 2, 3} 之内
    InvalidDifficulty { level: String },
    /// 题目文本不符合 "What is ...?" 模板
    MalformedQuestionFormat { text: String },
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionError::InvalidDifficulty { level } => {
                write!(f, "无效的难度等级: {}", level)
            }
            QuestionError::MalformedQuestionFormat { text } => {
                write!(f, "题目格式错误: {}", text)
            }
        }
    }
}

impl std::error::Error for QuestionError {}

/// 表达式求值错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpressionError {
    #[error("位置 {position} 处出现非法字符 '{ch}'")]
    UnexpectedChar { ch: char, position: usize },
    #[error("位置 {position} 处出现多余的记号")]
    UnexpectedToken { position: usize },
    #[error("表达式意外结束")]
    UnexpectedEnd,
    #[error("括号不匹配")]
    UnbalancedParenthesis,
    #[error("无法解析数字: {0}")]
    InvalidNumber(String),
    #[error("除数为零")]
    DivisionByZero,
    #[error("嵌套超过 {max} 层")]
    NestingTooDeep { max: usize },
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置项取值非法
    InvalidValue { field: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { field, value } => {
                write!(f, "配置项 {} 的取值 '{}' 非法", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========

impl From<QuestionError> for AppError {
    fn from(err: QuestionError) -> Self {
        AppError::Question(err)
    }
}

impl From<ExpressionError> for AppError {
    fn from(err: ExpressionError) -> Self {
        AppError::Expression(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建难度等级错误
    pub fn invalid_difficulty(level: impl ToString) -> Self {
        AppError::Question(QuestionError::InvalidDifficulty {
            level: level.to_string(),
        })
    }

    /// 创建题目格式错误
    pub fn malformed_question(text: impl Into<String>) -> Self {
        AppError::Question(QuestionError::MalformedQuestionFormat { text: text.into() })
    }

    /// 创建配置取值错误
    pub fn invalid_config(field: impl Into<String>, value: impl ToString) -> Self {
        AppError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
        })
    }

    /// 是否为难度等级错误
    pub fn is_invalid_difficulty(&self) -> bool {
        matches!(
            self,
            AppError::Question(QuestionError::InvalidDifficulty { .. })
        )
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
