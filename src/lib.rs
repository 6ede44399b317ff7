//! # Arithmetic Quiz
//!
//! 随机生成四则运算题、判分并给出反馈的库
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 随机数来源与表达式求值
//! - `Random` / `DefaultRandom` - 可注入、可设定种子的随机数
//! - `ExpressionEvaluator` - 只认识 `+ - * / ( )` 的求值器
//!
//! ### ② 业务能力层（Services）
//! - `QuestionGenerator` - 按难度出题，保证除法整除
//! - `format_expression` - 按优先级加括号
//! - `AnswerValidator` - 从题目文本取出表达式并判分
//! - `FeedbackSelector` - 随机反馈语
//!
//! ### ③ 流程层（Workflow）
//! - `QuestionEngine` - 持有配置与随机数，组合以上能力
//!
//! ## 示例
//! ```
//! let question = arithmetic_quiz::generate_question(1).unwrap();
//! assert!(arithmetic_quiz::is_correct_answer(question.text(), question.answer() as f64));
//! println!("{}", arithmetic_quiz::get_random_prompt(true));
//! ```

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ExpressionError, QuestionError};
pub use infrastructure::{DefaultRandom, ExpressionEvaluator, Random};
pub use models::{Difficulty, Operator, Question};
pub use workflow::{QuestionEngine, Submission};

/// 按等级（1 简单 / 2 普通 / 3 困难）出题
pub fn generate_question(level: i64) -> AppResult<Question> {
    QuestionEngine::default().generate_question(level)
}

/// 判断提交的答案是否正确，误差 0.01 以内算对
pub fn is_correct_answer(question: &str, answer: f64) -> bool {
    services::AnswerValidator::default().is_correct(question, answer)
}

/// 随机选择一条反馈语
pub fn get_random_prompt(is_correct: bool) -> &'static str {
    QuestionEngine::default().random_prompt(is_correct)
}
