//! 判分服务 - 业务能力层
//!
//! 从题目文本中取出表达式，重新求值后与提交的答案比较

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::ExpressionEvaluator;
use crate::utils::logging::truncate_text;

lazy_static! {
    static ref QUESTION_PATTERN: Regex = Regex::new(r"What is\s+(.*)\?").expect("invalid question pattern");
}

/// 判分服务
#[derive(Debug, Clone)]
pub struct AnswerValidator {
    evaluator: ExpressionEvaluator,
    tolerance: f64,
    precision: u32,
}

impl AnswerValidator {
    /// 按配置创建，误差或小数位数非法时返回 `ConfigError`
    pub fn new(config: &Config) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            evaluator: ExpressionEvaluator::new(),
            tolerance: config.answer_tolerance,
            precision: config.answer_precision,
        })
    }

    /// 判断答案是否正确，题目格式或表达式有误时返回 false
    pub fn is_correct(&self, question: &str, answer: f64) -> bool {
        match self.check(question, answer) {
            Ok(correct) => correct,
            Err(AppError::Question(_)) => {
                error!("题目格式错误: {}", truncate_text(question, 80));
                false
            }
            Err(e) => {
                warn!("无法计算题目 '{}' 的答案: {}", truncate_text(question, 80), e);
                false
            }
        }
    }

    /// 判断答案是否正确，返回具体错误
    pub fn check(&self, question: &str, answer: f64) -> AppResult<bool> {
        let expression = extract_expression(question)?;
        let expected = round_to(self.evaluator.eval(expression)?, self.precision);
        Ok((expected - answer).abs() <= self.tolerance)
    }
}

impl Default for AnswerValidator {
    fn default() -> Self {
        let config = Config::default();
        Self {
            evaluator: ExpressionEvaluator::new(),
            tolerance: config.answer_tolerance,
            precision: config.answer_precision,
        }
    }
}

/// 从 `What is <expr>?` 中取出 `<expr>`
pub fn extract_expression(question: &str) -> AppResult<&str> {
    QUESTION_PATTERN
        .captures(question)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| AppError::malformed_question(question))
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(precision as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExpressionError, QuestionError};

    #[test]
    fn test_extract_expression() {
        assert_eq!(extract_expression("What is 6 / 2?").unwrap(), "6 / 2");
        assert_eq!(extract_expression("What is   (4 * 5) + 6?").unwrap(), "(4 * 5) + 6");
        assert!(extract_expression("malformed text").is_err());
    }

    #[test]
    fn test_tolerance() {
        let validator = AnswerValidator::default();
        assert!(validator.is_correct("What is 6 / 2?", 3.0));
        assert!(validator.is_correct("What is 6 / 2?", 3.005));
        assert!(!validator.is_correct("What is 6 / 2?", 3.02));
        assert!(!validator.is_correct("What is 6 / 2?", 2.0));
    }

    #[test]
    fn test_rounds_expected_value() {
        let validator = AnswerValidator::default();
        // 10 / 3 = 3.333... 保留两位小数为 3.33
        assert!(validator.is_correct("What is 10 / 3?", 3.33));
        assert!(validator.is_correct("What is 10 / 3?", 3.335));
        assert!(!validator.is_correct("What is 10 / 3?", 3.35));
    }

    #[test]
    fn test_malformed_fails_closed() {
        let validator = AnswerValidator::default();
        assert!(!validator.is_correct("malformed text", 5.0));
        match validator.check("malformed text", 5.0) {
            Err(AppError::Question(QuestionError::MalformedQuestionFormat { text })) => {
                assert_eq!(text, "malformed text")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bad_expression_fails_closed() {
        let validator = AnswerValidator::default();
        assert!(!validator.is_correct("What is 5 / 0?", 0.0));
        assert!(!validator.is_correct("What is rm -rf?", 0.0));
    }

    #[test]
    fn test_custom_tolerance() {
        let config = Config {
            answer_tolerance: 0.5,
            ..Config::default()
        };
        let validator = AnswerValidator::new(&config).unwrap();
        assert!(validator.is_correct("What is 6 / 2?", 3.4));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let precision = Config {
            answer_precision: 400,
            ..Config::default()
        };
        assert!(matches!(AnswerValidator::new(&precision), Err(AppError::Config(_))));

        let tolerance = Config {
            answer_tolerance: -0.01,
            ..Config::default()
        };
        assert!(matches!(AnswerValidator::new(&tolerance), Err(AppError::Config(_))));
    }

    #[test]
    fn test_deep_nesting_fails_closed() {
        let validator = AnswerValidator::default();
        for depth in [65, 2000, 200_000] {
            let parens = format!("What is {}1{}?", "(".repeat(depth), ")".repeat(depth));
            assert!(!validator.is_correct(&parens, 1.0));
            assert!(matches!(
                validator.check(&parens, 1.0),
                Err(AppError::Expression(ExpressionError::NestingTooDeep { .. }))
            ));

            let negations = format!("What is {}1?", "-".repeat(depth));
            assert!(!validator.is_correct(&negations, 1.0));
            assert!(!validator.is_correct(&negations, -1.0));
        }
    }
}
