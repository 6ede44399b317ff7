//! 出题服务 - 业务能力层
//!
//! 只负责"生成一道题"，不关心判分与反馈

use tracing::debug;

use crate::error::AppResult;
use crate::infrastructure::{ExpressionEvaluator, Random};
use crate::models::{Difficulty, Operator, Question};
use crate::services::expression_formatter::{format_expression, format_question};

/// 出题服务
///
/// 职责：
/// - 按难度生成操作数与运算符
/// - 保证所有除法都能整除
/// - 通过求值题目文本得到正确答案
#[derive(Debug, Default, Clone, Copy)]
pub struct QuestionGenerator {
    evaluator: ExpressionEvaluator,
}

impl QuestionGenerator {
    pub fn new() -> Self {
        Self {
            evaluator: ExpressionEvaluator::new(),
        }
    }

    /// 生成一道题
    ///
    /// # 参数
    /// - `random`: 随机数来源
    /// - `difficulty`: 难度等级
    ///
    /// # 返回
    /// 返回题目文本与四舍五入到整数的正确答案
    pub fn generate(&self, random: &mut impl Random, difficulty: Difficulty) -> AppResult<Question> {
        let digits = difficulty.digits();

        let expression = match difficulty {
            Difficulty::Easy | Difficulty::Normal => {
                let b = if difficulty.requires_non_zero_divisor() {
                    random_non_zero_int(random, digits)
                } else {
                    random_int(random, digits)
                };
                let op = random_operator(random);
                let a = dividend(random, b, op, digits);
                format_expression(a, op, b, None)
            }
            Difficulty::Hard => {
                let b = random_non_zero_int(random, digits);
                let op1 = random_operator(random);
                let a = dividend(random, b, op1, digits);
                let op2 = random_operator(random);
                let c = if op2 == Operator::Divide {
                    // 文本 `a op1 (b / c)` 中 c 只除 b，其余情况除的是 `a op1 b`
                    let target = if op1.is_additive() {
                        b
                    } else {
                        self.evaluator.eval(&format_expression(a, op1, b, None))? as i64
                    };
                    non_trivial_divisor(random, target)
                } else {
                    random_non_zero_int(random, digits)
                };
                format_expression(a, op1, b, Some((op2, c)))
            }
        };

        let answer = self.evaluator.eval(&expression)?.round() as i64;
        let question = Question::new(format_question(&expression), answer);
        debug!("生成题目: {} 答案: {}", question.text(), answer);

        Ok(question)
    }
}

/// 恰好 `digits` 位的随机整数，取值范围 [10^(digits-1), 10^digits - 1]
pub fn random_int(random: &mut impl Random, digits: u32) -> i64 {
    let min = 10_i64.pow(digits - 1);
    let max = 10_i64.pow(digits) - 1;
    random.uniform_int(min, max)
}

/// 非零随机整数
pub fn random_non_zero_int(random: &mut impl Random, digits: u32) -> i64 {
    loop {
        let value = random_int(random, digits);
        if value != 0 {
            return value;
        }
    }
}

/// 均匀随机选择运算符
pub fn random_operator(random: &mut impl Random) -> Operator {
    let op = Operator::ALL[random.uniform_index(Operator::ALL.len())];
    debug!("选择运算符: {}", op);
    op
}

/// 被除数：运算符为除法时取除数的整数倍，否则独立随机
pub fn dividend(random: &mut impl Random, divisor: i64, op: Operator, digits: u32) -> i64 {
    if op == Operator::Divide {
        divisor * random_int(random, digits)
    } else {
        random_int(random, digits)
    }
}

/// 一位数的非平凡除数：能整除 `number` 且商不小于 1
///
/// 在 1..=9 中随机重试直到满足条件；`number` 小于 1 时没有这样的除数，返回 1
pub fn non_trivial_divisor(random: &mut impl Random, number: i64) -> i64 {
    if number < 1 {
        return 1;
    }

    loop {
        let divisor = random_non_zero_int(random, 1);
        if number % divisor == 0 && number / divisor >= 1 {
            return divisor;
        }
    }
}
