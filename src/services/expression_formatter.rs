//! 表达式格式化 - 业务能力层
//!
//! 按运算优先级加括号，保证题目文本按常规四则运算求值时与出题时的计算顺序一致

use crate::models::Operator;

/// 题目文本前缀
pub const QUESTION_PREFIX: &str = "What is ";

/// 生成表达式字符串
///
/// - 只有两个操作数时：`a op b`
/// - 先加减后乘除：`a op1 (b op2 c)`
/// - 先乘除后加减：`(a op1 b) op2 c`
/// - 同一优先级：`a op1 b op2 c`
pub fn format_expression(a: i64, op1: Operator, b: i64, tail: Option<(Operator, i64)>) -> String {
    let Some((op2, c)) = tail else {
        return format!("{} {} {}", a, op1, b);
    };

    if op1.is_additive() && op2.is_multiplicative() {
        format!("{} {} ({} {} {})", a, op1, b, op2, c)
    } else if op1.is_multiplicative() && op2.is_additive() {
        format!("({} {} {}) {} {}", a, op1, b, op2, c)
    } else {
        format!("{} {} {} {} {}", a, op1, b, op2, c)
    }
}

/// 包装成完整题目：`What is <expr>?`
pub fn format_question(expression: &str) -> String {
    format!("{}{}?", QUESTION_PREFIX, expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ExpressionEvaluator;
    use Operator::*;

    #[test]
    fn test_two_operands() {
        assert_eq!(format_expression(6, Divide, 2, None), "6 / 2");
        assert_eq!(format_question("6 / 2"), "What is 6 / 2?");
    }

    #[test]
    fn test_additive_then_multiplicative_wraps_tail() {
        assert_eq!(format_expression(1, Add, 2, Some((Multiply, 3))), "1 + (2 * 3)");
        assert_eq!(format_expression(9, Subtract, 8, Some((Divide, 4))), "9 - (8 / 4)");
    }

    #[test]
    fn test_multiplicative_then_additive_wraps_head() {
        assert_eq!(format_expression(4, Multiply, 5, Some((Add, 6))), "(4 * 5) + 6");
        assert_eq!(format_expression(8, Divide, 2, Some((Subtract, 1))), "(8 / 2) - 1");
    }

    #[test]
    fn test_same_precedence_has_no_parentheses() {
        assert_eq!(format_expression(7, Subtract, 2, Some((Add, 1))), "7 - 2 + 1");
        assert_eq!(format_expression(8, Divide, 2, Some((Multiply, 3))), "8 / 2 * 3");
    }

    /// 括号化后的文本按常规优先级求值，应与格式化规则所规定的分组结果一致
    #[test]
    fn test_parenthesization_law() {
        let evaluator = ExpressionEvaluator::new();
        let (a, b, c) = (120.0, 30.0, 6.0);

        for op1 in Operator::ALL {
            for op2 in Operator::ALL {
                let text = format_expression(a as i64, op1, b as i64, Some((op2, c as i64)));
                let actual = evaluator.eval(&text).unwrap();

                let expected = if op1.is_additive() && op2.is_multiplicative() {
                    op1.apply(a, op2.apply(b, c).unwrap()).unwrap()
                } else {
                    op2.apply(op1.apply(a, b).unwrap(), c).unwrap()
                };
                assert_eq!(actual, expected, "表达式: {}", text);
            }
        }
    }
}
