//! 表达式求值器 - 基础设施层
//!
//! 只支持数字、`+ - * /` 与括号。乘除优先于加减，同级从左到右结合。
//!
//! 文法：
//! ```text
//! expr   := term   (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := number | '-' factor | '(' expr ')'
//! ```

use crate::error::ExpressionError;
use crate::models::Operator;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(Operator),
    LParen,
    RParen,
}

/// 算术表达式求值器
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// 计算表达式的值
    ///
    /// # 示例
    /// ```
    /// # use arithmetic_quiz::infrastructure::ExpressionEvaluator;
    /// let value = ExpressionEvaluator::new().eval("12 - (3 * 4)").unwrap();
    /// assert_eq!(value, 0.0);
    /// ```
    pub fn eval(&self, expression: &str) -> Result<f64, ExpressionError> {
        let tokens = tokenize(expression)?;
        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
        };
        let value = parser.expr()?;

        match parser.tokens.get(parser.pos) {
            None => Ok(value),
            Some((Token::RParen, _)) => Err(ExpressionError::UnbalancedParenthesis),
            Some((_, position)) => Err(ExpressionError::UnexpectedToken { position: *position }),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let mut literal = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if c.is_ascii_digit() || c == '.' {
                    literal.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            let value = literal
                .parse::<f64>()
                .map_err(|_| ExpressionError::InvalidNumber(literal.clone()))?;
            tokens.push((Token::Number(value), position));
            continue;
        }

        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => match Operator::from_symbol(ch) {
                Some(op) => Token::Op(op),
                None => return Err(ExpressionError::UnexpectedChar { ch, position }),
            },
        };
        tokens.push((token, position));
        chars.next();
    }

    Ok(tokens)
}

/// 括号与一元负号的最大嵌套层数
pub const MAX_NESTING_DEPTH: usize = 64;

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(token, _)| *token)
    }

    fn next(&mut self) -> Option<(Token, usize)> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn enter(&mut self) -> Result<(), ExpressionError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ExpressionError::NestingTooDeep {
                max: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn expr(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.term()?;
        while let Some(Token::Op(op)) = self.peek() {
            if !op.is_additive() {
                break;
            }
            self.pos += 1;
            let rhs = self.term()?;
            value = apply(op, value, rhs)?;
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.factor()?;
        while let Some(Token::Op(op)) = self.peek() {
            if !op.is_multiplicative() {
                break;
            }
            self.pos += 1;
            let rhs = self.factor()?;
            value = apply(op, value, rhs)?;
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, ExpressionError> {
        match self.next() {
            Some((Token::Number(value), _)) => Ok(value),
            Some((Token::Op(Operator::Subtract), _)) => {
                self.enter()?;
                let value = -self.factor()?;
                self.depth -= 1;
                Ok(value)
            }
            Some((Token::LParen, _)) => {
                self.enter()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.next() {
                    Some((Token::RParen, _)) => Ok(value),
                    _ => Err(ExpressionError::UnbalancedParenthesis),
                }
            }
            Some((Token::RParen, _)) => Err(ExpressionError::UnbalancedParenthesis),
            Some((_, position)) => Err(ExpressionError::UnexpectedToken { position }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}

fn apply(op: Operator, lhs: f64, rhs: f64) -> Result<f64, ExpressionError> {
    op.apply(lhs, rhs).ok_or(ExpressionError::DivisionByZero)
}
