//! 基础设施层
//!
//! - `random` - 随机数来源，测试时可替换为固定序列
//! - `evaluator` - 算术表达式求值，只认识数字与 `+ - * / ( )`

pub mod evaluator;
pub mod random;

pub use evaluator::ExpressionEvaluator;
pub use random::{DefaultRandom, Random};
