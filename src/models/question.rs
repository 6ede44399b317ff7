use serde::{Deserialize, Serialize};

/// 一道生成好的题目：题目文本 + 正确答案
///
/// 生成后不可修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    answer: i64,
}

impl Question {
    pub(crate) fn new(text: String, answer: i64) -> Self {
        Self { text, answer }
    }

    /// 题目文本，形如 `What is 6 / 2?`
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 正确答案
    pub fn answer(&self) -> i64 {
        self.answer
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [答案: {}]", self.text, self.answer)
    }
}
