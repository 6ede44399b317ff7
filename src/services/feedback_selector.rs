//! 反馈语服务 - 业务能力层

use crate::infrastructure::Random;

/// (答对, 答错) 反馈语
pub const PROMPT_PAIRS: [(&str, &str); 3] = [
    ("Correct!", "Incorrect. Try again!"),
    ("Great job!", "Oops! Try again!"),
    ("Awesome!", "Not quite. Try again!"),
];

/// 反馈语服务
///
/// 每次独立随机选择一组反馈语，与具体题目无关
#[derive(Debug, Default, Clone, Copy)]
pub struct FeedbackSelector;

impl FeedbackSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn pick(&self, random: &mut impl Random, is_correct: bool) -> &'static str {
        let (positive, negative) = PROMPT_PAIRS[random.uniform_index(PROMPT_PAIRS.len())];
        if is_correct {
            positive
        } else {
            negative
        }
    }
}
