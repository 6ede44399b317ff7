//! 出题引擎 - 流程层
//!
//! 持有配置与随机数来源，把出题、判分、反馈三项能力组合成对外接口

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{DefaultRandom, Random};
use crate::models::{Difficulty, Question};
use crate::services::{AnswerValidator, FeedbackSelector, QuestionGenerator};

/// 一次提交的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// 是否答对
    pub correct: bool,
    /// 反馈语
    pub feedback: &'static str,
}

/// 出题引擎
///
/// - 不保存任何题目或历史
/// - 每个引擎独占自己的随机数来源，多个调用方各自持有引擎即可并发使用
pub struct QuestionEngine<R: Random = DefaultRandom> {
    random: R,
    generator: QuestionGenerator,
    validator: AnswerValidator,
    feedback: FeedbackSelector,
    verbose_logging: bool,
}

impl QuestionEngine<DefaultRandom> {
    /// 创建引擎，配置了种子时使用固定序列
    pub fn new(config: &Config) -> AppResult<Self> {
        let random = match config.seed {
            Some(seed) => DefaultRandom::new_with_seed(seed),
            None => DefaultRandom::new(),
        };
        Self::with_random(config, random)
    }
}

impl Default for QuestionEngine<DefaultRandom> {
    fn default() -> Self {
        Self::assemble(DefaultRandom::new(), AnswerValidator::default(), false)
    }
}

impl<R: Random> QuestionEngine<R> {
    /// 使用自定义随机数来源创建引擎，配置非法时返回 `ConfigError`
    pub fn with_random(config: &Config, random: R) -> AppResult<Self> {
        let validator = AnswerValidator::new(config)?;
        Ok(Self::assemble(random, validator, config.verbose_logging))
    }

    fn assemble(random: R, validator: AnswerValidator, verbose_logging: bool) -> Self {
        Self {
            random,
            generator: QuestionGenerator::new(),
            validator,
            feedback: FeedbackSelector::new(),
            verbose_logging,
        }
    }

    /// 按等级编号出题，等级不在 {1, 2, 3} 时返回 `InvalidDifficulty`
    pub fn generate_question(&mut self, level: i64) -> AppResult<Question> {
        let difficulty = Difficulty::try_from(level)?;
        self.generate(difficulty)
    }

    pub fn generate(&mut self, difficulty: Difficulty) -> AppResult<Question> {
        let question = self.generator.generate(&mut self.random, difficulty)?;
        if self.verbose_logging {
            info!("📝 [{}] {}", difficulty, question);
        }
        Ok(question)
    }

    /// 判断答案是否正确，题目格式错误时返回 false
    pub fn is_correct_answer(&self, question: &str, answer: f64) -> bool {
        self.validator.is_correct(question, answer)
    }

    /// 判断答案是否正确，返回具体错误
    pub fn check_answer(&self, question: &str, answer: f64) -> AppResult<bool> {
        self.validator.check(question, answer)
    }

    /// 随机反馈语
    pub fn random_prompt(&mut self, is_correct: bool) -> &'static str {
        self.feedback.pick(&mut self.random, is_correct)
    }

    /// 判分并给出反馈
    pub fn submit(&mut self, question: &Question, answer: f64) -> Submission {
        let correct = self.is_correct_answer(question.text(), answer);
        let feedback = self.random_prompt(correct);
        if self.verbose_logging {
            let mark = if correct { "✅" } else { "❌" };
            info!("{} {} 提交: {} -> {}", mark, question.text(), answer, feedback);
        }
        Submission { correct, feedback }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn seeded(seed: u64) -> QuestionEngine {
        QuestionEngine::new(&Config {
            seed: Some(seed),
            ..Config::default()
        })
        .unwrap()
    }

    #[test]
    fn test_seed_makes_questions_repeatable() {
        let mut first = seeded(99);
        let mut second = seeded(99);
        for level in [1, 2, 3, 3, 2, 1] {
            assert_eq!(
                first.generate_question(level).unwrap(),
                second.generate_question(level).unwrap()
            );
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            answer_precision: 400,
            ..Config::default()
        };
        assert!(matches!(QuestionEngine::new(&config), Err(AppError::Config(_))));

        let config = Config {
            answer_tolerance: f64::NAN,
            ..Config::default()
        };
        assert!(matches!(
            QuestionEngine::with_random(&config, DefaultRandom::new_with_seed(1)),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_levels() {
        let mut engine = seeded(1);
        assert!(engine.generate_question(0).unwrap_err().is_invalid_difficulty());
        assert!(engine.generate_question(4).unwrap_err().is_invalid_difficulty());
        assert!(engine.generate_question(-1).unwrap_err().is_invalid_difficulty());
    }

    #[test]
    fn test_submit() {
        let mut engine = seeded(5);
        let question = engine.generate_question(2).unwrap();

        let right = engine.submit(&question, question.answer() as f64);
        assert!(right.correct);

        let wrong = engine.submit(&question, question.answer() as f64 + 1.0);
        assert!(!wrong.correct);
        assert!(wrong.feedback.contains("Try again"));
    }
}
