pub mod answer_validator;
pub mod expression_formatter;
pub mod feedback_selector;
pub mod question_generator;

pub use answer_validator::AnswerValidator;
pub use expression_formatter::{format_expression, format_question};
pub use feedback_selector::FeedbackSelector;
pub use question_generator::QuestionGenerator;
