pub mod question_engine;

pub use question_engine::{QuestionEngine, Submission};
