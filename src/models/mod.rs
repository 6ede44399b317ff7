pub mod difficulty;
pub mod operator;
pub mod question;

pub use difficulty::Difficulty;
pub use operator::Operator;
pub use question::Question;
