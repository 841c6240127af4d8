use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Randomness source failed: {0}")]
    RandomnessFailure(#[from] rand::Error),
    #[error("Polynomial has {coefficients} coefficients but the setup only supports {max}")]
    DegreeTooLarge { coefficients: usize, max: usize },
    #[error("Polynomial with {coefficients} coefficients cannot be batch opened at {points} points")]
    DegreeTooSmall { coefficients: usize, points: usize },
    #[error("Mismatch between parallel inputs, {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("Remainder should be 0, instead is {remainder}")]
    EvaluationMismatch { remainder: String },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(&'static str),
}
