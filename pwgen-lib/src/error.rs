use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum GeneratorError {
    #[error("password length must be at least {minimum}, got {length}")]
    InvalidLength { length: usize, minimum: usize },
}
