use pwgen_lib::GeneratorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Generator(#[from] GeneratorError),
}
