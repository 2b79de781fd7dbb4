pub mod charset;
pub mod error;
pub mod password;
pub mod random;
pub mod shuffle;

pub use error::GeneratorError;
pub use password::Password;
pub use random::{random_password, PasswordGenerator, MIN_LENGTH};
pub use shuffle::ShuffleStrategy;
