use std::io::{BufRead, Write};

use log::debug;
use thiserror::Error;

pub const LENGTH_PROMPT: &str = "Enter the desired password length: ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LengthInputError {
    #[error("please enter a whole number")]
    NotANumber,
    #[error("please enter a number greater than zero")]
    NotPositive,
}

pub fn parse_length(input: &str) -> Result<usize, LengthInputError> {
    let value = match input.trim().parse::<i64>() {
        Ok(value) => value,
        Err(_error) => return Err(LengthInputError::NotANumber),
    };

    if value <= 0 {
        return Err(LengthInputError::NotPositive);
    }

    usize::try_from(value).map_err(|_| LengthInputError::NotANumber)
}

/// Prompts until a positive whole number is entered.
///
/// Running out of input is the only way out besides a valid answer and is
/// reported as `UnexpectedEof`.
pub fn request_length<R, W>(input: &mut R, output: &mut W) -> Result<usize, std::io::Error>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "{}", LENGTH_PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before a password length was entered",
            ));
        }

        match parse_length(&line) {
            Ok(length) => return Ok(length),
            Err(error) => {
                debug!("rejected length input {:?}: {}", line.trim(), error);
                writeln!(output, "{}", error)?;
            }
        }
    }
}
