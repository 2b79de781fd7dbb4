use std::io::Write;

use pwgen_lib::Password;

const TITLE: &str = "Your generated password:";

pub fn write_banner<W: Write>(output: &mut W, password: &Password) -> Result<(), std::io::Error> {
    let rule = "=".repeat(password.len().max(TITLE.len()));

    writeln!(output, "{}", rule)?;
    writeln!(output, "{}", TITLE)?;
    writeln!(output, "{}", password)?;
    writeln!(output, "{}", rule)?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use pwgen_lib::PasswordGenerator;

    use super::{write_banner, TITLE};

    #[test]
    fn test_banner_frames_password() {
        let password = PasswordGenerator::new().generate(12).unwrap();
        let mut output = Vec::new();

        write_banner(&mut output, &password).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        let rule = "=".repeat(TITLE.len());

        assert_eq!(lines, vec![rule.as_str(), TITLE, password.as_str(), rule.as_str()]);
    }

    #[test]
    fn test_banner_grows_with_password() {
        let password = PasswordGenerator::new().generate(60).unwrap();
        let mut output = Vec::new();

        write_banner(&mut output, &password).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.lines().next().unwrap(), "=".repeat(60));
    }
}
