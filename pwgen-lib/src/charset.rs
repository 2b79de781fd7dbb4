static LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
static UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static DIGIT: &[u8] = b"0123456789";
static SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Every character a generated password may contain, class by class.
pub static ALLOWED_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
                                       ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                       0123456789\
                                       !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn chars(&self) -> &'static [u8] {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digit => DIGIT,
            Self::Special => SPECIAL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Digit => "digit",
            Self::Special => "special",
        }
    }

    /// None when `c` is outside the allowed alphabet
    pub fn of(c: char) -> Option<CharacterClass> {
        if !c.is_ascii() {
            return None;
        }

        let byte = c as u8;
        Self::ALL
            .into_iter()
            .find(|class| class.chars().contains(&byte))
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn is_allowed(c: char) -> bool {
    c.is_ascii() && ALLOWED_ALPHABET.contains(&(c as u8))
}
