use zeroize::Zeroizing;

/// A generated password. The backing memory is wiped on drop.
pub struct Password {
    value: Zeroizing<String>,
}

impl Password {
    pub(crate) fn new(value: String) -> Password {
        Password {
            value: Zeroizing::new(value),
        }
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Keep passwords out of debug logs
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
