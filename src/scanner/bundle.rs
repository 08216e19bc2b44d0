#![forbid(unsafe_code)]

//! Residue of a short-option cluster such as `-abc`

/// A short-option token pulled out of the vector, plus how far into it
/// matching has progressed
///
/// The offset always sits on a character boundary and never reaches the
/// end of the token while the bundle is alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bundle {
    token: String,
    offset: usize,
}

impl Bundle {
    /// Start a bundle just past the leading `-`
    pub(crate) fn new(token: String) -> Self {
        Bundle { token, offset: 1 }
    }

    /// The short option the bundle currently presents
    pub(crate) fn current(&self) -> Option<char> {
        self.token[self.offset..].chars().next()
    }

    /// Step past the current character; true once nothing is left
    pub(crate) fn advance(&mut self) -> bool {
        if let Some(c) = self.current() {
            self.offset += c.len_utf8();
        }
        self.offset >= self.token.len()
    }

    /// Everything after the current character, consuming the bundle
    pub(crate) fn into_rest(self) -> String {
        let skip = self.current().map_or(0, char::len_utf8);
        self.token[self.offset + skip..].to_string()
    }
}
