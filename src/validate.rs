use std::fmt;
use std::ops::Deref;

use crate::error::{Error, ErrorKind};
use crate::kana;

/// A dictionary form verb which has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verb<'a> {
    text: &'a str,
}

impl<'a> Verb<'a> {
    /// Access the underlying text.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl Deref for Verb<'_> {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.text
    }
}

impl fmt::Display for Verb<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Validate that the given string is a conjugable dictionary form verb.
///
/// The length is checked first, then the final kana and last the script of
/// every character, so a one character input always reports its length.
pub fn validate(verb: &str) -> Result<Verb<'_>, Error> {
    let len = verb.chars().count();

    if len < 2 {
        return Err(Error::new(ErrorKind::InvalidLength {
            verb: verb.into(),
            len,
        }));
    }

    if let Some(ending) = verb.chars().next_back() {
        if !kana::is_dictionary_ending(ending) {
            return Err(Error::new(ErrorKind::InvalidEnding { ending }));
        }
    }

    if let Some(character) = verb.chars().find(|&c| !kana::is_japanese(c)) {
        return Err(Error::new(ErrorKind::NonJapaneseCharacter {
            verb: verb.into(),
            character,
        }));
    }

    Ok(Verb { text: verb })
}
