/// Error raised when a verb can't be conjugated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// Access the kind of the error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Test if the error indicates that the requested form is not defined
    /// for the verb, as opposed to the verb being invalid.
    pub fn is_missing_form(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingForm { .. })
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("Verb `{verb}` has length {len}, but must be at least two characters")]
    InvalidLength { verb: Box<str>, len: usize },
    #[error("Verb ending `{ending}` is not a dictionary form ending")]
    InvalidEnding { ending: char },
    #[error("Verb `{verb}` contains the non-Japanese character `{character}`")]
    NonJapaneseCharacter { verb: Box<str>, character: char },
    #[error("Verb `{verb}` does not end in する, くる or 来る")]
    NonIrregularEnding { verb: Box<str> },
    #[error("The requested form is not defined for `{verb}`")]
    MissingForm { verb: Box<str> },
}
