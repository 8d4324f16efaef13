use fixed_map::{Key, Map};
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::form::VerbClass;
use crate::kana;

use super::split;

/// The kind of an irregular verb, detected from its last two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Key, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IrregularKind {
    /// A verb ending in する.
    Suru,
    /// A verb ending in くる.
    Kuru,
    /// A verb ending in 来る.
    KuruKanji,
}

impl IrregularKind {
    /// Detect the irregular kind from a two character ending.
    pub fn detect(ending: &str) -> Option<Self> {
        match ending {
            "する" => Some(IrregularKind::Suru),
            "くる" => Some(IrregularKind::Kuru),
            "来る" => Some(IrregularKind::KuruKanji),
            _ => None,
        }
    }

    /// The particle which replaces the ending in the continuative stem.
    pub fn stem_particle(self) -> &'static str {
        match self {
            IrregularKind::Suru => kana::SHI,
            IrregularKind::Kuru => kana::KI,
            IrregularKind::KuruKanji => kana::KURU_KANJI,
        }
    }
}

/// Endings to attach to an irregular verb, one for each irregular kind.
#[derive(Debug, Clone)]
pub struct Endings {
    map: Map<IrregularKind, &'static str>,
}

impl Endings {
    /// Construct an empty collection where no kind has an ending.
    pub fn new() -> Self {
        Self { map: Map::new() }
    }

    /// Construct endings where every kind shares the same ending.
    pub fn all(ending: &'static str) -> Self {
        let mut endings = Self::new();
        endings.insert(IrregularKind::Suru, ending);
        endings.insert(IrregularKind::Kuru, ending);
        endings.insert(IrregularKind::KuruKanji, ending);
        endings
    }

    /// Set the ending for the given kind.
    pub fn insert(&mut self, kind: IrregularKind, ending: &'static str) {
        self.map.insert(kind, ending);
    }

    /// Get the ending for the given kind.
    pub fn get(&self, kind: IrregularKind) -> Option<&'static str> {
        self.map.get(kind).copied()
    }
}

impl Default for Endings {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Conjugate an irregular verb.
///
/// The verb is split into its stem and two character ending, the matching
/// stem particle is attached if `append_stem_particle` is set, followed by
/// the ending configured for the kind of the verb.
///
/// # Errors
///
/// Errors if the verb doesn't end in する, くる or 来る, or if `endings` has
/// no ending for the kind of the verb.
///
/// # Examples
///
/// ```
/// use katsuyou::verb::{irregular, Endings};
///
/// assert_eq!(irregular("勉強する", true, &Endings::all("ます"))?, "勉強します");
/// assert!(irregular("飲む", true, &Endings::all("ます")).is_err());
/// # Ok::<_, katsuyou::Error>(())
/// ```
pub fn irregular(verb: &str, append_stem_particle: bool, endings: &Endings) -> Result<String, Error> {
    let (stem, ending) = split(verb, VerbClass::Irregular);

    let Some(kind) = IrregularKind::detect(ending) else {
        return Err(Error::new(ErrorKind::NonIrregularEnding { verb: verb.into() }));
    };

    let Some(suffix) = endings.get(kind) else {
        return Err(Error::new(ErrorKind::MissingForm { verb: verb.into() }));
    };

    let mut out = String::with_capacity(verb.len() + suffix.len());
    out.push_str(stem);

    if append_stem_particle {
        out.push_str(kind.stem_particle());
    }

    out.push_str(suffix);
    Ok(out)
}
