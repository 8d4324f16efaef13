//! Verb conjugation, based on the class of a verb.

#[macro_use]
mod macros;

mod godan;
pub use self::godan::{shift, Row};

mod irregular;
pub use self::irregular::{irregular, Endings, IrregularKind};

pub mod negative;
pub mod positive;

#[cfg(test)]
mod tests;

use crate::error::Error;
use crate::form::VerbClass;

pub(crate) const NAI: &str = "ない";
pub(crate) const KATTA: &str = "かった";
pub(crate) const MASU: &str = "ます";
pub(crate) const MASHITA: &str = "ました";
pub(crate) const MASEN: &str = "ません";
pub(crate) const MASEN_DESHITA: &str = "ませんでした";
pub(crate) const MASHOU: &str = "ましょう";
pub(crate) const KUDASAI: &str = "ください";

/// How many trailing characters make up the ending of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ending {
    /// A single trailing kana, regardless of the verb class.
    Single,
    /// The two kana of an irregular verb, like する.
    Double,
}

impl Ending {
    #[inline]
    fn len(self) -> usize {
        match self {
            Ending::Single => 1,
            Ending::Double => 2,
        }
    }
}

impl From<VerbClass> for Ending {
    #[inline]
    fn from(class: VerbClass) -> Self {
        match class {
            VerbClass::Godan | VerbClass::Ichidan => Ending::Single,
            VerbClass::Irregular => Ending::Double,
        }
    }
}

/// Split a verb into its stem and ending particles.
///
/// Irregular verbs have an ending of two characters, everything else has
/// one. If the verb is too short the whole verb is treated as its ending.
///
/// # Examples
///
/// ```
/// use katsuyou::verb::split;
/// use katsuyou::VerbClass;
///
/// assert_eq!(split("飲む", VerbClass::Godan), ("飲", "む"));
/// assert_eq!(split("勉強する", VerbClass::Irregular), ("勉強", "する"));
/// ```
pub fn split(verb: &str, class: VerbClass) -> (&str, &str) {
    split_ending(verb, Ending::from(class))
}

pub(crate) fn split_ending(verb: &str, ending: Ending) -> (&str, &str) {
    let index = verb
        .char_indices()
        .rev()
        .nth(ending.len() - 1)
        .map(|(index, _)| index)
        .unwrap_or(0);

    verb.split_at(index)
}

/// The verb with its ending removed.
#[inline]
pub(crate) fn stem(verb: &str, class: VerbClass) -> &str {
    split(verb, class).0
}

/// The stem godan and ichidan suffixes attach to. Godan verbs have their
/// final kana moved into the given row while ichidan verbs drop their る.
pub(crate) fn row_stem(verb: &str, class: VerbClass, row: Row) -> String {
    match class {
        VerbClass::Godan => shift(verb, row),
        VerbClass::Ichidan | VerbClass::Irregular => stem(verb, class).to_owned(),
    }
}

/// Construct the -te or -ta form of a verb.
///
/// `regular` is used when the godan ending is unvoiced, such as て or た,
/// and `voiced` for endings which voice it, such as で or だ.
pub fn te_ta(
    verb: &str,
    class: VerbClass,
    regular: &'static str,
    voiced: &'static str,
) -> Result<String, Error> {
    match class {
        VerbClass::Godan => Ok(godan::onbin(verb, regular, voiced)),
        VerbClass::Ichidan => Ok(format!("{}{regular}", stem(verb, class))),
        VerbClass::Irregular => irregular(verb, true, &Endings::all(regular)),
    }
}

/// Construct the nai-form of a verb, which is the base of most negative
/// conjugations.
///
/// If `regular` is `false`, ない is attached to `verb` as-is since the
/// caller has already calculated the stem.
pub fn nai(verb: &str, class: VerbClass, regular: bool) -> Result<String, Error> {
    if !regular {
        return Ok(format!("{verb}{NAI}"));
    }

    match class {
        VerbClass::Godan => Ok(format!("{}{NAI}", shift(verb, Row::A))),
        VerbClass::Ichidan => Ok(format!("{}{NAI}", stem(verb, class))),
        VerbClass::Irregular => irregular(
            verb,
            false,
            &endings! {
                Suru => "しない",
                Kuru => "こない",
                KuruKanji => "来ない",
            },
        ),
    }
}
