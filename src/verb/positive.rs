//! Positive conjugations, one function for each category.
//!
//! These expect a validated verb. Use [`crate::generate`] to validate and
//! conjugate in one go.

use crate::error::Error;
use crate::form::{Form, Formality, Tense, VerbClass};
use crate::kana;

use super::{
    irregular, row_stem, shift, stem, te_ta, Endings, Row, KUDASAI, MASHITA, MASHOU, MASU,
};

/// Conjugate the verb into the given positive form.
pub fn generate(verb: &str, class: VerbClass, form: Form) -> Result<String, Error> {
    match form {
        Form::Plain(tense) => plain(verb, class, tense),
        Form::Polite(tense) => polite(verb, class, tense),
        Form::Te => te(verb, class),
        Form::Conditional(formality) => conditional(verb, class, formality),
        Form::Volitional(formality) => volitional(verb, class, formality),
        Form::Potential(formality) => potential(verb, class, formality),
        Form::Imperative(formality) => imperative(verb, class, formality),
        Form::Provisional(formality) => provisional(verb, class, formality),
        Form::Causative(formality) => causative(verb, class, formality),
        Form::Passive(formality) => passive(verb, class, formality),
    }
}

/// The plain form, which in the nonpast is the dictionary form itself.
pub fn plain(verb: &str, class: VerbClass, tense: Tense) -> Result<String, Error> {
    match tense {
        Tense::Nonpast => Ok(verb.to_owned()),
        Tense::Past => te_ta(verb, class, kana::TA, kana::DA),
    }
}

/// The polite ~masu form.
pub fn polite(verb: &str, class: VerbClass, tense: Tense) -> Result<String, Error> {
    let ending = match tense {
        Tense::Nonpast => MASU,
        Tense::Past => MASHITA,
    };

    match class {
        VerbClass::Irregular => irregular(verb, true, &Endings::all(ending)),
        _ => Ok(format!("{}{ending}", row_stem(verb, class, Row::I))),
    }
}

/// The ~te form.
pub fn te(verb: &str, class: VerbClass) -> Result<String, Error> {
    te_ta(verb, class, kana::TE, kana::DE)
}

/// The ~tara conditional.
pub fn conditional(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    let past = match formality {
        Formality::Plain => plain(verb, class, Tense::Past)?,
        Formality::Polite => polite(verb, class, Tense::Past)?,
    };

    Ok(format!("{past}{}", kana::RA))
}

pub fn volitional(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    match (class, formality) {
        (VerbClass::Irregular, Formality::Plain) => irregular(
            verb,
            false,
            &endings! {
                Suru => "しよう",
                Kuru => "こよう",
                KuruKanji => "来よう",
            },
        ),
        (VerbClass::Irregular, Formality::Polite) => irregular(verb, true, &Endings::all(MASHOU)),
        (VerbClass::Godan, Formality::Plain) => Ok(format!("{}{}", shift(verb, Row::O), kana::U)),
        (VerbClass::Ichidan, Formality::Plain) => Ok(format!("{}よう", stem(verb, class))),
        (_, Formality::Polite) => Ok(format!("{}{MASHOU}", row_stem(verb, class, Row::I))),
    }
}

pub fn potential(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    match (class, formality) {
        (VerbClass::Irregular, Formality::Plain) => irregular(
            verb,
            false,
            &endings! {
                Suru => "できる",
                Kuru => "こられる",
                KuruKanji => "来られる",
            },
        ),
        (VerbClass::Irregular, Formality::Polite) => irregular(
            verb,
            false,
            &endings! {
                Suru => "できます",
                Kuru => "こられます",
                KuruKanji => "来られます",
            },
        ),
        (VerbClass::Godan, Formality::Plain) => Ok(format!("{}{}", shift(verb, Row::E), kana::RU)),
        (VerbClass::Godan, Formality::Polite) => Ok(format!("{}{MASU}", shift(verb, Row::E))),
        (VerbClass::Ichidan, Formality::Plain) => Ok(format!("{}られる", stem(verb, class))),
        (VerbClass::Ichidan, Formality::Polite) => Ok(format!("{}られます", stem(verb, class))),
    }
}

/// The imperative. The polite imperative is a request built on the te-form.
pub fn imperative(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    match (class, formality) {
        (_, Formality::Polite) => Ok(format!("{}{KUDASAI}", te(verb, class)?)),
        (VerbClass::Irregular, Formality::Plain) => irregular(
            verb,
            false,
            &endings! {
                Suru => "しろ",
                Kuru => "こい",
                KuruKanji => "来い",
            },
        ),
        (VerbClass::Godan, Formality::Plain) => Ok(shift(verb, Row::E)),
        (VerbClass::Ichidan, Formality::Plain) => Ok(format!("{}{}", stem(verb, class), kana::RO)),
    }
}

/// The ~ba provisional.
///
/// Godan and ichidan verbs have a single provisional, so `formality` only
/// affects irregular verbs.
pub fn provisional(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    match (class, formality) {
        (VerbClass::Irregular, Formality::Plain) => irregular(
            verb,
            false,
            &endings! {
                Suru => "すれば",
                Kuru => "くれば",
                KuruKanji => "来れば",
            },
        ),
        (VerbClass::Irregular, Formality::Polite) => irregular(verb, true, &Endings::all("ませば")),
        (VerbClass::Godan, _) => Ok(format!("{}{}", shift(verb, Row::E), kana::BA)),
        (VerbClass::Ichidan, _) => Ok(format!("{}れ{}", stem(verb, class), kana::BA)),
    }
}

pub fn causative(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    let base = match class {
        VerbClass::Irregular => {
            let endings = match formality {
                Formality::Plain => endings! {
                    Suru => "させる",
                    Kuru => "こさせる",
                    KuruKanji => "来させる",
                },
                Formality::Polite => endings! {
                    Suru => "させます",
                    Kuru => "こさせます",
                    KuruKanji => "来させます",
                },
            };

            return irregular(verb, false, &endings);
        }
        VerbClass::Godan => format!("{}せ", shift(verb, Row::A)),
        VerbClass::Ichidan => format!("{}させ", stem(verb, class)),
    };

    Ok(match formality {
        Formality::Plain => format!("{base}{}", kana::RU),
        Formality::Polite => format!("{base}{MASU}"),
    })
}

/// The passive.
///
/// Only the plain passive is defined for くる and 来る.
pub fn passive(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    let base = match class {
        VerbClass::Irregular => {
            let endings = match formality {
                Formality::Plain => endings! {
                    Suru => "される",
                    Kuru => "こられる",
                    KuruKanji => "来られる",
                },
                Formality::Polite => endings! {
                    Suru => "されます",
                },
            };

            return irregular(verb, false, &endings);
        }
        VerbClass::Godan => format!("{}れ", shift(verb, Row::A)),
        VerbClass::Ichidan => format!("{}られ", stem(verb, class)),
    };

    Ok(match formality {
        Formality::Plain => format!("{base}{}", kana::RU),
        Formality::Polite => format!("{base}{MASU}"),
    })
}
