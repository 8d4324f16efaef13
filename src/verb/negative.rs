//! Negative conjugations, one function for each category.
//!
//! Most of these are built on the nai-form from [`super::nai`].

use crate::error::{Error, ErrorKind};
use crate::form::{Form, Formality, Tense, VerbClass};
use crate::kana;

use super::{
    irregular, nai, row_stem, shift, stem, Endings, Row, KATTA, KUDASAI, MASEN, MASEN_DESHITA,
};

/// Conjugate the verb into the given negative form.
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

/// Turn a nai-form into its past, ~nakatta.
fn past(nai: &str) -> String {
    let base = nai.strip_suffix(kana::I).unwrap_or(nai);
    format!("{base}{KATTA}")
}

pub fn plain(verb: &str, class: VerbClass, tense: Tense) -> Result<String, Error> {
    let nai = nai(verb, class, true)?;

    Ok(match tense {
        Tense::Nonpast => nai,
        Tense::Past => past(&nai),
    })
}

/// The polite ~masen form.
pub fn polite(verb: &str, class: VerbClass, tense: Tense) -> Result<String, Error> {
    let ending = match tense {
        Tense::Nonpast => MASEN,
        Tense::Past => MASEN_DESHITA,
    };

    match class {
        VerbClass::Irregular => irregular(verb, true, &Endings::all(ending)),
        _ => Ok(format!("{}{ending}", row_stem(verb, class, Row::I))),
    }
}

/// There is no negative te-form, so this always errors with
/// [`ErrorKind::MissingForm`].
pub fn te(verb: &str, _: VerbClass) -> Result<String, Error> {
    Err(Error::new(ErrorKind::MissingForm { verb: verb.into() }))
}

pub fn conditional(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    let past = match formality {
        Formality::Plain => plain(verb, class, Tense::Past)?,
        Formality::Polite => polite(verb, class, Tense::Past)?,
    };

    Ok(format!("{past}{}", kana::RA))
}

/// The negative presumptive, probably won't ~.
pub fn volitional(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    let nai = nai(verb, class, true)?;

    Ok(match formality {
        Formality::Plain => format!("{nai}だろう"),
        Formality::Polite => format!("{nai}でしょう"),
    })
}

pub fn potential(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    let base = match class {
        VerbClass::Irregular => {
            let endings = match formality {
                Formality::Plain => endings! {
                    Suru => "できない",
                    Kuru => "こられない",
                    KuruKanji => "来られない",
                },
                Formality::Polite => endings! {
                    Suru => "できません",
                    Kuru => "こられません",
                    KuruKanji => "来られません",
                },
            };

            return irregular(verb, false, &endings);
        }
        VerbClass::Godan => shift(verb, Row::E),
        VerbClass::Ichidan => format!("{}られ", stem(verb, class)),
    };

    match formality {
        Formality::Plain => nai(&base, class, false),
        Formality::Polite => Ok(format!("{base}{MASEN}")),
    }
}

/// The prohibitive, don't ~.
pub fn imperative(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    match (class, formality) {
        (_, Formality::Polite) => Ok(format!("{}で{KUDASAI}", nai(verb, class, true)?)),
        (VerbClass::Irregular, Formality::Plain) => irregular(
            verb,
            false,
            &endings! {
                Suru => "するな",
                Kuru => "くるな",
                KuruKanji => "来るな",
            },
        ),
        (_, Formality::Plain) => Ok(format!("{verb}{}", kana::NA)),
    }
}

/// The negative provisional, if not ~.
///
/// As with the positive provisional, `formality` only affects irregular
/// verbs.
pub fn provisional(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    match (class, formality) {
        (VerbClass::Irregular, Formality::Plain) => irregular(
            verb,
            false,
            &endings! {
                Suru => "しなければ",
                Kuru => "こなければ",
                KuruKanji => "来なければ",
            },
        ),
        (VerbClass::Irregular, Formality::Polite) => {
            irregular(verb, true, &Endings::all("ませんなら"))
        }
        (_, _) => Ok(format!("{}なければ", row_stem(verb, class, Row::A))),
    }
}

pub fn causative(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    let base = match class {
        VerbClass::Irregular => {
            let endings = match formality {
                Formality::Plain => endings! {
                    Suru => "させない",
                    Kuru => "こさせない",
                    KuruKanji => "来させない",
                },
                Formality::Polite => endings! {
                    Suru => "させません",
                    Kuru => "こさせません",
                    KuruKanji => "来させません",
                },
            };

            return irregular(verb, false, &endings);
        }
        VerbClass::Godan => format!("{}せ", shift(verb, Row::A)),
        VerbClass::Ichidan => format!("{}させ", stem(verb, class)),
    };

    match formality {
        Formality::Plain => nai(&base, class, false),
        Formality::Polite => Ok(format!("{base}{MASEN}")),
    }
}

/// The negative passive.
///
/// Only verbs ending in する have a negative passive among the irregular
/// verbs.
pub fn passive(verb: &str, class: VerbClass, formality: Formality) -> Result<String, Error> {
    let base = match class {
        VerbClass::Irregular => {
            let endings = match formality {
                Formality::Plain => endings! {
                    Suru => "されない",
                },
                Formality::Polite => endings! {
                    Suru => "されません",
                },
            };

            return irregular(verb, false, &endings);
        }
        VerbClass::Godan => format!("{}れ", shift(verb, Row::A)),
        VerbClass::Ichidan => format!("{}られ", stem(verb, class)),
    };

    match formality {
        Formality::Plain => nai(&base, class, false),
        Formality::Polite => Ok(format!("{base}{MASEN}")),
    }
}
