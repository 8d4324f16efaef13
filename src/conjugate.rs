use std::collections::BTreeMap;

use crate::error::Error;
use crate::form::{Form, Formality, Inflection, Polarity, Tense, VerbClass};
use crate::validate::validate;
use crate::verb::{negative, positive};

/// Validate a verb and conjugate it into the given form and polarity.
///
/// # Examples
///
/// ```
/// use katsuyou::{Form, Polarity, Tense, VerbClass};
///
/// let nomimasu = katsuyou::generate("飲む", VerbClass::Godan, Form::Polite(Tense::Nonpast), Polarity::Positive)?;
/// assert_eq!(nomimasu, "飲みます");
/// # Ok::<_, katsuyou::Error>(())
/// ```
pub fn generate(
    verb: &str,
    class: VerbClass,
    form: Form,
    polarity: Polarity,
) -> Result<String, Error> {
    let verb = match validate(verb) {
        Ok(verb) => verb,
        Err(error) => {
            tracing::debug!(verb, %error, "rejected verb");
            return Err(error);
        }
    };

    tracing::trace!(%verb, %class, %form, ?polarity, "generate");

    match polarity {
        Polarity::Positive => positive::generate(&verb, class, form),
        Polarity::Negative => negative::generate(&verb, class, form),
    }
}

pub fn plain_form(
    verb: &str,
    class: VerbClass,
    tense: Tense,
    polarity: Polarity,
) -> Result<String, Error> {
    generate(verb, class, Form::Plain(tense), polarity)
}

pub fn polite_form(
    verb: &str,
    class: VerbClass,
    tense: Tense,
    polarity: Polarity,
) -> Result<String, Error> {
    generate(verb, class, Form::Polite(tense), polarity)
}

/// The te-form, which only exists in the positive.
pub fn te_form(verb: &str, class: VerbClass) -> Result<String, Error> {
    generate(verb, class, Form::Te, Polarity::Positive)
}

pub fn conditional_form(
    verb: &str,
    class: VerbClass,
    formality: Formality,
    polarity: Polarity,
) -> Result<String, Error> {
    generate(verb, class, Form::Conditional(formality), polarity)
}

pub fn volitional_form(
    verb: &str,
    class: VerbClass,
    formality: Formality,
    polarity: Polarity,
) -> Result<String, Error> {
    generate(verb, class, Form::Volitional(formality), polarity)
}

pub fn potential_form(
    verb: &str,
    class: VerbClass,
    formality: Formality,
    polarity: Polarity,
) -> Result<String, Error> {
    generate(verb, class, Form::Potential(formality), polarity)
}

pub fn imperative_form(
    verb: &str,
    class: VerbClass,
    formality: Formality,
    polarity: Polarity,
) -> Result<String, Error> {
    generate(verb, class, Form::Imperative(formality), polarity)
}

pub fn provisional_form(
    verb: &str,
    class: VerbClass,
    formality: Formality,
    polarity: Polarity,
) -> Result<String, Error> {
    generate(verb, class, Form::Provisional(formality), polarity)
}

pub fn causative_form(
    verb: &str,
    class: VerbClass,
    formality: Formality,
    polarity: Polarity,
) -> Result<String, Error> {
    generate(verb, class, Form::Causative(formality), polarity)
}

pub fn passive_form(
    verb: &str,
    class: VerbClass,
    formality: Formality,
    polarity: Polarity,
) -> Result<String, Error> {
    generate(verb, class, Form::Passive(formality), polarity)
}

/// Every conjugation of a single verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugations {
    /// The dictionary form the conjugations were produced from.
    pub dictionary: String,
    /// The class the verb was conjugated as.
    pub class: VerbClass,
    /// Conjugations by inflection.
    pub inflections: BTreeMap<Inflection, String>,
}

impl Conjugations {
    /// Get a conjugation.
    pub fn get(&self, inflection: Inflection) -> Option<&str> {
        Some(self.inflections.get(&inflection)?.as_str())
    }

    /// Test if an inflection exists.
    pub fn contains(&self, inflection: Inflection) -> bool {
        self.inflections.contains_key(&inflection)
    }

    /// Iterate over all conjugations in inflection order.
    pub fn iter(&self) -> impl Iterator<Item = (&Inflection, &str)> + '_ {
        self.inflections.iter().map(|(key, value)| (key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.inflections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inflections.is_empty()
    }
}

/// Validate a verb and produce every conjugation defined for it.
///
/// Forms which don't exist for the verb, like the negative te-form, are left
/// out rather than reported as errors.
///
/// # Examples
///
/// ```
/// use katsuyou::{Form, Inflection, Polarity, VerbClass};
///
/// let conjugations = katsuyou::conjugate("食べる", VerbClass::Ichidan)?;
/// assert_eq!(conjugations.get(Inflection::new(Form::Te, Polarity::Positive)), Some("食べて"));
/// assert!(!conjugations.contains(Inflection::new(Form::Te, Polarity::Negative)));
/// # Ok::<_, katsuyou::Error>(())
/// ```
pub fn conjugate(verb: &str, class: VerbClass) -> Result<Conjugations, Error> {
    let verb = validate(verb)?;
    let mut inflections = BTreeMap::new();

    for form in Form::ALL {
        for polarity in [Polarity::Positive, Polarity::Negative] {
            let result = match polarity {
                Polarity::Positive => positive::generate(&verb, class, form),
                Polarity::Negative => negative::generate(&verb, class, form),
            };

            match result {
                Ok(text) => {
                    inflections.insert(Inflection::new(form, polarity), text);
                }
                Err(error) if error.is_missing_form() => {
                    tracing::trace!(%verb, %form, ?polarity, "skipping undefined form");
                }
                Err(error) => return Err(error),
            }
        }
    }

    Ok(Conjugations {
        dictionary: verb.to_string(),
        class,
        inflections,
    })
}
