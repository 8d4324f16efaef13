//! Conjugation of Japanese verbs and the copula.
//!
//! A verb is given in its dictionary form together with its conjugation
//! class, and conjugated into one of the forms described by [`Form`] and a
//! [`Polarity`].
//!
//! ```
//! use katsuyou::{Form, Formality, Polarity, Tense, VerbClass};
//!
//! assert_eq!(katsuyou::generate("飲む", VerbClass::Godan, Form::Plain(Tense::Past), Polarity::Positive)?, "飲んだ");
//! assert_eq!(katsuyou::generate("くる", VerbClass::Irregular, Form::Imperative(Formality::Plain), Polarity::Positive)?, "こい");
//! # Ok::<_, katsuyou::Error>(())
//! ```

mod conjugate;
pub use self::conjugate::{
    causative_form, conditional_form, conjugate, generate, imperative_form, passive_form,
    plain_form, polite_form, potential_form, provisional_form, te_form, volitional_form,
    Conjugations,
};

pub mod copula;

mod error;
pub use self::error::{Error, ErrorKind};

mod form;
pub use self::form::{Category, Form, Formality, Inflection, Polarity, Tense, VerbClass};

pub mod kana;

mod romaji;

mod validate;
pub use self::validate::{validate, Verb};

pub mod verb;
