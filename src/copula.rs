//! Conjugation of the copula だ.
//!
//! Every form of the copula is fixed, so these never fail.


use crate::form::{Formality, Polarity, Tense};

/// The plain copula.
///
/// # Examples
///
/// ```
/// use katsuyou::{copula, Polarity, Tense};
///
/// assert_eq!(copula::plain(Tense::Nonpast, Polarity::Positive), "だ");
/// assert_eq!(copula::plain(Tense::Past, Polarity::Negative), "ではなかった");
/// ```
pub fn plain(tense: Tense, polarity: Polarity) -> &'static str {
    match (tense, polarity) {
        (Tense::Nonpast, Polarity::Positive) => "だ",
        (Tense::Past, Polarity::Positive) => "だった",
        (Tense::Nonpast, Polarity::Negative) => "ではない",
        (Tense::Past, Polarity::Negative) => "ではなかった",
    }
}

/// The polite copula, です.
pub fn polite(tense: Tense, polarity: Polarity) -> &'static str {
    match (tense, polarity) {
        (Tense::Nonpast, Polarity::Positive) => "です",
        (Tense::Past, Polarity::Positive) => "でした",
        (Tense::Nonpast, Polarity::Negative) => "ではありません",
        (Tense::Past, Polarity::Negative) => "ではありませんでした",
    }
}

/// The conditional なら, which has a single form.
#[inline]
pub fn conditional() -> &'static str {
    "なら"
}

/// The presumptive, probably is ~.
pub fn presumptive(formality: Formality, polarity: Polarity) -> &'static str {
    match (formality, polarity) {
        (Formality::Plain, Polarity::Positive) => "だろう",
        (Formality::Polite, Polarity::Positive) => "でしょう",
        (Formality::Plain, Polarity::Negative) => "ではないだろう",
        (Formality::Polite, Polarity::Negative) => "ではないでしょう",
    }
}

pub fn te(formality: Formality) -> &'static str {
    match formality {
        Formality::Plain => "で",
        Formality::Polite => "でして",
    }
}

/// The ~tara conditional, built on the positive past.
pub fn tara(formality: Formality) -> &'static str {
    match formality {
        Formality::Plain => "だったら",
        Formality::Polite => "でしたら",
    }
}
