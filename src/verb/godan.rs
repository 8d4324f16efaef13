use crate::kana;
use crate::romaji;

use super::{split_ending, Ending};

/// The sound row a godan ending can be moved into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    A,
    I,
    E,
    O,
}

impl Row {
    /// The vowel of the row.
    #[inline]
    pub fn vowel(self) -> char {
        match self {
            Row::A => 'a',
            Row::I => 'i',
            Row::E => 'e',
            Row::O => 'o',
        }
    }
}

/// Endings whose rows can't be derived from their romanized sound.
#[derive(Debug, Clone, Copy)]
struct Special {
    a: &'static str,
    i: &'static str,
    e: &'static str,
    o: &'static str,
}

impl Special {
    const fn new(a: &'static str, i: &'static str, e: &'static str, o: &'static str) -> Self {
        Self { a, i, e, o }
    }

    fn get(&self, row: Row) -> &'static str {
        match row {
            Row::A => self.a,
            Row::I => self.i,
            Row::E => self.e,
            Row::O => self.o,
        }
    }
}

/// The U godan table, where the a-row is わ.
const U: Special = Special::new("わ", "い", "え", "お");
/// The TSU godan table.
const TSU: Special = Special::new("た", "ち", "て", "と");
/// The SU godan table.
const SU: Special = Special::new("さ", "し", "せ", "そ");

/// Move the final kana of a godan verb into the given row.
///
/// # Examples
///
/// ```
/// use katsuyou::verb::{shift, Row};
///
/// assert_eq!(shift("飲む", Row::A), "飲ま");
/// assert_eq!(shift("使う", Row::A), "使わ");
/// assert_eq!(shift("待つ", Row::I), "待ち");
/// ```
pub fn shift(verb: &str, row: Row) -> String {
    let (stem, last) = split_ending(verb, Ending::Single);

    let special = match last {
        "う" => Some(U),
        "つ" => Some(TSU),
        "す" => Some(SU),
        _ => None,
    };

    let mut out = String::with_capacity(verb.len() + 3);
    out.push_str(stem);

    if let Some(special) = special {
        out.push_str(special.get(row));
        return out;
    }

    let shifted = last
        .chars()
        .next()
        .and_then(|c| romaji::with_vowel(c, row.vowel()));

    // Endings outside of the godan rows are kept untouched.
    match shifted {
        Some(c) => out.push(c),
        None => out.push_str(last),
    }

    out
}

/// Apply sound euphony to a godan verb to form its -te or -ta form.
pub(super) fn onbin(verb: &str, regular: &str, voiced: &str) -> String {
    let (stem, last) = split_ending(verb, Ending::Single);

    let (infix, suffix) = match last {
        "る" | "つ" | "う" => (kana::SMALL_TSU, regular),
        "ぶ" | "む" | "ぬ" => (kana::N, voiced),
        "く" => (kana::I, regular),
        "ぐ" => (kana::I, voiced),
        // す
        _ => (kana::SHI, regular),
    };

    format!("{stem}{infix}{suffix}")
}
