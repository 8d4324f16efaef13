//! Kana particles and script classification.


pub(crate) const I: &str = "い";
pub(crate) const U: &str = "う";
pub(crate) const KI: &str = "き";
pub(crate) const SHI: &str = "し";
pub(crate) const TA: &str = "た";
pub(crate) const DA: &str = "だ";
pub(crate) const TE: &str = "て";
pub(crate) const DE: &str = "で";
pub(crate) const NA: &str = "な";
pub(crate) const BA: &str = "ば";
pub(crate) const RA: &str = "ら";
pub(crate) const RU: &str = "る";
pub(crate) const RO: &str = "ろ";
pub(crate) const N: &str = "ん";
pub(crate) const SMALL_TSU: &str = "っ";

/// The kanji used to write kuru.
pub(crate) const KURU_KANJI: &str = "来";

/// The nine kana a dictionary form verb can end in.
pub const DICTIONARY_ENDINGS: [char; 9] = ['う', 'く', 'ぐ', 'す', 'つ', 'ぬ', 'ぶ', 'む', 'る'];

/// Test if the given character is a valid dictionary form ending.
#[inline]
pub fn is_dictionary_ending(c: char) -> bool {
    DICTIONARY_ENDINGS.contains(&c)
}

/// Test if a character belongs to one of the Japanese script blocks.
pub fn is_japanese(c: char) -> bool {
    let c = c as u32;
    tables::JAPANESE
        .iter()
        .any(|&(start, end)| start <= c && c <= end)
}

mod tables {
    /// Inclusive ranges of code points accepted as Japanese script.
    #[rustfmt::skip]
    pub(super) static JAPANESE: [(u32, u32); 13] = [
        // Compatibility ideographs.
        (0x3300, 0x33ff),
        (0xfe30, 0xfe4f),
        (0xf900, 0xfaff),
        (0x2f800, 0x2fa1f),
        // Hiragana.
        (0x3040, 0x309f),
        // Katakana.
        (0x30a0, 0x30ff),
        // CJK radicals supplement.
        (0x2e80, 0x2eff),
        // CJK unified ideographs and extensions.
        (0x4e00, 0x9fff),
        (0x3400, 0x4dbf),
        (0x20000, 0x2a6df),
        (0x2a700, 0x2b73f),
        (0x2b740, 0x2b81f),
        (0x2b820, 0x2ceaf),
    ];
}
