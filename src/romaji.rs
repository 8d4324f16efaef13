//! Romanization of single kana, used to move a kana between sound rows.


/// Convert a single hiragana into its romaji sound.
pub fn romanize(kana: char) -> Option<&'static str> {
    let (_, romaji) = TABLE.iter().find(|(k, _)| *k == kana)?;
    Some(*romaji)
}

/// Convert a romaji sound into a single hiragana.
pub fn hiragana(romaji: &str) -> Option<char> {
    let (kana, _) = TABLE.iter().find(|(_, r)| *r == romaji)?;
    Some(*kana)
}

/// Replace the vowel of the given kana, keeping its consonant.
///
/// Returns `None` if the kana or the resulting sound has no single
/// hiragana, such as `つ` which would otherwise produce `tsa`.
pub fn with_vowel(kana: char, vowel: char) -> Option<char> {
    let romaji = romanize(kana)?;
    let consonant = romaji.strip_suffix(|c: char| matches!(c, 'a' | 'i' | 'u' | 'e' | 'o'))?;

    let mut sound = String::with_capacity(consonant.len() + 1);
    sound.push_str(consonant);
    sound.push(vowel);
    hiragana(&sound)
}

#[rustfmt::skip]
static TABLE: [(char, &str); 71] = [
    ('あ', "a"), ('い', "i"), ('う', "u"), ('え', "e"), ('お', "o"),
    ('か', "ka"), ('き', "ki"), ('く', "ku"), ('け', "ke"), ('こ', "ko"),
    ('が', "ga"), ('ぎ', "gi"), ('ぐ', "gu"), ('げ', "ge"), ('ご', "go"),
    ('さ', "sa"), ('し', "shi"), ('す', "su"), ('せ', "se"), ('そ', "so"),
    ('ざ', "za"), ('じ', "ji"), ('ず', "zu"), ('ぜ', "ze"), ('ぞ', "zo"),
    ('た', "ta"), ('ち', "chi"), ('つ', "tsu"), ('て', "te"), ('と', "to"),
    ('だ', "da"), ('ぢ', "di"), ('づ', "du"), ('で', "de"), ('ど', "do"),
    ('な', "na"), ('に', "ni"), ('ぬ', "nu"), ('ね', "ne"), ('の', "no"),
    ('は', "ha"), ('ひ', "hi"), ('ふ', "fu"), ('へ', "he"), ('ほ', "ho"),
    ('ば', "ba"), ('び', "bi"), ('ぶ', "bu"), ('べ', "be"), ('ぼ', "bo"),
    ('ぱ', "pa"), ('ぴ', "pi"), ('ぷ', "pu"), ('ぺ', "pe"), ('ぽ', "po"),
    ('ま', "ma"), ('み', "mi"), ('む', "mu"), ('め', "me"), ('も', "mo"),
    ('や', "ya"), ('ゆ', "yu"), ('よ', "yo"),
    ('ら', "ra"), ('り', "ri"), ('る', "ru"), ('れ', "re"), ('ろ', "ro"),
    ('わ', "wa"), ('を', "wo"), ('ん', "n"),
];
