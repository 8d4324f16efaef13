use crate::error::ErrorKind;
use crate::form::{Form, Formality, Polarity, Tense, VerbClass};
use crate::romaji;

use super::{irregular, nai, negative, positive, shift, split, te_ta, Endings, Row};

#[test]
fn split_verbs() {
    assert_eq!(split("飲む", VerbClass::Godan), ("飲", "む"));
    assert_eq!(split("食べる", VerbClass::Ichidan), ("食べ", "る"));
    assert_eq!(split("勉強する", VerbClass::Irregular), ("勉強", "する"));
    assert_eq!(split("くる", VerbClass::Irregular), ("", "くる"));
    assert_eq!(split("来る", VerbClass::Irregular), ("", "来る"));
}

#[test]
fn shift_special_rows() {
    assert_eq!(shift("使う", Row::A), "使わ");
    assert_eq!(shift("使う", Row::I), "使い");
    assert_eq!(shift("待つ", Row::A), "待た");
    assert_eq!(shift("待つ", Row::I), "待ち");
    assert_eq!(shift("話す", Row::I), "話し");
    assert_eq!(shift("話す", Row::O), "話そ");
}

#[test]
fn shift_keeps_consonant() {
    for verb in ["書く", "泳ぐ", "死ぬ", "遊ぶ", "飲む", "帰る"] {
        let (_, last) = split(verb, VerbClass::Godan);
        let last = last.chars().next().and_then(romaji::romanize);

        for row in [Row::A, Row::I, Row::E, Row::O] {
            let shifted = shift(verb, row);
            let (_, kana) = split(&shifted, VerbClass::Godan);
            let kana = kana.chars().next().and_then(romaji::romanize);

            let consonant = |sound: Option<&'static str>| sound.map(|s| &s[..s.len() - 1]);
            assert_eq!(consonant(kana), consonant(last), "{verb} in row {row:?}");
        }
    }
}

#[test]
fn onbin() {
    macro_rules! test {
        ($($verb:literal => $ta:literal, $te:literal),* $(,)?) => {
            $(
                assert_eq!(te_ta($verb, VerbClass::Godan, "た", "だ").unwrap(), $ta);
                assert_eq!(te_ta($verb, VerbClass::Godan, "て", "で").unwrap(), $te);
            )*
        };
    }

    test! {
        "使う" => "使った", "使って",
        "待つ" => "待った", "待って",
        "帰る" => "帰った", "帰って",
        "遊ぶ" => "遊んだ", "遊んで",
        "飲む" => "飲んだ", "飲んで",
        "死ぬ" => "死んだ", "死んで",
        "聞く" => "聞いた", "聞いて",
        "泳ぐ" => "泳いだ", "泳いで",
        "話す" => "話した", "話して",
    }
}

#[test]
fn nai_forms() {
    assert_eq!(nai("飲む", VerbClass::Godan, true).unwrap(), "飲まない");
    assert_eq!(nai("使う", VerbClass::Godan, true).unwrap(), "使わない");
    assert_eq!(nai("食べる", VerbClass::Ichidan, true).unwrap(), "食べない");
    assert_eq!(nai("勉強する", VerbClass::Irregular, true).unwrap(), "勉強しない");
    assert_eq!(nai("くる", VerbClass::Irregular, true).unwrap(), "こない");
    assert_eq!(nai("来る", VerbClass::Irregular, true).unwrap(), "来ない");
    assert_eq!(nai("飲め", VerbClass::Godan, false).unwrap(), "飲めない");
}

#[test]
fn irregular_rejects_regular_verbs() {
    let error = irregular("飲む", true, &Endings::all("ます")).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NonIrregularEnding { .. }));

    let error = positive::polite("食べる", VerbClass::Irregular, Tense::Nonpast).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NonIrregularEnding { .. }));
}

#[test]
fn irregular_missing_ending() {
    let endings = endings! {
        Suru => "されます",
    };

    assert_eq!(irregular("勉強する", false, &endings).unwrap(), "勉強されます");
    assert!(irregular("くる", false, &endings).unwrap_err().is_missing_form());
    assert!(irregular("来る", false, &endings).unwrap_err().is_missing_form());
}

#[test]
fn negative_te_is_missing() {
    for (verb, class) in [
        ("飲む", VerbClass::Godan),
        ("食べる", VerbClass::Ichidan),
        ("勉強する", VerbClass::Irregular),
    ] {
        assert!(negative::te(verb, class).unwrap_err().is_missing_form());
    }
}

#[test]
fn kuru_passive_is_plain_positive_only() {
    let polite = Form::Passive(Formality::Polite);
    let plain = Form::Passive(Formality::Plain);

    for verb in ["くる", "来る"] {
        assert!(positive::generate(verb, VerbClass::Irregular, plain).is_ok());
        assert!(positive::generate(verb, VerbClass::Irregular, polite)
            .unwrap_err()
            .is_missing_form());
        assert!(negative::generate(verb, VerbClass::Irregular, plain)
            .unwrap_err()
            .is_missing_form());
        assert!(negative::generate(verb, VerbClass::Irregular, polite)
            .unwrap_err()
            .is_missing_form());
    }
}

macro_rules! conjugations {
    ($verb:literal, $class:ident, { $($form:expr, $polarity:ident => $expected:literal),* $(,)? }) => {
        $(
            let form = $form;
            let actual = match Polarity::$polarity {
                Polarity::Positive => positive::generate($verb, VerbClass::$class, form),
                Polarity::Negative => negative::generate($verb, VerbClass::$class, form),
            };

            assert_eq!(
                actual.as_deref(),
                Ok($expected),
                "{} {} {:?}",
                $verb,
                form,
                Polarity::$polarity
            );
        )*
    };
}

#[test]
fn godan_nomu() {
    use Form::*;
    use Formality::Polite as P;
    use Formality::Plain as C;

    conjugations!("飲む", Godan, {
        Plain(Tense::Nonpast), Positive => "飲む",
        Plain(Tense::Past), Positive => "飲んだ",
        Plain(Tense::Nonpast), Negative => "飲まない",
        Plain(Tense::Past), Negative => "飲まなかった",
        Polite(Tense::Nonpast), Positive => "飲みます",
        Polite(Tense::Past), Positive => "飲みました",
        Polite(Tense::Nonpast), Negative => "飲みません",
        Polite(Tense::Past), Negative => "飲みませんでした",
        Te, Positive => "飲んで",
        Conditional(C), Positive => "飲んだら",
        Conditional(P), Positive => "飲みましたら",
        Conditional(C), Negative => "飲まなかったら",
        Conditional(P), Negative => "飲みませんでしたら",
        Volitional(C), Positive => "飲もう",
        Volitional(P), Positive => "飲みましょう",
        Volitional(C), Negative => "飲まないだろう",
        Volitional(P), Negative => "飲まないでしょう",
        Potential(C), Positive => "飲める",
        Potential(P), Positive => "飲めます",
        Potential(C), Negative => "飲めない",
        Potential(P), Negative => "飲めません",
        Imperative(C), Positive => "飲め",
        Imperative(P), Positive => "飲んでください",
        Imperative(C), Negative => "飲むな",
        Imperative(P), Negative => "飲まないでください",
        Provisional(C), Positive => "飲めば",
        Provisional(P), Positive => "飲めば",
        Provisional(C), Negative => "飲まなければ",
        Provisional(P), Negative => "飲まなければ",
        Causative(C), Positive => "飲ませる",
        Causative(P), Positive => "飲ませます",
        Causative(C), Negative => "飲ませない",
        Causative(P), Negative => "飲ませません",
        Passive(C), Positive => "飲まれる",
        Passive(P), Positive => "飲まれます",
        Passive(C), Negative => "飲まれない",
        Passive(P), Negative => "飲まれません",
    });
}

#[test]
fn godan_special_rows() {
    use Form::*;
    use Formality::Plain as C;

    conjugations!("使う", Godan, {
        Plain(Tense::Past), Positive => "使った",
        Plain(Tense::Nonpast), Negative => "使わない",
        Volitional(C), Positive => "使おう",
        Potential(C), Positive => "使える",
        Causative(C), Positive => "使わせる",
    });

    conjugations!("待つ", Godan, {
        Polite(Tense::Nonpast), Positive => "待ちます",
        Plain(Tense::Nonpast), Negative => "待たない",
        Imperative(C), Positive => "待て",
    });

    conjugations!("話す", Godan, {
        Te, Positive => "話して",
        Passive(C), Positive => "話される",
        Provisional(C), Positive => "話せば",
    });
}

#[test]
fn ichidan_taberu() {
    use Form::*;
    use Formality::Polite as P;
    use Formality::Plain as C;

    conjugations!("食べる", Ichidan, {
        Plain(Tense::Nonpast), Positive => "食べる",
        Plain(Tense::Past), Positive => "食べた",
        Plain(Tense::Nonpast), Negative => "食べない",
        Plain(Tense::Past), Negative => "食べなかった",
        Polite(Tense::Nonpast), Positive => "食べます",
        Polite(Tense::Past), Positive => "食べました",
        Polite(Tense::Nonpast), Negative => "食べません",
        Polite(Tense::Past), Negative => "食べませんでした",
        Te, Positive => "食べて",
        Conditional(C), Positive => "食べたら",
        Conditional(P), Positive => "食べましたら",
        Volitional(C), Positive => "食べよう",
        Volitional(P), Positive => "食べましょう",
        Volitional(C), Negative => "食べないだろう",
        Volitional(P), Negative => "食べないでしょう",
        Potential(C), Positive => "食べられる",
        Potential(P), Positive => "食べられます",
        Potential(C), Negative => "食べられない",
        Potential(P), Negative => "食べられません",
        Imperative(C), Positive => "食べろ",
        Imperative(P), Positive => "食べてください",
        Imperative(C), Negative => "食べるな",
        Imperative(P), Negative => "食べないでください",
        Provisional(C), Positive => "食べれば",
        Provisional(C), Negative => "食べなければ",
        Causative(C), Positive => "食べさせる",
        Causative(P), Positive => "食べさせます",
        Causative(C), Negative => "食べさせない",
        Causative(P), Negative => "食べさせません",
        Passive(C), Positive => "食べられる",
        Passive(P), Positive => "食べられます",
        Passive(C), Negative => "食べられない",
        Passive(P), Negative => "食べられません",
    });
}

#[test]
fn irregular_suru() {
    use Form::*;
    use Formality::Polite as P;
    use Formality::Plain as C;

    conjugations!("勉強する", Irregular, {
        Plain(Tense::Past), Positive => "勉強した",
        Plain(Tense::Nonpast), Negative => "勉強しない",
        Plain(Tense::Past), Negative => "勉強しなかった",
        Polite(Tense::Nonpast), Positive => "勉強します",
        Polite(Tense::Past), Positive => "勉強しました",
        Polite(Tense::Nonpast), Negative => "勉強しません",
        Polite(Tense::Past), Negative => "勉強しませんでした",
        Te, Positive => "勉強して",
        Conditional(C), Positive => "勉強したら",
        Conditional(P), Positive => "勉強しましたら",
        Conditional(C), Negative => "勉強しなかったら",
        Conditional(P), Negative => "勉強しませんでしたら",
        Volitional(C), Positive => "勉強しよう",
        Volitional(P), Positive => "勉強しましょう",
        Volitional(C), Negative => "勉強しないだろう",
        Volitional(P), Negative => "勉強しないでしょう",
        Potential(C), Positive => "勉強できる",
        Potential(P), Positive => "勉強できます",
        Potential(C), Negative => "勉強できない",
        Potential(P), Negative => "勉強できません",
        Imperative(C), Positive => "勉強しろ",
        Imperative(P), Positive => "勉強してください",
        Imperative(C), Negative => "勉強するな",
        Imperative(P), Negative => "勉強しないでください",
        Provisional(C), Positive => "勉強すれば",
        Provisional(P), Positive => "勉強しませば",
        Provisional(C), Negative => "勉強しなければ",
        Provisional(P), Negative => "勉強しませんなら",
        Causative(C), Positive => "勉強させる",
        Causative(C), Negative => "勉強させない",
        Passive(C), Positive => "勉強される",
        Passive(P), Positive => "勉強されます",
        Passive(C), Negative => "勉強されない",
    });
}

#[test]
fn irregular_kuru() {
    use Form::*;
    use Formality::Polite as P;
    use Formality::Plain as C;

    conjugations!("くる", Irregular, {
        Plain(Tense::Past), Positive => "きた",
        Plain(Tense::Nonpast), Negative => "こない",
        Plain(Tense::Past), Negative => "こなかった",
        Polite(Tense::Nonpast), Positive => "きます",
        Polite(Tense::Past), Negative => "きませんでした",
        Te, Positive => "きて",
        Conditional(C), Positive => "きたら",
        Conditional(P), Positive => "きましたら",
        Conditional(C), Negative => "こなかったら",
        Conditional(P), Negative => "きませんでしたら",
        Volitional(C), Positive => "こよう",
        Volitional(P), Positive => "きましょう",
        Volitional(C), Negative => "こないだろう",
        Volitional(P), Negative => "こないでしょう",
        Potential(C), Positive => "こられる",
        Potential(P), Negative => "こられません",
        Imperative(C), Positive => "こい",
        Imperative(P), Positive => "きてください",
        Imperative(C), Negative => "くるな",
        Imperative(P), Negative => "こないでください",
        Provisional(C), Positive => "くれば",
        Provisional(P), Positive => "きませば",
        Provisional(C), Negative => "こなければ",
        Provisional(P), Negative => "きませんなら",
        Causative(C), Positive => "こさせる",
        Causative(P), Positive => "こさせます",
        Causative(C), Negative => "こさせない",
        Causative(P), Negative => "こさせません",
        Passive(C), Positive => "こられる",
    });
}

#[test]
fn irregular_kuru_kanji() {
    use Form::*;
    use Formality::Polite as P;
    use Formality::Plain as C;

    conjugations!("来る", Irregular, {
        Plain(Tense::Past), Positive => "来た",
        Plain(Tense::Nonpast), Negative => "来ない",
        Plain(Tense::Past), Negative => "来なかった",
        Polite(Tense::Nonpast), Positive => "来ます",
        Polite(Tense::Nonpast), Negative => "来ません",
        Te, Positive => "来て",
        Conditional(C), Negative => "来なかったら",
        Conditional(P), Negative => "来ませんでしたら",
        Volitional(C), Positive => "来よう",
        Volitional(P), Positive => "来ましょう",
        Potential(C), Positive => "来られる",
        Potential(P), Positive => "来られます",
        Potential(C), Negative => "来られない",
        Imperative(C), Positive => "来い",
        Imperative(P), Positive => "来てください",
        Imperative(C), Negative => "来るな",
        Imperative(P), Negative => "来ないでください",
        Provisional(C), Positive => "来れば",
        Provisional(P), Positive => "来ませば",
        Provisional(C), Negative => "来なければ",
        Provisional(P), Negative => "来ませんなら",
        Causative(C), Positive => "来させる",
        Causative(P), Negative => "来させません",
        Passive(C), Positive => "来られる",
    });
}
