use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};


/// The conjugation class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerbClass {
    /// Godan or u-verb, where the final kana moves between sound rows.
    Godan,
    /// Ichidan or ru-verb, where the final る is dropped.
    Ichidan,
    /// The irregular する and くる verbs, including compounds such as
    /// 勉強する.
    Irregular,
}

impl VerbClass {
    pub const ALL: [VerbClass; 3] = [VerbClass::Godan, VerbClass::Ichidan, VerbClass::Irregular];

    /// Describe the class.
    pub fn describe(&self) -> &'static str {
        match self {
            VerbClass::Godan => "godan",
            VerbClass::Ichidan => "ichidan",
            VerbClass::Irregular => "irregular",
        }
    }
}

impl fmt::Display for VerbClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl FromStr for VerbClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VerbClass::ALL
            .into_iter()
            .find(|class| class.describe() == s)
            .ok_or_else(|| format!("Unknown verb class `{s}`"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tense {
    Nonpast,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    Plain,
    Polite,
}

/// A grammatical category, without the selectors it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Plain,
    Polite,
    Te,
    Conditional,
    Volitional,
    Potential,
    Imperative,
    Provisional,
    Causative,
    Passive,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Plain,
        Category::Polite,
        Category::Te,
        Category::Conditional,
        Category::Volitional,
        Category::Potential,
        Category::Imperative,
        Category::Provisional,
        Category::Causative,
        Category::Passive,
    ];

    /// Longer title for the category.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Plain => "plain, casual speech",
            Category::Polite => "polite, ~masu",
            Category::Te => "~te form, joins clauses and by itself acts as a request",
            Category::Conditional => "conditional, if ~, when ~",
            Category::Volitional => "volitional / presumptive, let's do ~",
            Category::Potential => "potential, can do ~",
            Category::Imperative => "imperative, do ~",
            Category::Provisional => "provisional, if ~ then",
            Category::Causative => "causative, make ~ do something, let / allow ~",
            Category::Passive => "passive, ~ was done to someone or something",
        }
    }

    /// Describe the category.
    pub fn describe(&self) -> &'static str {
        match self {
            Category::Plain => "plain",
            Category::Polite => "polite",
            Category::Te => "~te",
            Category::Conditional => "conditional",
            Category::Volitional => "volitional",
            Category::Potential => "potential",
            Category::Imperative => "imperative",
            Category::Provisional => "provisional",
            Category::Causative => "causative",
            Category::Passive => "passive",
        }
    }
}

impl fmt::Display for Category {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start_matches('~');

        Category::ALL
            .into_iter()
            .find(|category| category.describe().trim_start_matches('~') == s)
            .ok_or_else(|| format!("Unknown category `{s}`"))
    }
}

/// A grammatical category together with the selectors it takes.
///
/// Plain and polite are distinguished by formality already, so they only
/// take a tense. The te-form takes neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Form {
    Plain(Tense),
    Polite(Tense),
    Te,
    Conditional(Formality),
    Volitional(Formality),
    Potential(Formality),
    Imperative(Formality),
    Provisional(Formality),
    Causative(Formality),
    Passive(Formality),
}

impl Form {
    pub const ALL: [Form; 19] = [
        Form::Plain(Tense::Nonpast),
        Form::Plain(Tense::Past),
        Form::Polite(Tense::Nonpast),
        Form::Polite(Tense::Past),
        Form::Te,
        Form::Conditional(Formality::Plain),
        Form::Conditional(Formality::Polite),
        Form::Volitional(Formality::Plain),
        Form::Volitional(Formality::Polite),
        Form::Potential(Formality::Plain),
        Form::Potential(Formality::Polite),
        Form::Imperative(Formality::Plain),
        Form::Imperative(Formality::Polite),
        Form::Provisional(Formality::Plain),
        Form::Provisional(Formality::Polite),
        Form::Causative(Formality::Plain),
        Form::Causative(Formality::Polite),
        Form::Passive(Formality::Plain),
        Form::Passive(Formality::Polite),
    ];

    /// Construct a form from a category, keeping only the selector the
    /// category accepts.
    pub fn new(category: Category, tense: Tense, formality: Formality) -> Self {
        match category {
            Category::Plain => Form::Plain(tense),
            Category::Polite => Form::Polite(tense),
            Category::Te => Form::Te,
            Category::Conditional => Form::Conditional(formality),
            Category::Volitional => Form::Volitional(formality),
            Category::Potential => Form::Potential(formality),
            Category::Imperative => Form::Imperative(formality),
            Category::Provisional => Form::Provisional(formality),
            Category::Causative => Form::Causative(formality),
            Category::Passive => Form::Passive(formality),
        }
    }

    /// The category of the form.
    pub fn category(&self) -> Category {
        match self {
            Form::Plain(..) => Category::Plain,
            Form::Polite(..) => Category::Polite,
            Form::Te => Category::Te,
            Form::Conditional(..) => Category::Conditional,
            Form::Volitional(..) => Category::Volitional,
            Form::Potential(..) => Category::Potential,
            Form::Imperative(..) => Category::Imperative,
            Form::Provisional(..) => Category::Provisional,
            Form::Causative(..) => Category::Causative,
            Form::Passive(..) => Category::Passive,
        }
    }

    /// The tense selected by the form, if it takes one.
    pub fn tense(&self) -> Option<Tense> {
        match *self {
            Form::Plain(tense) | Form::Polite(tense) => Some(tense),
            _ => None,
        }
    }

    /// The formality of the form, if it takes one.
    pub fn formality(&self) -> Option<Formality> {
        match *self {
            Form::Plain(..) | Form::Polite(..) | Form::Te => None,
            Form::Conditional(formality)
            | Form::Volitional(formality)
            | Form::Potential(formality)
            | Form::Imperative(formality)
            | Form::Provisional(formality)
            | Form::Causative(formality)
            | Form::Passive(formality) => Some(formality),
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category().describe())?;

        if let Some(Tense::Past) = self.tense() {
            write!(f, " past")?;
        }

        if let Some(Formality::Polite) = self.formality() {
            write!(f, " polite")?;
        }

        Ok(())
    }
}

/// A form with a polarity, which uniquely identifies a conjugation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Inflection {
    pub form: Form,
    pub polarity: Polarity,
}

impl Inflection {
    #[inline]
    pub const fn new(form: Form, polarity: Polarity) -> Self {
        Self { form, polarity }
    }
}

impl fmt::Display for Inflection {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form)?;

        if let Polarity::Negative = self.polarity {
            write!(f, " negative")?;
        }

        Ok(())
    }
}
