use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use katsuyou::{copula, Category, Form, Formality, Inflection, Polarity, Tense, VerbClass};
use serde::Serialize;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Conjugate Japanese verbs and the copula")]
struct Args {
    /// The dictionary form of the verb to conjugate, like 飲む.
    #[arg(required_unless_present = "copula")]
    verb: Option<String>,
    /// The class of the verb, one of `godan`, `ichidan` or `irregular`.
    #[arg(long, required_unless_present = "copula")]
    class: Option<VerbClass>,
    /// Only produce the given category, like `polite` or `te`. If not
    /// specified every defined conjugation is printed.
    #[arg(long = "form", name = "form")]
    category: Option<Category>,
    /// Use the past tense. Only affects plain and polite.
    #[arg(long)]
    past: bool,
    /// Use the polite formality.
    #[arg(long)]
    polite: bool,
    /// Use the negative polarity.
    #[arg(long)]
    negative: bool,
    /// Print the conjugations of the copula だ instead of a verb.
    #[arg(long, conflicts_with_all = ["verb", "class"])]
    copula: bool,
    /// Output JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Row {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    inflection: Option<Inflection>,
    text: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let tense = if args.past {
        Tense::Past
    } else {
        Tense::Nonpast
    };

    let formality = if args.polite {
        Formality::Polite
    } else {
        Formality::Plain
    };

    let polarity = if args.negative {
        Polarity::Negative
    } else {
        Polarity::Positive
    };

    let rows = if args.copula {
        copula_rows(tense, formality, polarity)
    } else {
        let (Some(verb), Some(class)) = (args.verb.as_deref(), args.class) else {
            anyhow::bail!("Both a verb and its class must be specified");
        };

        match args.category {
            Some(category) => {
                let form = Form::new(category, tense, formality);

                let text = katsuyou::generate(verb, class, form, polarity)
                    .with_context(|| format!("Conjugating `{verb}` ({class}) into {form}"))?;

                let inflection = Inflection::new(form, polarity);

                vec![Row {
                    name: inflection.to_string(),
                    inflection: Some(inflection),
                    text,
                }]
            }
            None => {
                let conjugations = katsuyou::conjugate(verb, class)
                    .with_context(|| format!("Conjugating `{verb}` ({class})"))?;

                tracing::debug!(count = conjugations.len(), "conjugated");

                conjugations
                    .iter()
                    .map(|(inflection, text)| Row {
                        name: inflection.to_string(),
                        inflection: Some(*inflection),
                        text: text.to_owned(),
                    })
                    .collect()
            }
        }
    };

    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut o, &rows)?;
        writeln!(o)?;
    } else {
        let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);

        for row in &rows {
            writeln!(o, "{:width$}  {}", row.name, row.text)?;
        }
    }

    Ok(())
}

/// Selectors are only applied to the copula forms which accept them.
fn copula_rows(tense: Tense, formality: Formality, polarity: Polarity) -> Vec<Row> {
    let row = |name: &str, text: &str| Row {
        name: name.to_owned(),
        inflection: None,
        text: text.to_owned(),
    };

    vec![
        row("plain", copula::plain(tense, polarity)),
        row("polite", copula::polite(tense, polarity)),
        row("conditional", copula::conditional()),
        row("presumptive", copula::presumptive(formality, polarity)),
        row("~te", copula::te(formality)),
        row("~tara", copula::tara(formality)),
    ]
}
