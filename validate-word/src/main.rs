mod dictionary;
mod lemmatize;
mod oracle;
mod validator;

use dictionary::{FrequencyDictionary, SpellDictionary};
use oracle::{LexideOracle, NlpOracle};

/// The two terminal failures, reported as `{"error": ...}` on stdout with
/// exit code 1. Callers match on these exact strings.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("No word provided")]
    NoWordProvided,
    #[error("spaCy model not found")]
    ModelNotFound,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Validate(String),
    Lemmatize(String),
}

fn parse_command(args: &[String]) -> Option<Command> {
    match args {
        [_, flag, text, ..] if flag == "--sentence" => Some(Command::Lemmatize(text.clone())),
        // A lone `--sentence` is not special: it is validated as a word.
        [_, word, ..] => Some(Command::Validate(word.clone())),
        _ => None,
    }
}

fn load_model() -> anyhow::Result<(LexideOracle, FrequencyDictionary)> {
    let oracle = LexideOracle::connect()?;
    let dictionary = FrequencyDictionary::load()?;
    Ok((oracle, dictionary))
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args, load_model).await {
        Ok(output) => println!("{output}"),
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => {
                    println!("{}", serde_json::json!({ "error": cli_err.to_string() }))
                }
                None => eprintln!("{err:#}"),
            }
            std::process::exit(1);
        }
    }
}

/// The model loads before the arguments are inspected, so a broken model
/// is reported even when no argument was given.
async fn run<O: NlpOracle, D: SpellDictionary>(
    args: &[String],
    load: impl FnOnce() -> anyhow::Result<(O, D)>,
) -> anyhow::Result<String> {
    let (oracle, dictionary) = load().map_err(|err| {
        log::error!("failed to load the NLP model or dictionary: {err:#}");
        CliError::ModelNotFound
    })?;
    let command = parse_command(args).ok_or(CliError::NoWordProvided)?;

    let output = match command {
        Command::Validate(word) => {
            serde_json::to_string(&validator::validate_word(&oracle, &dictionary, &word).await?)?
        }
        Command::Lemmatize(text) => {
            serde_json::to_string(&lemmatize::lemmatize_input(&oracle, &text).await?)?
        }
    };

    Ok(output)
}
