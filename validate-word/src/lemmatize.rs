use crate::oracle::NlpOracle;
use anyhow::Result;
use word_utils::LemmaToken;

/// Either one token list (plain-text input) or one list per sentence
/// (JSON-array input). Serializes as the bare list(s).
#[derive(Debug, serde::Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LemmaOutput {
    Single(Vec<LemmaToken>),
    Batch(Vec<Vec<LemmaToken>>),
}

/// Lemmatize `input`. A JSON array of strings is treated as a batch of
/// sentences; anything else (including valid JSON that is not an array) is
/// lemmatized as the raw input text.
pub async fn lemmatize_input(oracle: &impl NlpOracle, input: &str) -> Result<LemmaOutput> {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(serde_json::Value::Array(sentences)) => {
            let mut results = Vec::with_capacity(sentences.len());
            for sentence in &sentences {
                let sentence = sentence
                    .as_str()
                    .ok_or_else(|| anyhow::anyhow!("Sentence batches must contain only strings"))?;
                results.push(oracle.analyze(sentence).await?);
            }
            Ok(LemmaOutput::Batch(results))
        }
        _ => Ok(LemmaOutput::Single(oracle.analyze(input).await?)),
    }
}
