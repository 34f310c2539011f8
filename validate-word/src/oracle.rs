use anyhow::{Context, Result};
use lexide::Lexide;
use word_utils::{LemmaToken, PartOfSpeech};

/// Endpoint serving the pretrained tagging/lemmatization model.
const LEXIDE_SERVER: &str = "https://anchpop--lexide-gemma-3-27b-vllm-serve.modal.run";

/// Tokenization, lemmatization, and POS tagging, supplied by a pretrained
/// model. Implementations must return tokens in sentence order.
// The returned futures never cross threads, so no `Send` bound is needed.
#[allow(async_fn_in_trait)]
pub trait NlpOracle {
    async fn analyze(&self, text: &str) -> Result<Vec<LemmaToken>>;
}

pub struct LexideOracle {
    lexide: Lexide,
}

impl LexideOracle {
    pub fn connect() -> Result<Self> {
        let lexide =
            Lexide::from_server(LEXIDE_SERVER).context("Failed to initialize lexide")?;
        Ok(Self { lexide })
    }
}

impl NlpOracle for LexideOracle {
    async fn analyze(&self, text: &str) -> Result<Vec<LemmaToken>> {
        let tokenization = self
            .lexide
            .analyze(text, lexide::Language::English)
            .await
            .with_context(|| format!("Failed to analyze text: {text}"))?;

        tokenization
            .tokens
            .iter()
            // Whitespace-only tokens carry no lemma or usable tag.
            .filter(|token| !matches!(token.pos, lexide::pos::PartOfSpeech::Space))
            .map(|token| {
                Ok(LemmaToken {
                    text: token.text.text.clone(),
                    lemma: token.lemma.lemma.clone(),
                    pos: convert_pos(token.pos)?,
                })
            })
            .collect()
    }
}

/// Both enums carry the same serde tags, so convert through the tag string.
fn convert_pos(pos: lexide::pos::PartOfSpeech) -> Result<PartOfSpeech> {
    let json = serde_json::to_string(&pos)?;
    Ok(serde_json::from_str(&json)?)
}
