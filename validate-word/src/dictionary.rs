use anyhow::{Context, Result};
use wordfreq::WordFreq;
use wordfreq_model::ModelKind;

/// Membership test against a word-frequency dictionary. Callers pass
/// lowercased text.
pub trait SpellDictionary {
    fn contains(&self, word: &str) -> bool;
}

/// Spelling lookup over the large English word-frequency list.
pub struct FrequencyDictionary {
    wordfreq: WordFreq,
}

impl FrequencyDictionary {
    pub fn load() -> Result<Self> {
        let wordfreq = wordfreq_model::load_wordfreq(ModelKind::LargeEn)
            .context("Failed to load the word frequency model")?;
        Ok(Self { wordfreq })
    }
}

impl SpellDictionary for FrequencyDictionary {
    fn contains(&self, word: &str) -> bool {
        self.wordfreq.word_frequency(word) > 0.0
    }
}
