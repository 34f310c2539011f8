use crate::dictionary::SpellDictionary;
use crate::oracle::NlpOracle;
use anyhow::Result;
use word_utils::{Language, PartOfSpeech, WordValidation, contains_cjk, is_wordlike};

/// Judge whether `text` is a real word or phrase.
///
/// Chinese text is accepted on sight. English text must be well-formed
/// (letters, spaces, hyphens) and either spelled correctly as a whole or
/// rescued by its part of speech: a capitalized proper noun for single
/// words, or any noun/verb/adjective token for multi-word phrases.
pub async fn validate_word(
    oracle: &impl NlpOracle,
    dictionary: &impl SpellDictionary,
    text: &str,
) -> Result<WordValidation> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(WordValidation {
            is_valid: false,
            root_form: None,
            language: Language::English,
        });
    }

    if contains_cjk(text) {
        return Ok(WordValidation {
            is_valid: true,
            root_form: None,
            language: Language::Chinese,
        });
    }

    let spell_ok = dictionary.contains(&text.to_lowercase());
    let tokens = oracle.analyze(text).await?;
    let root_form = tokens
        .iter()
        .map(|token| token.lemma.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let wordlike = is_wordlike(text);
    log::debug!("{text:?}: spell_ok={spell_ok} wordlike={wordlike} tokens={}", tokens.len());

    let is_valid = match &tokens[..] {
        [token] => {
            // A misspelled single word only passes if it looks like a name.
            let proper_noun = token.pos == PartOfSpeech::Propn
                && text.chars().next().is_some_and(char::is_uppercase);
            wordlike && (spell_ok || proper_noun)
        }
        tokens => {
            // Phrases get a looser check: one recognizable content word is
            // enough, even when the phrase as a whole is not in the
            // dictionary.
            let has_content_word = tokens.iter().any(|token| {
                matches!(
                    token.pos,
                    PartOfSpeech::Noun | PartOfSpeech::Verb | PartOfSpeech::Adj
                )
            });
            wordlike && (spell_ok || has_content_word)
        }
    };

    Ok(WordValidation {
        is_valid,
        root_form: Some(root_form),
        language: Language::English,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::fake::WordListDictionary;
    use crate::oracle::fake::FakeOracle;

    fn english_dictionary() -> WordListDictionary {
        WordListDictionary::new(&["cat", "cats", "run", "running", "world", "well-known"])
    }

    #[tokio::test]
    async fn chinese_text_is_accepted_without_analysis() {
        let oracle = FakeOracle::new(&[]);
        let dictionary = WordListDictionary::new(&[]);

        for text in ["飛機", "你好", "abc飛def", "  飛  "] {
            let result = validate_word(&oracle, &dictionary, text).await.unwrap();
            assert!(result.is_valid, "{text:?} should be valid");
            assert_eq!(result.language, Language::Chinese);
            assert_eq!(result.root_form, None);
        }
    }

    #[tokio::test]
    async fn empty_and_whitespace_are_invalid_english() {
        let oracle = FakeOracle::new(&[]);
        let dictionary = english_dictionary();

        for text in ["", "   ", "\t\n"] {
            let result = validate_word(&oracle, &dictionary, text).await.unwrap();
            assert_eq!(
                result,
                WordValidation {
                    is_valid: false,
                    root_form: None,
                    language: Language::English,
                }
            );
        }
    }

    #[tokio::test]
    async fn known_single_word_is_valid_with_root_form() {
        let oracle = FakeOracle::new(&[("cats", "cat", PartOfSpeech::Noun)]);
        let dictionary = english_dictionary();

        let result = validate_word(&oracle, &dictionary, "cats").await.unwrap();
        assert!(result.is_valid);
        assert_eq!(result.root_form.as_deref(), Some("cat"));
        assert_eq!(result.language, Language::English);
    }

    #[tokio::test]
    async fn unknown_single_word_needs_capitalized_proper_noun_tag() {
        let dictionary = english_dictionary();

        // Tagged PROPN and capitalized: accepted as a name.
        let oracle = FakeOracle::new(&[("Xyzzyplonk", "Xyzzyplonk", PartOfSpeech::Propn)]);
        let result = validate_word(&oracle, &dictionary, "Xyzzyplonk")
            .await
            .unwrap();
        assert!(result.is_valid);

        // Tagged PROPN but lowercase: rejected.
        let oracle = FakeOracle::new(&[("xyzzyplonk", "xyzzyplonk", PartOfSpeech::Propn)]);
        let result = validate_word(&oracle, &dictionary, "xyzzyplonk")
            .await
            .unwrap();
        assert!(!result.is_valid);

        // Capitalized but not tagged PROPN: rejected.
        let oracle = FakeOracle::new(&[("Xyzzyplonk", "xyzzyplonk", PartOfSpeech::X)]);
        let result = validate_word(&oracle, &dictionary, "Xyzzyplonk")
            .await
            .unwrap();
        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn phrase_passes_on_a_single_content_word() {
        let dictionary = english_dictionary();

        // "helo" is misspelled, but "world" is a noun, so the phrase passes.
        let oracle = FakeOracle::new(&[("world", "world", PartOfSpeech::Noun)]);
        let result = validate_word(&oracle, &dictionary, "helo world")
            .await
            .unwrap();
        assert!(result.is_valid);
        assert_eq!(result.root_form.as_deref(), Some("helo world"));

        // No token is a noun, verb, or adjective, and the joined phrase is
        // not in the dictionary either.
        let oracle = FakeOracle::new(&[]);
        let result = validate_word(&oracle, &dictionary, "helo wrld")
            .await
            .unwrap();
        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn digits_and_punctuation_disqualify_even_dictionary_words() {
        let oracle = FakeOracle::new(&[("apple!!!", "apple", PartOfSpeech::Noun)]);
        let dictionary = WordListDictionary::new(&["apple!!!", "12345"]);

        let result = validate_word(&oracle, &dictionary, "apple!!!")
            .await
            .unwrap();
        assert!(!result.is_valid);

        let result = validate_word(&oracle, &dictionary, "12345").await.unwrap();
        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn hyphenated_word_is_wordlike() {
        let oracle = FakeOracle::new(&[("well-known", "well-known", PartOfSpeech::Adj)]);
        let dictionary = english_dictionary();

        let result = validate_word(&oracle, &dictionary, "well-known")
            .await
            .unwrap();
        assert!(result.is_valid);
    }

    #[tokio::test]
    async fn root_form_joins_lemmas_in_token_order() {
        let oracle = FakeOracle::new(&[
            ("cats", "cat", PartOfSpeech::Noun),
            ("running", "run", PartOfSpeech::Verb),
        ]);
        let dictionary = english_dictionary();

        let result = validate_word(&oracle, &dictionary, "cats running")
            .await
            .unwrap();
        assert_eq!(result.root_form.as_deref(), Some("cat run"));
    }

    #[tokio::test]
    async fn repeated_validation_yields_byte_identical_json() {
        let oracle = FakeOracle::new(&[("cats", "cat", PartOfSpeech::Noun)]);
        let dictionary = english_dictionary();

        let first =
            serde_json::to_string(&validate_word(&oracle, &dictionary, "cats").await.unwrap())
                .unwrap();
        let second =
            serde_json::to_string(&validate_word(&oracle, &dictionary, "cats").await.unwrap())
                .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn leading_and_trailing_whitespace_is_trimmed() {
        let oracle = FakeOracle::new(&[("cat", "cat", PartOfSpeech::Noun)]);
        let dictionary = english_dictionary();

        let result = validate_word(&oracle, &dictionary, "  cat  ").await.unwrap();
        assert!(result.is_valid);
        assert_eq!(result.root_form.as_deref(), Some("cat"));
    }
}
