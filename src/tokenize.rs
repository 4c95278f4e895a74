use std::sync::LazyLock;

use regex::Regex;

use crate::hmm::tagger::Token;

static LEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^([¡¿(\[{"«'])(.+)$"#).expect("leading punctuation pattern"));
static TRAILING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(.+)([.:;,!?)\]}"»'])$"#).expect("trailing punctuation pattern"));

/// Splits raw text into tokens ready for tagging.
///
/// Text is split on whitespace, then at most one opening or closing
/// punctuation character is peeled off each piece into its own token.
/// Interior punctuation stays put.
pub fn tokenize(raw: &str) -> Vec<Token> {
    let mut sentence = Vec::new();
    for word in raw.split_whitespace() {
        let parts = LEADING.captures(word).or_else(|| TRAILING.captures(word));
        match parts {
            Some(caps) => {
                for part in [&caps[1], &caps[2]] {
                    sentence.push(Token::new(sentence.len(), part));
                }
            }
            None => sentence.push(Token::new(sentence.len(), word)),
        }
    }
    sentence
}
