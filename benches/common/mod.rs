use postagger::Corpus;

const WORDS: [(&str, &str); 12] = [
    ("el", "DET"),
    ("la", "DET"),
    ("gato", "NOUN"),
    ("casa", "NOUN"),
    ("perro", "NOUN"),
    ("corre", "VERB"),
    ("duerme", "VERB"),
    ("grande", "ADJ"),
    ("roja", "ADJ"),
    ("en", "ADP"),
    ("y", "CCONJ"),
    (".", "PUNCT"),
];

/// Deterministic pseudo-random sentences over a small vocabulary.
pub fn synthetic(n: usize) -> Corpus {
    let mut state = 0x2545f491u64;
    let lines: Vec<String> = (0..n)
        .map(|_| {
            let len = 5 + (state % 20) as usize;
            (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    let (w, t) = WORDS[(state % WORDS.len() as u64) as usize];
                    format!("{w}{}/{t}", state % 97)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    Corpus::from_lines("bench", lines.iter().map(String::as_str))
}
