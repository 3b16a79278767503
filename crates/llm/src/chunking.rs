use once_cell::sync::Lazy;
use regex::Regex;

/// Terminal punctuation followed by a run of spaces
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?] +").unwrap());

/// Split text into sentence-like segments
///
/// A break happens right after `.`, `!` or `?` when one or more spaces follow;
/// the spaces are dropped and the punctuation stays with its sentence. This is
/// a heuristic: abbreviations, decimals and quotes are not special-cased.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Punctuation is ASCII, so +1 stays on a char boundary
        segments.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    segments.push(&text[start..]);

    segments
}

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into chunks of at most `max_chars` characters
///
/// Sentences are packed greedily, joined by a single space. A sentence that
/// alone exceeds the budget is cut into `max_chars`-sized slices. Lengths are
/// counted in chars, not bytes. Order is preserved and nothing but whitespace
/// is dropped.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in split_sentences(text) {
        let sentence_len = sentence.chars().count();

        if current_len + sentence_len + 1 <= max_chars {
            // The accumulator never carries surrounding whitespace
            let piece = if current.is_empty() {
                sentence.trim()
            } else {
                sentence.trim_end()
            };
            if !piece.is_empty() {
                if !current.is_empty() {
                    current.push(' ');
                    current_len += 1;
                }
                current.push_str(piece);
                current_len += piece.chars().count();
            }
            continue;
        }

        flush(&mut chunks, &mut current);
        current_len = 0;

        if sentence_len > max_chars {
            chunks.extend(force_split(sentence, max_chars));
        } else {
            let piece = sentence.trim();
            current.push_str(piece);
            current_len = piece.chars().count();
        }
    }

    flush(&mut chunks, &mut current);

    chunks
}

/// Move the accumulator into the output unless it is empty
fn flush(chunks: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        chunks.push(std::mem::take(current));
    }
}

/// Cut an oversized sentence into fixed-size slices
fn force_split(sentence: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = sentence.chars().collect();

    chars
        .chunks(max_chars)
        .map(|slice| slice.iter().collect::<String>())
        .filter(|slice| !slice.trim().is_empty())
        .collect()
}
