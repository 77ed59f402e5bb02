//! Sentence splitting for summary length selection.
//!
//! A character scan with boundary heuristics: abbreviations, initials,
//! decimal numbers, and quoted terminal punctuation do not end a sentence.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Initials and initialisms: "J", "U.S", "e.g" (as collected before a period).
    static ref INITIALISM: Regex = Regex::new(r"^[A-Za-z](?:\.[A-Za-z])*$").unwrap();
}

/// Common abbreviations that end in a period mid-sentence, stored without dots.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "st", "gen", "sen",
    "rep", "vs", "etc", "inc", "ltd", "co", "corp", "dept", "univ", "fig",
    "et", "al", "cf", "pp", "est", "approx", "no", "vol",
];

/// Split text into sentences.
///
/// Terminators are `.`, `!` and `?`. A terminator only closes a sentence when
/// followed by whitespace (so decimals, URLs and file names stay intact), the
/// preceding word is not a known abbreviation or initial, and the next
/// sentence does not open with a lowercase letter. Closing quotes and
/// brackets directly after the terminator belong to the finished sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if is_terminator(ch) {
            // Pull trailing closers ("quoted sentence." -> quote included)
            let mut after = i + 1;
            while after < chars.len() && is_closer(chars[after]) {
                current.push(chars[after]);
                after += 1;
            }

            if is_boundary(&chars, ch, &word_before(&chars, i), after) {
                push_trimmed(&mut sentences, &mut current);
            }

            i = after;
            continue;
        }

        i += 1;
    }

    push_trimmed(&mut sentences, &mut current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
    current.clear();
}

const fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201d}' | '\u{2019}' | ')' | ']')
}

const fn is_opener(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201c}' | '\u{2018}' | '(' | '[')
}

/// The token directly before position `pos`, letters, digits and inner
/// periods included ("Mr", "U.S", "3").
fn word_before(chars: &[char], pos: usize) -> String {
    let mut start = pos;
    while start > 0 {
        let prev = chars[start - 1];
        if prev.is_alphanumeric() || prev == '.' {
            start -= 1;
        } else {
            break;
        }
    }
    chars[start..pos].iter().collect()
}

fn is_boundary(chars: &[char], terminator: char, word: &str, after: usize) -> bool {
    let Some(&next) = chars.get(after) else {
        return true;
    };

    // "3.14", "v1.2.3", "example.com" and friends
    if !next.is_whitespace() {
        return false;
    }

    if terminator == '.' && is_abbreviation(word) {
        return false;
    }

    let mut k = after;
    while k < chars.len() && chars[k].is_whitespace() {
        k += 1;
    }
    let Some(&first) = chars.get(k) else {
        return true;
    };
    let mut lead = first;
    if is_opener(lead) {
        match chars.get(k + 1) {
            Some(&c) => lead = c,
            None => return true,
        }
    }

    // A lowercase continuation means the terminator was not a full stop
    !lead.is_lowercase()
}

fn is_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let bare: String = word.chars().filter(|c| *c != '.').collect();
    if ABBREVIATIONS.contains(&bare.to_lowercase().as_str()) {
        return true;
    }
    INITIALISM.is_match(word)
}
