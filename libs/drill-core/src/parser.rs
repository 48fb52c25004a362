//! Pipe-delimited record parser for word and sentence lists.
//!
//! # Format
//! ```text
//! Traditional/Simplified | Pinyin | English
//! 妳好/你好 | nǐ hǎo | hello
//! 謝謝/谢谢 | xiè xie | thank you
//! I want to go | 我___去 | 要 | 我___去 | yào
//! Say it again | 再___一遍 | 说/說 | shuō
//! ```
//!
//! A row is a sentence when its second field contains [`BLANK_MARKER`],
//! otherwise it is a word. Word and sentence rows may be mixed freely.
//! Rows that cannot be read are skipped rather than failing the whole parse.

use crate::types::{Sentence, Word};

/// Field separator within a row.
pub const DELIMITER: char = '|';

/// Marks the elided answer position in a sentence.
pub const BLANK_MARKER: &str = "___";

/// Separates script variants within one field.
pub const VARIANT_SEPARATOR: char = '/';

/// Leading tokens that identify a column-header row.
const HEADER_TOKENS: [&str; 4] = ["traditional", "pinyin", "english", "chinese"];

const MIN_FIELDS: usize = 3;

/// Words and sentences read from one input.
#[derive(Debug, Clone, Default)]
pub struct ParsedRecords {
    pub words: Vec<Word>,
    pub sentences: Vec<Sentence>,
}

impl ParsedRecords {
    /// True when nothing at all could be read.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.sentences.is_empty()
    }
}

/// Parse delimited content into words and sentences.
pub fn parse(content: &str) -> ParsedRecords {
    let mut records = ParsedRecords::default();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        match parse_line(line) {
            LineType::Word(word) => records.words.push(word),
            LineType::Sentence(sentence) => records.sentences.push(sentence),
            LineType::Blank => {}
            LineType::Skipped(reason) => {
                tracing::debug!(line = line_num, reason, "skipped record");
            }
        }
    }

    tracing::debug!(
        words = records.words.len(),
        sentences = records.sentences.len(),
        "parsed records"
    );
    records
}

enum LineType {
    Word(Word),
    Sentence(Sentence),
    Blank,
    Skipped(&'static str),
}

fn parse_line(line: &str) -> LineType {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineType::Blank;
    }
    if is_header(trimmed) {
        return LineType::Skipped("header row");
    }

    let fields: Vec<&str> = trimmed.split(DELIMITER).map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return LineType::Skipped("too few fields");
    }

    if fields[1].contains(BLANK_MARKER) {
        parse_sentence(&fields)
            .map(LineType::Sentence)
            .unwrap_or(LineType::Skipped("incomplete sentence"))
    } else {
        parse_word(&fields)
            .map(LineType::Word)
            .unwrap_or(LineType::Skipped("incomplete word"))
    }
}

fn is_header(line: &str) -> bool {
    let token: String = line
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    HEADER_TOKENS
        .iter()
        .any(|header| token.eq_ignore_ascii_case(header))
}

fn parse_word(fields: &[&str]) -> Option<Word> {
    let (traditional, simplified) = split_variant(fields[0]);
    let (traditional, simplified) = match (traditional, simplified) {
        (t, "") => (t, t),
        ("", s) => (s, s),
        pair => pair,
    };
    let pinyin = fields[1];
    let joined = fields[2..].join(", ");
    let english = strip_quotes(&joined);

    if simplified.is_empty() || pinyin.is_empty() || english.is_empty() {
        return None;
    }
    Some(Word::new(traditional, simplified, pinyin, english))
}

fn parse_sentence(fields: &[&str]) -> Option<Sentence> {
    let english = fields[0];
    let blanked = fields[1];
    let (answer, answer_traditional) = split_variant(fields[2]);

    let (blanked_traditional, answer_pinyin) = match fields.get(3) {
        Some(field) if field.contains(BLANK_MARKER) => {
            (*field, fields.get(4).copied().unwrap_or(""))
        }
        Some(field) => ("", *field),
        None => ("", ""),
    };

    if english.is_empty() || blanked.is_empty() || answer.is_empty() {
        return None;
    }
    Some(Sentence::new(
        english,
        blanked,
        blanked_traditional,
        answer,
        answer_traditional,
        answer_pinyin,
    ))
}

/// Split `left/right` into its two trimmed parts. Without a separator the
/// right part is empty. Parts past the second are ignored.
fn split_variant(field: &str) -> (&str, &str) {
    let mut parts = field.split(VARIANT_SEPARATOR).map(str::trim);
    let left = parts.next().unwrap_or("");
    let right = parts.next().unwrap_or("");
    (left, right)
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(is_quote).unwrap_or(s);
    s.strip_suffix(is_quote).unwrap_or(s)
}

/// Render a word back into a row that parses to an equivalent word.
pub fn render_word(word: &Word) -> String {
    let script = if word.traditional == word.simplified {
        word.simplified.clone()
    } else {
        format!("{}{}{}", word.traditional, VARIANT_SEPARATOR, word.simplified)
    };
    let english = if word.english.starts_with(is_quote) || word.english.ends_with(is_quote) {
        format!("\"{}\"", word.english)
    } else {
        word.english.clone()
    };
    format!("{script} {DELIMITER} {} {DELIMITER} {english}", word.pinyin)
}

/// Render a sentence back into a row that parses to an equivalent sentence.
pub fn render_sentence(sentence: &Sentence) -> String {
    let mut fields = vec![sentence.english.clone(), sentence.chinese_with_blank.clone()];
    fields.push(match sentence.traditional_answer() {
        Some(traditional) => format!("{}{}{}", sentence.answer, VARIANT_SEPARATOR, traditional),
        None => sentence.answer.clone(),
    });
    if let Some(traditional) = sentence.traditional_sentence() {
        fields.push(traditional.to_string());
    }
    if !sentence.answer_pinyin.is_empty() {
        fields.push(sentence.answer_pinyin.clone());
    }
    let separator = format!(" {DELIMITER} ");
    fields.join(separator.as_str())
}

/// Render a full record list, words first.
pub fn render(words: &[Word], sentences: &[Sentence]) -> String {
    words
        .iter()
        .map(render_word)
        .chain(sentences.iter().map(render_sentence))
        .collect::<Vec<_>>()
        .join("\n")
}
