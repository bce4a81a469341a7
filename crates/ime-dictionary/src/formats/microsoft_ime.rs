// Implementacja formatu tekstowego słownika użytkownika Microsoft IME

use std::path::Path;

use log::trace;

use crate::dictionary_format_trait::DictionaryFormat;
use crate::dictionary_item::{DictionaryComment, DictionaryEntry, DictionaryItem};
use crate::error::{DictionaryError, Result};
use crate::part_of_speech::PartOfSpeech;
use crate::text_codec::{read_utf16le_text, write_utf16le_text, BYTE_ORDER_MARK};

/// Format `.txt` eksportowany przez Microsoft IME.
///
/// Plik jest w UTF-16LE z BOM. Wiersz zaczynający się od `!` jest komentarzem,
/// każdy inny to wpis `czytanie<TAB>słowo<TAB>część mowy[<TAB>komentarz]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MicrosoftImeFormat;

impl MicrosoftImeFormat {
    pub const FIELD_SEPARATOR: char = '\t';
    pub const COMMENT_MARKER: char = '!';
    pub const FILE_EXTENSION: &'static str = "txt";

    pub fn new() -> Self {
        MicrosoftImeFormat
    }

    pub fn render_entry(&self, entry: &DictionaryEntry) -> String {
        let mut line = format!(
            "{}{sep}{}{sep}{}",
            entry.reading(),
            entry.word(),
            entry.part_of_speech().as_str(),
            sep = Self::FIELD_SEPARATOR
        );
        // Pusty komentarz traktujemy tak samo jak brak komentarza.
        if let Some(comment) = entry.comment().filter(|c| !c.is_empty()) {
            line.push(Self::FIELD_SEPARATOR);
            line.push_str(comment);
        }
        line
    }

    pub fn render_comment(&self, comment: &DictionaryComment) -> String {
        format!("{}{}", Self::COMMENT_MARKER, comment.content())
    }

    /// Parsuje wiersz komentarza. Usuwany jest tylko jeden wiodący `!`.
    pub fn parse_comment(&self, line: &str) -> DictionaryComment {
        DictionaryComment::new(line.strip_prefix(Self::COMMENT_MARKER).unwrap_or(line))
    }

    /// Parsuje wiersz wpisu z 3 lub 4 polami.
    pub fn parse_entry(&self, line: &str) -> Result<DictionaryEntry> {
        let fields: Vec<&str> = line.split(Self::FIELD_SEPARATOR).collect();

        let (reading, word, pos_text, comment) = match fields.as_slice() {
            [reading, word, pos] => (*reading, *word, *pos, None),
            [reading, word, pos, comment] => (*reading, *word, *pos, Some(comment.to_string())),
            _ => {
                return Err(DictionaryError::InvalidFieldCount {
                    line: line.to_string(),
                    count: fields.len(),
                })
            }
        };

        let into_line_error = |source: DictionaryError| DictionaryError::InvalidEntry {
            line: line.to_string(),
            source: Box::new(source),
        };
        let part_of_speech = pos_text.parse::<PartOfSpeech>().map_err(into_line_error)?;
        DictionaryEntry::new(reading, word, part_of_speech, comment).map_err(into_line_error)
    }
}

impl DictionaryFormat for MicrosoftImeFormat {
    fn render_item(&self, item: &DictionaryItem) -> String {
        match item {
            DictionaryItem::Entry(entry) => self.render_entry(entry),
            DictionaryItem::Comment(comment) => self.render_comment(comment),
        }
    }

    fn parse_line(&self, line: &str) -> Result<DictionaryItem> {
        trace!("Parsowanie wiersza: {:?}", line);
        if line.starts_with(Self::COMMENT_MARKER) {
            Ok(DictionaryItem::Comment(self.parse_comment(line)))
        } else {
            self.parse_entry(line).map(DictionaryItem::Entry)
        }
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        read_utf16le_text(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        write_utf16le_text(path, content)
    }

    fn file_extension(&self) -> &'static str {
        Self::FILE_EXTENSION
    }

    fn is_blank_line(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.is_empty() || trimmed.chars().eq(std::iter::once(BYTE_ORDER_MARK))
    }
}
