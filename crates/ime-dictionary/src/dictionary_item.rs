// Plik dla elementów słownika: wpisów i komentarzy

use std::fmt;

use crate::error::Result;
use crate::part_of_speech::PartOfSpeech;
use crate::reading::validate_reading;

/// Pojedynczy wpis (słowo) słownika IME.
///
/// Czytanie jest walidowane przy tworzeniu i przy każdej zmianie przez
/// [`DictionaryEntry::set_reading`]. Pozostałe pola nie są sprawdzane.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryEntry {
    /// Czytanie słowa (klucz fonetyczny).
    reading: String,
    /// Samo słowo.
    word: String,
    part_of_speech: PartOfSpeech,
    /// Opcjonalny komentarz do słowa.
    comment: Option<String>,
}

impl DictionaryEntry {
    /// Tworzy nowy wpis.
    ///
    /// # Argumenty
    /// * `reading` - Czytanie; każdy znak musi być dozwolony (patrz [`crate::reading`]).
    /// * `word` - Słowo.
    /// * `part_of_speech` - Część mowy.
    /// * `comment` - Opcjonalny komentarz.
    ///
    /// # Zwraca
    /// `DictionaryError::InvalidReadingCharacter` dla pierwszego niedozwolonego znaku czytania.
    pub fn new(
        reading: impl Into<String>,
        word: impl Into<String>,
        part_of_speech: PartOfSpeech,
        comment: Option<String>,
    ) -> Result<Self> {
        let reading = reading.into();
        validate_reading(&reading)?;
        Ok(DictionaryEntry {
            reading,
            word: word.into(),
            part_of_speech,
            comment,
        })
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.part_of_speech
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Ustawia czytanie. Przy błędzie walidacji wpis pozostaje bez zmian.
    pub fn set_reading(&mut self, reading: impl Into<String>) -> Result<()> {
        let reading = reading.into();
        validate_reading(&reading)?;
        self.reading = reading;
        Ok(())
    }

    pub fn set_word(&mut self, word: impl Into<String>) {
        self.word = word.into();
    }

    pub fn set_part_of_speech(&mut self, part_of_speech: PartOfSpeech) {
        self.part_of_speech = part_of_speech;
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}

/// Formatuje podobnie do reprezentacji `WordData[...]`, z `null` dla braku komentarza.
impl fmt::Display for DictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DictionaryEntry[{}, {}, {}, {}]",
            self.reading,
            self.word,
            self.part_of_speech,
            self.comment.as_deref().unwrap_or("null")
        )
    }
}

/// Wiersz komentarza w słowniku. Treść może być dowolna.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DictionaryComment {
    content: String,
}

impl DictionaryComment {
    pub fn new(content: impl Into<String>) -> Self {
        DictionaryComment { content: content.into() }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl fmt::Display for DictionaryComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DictionaryComment[{}]", self.content)
    }
}

/// Element słownika: wpis albo komentarz, w kolejności z pliku.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DictionaryItem {
    Entry(DictionaryEntry),
    Comment(DictionaryComment),
}

impl DictionaryItem {
    pub fn is_comment(&self) -> bool {
        matches!(self, DictionaryItem::Comment(_))
    }

    pub fn as_entry(&self) -> Option<&DictionaryEntry> {
        match self {
            DictionaryItem::Entry(entry) => Some(entry),
            DictionaryItem::Comment(_) => None,
        }
    }

    pub fn as_comment(&self) -> Option<&DictionaryComment> {
        match self {
            DictionaryItem::Comment(comment) => Some(comment),
            DictionaryItem::Entry(_) => None,
        }
    }
}

impl From<DictionaryEntry> for DictionaryItem {
    fn from(entry: DictionaryEntry) -> Self {
        DictionaryItem::Entry(entry)
    }
}

impl From<DictionaryComment> for DictionaryItem {
    fn from(comment: DictionaryComment) -> Self {
        DictionaryItem::Comment(comment)
    }
}

impl fmt::Display for DictionaryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryItem::Entry(entry) => fmt::Display::fmt(entry, f),
            DictionaryItem::Comment(comment) => fmt::Display::fmt(comment, f),
        }
    }
}
