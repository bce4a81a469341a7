// Plik dla struktury Dictionary

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::dictionary_format_trait::DictionaryFormat;
use crate::dictionary_item::{DictionaryComment, DictionaryEntry, DictionaryItem};
use crate::error::Result;
use crate::formats::MicrosoftImeFormat;
use crate::part_of_speech::PartOfSpeech;

/// Reprezentuje słownik użytkownika IME w formacie `F`.
///
/// Elementy są przechowywane w kolejności wierszy pliku. Słownik można tylko
/// rozszerzać (`add_entry`, `add_comment`); zapis następuje wyłącznie przez
/// jawne wywołanie [`Dictionary::save_to_file`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary<F: DictionaryFormat = MicrosoftImeFormat> {
    /// Nazwa słownika, używana jako nazwa pliku przy zapisie.
    name: String,
    /// Katalog, w którym zapisywany jest plik.
    save_path: PathBuf,
    items: Vec<DictionaryItem>,
    format: F,
}

/// Słownik w formacie Microsoft IME.
pub type MicrosoftImeDictionary = Dictionary<MicrosoftImeFormat>;

impl<F: DictionaryFormat> Dictionary<F> {
    /// Tworzy pusty słownik zapisywany w bieżącym katalogu.
    pub fn new(name: impl Into<String>) -> Self {
        Dictionary {
            name: name.into(),
            save_path: PathBuf::new(),
            items: Vec::new(),
            format: F::default(),
        }
    }

    pub fn with_save_path(mut self, save_path: impl Into<PathBuf>) -> Self {
        self.save_path = save_path.into();
        self
    }

    /// Wczytuje słownik z pliku.
    ///
    /// Katalogiem zapisu staje się katalog nadrzędny `path`, a nazwą `name`
    /// lub (gdy `None`) nazwa pliku bez rozszerzenia. Błąd w dowolnym wierszu
    /// przerywa całe wczytywanie.
    pub fn from_file<P: AsRef<Path>>(path: P, name: Option<&str>) -> Result<Self> {
        let path_ref = path.as_ref();
        let name = match name {
            Some(name) => name.to_string(),
            None => path_ref
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let save_path = path_ref.parent().map(Path::to_path_buf).unwrap_or_default();

        let format = F::default();
        let text = format.read_text(path_ref)?;
        let dictionary = Self::from_text(name, &text)?.with_save_path(save_path);
        debug!(
            "Wczytano słownik '{}' z '{}' ({} elementów)",
            dictionary.name,
            path_ref.display(),
            dictionary.items.len()
        );
        Ok(dictionary)
    }

    /// Parsuje zdekodowany tekst słownika. Puste wiersze są pomijane.
    pub fn from_text(name: impl Into<String>, text: &str) -> Result<Self> {
        let mut dictionary = Self::new(name);
        for line in split_lines(text) {
            if dictionary.format.is_blank_line(line) {
                continue;
            }
            let item = dictionary.format.parse_line(line)?;
            dictionary.items.push(item);
        }
        Ok(dictionary)
    }

    /// Dodaje nowy wpis na końcu słownika.
    ///
    /// # Argumenty
    /// * `reading` - Czytanie nowego słowa.
    /// * `word` - Nowe słowo.
    /// * `part_of_speech` - Część mowy (`PartOfSpeech::default()` to rzeczownik).
    /// * `comment` - Opcjonalny komentarz.
    ///
    /// # Zwraca
    /// Kopię dodanego wpisu. Przy błędzie walidacji słownik się nie zmienia.
    pub fn add_entry(
        &mut self,
        reading: impl Into<String>,
        word: impl Into<String>,
        part_of_speech: PartOfSpeech,
        comment: Option<String>,
    ) -> Result<DictionaryEntry> {
        let entry = DictionaryEntry::new(reading, word, part_of_speech, comment)?;
        self.items.push(DictionaryItem::Entry(entry.clone()));
        Ok(entry)
    }

    /// Dodaje nowy komentarz na końcu słownika.
    pub fn add_comment(&mut self, content: impl Into<String>) -> DictionaryComment {
        let comment = DictionaryComment::new(content);
        self.items.push(DictionaryItem::Comment(comment.clone()));
        comment
    }

    /// Zapisuje słownik do `save_path/<name>.<rozszerzenie>`, nadpisując plik.
    pub fn save_to_file(&self) -> Result<()> {
        let file_path = self.file_path();
        self.format.write_text(&file_path, &self.to_text())?;
        debug!(
            "Zapisano słownik '{}' do '{}' ({} elementów)",
            self.name,
            file_path.display(),
            self.items.len()
        );
        Ok(())
    }

    /// Tekst zapisywany przez `save_to_file`: każdy element w osobnym wierszu
    /// zakończonym `\n`.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for item in &self.items {
            text.push_str(&self.format.render_item(item));
            text.push('\n');
        }
        text
    }

    pub fn items(&self) -> &[DictionaryItem] {
        &self.items
    }

    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.items.iter().filter_map(DictionaryItem::as_entry)
    }

    pub fn comments(&self) -> impl Iterator<Item = &DictionaryComment> {
        self.items.iter().filter_map(DictionaryItem::as_comment)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn set_save_path(&mut self, save_path: impl Into<PathBuf>) {
        self.save_path = save_path.into();
    }

    pub fn file_path(&self) -> PathBuf {
        self.save_path
            .join(format!("{}.{}", self.name, self.format.file_extension()))
    }
}

/// Znaki kończące wiersz: `\n`, `\r` (także jako `\r\n`) oraz separatory Unicode.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{001C}' | '\u{001D}' | '\u{001E}'
            | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Dzieli tekst na wiersze bez znaków końca wiersza. `\r\n` liczy się jako jeden podział.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(is_line_break) {
            Some(pos) => {
                let line = &rest[..pos];
                let tail = &rest[pos..];
                let break_len = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = &tail[break_len..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

impl<F: DictionaryFormat> fmt::Display for Dictionary<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DictionaryError, ErrorKind};
    use crate::text_codec::{read_utf16le_text, write_utf16le_text};
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    fn sample_dictionary(dir: &Path) -> Result<MicrosoftImeDictionary> {
        let mut dict = MicrosoftImeDictionary::new("test").with_save_path(dir);
        dict.add_entry("ことば", "言葉", PartOfSpeech::default(), None)?;
        dict.add_entry("ごれい", "語例", PartOfSpeech::default(), None)?;
        dict.add_comment("何か");
        dict.add_entry("さとう", "佐藤さん", PartOfSpeech::PersonName, Some("同僚".to_string()))?;
        Ok(dict)
    }

    #[test]
    fn test_new_dictionary_is_empty() {
        let dict = MicrosoftImeDictionary::new("pusty");
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.name(), "pusty");
        assert_eq!(dict.save_path(), Path::new(""));
        assert_eq!(dict.file_path(), PathBuf::from("pusty.txt"));
        assert_eq!(dict.to_text(), "");
    }

    #[test]
    fn test_add_entry_and_comment() -> Result<()> {
        let mut dict = MicrosoftImeDictionary::new("test");

        let entry = dict.add_entry("abc123", "ABC", PartOfSpeech::Noun, None)?;
        assert_eq!(entry.reading(), "abc123");
        let comment = dict.add_comment("hello");
        assert_eq!(comment.content(), "hello");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.items()[0], DictionaryItem::Entry(entry));
        assert_eq!(dict.items()[1], DictionaryItem::Comment(comment));
        assert_eq!(dict.to_text(), "abc123\tABC\t名詞\n!hello\n");
        Ok(())
    }

    #[test]
    fn test_add_entry_invalid_reading_leaves_items_untouched() -> Result<()> {
        let mut dict = MicrosoftImeDictionary::new("test");
        dict.add_comment("początek");

        let res = dict.add_entry("abc#123", "x", PartOfSpeech::Noun, None);
        assert_matches!(res, Err(DictionaryError::InvalidReadingCharacter { character: '#', .. }));
        assert_eq!(dict.len(), 1);
        Ok(())
    }

    #[test]
    fn test_entries_and_comments_iterators() -> Result<()> {
        let temp_dir = tempdir()?;
        let dict = sample_dictionary(temp_dir.path())?;

        let words: Vec<&str> = dict.entries().map(|e| e.word()).collect();
        assert_eq!(words, vec!["言葉", "語例", "佐藤さん"]);
        let comments: Vec<&str> = dict.comments().map(|c| c.content()).collect();
        assert_eq!(comments, vec!["何か"]);
        Ok(())
    }

    #[test]
    fn test_save_writes_expected_text() -> Result<()> {
        let temp_dir = tempdir()?;
        let dict = sample_dictionary(temp_dir.path())?;
        dict.save_to_file()?;

        let path = temp_dir.path().join("test.txt");
        let raw = fs::read(&path)?;
        assert_eq!(&raw[..2], &[0xFF, 0xFE]);
        assert_eq!(
            read_utf16le_text(&path)?,
            "ことば\t言葉\t名詞\nごれい\t語例\t名詞\n!何か\nさとう\t佐藤さん\t人名\t同僚\n"
        );
        assert_eq!(format!("{}", dict), dict.to_text());
        Ok(())
    }

    #[test]
    fn test_save_then_load_round_trip() -> Result<()> {
        let temp_dir = tempdir()?;
        let dict = sample_dictionary(temp_dir.path())?;
        dict.save_to_file()?;

        let loaded = MicrosoftImeDictionary::from_file(temp_dir.path().join("test.txt"), None)?;
        assert_eq!(loaded.items(), dict.items());
        assert_eq!(loaded.name(), "test");
        assert_eq!(loaded.save_path(), temp_dir.path());
        Ok(())
    }

    #[test]
    fn test_load_with_name_then_save_under_new_name() -> Result<()> {
        let temp_dir = tempdir()?;
        sample_dictionary(temp_dir.path())?.save_to_file()?;

        let mut dict2 = MicrosoftImeDictionary::from_file(temp_dir.path().join("test.txt"), Some("test2"))?;
        dict2.add_entry("はんたーはんたー", "HUNTER×HUNTER", PartOfSpeech::default(), None)?;
        dict2.save_to_file()?;

        let reloaded = MicrosoftImeDictionary::from_file(temp_dir.path().join("test2.txt"), None)?;
        assert_eq!(reloaded.len(), 5);
        assert_eq!(reloaded.entries().last().map(|e| e.word()), Some("HUNTER×HUNTER"));
        // Oryginalny plik nie zmienia się
        assert_eq!(MicrosoftImeDictionary::from_file(temp_dir.path().join("test.txt"), None)?.len(), 4);
        Ok(())
    }

    #[test]
    fn test_save_overwrites_existing_file() -> Result<()> {
        let temp_dir = tempdir()?;
        sample_dictionary(temp_dir.path())?.save_to_file()?;

        let mut small = MicrosoftImeDictionary::new("test").with_save_path(temp_dir.path());
        small.add_comment("tylko to");
        small.save_to_file()?;

        assert_eq!(read_utf16le_text(temp_dir.path().join("test.txt"))?, "!tylko to\n");
        Ok(())
    }

    #[test]
    fn test_load_skips_blank_lines() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("puste.txt");
        write_utf16le_text(
            &path,
            "\n!nagłówek\n\n   \nことば\t言葉\t名詞\r\n\t\n\u{feff}\nごれい\t語例\t名詞\n\n",
        )?;

        let dict = MicrosoftImeDictionary::from_file(&path, None)?;
        let rendered: Vec<String> = dict
            .items()
            .iter()
            .map(|item| MicrosoftImeFormat::new().render_item(item))
            .collect();
        assert_eq!(rendered, vec!["!nagłówek", "ことば\t言葉\t名詞", "ごれい\t語例\t名詞"]);
        Ok(())
    }

    #[test]
    fn test_load_is_all_or_nothing() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("zly.txt");
        write_utf16le_text(&path, "ことば\t言葉\t名詞\nごれい\t語例\t動物\n")?;

        let res = MicrosoftImeDictionary::from_file(&path, None);
        assert_matches!(res, Err(DictionaryError::InvalidEntry { .. }));
        assert_eq!(res.unwrap_err().kind(), ErrorKind::Validation);
        Ok(())
    }

    #[test]
    fn test_load_wrong_field_count() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("pola.txt");
        write_utf16le_text(&path, "ことば\t言葉\n")?;

        assert_matches!(
            MicrosoftImeDictionary::from_file(&path, None),
            Err(DictionaryError::InvalidFieldCount { count: 2, .. })
        );
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempdir().unwrap();
        let res = MicrosoftImeDictionary::from_file(temp_dir.path().join("brak.txt"), None);
        assert_matches!(res, Err(DictionaryError::Io(_)));
    }

    #[test]
    fn test_save_into_missing_directory_fails() -> Result<()> {
        let temp_dir = tempdir()?;
        let dict = sample_dictionary(&temp_dir.path().join("brak"))?;
        assert_matches!(dict.save_to_file(), Err(DictionaryError::Io(_)));
        Ok(())
    }

    #[test]
    fn test_from_text_preserves_comment_and_entry_order() -> Result<()> {
        let dict = MicrosoftImeDictionary::from_text("t", "!a\nx\tX\t名詞\n!b\n")?;
        assert!(dict.items()[0].is_comment());
        assert!(!dict.items()[1].is_comment());
        assert!(dict.items()[2].is_comment());
        assert_eq!(dict.to_text(), "!a\nx\tX\t名詞\n!b\n");
        Ok(())
    }

    #[test]
    fn test_reading_with_comment_marker_is_rejected_and_round_trip_holds() -> Result<()> {
        let temp_dir = tempdir()?;
        let mut dict = MicrosoftImeDictionary::new("wykrzyknik").with_save_path(temp_dir.path());

        let res = dict.add_entry("!abc", "X", PartOfSpeech::Noun, None);
        assert_matches!(res, Err(DictionaryError::InvalidReadingCharacter { character: '!', .. }));
        assert!(dict.is_empty());

        dict.add_entry("！あ", "X", PartOfSpeech::Noun, None)?;
        dict.add_comment("!abc\tX\t名詞");
        dict.save_to_file()?;

        let loaded = MicrosoftImeDictionary::from_file(dict.file_path(), None)?;
        assert_eq!(loaded.items(), dict.items());
        assert!(!loaded.items()[0].is_comment());
        assert!(loaded.items()[1].is_comment());
        Ok(())
    }

    #[test]
    fn test_split_lines_handles_all_line_breaks() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd\u{2028}e\u{2029}f\u{85}g\n").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d", "e", "f", "g"]);

        let with_blanks: Vec<&str> = split_lines("\r\n\r\rx").collect();
        assert_eq!(with_blanks, vec!["", "", "", "x"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_from_text_splits_on_lone_carriage_return() -> Result<()> {
        let dict = MicrosoftImeDictionary::from_text("t", "!a\rx\tX\t名詞\r\r!b\u{2028}y\tY\t副詞")?;
        let rendered: Vec<String> = dict
            .items()
            .iter()
            .map(|item| MicrosoftImeFormat::new().render_item(item))
            .collect();
        assert_eq!(rendered, vec!["!a", "x\tX\t名詞", "!b", "y\tY\t副詞"]);
        Ok(())
    }

    #[test]
    fn test_empty_comment_is_not_preserved_through_save() -> Result<()> {
        let mut dict = MicrosoftImeDictionary::new("t");
        dict.add_entry("a", "A", PartOfSpeech::Noun, Some(String::new()))?;

        let reparsed = MicrosoftImeDictionary::from_text("t", &dict.to_text())?;
        assert_eq!(reparsed.entries().next().and_then(|e| e.comment()), None);
        Ok(())
    }
}
