// Walidacja czytań (読み) wpisów słownika

use crate::error::{DictionaryError, Result};

/// Symbole dozwolone w czytaniu poza hiraganą i znakami alfanumerycznymi ASCII.
///
/// ASCII `!` jest znacznikiem komentarza w plikach słowników, więc nie może tu wystąpić.
pub const READING_SYMBOLS: &[char] = &[
    'ー', '〜', '・', '、', '。', '「', '」', '『', '』', '（', '）', '！', '？',
    '?', '-', '_', '.', ',', '~', '(', ')', '\'',
];

/// Sprawdza, czy znak może wystąpić w czytaniu.
pub fn is_valid_reading_char(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{309B}'..='\u{309E}')
        || c.is_ascii_alphanumeric()
        || READING_SYMBOLS.contains(&c)
}

/// Zwraca błąd dla pierwszego niedozwolonego znaku w czytaniu.
pub fn validate_reading(reading: &str) -> Result<()> {
    match reading.chars().find(|c| !is_valid_reading_char(*c)) {
        Some(character) => Err(DictionaryError::InvalidReadingCharacter {
            character,
            reading: reading.to_string(),
        }),
        None => Ok(()),
    }
}
