// Plik dla błędów specyficznych dla crate ime-dictionary

use thiserror::Error;

/// Typ Result używany w tym crate.
pub type Result<T> = std::result::Result<T, DictionaryError>;

/// Ogólna kategoria błędu, niezależna od konkretnego wariantu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Niepoprawne dane (znak w czytaniu, nieznany tag części mowy).
    Validation,
    /// Niepoprawny wiersz pliku słownika.
    Parse,
    /// Błąd odczytu/zapisu pliku lub dekodowania jego zawartości.
    Io,
}

/// Enum reprezentujący błędy, które mogą wystąpić podczas budowania, wczytywania
/// i zapisywania słowników IME.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Czytanie zawiera znak spoza dozwolonego zestawu.
    #[error("Niedozwolony znak w czytaniu ({reading}): '{character}'. Dozwolone są tylko hiragana, litery i cyfry ASCII oraz wybrane symbole.")]
    InvalidReadingCharacter { character: char, reading: String },

    /// Tekst nie odpowiada żadnemu znanemu tagowi części mowy.
    #[error("Nieznana część mowy: '{0}'")]
    UnknownPartOfSpeech(String),

    /// Wiersz wpisu ma liczbę pól inną niż 3 lub 4.
    #[error("Nieprawidłowy wiersz słownika (liczba pól: {count}): '{line}'")]
    InvalidFieldCount { line: String, count: usize },

    /// Pola wiersza dały się rozdzielić, ale wpis nie przeszedł walidacji.
    #[error("Nieprawidłowy wpis w wierszu '{line}': {source}")]
    InvalidEntry {
        line: String,
        #[source]
        source: Box<DictionaryError>,
    },

    /// Błąd wejścia/wyjścia, często związany z odczytem plików.
    #[error("Błąd I/O: {0}")]
    Io(String), // Przechowuje sformatowany komunikat błędu I/O dla większej elastyczności

    /// Zawartość pliku nie jest poprawnym tekstem w oczekiwanym kodowaniu.
    #[error("Błąd dekodowania pliku '{path}': {reason}")]
    Decoding { path: String, reason: String },
}

impl DictionaryError {
    /// Zwraca kategorię błędu. Dla `InvalidEntry` jest to kategoria błędu źródłowego.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DictionaryError::InvalidReadingCharacter { .. }
            | DictionaryError::UnknownPartOfSpeech(_) => ErrorKind::Validation,
            DictionaryError::InvalidFieldCount { .. } => ErrorKind::Parse,
            DictionaryError::InvalidEntry { source, .. } => source.kind(),
            DictionaryError::Io(_) | DictionaryError::Decoding { .. } => ErrorKind::Io,
        }
    }
}

// Konwersja z std::io::Error, aby móc używać operatora `?` na wynikach operacji I/O.
impl From<std::io::Error> for DictionaryError {
    fn from(err: std::io::Error) -> Self {
        DictionaryError::Io(err.to_string())
    }
}
