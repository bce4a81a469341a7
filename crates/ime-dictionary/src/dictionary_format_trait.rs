// Plik dla traita DictionaryFormat

use std::fmt::Debug;
use std::path::Path;

use crate::dictionary_item::DictionaryItem;
use crate::error::Result;

/// Trait dla formatów plików słowników konkretnych dostawców IME.
///
/// Format odpowiada za zamianę jednego elementu na jeden wiersz tekstu
/// (i odwrotnie), za kodowanie całego pliku oraz za rozszerzenie nazwy pliku.
/// Kolejność elementów i zasady walidacji należą do [`crate::dictionary::Dictionary`].
pub trait DictionaryFormat: Debug + Default {
    /// Renderuje element jako pojedynczy wiersz, bez znaku końca wiersza.
    fn render_item(&self, item: &DictionaryItem) -> String;

    /// Parsuje pojedynczy, niepusty wiersz.
    fn parse_line(&self, line: &str) -> Result<DictionaryItem>;

    /// Wczytuje zdekodowaną zawartość pliku.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Zapisuje tekst do pliku w kodowaniu formatu, nadpisując plik.
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;

    /// Rozszerzenie pliku bez kropki, np. `txt`.
    fn file_extension(&self) -> &'static str;

    /// Czy wiersz ma zostać pominięty przy wczytywaniu.
    fn is_blank_line(&self, line: &str) -> bool {
        line.trim().is_empty()
    }
}
