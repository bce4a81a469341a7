// Główny plik biblioteki ime-dictionary
pub mod error;
pub mod reading;
pub mod part_of_speech;
pub mod dictionary_item;
pub mod text_codec;
pub mod dictionary_format_trait;
pub mod formats;
pub mod dictionary;

// Re-eksportujemy najczęściej używane typy
pub use dictionary::{Dictionary, MicrosoftImeDictionary};
pub use dictionary_format_trait::DictionaryFormat;
pub use dictionary_item::{DictionaryComment, DictionaryEntry, DictionaryItem};
pub use error::{DictionaryError, ErrorKind, Result};
pub use formats::MicrosoftImeFormat;
pub use part_of_speech::PartOfSpeech;
