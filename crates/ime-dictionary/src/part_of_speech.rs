// Plik dla enuma PartOfSpeech

use std::fmt;
use std::str::FromStr;

use crate::error::{DictionaryError, Result};

/// Część mowy (品詞) przypisana do wpisu słownika użytkownika.
///
/// Kanoniczna postać tekstowa (`as_str`) jest używana zarówno przy zapisie,
/// jak i przy parsowaniu pliku.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartOfSpeech {
    #[default]
    Noun,
    NoPartOfSpeech,
    ShortReading,
    Emoticon,
    PersonName,
    Surname,
    GivenName,
    Organization,
    PlaceName,
    ProperNoun,
    SuruNoun,
    AdjectivalNoun,
    Adverb,
    Adnominal,
    Conjunction,
    Interjection,
    IndependentWord,
    Prefix,
    Suffix,
    Counter,
    SingleKanji,
    SuppressedWord,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 22] = [
        PartOfSpeech::Noun,
        PartOfSpeech::NoPartOfSpeech,
        PartOfSpeech::ShortReading,
        PartOfSpeech::Emoticon,
        PartOfSpeech::PersonName,
        PartOfSpeech::Surname,
        PartOfSpeech::GivenName,
        PartOfSpeech::Organization,
        PartOfSpeech::PlaceName,
        PartOfSpeech::ProperNoun,
        PartOfSpeech::SuruNoun,
        PartOfSpeech::AdjectivalNoun,
        PartOfSpeech::Adverb,
        PartOfSpeech::Adnominal,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Interjection,
        PartOfSpeech::IndependentWord,
        PartOfSpeech::Prefix,
        PartOfSpeech::Suffix,
        PartOfSpeech::Counter,
        PartOfSpeech::SingleKanji,
        PartOfSpeech::SuppressedWord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "名詞",
            PartOfSpeech::NoPartOfSpeech => "品詞なし",
            PartOfSpeech::ShortReading => "短縮よみ",
            PartOfSpeech::Emoticon => "顔文字",
            PartOfSpeech::PersonName => "人名",
            PartOfSpeech::Surname => "姓",
            PartOfSpeech::GivenName => "名",
            PartOfSpeech::Organization => "組織",
            PartOfSpeech::PlaceName => "地名",
            PartOfSpeech::ProperNoun => "固有名詞",
            PartOfSpeech::SuruNoun => "さ変名詞",
            PartOfSpeech::AdjectivalNoun => "形容動詞",
            PartOfSpeech::Adverb => "副詞",
            PartOfSpeech::Adnominal => "連体詞",
            PartOfSpeech::Conjunction => "接続詞",
            PartOfSpeech::Interjection => "感動詞",
            PartOfSpeech::IndependentWord => "独立語",
            PartOfSpeech::Prefix => "接頭語",
            PartOfSpeech::Suffix => "接尾語",
            PartOfSpeech::Counter => "助数詞",
            PartOfSpeech::SingleKanji => "単漢字",
            PartOfSpeech::SuppressedWord => "抑制単語",
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = DictionaryError;

    // Dokładne dopasowanie, bez przycinania i zmiany wielkości liter.
    fn from_str(s: &str) -> Result<Self> {
        PartOfSpeech::ALL
            .iter()
            .copied()
            .find(|pos| pos.as_str() == s)
            .ok_or_else(|| DictionaryError::UnknownPartOfSpeech(s.to_string()))
    }
}

impl TryFrom<&str> for PartOfSpeech {
    type Error = DictionaryError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
