// Moduł grupujący implementacje formatów słowników.

pub mod microsoft_ime;

// Re-eksportujemy, aby były łatwiej dostępne
pub use microsoft_ime::MicrosoftImeFormat;
