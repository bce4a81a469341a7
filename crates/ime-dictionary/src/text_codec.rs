// Odczyt i zapis całych plików tekstowych w UTF-16LE ze znacznikiem BOM

use std::fs;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use encoding_rs::UTF_16LE;
use log::{debug, warn};

use crate::error::{DictionaryError, Result};

/// Znacznik kolejności bajtów (BOM) jako znak po zdekodowaniu.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Wczytuje cały plik jako UTF-16LE i usuwa jeden wiodący BOM, jeśli występuje.
///
/// Niepoprawne sekwencje (nieparzysta liczba bajtów, niesparowane surogaty)
/// kończą się błędem `DictionaryError::Decoding` zamiast znaków zastępczych.
pub fn read_utf16le_text<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let path_ref = file_path.as_ref();
    let bytes = fs::read(path_ref).map_err(|e| {
        DictionaryError::Io(format!(
            "Failed to read dictionary file '{}': {}",
            path_ref.display(),
            e
        ))
    })?;
    debug!("Wczytano {} bajtów z '{}'", bytes.len(), path_ref.display());

    let decoded = UTF_16LE
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .ok_or_else(|| DictionaryError::Decoding {
            path: path_ref.to_string_lossy().into_owned(),
            reason: "malformed UTF-16LE byte sequence".to_string(),
        })?;

    match decoded.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => Ok(rest.to_string()),
        None => {
            warn!("Plik '{}' nie zaczyna się od znacznika BOM", path_ref.display());
            Ok(decoded.into_owned())
        }
    }
}

/// Zapisuje tekst jako UTF-16LE, poprzedzony jednym BOM. Nadpisuje istniejący plik.
///
/// Brakujące katalogi nadrzędne nie są tworzone.
pub fn write_utf16le_text<P: AsRef<Path>>(file_path: P, content: &str) -> Result<()> {
    let path_ref = file_path.as_ref();
    let units: Vec<u16> = BYTE_ORDER_MARK
        .to_string()
        .encode_utf16()
        .chain(content.encode_utf16())
        .collect();
    let mut bytes = vec![0u8; units.len() * 2];
    LittleEndian::write_u16_into(&units, &mut bytes);

    fs::write(path_ref, &bytes).map_err(|e| {
        DictionaryError::Io(format!(
            "Failed to write dictionary file '{}': {}",
            path_ref.display(),
            e
        ))
    })?;
    debug!("Zapisano {} bajtów do '{}'", bytes.len(), path_ref.display());
    Ok(())
}
