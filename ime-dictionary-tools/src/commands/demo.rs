// Komenda `demo`: tworzy przykładowy słownik, zapisuje go i wczytuje ponownie

use std::path::{Path, PathBuf};

use log::info;

use ime_dictionary::{MicrosoftImeDictionary, PartOfSpeech, Result};

pub fn run(dir: &Path) -> Result<()> {
    let (first, second) = build(dir)?;
    println!("Zapisano: {}", first.display());
    println!("Zapisano: {}", second.display());
    Ok(())
}

/// Zwraca ścieżki obu zapisanych plików.
pub fn build(dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let mut dictionary = MicrosoftImeDictionary::new("test").with_save_path(dir);
    dictionary.add_entry("ことば", "言葉", PartOfSpeech::default(), None)?;
    dictionary.add_entry("ごれい", "語例", PartOfSpeech::default(), None)?;
    dictionary.add_comment("何か");
    dictionary.add_entry("さとう", "佐藤さん", "人名".parse()?, None)?;
    dictionary.save_to_file()?;
    info!("Zapisano słownik '{}' ({} elementów)", dictionary.name(), dictionary.len());

    let mut reloaded = MicrosoftImeDictionary::from_file(dictionary.file_path(), Some("test2"))?;
    reloaded.add_entry("はんたーはんたー", "HUNTER×HUNTER", PartOfSpeech::default(), None)?;
    reloaded.save_to_file()?;
    info!("Zapisano słownik '{}' ({} elementów)", reloaded.name(), reloaded.len());

    Ok((dictionary.file_path(), reloaded.file_path()))
}
