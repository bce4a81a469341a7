// Komenda `show`: wypisuje zawartość słownika Microsoft IME

use std::io::{self, Write};
use std::path::Path;

use log::info;

use ime_dictionary::{DictionaryFormat, MicrosoftImeDictionary, MicrosoftImeFormat, Result};

pub fn run(path: &Path) -> Result<()> {
    let dictionary = MicrosoftImeDictionary::from_file(path, None)?;
    info!("Wczytano '{}'", path.display());
    let stdout = io::stdout();
    write_summary(&dictionary, &mut stdout.lock())
}

pub fn write_summary<W: Write>(dictionary: &MicrosoftImeDictionary, out: &mut W) -> Result<()> {
    let format = MicrosoftImeFormat::new();
    writeln!(out, "Słownik: {}", dictionary.name())?;
    writeln!(
        out,
        "Wpisy: {}, komentarze: {}",
        dictionary.entries().count(),
        dictionary.comments().count()
    )?;
    for (i, item) in dictionary.items().iter().enumerate() {
        writeln!(out, "{:>4}. {}", i + 1, format.render_item(item).replace('\t', " | "))?;
    }
    Ok(())
}
