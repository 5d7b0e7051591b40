use std::path::Path;

use arcana_core::Lexicon;

pub fn run(lexicon: &Lexicon, output: Option<&Path>) -> Result<(), String> {
    let json = lexicon.to_json().map_err(|e| e.to_string())?;

    if let Some(path) = output {
        std::fs::write(path, format!("{json}\n"))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Lexicon written to {}", path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}
