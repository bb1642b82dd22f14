//! The `brewords validate` command.

use std::path::PathBuf;

use anyhow::Result;

use brewords_core::pack::{parse_pack, validate_pack};

pub fn execute(pack_path: PathBuf) -> Result<()> {
    let pack = parse_pack(&pack_path)?;

    let items: usize = pack
        .categories
        .iter()
        .map(|c| c.flash_cards.len() + c.guess.len() + c.unscramble.len())
        .sum();
    println!(
        "Pack: {} ({} categories, {} items, {} words)",
        pack.name,
        pack.categories.len(),
        items,
        pack.vocabulary.len()
    );

    let warnings = validate_pack(&pack);
    for w in &warnings {
        let prefix = w
            .category_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Pack is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
