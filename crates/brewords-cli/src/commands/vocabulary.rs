//! The `brewords vocabulary` command.

use anyhow::{Context as _, Result};
use comfy_table::Table;

use brewords_core::vocabulary::{filter_words, VocabularyStats};

use super::{Context, GlobalOpts};

pub async fn execute(opts: &GlobalOpts, search: Option<String>) -> Result<()> {
    let (_, source) = Context::load(opts)?.into_source()?;
    let words = source
        .fetch_vocabulary()
        .await
        .context("failed to load vocabulary")?;

    let stats = VocabularyStats::from_words(&words);
    println!(
        "Total: {}  Learned: {}  Learning: {}",
        stats.total, stats.learned, stats.learning
    );

    let shown = filter_words(&words, search.as_deref().unwrap_or(""));
    if shown.is_empty() {
        println!("No words match your search.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["English", "Translation", "Topic", "Status"]);
    for w in shown {
        table.add_row(vec![
            w.english.clone(),
            w.translation.clone(),
            w.topic.clone(),
            if w.learned { "learned" } else { "learning" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
