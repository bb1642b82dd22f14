//! The `brewords topics` command.

use anyhow::{Context as _, Result};
use comfy_table::Table;

use brewords_core::model::Category;
use brewords_core::traits::DataSource;

use super::{Context, GlobalOpts};

pub async fn execute(opts: &GlobalOpts) -> Result<()> {
    let (_, source) = Context::load(opts)?.into_source()?;
    render(source.as_ref()).await
}

/// Print the topic list. Also the landing screen after a failed load.
pub async fn render(source: &dyn DataSource) -> Result<()> {
    let categories = source
        .fetch_categories()
        .await
        .context("failed to load topics")?;

    if categories.is_empty() {
        println!("No topics available yet.");
        return Ok(());
    }

    println!("{}", table(&categories));
    println!("\nOpen one with: brewords topic <ID>");
    Ok(())
}

fn table(categories: &[Category]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Topic", "Words", "Sentences", "Added"]);
    for c in categories {
        table.add_row(vec![
            c.id.clone(),
            c.name.clone(),
            c.word_count.to_string(),
            c.sentence_count.to_string(),
            c.created_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table
}
