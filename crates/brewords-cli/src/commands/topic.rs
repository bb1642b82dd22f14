//! The `brewords topic` command.

use anyhow::Result;
use comfy_table::Table;

use brewords_core::screen::{game_catalogue, load_topic};
use brewords_core::traits::Notifier;

use super::{topics, ConsoleNotifier, Context, GlobalOpts};

pub async fn execute(opts: &GlobalOpts, id: String) -> Result<()> {
    let (_, source) = Context::load(opts)?.into_source()?;

    let category = match load_topic(source.as_ref(), &id).await {
        Ok(category) => category,
        Err(e) => {
            ConsoleNotifier.error(&format!("Could not open topic {id}: {e}"));
            if let Err(err) = topics::render(source.as_ref()).await {
                tracing::warn!(error = %err, "could not show the topic list");
            }
            return Err(e.into());
        }
    };

    println!("{}", category.name);
    println!(
        "{} words, {} sentences",
        category.word_count, category.sentence_count
    );
    if let Some(image) = &category.image_url {
        println!("Image: {image}");
    }
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Game", "Description", "Command"]);
    for entry in game_catalogue(&category.id) {
        table.add_row(vec![
            entry.title.to_string(),
            entry.description.to_string(),
            format!("brewords play {} --category {}", entry.kind, category.id),
        ]);
    }
    println!("{table}");
    Ok(())
}
