//! The `brewords init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create brewords.toml
    if Path::new("brewords.toml").exists() {
        println!("brewords.toml already exists, skipping.");
    } else {
        std::fs::write("brewords.toml", SAMPLE_CONFIG)?;
        println!("Created brewords.toml");
    }

    // Create starter content pack
    std::fs::create_dir_all("packs")?;
    let pack_path = Path::new("packs/starter.toml");
    if pack_path.exists() {
        println!("packs/starter.toml already exists, skipping.");
    } else {
        std::fs::write(pack_path, STARTER_PACK)?;
        println!("Created packs/starter.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit brewords.toml to point at your backend");
    println!("  2. Run: brewords validate --pack packs/starter.toml");
    println!("  3. Run: brewords --pack packs/starter.toml play guess-word --category animals");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# brewords configuration

# Uncomment to play offline from a content pack instead of the backend.
# pack = "packs/starter.toml"

[api]
base_url = "https://localhost:5000/api"
timeout_secs = 30
# token = "${BREWORDS_TOKEN}"

[games]
guess_advance_ms = 1500
unscramble_advance_ms = 2000
"#;

const STARTER_PACK: &str = r#"[pack]
id = "starter"
name = "Starter Pack"
description = "Everyday English words with Ukrainian translations"

[[categories]]
id = "animals"
name = "Animals"

[[categories.flashcards]]
front = "Cat"
back = "Кіт"

[[categories.flashcards]]
front = "Dog"
back = "Собака"

[[categories.flashcards]]
front = "Bird"
back = "Птах"

[[categories.guess]]
id = "cat"
prompt = "Cat"
correct = "Кіт"
options = ["Собака", "Кіт", "Миша", "Птах"]

[[categories.guess]]
id = "dog"
prompt = "Dog"
correct = "Собака"
options = ["Собака", "Корова", "Кінь", "Риба"]

[[categories.unscramble]]
id = "cat-sleeps"
prompt = "Кіт спить на столі"
answer = "The cat sleeps on the table"
shuffled = "table cat the sleeps The on"

[[categories]]
id = "daily"
name = "Daily life"

[[categories.flashcards]]
front = "Water"
back = "Вода"

[[categories.flashcards]]
front = "House"
back = "Дім"

[[categories.guess]]
id = "water"
prompt = "Water"
correct = "Вода"
options = ["Молоко", "Сік", "Вода", "Чай"]

[[categories.unscramble]]
id = "school"
prompt = "Ми йдемо в школу"
answer = "We go to school"
shuffled = "school to We go"

[[categories.unscramble]]
id = "water-daily"
prompt = "Вона п'є воду щодня"
answer = "She drinks water every day"
shuffled = "every She water day drinks"

[[vocabulary]]
english = "Cat"
translation = "Кіт"
topic = "Тварини"
learned = true

[[vocabulary]]
english = "Water"
translation = "Вода"
topic = "Побут"
learned = false
"#;
