//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PACK: &str = r#"[pack]
id = "test"
name = "Test Pack"

[[categories]]
id = "animals"
name = "Animals"

[[categories.flashcards]]
front = "Cat"
back = "Кіт"

[[categories.flashcards]]
front = "Dog"
back = "Собака"

[[categories.guess]]
id = "cat"
prompt = "Cat"
correct = "Кіт"
options = ["Собака", "Кіт", "Миша", "Птах"]

[[categories.unscramble]]
id = "school"
prompt = "Ми йдемо в школу"
answer = "We go to school"
shuffled = "school to We go"

[[categories]]
id = "empty"
name = "Coming soon"

[[vocabulary]]
english = "Cat"
translation = "Кіт"
topic = "Animals"
learned = true

[[vocabulary]]
english = "Water"
translation = "Вода"
topic = "Food"
"#;

/// Runs in `dir` with HOME pointed there too, so no user config leaks in.
fn brewords(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("brewords").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("BREWORDS_API_URL")
        .env_remove("BREWORDS_PACK");
    cmd
}

fn write_pack(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("pack.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    brewords(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created brewords.toml"))
        .stdout(predicate::str::contains("Created packs/starter.toml"));

    assert!(dir.path().join("brewords.toml").exists());
    assert!(dir.path().join("packs/starter.toml").exists());

    brewords(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn starter_pack_is_valid() {
    let dir = TempDir::new().unwrap();
    brewords(dir.path()).arg("init").assert().success();

    brewords(dir.path())
        .args(["validate", "--pack", "packs/starter.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starter Pack (2 categories"))
        .stdout(predicate::str::contains("Pack is valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(
        &dir,
        r#"[pack]
id = "odd"
name = "Odd"

[[categories]]
id = "short"
name = "Short"

[[categories.guess]]
id = "q1"
prompt = "Cat"
correct = "Кіт"
options = ["Кіт", "Пес", "Миша"]
"#,
    );

    brewords(dir.path())
        .arg("validate")
        .arg("--pack")
        .arg(&pack)
        .assert()
        .success()
        .stdout(predicate::str::contains("[short] WARNING"))
        .stdout(predicate::str::contains("expected 4"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    brewords(dir.path())
        .args(["validate", "--pack", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn topics_from_pack() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(&dir, PACK);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .arg("topics")
        .assert()
        .success()
        .stdout(predicate::str::contains("Animals"))
        .stdout(predicate::str::contains("Coming soon"));
}

#[test]
fn topic_lists_games() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(&dir, PACK);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["topic", "animals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 words, 1 sentences"))
        .stdout(predicate::str::contains(
            "brewords play guess-word --category animals",
        ));
}

#[test]
fn unknown_topic_falls_back_to_topic_list() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(&dir, PACK);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["topic", "nope"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Animals"))
        .stderr(predicate::str::contains("category not found: nope"));
}

#[test]
fn vocabulary_search() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(&dir, PACK);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["vocabulary", "--search", "вод"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2  Learned: 1  Learning: 1"))
        .stdout(predicate::str::contains("Water"))
        .stdout(predicate::str::contains("Кіт").not());

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["vocabulary", "--search", "zebra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No words match your search."));
}

#[test]
fn play_flashcards() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(&dir, PACK);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["play", "flashcards", "--category", "animals"])
        .write_stdin("f\nn\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Card 1/2 [front]: Cat"))
        .stdout(predicate::str::contains("Card 1/2 [back]: Кіт"))
        .stdout(predicate::str::contains("Card 2/2 [front]: Dog"))
        .stdout(predicate::str::contains("That was the last card"));
}

#[test]
fn play_guess_word_to_the_end() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(&dir, PACK);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["play", "guess-word", "--category", "animals"])
        .write_stdin("2\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected: Кіт"))
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Finished: 1/1 (perfect)"));
}

#[test]
fn play_guess_word_wrong_answer() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(&dir, PACK);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["play", "guess", "--category", "animals"])
        .write_stdin("c\n1\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong. The answer is Кіт."))
        .stdout(predicate::str::contains("Finished: 0/1 (needs practice)"));
}

#[test]
fn play_unscramble() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(&dir, PACK);

    // Bank: school to We go. Picking shifts the remaining words left.
    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["play", "unscramble", "--category", "animals"])
        .write_stdin("3\nc\n3\n2\n1\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Use every word before checking."))
        .stdout(predicate::str::contains("Your answer: We go to school"))
        .stdout(predicate::str::contains("Finished: 1/1 (perfect)"));
}

const TWO_ROUND_PACK: &str = r#"[pack]
id = "rounds"
name = "Two rounds"

[[categories]]
id = "animals"
name = "Animals"

[[categories.guess]]
id = "cat"
prompt = "Cat"
correct = "Кіт"
options = ["Собака", "Кіт", "Миша", "Птах"]

[[categories.guess]]
id = "dog"
prompt = "Dog"
correct = "Собака"
options = ["Собака", "Кіт", "Миша", "Птах"]

[[categories.unscramble]]
id = "school"
prompt = "Ми йдемо в школу"
answer = "We go to school"
shuffled = "school to We go"

[[categories.unscramble]]
id = "water"
prompt = "Вона п'є воду"
answer = "She drinks water"
shuffled = "water She drinks"
"#;

/// A pack with two rounds per game and the given reveal delay.
fn two_round_game(dir: &TempDir, advance_ms: u64) -> PathBuf {
    std::fs::write(
        dir.path().join("brewords.toml"),
        format!("[games]\nguess_advance_ms = {advance_ms}\nunscramble_advance_ms = {advance_ms}\n"),
    )
    .unwrap();
    write_pack(dir, TWO_ROUND_PACK)
}

#[test]
fn guess_word_keeps_answers_typed_during_reveal() {
    let dir = TempDir::new().unwrap();
    let pack = two_round_game(&dir, 10);

    // The whole script is buffered before the first reveal ends.
    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["play", "guess-word", "--category", "animals"])
        .write_stdin("2\nc\n1\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 2/2 (score 1): Dog"))
        .stdout(predicate::str::contains("Selected: Собака"))
        .stdout(predicate::str::contains("Finished: 2/2 (perfect)"));
}

#[test]
fn unscramble_keeps_picks_typed_during_reveal() {
    let dir = TempDir::new().unwrap();
    let pack = two_round_game(&dir, 10);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["play", "unscramble", "--category", "animals"])
        .write_stdin("3\n3\n2\n1\nc\n2\n2\n1\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your answer: We go to school"))
        .stdout(predicate::str::contains("Sentence 2/2 (score 1)"))
        .stdout(predicate::str::contains("Your answer: She drinks water"))
        .stdout(predicate::str::contains("Finished: 2/2 (perfect)"));
}

#[test]
fn end_of_input_during_reveal_still_advances() {
    let dir = TempDir::new().unwrap();
    let pack = two_round_game(&dir, 10);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["play", "guess-word", "--category", "animals"])
        .write_stdin("2\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Question 2/2 (score 1): Dog"))
        .stdout(predicate::str::contains("Finished").not());
}

#[test]
fn quit_during_reveal_skips_the_advance() {
    let dir = TempDir::new().unwrap();
    let pack = two_round_game(&dir, 60_000);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["play", "guess-word", "--category", "animals"])
        .write_stdin("2\nc\nq\n")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Question 2/2").not());
}

#[test]
fn play_empty_category() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(&dir, PACK);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["play", "guess-word", "--category", "empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to play in Coming soon yet."));
}

#[test]
fn play_unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    let pack = write_pack(&dir, PACK);

    brewords(dir.path())
        .arg("--pack")
        .arg(&pack)
        .args(["play", "flashcards", "--category", "nope"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Animals"))
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn play_rejects_unknown_game() {
    let dir = TempDir::new().unwrap();
    brewords(dir.path())
        .args(["play", "chess", "--category", "animals"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown game: chess"));
}

#[test]
fn register_checks_passwords_first() {
    let dir = TempDir::new().unwrap();
    brewords(dir.path())
        .args([
            "register",
            "--name",
            "Olena",
            "--email",
            "o@example.com",
            "--password",
            "secret1",
            "--confirm-password",
            "secret2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("passwords do not match"));
}

#[test]
fn logout_clears_stored_token() {
    let dir = TempDir::new().unwrap();
    let token = dir.path().join("token");
    std::fs::write(&token, "jwt-abc").unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        format!("token_path = {:?}\n", token.display().to_string()),
    )
    .unwrap();

    brewords(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));
    assert!(!token.exists());

    brewords(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));
}

#[test]
fn settings_languages_are_saved_to_config() {
    let dir = TempDir::new().unwrap();

    brewords(dir.path())
        .args(["settings", "languages", "--native", "pl", "--learning", "es"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Languages saved: Español → Polski"));

    let written = std::fs::read_to_string(dir.path().join("brewords.toml")).unwrap();
    assert!(written.contains("[languages]"));
    assert!(written.contains("native = \"pl\""));

    brewords(dir.path())
        .args(["settings", "languages", "--learning", "de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Languages saved: Deutsch → Polski"));

    brewords(dir.path())
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Learning: Deutsch (de)"))
        .stdout(predicate::str::contains("Native:   Polski (pl)"));
}

#[test]
fn settings_languages_must_differ() {
    let dir = TempDir::new().unwrap();

    brewords(dir.path())
        .args(["settings", "languages", "--native", "en", "--learning", "en"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("native and learning language must differ"));
    assert!(!dir.path().join("brewords.toml").exists());

    brewords(dir.path())
        .args(["settings", "languages", "--native", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fr is not offered as a native language"));
}

#[test]
fn settings_password_is_checked() {
    let dir = TempDir::new().unwrap();

    brewords(dir.path())
        .args(["settings", "password", "--current", "old-secret"])
        .args(["--new", "secret1", "--confirm", "secret2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "new password and confirmation do not match",
        ));

    brewords(dir.path())
        .args(["settings", "password", "--current", "old-secret"])
        .args(["--new", "abc", "--confirm", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 6 characters"));
}

// --- Against a mock backend ---

fn backend_config(dir: &TempDir, server: &MockServer) -> PathBuf {
    let config = dir.path().join("brewords.toml");
    std::fs::write(
        &config,
        format!(
            "token_path = {:?}\n\n[api]\nbase_url = {:?}\ntimeout_secs = 5\n",
            dir.path().join("token").display().to_string(),
            server.uri()
        ),
    )
    .unwrap();
    config
}

/// assert_cmd blocks, so run it off the runtime serving the mock.
async fn run(mut cmd: Command) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .unwrap()
}

async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/Account/info"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "7", "userName": "Olena", "email": "o@example.com"
        })))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn login_then_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Auth/login"))
        .and(body_json(serde_json::json!({
            "email": "o@example.com", "password": "secret1"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "jwt-abc"})),
        )
        .mount(&server)
        .await;
    mount_profile(&server).await;

    let dir = TempDir::new().unwrap();
    backend_config(&dir, &server);

    let mut login = brewords(dir.path());
    login.args(["login", "--email", "o@example.com", "--password", "secret1"]);
    run(login)
        .await
        .success()
        .stdout(predicate::str::contains("Signed in as Olena <o@example.com>"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("token")).unwrap(),
        "jwt-abc"
    );

    let mut profile = brewords(dir.path());
    profile.arg("profile");
    run(profile)
        .await
        .success()
        .stdout(predicate::str::contains("[O] Olena"))
        .stdout(predicate::str::contains("Email:  o@example.com"))
        .stdout(predicate::str::contains("Animals"));
}

#[tokio::test(flavor = "multi_thread")]
async fn login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    backend_config(&dir, &server);

    let mut login = brewords(dir.path());
    login.args(["login", "--email", "o@example.com", "--password", "wrong"]);
    run(login)
        .await
        .failure()
        .stderr(predicate::str::contains("authentication failed"));
    assert!(!dir.path().join("token").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn topics_from_backend_use_stored_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Categories/approved"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 3, "name": "Travel", "isApproved": true, "wordsCount": 12,
             "sentenceCount": 4, "createdDate": "2024-05-01T10:00:00Z"}
        ])))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    backend_config(&dir, &server);
    std::fs::write(dir.path().join("token"), "jwt-abc").unwrap();

    let mut topics = brewords(dir.path());
    topics.arg("topics");
    run(topics)
        .await
        .success()
        .stdout(predicate::str::contains("Travel"))
        .stdout(predicate::str::contains("2024-05-01"));
}

#[tokio::test(flavor = "multi_thread")]
async fn profile_requires_sign_in() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    backend_config(&dir, &server);

    let mut profile = brewords(dir.path());
    profile.arg("profile");
    run(profile)
        .await
        .failure()
        .stderr(predicate::str::contains("not signed in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn avatar_list_and_set() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    Mock::given(method("GET"))
        .and(path("/Avatars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            "https://img/1.png",
            {"imageUrl": "https://img/2.png"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/Account/avatar"))
        .and(query_param("avatarUrl", "https://img/2.png"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    backend_config(&dir, &server);
    std::fs::write(dir.path().join("token"), "jwt-abc").unwrap();

    let mut list = brewords(dir.path());
    list.arg("avatar");
    run(list)
        .await
        .success()
        .stdout(predicate::str::contains("1) https://img/1.png"))
        .stdout(predicate::str::contains("2) https://img/2.png"));

    let mut set = brewords(dir.path());
    set.args(["avatar", "--set", "https://img/2.png"]);
    run(set)
        .await
        .success()
        .stdout(predicate::str::contains(
            "Avatar updated for Olena: https://img/2.png",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn register_against_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Auth/register"))
        .and(body_json(serde_json::json!({
            "Username": "Olena",
            "Email": "o@example.com",
            "Password": "secret1",
            "PasswordRepeat": "secret1"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    backend_config(&dir, &server);

    let mut register = brewords(dir.path());
    register.args([
        "register",
        "--name",
        "Olena",
        "--email",
        "o@example.com",
        "--password",
        "secret1",
        "--confirm-password",
        "secret1",
    ]);
    run(register)
        .await
        .success()
        .stdout(predicate::str::contains("Registered o@example.com."));
}

#[tokio::test(flavor = "multi_thread")]
async fn settings_update_account_details() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    Mock::given(method("PUT"))
        .and(path("/Account/info"))
        .and(body_json(serde_json::json!({
            "userName": "Olena K", "email": "o@example.com"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/Account/phone"))
        .and(body_json(serde_json::json!({"phoneNumber": "+380501234567"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/Account/birthdate"))
        .and(body_json(serde_json::json!({"birthdate": "1995-03-08"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    backend_config(&dir, &server);
    std::fs::write(dir.path().join("token"), "jwt-abc").unwrap();

    let mut profile = brewords(dir.path());
    profile.args(["settings", "profile", "--name", "Olena K"]);
    run(profile)
        .await
        .success()
        .stdout(predicate::str::contains("Profile saved: Olena K <o@example.com>"));

    let mut phone = brewords(dir.path());
    phone.args(["settings", "phone", "+380 50 123-45-67"]);
    run(phone)
        .await
        .success()
        .stdout(predicate::str::contains("Phone number saved: +380501234567"));

    let mut birthdate = brewords(dir.path());
    birthdate.args(["settings", "birthdate", "1995-03-08"]);
    run(birthdate)
        .await
        .success()
        .stdout(predicate::str::contains("Birthdate saved: 1995-03-08"));
}

#[tokio::test(flavor = "multi_thread")]
async fn settings_reject_bad_input_before_calling_backend() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    backend_config(&dir, &server);
    std::fs::write(dir.path().join("token"), "jwt-abc").unwrap();

    let mut phone = brewords(dir.path());
    phone.args(["settings", "phone", "12ab"]);
    run(phone)
        .await
        .failure()
        .stderr(predicate::str::contains("invalid phone number"));

    let mut birthdate = brewords(dir.path());
    birthdate.args(["settings", "birthdate", "2999-01-01"]);
    run(birthdate)
        .await
        .failure()
        .stderr(predicate::str::contains("is in the future"));
}

#[tokio::test(flavor = "multi_thread")]
async fn settings_profile_requires_sign_in() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    backend_config(&dir, &server);

    let mut profile = brewords(dir.path());
    profile.args(["settings", "profile", "--email", "new@example.com"]);
    run(profile)
        .await
        .failure()
        .stderr(predicate::str::contains("not signed in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn flash_cards_use_configured_languages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Categories/approved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 3, "name": "Travel", "isApproved": true}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/FlashCards/category/3"))
        .and(query_param("originLang", "4"))
        .and(query_param("destLang", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"front": "Reise", "back": "Podróż"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = backend_config(&dir, &server);
    let mut content = std::fs::read_to_string(&config).unwrap();
    content.push_str("\n[languages]\nnative = \"pl\"\nlearning = \"de\"\n");
    std::fs::write(&config, content).unwrap();

    let mut play = brewords(dir.path());
    play.args(["play", "flashcards", "--category", "3"])
        .write_stdin("q\n");
    run(play)
        .await
        .success()
        .stdout(predicate::str::contains("Card 1/1 [front]: Reise"));
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_topic_list_fallback_is_logged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Categories/approved"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    backend_config(&dir, &server);

    let mut topic = brewords(dir.path());
    topic.args(["topic", "3"]);
    run(topic)
        .await
        .failure()
        .stderr(predicate::str::contains("Could not open topic 3"))
        .stderr(predicate::str::contains("could not show the topic list"));

    let mut play = brewords(dir.path());
    play.args(["play", "guess-word", "--category", "3"]);
    run(play)
        .await
        .failure()
        .stderr(predicate::str::contains("could not show the topic list"));
}
