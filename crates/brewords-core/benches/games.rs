use criterion::{black_box, criterion_group, criterion_main, Criterion};

use brewords_core::games::{AfterReveal, AutoAdvancing, GuessWordEngine, UnscrambleEngine};
use brewords_core::pack::parse_pack_str;
use brewords_core::sample;

fn bench_pack_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_parsing");

    let small_toml = generate_pack_toml(5);
    let large_toml = generate_pack_toml(100);

    group.bench_function("5_categories", |b| {
        b.iter(|| parse_pack_str(black_box(&small_toml), black_box("bench.toml".as_ref())))
    });

    group.bench_function("100_categories", |b| {
        b.iter(|| parse_pack_str(black_box(&large_toml), black_box("bench.toml".as_ref())))
    });

    group.finish();
}

fn bench_play_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("play_through");

    let guess = sample::guess_questions();
    group.bench_function("guess_word", |b| {
        b.iter(|| {
            let mut engine = GuessWordEngine::new(black_box(guess.clone()));
            for q in &guess {
                let _ = engine.select_answer(&q.correct_answer);
                if let Ok(reveal) = engine.confirm() {
                    if let AfterReveal::Advance(ticket) = reveal.next {
                        engine.advance(ticket);
                    }
                }
            }
            engine.summary()
        })
    });

    let unscramble = sample::unscramble_questions();
    group.bench_function("unscramble", |b| {
        b.iter(|| {
            let mut engine = UnscrambleEngine::new(black_box(unscramble.clone()));
            for q in &unscramble {
                for word in &q.correct_order {
                    if let Some(pos) = engine.available_words().iter().position(|w| w == word) {
                        let _ = engine.pick_word(pos);
                    }
                }
                if let Ok(reveal) = engine.check() {
                    if let AfterReveal::Advance(ticket) = reveal.next {
                        engine.advance(ticket);
                    }
                }
            }
            engine.summary()
        })
    });

    group.finish();
}

fn generate_pack_toml(n: usize) -> String {
    let mut s = String::from("[pack]\nid = \"bench\"\nname = \"Benchmark\"\n");
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[categories]]
id = "c{i}"
name = "Category {i}"

[[categories.flashcards]]
front = "word{i}"
back = "слово{i}"

[[categories.guess]]
id = "g{i}"
prompt = "word{i}"
correct = "слово{i}"
options = ["слово{i}", "a", "b", "c"]

[[categories.unscramble]]
id = "u{i}"
prompt = "речення {i}"
answer = "this is sentence number {i}"
"#
        ));
    }
    s
}

criterion_group!(benches, bench_pack_parsing, bench_play_through);
criterion_main!(benches);
