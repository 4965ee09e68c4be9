use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chef_session::{build_prompt, ConversationStore, InMemoryStore};

fn bench_store_append(c: &mut Criterion) {
    c.bench_function("store_append_100_exchanges", |b| {
        b.iter(|| {
            let store = InMemoryStore::new();
            for i in 0..100 {
                store.append(
                    "bench",
                    &format!("Question {i}: how long should I rest a steak after grilling?"),
                    &format!("Answer {i}: rest it for about half of the cooking time, loosely covered."),
                );
            }
            black_box(store.get("bench"));
        })
    });

    c.bench_function("store_1000_sessions", |b| {
        b.iter(|| {
            let store = InMemoryStore::new();
            for i in 0..1000 {
                store.append(&format!("session_{i}"), "q", "a");
            }
            black_box(store.session_count());
        })
    });
}

fn bench_build_prompt(c: &mut Criterion) {
    let store = InMemoryStore::new();
    for i in 0..10 {
        store.append("bench", &format!("User message {i}"), &format!("Bot reply {i} with a few more words"));
    }
    let history = store.get("bench");

    c.bench_function("build_prompt_full_history", |b| {
        b.iter(|| black_box(build_prompt(black_box(&history), "What wine goes with risotto?")))
    });
    c.bench_function("build_prompt_empty_history", |b| {
        b.iter(|| black_box(build_prompt(&[], "What wine goes with risotto?")))
    });
}

criterion_group!(benches, bench_store_append, bench_build_prompt);
criterion_main!(benches);
