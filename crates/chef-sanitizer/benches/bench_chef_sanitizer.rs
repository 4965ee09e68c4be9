use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chef_sanitizer::{sanitize, Sanitizer};

fn generate_reply(size_kb: usize) -> String {
    let base = "## Tomato Soup\n\n**Ingredients:**\n- 1kg *ripe* tomatoes\n- 1 onion\n- 2 cloves garlic\n\n1. Roast the tomatoes.\n2. Sweat the onion in `olive oil`.\n\n\n\n```\nsalt = to_taste\n```\nServe hot with __crusty__ bread.\n";
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(base);
    }
    text
}

fn bench_sanitize(c: &mut Criterion) {
    let reply_1k = generate_reply(1);
    let reply_16k = generate_reply(16);

    c.bench_function("sanitize_1kb", |b| {
        b.iter(|| black_box(sanitize(black_box(&reply_1k))))
    });
    c.bench_function("sanitize_16kb", |b| {
        b.iter(|| black_box(sanitize(black_box(&reply_16k))))
    });

    let plain = "Preheat the oven to 200 degrees and bake for twenty minutes.\n".repeat(64);
    let sanitizer = Sanitizer::new();
    c.bench_function("sanitize_plain_4kb_report", |b| {
        b.iter(|| black_box(sanitizer.run(black_box(&plain))))
    });
}

criterion_group!(benches, bench_sanitize);
criterion_main!(benches);
