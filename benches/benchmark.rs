use criterion::{black_box, criterion_group, criterion_main, Criterion};
use morphlex::Tokenizer;

const SOURCE: &str = r#"
def calculate_total(values):
    total_sum = 0
    for currentValue in values:
        total_sum = total_sum + currentValue
    return total_sum

class ResultFormatter:
    def format_output(self, computed_total):
        return "total: " + computed_total
"#;

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize snippet", |b| {
        let mut tokenizer = Tokenizer::new();
        b.iter(|| tokenizer.tokenize(black_box(SOURCE)));
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
