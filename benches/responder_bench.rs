use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use brai::responder::triggers::{Normalized, match_trigger};
use brai::sentiment::{LexiconScorer, SentimentScorer};

const UTTERANCES: &[&str] = &[
    "olá",
    "Quem é você?",
    "meu nome é Ana Luísa",
    "eu gosto muito de programar em rust, mas hoje estou cansado e não muito animado",
    "Qual a capital da Mongólia?",
];

fn bench_trigger_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("trigger_scan");

    for (i, text) in UTTERANCES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(i), text, |b, text| {
            b.iter(|| {
                let normalized = Normalized::new(black_box(text));
                black_box(match_trigger(normalized.as_str()).map(|m| m.kind));
            });
        });
    }

    group.finish();
}

fn bench_lexicon_score(c: &mut Criterion) {
    let scorer = LexiconScorer::new();
    let mut group = c.benchmark_group("lexicon_score");

    for (i, text) in UTTERANCES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(i), text, |b, text| {
            b.iter(|| black_box(scorer.score(black_box(text))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trigger_scan, bench_lexicon_score);
criterion_main!(benches);
