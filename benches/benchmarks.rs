criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_seven_cards,
        computing_river_equity,
        playing_one_episode,
}

fn evaluating_seven_cards(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let hand = Deck::new().deal(rng, 7);
    c.bench_function("evaluate a 7-card Hand", |b| {
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn computing_river_equity(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(1);
    let episode = Episode::deal(rng, STACK);
    c.bench_function("calculate River equity", |b| {
        b.iter(|| episode.agent().equity())
    });
}

fn playing_one_episode(c: &mut criterion::Criterion) {
    let mut env = PokerWorld::default();
    c.bench_function("reset and shove one episode", |b| {
        b.iter(|| {
            env.reset(None);
            env.step(Action::Raise.into())
        })
    });
}

use pokerworld::cards::Deck;
use pokerworld::cards::Evaluator;
use pokerworld::cards::Strength;
use pokerworld::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
