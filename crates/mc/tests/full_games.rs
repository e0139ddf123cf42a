//! Whole-game tests: the player driven through complete deals.

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use squares_core::{Card, Cell, Deck, GameDriver, Grid, HandTable, Player, PointSystem, NUM_CELLS};
use squares_mc::{
    McConfig, MonteCarloPlayer, NeighborBounds, ProximityRollout, RolloutPolicy, SearchState,
    UniformRollout,
};

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

fn filled(grid: &Grid) -> i32 {
    grid.filled_count() as i32
}

#[test]
fn test_full_game_fills_grid() {
    let driver = GameDriver::new(filled, Duration::from_secs(30));
    let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(42));
    let mut player = MonteCarloPlayer::new(McConfig::with_rollouts(2, 4), filled, ChaCha8Rng::seed_from_u64(7));

    let record = driver.play(&mut player, &deck).unwrap();

    assert_eq!(record.score, NUM_CELLS as i32);
    assert!(record.grid.is_full());
    assert_eq!(record.plays.len(), NUM_CELLS);
    for (play, &dealt) in record.plays.iter().zip(deck.deal()) {
        assert_eq!(play.card, dealt);
        assert_eq!(record.grid.get(play.cell), Some(dealt));
    }
    // The player's own view agrees with the driver's.
    assert_eq!(player.state().grid(), &record.grid);
}

#[test]
fn test_games_back_to_back() {
    let driver = GameDriver::new(HandTable::american(), Duration::from_secs(30));
    let mut player = MonteCarloPlayer::new(
        McConfig::with_rollouts(2, 3),
        HandTable::american(),
        ChaCha8Rng::seed_from_u64(1),
    );

    let mut deck_rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..3 {
        let deck = Deck::shuffled(&mut deck_rng);
        let record = driver.play(&mut player, &deck).unwrap();
        assert!(record.grid.is_full());
        assert_eq!(record.score, HandTable::american().score(&record.grid));
    }
}

#[test]
fn test_configure_between_games() {
    let american = GameDriver::new(HandTable::american(), Duration::from_secs(30));
    let british = GameDriver::new(HandTable::british(), Duration::from_secs(30));
    let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(16));
    let mut player = MonteCarloPlayer::new(
        McConfig::with_rollouts(2, 3),
        HandTable::american(),
        ChaCha8Rng::seed_from_u64(17),
    );

    let first = american.play(&mut player, &deck).unwrap();
    assert_eq!(first.score, HandTable::american().score(&first.grid));

    player.configure(HandTable::british());
    assert_eq!(player.point_system(), &HandTable::british());

    let second = british.play(&mut player, &deck).unwrap();
    assert!(second.grid.is_full());
    assert_eq!(second.score, HandTable::british().score(&second.grid));
}

#[test]
fn test_time_budget_game_completes() {
    let driver = GameDriver::new(HandTable::british(), Duration::from_millis(250));
    let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3));
    let mut player = MonteCarloPlayer::new(McConfig::default(), HandTable::british(), ChaCha8Rng::seed_from_u64(4));

    let record = driver.play(&mut player, &deck).unwrap();

    assert!(record.grid.is_full());
    assert!(record.score >= 0);
}

#[test]
fn test_exhausted_clock_still_plays_every_card() {
    let driver = GameDriver::new(filled, Duration::ZERO);
    let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(5));
    let mut player = MonteCarloPlayer::new(McConfig::with_depth(3), filled, ChaCha8Rng::seed_from_u64(6));

    let record = driver.play(&mut player, &deck).unwrap();

    assert_eq!(record.score, NUM_CELLS as i32);
}

#[test]
fn test_legacy_bounds_and_opening_game() {
    let mut config = McConfig::with_rollouts(2, 3);
    config.neighbor_bounds = NeighborBounds::Legacy;
    config.opening_turns = 5;

    let driver = GameDriver::new(HandTable::american(), Duration::from_secs(30));
    let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(8));
    let mut player = MonteCarloPlayer::new(config, HandTable::american(), ChaCha8Rng::seed_from_u64(9));

    let record = driver.play(&mut player, &deck).unwrap();
    assert!(record.grid.is_full());
}

#[test]
fn test_uniform_policy_game() {
    let driver = GameDriver::new(HandTable::american(), Duration::from_secs(30));
    let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(10));
    let mut player = MonteCarloPlayer::with_policy(
        McConfig::with_rollouts(3, 3),
        HandTable::american(),
        UniformRollout,
        ChaCha8Rng::seed_from_u64(11),
    );

    let record = driver.play(&mut player, &deck).unwrap();
    assert!(record.grid.is_full());
}

#[test]
fn test_seeded_games_are_reproducible() {
    let run = || {
        let driver = GameDriver::new(HandTable::american(), Duration::from_secs(30));
        let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(12));
        let mut player = MonteCarloPlayer::new(
            McConfig::with_rollouts(2, 5),
            HandTable::american(),
            ChaCha8Rng::seed_from_u64(13),
        );
        let record = driver.play(&mut player, &deck).unwrap();
        (record.score, record.plays.iter().map(|p| p.cell).collect::<Vec<_>>())
    };

    assert_eq!(run(), run());
}

#[test]
fn test_ties_broken_uniformly() {
    // A constant scorer makes every candidate tie, so the first card of a
    // game should land in each of the 25 cells about equally often.
    let constant = |_: &Grid| 0;
    let mut player = MonteCarloPlayer::new(McConfig::with_rollouts(1, 1), constant, ChaCha8Rng::seed_from_u64(14));

    let trials = 2500;
    let mut counts = [0usize; NUM_CELLS];
    for _ in 0..trials {
        player.reset();
        let cell = player.decide(card("AS"), Duration::from_secs(1)).unwrap();
        counts[cell.index()] += 1;
    }

    // Expected 100 per cell, standard deviation about 10.
    for (index, &count) in counts.iter().enumerate() {
        assert!((50..=160).contains(&count), "cell {} chosen {} times", index, count);
    }
}

#[test]
fn test_proximity_bias_over_uniform() {
    // Eight of clubs at the center: proximity placement of another eight
    // always goes directly above it.
    let mut state = SearchState::new();
    state.draw(card("8C")).unwrap();
    state.place(card("8C"), Cell::from_coords(2, 2).unwrap()).unwrap();
    state.draw(card("8D")).unwrap();

    let above = Cell::from_coords(1, 2).unwrap();
    let focus = Cell::from_coords(4, 4).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(15);

    let trials = 1000;
    let proximity = ProximityRollout::default();
    let mut near = 0;
    let mut uniform = 0;
    for _ in 0..trials {
        if proximity.choose(&state, card("8D"), focus, &mut rng) == Some(above) {
            near += 1;
        }
        if UniformRollout.choose(&state, card("8D"), focus, &mut rng) == Some(above) {
            uniform += 1;
        }
    }

    assert_eq!(near, trials);
    // 1 in 24 free cells on average.
    assert!(uniform < trials / 8, "uniform picked the anchor neighbor {} times", uniform);
}
