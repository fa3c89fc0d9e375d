//! Deck builder tests.
//!
//! These tests verify:
//! - Symbol multiplicities and deck size for every preset and a range of grids
//! - Restartable shuffling from captured RNG state
//! - Approximately uniform permutations (statistical)

use std::collections::HashMap;

use memory_match::cards::{Alphabet, CardRef, CardState};
use memory_match::core::{GameRng, Level, LevelPreset};
use memory_match::deck::{DeckBuilder, DeckError};

/// Every preset builds a balanced deck.
#[test]
fn test_presets_build_balanced_decks() {
    let builder = DeckBuilder::default();
    let mut rng = GameRng::new(42);

    for preset in LevelPreset::ALL {
        let level = preset.level();
        let deck = builder.build(level, &mut rng).expect("preset should build");

        assert_eq!(deck.len(), level.card_count());
        let counts = deck.symbol_counts();
        assert_eq!(counts.len(), level.group_count());
        for (&symbol, &count) in &counts {
            assert_eq!(count, level.group_size as usize, "{symbol} in {}", preset.name());
        }
        assert!(deck.cards().iter().all(|c| c.state == CardState::Hidden));
    }
}

/// Sweep grid sizes and group sizes; valid levels build, invalid ones don't.
#[test]
fn test_grid_sweep() {
    let builder = DeckBuilder::default();
    let mut rng = GameRng::new(7);

    for width in 1..=6u16 {
        for height in 1..=6u16 {
            for k in 2..=4u16 {
                let level = Level::new(width, height, k);
                let result = builder.build(level, &mut rng);

                if level.card_count() % k as usize != 0 {
                    assert!(matches!(result, Err(DeckError::InvalidLevel { .. })));
                } else if level.group_count() > 26 {
                    assert!(matches!(result, Err(DeckError::AlphabetExhausted { .. })));
                } else {
                    let deck = result.unwrap();
                    assert_eq!(deck.len(), level.card_count());
                    assert!(deck.symbol_counts().values().all(|&n| n == k as usize));
                }
            }
        }
    }
}

/// A level needing exactly as many groups as the alphabet has symbols uses all of them.
#[test]
fn test_alphabet_fully_used() {
    let alphabet = Alphabet::new("abcdef".chars()).unwrap();
    let builder = DeckBuilder::new(alphabet.clone());
    let deck = builder.build(Level::new(4, 3, 2), &mut GameRng::new(1)).unwrap();

    let counts = deck.symbol_counts();
    assert_eq!(counts.len(), 6);
    for symbol in alphabet.symbols() {
        assert_eq!(counts.get(symbol), Some(&2));
    }

    let err = builder.build(Level::new(7, 2, 2), &mut GameRng::new(1)).unwrap_err();
    assert_eq!(err, DeckError::AlphabetExhausted { needed: 7, available: 6 });
}

/// Restoring the RNG state replays the same shuffle.
#[test]
fn test_shuffle_is_restartable() {
    let builder = DeckBuilder::default();
    let mut rng = GameRng::new(99);

    // Advance past a few games first.
    for _ in 0..3 {
        builder.build(Level::new(4, 4, 2), &mut rng).unwrap();
    }

    let checkpoint = rng.state();
    let first = builder.build(Level::new(6, 6, 2), &mut rng).unwrap();
    let second = builder.build(Level::new(6, 6, 2), &mut rng).unwrap();

    let mut replay = GameRng::from_state(&checkpoint);
    assert_eq!(builder.build(Level::new(6, 6, 2), &mut replay).unwrap(), first);
    assert_eq!(builder.build(Level::new(6, 6, 2), &mut replay).unwrap(), second);
    assert_ne!(first, second);
}

/// All 24 permutations of four items appear with roughly equal frequency.
#[test]
fn test_shuffle_uniform_over_permutations() {
    let mut rng = GameRng::new(2024);
    let trials = 24_000;
    let mut counts: HashMap<[u8; 4], u32> = HashMap::new();

    for _ in 0..trials {
        let mut items = [0u8, 1, 2, 3];
        rng.shuffle(&mut items);
        *counts.entry(items).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 24);
    // Expected 1000 each, standard deviation ~31.
    for (perm, &count) in &counts {
        assert!((850..=1150).contains(&count), "{perm:?} seen {count} times");
    }
}

/// In a 2x2 pairs deck, card 0's partner is equally likely to be at 1, 2 or 3.
#[test]
fn test_deck_layout_uniform() {
    let builder = DeckBuilder::default();
    let mut rng = GameRng::new(5);
    let level = Level::new(2, 2, 2);
    let trials = 6_000;
    let mut partner_counts = [0u32; 4];

    for _ in 0..trials {
        let deck = builder.build(level, &mut rng).unwrap();
        let symbol = deck.get(CardRef(0)).unwrap().symbol;
        let partner = deck
            .positions_of(symbol)
            .into_iter()
            .find(|&r| r != CardRef(0))
            .unwrap();
        partner_counts[partner.index()] += 1;
    }

    assert_eq!(partner_counts[0], 0);
    // Expected 2000 each, standard deviation ~37.
    for &count in &partner_counts[1..] {
        assert!((1800..=2200).contains(&count), "partner counts {partner_counts:?}");
    }
}

/// Symbols are drawn without replacement and vary between games.
#[test]
fn test_symbol_selection_varies() {
    let builder = DeckBuilder::default();
    let mut rng = GameRng::new(11);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..50 {
        let deck = builder.build(Level::new(2, 2, 2), &mut rng).unwrap();
        let counts = deck.symbol_counts();
        assert_eq!(counts.len(), 2, "two distinct symbols per 2x2 deck");
        seen.extend(counts.into_keys());
    }

    // 50 draws of 2 from 26 symbols should touch most of the alphabet.
    assert!(seen.len() > 20, "only {} symbols seen", seen.len());
}
