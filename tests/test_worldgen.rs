use cat_walk::entities::*;
use cat_walk::worldgen::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Buildings ─────────────────────────────────────────────────────────────────

#[test]
fn windows_stay_inside_their_building() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = GameState::empty();
        generate(&mut s, 0, 4000, &mut rng);
        for b in &s.buildings {
            for w in &b.windows {
                assert!(b.contains_window(w), "window {:?} outside {:?}", w, b);
            }
        }
    }
}

#[test]
fn building_dimensions_within_ranges() {
    let mut s = GameState::empty();
    generate(&mut s, 0, 10_000, &mut seeded_rng());
    assert!(!s.buildings.is_empty());
    for b in &s.buildings {
        assert!((100..=200).contains(&b.width), "width {}", b.width);
        assert!((150..=250).contains(&b.height), "height {}", b.height);
    }
}

#[test]
fn buildings_are_spaced_by_a_gap() {
    let mut s = GameState::empty();
    generate(&mut s, 0, 10_000, &mut seeded_rng());
    assert_eq!(s.buildings[0].world_x, 0);
    for pair in s.buildings.windows(2) {
        let gap = pair[1].world_x - (pair[0].world_x + pair[0].width);
        assert!((20..=50).contains(&gap), "gap {}", gap);
    }
}

#[test]
fn buildings_start_inside_the_range() {
    let mut s = GameState::empty();
    generate(&mut s, 2000, 4000, &mut seeded_rng());
    assert_eq!(s.buildings[0].world_x, 2000);
    assert!(s.buildings.iter().all(|b| b.world_x >= 2000 && b.world_x < 4000));
    // The last one may overhang, but the cursor must have passed the end.
    let last = s.buildings.last().unwrap();
    assert!(last.world_x + last.width + 50 >= 4000);
}

#[test]
fn window_grid_follows_building_size() {
    // 200×250 → 4 rows × 4 columns at most, on a 40×50 pitch.
    let mut rng = seeded_rng();
    let b = make_building(0, 200, 250, &mut rng);
    assert!(b.windows.len() <= 16);
    for w in &b.windows {
        assert_eq!((w.x - 15) % 40, 0);
        assert_eq!((w.y - b.top() - 20) % 50, 0);
    }
}

#[test]
fn narrow_building_still_rolls_one_column() {
    // The first column always sits 15 px in from the facade's left edge.
    let lit = (0..100)
        .map(|seed| make_building(500, 100, 150, &mut StdRng::seed_from_u64(seed)))
        .find(|b| !b.windows.is_empty())
        .expect("some seed lights a window");
    assert!(lit.windows.iter().any(|w| w.x == 515));
}

// ── Critters ──────────────────────────────────────────────────────────────────

#[test]
fn critters_spawn_in_their_bands() {
    let mut s = GameState::empty();
    generate(&mut s, 0, 20_000, &mut seeded_rng());
    assert!(!s.cats.is_empty());
    assert!(!s.raccoons.is_empty());
    for c in &s.cats {
        if c.on_balcony {
            assert!((250..=320).contains(&c.y));
        } else {
            assert!((420..=470).contains(&c.y));
        }
        assert_eq!(c.cooldown, 0);
    }
    for r in &s.raccoons {
        assert!((410..=460).contains(&r.y));
        assert_eq!(r.cooldown, 0);
    }
}

#[test]
fn critters_land_within_their_step() {
    let mut s = GameState::empty();
    generate(&mut s, 0, 20_000, &mut seeded_rng());
    let xs = s.cats.iter().map(|c| c.world_x).chain(s.raccoons.iter().map(|r| r.world_x));
    for x in xs {
        assert!(x % SPAWN_STEP <= SPAWN_JITTER, "x {}", x);
        assert!((0..20_000).contains(&x));
    }
}

#[test]
fn at_most_three_spawns_per_step() {
    let mut s = GameState::empty();
    generate(&mut s, 0, 50_000, &mut seeded_rng());
    for step in (0..50_000).step_by(SPAWN_STEP as usize) {
        let in_step = |x: i32| x >= step && x < step + SPAWN_STEP;
        let sidewalk = s.cats.iter().filter(|c| !c.on_balcony && in_step(c.world_x)).count();
        let balcony = s.cats.iter().filter(|c| c.on_balcony && in_step(c.world_x)).count();
        let raccoons = s.raccoons.iter().filter(|r| in_step(r.world_x)).count();
        assert!(sidewalk <= 1 && balcony <= 1 && raccoons <= 1);
    }
}

#[test]
fn spawn_rates_match_odds() {
    let mut s = GameState::empty();
    generate(&mut s, 0, 1_000_000, &mut seeded_rng());
    let steps = 10_000.0;
    let sidewalk = s.cats.iter().filter(|c| !c.on_balcony).count() as f64 / steps;
    let balcony = s.cats.iter().filter(|c| c.on_balcony).count() as f64 / steps;
    let raccoons = s.raccoons.len() as f64 / steps;
    assert!((sidewalk - 0.30).abs() < 0.03, "sidewalk {}", sidewalk);
    assert!((balcony - 0.20).abs() < 0.03, "balcony {}", balcony);
    assert!((raccoons - 0.15).abs() < 0.03, "raccoons {}", raccoons);
}

#[test]
fn generation_is_append_only() {
    let mut rng = seeded_rng();
    let mut s = GameState::empty();
    generate(&mut s, 0, 2000, &mut rng);
    let first = s.clone();
    generate(&mut s, 2000, 4000, &mut rng);
    assert_eq!(&s.buildings[..first.buildings.len()], &first.buildings[..]);
    assert_eq!(&s.cats[..first.cats.len()], &first.cats[..]);
    assert_eq!(&s.raccoons[..first.raccoons.len()], &first.raccoons[..]);
}

#[test]
fn chunked_generation_keeps_per_unit_statistics() {
    let (mut single_cats, mut chunked_cats) = (0usize, 0usize);
    let (mut single_raccoons, mut chunked_raccoons) = (0usize, 0usize);
    let (mut single_span, mut chunked_span) = (0i64, 0i64);

    for seed in 0..200 {
        let mut single = GameState::empty();
        generate(&mut single, 0, 4000, &mut StdRng::seed_from_u64(seed));

        let mut chunked = GameState::empty();
        let mut rng = StdRng::seed_from_u64(seed + 10_000);
        generate(&mut chunked, 0, 2000, &mut rng);
        generate(&mut chunked, 2000, 4000, &mut rng);

        single_cats += single.cats.len();
        chunked_cats += chunked.cats.len();
        single_raccoons += single.raccoons.len();
        chunked_raccoons += chunked.raccoons.len();
        single_span += single.buildings.iter().map(|b| b.width as i64).sum::<i64>();
        chunked_span += chunked.buildings.iter().map(|b| b.width as i64).sum::<i64>();
    }

    // 40 steps × 0.5 cats and × 0.15 raccoons per run, over 200 runs.
    let per_run = |n: usize| n as f64 / 200.0;
    assert!((per_run(single_cats) - per_run(chunked_cats)).abs() < 1.5);
    assert!((per_run(single_raccoons) - per_run(chunked_raccoons)).abs() < 1.0);
    assert!((per_run(single_cats) - 20.0).abs() < 1.5);
    // Facade coverage per run differs at most by the restart at the seam.
    let span = |n: i64| n as f64 / 200.0;
    assert!((span(single_span) - span(chunked_span)).abs() < 250.0);
}

// ── Frontier ──────────────────────────────────────────────────────────────────

#[test]
fn ensure_ahead_generates_one_chunk_and_advances() {
    let mut s = GameState::empty();
    let mut rng = seeded_rng();
    s.player.world_x = 1050;
    assert!(ensure_ahead(&mut s, &mut rng));
    assert_eq!(s.frontier, 2000);
    assert!(s.buildings.iter().all(|b| b.world_x < 2000));
    let first_chunk = s.buildings.clone();

    // 1050 > 2000 - 1000 still holds, so the *next* chunk is produced;
    // [0, 2000) is left alone.
    assert!(ensure_ahead(&mut s, &mut rng));
    assert_eq!(s.frontier, 4000);
    let in_first: Vec<_> = s.buildings.iter().filter(|b| b.world_x < 2000).cloned().collect();
    assert_eq!(in_first, first_chunk);

    // Now far enough ahead.
    assert!(!ensure_ahead(&mut s, &mut rng));
    assert_eq!(s.frontier, 4000);
}

#[test]
fn ensure_ahead_never_duplicates_a_range() {
    let mut s = GameState::empty();
    let mut rng = seeded_rng();
    for x in (0..10_000).step_by(5) {
        s.player.world_x = x;
        ensure_ahead(&mut s, &mut rng);
        assert!(s.frontier >= s.player.world_x + LOOKAHEAD);
    }
    let mut starts: Vec<i32> = s.buildings.iter().map(|b| b.world_x).collect();
    let before = starts.len();
    starts.sort_unstable();
    starts.dedup();
    assert_eq!(starts.len(), before);
    // Each chunk's first building starts exactly on a chunk boundary.
    for chunk_start in (0..s.frontier).step_by(CHUNK as usize) {
        assert!(s.buildings.iter().any(|b| b.world_x == chunk_start));
    }
}

#[test]
fn ensure_ahead_waits_until_lookahead_is_crossed() {
    let mut s = GameState::empty();
    s.frontier = 2000;
    s.player.world_x = 1000;
    assert!(!ensure_ahead(&mut s, &mut seeded_rng()));
    s.player.world_x = 1001;
    assert!(ensure_ahead(&mut s, &mut seeded_rng()));
    assert_eq!(s.frontier, 4000);
}
