use cat_walk::collision::*;
use cat_walk::entities::*;

/// A bare street with the player standing at `world_x`, screen x 100.
fn street_at(world_x: i32) -> GameState {
    let mut s = GameState::empty();
    s.status = GameStatus::Playing;
    s.player.world_x = world_x;
    s
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rects_overlap_when_interiors_meet() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
    assert!(a.overlaps(&Rect::new(-5, -5, 30, 30)));
    assert!(!a.overlaps(&Rect::new(10, 0, 10, 10))); // shared edge
    assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
    assert!(!a.overlaps(&Rect::new(3, 3, 0, 5))); // empty
}

#[test]
fn hitbox_tracks_world_position() {
    let mut p = Player::default();
    p.world_x = 500;
    p.x = 150;
    p.y = 420;
    assert_eq!(player_hitbox(&p), Rect::new(550, 420, 30, 40));

    // At the origin the hitbox starts at world 0.
    assert_eq!(player_hitbox(&Player::default()).x, 0);
}

// ── Cats ──────────────────────────────────────────────────────────────────────

#[test]
fn touching_a_cat_scores_and_spawns_a_heart() {
    // world_x 500 with screen x 150 puts the hitbox at world 550.
    let mut s = street_at(500);
    s.player.x = 150;
    s.player.y = 420;
    s.cats.push(Cat::new(550, 430, false));

    let report = resolve(&mut s);

    assert_eq!(report, CollisionReport { cats: 1, raccoons: 0 });
    assert_eq!(s.score, 10);
    assert_eq!(s.cats[0].cooldown, HIT_COOLDOWN);
    assert_eq!(s.hearts.len(), 1);
    // Heart sits above the cat's centre, in screen space.
    assert_eq!(s.hearts[0], Heart { x: 50 + CAT_WIDTH / 2, y: 420, lifetime: HEART_LIFETIME });
}

#[test]
fn cat_out_of_reach_is_ignored() {
    let mut s = street_at(500);
    s.cats.push(Cat::new(550, 430, false)); // hitbox is [500, 530)
    assert_eq!(resolve(&mut s), CollisionReport::default());
    assert_eq!(s.score, 0);
    assert!(s.hearts.is_empty());
}

#[test]
fn resting_cat_is_immune() {
    let mut s = street_at(0);
    s.cats.push(Cat { world_x: 10, y: 410, on_balcony: false, cooldown: 1 });
    assert_eq!(resolve(&mut s).cats, 0);
    assert_eq!(s.score, 0);
    assert_eq!(s.cats[0].cooldown, 1);
}

#[test]
fn simultaneous_hits_all_count() {
    let mut s = street_at(0);
    s.cats.push(Cat::new(5, 410, false));
    s.cats.push(Cat::new(10, 420, false));
    s.cats.push(Cat::new(15, 425, true));
    s.raccoons.push(Raccoon::new(0, 415));

    let report = resolve(&mut s);

    assert_eq!(report, CollisionReport { cats: 3, raccoons: 1 });
    // Cats land first (+30), then the raccoon (-5).
    assert_eq!(s.score, 25);
    assert_eq!(s.hearts.len(), 3);
}

// ── Raccoons ──────────────────────────────────────────────────────────────────

#[test]
fn raccoon_costs_points() {
    let mut s = street_at(0);
    s.score = 12;
    s.raccoons.push(Raccoon::new(10, 410));
    assert_eq!(resolve(&mut s).raccoons, 1);
    assert_eq!(s.score, 7);
    assert_eq!(s.raccoons[0].cooldown, HIT_COOLDOWN);
    assert!(s.hearts.is_empty());
}

#[test]
fn score_never_goes_negative() {
    let mut s = street_at(0);
    for _ in 0..10 {
        s.raccoons.push(Raccoon::new(10, 410));
        resolve(&mut s);
    }
    assert_eq!(s.raccoons.iter().filter(|r| r.cooldown == HIT_COOLDOWN).count(), 10);
    assert_eq!(s.score, 0);

    s.score = 3;
    s.raccoons.push(Raccoon::new(10, 410));
    resolve(&mut s);
    assert_eq!(s.score, 0);
}
