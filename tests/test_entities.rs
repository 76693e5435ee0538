use vibe_invaders::assets::SpriteSet;
use vibe_invaders::config::GameConfig;
use vibe_invaders::entities::*;
use vibe_invaders::types::Rect;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_player() -> Player {
    Player::new(SpriteSet::placeholder().cannon, &GameConfig::default())
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_starts_bottom_left() {
    let p = make_player();
    assert_eq!(p.rect, Rect::new(0, 380, 40, 20));
}

#[test]
fn move_right_normal() {
    let mut p = make_player();
    p.move_toward(Direction::Right, &GameConfig::default());
    assert_eq!(p.rect.x, 15);
    assert_eq!(p.rect.y, 380); // vertical position never changes
}

#[test]
fn move_left_clamps_at_zero() {
    let mut p = make_player();
    p.rect.x = 10;
    p.move_toward(Direction::Left, &GameConfig::default());
    assert_eq!(p.rect.left(), 0);
}

#[test]
fn move_right_clamps_at_screen_width() {
    let mut p = make_player();
    p.rect.x = 550; // right = 590, one step would reach 605
    p.move_toward(Direction::Right, &GameConfig::default());
    assert_eq!(p.rect.right(), 600);
    p.move_toward(Direction::Right, &GameConfig::default());
    assert_eq!(p.rect.right(), 600);
}

#[test]
fn random_moves_stay_on_screen() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut p = make_player();
    for _ in 0..2_000 {
        let direction = if rng.gen_bool(0.5) { Direction::Left } else { Direction::Right };
        p.move_toward(direction, &config);
        assert!(p.rect.left() >= 0, "left edge escaped: {:?}", p.rect);
        assert!(p.rect.right() <= config.screen_width, "right edge escaped: {:?}", p.rect);
    }
}

// ── Laser ─────────────────────────────────────────────────────────────────────

#[test]
fn laser_spawns_centered_above_cannon() {
    let mut p = make_player();
    p.rect.x = 280; // center_x = 300
    let laser = Laser::fire_from(&p.rect, SpriteSet::placeholder().laser);
    assert_eq!(laser.rect.left(), 295);
    assert_eq!(laser.rect.bottom(), p.rect.top());
    assert_eq!(laser.rect.width, 10);
}

#[test]
fn laser_rises_by_laser_speed() {
    let p = make_player();
    let mut laser = Laser::fire_from(&p.rect, SpriteSet::placeholder().laser);
    let mut bottom = laser.rect.bottom();
    for _ in 0..10 {
        laser.advance(15);
        assert_eq!(laser.rect.bottom(), bottom - 15);
        bottom = laser.rect.bottom();
    }
}

#[test]
fn laser_off_screen_only_when_fully_above_top() {
    let mut laser = Laser::fire_from(&Rect::new(0, 20, 40, 20), SpriteSet::placeholder().laser);
    assert_eq!(laser.rect.bottom(), 20);
    laser.advance(20);
    assert_eq!(laser.rect.bottom(), 0);
    assert!(!laser.is_off_screen());
    laser.advance(1);
    assert!(laser.is_off_screen());
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[test]
fn alien_starts_alive_in_its_slot() {
    let alien = Alien::new(Rect::new(200, 40, 40, 20), 1, 1);
    assert!(alien.alive);
    assert_eq!((alien.row, alien.column), (1, 1));
}
