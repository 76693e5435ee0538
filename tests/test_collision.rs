use vibe_invaders::assets::SpriteSet;
use vibe_invaders::collision::resolve_collisions;
use vibe_invaders::config::GameConfig;
use vibe_invaders::entities::{Alien, Laser};
use vibe_invaders::fleet::Fleet;
use vibe_invaders::types::Rect;

fn laser_at(x: i32, y: i32) -> Laser {
    Laser {
        rect: Rect::new(x, y, 10, 10),
        sprite: SpriteSet::placeholder().laser,
    }
}

fn fleet_of(rects: &[Rect]) -> Fleet {
    let row = rects
        .iter()
        .enumerate()
        .map(|(column, rect)| Alien::new(*rect, 0, column))
        .collect();
    Fleet::from_rows(vec![row], &GameConfig::default())
}

#[test]
fn overlapping_laser_and_alien_are_both_removed() {
    let mut fleet = fleet_of(&[Rect::new(100, 100, 30, 30)]);
    let mut lasers = vec![laser_at(105, 105), laser_at(400, 400)];

    assert_eq!(resolve_collisions(&mut fleet, &mut lasers), 1);
    assert!(fleet.is_destroyed());
    assert_eq!(lasers.len(), 1);
    assert_eq!(lasers[0].rect, Rect::new(400, 400, 10, 10));
}

#[test]
fn alien_consumes_only_the_first_overlapping_laser() {
    let mut fleet = fleet_of(&[Rect::new(100, 100, 30, 30)]);
    let mut lasers = vec![laser_at(400, 400), laser_at(105, 105), laser_at(110, 110)];

    assert_eq!(resolve_collisions(&mut fleet, &mut lasers), 1);
    let left: Vec<Rect> = lasers.iter().map(|l| l.rect).collect();
    assert_eq!(left, vec![Rect::new(400, 400, 10, 10), Rect::new(110, 110, 10, 10)]);
}

#[test]
fn one_laser_kills_at_most_one_alien() {
    // Both aliens overlap the laser; grid order decides who takes it.
    let mut fleet = fleet_of(&[Rect::new(100, 100, 30, 30), Rect::new(110, 100, 30, 30)]);
    let mut lasers = vec![laser_at(115, 105)];

    assert_eq!(resolve_collisions(&mut fleet, &mut lasers), 1);
    let alive: Vec<usize> = fleet.alive().map(|a| a.column).collect();
    assert_eq!(alive, vec![1]);
    assert!(lasers.is_empty());
}

#[test]
fn dead_aliens_do_not_absorb_lasers() {
    let mut fleet = fleet_of(&[Rect::new(100, 100, 30, 30)]);
    fleet.aliens_mut().for_each(|a| a.alive = false);
    let mut lasers = vec![laser_at(105, 105)];

    assert_eq!(resolve_collisions(&mut fleet, &mut lasers), 0);
    assert_eq!(lasers.len(), 1);
}

#[test]
fn touching_edges_are_a_miss() {
    let mut fleet = fleet_of(&[Rect::new(100, 100, 30, 30)]);
    let mut lasers = vec![laser_at(130, 105), laser_at(105, 90)];

    assert_eq!(resolve_collisions(&mut fleet, &mut lasers), 0);
    assert_eq!(lasers.len(), 2);
}
