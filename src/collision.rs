use log::info;

use crate::entities::Laser;
use crate::fleet::Fleet;

/// Kills every live alien that overlaps a laser, consuming the first such
/// laser in spawn order. Returns the number of aliens destroyed.
pub fn resolve_collisions(fleet: &mut Fleet, lasers: &mut Vec<Laser>) -> usize {
    let mut kills = 0;
    for alien in fleet.aliens_mut().filter(|a| a.alive) {
        if let Some(index) = lasers.iter().position(|l| alien.rect.overlaps(&l.rect)) {
            lasers.remove(index);
            alien.alive = false;
            kills += 1;
            info!("Alien at row {}, column {} destroyed", alien.row, alien.column);
        }
    }
    kills
}
