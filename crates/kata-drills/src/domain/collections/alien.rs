//! Aliens for a small arcade game
//!
//! Aliens are plain values. How many were created is tracked by the
//! [`Hive`] that spawned them.

use crate::constants::ALIEN_START_HEALTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub health: u32,
}

impl Alien {
    /// Alien at `(x, y)` with full health; not counted by any hive
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            health: ALIEN_START_HEALTH,
        }
    }

    /// Lose one health point
    pub fn hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn teleport(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Whether both aliens occupy the same coordinates
    pub fn collision_detection(&self, other: &Alien) -> bool {
        (self.x, self.y) == (other.x, other.y)
    }
}

/// Creation context counting every alien it spawns
#[derive(Debug, Default)]
pub struct Hive {
    created: u64,
}

impl Hive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, x: i32, y: i32) -> Alien {
        self.created += 1;
        Alien::new(x, y)
    }

    pub fn total_aliens_created(&self) -> u64 {
        self.created
    }
}

/// Spawn one alien per coordinate pair
pub fn new_aliens_collection(hive: &mut Hive, positions: &[(i32, i32)]) -> Vec<Alien> {
    positions.iter().map(|&(x, y)| hive.spawn(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_alien() {
        let alien = Alien::new(2, -1);
        assert_eq!((alien.x, alien.y, alien.health), (2, -1, 3));
        assert!(alien.is_alive());
    }

    #[test]
    fn test_hit_until_dead() {
        let mut alien = Alien::new(0, 0);
        alien.hit();
        assert_eq!(alien.health, 2);
        alien.hit();
        alien.hit();
        assert!(!alien.is_alive());
        alien.hit();
        assert_eq!(alien.health, 0);
    }

    #[test]
    fn test_teleport() {
        let mut alien = Alien::new(0, 0);
        alien.teleport(-5, 7);
        assert_eq!((alien.x, alien.y), (-5, 7));
    }

    #[test]
    fn test_collision_detection() {
        let a = Alien::new(1, 1);
        let mut b = Alien::new(2, 1);
        assert!(!a.collision_detection(&b));
        b.teleport(1, 1);
        assert!(a.collision_detection(&b));
    }

    #[test]
    fn test_hive_counts_spawned_aliens() {
        let mut hive = Hive::new();
        hive.spawn(0, 0);
        let aliens = new_aliens_collection(&mut hive, &[(4, 7), (-1, 0), (3, 3)]);
        assert_eq!(aliens.len(), 3);
        assert_eq!(aliens[1], Alien::new(-1, 0));
        assert_eq!(hive.total_aliens_created(), 4);
    }

    #[test]
    fn test_hives_are_independent() {
        let mut first = Hive::new();
        let second = Hive::new();
        first.spawn(0, 0);
        assert_eq!(first.total_aliens_created(), 1);
        assert_eq!(second.total_aliens_created(), 0);
    }
}
