//=========================================================================
// Reward Counter
//=========================================================================
//
// Inventory-side seam for pickups.
//
//=========================================================================

/// Receives rewards from collected pickups.
pub trait RewardCounter {
    fn add(&mut self, amount: i32);

    fn total(&self) -> i32;
}

//=== Backpack ============================================================

/// Player inventory holding the heart counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Backpack {
    pub hp: i32,
}

impl Backpack {
    pub fn new(hp: i32) -> Self {
        Self { hp }
    }
}

impl RewardCounter for Backpack {
    fn add(&mut self, amount: i32) {
        self.hp = self.hp.saturating_add(amount);
    }

    fn total(&self) -> i32 {
        self.hp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backpack_accumulates() {
        let mut backpack = Backpack::new(5);
        backpack.add(10);
        backpack.add(-3);
        assert_eq!(backpack.total(), 12);
    }

    #[test]
    fn backpack_saturates() {
        let mut backpack = Backpack::new(i32::MAX);
        backpack.add(1);
        assert_eq!(backpack.hp, i32::MAX);
    }
}
