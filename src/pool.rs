//! Fixed-capacity object pools.
//!
//! Every slot is allocated up front and reused; an `active` flag marks
//! occupancy and allocation is a linear scan for the first free slot. A full
//! pool silently drops new spawn requests.

pub trait Poolable {
    fn is_active(&self) -> bool;
}

#[derive(Clone, Debug)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Poolable + Default + Clone> Pool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity],
        }
    }
}

impl<T: Poolable> Pool<T> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `value` in the first free slot. Returns `false` when the pool
    /// is exhausted; existing entries are never touched in that case.
    pub fn spawn(&mut self, value: T) -> bool {
        match self.slots.iter_mut().find(|slot| !slot.is_active()) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|s| s.is_active())
    }

    /// Raw slot access by index, active or not.
    pub fn slot(&self, index: usize) -> &T {
        &self.slots[index]
    }

    pub fn slot_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default, Debug, PartialEq)]
    struct Dot {
        active: bool,
        id: u32,
    }

    impl Poolable for Dot {
        fn is_active(&self) -> bool {
            self.active
        }
    }

    #[test]
    fn spawn_reuses_freed_slots() {
        let mut pool: Pool<Dot> = Pool::new(2);
        assert!(pool.spawn(Dot { active: true, id: 1 }));
        assert!(pool.spawn(Dot { active: true, id: 2 }));
        pool.slot_mut(0).active = false;
        assert!(pool.spawn(Dot { active: true, id: 3 }));
        assert_eq!(pool.slot(0).id, 3);
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn full_pool_rejects_without_overwriting() {
        let mut pool: Pool<Dot> = Pool::new(1);
        assert!(pool.spawn(Dot { active: true, id: 1 }));
        assert!(!pool.spawn(Dot { active: true, id: 2 }));
        assert_eq!(pool.slot(0).id, 1);
        assert_eq!(pool.capacity(), 1);
    }
}
