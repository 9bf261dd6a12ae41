//! Item drop table for destroyed enemies.

use rand::Rng;

use crate::entities::ItemKind;

/// Map a uniform roll in `[0, 1)` to an item: 40 % heal, 38 % power,
/// 22 % speed.
pub fn drop_kind_for(r: f32) -> ItemKind {
    if r < 0.40 {
        ItemKind::Heal
    } else if r < 0.78 {
        ItemKind::Power
    } else {
        ItemKind::Speed
    }
}

/// Roll whether anything drops at all, then which item.
pub fn roll_drop(rng: &mut impl Rng, drop_chance: f32) -> Option<ItemKind> {
    if rng.gen::<f32>() >= drop_chance {
        return None;
    }
    Some(drop_kind_for(rng.gen::<f32>()))
}
