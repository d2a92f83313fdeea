//! Rock lifecycle: HP and destruction.

use threatfield_core::components::RockState;
use threatfield_core::enums::HitResult;

/// Apply one point of damage.
///
/// HP never goes below zero; hits on a destroyed rock change nothing.
pub fn hit_rock(rock: &mut RockState) -> HitResult {
    if rock.destroyed {
        return HitResult::AlreadyDestroyed;
    }

    rock.hp = rock.hp.saturating_sub(1);
    if rock.hp == 0 {
        rock.destroyed = true;
        rock.collapsed = true;
        HitResult::Destroyed
    } else {
        HitResult::Damaged {
            hp_remaining: rock.hp,
        }
    }
}

/// Destroy a rock outright (cascade detonation). Returns false if it was already gone.
pub fn detonate_rock(rock: &mut RockState) -> bool {
    if rock.destroyed {
        return false;
    }
    rock.hp = 0;
    rock.destroyed = true;
    rock.collapsed = true;
    true
}
