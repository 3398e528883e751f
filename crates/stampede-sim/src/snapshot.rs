//! Snapshot builder — flattens engine state into display rows.

use stampede_core::enums::GamePhase;
use stampede_core::events::GameEvent;
use stampede_core::state::{MonsterView, RoundView, Snapshot};
use stampede_core::types::SimTime;

use crate::registry::Registry;
use crate::round::RoundController;

/// Build the visible state for one tick.
pub fn build(
    registry: &Registry,
    controller: &RoundController,
    time: SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> Snapshot {
    let field = registry.field();

    let mut monsters: Vec<MonsterView> = registry
        .monsters()
        .values()
        .map(|monster| MonsterView {
            id: monster.id(),
            state: monster.state(),
            position: monster.position(),
            rotation_degs: monster.rotation_degs(field),
            shadow_scale: monster.shadow_scale(field),
            sort_layer: monster.sort_layer(),
            colors: monster.colors(),
            is_rare: monster.is_rare(),
        })
        .collect();
    // The live map guarantees no order; hand the host a stable draw order.
    monsters.sort_unstable_by_key(|view| (view.sort_layer, view.id));

    Snapshot {
        time,
        phase,
        round: RoundView {
            number: controller.round(),
            phase: controller.phase(),
            countdown_secs: controller.seconds_remaining(),
            active: registry.dispatch_count(),
            total: registry.total_spawned(),
        },
        monsters,
        events,
    }
}
