//! Per-entry drain behavior: clamping, self-healing, residency, and
//! determinism.

use croft_buff::{BuffParams, BuffRegistry, MemoryStore};
use croft_core::{ClaimId, Clock, GridPosition, Tier, WorldId};
use croft_engine::{GrowthScheduler, SchedulerConfig};
use croft_index::CropIndex;
use croft_test_utils::{ManualClock, MockWorld};
use std::sync::Arc;

const CLAIM: ClaimId = ClaimId(1);

struct Rig {
    clock: Arc<ManualClock>,
    index: Arc<CropIndex>,
    buffs: BuffRegistry,
    scheduler: GrowthScheduler,
    world: MockWorld,
}

fn rig(chance: f64, amount: u8, effects: bool) -> Rig {
    let clock = Arc::new(ManualClock::new(1_000_000));
    let index = Arc::new(CropIndex::new());
    let clock_dyn: Arc<dyn Clock> = Arc::clone(&clock);
    let mut buffs = BuffRegistry::new(Box::new(MemoryStore::new()), Arc::clone(&clock_dyn));

    let params = BuffParams::builder()
        .tier(Tier(1))
        .label("Basic")
        .multiplier(2.0)
        .duration_secs(600)
        .interval_secs(30)
        .growth_chance(chance)
        .growth_amount(amount)
        .build()
        .unwrap();
    buffs.activate(CLAIM, &params);

    let config = SchedulerConfig {
        tick_interval_ticks: 1,
        max_per_tick: 16,
        growth_effects: effects,
        seed: 7,
    };
    let mut scheduler = GrowthScheduler::new(config, Arc::clone(&index), clock_dyn).unwrap();
    scheduler.start(1);

    Rig {
        clock,
        index,
        buffs,
        scheduler,
        world: MockWorld::new(),
    }
}

fn pos(x: i32) -> GridPosition {
    GridPosition::new(WorldId(0), x, 64, 0)
}

#[test]
fn growth_clamps_and_deregisters_at_max_stage() {
    let mut rig = rig(1.0, 3, false);
    rig.world.plant(pos(0), 6, 7);
    rig.index.add_position(CLAIM, pos(0));

    let m = rig.scheduler.tick(&mut rig.buffs, &mut rig.world).unwrap();
    assert_eq!(m.grown, 1);
    assert_eq!(m.matured, 1);
    assert_eq!(m.deregistered, 1);
    assert_eq!(rig.world.cell(&pos(0)).unwrap().stage, 7);
    assert_eq!(rig.index.count(CLAIM), 0);
}

#[test]
fn repeated_growth_never_passes_max_stage() {
    let mut rig = rig(1.0, 2, false);
    rig.world.plant(pos(0), 0, 7);
    rig.index.add_position(CLAIM, pos(0));

    // 0 -> 2 -> 4 -> 6 -> 7 (clamped), then deregistered.
    for _ in 0..4 {
        rig.scheduler.tick(&mut rig.buffs, &mut rig.world).unwrap();
        rig.clock.advance_ms(30_000);
    }
    assert_eq!(rig.world.cell(&pos(0)).unwrap().stage, 7);
    assert_eq!(rig.index.count(CLAIM), 0);

    // Later cadences find nothing to do.
    let m = rig.scheduler.tick(&mut rig.buffs, &mut rig.world).unwrap();
    assert_eq!(m.entries_enqueued, 0);
}

#[test]
fn vanished_crop_is_deregistered_not_an_error() {
    let mut rig = rig(1.0, 1, false);
    rig.world.plant(pos(0), 0, 7);
    rig.world.plant(pos(1), 0, 7);
    rig.index.add_position(CLAIM, pos(0));
    rig.index.add_position(CLAIM, pos(1));

    // The crop at x=0 is broken between enqueue eligibility and drain.
    rig.world.destroy(&pos(0));

    let m = rig.scheduler.tick(&mut rig.buffs, &mut rig.world).unwrap();
    assert_eq!(m.drained, 2);
    assert_eq!(m.deregistered, 1);
    assert_eq!(m.grown, 1);
    assert!(!rig.index.contains(CLAIM, &pos(0)));
    assert!(rig.index.contains(CLAIM, &pos(1)));
}

#[test]
fn already_mature_crop_is_deregistered_without_mutation() {
    let mut rig = rig(1.0, 1, true);
    rig.world.plant(pos(0), 7, 7);
    rig.index.add_position(CLAIM, pos(0));

    let m = rig.scheduler.tick(&mut rig.buffs, &mut rig.world).unwrap();
    assert_eq!(m.deregistered, 1);
    assert_eq!(m.grown, 0);
    assert!(rig.world.effects().is_empty());
    assert_eq!(rig.index.count(CLAIM), 0);
}

#[test]
fn unresident_region_skips_without_forgetting() {
    let mut rig = rig(1.0, 1, false);
    rig.world.plant(pos(0), 0, 7);
    rig.index.add_position(CLAIM, pos(0));
    rig.world.mark_unresident(WorldId(0), 0, 0);

    let m = rig.scheduler.tick(&mut rig.buffs, &mut rig.world).unwrap();
    assert_eq!(m.skipped_unresident, 1);
    assert_eq!(m.grown, 0);
    assert_eq!(rig.world.cell(&pos(0)).unwrap().stage, 0);
    // Still tracked; once the region is back and the claim is eligible
    // again, growth resumes.
    assert!(rig.index.contains(CLAIM, &pos(0)));

    rig.world.mark_resident(WorldId(0), 0, 0);
    rig.clock.advance_ms(30_000);
    let m = rig.scheduler.tick(&mut rig.buffs, &mut rig.world).unwrap();
    assert_eq!(m.grown, 1);
    assert_eq!(rig.world.cell(&pos(0)).unwrap().stage, 1);
}

#[test]
fn failed_chance_draw_mutates_nothing_and_keeps_tracking() {
    let mut rig = rig(0.0, 1, false);
    rig.world.plant(pos(0), 0, 7);
    rig.index.add_position(CLAIM, pos(0));

    let m = rig.scheduler.tick(&mut rig.buffs, &mut rig.world).unwrap();
    assert_eq!(m.drained, 1);
    assert_eq!(m.grown, 0);
    assert_eq!(rig.world.cell(&pos(0)).unwrap().stage, 0);
    assert!(rig.index.contains(CLAIM, &pos(0)));
}

#[test]
fn expired_buff_stops_the_claim() {
    let mut rig = rig(1.0, 1, false);
    rig.world.plant(pos(0), 0, 7);
    rig.index.add_position(CLAIM, pos(0));

    rig.clock.advance_ms(600_000); // past the buff's lifetime
    let m = rig.scheduler.tick(&mut rig.buffs, &mut rig.world).unwrap();
    assert_eq!(m.entries_enqueued, 0);
    assert_eq!(rig.world.cell(&pos(0)).unwrap().stage, 0);
    // The position stays tracked for a future buff.
    assert!(rig.index.contains(CLAIM, &pos(0)));
}

#[test]
fn growth_effects_follow_the_config_flag() {
    let mut with_effects = rig(1.0, 1, true);
    with_effects.world.plant(pos(0), 0, 7);
    with_effects.index.add_position(CLAIM, pos(0));
    with_effects
        .scheduler
        .tick(&mut with_effects.buffs, &mut with_effects.world)
        .unwrap();
    assert_eq!(with_effects.world.effects(), &[pos(0)]);

    let mut without = rig(1.0, 1, false);
    without.world.plant(pos(0), 0, 7);
    without.index.add_position(CLAIM, pos(0));
    without
        .scheduler
        .tick(&mut without.buffs, &mut without.world)
        .unwrap();
    assert!(without.world.effects().is_empty());
}

#[test]
fn same_seed_and_ticks_reproduce_every_draw() {
    let run = || {
        let mut rig = rig(0.5, 1, false);
        for x in 0..12 {
            rig.world.plant(pos(x), 0, 7);
            rig.index.add_position(CLAIM, pos(x));
        }
        for _ in 0..6 {
            rig.scheduler.tick(&mut rig.buffs, &mut rig.world).unwrap();
            rig.clock.advance_ms(30_000);
        }
        (0..12)
            .map(|x| rig.world.cell(&pos(x)).unwrap().stage)
            .collect::<Vec<u8>>()
    };

    assert_eq!(run(), run(), "same seed + same ticks -> identical stages");
}
