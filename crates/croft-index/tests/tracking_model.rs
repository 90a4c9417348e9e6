//! Model-based checks of the tracked-set semantics.
//!
//! Replays random op sequences against both the index and a plain
//! map-of-sets model, then compares the observable state.

use croft_core::{ClaimId, GridPosition, WorldId};
use croft_index::CropIndex;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug)]
enum Op {
    Add(i64, GridPosition),
    Remove(i64, GridPosition),
    RemoveAnyClaim(GridPosition),
    ClearClaim(i64),
}

fn arb_pos() -> impl Strategy<Value = GridPosition> {
    (0u32..2, -4i32..4, 60i32..68, -4i32..4)
        .prop_map(|(w, x, y, z)| GridPosition::new(WorldId(w), x, y, z))
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0i64..4, arb_pos()).prop_map(|(c, p)| Op::Add(c, p)),
        (0i64..4, arb_pos()).prop_map(|(c, p)| Op::Remove(c, p)),
        arb_pos().prop_map(Op::RemoveAnyClaim),
        (0i64..4).prop_map(Op::ClearClaim),
    ]
}

proptest! {
    #[test]
    fn index_matches_model(ops in proptest::collection::vec(arb_op(), 0..200)) {
        let index = CropIndex::new();
        let mut model: BTreeMap<i64, BTreeSet<GridPosition>> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Add(c, p) => {
                    // Mirror the non-overlap property of real claims: a
                    // position is only ever added to the claim that owns it.
                    let owner = model.iter().find(|(_, set)| set.contains(&p)).map(|(c, _)| *c);
                    let c = owner.unwrap_or(c);
                    index.add_position(ClaimId(c), p);
                    model.entry(c).or_default().insert(p);
                }
                Op::Remove(c, p) => {
                    index.remove_position(ClaimId(c), &p);
                    if let Some(set) = model.get_mut(&c) {
                        set.remove(&p);
                        if set.is_empty() {
                            model.remove(&c);
                        }
                    }
                }
                Op::RemoveAnyClaim(p) => {
                    index.remove_position_any_claim(&p);
                    let owner = model.iter().find(|(_, set)| set.contains(&p)).map(|(c, _)| *c);
                    if let Some(c) = owner {
                        let set = model.get_mut(&c).expect("owner present");
                        set.remove(&p);
                        if set.is_empty() {
                            model.remove(&c);
                        }
                    }
                }
                Op::ClearClaim(c) => {
                    index.clear_claim(ClaimId(c));
                    model.remove(&c);
                }
            }
        }

        // No residual empty entries: the claim key lists must agree.
        let mut indexed: Vec<i64> = index.claims().into_iter().map(|c| c.0).collect();
        indexed.sort_unstable();
        let modeled: Vec<i64> = model.keys().copied().collect();
        prop_assert_eq!(indexed, modeled);

        // Per-claim contents agree.
        for (&c, set) in &model {
            prop_assert_eq!(index.count(ClaimId(c)), set.len());
            for p in set {
                prop_assert!(index.contains(ClaimId(c), p));
            }
        }
        prop_assert_eq!(index.total(), model.values().map(BTreeSet::len).sum::<usize>());
    }
}
