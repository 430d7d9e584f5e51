use hydra_vote::WeightVector;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(u32, f64),
    Update(u32, f64),
    Remove(u32),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..20, -1.0f64..2.0).prop_map(|(id, w)| Op::Add(id, w)),
        (1u32..20, -1.0f64..2.0).prop_map(|(id, w)| Op::Update(id, w)),
        (1u32..20).prop_map(Op::Remove),
    ]
}

fn apply(v: &mut WeightVector, op: &Op) {
    match *op {
        Op::Add(id, w) => {
            let _ = v.add_entry_with_weight(id, &format!("Subnet {id}"), w);
        }
        Op::Update(id, w) => {
            let _ = v.set_weight(id, w);
        }
        Op::Remove(id) => {
            let _ = v.remove_entry(id);
        }
    }
}

proptest! {
    #[test]
    fn total_matches_entry_sum(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut v = WeightVector::new();
        for op in &ops {
            apply(&mut v, op);
            let expected: f64 = v.entries().iter().map(|e| e.weight).sum();
            prop_assert_eq!(v.total_weight(), expected);
            prop_assert_eq!(v.total_weight(), v.total_weight());
        }
    }

    #[test]
    fn never_drops_below_one_entry(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut v = WeightVector::new();
        for op in &ops {
            apply(&mut v, op);
            prop_assert!(v.len() >= 1);
        }
    }

    #[test]
    fn duplicate_add_keeps_cardinality(
        ops in prop::collection::vec(arb_op(), 0..32),
        w in -1.0f64..2.0,
    ) {
        let mut v = WeightVector::new();
        for op in &ops {
            apply(&mut v, op);
        }
        let existing = v.entries()[0].subnet_id;
        let before = v.len();
        prop_assert!(v.add_entry_with_weight(existing, "dup", w).is_err());
        prop_assert_eq!(v.len(), before);
    }

    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut v = WeightVector::new();
        for op in &ops {
            apply(&mut v, op);
        }
        let mut ids: Vec<u32> = v.entries().iter().map(|e| e.subnet_id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), v.len());
    }

    #[test]
    fn validity_matches_epsilon_rule(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut v = WeightVector::new();
        for op in &ops {
            apply(&mut v, op);
        }
        let expected = (v.total_weight() - 1.0).abs() <= v.epsilon();
        prop_assert_eq!(v.is_valid_for_submission(), expected);
    }
}
