use hydra_core::errors::VoteError;
use hydra_vote::WeightVector;

// ── Lifecycle ────────────────────────────────────────────────────────────

#[test]
fn fresh_vector_is_submittable() {
    let v = WeightVector::new();
    assert_eq!(v.len(), 1);
    assert_eq!(v.total_weight(), 1.0);
    assert!(v.is_valid_for_submission());
    assert!(v.validate().is_ok());
}

#[test]
fn split_allocation_sums_to_one() {
    let mut v = WeightVector::new();
    v.add_entry(8, "Subnet 8").unwrap();
    assert_eq!(v.get(8).unwrap().weight, 0.0);
    assert!(v.is_valid_for_submission());

    v.set_weight(8, 0.5).unwrap();
    v.set_weight(1, 0.5).unwrap();
    assert_eq!(v.total_weight(), 1.0);
    assert!(v.is_valid_for_submission());
}

#[test]
fn over_allocation_is_not_submittable() {
    let mut v = WeightVector::new();
    v.add_entry(8, "Subnet 8").unwrap();
    v.set_weight(8, 0.5).unwrap();
    v.set_weight(1, 0.7).unwrap();

    assert!((v.total_weight() - 1.2).abs() < 1e-12);
    assert!(!v.is_valid_for_submission());
    assert_eq!(v.total_percent(), "120.0%");
    match v.validate() {
        Err(VoteError::InvalidWeightSum { total, .. }) => assert!((total - 1.2).abs() < 1e-12),
        other => panic!("expected InvalidWeightSum, got {other:?}"),
    }
}

#[test]
fn removing_the_only_entry_is_rejected() {
    let mut v = WeightVector::new();
    let before = v.clone();
    assert_eq!(v.remove_entry(1), Err(VoteError::LastEntry { subnet_id: 1 }));
    assert_eq!(v, before);
    assert_eq!(v.len(), 1);
}

#[test]
fn updating_an_absent_subnet_fails_without_change() {
    let mut v = WeightVector::new();
    let before = v.clone();
    assert_eq!(
        v.set_weight(99, 0.3),
        Err(VoteError::NotFound { subnet_id: 99 })
    );
    assert_eq!(v, before);
}

#[test]
fn removing_an_absent_subnet_is_not_found() {
    let mut v = WeightVector::new();
    v.add_entry(8, "Subnet 8").unwrap();
    assert_eq!(v.remove_entry(42), Err(VoteError::NotFound { subnet_id: 42 }));
    assert_eq!(v.len(), 2);
}

// ── Duplicates ───────────────────────────────────────────────────────────

#[test]
fn duplicate_add_is_reported_and_ignored() {
    let mut v = WeightVector::new();
    v.add_entry(8, "Subnet 8").unwrap();
    v.set_weight(8, 0.4).unwrap();

    let err = v.add_entry(8, "Another name").unwrap_err();
    assert_eq!(err, VoteError::DuplicateEntry { subnet_id: 8 });
    assert_eq!(v.len(), 2);
    assert_eq!(v.get(8).unwrap().name, "Subnet 8");
    assert_eq!(v.get(8).unwrap().weight, 0.4);
}

// ── Input coercion ───────────────────────────────────────────────────────

#[test]
fn unparsable_weight_input_becomes_zero() {
    let mut v = WeightVector::new();
    assert_eq!(v.update_weight(1, "not a number"), Ok(0.0));
    assert_eq!(v.get(1).unwrap().weight, 0.0);
    assert!(!v.is_valid_for_submission());
}

#[test]
fn out_of_range_weights_are_held_until_submission() {
    let mut v = WeightVector::new();
    v.add_entry(8, "Subnet 8").unwrap();
    v.update_weight(1, "1.5").unwrap();
    v.update_weight(8, "-0.5").unwrap();
    assert_eq!(v.get(1).unwrap().weight, 1.5);
    assert_eq!(v.get(8).unwrap().weight, -0.5);
    // The sum is all that gates submission.
    assert!(v.is_valid_for_submission());
}

// ── Ordering & snapshot ──────────────────────────────────────────────────

#[test]
fn insertion_order_is_preserved() {
    let mut v = WeightVector::new();
    for id in [31, 8, 23] {
        v.add_entry(id, &format!("Subnet {id}")).unwrap();
    }
    v.remove_entry(8).unwrap();
    let ids: Vec<u32> = v.entries().iter().map(|e| e.subnet_id).collect();
    assert_eq!(ids, vec![1, 31, 23]);
}

#[test]
fn snapshot_reflects_current_state() {
    let mut v = WeightVector::new();
    let snap = v.snapshot();
    assert!(snap.valid);
    assert!(!snap.can_remove);

    v.add_entry(8, "Subnet 8").unwrap();
    v.set_weight(8, 0.25).unwrap();
    let snap = v.snapshot();
    assert_eq!(snap.entries.len(), 2);
    assert_eq!(snap.total, 1.25);
    assert!(!snap.valid);
    assert!(snap.can_remove);
}

#[test]
fn normalize_rescales_to_one() {
    let mut v = WeightVector::new();
    v.add_entry(8, "Subnet 8").unwrap();
    v.set_weight(1, 3.0).unwrap();
    v.set_weight(8, 1.0).unwrap();
    v.normalize();
    assert!(v.is_valid_for_submission());
    assert!((v.get(1).unwrap().weight - 0.75).abs() < 1e-12);
}

#[test]
fn dashboard_allocation_is_valid_within_default_epsilon() {
    let mut v = WeightVector::new();
    for (id, name, weight) in test_fixtures::sample_allocation() {
        if id == 1 {
            v.set_weight(id, weight).unwrap();
        } else {
            v.add_entry_with_weight(id, name, weight).unwrap();
        }
    }
    assert_eq!(v.len(), 7);
    assert!(v.is_valid_for_submission(), "total = {}", v.total_weight());
}

#[test]
fn epsilon_comes_from_config() {
    let config = test_fixtures::lenient_config();
    let mut v = WeightVector::from_config(&config.vote);
    v.set_weight(1, 1.0004).unwrap();
    assert!(v.is_valid_for_submission());
    v.set_weight(1, 1.001).unwrap();
    assert!(!v.is_valid_for_submission());
}
