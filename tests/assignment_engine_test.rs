// ==========================================
// AssignmentEngine integration tests
// ==========================================
// Covered:
// 1. least-loaded candidate selection and workload persistence
// 2. workload cap as an eligibility filter (including the 60h boundary)
// 3. unavailable outcome when no candidate qualifies
// 4. idempotent re-runs
// 5. silent skip on data-integrity gaps
// 6. same-run competition observes the mutated workload
// ==========================================

mod test_helpers;

use std::sync::Arc;

use substitute_scheduler::domain::types::SubstitutionStatus;
use substitute_scheduler::engine::{AssignmentEngine, MAX_WORKLOAD_HOURS};
use substitute_scheduler::logging;
use substitute_scheduler::repository::SchedulingStore;

use test_helpers::{add_absence, add_teacher, create_test_store};

#[test]
fn test_selects_minimum_workload_candidate() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let absent = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    let a = add_teacher(store.as_ref(), "Professor A", "Matemática", 10);
    let _b = add_teacher(store.as_ref(), "Professor B", "Matemática", 30);

    let absence = add_absence(store.as_ref(), &absent.id, 2, 10, 2025);

    let engine = AssignmentEngine::new(store.clone());
    let outcome = engine.generate(10, 2025).expect("run failed");
    assert_eq!(outcome.generated, 1);
    assert_eq!(outcome.failures, 0);

    let substitution = store
        .substitution_by_absence(&absence.id)
        .unwrap()
        .expect("substitution must exist");
    assert_eq!(substitution.status, SubstitutionStatus::Assigned);
    assert_eq!(substitution.substitute_teacher_id.as_deref(), Some(a.id.as_str()));
    assert!(substitution
        .message
        .as_deref()
        .unwrap()
        .contains("Professor A"));

    let a_after = store.get_teacher(&a.id).unwrap().unwrap();
    assert_eq!(a_after.workload_hours, 12);
}

#[test]
fn test_absent_teacher_is_never_a_candidate() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    // The absent teacher has the lowest workload in the area but must not
    // substitute for themself.
    let absent = add_teacher(store.as_ref(), "Titular", "História", 0);
    let colleague = add_teacher(store.as_ref(), "Colega", "História", 40);

    let absence = add_absence(store.as_ref(), &absent.id, 1, 12, 2025);

    let engine = AssignmentEngine::new(store.clone());
    engine.generate(12, 2025).expect("run failed");

    let substitution = store
        .substitution_by_absence(&absence.id)
        .unwrap()
        .unwrap();
    assert_eq!(
        substitution.substitute_teacher_id.as_deref(),
        Some(colleague.id.as_str())
    );
}

#[test]
fn test_workload_cap_excludes_candidates() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let absent = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    let loaded = add_teacher(store.as_ref(), "Carregado", "Matemática", 59);
    let other_area = add_teacher(store.as_ref(), "Outra Área", "Química", 0);

    // duration 2 would push the only area colleague to 61h
    let absence = add_absence(store.as_ref(), &absent.id, 2, 20, 2025);

    let engine = AssignmentEngine::new(store.clone());
    let outcome = engine.generate(20, 2025).expect("run failed");
    assert_eq!(outcome.generated, 0);
    assert_eq!(outcome.failures, 1);

    let substitution = store
        .substitution_by_absence(&absence.id)
        .unwrap()
        .unwrap();
    assert_eq!(substitution.status, SubstitutionStatus::Unavailable);
    assert!(substitution.substitute_teacher_id.is_none());
    assert!(substitution.message.is_some());

    // No workload moved anywhere.
    assert_eq!(store.get_teacher(&loaded.id).unwrap().unwrap().workload_hours, 59);
    assert_eq!(
        store
            .get_teacher(&other_area.id)
            .unwrap()
            .unwrap()
            .workload_hours,
        0
    );
}

#[test]
fn test_workload_may_reach_cap_exactly() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let absent = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    let near_cap = add_teacher(store.as_ref(), "Quase no Limite", "Matemática", 59);

    add_absence(store.as_ref(), &absent.id, 1, 21, 2025);

    let engine = AssignmentEngine::new(store.clone());
    let outcome = engine.generate(21, 2025).expect("run failed");
    assert_eq!(outcome.generated, 1);

    let after = store.get_teacher(&near_cap.id).unwrap().unwrap();
    assert_eq!(after.workload_hours, MAX_WORKLOAD_HOURS);
}

#[test]
fn test_rerun_is_idempotent() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let absent = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    let substitute = add_teacher(store.as_ref(), "Substituto", "Matemática", 0);

    let absence = add_absence(store.as_ref(), &absent.id, 3, 15, 2025);

    let engine = AssignmentEngine::new(store.clone());
    let first = engine.generate(15, 2025).expect("run failed");
    assert_eq!(first.generated, 1);

    let resolved = store
        .substitution_by_absence(&absence.id)
        .unwrap()
        .unwrap();

    let second = engine.generate(15, 2025).expect("re-run failed");
    assert_eq!(second.generated, 0);
    assert_eq!(second.failures, 0);

    // The resolved record and the workload are untouched.
    let resolved_again = store
        .substitution_by_absence(&absence.id)
        .unwrap()
        .unwrap();
    assert_eq!(resolved_again, resolved);
    assert_eq!(
        store
            .get_teacher(&substitute.id)
            .unwrap()
            .unwrap()
            .workload_hours,
        3
    );
}

#[test]
fn test_unavailable_outcome_is_terminal() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let absent = add_teacher(store.as_ref(), "Titular", "Física", 0);
    let absence = add_absence(store.as_ref(), &absent.id, 2, 30, 2025);

    let engine = AssignmentEngine::new(store.clone());
    let first = engine.generate(30, 2025).expect("run failed");
    assert_eq!(first.failures, 1);

    // A colleague arriving later does not resurrect the record.
    add_teacher(store.as_ref(), "Novo Colega", "Física", 0);
    let second = engine.generate(30, 2025).expect("re-run failed");
    assert_eq!(second.generated, 0);
    assert_eq!(second.failures, 0);

    let substitution = store
        .substitution_by_absence(&absence.id)
        .unwrap()
        .unwrap();
    assert_eq!(substitution.status, SubstitutionStatus::Unavailable);
}

#[test]
fn test_missing_absent_teacher_is_skipped_silently() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let absent = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    add_teacher(store.as_ref(), "Substituto", "Matemática", 0);
    let absence = add_absence(store.as_ref(), &absent.id, 2, 40, 2025);

    // The absent teacher is removed after the absence was recorded.
    store.delete_teacher(&absent.id).unwrap();

    let engine = AssignmentEngine::new(store.clone());
    let outcome = engine.generate(40, 2025).expect("run failed");

    // Not an error, not a failure: the record simply stays pending.
    assert_eq!(outcome.generated, 0);
    assert_eq!(outcome.failures, 0);
    let substitution = store
        .substitution_by_absence(&absence.id)
        .unwrap()
        .unwrap();
    assert_eq!(substitution.status, SubstitutionStatus::Pending);
}

#[test]
fn test_same_run_competition_sees_updated_workload() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let absent_one = add_teacher(store.as_ref(), "Titular 1", "Matemática", 0);
    let absent_two = add_teacher(store.as_ref(), "Titular 2", "Matemática", 0);
    let light = add_teacher(store.as_ref(), "Leve", "Matemática", 0);
    let medium = add_teacher(store.as_ref(), "Médio", "Matemática", 1);

    // Two absences in the same week competing for the same area. Whichever is
    // processed first takes the lighter substitute and pushes them past the
    // other candidate, so the second absence must go to the other teacher.
    add_absence(store.as_ref(), &absent_one.id, 2, 50, 2025);
    add_absence(store.as_ref(), &absent_two.id, 2, 50, 2025);

    let engine = AssignmentEngine::new(store.clone());
    let outcome = engine.generate(50, 2025).expect("run failed");
    assert_eq!(outcome.generated, 2);

    let light_after = store.get_teacher(&light.id).unwrap().unwrap();
    let medium_after = store.get_teacher(&medium.id).unwrap().unwrap();
    assert_eq!(light_after.workload_hours, 2);
    assert_eq!(medium_after.workload_hours, 3);
}

#[test]
fn test_workload_never_exceeds_cap_across_runs() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let absent = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    let substitute = add_teacher(store.as_ref(), "Único Substituto", "Matemática", 0);

    // 10 absences of 8h each across distinct weeks: only 7 fit under 60h.
    for week in 1..=10 {
        add_absence(store.as_ref(), &absent.id, 8, week, 2025);
    }

    let engine = AssignmentEngine::new(store.clone());
    let mut generated = 0;
    let mut failures = 0;
    for week in 1..=10 {
        let outcome = engine.generate(week, 2025).expect("run failed");
        generated += outcome.generated;
        failures += outcome.failures;
        let current = store.get_teacher(&substitute.id).unwrap().unwrap();
        assert!(current.workload_hours <= MAX_WORKLOAD_HOURS);
    }
    assert_eq!(generated, 7);
    assert_eq!(failures, 3);
    assert_eq!(
        store
            .get_teacher(&substitute.id)
            .unwrap()
            .unwrap()
            .workload_hours,
        56
    );
}
