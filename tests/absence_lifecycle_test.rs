// ==========================================
// Absence lifecycle integration tests
// ==========================================
// Covered:
// 1. every absence gets exactly one pending substitution, atomically
// 2. deleting an absence removes its substitution
// 3. AbsenceApi referential validation
// ==========================================

mod test_helpers;

use std::sync::Arc;

use substitute_scheduler::api::{AbsenceApi, ApiError};
use substitute_scheduler::domain::types::SubstitutionStatus;
use substitute_scheduler::domain::{NewAbsence, NewClassGroup, NewSubject};
use substitute_scheduler::logging;
use substitute_scheduler::repository::SchedulingStore;

use test_helpers::{add_absence, add_teacher, create_test_store};

#[test]
fn test_absence_creation_spawns_pending_substitution() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let teacher = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    let absence = add_absence(store.as_ref(), &teacher.id, 2, 10, 2025);

    let substitution = store
        .substitution_by_absence(&absence.id)
        .unwrap()
        .expect("substitution must be created with the absence");
    assert_eq!(substitution.status, SubstitutionStatus::Pending);
    assert!(substitution.substitute_teacher_id.is_none());
    assert!(substitution.message.is_none());
}

#[test]
fn test_one_substitution_per_absence() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let teacher = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    add_absence(store.as_ref(), &teacher.id, 2, 10, 2025);
    add_absence(store.as_ref(), &teacher.id, 1, 10, 2025);
    add_absence(store.as_ref(), &teacher.id, 3, 11, 2025);

    assert_eq!(store.list_absences().unwrap().len(), 3);
    assert_eq!(store.list_substitutions().unwrap().len(), 3);

    // One-to-one by absence id.
    for absence in store.list_absences().unwrap() {
        let matching: Vec<_> = store
            .list_substitutions()
            .unwrap()
            .into_iter()
            .filter(|s| s.absence_id == absence.id)
            .collect();
        assert_eq!(matching.len(), 1);
    }
}

#[test]
fn test_deleting_absence_removes_substitution() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);

    let teacher = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    let keep = add_absence(store.as_ref(), &teacher.id, 2, 10, 2025);
    let drop = add_absence(store.as_ref(), &teacher.id, 1, 10, 2025);

    assert!(store.delete_absence(&drop.id).unwrap());

    assert!(store.get_absence(&drop.id).unwrap().is_none());
    assert!(store.substitution_by_absence(&drop.id).unwrap().is_none());

    // The sibling absence is unaffected.
    assert!(store.get_absence(&keep.id).unwrap().is_some());
    assert!(store.substitution_by_absence(&keep.id).unwrap().is_some());
}

#[test]
fn test_absence_api_rejects_unknown_references() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);
    let api = AbsenceApi::new(store.clone());

    let teacher = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    let subject = store
        .create_subject(NewSubject {
            name: "Álgebra".to_string(),
            knowledge_area: "Matemática".to_string(),
        })
        .unwrap();
    let class_group = store
        .create_class_group(NewClassGroup {
            name: "9º Ano A".to_string(),
        })
        .unwrap();

    let mut new = NewAbsence {
        teacher_id: "missing".to_string(),
        subject_id: subject.id.clone(),
        class_group_id: class_group.id.clone(),
        weekday: 1,
        start_time: "08:00".to_string(),
        duration_hours: 2,
        week: 10,
        year: 2025,
    };
    assert!(matches!(
        api.create_absence(new.clone()),
        Err(ApiError::ValidationError(_))
    ));

    new.teacher_id = teacher.id.clone();
    new.subject_id = "missing".to_string();
    assert!(matches!(
        api.create_absence(new.clone()),
        Err(ApiError::ValidationError(_))
    ));

    new.subject_id = subject.id;
    new.class_group_id = "missing".to_string();
    assert!(matches!(
        api.create_absence(new.clone()),
        Err(ApiError::ValidationError(_))
    ));

    // Nothing was written along the way.
    assert!(store.list_absences().unwrap().is_empty());
    assert!(store.list_substitutions().unwrap().is_empty());

    new.class_group_id = class_group.id;
    let absence = api.create_absence(new).expect("valid absence must pass");
    assert!(api.substitution_for(&absence.id).unwrap().is_some());
}

#[test]
fn test_absence_api_rejects_bad_fields() {
    logging::init_test();
    let (_guard, store) = create_test_store().expect("test store");
    let store: Arc<dyn SchedulingStore> = Arc::new(store);
    let api = AbsenceApi::new(store.clone());

    let teacher = add_teacher(store.as_ref(), "Titular", "Matemática", 0);
    let new = NewAbsence {
        teacher_id: teacher.id,
        subject_id: "s".to_string(),
        class_group_id: "c".to_string(),
        weekday: 6,
        start_time: "08:00".to_string(),
        duration_hours: 2,
        week: 10,
        year: 2025,
    };
    // Field validation fires before the referential checks.
    assert!(matches!(
        api.create_absence(new),
        Err(ApiError::ValidationError(_))
    ));
}
