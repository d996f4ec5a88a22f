// ==========================================
// Test helpers
// ==========================================
// Role: temp-database creation and roster/absence seeding for the
// integration tests
// ==========================================

#![allow(dead_code)]

use std::error::Error;

use tempfile::NamedTempFile;

use substitute_scheduler::domain::{Absence, NewAbsence, NewTeacher, Teacher};
use substitute_scheduler::repository::{SchedulingStore, SqliteStore};

/// Create a temp-file-backed SQLite store.
///
/// The returned NamedTempFile must stay alive for the store's lifetime.
pub fn create_test_store() -> Result<(NamedTempFile, SqliteStore), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();
    let store = SqliteStore::new(&db_path)?;
    Ok((temp_file, store))
}

/// Create a teacher with a preset accumulated workload.
pub fn add_teacher(
    store: &dyn SchedulingStore,
    name: &str,
    area: &str,
    workload_hours: i32,
) -> Teacher {
    let teacher = store
        .create_teacher(NewTeacher {
            name: name.to_string(),
            knowledge_area: area.to_string(),
        })
        .expect("teacher creation failed");
    if workload_hours != 0 {
        store
            .update_workload(&teacher.id, workload_hours)
            .expect("workload update failed");
    }
    Teacher {
        workload_hours,
        ..teacher
    }
}

/// Record an absence for a teacher (subject and class group are created on
/// the fly; the weekly grid details stay fixed).
pub fn add_absence(
    store: &dyn SchedulingStore,
    teacher_id: &str,
    duration_hours: i32,
    week: i32,
    year: i32,
) -> Absence {
    let subject = store
        .create_subject(substitute_scheduler::domain::NewSubject {
            name: "Disciplina de Teste".to_string(),
            knowledge_area: "Teste".to_string(),
        })
        .expect("subject creation failed");
    let class_group = store
        .create_class_group(substitute_scheduler::domain::NewClassGroup {
            name: "Turma de Teste".to_string(),
        })
        .expect("class group creation failed");
    store
        .create_absence(NewAbsence {
            teacher_id: teacher_id.to_string(),
            subject_id: subject.id,
            class_group_id: class_group.id,
            weekday: 0,
            start_time: "08:00".to_string(),
            duration_hours,
            week,
            year,
        })
        .expect("absence creation failed")
}
