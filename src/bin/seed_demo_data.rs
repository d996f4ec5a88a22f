// ==========================================
// Substitute Scheduler - demo data seeding
// ==========================================
// Development utility: seeds a small roster plus a week of absences so the
// schedule/generate/stats commands have something to chew on.
// ==========================================

use anyhow::Result;

use substitute_scheduler::config::default_db_path;
use substitute_scheduler::domain::{NewAbsence, NewClassGroup, NewSubject, NewTeacher};
use substitute_scheduler::logging;
use substitute_scheduler::repository::{SchedulingStore, SqliteStore};

fn main() -> Result<()> {
    logging::init();

    let db_path = default_db_path();
    tracing::info!("seeding demo data into {}", db_path);
    let store = SqliteStore::new(&db_path)?;

    let ana = store.create_teacher(NewTeacher {
        name: "Ana Souza".to_string(),
        knowledge_area: "Matemática".to_string(),
    })?;
    let bruno = store.create_teacher(NewTeacher {
        name: "Bruno Lima".to_string(),
        knowledge_area: "Matemática".to_string(),
    })?;
    let carla = store.create_teacher(NewTeacher {
        name: "Carla Mendes".to_string(),
        knowledge_area: "História".to_string(),
    })?;
    store.create_teacher(NewTeacher {
        name: "Diego Alves".to_string(),
        knowledge_area: "História".to_string(),
    })?;

    let algebra = store.create_subject(NewSubject {
        name: "Álgebra".to_string(),
        knowledge_area: "Matemática".to_string(),
    })?;
    let historia = store.create_subject(NewSubject {
        name: "História Geral".to_string(),
        knowledge_area: "História".to_string(),
    })?;

    let turma_a = store.create_class_group(NewClassGroup {
        name: "9º Ano A".to_string(),
    })?;
    let turma_b = store.create_class_group(NewClassGroup {
        name: "8º Ano B".to_string(),
    })?;

    store.create_absence(NewAbsence {
        teacher_id: ana.id.clone(),
        subject_id: algebra.id.clone(),
        class_group_id: turma_a.id.clone(),
        weekday: 0,
        start_time: "08:00".to_string(),
        duration_hours: 2,
        week: 10,
        year: 2025,
    })?;
    store.create_absence(NewAbsence {
        teacher_id: bruno.id,
        subject_id: algebra.id,
        class_group_id: turma_b.id.clone(),
        weekday: 2,
        start_time: "10:00".to_string(),
        duration_hours: 1,
        week: 10,
        year: 2025,
    })?;
    store.create_absence(NewAbsence {
        teacher_id: carla.id,
        subject_id: historia.id,
        class_group_id: turma_b.id,
        weekday: 4,
        start_time: "14:00".to_string(),
        duration_hours: 3,
        week: 10,
        year: 2025,
    })?;

    tracing::info!("demo data seeded: 4 teachers, 2 subjects, 2 class groups, 3 absences (week 10/2025)");
    Ok(())
}
