// ==========================================
// Substitute Scheduler - SQLite store
// ==========================================
// Role: relational implementation of SchedulingStore
// Red line: no business logic, parameterized queries only
// ==========================================

use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, Result as SqliteResult, Row};
use uuid::Uuid;

use crate::db;
use crate::domain::types::SubstitutionStatus;
use crate::domain::{
    Absence, ClassGroup, ClassGroupUpdate, NewAbsence, NewClassGroup, NewSubject,
    NewSubstitution, NewTeacher, Subject, SubjectUpdate, Substitution, SubstitutionUpdate,
    Teacher, TeacherUpdate,
};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::store::SchedulingStore;

/// SQLite-backed implementation of [`SchedulingStore`].
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (and bootstrap) the database at `db_path`.
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        db::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Build a store from an already-configured connection.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            db::init_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

// ==========================================
// Row mappers
// ==========================================

fn teacher_from_row(row: &Row<'_>) -> SqliteResult<Teacher> {
    Ok(Teacher {
        id: row.get(0)?,
        name: row.get(1)?,
        knowledge_area: row.get(2)?,
        workload_hours: row.get(3)?,
    })
}

fn subject_from_row(row: &Row<'_>) -> SqliteResult<Subject> {
    Ok(Subject {
        id: row.get(0)?,
        name: row.get(1)?,
        knowledge_area: row.get(2)?,
    })
}

fn class_group_from_row(row: &Row<'_>) -> SqliteResult<ClassGroup> {
    Ok(ClassGroup {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn absence_from_row(row: &Row<'_>) -> SqliteResult<Absence> {
    Ok(Absence {
        id: row.get(0)?,
        teacher_id: row.get(1)?,
        subject_id: row.get(2)?,
        class_group_id: row.get(3)?,
        weekday: row.get(4)?,
        start_time: row.get(5)?,
        duration_hours: row.get(6)?,
        week: row.get(7)?,
        year: row.get(8)?,
    })
}

fn substitution_from_row(row: &Row<'_>) -> SqliteResult<Substitution> {
    Ok(Substitution {
        id: row.get(0)?,
        absence_id: row.get(1)?,
        substitute_teacher_id: row.get(2)?,
        status: SubstitutionStatus::from_db_str(&row.get::<_, String>(3)?),
        message: row.get(4)?,
    })
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl SchedulingStore for SqliteStore {
    // ===== teachers =====

    fn list_teachers(&self) -> RepositoryResult<Vec<Teacher>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, knowledge_area, workload_hours FROM teacher")?;
        let teachers = stmt
            .query_map([], teacher_from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(teachers)
    }

    fn get_teacher(&self, id: &str) -> RepositoryResult<Option<Teacher>> {
        let conn = self.get_conn()?;
        let mut stmt = conn
            .prepare("SELECT id, name, knowledge_area, workload_hours FROM teacher WHERE id = ?1")?;
        match stmt.query_row(params![id], teacher_from_row) {
            Ok(teacher) => Ok(Some(teacher)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_teacher(&self, new: NewTeacher) -> RepositoryResult<Teacher> {
        let teacher = Teacher {
            id: new_id(),
            name: new.name,
            knowledge_area: new.knowledge_area,
            workload_hours: 0,
        };
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO teacher (id, name, knowledge_area, workload_hours) VALUES (?1, ?2, ?3, ?4)",
            params![
                teacher.id,
                teacher.name,
                teacher.knowledge_area,
                teacher.workload_hours
            ],
        )?;
        Ok(teacher)
    }

    fn update_teacher(
        &self,
        id: &str,
        update: TeacherUpdate,
    ) -> RepositoryResult<Option<Teacher>> {
        {
            let conn = self.get_conn()?;
            let tx = conn.unchecked_transaction()?;
            if let Some(name) = &update.name {
                tx.execute(
                    "UPDATE teacher SET name = ?2 WHERE id = ?1",
                    params![id, name],
                )?;
            }
            if let Some(area) = &update.knowledge_area {
                tx.execute(
                    "UPDATE teacher SET knowledge_area = ?2 WHERE id = ?1",
                    params![id, area],
                )?;
            }
            tx.commit()?;
        }
        self.get_teacher(id)
    }

    fn delete_teacher(&self, id: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM teacher WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    fn update_workload(&self, id: &str, new_hours: i32) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "UPDATE teacher SET workload_hours = ?2 WHERE id = ?1",
            params![id, new_hours],
        )?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Teacher".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    // ===== subjects =====

    fn list_subjects(&self) -> RepositoryResult<Vec<Subject>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT id, name, knowledge_area FROM subject")?;
        let subjects = stmt
            .query_map([], subject_from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(subjects)
    }

    fn get_subject(&self, id: &str) -> RepositoryResult<Option<Subject>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, knowledge_area FROM subject WHERE id = ?1")?;
        match stmt.query_row(params![id], subject_from_row) {
            Ok(subject) => Ok(Some(subject)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_subject(&self, new: NewSubject) -> RepositoryResult<Subject> {
        let subject = Subject {
            id: new_id(),
            name: new.name,
            knowledge_area: new.knowledge_area,
        };
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO subject (id, name, knowledge_area) VALUES (?1, ?2, ?3)",
            params![subject.id, subject.name, subject.knowledge_area],
        )?;
        Ok(subject)
    }

    fn update_subject(
        &self,
        id: &str,
        update: SubjectUpdate,
    ) -> RepositoryResult<Option<Subject>> {
        {
            let conn = self.get_conn()?;
            let tx = conn.unchecked_transaction()?;
            if let Some(name) = &update.name {
                tx.execute(
                    "UPDATE subject SET name = ?2 WHERE id = ?1",
                    params![id, name],
                )?;
            }
            if let Some(area) = &update.knowledge_area {
                tx.execute(
                    "UPDATE subject SET knowledge_area = ?2 WHERE id = ?1",
                    params![id, area],
                )?;
            }
            tx.commit()?;
        }
        self.get_subject(id)
    }

    fn delete_subject(&self, id: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM subject WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    // ===== class groups =====

    fn list_class_groups(&self) -> RepositoryResult<Vec<ClassGroup>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM class_group")?;
        let groups = stmt
            .query_map([], class_group_from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(groups)
    }

    fn get_class_group(&self, id: &str) -> RepositoryResult<Option<ClassGroup>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM class_group WHERE id = ?1")?;
        match stmt.query_row(params![id], class_group_from_row) {
            Ok(group) => Ok(Some(group)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_class_group(&self, new: NewClassGroup) -> RepositoryResult<ClassGroup> {
        let class_group = ClassGroup {
            id: new_id(),
            name: new.name,
        };
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO class_group (id, name) VALUES (?1, ?2)",
            params![class_group.id, class_group.name],
        )?;
        Ok(class_group)
    }

    fn update_class_group(
        &self,
        id: &str,
        update: ClassGroupUpdate,
    ) -> RepositoryResult<Option<ClassGroup>> {
        {
            let conn = self.get_conn()?;
            let tx = conn.unchecked_transaction()?;
            if let Some(name) = &update.name {
                tx.execute(
                    "UPDATE class_group SET name = ?2 WHERE id = ?1",
                    params![id, name],
                )?;
            }
            tx.commit()?;
        }
        self.get_class_group(id)
    }

    fn delete_class_group(&self, id: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM class_group WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    // ===== absences =====

    fn list_absences(&self) -> RepositoryResult<Vec<Absence>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, teacher_id, subject_id, class_group_id, weekday, start_time, \
             duration_hours, week, year FROM absence",
        )?;
        let absences = stmt
            .query_map([], absence_from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(absences)
    }

    fn absences_by_week(&self, week: i32, year: i32) -> RepositoryResult<Vec<Absence>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, teacher_id, subject_id, class_group_id, weekday, start_time, \
             duration_hours, week, year FROM absence WHERE week = ?1 AND year = ?2",
        )?;
        let absences = stmt
            .query_map(params![week, year], absence_from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(absences)
    }

    fn get_absence(&self, id: &str) -> RepositoryResult<Option<Absence>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, teacher_id, subject_id, class_group_id, weekday, start_time, \
             duration_hours, week, year FROM absence WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], absence_from_row) {
            Ok(absence) => Ok(Some(absence)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_absence(&self, new: NewAbsence) -> RepositoryResult<Absence> {
        let absence = Absence {
            id: new_id(),
            teacher_id: new.teacher_id,
            subject_id: new.subject_id,
            class_group_id: new.class_group_id,
            weekday: new.weekday,
            start_time: new.start_time,
            duration_hours: new.duration_hours,
            week: new.week,
            year: new.year,
        };
        let pending = NewSubstitution::pending_for(&absence.id);

        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO absence (id, teacher_id, subject_id, class_group_id, weekday, \
             start_time, duration_hours, week, year) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                absence.id,
                absence.teacher_id,
                absence.subject_id,
                absence.class_group_id,
                absence.weekday,
                absence.start_time,
                absence.duration_hours,
                absence.week,
                absence.year
            ],
        )?;
        tx.execute(
            "INSERT INTO substitution (id, absence_id, substitute_teacher_id, status, message) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                new_id(),
                pending.absence_id,
                pending.substitute_teacher_id,
                pending.status.as_str(),
                pending.message
            ],
        )?;
        tx.commit()?;
        Ok(absence)
    }

    fn delete_absence(&self, id: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;
        tx.execute(
            "DELETE FROM substitution WHERE absence_id = ?1",
            params![id],
        )?;
        let affected = tx.execute("DELETE FROM absence WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(affected > 0)
    }

    // ===== substitutions =====

    fn list_substitutions(&self) -> RepositoryResult<Vec<Substitution>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, absence_id, substitute_teacher_id, status, message FROM substitution",
        )?;
        let substitutions = stmt
            .query_map([], substitution_from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(substitutions)
    }

    fn get_substitution(&self, id: &str) -> RepositoryResult<Option<Substitution>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, absence_id, substitute_teacher_id, status, message \
             FROM substitution WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], substitution_from_row) {
            Ok(substitution) => Ok(Some(substitution)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn substitution_by_absence(
        &self,
        absence_id: &str,
    ) -> RepositoryResult<Option<Substitution>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, absence_id, substitute_teacher_id, status, message \
             FROM substitution WHERE absence_id = ?1",
        )?;
        match stmt.query_row(params![absence_id], substitution_from_row) {
            Ok(substitution) => Ok(Some(substitution)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn substitutions_by_week(&self, week: i32, year: i32) -> RepositoryResult<Vec<Substitution>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT s.id, s.absence_id, s.substitute_teacher_id, s.status, s.message \
             FROM substitution s \
             JOIN absence a ON a.id = s.absence_id \
             WHERE a.week = ?1 AND a.year = ?2",
        )?;
        let substitutions = stmt
            .query_map(params![week, year], substitution_from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(substitutions)
    }

    fn update_substitution(
        &self,
        id: &str,
        update: SubstitutionUpdate,
    ) -> RepositoryResult<Option<Substitution>> {
        {
            let conn = self.get_conn()?;
            // One transaction: a resolution sets teacher ref and status
            // together, and a partial write must never leave the ref set
            // while the status still reads pending.
            let tx = conn.unchecked_transaction()?;
            if let Some(teacher_id) = &update.substitute_teacher_id {
                tx.execute(
                    "UPDATE substitution SET substitute_teacher_id = ?2 WHERE id = ?1",
                    params![id, teacher_id],
                )?;
            }
            if let Some(status) = update.status {
                tx.execute(
                    "UPDATE substitution SET status = ?2 WHERE id = ?1",
                    params![id, status.as_str()],
                )?;
            }
            if let Some(message) = &update.message {
                tx.execute(
                    "UPDATE substitution SET message = ?2 WHERE id = ?1",
                    params![id, message],
                )?;
            }
            tx.commit()?;
        }
        self.get_substitution(id)
    }
}
