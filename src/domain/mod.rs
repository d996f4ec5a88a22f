// ==========================================
// Substitute Scheduler - domain layer
// ==========================================
// Role: define domain entities, types and input records
// Red line: no data access logic, no engine logic
// ==========================================

pub mod absence;
pub mod class_group;
pub mod subject;
pub mod substitution;
pub mod teacher;
pub mod types;

// Core re-exports
pub use absence::{Absence, NewAbsence};
pub use class_group::{ClassGroup, ClassGroupUpdate, NewClassGroup};
pub use subject::{NewSubject, Subject, SubjectUpdate};
pub use substitution::{NewSubstitution, Substitution, SubstitutionUpdate};
pub use teacher::{NewTeacher, Teacher, TeacherUpdate};
pub use types::SubstitutionStatus;
