//! Form handling and persistence orchestration for student records.

use crate::error::AppError;
use crate::grading;
use crate::models::student::{Marks, NewStudent, Student, StudentForm};
use crate::store::StudentStore;

/// Validate the form, coerce the marks and derive total/percent.
pub fn build_record(form: StudentForm) -> Result<NewStudent, AppError> {
    let name = required(form.name, "name is required")?;
    let roll = required(form.roll, "roll is required")?;

    let marks = Marks {
        math: grading::coerce_mark(form.math.as_deref()),
        science: grading::coerce_mark(form.science.as_deref()),
        english: grading::coerce_mark(form.english.as_deref()),
    };
    let grade = grading::grade(&marks);

    Ok(NewStudent {
        name,
        roll,
        class_name: form.class_name.unwrap_or_default(),
        marks,
        total: grade.total,
        percent: grade.percent,
    })
}

fn required(value: Option<String>, message: &'static str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(AppError::Validation(message))
}

/// Create a student record from a submitted form.
pub async fn create_student(
    store: &dyn StudentStore,
    form: StudentForm,
) -> Result<Student, AppError> {
    let record = build_record(form)?;
    let student = store.create(record).await?;

    crate::metrics::student_saved("create");
    tracing::info!(
        student_id = student.id,
        roll = %student.roll,
        total = student.total,
        "Student created"
    );

    Ok(student)
}

/// Overwrite a student record. `Ok(None)` when the id matched nothing.
pub async fn update_student(
    store: &dyn StudentStore,
    id: i64,
    form: StudentForm,
) -> Result<Option<Student>, AppError> {
    let record = build_record(form)?;
    let updated = store.update(id, record).await?;

    match &updated {
        Some(student) => {
            crate::metrics::student_saved("update");
            tracing::info!(student_id = student.id, roll = %student.roll, "Student updated");
        }
        None => tracing::debug!(student_id = id, "Update matched no student"),
    }

    Ok(updated)
}

/// Delete a student. Failures are logged and reported as `false`.
pub async fn delete_student(store: &dyn StudentStore, id: i64) -> bool {
    match store.delete(id).await {
        Ok(true) => {
            crate::metrics::student_saved("delete");
            tracing::info!(student_id = id, "Student deleted");
            true
        }
        Ok(false) => {
            tracing::debug!(student_id = id, "Delete matched no student");
            false
        }
        Err(e) => {
            crate::metrics::request_failed("delete");
            tracing::error!(student_id = id, error = %e, "Delete failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStudentStore;

    fn form(name: &str, roll: &str, math: &str, science: &str, english: &str) -> StudentForm {
        StudentForm {
            name: Some(name.to_string()),
            roll: Some(roll.to_string()),
            class_name: Some("10A".to_string()),
            math: Some(math.to_string()),
            science: Some(science.to_string()),
            english: Some(english.to_string()),
        }
    }

    #[test]
    fn test_build_record_computes_grade() {
        let record = build_record(form("Asha", "R1", "50", "70", "90")).unwrap();
        assert_eq!(record.total, 210.0);
        assert_eq!(record.percent, 70.0);
        assert_eq!(record.marks.science, 70.0);
    }

    #[test]
    fn test_build_record_coerces_bad_marks_to_zero() {
        let record = build_record(form("Asha", "R1", "abc", "", "30")).unwrap();
        assert_eq!(record.marks.math, 0.0);
        assert_eq!(record.marks.science, 0.0);
        assert_eq!(record.total, 30.0);
        assert_eq!(record.percent, 10.0);
    }

    #[test]
    fn test_build_record_trims_and_requires_identity() {
        let record = build_record(form("  Asha  ", " R1 ", "1", "1", "1")).unwrap();
        assert_eq!(record.name, "Asha");
        assert_eq!(record.roll, "R1");

        assert!(matches!(
            build_record(form("   ", "R1", "1", "1", "1")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            build_record(StudentForm {
                name: Some("Asha".to_string()),
                ..StudentForm::default()
            }),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_build_record_defaults_class_and_marks() {
        let record = build_record(StudentForm {
            name: Some("Asha".to_string()),
            roll: Some("R1".to_string()),
            ..StudentForm::default()
        })
        .unwrap();
        assert_eq!(record.class_name, "");
        assert_eq!(record.marks, Marks::default());
        assert_eq!(record.percent, 0.0);
    }

    #[tokio::test]
    async fn test_update_recomputes_grade() {
        let store = MemoryStudentStore::new();
        let created = create_student(&store, form("Asha", "R1", "10", "10", "10"))
            .await
            .unwrap();

        let updated = update_student(&store, created.id, form("Asha", "R1", "100", "100", "100"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.total, 300.0);
        assert_eq!(updated.percent, 100.0);
    }

    #[tokio::test]
    async fn test_long_identity_fields_are_accepted() {
        let store = MemoryStudentStore::new();
        let name = "N".repeat(300);
        let roll = "x".repeat(65);

        let created = create_student(&store, form(&name, &roll, "1", "2", "3"))
            .await
            .expect("long name and roll should be stored");
        assert_eq!(created.name, name);
        assert_eq!(created.roll, roll);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_an_error() {
        let store = MemoryStudentStore::new();
        assert!(!delete_student(&store, 12345).await);
    }
}
