// ABOUTME: Administrator reports and maintenance over the whole student collection.
// ABOUTME: Groups students by overall grade, splits pass/fail, and removes records via the store.

use std::collections::BTreeMap;

use uniapp_core::{Grade, Student};
use uniapp_store::{RecordStore, StoreError};

/// Students keyed by overall grade. Students with no subjects have no grade and are omitted.
pub fn group_by_grade(store: &RecordStore) -> BTreeMap<Grade, Vec<&Student>> {
    let mut groups: BTreeMap<Grade, Vec<&Student>> = BTreeMap::new();
    for student in store.list_all() {
        if let Some(grade) = student.overall_grade() {
            groups.entry(grade).or_default().push(student);
        }
    }
    groups
}

/// Split graded students into (passing, failing). Students with no subjects are omitted.
pub fn partition_pass_fail(store: &RecordStore) -> (Vec<&Student>, Vec<&Student>) {
    store
        .list_all()
        .iter()
        .filter(|s| !s.subjects.is_empty())
        .partition(|s| s.is_passing())
}

pub fn remove_student(store: &mut RecordStore, student_id: &str) -> Result<bool, StoreError> {
    store.remove_by_id(student_id)
}

pub fn clear_all(store: &mut RecordStore) -> Result<(), StoreError> {
    store.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use uniapp_core::Subject;

    fn student_with_marks(n: u32, marks: &[u8]) -> Student {
        let mut student = Student::new(
            format!("s{n}@x.com"),
            "Password123",
            format!("Student {n}"),
            format!("{:06}", n),
        );
        for (i, mark) in marks.iter().enumerate() {
            student
                .subjects
                .push(Subject::with_mark(format!("{:03}", i + 1), *mark));
        }
        student
    }

    fn make_store(dir: &TempDir) -> RecordStore {
        let mut store = RecordStore::open(dir.path().join("students.data")).unwrap();
        store.add(student_with_marks(1, &[90, 88])).unwrap();
        store.add(student_with_marks(2, &[40, 30])).unwrap();
        store.add(student_with_marks(3, &[86])).unwrap();
        store.add(student_with_marks(4, &[])).unwrap();
        store.add(student_with_marks(5, &[60, 62])).unwrap();
        store
    }

    fn ids(students: &[&Student]) -> Vec<String> {
        students.iter().map(|s| s.student_id.clone()).collect()
    }

    #[test]
    fn groups_by_overall_grade() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);

        let groups = group_by_grade(&store);

        assert_eq!(groups.len(), 3);
        assert_eq!(ids(&groups[&Grade::HD]), vec!["000001", "000003"]);
        assert_eq!(ids(&groups[&Grade::P]), vec!["000005"]);
        assert_eq!(ids(&groups[&Grade::Z]), vec!["000002"]);
        assert!(!groups.contains_key(&Grade::D));
    }

    #[test]
    fn partitions_pass_and_fail() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);

        let (pass, fail) = partition_pass_fail(&store);

        assert_eq!(ids(&pass), vec!["000001", "000003", "000005"]);
        assert_eq!(ids(&fail), vec!["000002"]);
    }

    #[test]
    fn remove_student_reports_outcome() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);

        assert!(remove_student(&mut store, "000002").unwrap());
        assert!(!remove_student(&mut store, "000002").unwrap());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn clear_all_empties_store() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);

        clear_all(&mut store).unwrap();

        assert!(store.is_empty());
        assert!(group_by_grade(&store).is_empty());
    }
}
