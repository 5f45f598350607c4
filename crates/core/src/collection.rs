//! Ordered in-memory collection of records.

use crate::record::Record;

/// All records of one data file, in file order.
///
/// Sorted variants are re-sorted after each insertion; the sort is stable so
/// records sharing a key keep their relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R: Record> Collection<R> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Wrap records as loaded from storage. File order is preserved.
    pub fn from_vec(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Append a record, restoring the sort invariant for sorted variants.
    pub fn add(&mut self, record: R) {
        self.records.push(record);
        if R::SORTED {
            self.records.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
        }
    }

    /// Records that pass the variant's display filter.
    pub fn listed(&self) -> impl Iterator<Item = &R> {
        self.records.iter().filter(|r| r.is_listed())
    }

    /// Iterate all records.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records as a slice.
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Record> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Student, Worker};

    fn student(name: &str, group: &str) -> Student {
        Student::new(name, group, "5 5").unwrap()
    }

    #[test]
    fn test_students_sorted_by_group_after_each_add() {
        let mut students = Collection::new();
        for (name, group) in [("a", "3"), ("b", "1"), ("c", "2"), ("d", "10"), ("e", "1")] {
            students.add(student(name, group));
            let groups: Vec<_> = students.iter().map(|s| s.group_number.as_str()).collect();
            assert!(groups.windows(2).all(|w| w[0] <= w[1]), "unsorted: {:?}", groups);
        }

        // String comparison: "10" sorts before "2"
        let groups: Vec<_> = students.iter().map(|s| s.group_number.as_str()).collect();
        assert_eq!(groups, vec!["1", "1", "10", "2", "3"]);
    }

    #[test]
    fn test_student_sort_is_stable() {
        let mut students = Collection::new();
        students.add(student("first", "7"));
        students.add(student("other", "1"));
        students.add(student("second", "7"));

        let names: Vec<_> = students.iter().map(|s| s.full_name.as_str()).collect();
        assert_eq!(names, vec!["other", "first", "second"]);
    }

    #[test]
    fn test_workers_keep_insertion_order() {
        let mut staff = Collection::new();
        staff.add(Worker::new("Zed", None, 2020));
        staff.add(Worker::new("Abe", Some("Cook".into()), 1999));

        let names: Vec<_> = staff.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Abe"]);
    }

    #[test]
    fn test_from_vec_preserves_file_order() {
        let loaded = vec![student("x", "9"), student("y", "1")];
        let students = Collection::from_vec(loaded.clone());
        assert_eq!(students.as_slice(), loaded.as_slice());
    }

    #[test]
    fn test_listed_applies_display_filter() {
        let mut students = Collection::new();
        students.add(Student::new("good", "1", "5 4").unwrap());
        students.add(Student::new("poor", "1", "3 4").unwrap());
        students.add(Student::new("none", "1", "").unwrap());

        let names: Vec<_> = students.listed().map(|s| s.full_name.as_str()).collect();
        assert_eq!(names, vec!["good"]);
        assert_eq!(students.len(), 3);
    }
}
