//! In-memory student roster.
//!
//! The roster is an ordered `Vec<Student>`: insertion order is preserved and
//! lookups are linear scans. Records are never edited or removed once added.

use std::cmp::Ordering;

use crate::error::RosterError;
use crate::models::{GradeHistogram, Student};

/// Number of students shown by the top-students report.
pub const TOP_STUDENTS: usize = 3;

/// Ordered collection of every student recorded in the session.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// First student with the given id.
    pub fn find(&self, id: i32) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    /// Like [`Roster::find`], but a missing id is an error.
    pub fn lookup(&self, id: i32) -> Result<&Student, RosterError> {
        self.find(id).ok_or(RosterError::NotFound(id))
    }

    pub fn contains(&self, id: i32) -> bool {
        self.find(id).is_some()
    }

    /// Check that `id` can be used for a new student.
    pub fn validate_new_id(&self, id: i32) -> Result<(), RosterError> {
        if self.contains(id) {
            return Err(RosterError::DuplicateId(id));
        }
        Ok(())
    }

    /// Append a student. A duplicate id is rejected and nothing is inserted.
    pub fn add(&mut self, student: Student) -> Result<(), RosterError> {
        self.validate_new_id(student.id)?;
        log::info!(
            "Added student {} ({}) with total {:.2}",
            student.id,
            student.name,
            student.total_grade()
        );
        self.students.push(student);
        Ok(())
    }

    /// Mean total grade, or 0.0 for an empty roster.
    pub fn class_average(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.students.iter().map(Student::total_grade).sum();
        sum / self.students.len() as f64
    }

    /// Students ordered by total grade, highest first.
    ///
    /// The sort is stable: equal totals keep their insertion order.
    pub fn ranked(&self) -> Vec<&Student> {
        let mut ranked: Vec<&Student> = self.students.iter().collect();
        // partial_cmp keeps -0.0 and 0.0 equal; NaN totals never reach the roster.
        ranked.sort_by(|a, b| {
            b.total_grade()
                .partial_cmp(&a.total_grade())
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }

    /// The first `min(3, len)` students of [`Roster::ranked`].
    pub fn top_three(&self) -> Vec<&Student> {
        let mut ranked = self.ranked();
        ranked.truncate(TOP_STUDENTS);
        ranked
    }

    /// Bucket every total grade into the ten fixed ranges.
    ///
    /// Totals of 100 or more have no bucket and are left out of every count.
    pub fn grade_ranges(&self) -> GradeHistogram {
        let mut histogram = GradeHistogram::new();
        for student in &self.students {
            if !histogram.record(student.total_grade()) {
                log::debug!(
                    "Student {} total {:.2} falls outside every grade range",
                    student.id,
                    student.total_grade()
                );
            }
        }
        if histogram.dropped() > 0 {
            log::warn!(
                "{} total grade(s) outside 0-99.99 left out of grade ranges",
                histogram.dropped()
            );
        }
        histogram
    }
}
