//! Terminal rendering of roster reports.
//!
//! Every grade is printed with exactly two decimals. Table columns are
//! right-aligned: ID is 5 wide, every other column 15.

use std::io::{self, Write};

use crate::models::{GradeHistogram, Student};

const RULE: &str = "------------------------------------------------------------------";

/// Render a grade with two decimals.
pub fn format_grade(value: f64) -> String {
    format!("{:.2}", value)
}

/// Details of one student, or a not-found line when `student` is `None`.
pub fn write_student<W: Write>(out: &mut W, id: i32, student: Option<&Student>) -> io::Result<()> {
    match student {
        Some(student) => {
            writeln!(out, "Student ID: {}, Name: {}", student.id, student.name)?;
            writeln!(out, "Test Grade: {}", format_grade(student.test_grade))?;
            writeln!(out, "Assignment Grade: {}", format_grade(student.assignment_grade))?;
            writeln!(out, "Total Grade: {}", format_grade(student.total_grade()))
        }
        None => writeln!(out, "Student with ID {} not found.", id),
    }
}

// Every column after ID is 15 wide, "Total Grade" included.
fn write_table_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:>5}{:>15}{:>15}{:>15}{:>15}",
        "ID", "Name", "Test Grade", "Assignment Grade", "Total Grade"
    )?;
    writeln!(out, "{}", RULE)
}

fn write_table_row<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    writeln!(
        out,
        "{:>5}{:>15}{:>15}{:>15}{:>15}",
        student.id,
        student.name,
        format_grade(student.test_grade),
        format_grade(student.assignment_grade),
        format_grade(student.total_grade())
    )
}

/// Titled table of students in the order given.
pub fn write_table<'a, W, I>(out: &mut W, title: &str, students: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Student>,
{
    writeln!(out, "{}", title)?;
    write_table_header(out)?;
    for student in students {
        write_table_row(out, student)?;
    }
    Ok(())
}

pub fn write_all_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    write_table(out, "All Students:", students)
}

pub fn write_top_students<W: Write>(out: &mut W, top: &[&Student]) -> io::Result<()> {
    write_table(out, "Top 3 Students:", top.iter().copied())
}

pub fn write_class_average<W: Write>(out: &mut W, average: f64) -> io::Result<()> {
    writeln!(out, "Class Average of Total Grades: {}", format_grade(average))
}

pub fn write_grade_ranges<W: Write>(out: &mut W, histogram: &GradeHistogram) -> io::Result<()> {
    writeln!(out, "Total Grade Ranges:")?;
    for range in histogram.ranges() {
        writeln!(out, "{:>5}-{:>5}: {} students", range.start, range.end, range.count)?;
    }
    Ok(())
}
