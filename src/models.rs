//! Core data types for Gradebook.

use std::fmt;
use std::str::FromStr;

/// Maximum test grade a student is expected to receive.
pub const MAX_TEST_GRADE: f64 = 80.0;

/// Maximum assignment grade a student is expected to receive.
pub const MAX_ASSIGNMENT_GRADE: f64 = 20.0;

/// Number of buckets in the grade-range histogram.
pub const BUCKET_COUNT: usize = 10;

/// Width of every histogram bucket, in total-grade points.
pub const BUCKET_WIDTH: f64 = 10.0;

/// A single student record.
///
/// Grades are not range checked; `total_grade` is always derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub test_grade: f64,       // out of 80
    pub assignment_grade: f64, // out of 20
}

impl Student {
    pub fn new(name: impl Into<String>, id: i32, test_grade: f64, assignment_grade: f64) -> Self {
        Student {
            id,
            name: name.into(),
            test_grade,
            assignment_grade,
        }
    }

    /// Sum of test and assignment grades.
    pub fn total_grade(&self) -> f64 {
        self.test_grade + self.assignment_grade
    }
}

/// Menu option selected at the "awaiting choice" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    AddStudent,
    ShowStudent,
    ShowAll,
    ClassAverage,
    TopThree,
    GradeRanges,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddStudent,
        MenuChoice::ShowStudent,
        MenuChoice::ShowAll,
        MenuChoice::ClassAverage,
        MenuChoice::TopThree,
        MenuChoice::GradeRanges,
        MenuChoice::Exit,
    ];

    /// Convert from the number typed at the prompt (1-7)
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::AddStudent),
            2 => Some(MenuChoice::ShowStudent),
            3 => Some(MenuChoice::ShowAll),
            4 => Some(MenuChoice::ClassAverage),
            5 => Some(MenuChoice::TopThree),
            6 => Some(MenuChoice::GradeRanges),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Number shown next to the option in the menu
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::AddStudent => 1,
            MenuChoice::ShowStudent => 2,
            MenuChoice::ShowAll => 3,
            MenuChoice::ClassAverage => 4,
            MenuChoice::TopThree => 5,
            MenuChoice::GradeRanges => 6,
            MenuChoice::Exit => 7,
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "Add a student",
            MenuChoice::ShowStudent => "Show specific student info",
            MenuChoice::ShowAll => "Show all student info",
            MenuChoice::ClassAverage => "Show class average",
            MenuChoice::TopThree => "Show top 3 students",
            MenuChoice::GradeRanges => "Show grade ranges of total grades",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(MenuChoice::from_number)
            .ok_or_else(|| format!("Unknown menu choice: {}", s))
    }
}

/// One histogram bucket ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeRange {
    pub start: u32,
    /// Display end; the last bucket is labelled up to 100
    pub end: u32,
    pub count: usize,
}

/// Count of students per total-grade bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeHistogram {
    counts: [usize; BUCKET_COUNT],
    /// Totals whose bucket index fell outside 0..BUCKET_COUNT (>= 100, negative, NaN)
    dropped: usize,
}

impl GradeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket index for a total grade, `None` when it falls outside every bucket.
    ///
    /// A total of exactly 100 maps to index 10 and is therefore dropped.
    pub fn bucket_index(total: f64) -> Option<usize> {
        let index = (total / BUCKET_WIDTH).floor();
        if index.is_finite() && index >= 0.0 && index < BUCKET_COUNT as f64 {
            Some(index as usize)
        } else {
            None
        }
    }

    /// Count one total grade. Returns false when the total was dropped.
    pub fn record(&mut self, total: f64) -> bool {
        match Self::bucket_index(total) {
            Some(index) => {
                self.counts[index] += 1;
                true
            }
            None => {
                self.dropped += 1;
                false
            }
        }
    }

    pub fn count(&self, bucket: usize) -> usize {
        self.counts.get(bucket).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[usize; BUCKET_COUNT] {
        &self.counts
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of totals that landed in a bucket.
    pub fn counted(&self) -> usize {
        self.counts.iter().sum()
    }

    /// All buckets in ascending order, zero-count buckets included.
    pub fn ranges(&self) -> impl Iterator<Item = GradeRange> + '_ {
        self.counts.iter().enumerate().map(|(i, &count)| {
            let start = (i as u32) * BUCKET_WIDTH as u32;
            let end = if i == BUCKET_COUNT - 1 { 100 } else { start + 9 };
            GradeRange { start, end, count }
        })
    }
}
