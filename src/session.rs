//! Interactive menu loop.
//!
//! A [`Session`] owns the roster for one run and talks to any `BufRead`
//! input and `Write` output, so the binary drives it with stdin/stdout and
//! tests drive it with in-memory buffers.
//!
//! The loop has a single "awaiting choice" state: the menu is printed, one
//! choice is read and dispatched, and the state is re-entered until the exit
//! choice is made or the input runs out.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{AppError, InputError};
use crate::input::{Expected, TokenReader};
use crate::models::{MenuChoice, Student, MAX_ASSIGNMENT_GRADE, MAX_TEST_GRADE};
use crate::report;
use crate::roster::Roster;

/// What the loop does after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    roster: Roster,
    input: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Session over an empty roster.
    pub fn new(input: R, out: W) -> Self {
        Self::with_roster(Roster::new(), input, out)
    }

    pub fn with_roster(roster: Roster, input: R, out: W) -> Self {
        Session {
            roster,
            input: TokenReader::new(input),
            out,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Hand back the roster and the output stream.
    pub fn into_parts(self) -> (Roster, W) {
        (self.roster, self.out)
    }

    /// Run the menu loop until the exit choice or the end of input.
    pub fn run(&mut self) -> Result<(), AppError> {
        log::info!("Session started");
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(AppError::Input(InputError::EndOfInput)) => {
                    log::info!("Input closed, ending session");
                    self.write_exit()?;
                    break;
                }
                Err(e) => {
                    log::error!("Session aborted: {}", e);
                    return Err(e);
                }
            }
        }
        self.out.flush()?;
        log::info!("Session ended with {} student(s)", self.roster.len());
        Ok(())
    }

    /// Print the menu, read one choice and act on it.
    pub fn step(&mut self) -> Result<Flow, AppError> {
        self.write_menu()?;
        let token = self.input.next_token()?;

        match token.parse::<MenuChoice>() {
            Ok(choice) => self.dispatch(choice),
            Err(e) => {
                log::warn!("{}", e);
                writeln!(self.out, "Invalid choice. Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Perform one menu operation.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, AppError> {
        log::debug!("Menu choice: {}", choice);
        match choice {
            MenuChoice::AddStudent => self.add_student()?,
            MenuChoice::ShowStudent => {
                let id = self.prompt_value::<i32>("Enter student ID: ")?;
                self.show_student(id)?;
            }
            MenuChoice::ShowAll => {
                report::write_all_students(&mut self.out, self.roster.students())?;
            }
            MenuChoice::ClassAverage => {
                report::write_class_average(&mut self.out, self.roster.class_average())?;
            }
            MenuChoice::TopThree => {
                let top = self.roster.top_three();
                report::write_top_students(&mut self.out, &top)?;
            }
            MenuChoice::GradeRanges => {
                let histogram = self.roster.grade_ranges();
                report::write_grade_ranges(&mut self.out, &histogram)?;
            }
            MenuChoice::Exit => {
                self.write_exit()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn add_student(&mut self) -> Result<(), AppError> {
        self.prompt("Enter student name: ")?;
        let name = self.input.next_token()?;

        let id = self.prompt_unique_id()?;

        let test_grade = self.prompt_value::<f64>(&format!(
            "Enter test grade (out of {}) for {}: ",
            MAX_TEST_GRADE, name
        ))?;
        let assignment_grade = self.prompt_value::<f64>(&format!(
            "Enter assignment grade (out of {}) for {}: ",
            MAX_ASSIGNMENT_GRADE, name
        ))?;

        self.roster
            .add(Student::new(name, id, test_grade, assignment_grade))?;
        Ok(())
    }

    /// Keep asking for an id until one not yet in the roster is given.
    fn prompt_unique_id(&mut self) -> Result<i32, AppError> {
        loop {
            let id = self.prompt_value::<i32>("Enter student ID (must be unique): ")?;
            match self.roster.validate_new_id(id) {
                Ok(()) => return Ok(id),
                Err(e) => {
                    log::warn!("Rejected student id: {}", e);
                    writeln!(
                        self.out,
                        "Error: Student with ID {} already exists. Please choose another ID.",
                        id
                    )?;
                }
            }
        }
    }

    fn show_student(&mut self, id: i32) -> Result<(), AppError> {
        let student = match self.roster.lookup(id) {
            Ok(student) => Some(student),
            Err(e) => {
                log::info!("Lookup failed: {}", e);
                None
            }
        };
        report::write_student(&mut self.out, id, student)?;
        Ok(())
    }

    /// Prompt until the next token parses as `T`.
    fn prompt_value<T>(&mut self, prompt: &str) -> Result<T, AppError>
    where
        T: FromStr + Expected,
    {
        loop {
            self.prompt(prompt)?;
            match self.input.next_value::<T>() {
                Ok(value) => return Ok(value),
                Err(e @ InputError::Malformed { .. }) => {
                    log::warn!("{}", e);
                    writeln!(self.out, "{}.", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.out)?;
        writeln!(self.out, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}", choice)?;
        }
        self.prompt("Enter your choice: ")
    }

    fn write_exit(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "Exiting program.")?;
        Ok(())
    }
}
