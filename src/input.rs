//! Whitespace-delimited token reader over any buffered input.
//!
//! Tokens may share a line or be spread over several lines; a line is only
//! read once every token of the previous line has been consumed.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::InputError;

/// Value kinds the session asks for, with the wording used in error messages.
pub trait Expected {
    const EXPECTED: &'static str;

    /// Reject values that parse but are not usable (NaN, infinities).
    fn is_acceptable(&self) -> bool {
        true
    }
}

impl Expected for i32 {
    const EXPECTED: &'static str = "an integer";
}

impl Expected for f64 {
    const EXPECTED: &'static str = "a number";

    fn is_acceptable(&self) -> bool {
        self.is_finite()
    }
}

pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        TokenReader {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-delimited token, reading more lines as needed.
    pub fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Err(InputError::EndOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token parsed as `T`. A malformed token is consumed and reported.
    pub fn next_value<T>(&mut self) -> Result<T, InputError>
    where
        T: FromStr + Expected,
    {
        let token = self.next_token()?;
        match token.parse::<T>() {
            Ok(value) if value.is_acceptable() => Ok(value),
            _ => Err(InputError::Malformed {
                token,
                expected: T::EXPECTED,
            }),
        }
    }
}
