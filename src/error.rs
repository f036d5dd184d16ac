use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    /// The rendering surface or window could not be set up, fatal at
    /// startup
    GameError(GameError),
    /// Invalid construction parameters
    ConfigError(String),
}

#[must_use]
pub struct Error {
    error: ErrorType,
    /// Trace steps in reverse order
    trace: Vec<String>,
}

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self {
            error: ErrorType::GameError(e),
            trace: vec![],
        }
    }
}

impl Error {
    pub fn config<S: ToString>(msg: S) -> Self {
        Self {
            error: ErrorType::ConfigError(msg.to_string()),
            trace: vec![],
        }
    }

    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.trace.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.error)?;
        for t in self.trace.iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}
