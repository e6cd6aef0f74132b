use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PasError {
    // File and I/O errors
    FileReadError(String),
    IoError(io::Error),

    // Lexical analysis errors
    UnknownToken {
        token: char,
        line: usize,
    },
    UnterminatedComment {
        line: usize,
    },
    InvalidNumber {
        number: String,
        line: usize,
    },

    // Parsing errors
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
    },
    UnexpectedToken {
        token: String,
        line: usize,
    },

    // Identifier search patterns
    InvalidPattern(regex::Error),

    // Compilation pipeline errors
    CompilationError {
        stage: String,
        message: String,
    },
}

impl PasError {
    /// Create a syntax error
    pub fn syntax_error(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: usize,
    ) -> Self {
        PasError::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    /// Create a compilation error for a specific stage
    pub fn compilation_error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        PasError::CompilationError {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            PasError::UnknownToken { line, .. }
            | PasError::UnterminatedComment { line }
            | PasError::InvalidNumber { line, .. }
            | PasError::SyntaxError { line, .. }
            | PasError::UnexpectedToken { line, .. } => Some(*line),
            PasError::FileReadError(_)
            | PasError::IoError(_)
            | PasError::InvalidPattern(_)
            | PasError::CompilationError { .. } => None,
        }
    }
}

impl fmt::Display for PasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasError::FileReadError(msg) => write!(f, "File read error: {}", msg),
            PasError::IoError(err) => write!(f, "I/O error: {}", err),

            PasError::UnknownToken { token, line } => {
                write!(f, "Unknown token '{}' at line {}", token, line)
            }
            PasError::UnterminatedComment { line } => {
                write!(f, "Unterminated comment at line {}", line)
            }
            PasError::InvalidNumber { number, line } => {
                write!(f, "Invalid number '{}' at line {}", number, line)
            }

            PasError::SyntaxError { expected, found, line } => {
                write!(
                    f,
                    "Syntax error at line {}: expected '{}', found '{}'",
                    line, expected, found
                )
            }
            PasError::UnexpectedToken { token, line } => {
                write!(f, "Unexpected token '{}' at line {}", token, line)
            }

            PasError::InvalidPattern(err) => write!(f, "Invalid identifier pattern: {}", err),

            PasError::CompilationError { stage, message } => {
                write!(f, "Compilation error in {}: {}", stage, message)
            }

        }
    }
}

impl std::error::Error for PasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PasError::IoError(err) => Some(err),
            PasError::InvalidPattern(err) => Some(err),
            _ => None,
        }
    }
}

// Conversion implementations for common error types
impl From<io::Error> for PasError {
    fn from(err: io::Error) -> Self {
        PasError::IoError(err)
    }
}

impl From<regex::Error> for PasError {
    fn from(err: regex::Error) -> Self {
        PasError::InvalidPattern(err)
    }
}

// Type alias for Result with PasError
pub type PasResult<T> = Result<T, PasError>;
