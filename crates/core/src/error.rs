use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error communicating with sub process: {}", .0)]
    SubProcess(#[from] std::io::Error),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Could not scan search directory `{}`: {}", .path, .original)]
    DirectoryScan {
        path: String,
        original: std::io::Error,
    },

    #[error("Could not determine the {} directory for this user", .0)]
    NoDefaultDirectory(String),

    #[error("Malformed usage count in history line `{}`: {}", .line, .original)]
    MalformedCount {
        line: String,
        original: ParseIntError,
    },

    #[error("Could not find `{}` on the search path: {}", .program, .original)]
    ProgramNotFound {
        program: String,
        original: which::Error,
    },

    #[error("Could not split chosen command `{}`: {}", .choice, .original)]
    ShellSplit {
        choice: String,
        original: shell_words::ParseError,
    },

    #[error("Chosen command `{}` does not name a program", .0)]
    EmptyCommand(String),

    #[error("Invalid search path: {}", .0)]
    SearchPath(#[from] std::env::JoinPathsError),

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),

    #[error("Could not launch `{}`: {}", .program, .original)]
    Launch {
        program: String,
        original: std::io::Error,
    },
}

impl Error {
    pub fn io_error(
        file_description: &str,
        path: &std::path::Path,
        original: std::io::Error,
    ) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.display().to_string(),
            original,
        }
    }

    pub fn directory_scan(path: &std::path::Path, original: std::io::Error) -> Self {
        Self::DirectoryScan {
            path: path.display().to_string(),
            original,
        }
    }

    pub fn launch_error(program: impl std::fmt::Display, original: std::io::Error) -> Self {
        Self::Launch {
            program: program.to_string(),
            original,
        }
    }
}
