//! Line protocol with the external selector.
//!
//! Candidates are written to the selector's stdin, one per line, and stdin
//! is closed to mark the end of the list. The selector's output is read in
//! full and its first non-blank line, trimmed, becomes the [`Choice`].

use std::fmt::{Display, Formatter};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// External interactive program that picks one line out of its input.
#[derive(Debug, Clone)]
pub struct Selector {
    program: String,
    args: Vec<String>,
}

impl Selector {
    pub fn new(program: &str, args: &[String]) -> Self {
        Self {
            program: program.to_string(),
            args: args.to_vec(),
        }
    }

    /// Runs the selector over `candidates` and waits for its answer.
    ///
    /// The selector's exit status is not checked: selectors commonly exit
    /// non-zero when the user cancels, which shows up as an empty choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector cannot be started or the pipes to
    /// it fail.
    pub fn select(&self, candidates: &[String]) -> Result<Choice> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| Error::launch_error(&self.program, e))?;

        if let Some(stdin) = child.stdin.take() {
            write_candidates(stdin, candidates)?;
        }

        let mut output = Vec::new();
        if let Some(mut stdout) = child.stdout.take() {
            stdout.read_to_end(&mut output)?;
        }

        let status = child.wait()?;
        debug!("selector `{}` exited with {}", self.program, status);

        Ok(Choice::new(&String::from_utf8_lossy(&output)))
    }
}

/// Writes one candidate per line and closes the writer.
///
/// A reader that goes away early ends the list without an error.
///
/// # Errors
///
/// Returns an error for write failures other than a broken pipe.
pub fn write_candidates<W: Write>(writer: W, candidates: &[String]) -> Result<()> {
    let mut writer = BufWriter::new(writer);

    let written = candidates
        .iter()
        .try_for_each(|candidate| writeln!(writer, "{candidate}"))
        .and_then(|()| writer.flush());

    match written {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("selector stopped reading candidates early");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Line returned by the selector, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice(String);

impl Choice {
    /// Keeps the first non-blank line of `raw`. Selectors that allow
    /// picking several lines print one per line; the rest are dropped.
    pub fn new(raw: &str) -> Self {
        let line = raw
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default();
        Self(line.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty choice means the user dismissed the selector.
    pub fn is_cancelled(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the choice into a program and its arguments using shell
    /// quoting rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the quoting is unbalanced or the choice holds no
    /// words at all.
    pub fn split(&self) -> Result<(String, Vec<String>)> {
        let mut words = shell_words::split(&self.0).map_err(|original| Error::ShellSplit {
            choice: self.0.clone(),
            original,
        })?;

        if words.first().map_or(true, String::is_empty) {
            return Err(Error::EmptyCommand(self.0.clone()));
        }

        let program = words.remove(0);
        Ok((program, words))
    }
}

impl Display for Choice {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that accepts a fixed number of lines, then reports a broken pipe.
    struct ClosingWriter {
        accepted: Vec<u8>,
        capacity: usize,
    }

    impl Write for ClosingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.accepted.len() + buf.len() > self.capacity {
                return Err(std::io::Error::from(ErrorKind::BrokenPipe));
            }
            self.accepted.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_write_candidates_one_per_line() {
        let mut buffer = Vec::new();
        write_candidates(&mut buffer, &strings(&["!edit-history", "cat", "ls"])).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "!edit-history\ncat\nls\n");
    }

    #[test]
    fn test_write_candidates_tolerates_broken_pipe() {
        let mut writer = ClosingWriter {
            accepted: Vec::new(),
            capacity: 0,
        };
        assert!(write_candidates(&mut writer, &strings(&["a", "b"])).is_ok());
    }

    #[test]
    fn test_choice_is_trimmed() {
        let choice = Choice::new("  firefox --private-window \n");
        assert_eq!(choice.as_str(), "firefox --private-window");
        assert!(!choice.is_cancelled());
    }

    #[test]
    fn test_choice_keeps_first_non_blank_line() {
        let choice = Choice::new("\n  true  \nphantom\n");
        assert_eq!(choice.as_str(), "true");
    }

    #[test]
    fn test_blank_choice_is_cancelled() {
        assert!(Choice::new("").is_cancelled());
        assert!(Choice::new(" \n\t").is_cancelled());
    }

    #[test]
    fn test_split_with_quotes() {
        let choice = Choice::new(r#"notify-send "hello world" 'it''s' plain"#);
        let (program, args) = choice.split().unwrap();

        assert_eq!(program, "notify-send");
        assert_eq!(args, strings(&["hello world", "its", "plain"]));
    }

    #[test]
    fn test_split_unbalanced_quotes() {
        let result = Choice::new("echo \"unterminated").split();
        assert!(matches!(result, Err(Error::ShellSplit { .. })));
    }

    #[test]
    fn test_split_without_words() {
        let result = Choice::new("''").split();
        assert!(matches!(result, Err(Error::EmptyCommand(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_select_reads_first_line_from_selector() {
        let selector = Selector::new("head", &strings(&["-n", "1"]));
        let choice = selector.select(&strings(&["vim", "cat", "ls"])).unwrap();
        assert_eq!(choice.as_str(), "vim");
    }

    #[cfg(unix)]
    #[test]
    fn test_select_with_silent_selector_is_cancelled() {
        let selector = Selector::new("true", &[]);
        let choice = selector.select(&strings(&["vim"])).unwrap();
        assert!(choice.is_cancelled());
    }

    #[cfg(unix)]
    #[test]
    fn test_select_with_multi_line_output_keeps_first_line() {
        let selector = Selector::new(
            "sh",
            &strings(&["-c", "cat >/dev/null; printf 'true\\nphantom\\n'"]),
        );
        let choice = selector.select(&strings(&["true", "vim"])).unwrap();
        assert_eq!(choice.as_str(), "true");
    }

    #[test]
    fn test_select_with_missing_selector() {
        let selector = Selector::new("dmenu-hist-no-such-selector", &[]);
        let result = selector.select(&strings(&["vim"]));
        assert!(matches!(result, Err(Error::Launch { .. })));
    }
}
