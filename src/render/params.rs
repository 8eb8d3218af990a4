//! Parameter collection.
//!
//! A [`ParameterSet`] holds the values gathered for one render. Values come
//! from a [`ParameterSource`], one line per declared parameter, in the order
//! the manifest lists them.

use std::collections::VecDeque;
use std::io::{self, BufRead, ErrorKind, Write};

use crate::error::{PlateError, Result};

/// Name to value bindings for a single render, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`. Rebinding a name replaces its value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate bindings in the order they were first inserted.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// Line-oriented source of parameter values.
///
/// Each call yields exactly one line. `Ok(None)` signals end of input.
/// A final line with no terminating newline is an `UnexpectedEof` error.
pub trait ParameterSource {
    /// Ask for the next value, showing `prompt` if the source is interactive.
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads values from any buffered reader, writing prompts to a writer.
///
/// Used with stdin/stdout by the `new` command.
pub struct LineSource<R, W> {
    reader: R,
    prompts: W,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    pub fn new(reader: R, prompts: W) -> Self {
        Self { reader, prompts }
    }
}

impl LineSource<io::StdinLock<'static>, io::Stdout> {
    /// Source backed by the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ParameterSource for LineSource<R, W> {
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompts, "{}: ", prompt)?;
        self.prompts.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if !line.ends_with('\n') {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                "input ended before end of line",
            ));
        }
        line.pop();
        Ok(Some(line))
    }
}

/// Replays a fixed list of lines. Records every prompt it was asked.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts requested so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl ParameterSource for ScriptedSource {
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// Request one value per name, in order, from `source`.
///
/// Duplicate names are asked again; the last answer wins.
///
/// # Errors
///
/// Returns `ParameterRead` when the source fails or runs out of input.
pub fn collect_parameters<S>(names: &[String], source: &mut S) -> Result<ParameterSet>
where
    S: ParameterSource + ?Sized,
{
    let mut params = ParameterSet::new();

    for name in names {
        let value = source
            .next_line(name)
            .and_then(|line| {
                line.ok_or_else(|| io::Error::new(ErrorKind::UnexpectedEof, "input ended"))
            })
            .map_err(|source| PlateError::ParameterRead {
                name: name.clone(),
                source,
            })?;
        params.insert(name.as_str(), value);
    }

    tracing::debug!("params for template are {:?}", params);

    Ok(params)
}
