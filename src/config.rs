//! Run configuration.
//!
//! A [`Domain`] fixes the ID range `[1, max_id]` every set is defined over. It
//! is created once per run and handed by value to everything that builds sets.
//!
//! [`Settings`] gathers the knobs of the `filesets` binary. They are layered
//! with the `config` crate: an optional `filesets.{json,toml,yaml}` file (or an
//! explicitly named one), then `FILESETS_*` environment variables. Command
//! line flags are applied on top with [`Settings::with_overrides`].

use std::fmt;
use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{FilesetsError, Result};
use crate::stack::DEFAULT_CAPACITY;

/// The ID domain `[1, max_id]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    max_id: u32,
}

impl Domain {
    pub fn new(max_id: u32) -> Result<Self> {
        if max_id == 0 {
            return Err(FilesetsError::Config(
                "max ID must be an integer greater than zero".into(),
            ));
        }
        Ok(Self { max_id })
    }
    pub fn max_id(&self) -> u32 {
        self.max_id
    }
    pub fn contains(&self, id: u32) -> bool {
        id >= 1 && id <= self.max_id
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[1, {}]", self.max_id)
    }
}

fn default_stack_capacity() -> usize {
    DEFAULT_CAPACITY
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub max_id: Option<u32>,
    #[serde(default)]
    pub shuffle: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_stack_capacity")]
    pub stack_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_id: None,
            shuffle: false,
            verbose: false,
            output: None,
            stack_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Settings {
    /// Reads settings from `file` when given (it must exist), otherwise from
    /// an optional `filesets.*` in the working directory, then overlays the
    /// `FILESETS_*` environment.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name("filesets").required(false),
        };
        let settings = Config::builder()
            .add_source(source)
            .add_source(Environment::with_prefix("FILESETS").try_parsing(true))
            .build()?;
        settings.try_deserialize::<Settings>()?.validated()
    }

    /// Applies command line flags. A given `max_id` or `output` replaces the
    /// loaded one; `shuffle` and `verbose` can only be switched on.
    pub fn with_overrides(
        mut self,
        max_id: Option<u32>,
        shuffle: bool,
        verbose: bool,
        output: Option<PathBuf>,
    ) -> Self {
        if max_id.is_some() {
            self.max_id = max_id;
        }
        if output.is_some() {
            self.output = output;
        }
        self.shuffle |= shuffle;
        self.verbose |= verbose;
        self
    }

    fn validated(self) -> Result<Self> {
        if self.stack_capacity == 0 {
            return Err(FilesetsError::Config(
                "stack capacity must be greater than zero".into(),
            ));
        }
        Ok(self)
    }

    pub fn domain(&self) -> Result<Domain> {
        match self.max_id {
            Some(max_id) => Domain::new(max_id),
            None => Err(FilesetsError::Config(
                "the max ID is required and must be a positive integer".into(),
            )),
        }
    }
}

/// Rewrites the single-dash `-max` flag of the classic command line to
/// `--max`. Arguments after `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut literal = false;
    args.into_iter()
        .map(|arg| {
            if literal {
                return arg;
            }
            if arg == "--" {
                literal = true;
                return arg;
            }
            match arg.strip_prefix("-max") {
                Some("") => "--max".to_string(),
                Some(rest) if rest.starts_with('=') => format!("--max{}", rest),
                _ => arg,
            }
        })
        .collect()
}
