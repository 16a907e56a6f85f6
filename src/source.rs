//! Loading sets from their sources.
//!
//! A source file holds one ID per line. Lines are read leniently, the way
//! `strtol` would: leading whitespace is skipped, an optional sign and the
//! leading digits are read and anything after them is ignored. Lines without
//! digits, and zeros, contribute nothing. A value outside `[1, max_id]` is an
//! error.

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use roaring::RoaringBitmap;
use tracing::{debug, trace};

use crate::config::Domain;
use crate::error::{FilesetsError, Result};
use crate::set::Set;

/// Anything able to materialize a file reference into a [`Set`].
pub trait SetSource {
    fn load(&self, path: &Path, domain: Domain) -> Result<Set>;
}

/// Reads sets from the file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl SetSource for FileSource {
    fn load(&self, path: &Path, domain: Domain) -> Result<Set> {
        let origin = path.display().to_string();
        let file = fs::File::open(path).map_err(|e| {
            FilesetsError::Resource(format!("can't open {} for reading: {}", origin, e))
        })?;
        let members = parse_ids(BufReader::new(file), domain, &origin)?;
        debug!(file = %origin, ids = members.len(), "loaded");
        Ok(Set::from_bitmap(domain, origin, members))
    }
}

/// Named in-memory contents, parsed with the same rules as files.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    contents: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn insert(&mut self, name: impl Into<PathBuf>, contents: impl Into<String>) {
        self.contents.insert(name.into(), contents.into());
    }
    pub fn with(mut self, name: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(name, contents);
        self
    }
    pub fn len(&self) -> usize {
        self.contents.len()
    }
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl SetSource for MemorySource {
    fn load(&self, path: &Path, domain: Domain) -> Result<Set> {
        let origin = path.display().to_string();
        let contents = self
            .contents
            .get(path)
            .ok_or_else(|| FilesetsError::Resource(format!("no source named {}", origin)))?;
        let members = parse_ids(contents.as_bytes(), domain, &origin)?;
        Ok(Set::from_bitmap(domain, origin, members))
    }
}

/// Parses newline separated IDs. `origin` names the input in errors.
pub fn parse_ids<R: BufRead>(reader: R, domain: Domain, origin: &str) -> Result<RoaringBitmap> {
    let mut members = RoaringBitmap::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| {
            FilesetsError::Resource(format!("error reading {}: {}", origin, e))
        })?;
        let number = index + 1;
        match leading_integer(&line) {
            LineValue::Missing | LineValue::Zero => {
                trace!(origin, line = number, "ignoring line without an ID");
            }
            LineValue::Positive(id) if id <= u64::from(domain.max_id()) => {
                members.insert(id as u32);
            }
            LineValue::Positive(_) | LineValue::Negative | LineValue::Overflow => {
                return Err(FilesetsError::ValueOutOfRange {
                    origin: origin.to_string(),
                    line: number,
                    value: String::from_utf8_lossy(&line).trim().to_string(),
                    max_id: domain.max_id(),
                });
            }
        }
    }
    Ok(members)
}

#[derive(Debug, PartialEq, Eq)]
enum LineValue {
    Missing,
    Zero,
    Positive(u64),
    Negative,
    Overflow,
}

fn leading_integer(line: &[u8]) -> LineValue {
    let mut rest = line.trim_ascii_start();
    let negative = match rest.first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return LineValue::Missing;
    }
    let mut value: u64 = 0;
    for &b in &rest[..digits] {
        value = match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
        {
            Some(v) => v,
            None => return LineValue::Overflow,
        };
    }
    match (value, negative) {
        (0, _) => LineValue::Zero,
        (_, true) => LineValue::Negative,
        (v, false) => LineValue::Positive(v),
    }
}
