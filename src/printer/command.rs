//! # Buffered Commands
//!
//! A [`Cmd`] is one entry in the printer's command buffer: a label and the
//! arguments it was built from, for inspection, plus the wire bytes. Only
//! `data` is ever serialized to the printer.

use std::fmt;

use serde::Serialize;

/// A loggable argument value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Arg {
    Str(String),
    Bool(bool),
    Byte(u8),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => write!(f, "{s:?}"),
            Arg::Bool(b) => write!(f, "{b}"),
            Arg::Byte(n) => write!(f, "0x{n:02X}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<u8> for Arg {
    fn from(n: u8) -> Self {
        Arg::Byte(n)
    }
}

/// One encoded command in the buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cmd {
    /// Debug label, e.g. `"SetAlign"`
    pub name: &'static str,
    /// Arguments the command was built from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<Arg>>,
    /// Wire bytes
    pub data: Vec<u8>,
}

impl Cmd {
    pub fn new(name: &'static str, data: Vec<u8>) -> Self {
        Self {
            name,
            args: None,
            data,
        }
    }

    pub fn with_args(name: &'static str, args: Vec<Arg>, data: Vec<u8>) -> Self {
        Self {
            name,
            args: Some(args),
            data,
        }
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().flatten().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}
