//! Interactive prompt loop for `add`. Generic over reader/writer so it can be
//! driven from stdin or from a test buffer.

use crate::profile::Profile;
use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};

fn ask<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, label: &str) -> Result<String> {
    let mut line = String::new();
    loop {
        write!(writer, "{label}: ")?;
        writer.flush()?;
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(anyhow!("input closed while reading {label}"));
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if !answer.trim().is_empty() {
            return Ok(answer.to_string());
        }
        writeln!(writer, "{label} cannot be empty")?;
    }
}

/// Profile fields already known from the command line.
#[derive(Clone, Debug, Default)]
pub struct ProfileAnswers {
    pub name: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
    pub password: Option<String>,
}

fn answer_or_ask<R: BufRead, W: Write>(
    known: Option<String>,
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<String> {
    match known {
        Some(v) => Ok(v),
        None => ask(reader, writer, label),
    }
}

/// Ask only for the fields missing from `known`, re-asking on empty answers.
pub fn prompt_missing<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    known: ProfileAnswers,
) -> Result<Profile> {
    let name = answer_or_ask(known.name, reader, writer, "Profile name")?;
    let username = answer_or_ask(known.username, reader, writer, "Username")?;
    let url = answer_or_ask(known.url, reader, writer, "Host (DBC name)")?;
    let password = answer_or_ask(known.password, reader, writer, "Password")?;
    Profile::new(name, username, url, password)
}

/// Ask for name, username, url and password, re-asking on empty answers.
pub fn prompt_profile<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Profile> {
    prompt_missing(reader, writer, ProfileAnswers::default())
}
