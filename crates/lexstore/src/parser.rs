//! TOON table parser using nom
//!
//! Store file format:
//! ```text
//! entries[2]{word,partOfSpeech,definition,example}:
//!   apple,noun,A round fruit.,"An apple a day, keeps the doctor away."
//!   run,verb,To move swiftly on foot.,
//! ```
//!
//! The header names the table, declares the row count and lists the
//! columns. Rows are indented and comma separated. Fields containing commas
//! or quotes are double-quoted, with `\"`, `\\` and `\n` escapes.

use nom::{
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_while, take_while1},
    character::complete::{char, digit1, space0, space1},
    combinator::{all_consuming, cut, map, map_res, opt, value},
    multi::separated_list1,
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};

use crate::entry::Entry;
use crate::error::{Error, Result};

/// TOON table header
#[derive(Debug, Clone, PartialEq)]
pub struct TableHeader {
    /// Table name
    pub name: String,
    /// Declared number of rows
    pub row_count: usize,
    /// Column names in row order
    pub fields: Vec<String>,
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

/// Parse a table header line, e.g. `entries[3]{word,partOfSpeech,definition}:`
pub fn parse_header(input: &str) -> IResult<&str, TableHeader> {
    map(
        tuple((
            identifier,
            delimited(char('['), map_res(digit1, |s: &str| s.parse::<usize>()), char(']')),
            delimited(
                char('{'),
                separated_list1(char(','), delimited(space0, identifier, space0)),
                char('}'),
            ),
            preceded(space0, char(':')),
        )),
        |(name, row_count, fields, _)| TableHeader {
            name: name.to_string(),
            row_count,
            fields: fields.into_iter().map(str::to_string).collect(),
        },
    )(input)
}

/// Body of a quoted field, after the opening quote
fn quoted_body(input: &str) -> IResult<&str, String> {
    terminated(
        map(
            opt(escaped_transform(
                is_not("\\\""),
                '\\',
                alt((
                    value("\\", tag("\\")),
                    value("\"", tag("\"")),
                    value("\n", tag("n")),
                )),
            )),
            Option::unwrap_or_default,
        ),
        char('"'),
    )(input)
}

fn bare_field(input: &str) -> IResult<&str, String> {
    map(take_while(|c: char| c != ','), |s: &str| s.trim().to_string())(input)
}

/// A field opening with `"` must close as a quoted field
fn field(input: &str) -> IResult<&str, String> {
    preceded(
        space0,
        alt((
            preceded(char('"'), cut(terminated(quoted_body, space0))),
            bare_field,
        )),
    )(input)
}

/// Parse one indented row into its fields
pub fn parse_row(input: &str) -> IResult<&str, Vec<String>> {
    preceded(space1, separated_list1(char(','), field))(input)
}

/// Parse a whole TOON table into entries
///
/// Rows are returned as entries even when blank fields make them
/// ill-formed; the store decides what to keep.
pub fn parse_entries(input: &str) -> Result<Vec<Entry>> {
    let mut lines = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines
        .next()
        .ok_or_else(|| Error::Parse("Missing table header".to_string()))?;
    let (_, header) = all_consuming(parse_header)(header_line.trim_end())?;

    let columns = Columns::locate(&header.fields)?;

    let mut entries = Vec::with_capacity(header.row_count);
    for (idx, line) in lines {
        let (_, fields) = all_consuming(parse_row)(line.trim_end())
            .map_err(|e| Error::Parse(format!("line {}: {:?}", idx + 1, e)))?;

        if fields.len() != header.fields.len() {
            return Err(Error::Parse(format!(
                "line {}: expected {} fields, found {}",
                idx + 1,
                header.fields.len(),
                fields.len()
            )));
        }

        entries.push(columns.entry(fields));
    }

    if entries.len() != header.row_count {
        return Err(Error::Parse(format!(
            "Header declares {} rows, found {}",
            header.row_count,
            entries.len()
        )));
    }

    Ok(entries)
}

/// Column positions of the entry fields within a row
struct Columns {
    word: usize,
    part_of_speech: usize,
    definition: usize,
    example: Option<usize>,
}

impl Columns {
    fn locate(fields: &[String]) -> Result<Self> {
        let position = |names: &[&str]| fields.iter().position(|f| names.contains(&f.as_str()));
        let required = |names: &[&str]| {
            position(names).ok_or_else(|| Error::Parse(format!("Missing column: {}", names[0])))
        };

        Ok(Self {
            word: required(&["word"])?,
            part_of_speech: required(&["partOfSpeech", "part_of_speech"])?,
            definition: required(&["definition"])?,
            example: position(&["example"]),
        })
    }

    fn entry(&self, mut fields: Vec<String>) -> Entry {
        let example = self.example.map(|idx| std::mem::take(&mut fields[idx]));

        Entry::new(
            std::mem::take(&mut fields[self.word]),
            std::mem::take(&mut fields[self.part_of_speech]),
            std::mem::take(&mut fields[self.definition]),
            example,
        )
    }
}
