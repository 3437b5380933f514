//! A single diagnostic line split into colon-delimited fields.

use serde::Serialize;

/// Field delimiter of the `path:line:column:message` convention
pub const DELIMITER: char = ':';

/// Minimum field count for a record to carry line, column and message
pub const MIN_FIELDS: usize = 4;

/// One diagnostic record: the ordered fields of a log line.
///
/// Field 0 is the file path. Well-formed records (at least [`MIN_FIELDS`]
/// fields) carry the line number in field 1, the column in field 2 and the
/// message in fields 3 onward. The message may itself contain delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Split a raw log line on [`DELIMITER`]. Never fails; an empty line
    /// becomes a single empty field.
    pub fn parse(line: &str) -> Self {
        Self {
            fields: line.split(DELIMITER).map(str::to_string).collect(),
        }
    }

    pub fn from_fields(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The grouping key (field 0)
    pub fn path(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    /// True when the record has line, column and message fields
    pub fn is_well_formed(&self) -> bool {
        self.fields.len() >= MIN_FIELDS
    }

    pub fn line(&self) -> Option<&str> {
        self.well_formed_field(1)
    }

    pub fn column(&self) -> Option<&str> {
        self.well_formed_field(2)
    }

    /// `(line, column)` of a well-formed record
    pub fn position(&self) -> Option<(&str, &str)> {
        Some((self.line()?, self.column()?))
    }

    /// Field 3 trimmed; `warning` or `error` for a diagnostic header line
    pub fn severity(&self) -> Option<&str> {
        self.well_formed_field(3).map(str::trim)
    }

    /// Fields 3 onward rejoined with the delimiter and trimmed
    pub fn message(&self) -> Option<String> {
        if !self.is_well_formed() {
            return None;
        }
        Some(self.fields[3..].join(":").trim().to_string())
    }

    /// Append `text` to the final field, separated by a single space
    pub fn append_to_last(&mut self, text: &str) {
        if let Some(last) = self.fields.last_mut() {
            last.push(' ');
            last.push_str(text);
        }
    }

    /// Rejoin the fields with the delimiter
    pub fn to_line(&self) -> String {
        self.fields.join(":")
    }

    fn well_formed_field(&self, index: usize) -> Option<&str> {
        if self.is_well_formed() {
            self.fields.get(index).map(String::as_str)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_line())
    }
}
