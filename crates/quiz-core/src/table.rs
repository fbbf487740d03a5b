//! Multi-sheet document model.
//!
//! Every quiz file is a spreadsheet export: a JSON object whose plain keys
//! name sheets and whose `:`-prefixed keys carry metadata.
//!
//! ```text
//! {
//!   "questions": { "total": 2, "data": [ { "questions": "q1", ... }, ... ] },
//!   "q1":        { "total": 3, "data": [ { "options": "a", "next": "q2" }, ... ] },
//!   ":names":    [ "questions", "q1" ],
//!   ":type":     "multi-sheet"
//! }
//! ```
//!
//! Cells are normalized to strings. Absent cells read as `""` so validators
//! can stay total over partially authored sheets.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

/// One spreadsheet row: column name → cell text, in authored column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Cell text for `column`, or `""` when the column is absent.
    #[must_use]
    pub fn get(&self, column: &str) -> &str {
        self.try_get(column).unwrap_or("")
    }

    /// Cell text for `column`, distinguishing an absent column from an empty cell.
    #[must_use]
    pub fn try_get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Set a cell, replacing any existing value for the column.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column, value)),
        }
    }

    /// All cells in column order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        let cells = object
            .iter()
            .map(|(name, value)| (name.clone(), cell_text(value)))
            .collect();
        Self { cells }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        nested => nested.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// One sheet: its rows plus the declared `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Row count declared by the exporter. Falls back to `rows.len()`.
    pub total: usize,
    pub rows: Vec<Row>,
}

impl Table {
    /// Build a table whose `total` matches its row count.
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            total: rows.len(),
            rows,
        }
    }

    /// Column values in row order (absent cells read as `""`).
    #[must_use]
    pub fn column(&self, name: &str) -> Vec<&str> {
        self.rows.iter().map(|row| row.get(name)).collect()
    }

    fn from_value(sheet: &str, value: &Value) -> Result<Self, CoreError> {
        let Some(object) = value.as_object() else {
            return Err(CoreError::MalformedSheet {
                sheet: sheet.to_string(),
                reason: "sheet is not an object".to_string(),
            });
        };
        let data = match object.get("data") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(CoreError::MalformedSheet {
                    sheet: sheet.to_string(),
                    reason: "'data' is not an array".to_string(),
                });
            }
            None => {
                return Err(CoreError::MalformedSheet {
                    sheet: sheet.to_string(),
                    reason: "missing 'data' array".to_string(),
                });
            }
        };

        let rows: Vec<Row> = data
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let row = item.as_object().map(Row::from_object);
                if row.is_none() {
                    tracing::warn!(sheet, index, "skipping row that is not an object");
                }
                row
            })
            .collect();

        let total = object
            .get("total")
            .and_then(declared_total)
            .unwrap_or(rows.len());

        Ok(Self { total, rows })
    }
}

fn declared_total(value: &Value) -> Option<usize> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Table", 2)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("data", &self.rows)?;
        state.end()
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// Name given to the only sheet of a single-sheet export.
pub const SINGLE_SHEET_NAME: &str = "data";

/// A parsed multi-sheet export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sheets: Vec<(String, Table)>,
    names: Option<Vec<String>>,
}

impl Document {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sheets: Vec::new(),
            names: None,
        }
    }

    /// Parse a document from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the text is not JSON or not shaped like a sheet export.
    pub fn from_json_str(text: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(text)?;
        Self::try_from(value)
    }

    /// Add (or replace) a sheet, keeping first-insertion order.
    #[must_use]
    pub fn with_sheet(mut self, name: impl Into<String>, table: Table) -> Self {
        let name = name.into();
        match self.sheets.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = table,
            None => self.sheets.push((name, table)),
        }
        self
    }

    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Table> {
        self.sheets
            .iter()
            .find(|(sheet, _)| sheet == name)
            .map(|(_, table)| table)
    }

    /// Look up a sheet the caller cannot work without.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingSheet`] when the sheet is absent.
    pub fn require_sheet(&self, document: &str, name: &str) -> Result<&Table, CoreError> {
        self.sheet(name).ok_or_else(|| CoreError::MissingSheet {
            document: document.to_string(),
            sheet: name.to_string(),
        })
    }

    /// Rows of a sheet, or an empty slice when the sheet is absent.
    #[must_use]
    pub fn rows(&self, name: &str) -> &[Row] {
        self.sheet(name).map_or(&[][..], |table| table.rows.as_slice())
    }

    /// Sheets in document order.
    pub fn sheets(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.sheets.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// The `:names` metadata list, if the export carried one.
    #[must_use]
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }
}

impl TryFrom<Value> for Document {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(object) = value else {
            return Err(CoreError::NotAnObject {
                found: json_kind(&value),
            });
        };

        if matches!(object.get("data"), Some(Value::Array(_))) {
            let table = Table::from_value(SINGLE_SHEET_NAME, &Value::Object(object))?;
            return Ok(Self::new().with_sheet(SINGLE_SHEET_NAME, table));
        }

        let mut document = Self::new();
        for (key, value) in &object {
            if key == ":names" {
                document.names = Some(
                    value
                        .as_array()
                        .map(|items| items.iter().map(cell_text).collect())
                        .unwrap_or_default(),
                );
            } else if key.starts_with(':') {
                continue;
            } else if value.is_object() {
                match Table::from_value(key, value) {
                    Ok(table) => document.sheets.push((key.clone(), table)),
                    Err(err) => tracing::warn!(sheet = %key, %err, "skipping malformed sheet"),
                }
            }
        }
        Ok(document)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(self.names.is_some());
        let mut map = serializer.serialize_map(Some(self.sheets.len() + extra))?;
        for (name, table) in &self.sheets {
            map.serialize_entry(name, table)?;
        }
        if let Some(names) = &self.names {
            map.serialize_entry(":names", names)?;
        }
        map.end()
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
