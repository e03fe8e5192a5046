use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Tabular response used by both report endpoints
///
/// `rows[i][j]` is the value of `columns[j]` in row `i`. Values are left
/// untyped on the wire (string, number, null or bool).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularDataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl TabularDataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value of `column` in `row` (None when the column or cell is missing)
    pub fn cell<'a>(&self, row: &'a [Value], column: &str) -> Option<&'a Value> {
        self.column_index(column).and_then(|idx| row.get(idx))
    }

    /// Cell rendered as text, see [`cell_text`]
    pub fn cell_text(&self, row: &[Value], column: &str) -> String {
        self.cell(row, column).map(cell_text).unwrap_or_default()
    }

    /// Same columns, only the rows matching `keep`
    pub fn retain_rows<F>(&self, mut keep: F) -> TabularDataset
    where
        F: FnMut(&[Value]) -> bool,
    {
        TabularDataset {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| keep(row.as_slice()))
                .cloned()
                .collect(),
        }
    }

    /// Sorted distinct non-empty texts of a column (multiselect options)
    pub fn distinct_values(&self, column: &str) -> Vec<String> {
        let Some(idx) = self.column_index(column) else {
            return Vec::new();
        };
        let values: BTreeSet<String> = self
            .rows
            .iter()
            .filter_map(|row| row.get(idx))
            .map(cell_text)
            .filter(|text| !text.trim().is_empty())
            .collect();
        values.into_iter().collect()
    }
}

/// Display text of a cell: strings as is, numbers and bools via `to_string`,
/// null as empty string
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Whether a cell means "yes" for one of the boolean toggles
pub fn is_affirmative(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "yes" | "y" | "true" | "1"
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> TabularDataset {
        TabularDataset::new(
            vec!["APPL_SYS_ID".into(), "LGL_HLD_STS".into()],
            vec![
                vec![json!("14775"), json!("No")],
                vec![json!(20553), json!("Yes")],
                vec![json!(null), json!(null)],
            ],
        )
    }

    #[test]
    fn test_cell_lookup() {
        let data = sample();
        assert_eq!(data.cell_text(&data.rows[0], "APPL_SYS_ID"), "14775");
        assert_eq!(data.cell_text(&data.rows[1], "APPL_SYS_ID"), "20553");
        assert_eq!(data.cell_text(&data.rows[2], "APPL_SYS_ID"), "");
        assert!(data.cell(&data.rows[0], "MISSING").is_none());
    }

    #[test]
    fn test_short_row_has_no_cell() {
        let data = sample();
        let short = vec![json!("1")];
        assert!(data.cell(&short, "LGL_HLD_STS").is_none());
    }

    #[test]
    fn test_distinct_values_sorted_without_blanks() {
        let data = sample();
        assert_eq!(data.distinct_values("APPL_SYS_ID"), vec!["14775", "20553"]);
        assert!(data.distinct_values("MISSING").is_empty());
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative(&json!("Yes")));
        assert!(is_affirmative(&json!(" y ")));
        assert!(is_affirmative(&json!("TRUE")));
        assert!(is_affirmative(&json!(true)));
        assert!(is_affirmative(&json!(1)));
        assert!(!is_affirmative(&json!("No")));
        assert!(!is_affirmative(&json!(0)));
        assert!(!is_affirmative(&json!(null)));
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let raw = r#"{"columns":["A","B"],"rows":[["x",null],[1,"y"]]}"#;
        let data: TabularDataset = serde_json::from_str(raw).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.cell_text(&data.rows[1], "A"), "1");
    }

    #[test]
    fn test_retain_rows_keeps_original() {
        let data = sample();
        let kept = data.retain_rows(|row| row[1] == json!("Yes"));
        assert_eq!(kept.len(), 1);
        assert_eq!(data.len(), 3);
        assert_eq!(kept.columns, data.columns);
    }
}
