//! Export payloads built from the visible (filtered) dataset.
//!
//! Only the document contents live here; the browser side (blob download,
//! print window) is in the frontend `shared::export` module.

use super::columns::label_for;
use super::dto::{cell_text, TabularDataset};

/// Headers plus stringified rows, ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Headers use catalog labels where known
    pub fn from_dataset(dataset: &TabularDataset) -> Self {
        let headers = dataset
            .columns
            .iter()
            .map(|c| label_for(c).to_string())
            .collect();
        let width = dataset.columns.len();
        let rows = dataset
            .rows
            .iter()
            .map(|row| {
                (0..width)
                    .map(|idx| row.get(idx).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Semicolon separated CSV with a UTF-8 BOM so Excel picks the encoding
    pub fn to_csv(&self) -> String {
        let mut csv_content = String::new();
        csv_content.push('\u{FEFF}');

        let header_line: Vec<String> = self.headers.iter().map(|h| escape_csv_cell(h)).collect();
        csv_content.push_str(&header_line.join(";"));
        csv_content.push('\n');

        for row in &self.rows {
            let escaped_row: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
            csv_content.push_str(&escaped_row.join(";"));
            csv_content.push('\n');
        }

        csv_content
    }

    /// Standalone HTML document laid out for printing (landscape table).
    /// Opening it triggers the print dialog, where it can be saved as PDF.
    pub fn to_print_html(&self, title: &str, generated_at: &str) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        html.push_str(
            "<style>\n\
             @page { size: landscape; margin: 10mm; }\n\
             body { font-family: sans-serif; font-size: 9px; }\n\
             h1 { font-size: 14px; margin: 0 0 4px 0; }\n\
             .meta { color: #666; margin-bottom: 8px; }\n\
             table { border-collapse: collapse; width: 100%; }\n\
             th, td { border: 1px solid #999; padding: 2px 4px; text-align: left; vertical-align: top; }\n\
             th { background: #eee; }\n\
             thead { display: table-header-group; }\n\
             </style>\n",
        );
        html.push_str("</head>\n<body onload=\"window.print()\">\n");
        html.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
        html.push_str(&format!(
            "<div class=\"meta\">{} | {} rows</div>\n",
            escape_html(generated_at),
            self.rows.len()
        ));

        html.push_str("<table>\n<thead><tr>");
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr></thead>\n<tbody>\n");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
        html
    }
}

/// Quote a CSV cell if it contains the separator, quotes or line breaks
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
