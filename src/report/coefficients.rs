//! Fitted-coefficient table and its text renderer.
//!
//! `print_coefficients` on the estimator trait renders the first rows of
//! this table for quick inspection of a fitted model.

use std::fmt;

/// One fitted coefficient: a named feature (or the intercept), the class
/// whose score it contributes to, and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientRow {
    pub name: String,
    pub class: i32,
    pub value: f64,
}

/// Coefficient table for a fitted model, intercept rows first.
#[derive(Debug, Clone, Default)]
pub struct CoefficientTable {
    pub rows: Vec<CoefficientRow>,
}

impl CoefficientTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the first `num_rows` rows as a bordered text table.
    pub fn render(&self, num_rows: usize) -> String {
        let shown = &self.rows[..self.rows.len().min(num_rows)];

        let mut name_w = "name".len();
        let mut class_w = "class".len();
        let mut value_w = "value".len();
        let cells: Vec<(String, String, String)> = shown
            .iter()
            .map(|r| {
                let cell = (r.name.clone(), r.class.to_string(), format!("{:.6}", r.value));
                name_w = name_w.max(cell.0.len());
                class_w = class_w.max(cell.1.len());
                value_w = value_w.max(cell.2.len());
                cell
            })
            .collect();

        let border = format!(
            "+-{}-+-{}-+-{}-+",
            "-".repeat(name_w),
            "-".repeat(class_w),
            "-".repeat(value_w)
        );

        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');
        out.push_str(&format!(
            "| {:<name_w$} | {:<class_w$} | {:<value_w$} |\n",
            "name", "class", "value"
        ));
        out.push_str(&border);
        out.push('\n');
        for (name, class, value) in &cells {
            out.push_str(&format!(
                "| {:<name_w$} | {:<class_w$} | {:<value_w$} |\n",
                name, class, value
            ));
        }
        out.push_str(&border);
        out.push('\n');
        out.push_str(&format!("[{} rows x 3 columns]", self.rows.len()));
        if shown.len() < self.rows.len() {
            out.push_str(&format!(", showing first {}", shown.len()));
        }
        out.push('\n');
        out
    }
}

impl fmt::Display for CoefficientTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(self.rows.len()))
    }
}
