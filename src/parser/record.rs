use calamine::Data;

/// A raw cell from any of the source files
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Parse a delimited-text field. Whitespace-only fields are empty.
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    /// Convert a spreadsheet cell
    pub fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
            Data::String(s) => CellValue::from_field(s),
            other => CellValue::from_field(&other.to_string()),
        }
    }

    /// Numeric coercion: anything that is not a finite number becomes `None`
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Empty => return None,
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Year coercion: numeric values are truncated toward zero
    pub fn as_year(&self) -> Option<i32> {
        let value = self.as_number()?;
        if value < i32::MIN as f64 || value > i32::MAX as f64 {
            return None;
        }
        Some(value.trunc() as i32)
    }

    /// Text form of the cell, `None` when empty
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Some(format!("{}", *n as i64))
            }
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(s) => Some(s.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}
