//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de entrada:
//! coerción de umbrales y el constructor de UPDATE parcial con columnas
//! de lista blanca.

use serde_json::Value;

use crate::utils::errors::{bad_request_error, AppError};

/// Coerciona un umbral de stock a entero.
///
/// Acepta números JSON y strings numéricos (`7`, `"7"`); cualquier otra
/// cosa es inválida. `None` cae al valor por defecto.
pub fn coerce_threshold(value: Option<&Value>, default: i32) -> Result<i32, AppError> {
    let value = match value {
        Some(v) => v,
        None => return Ok(default),
    };

    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| bad_request_error("Invalid threshold")),
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| bad_request_error("Invalid threshold")),
        Value::Null => Ok(default),
        _ => Err(bad_request_error("Invalid threshold")),
    }
}

/// Sentencia UPDATE parcial construida solo con columnas validadas.
///
/// El SQL interpola únicamente identificadores de la lista blanca que
/// recibe el constructor; los valores siempre viajan como parámetros
/// posicionales (`$1..$n`).
pub struct PartialUpdate {
    table: &'static str,
    key_column: &'static str,
    columns: Vec<&'static str>,
    values: Vec<String>,
}

impl PartialUpdate {
    pub fn new(table: &'static str, key_column: &'static str) -> Self {
        Self {
            table,
            key_column,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Agrega una columna solo si el payload trae valor para ella.
    pub fn set(&mut self, column: &'static str, value: Option<String>) -> &mut Self {
        if let Some(value) = value {
            self.columns.push(column);
            self.values.push(value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Construye el SQL y la lista de valores a bindear. El parámetro
    /// final corresponde a la clave primaria del WHERE.
    pub fn build(self) -> Option<(String, Vec<String>)> {
        if self.columns.is_empty() {
            return None;
        }

        let assignments: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 1))
            .collect();

        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ${}",
            self.table,
            assignments.join(", "),
            self.key_column,
            self.columns.len() + 1
        );

        Some((sql, self.values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_threshold_default_when_absent() {
        assert_eq!(coerce_threshold(None, 5).unwrap(), 5);
    }

    #[test]
    fn test_threshold_accepts_number() {
        assert_eq!(coerce_threshold(Some(&json!(12)), 5).unwrap(), 12);
    }

    #[test]
    fn test_threshold_accepts_numeric_string() {
        assert_eq!(coerce_threshold(Some(&json!("7")), 5).unwrap(), 7);
    }

    #[test]
    fn test_threshold_rejects_non_numeric_string() {
        assert!(coerce_threshold(Some(&json!("abc")), 5).is_err());
    }

    #[test]
    fn test_threshold_rejects_float() {
        assert!(coerce_threshold(Some(&json!(2.5)), 5).is_err());
    }

    #[test]
    fn test_partial_update_builds_only_provided_columns() {
        let mut update = PartialUpdate::new("customers", "id");
        update.set("name", Some("Alice".to_string()));
        update.set("phone", None);
        update.set("email", Some("a@b.com".to_string()));

        let (sql, values) = update.build().unwrap();
        assert_eq!(sql, "UPDATE customers SET name = $1, email = $2 WHERE id = $3");
        assert_eq!(values, vec!["Alice".to_string(), "a@b.com".to_string()]);
    }

    #[test]
    fn test_partial_update_empty_builds_nothing() {
        let mut update = PartialUpdate::new("customers", "id");
        update.set("name", None);
        assert!(update.is_empty());
        assert!(update.build().is_none());
    }
}
