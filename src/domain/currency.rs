// Currency domain model
use super::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDescriptor {
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// Selector option text, see `display_label`
    #[serde(default)]
    pub label: String,
}

impl CurrencyDescriptor {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        let mut descriptor = Self {
            code: code.into(),
            name: name.into(),
            label: String::new(),
        };
        descriptor.label = descriptor.display_label();
        descriptor
    }

    /// "USD - 美元", or just the code when no name is known
    pub fn display_label(&self) -> String {
        if self.name.is_empty() {
            self.code.clone()
        } else {
            format!("{} - {}", self.code, self.name)
        }
    }

    /// Fill a missing name from the display-name table (keyed by upper-case code)
    pub fn with_fallback_name(self, names: &HashMap<String, String>) -> Self {
        let name = if self.name.is_empty() {
            names.get(&self.code.to_uppercase()).cloned().unwrap_or_default()
        } else {
            self.name
        };
        Self::new(self.code, name)
    }
}

/// Normalize a user-supplied currency code, rejecting blanks
pub fn require_currency(code: Option<&str>) -> DashboardResult<String> {
    match code.map(str::trim) {
        Some(code) if !code.is_empty() => Ok(code.to_uppercase()),
        _ => Err(DashboardError::Validation("please choose a currency".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        assert_eq!(CurrencyDescriptor::new("USD", "美元").display_label(), "USD - 美元");
        assert_eq!(CurrencyDescriptor::new("JPY", "").display_label(), "JPY");
    }

    #[test]
    fn test_label_is_serialized() {
        let json = serde_json::to_value(CurrencyDescriptor::new("USD", "美元")).unwrap();
        assert_eq!(json["label"], "USD - 美元");
    }

    #[test]
    fn test_fallback_name_only_fills_blanks() {
        let mut names = HashMap::new();
        names.insert("EUR".to_string(), "欧元".to_string());

        let filled = CurrencyDescriptor::new("eur", "").with_fallback_name(&names);
        assert_eq!(filled.name, "欧元");
        assert_eq!(filled.label, "eur - 欧元");

        let kept = CurrencyDescriptor::new("EUR", "Euro").with_fallback_name(&names);
        assert_eq!(kept.name, "Euro");

        let unknown = CurrencyDescriptor::new("THB", "").with_fallback_name(&names);
        assert_eq!(unknown.name, "");
    }

    #[test]
    fn test_require_currency() {
        assert_eq!(require_currency(Some(" usd ")).unwrap(), "USD");
        assert!(matches!(require_currency(Some("  ")), Err(DashboardError::Validation(_))));
        assert!(matches!(require_currency(None), Err(DashboardError::Validation(_))));
    }
}
