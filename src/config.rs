use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Operator;

/// offer store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// whether newly created offers start active
    pub default_active: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_active: true,
        }
    }
}

/// client-side catalog: the operators and amount presets offered by the form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub operators: Vec<Operator>,
    pub amount_presets: Vec<Money>,
}

impl CatalogConfig {
    pub fn is_known_operator(&self, operator: &str) -> bool {
        self.operators.iter().any(|op| op == operator)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            operators: vec![
                "Airtel".to_string(),
                "Jio".to_string(),
                "Vi (Vodafone Idea)".to_string(),
                "BSNL".to_string(),
                "Aircel".to_string(),
                "Reliance".to_string(),
                "Tata Docomo".to_string(),
            ],
            amount_presets: [10, 20, 50, 100, 200, 500]
                .iter()
                .map(|&r| Money::from_rupees(r))
                .collect(),
        }
    }
}
