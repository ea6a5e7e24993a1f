//! Construction options for ion-exchange surfaces.

/// Options for building an [`IonExchangeSurface`](crate::IonExchangeSurface).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ExchangeOptions {
    /// Exchanger-site symbol, e.g. `X` in `NaX`. Inferred from the species
    /// formulas when `None`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub exchanger_symbol: Option<String>,
}

impl ExchangeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exchanger_symbol(&self, symbol: impl Into<String>) -> Self {
        Self {
            exchanger_symbol: Some(symbol.into()),
        }
    }

    pub fn exchanger_symbol(&self) -> Option<&str> {
        self.exchanger_symbol.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_infers() {
        assert_eq!(ExchangeOptions::new().exchanger_symbol(), None);
        assert_eq!(
            ExchangeOptions::new().with_exchanger_symbol("Y").exchanger_symbol(),
            Some("Y")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_from_json() {
        let options: ExchangeOptions = serde_json::from_str(r#"{"exchanger_symbol":"X"}"#).unwrap();
        assert_eq!(options.exchanger_symbol(), Some("X"));

        let options: ExchangeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ExchangeOptions::default());
        assert_eq!(serde_json::to_string(&options).unwrap(), "{}");
    }
}
