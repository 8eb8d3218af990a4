//! Template manifest definitions.
//!
//! A manifest sits next to its template content file and declares where the
//! rendered file goes and which parameters to ask for.
//!
//! ```json
//! { "out": "src/{{ .name }}.rs", "params": ["name"] }
//! ```

use serde::{Deserialize, Serialize};

/// Contract for a single template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Output path pattern, rendered with the same placeholders as content.
    #[serde(default)]
    pub out: String,

    /// Parameter names, in prompt order.
    #[serde(default)]
    pub params: Vec<String>,
}

impl Manifest {
    /// Decode a manifest from JSON text. Unknown fields are ignored.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Check the manifest contract.
    ///
    /// # Errors
    ///
    /// Returns a message describing the violation when `out` is empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.out.is_empty() {
            return Err("out path must be defined for template".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let manifest =
            Manifest::from_json(r#"{"out": "out/{{ .who }}.txt", "params": ["who", "when"]}"#)
                .unwrap();
        assert_eq!(manifest.out, "out/{{ .who }}.txt");
        assert_eq!(manifest.params, vec!["who", "when"]);
    }

    #[test]
    fn missing_params_is_empty() {
        let manifest = Manifest::from_json(r#"{"out": "a.txt"}"#).unwrap();
        assert!(manifest.params.is_empty());
        manifest.validate().unwrap();
    }

    #[test]
    fn unknown_fields_ignored() {
        let manifest =
            Manifest::from_json(r#"{"out": "a.txt", "description": "x", "version": 2}"#).unwrap();
        assert_eq!(manifest.out, "a.txt");
    }

    #[test]
    fn params_keep_order_and_duplicates() {
        let manifest = Manifest::from_json(r#"{"out": "a", "params": ["z", "a", "z"]}"#).unwrap();
        assert_eq!(manifest.params, vec!["z", "a", "z"]);
    }

    #[test]
    fn empty_out_fails_validation() {
        for params in [vec![], vec!["a".to_string()]] {
            let manifest = Manifest {
                out: String::new(),
                params,
            };
            assert!(manifest.validate().is_err());
        }
    }

    #[test]
    fn missing_out_fails_validation() {
        let manifest = Manifest::from_json(r#"{"params": ["a"]}"#).unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn wrong_field_type_is_parse_error() {
        assert!(Manifest::from_json(r#"{"out": 3}"#).is_err());
        assert!(Manifest::from_json(r#"{"out": "a", "params": "b"}"#).is_err());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(Manifest::from_json("{out: ").is_err());
    }
}
