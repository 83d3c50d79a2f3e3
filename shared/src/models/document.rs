//! Document type tag and typed decoding
//!
//! A raw document is only trusted after its `type` tag has been checked
//! against the model it is decoded into.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::{Customer, Product, Receipt};

/// Value of the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Customer,
    Product,
    Receipt,
}

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Customer => "customer",
            Kind::Product => "product",
            Kind::Receipt => "receipt",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Kind::Customer),
            "product" => Ok(Kind::Product),
            "receipt" => Ok(Kind::Receipt),
            other => Err(DecodeError::UnknownKind(other.to_string())),
        }
    }
}

/// Document decoding errors
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("document has no type tag")]
    MissingTag,

    #[error("unknown document type: {0}")]
    UnknownKind(String),

    #[error("expected a {expected} document, found {found}")]
    Mismatch { expected: Kind, found: Kind },

    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Any document of the collection, keyed by its `type` tag
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Customer(Customer),
    Product(Product),
    Receipt(Receipt),
}

impl Document {
    /// Decode a raw document by dispatching on its `type` field
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let kind: Kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DecodeError::MissingTag)?
            .parse()?;

        Ok(match kind {
            Kind::Customer => Document::Customer(serde_json::from_value(value)?),
            Kind::Product => Document::Product(serde_json::from_value(value)?),
            Kind::Receipt => Document::Receipt(serde_json::from_value(value)?),
        })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Document::Customer(_) => Kind::Customer,
            Document::Product(_) => Kind::Product,
            Document::Receipt(_) => Kind::Receipt,
        }
    }
}

/// A model stored in the shared collection under a fixed kind tag
pub trait Entity: Serialize + DeserializeOwned + Sized {
    const KIND: Kind;

    /// Unwrap the matching variant, rejecting any other kind
    fn from_document(doc: Document) -> Result<Self, DecodeError>;

    /// Decode a raw document, checking its tag first
    fn decode(value: Value) -> Result<Self, DecodeError> {
        Self::from_document(Document::from_value(value)?)
    }
}

macro_rules! impl_entity {
    ($($model:ident),+ $(,)?) => {
        $(
            impl Entity for $model {
                const KIND: Kind = Kind::$model;

                fn from_document(doc: Document) -> Result<Self, DecodeError> {
                    match doc {
                        Document::$model(inner) => Ok(inner),
                        other => Err(DecodeError::Mismatch {
                            expected: Kind::$model,
                            found: other.kind(),
                        }),
                    }
                }
            }
        )+
    };
}

impl_entity!(Customer, Product, Receipt);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_by_type_tag() {
        let doc = Document::from_value(json!({
            "id": "p1",
            "type": "product",
            "name": "Pen",
            "price": 1.5
        }))
        .unwrap();
        assert_eq!(doc.kind(), Kind::Product);
    }

    #[test]
    fn rejects_kind_mismatch() {
        let err = Customer::decode(json!({
            "id": "p1",
            "type": "product",
            "name": "Pen",
            "price": 1.5
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Mismatch {
                expected: Kind::Customer,
                found: Kind::Product
            }
        ));
    }

    #[test]
    fn rejects_unknown_and_missing_tags() {
        assert!(matches!(
            Document::from_value(json!({ "type": "invoice" })),
            Err(DecodeError::UnknownKind(tag)) if tag == "invoice"
        ));
        assert!(matches!(
            Document::from_value(json!({ "name": "untagged" })),
            Err(DecodeError::MissingTag)
        ));
    }

    #[test]
    fn malformed_body_is_reported() {
        let err = Product::decode(json!({ "type": "product", "name": "Pen" })).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn kind_round_trips_through_its_tag() {
        for kind in [Kind::Customer, Kind::Product, Kind::Receipt] {
            assert_eq!(kind.as_str().parse::<Kind>().unwrap(), kind);
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
    }
}
