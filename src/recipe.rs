// src/recipe.rs

//! Recipe data model and its wire format
//!
//! The remote service speaks JSON with Portuguese camelCase keys
//! (`nome`, `modoFazer`, `custoAproximado`, ...). Decoding is lenient:
//! missing or `null` text becomes an empty string, a missing cost becomes
//! NaN, and an unknown `tipo` becomes "no selection" rather than failing
//! the whole listing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Opaque identifier assigned by the remote service
///
/// The service may hand out string or numeric ids; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Serialize for RecipeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(RecipeId(s)),
            Value::Number(n) => Ok(RecipeId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number for recipe id, found {other}"
            ))),
        }
    }
}

/// Recipe category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeKind {
    #[serde(rename = "BEBIDA")]
    Bebida,
    #[serde(rename = "SALGADA")]
    Salgada,
    #[serde(rename = "DOCE")]
    Doce,
}

impl RecipeKind {
    /// Every kind, in the order the selector offers them
    pub const ALL: [RecipeKind; 3] = [RecipeKind::Bebida, RecipeKind::Salgada, RecipeKind::Doce];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeKind::Bebida => "BEBIDA",
            RecipeKind::Salgada => "SALGADA",
            RecipeKind::Doce => "DOCE",
        }
    }
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "BEBIDA" => Ok(RecipeKind::Bebida),
            "SALGADA" => Ok(RecipeKind::Salgada),
            "DOCE" => Ok(RecipeKind::Doce),
            _ => Err(Error::InvalidKind(s.to_string())),
        }
    }
}

/// The editable part of a recipe: everything except the id
///
/// This is also the body of create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFields {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub nome: String,

    /// `None` travels as `""`, the selector's "no selection" entry
    #[serde(default, with = "kind_field")]
    pub tipo: Option<RecipeKind>,

    #[serde(default, deserialize_with = "text_or_empty")]
    pub ingredientes: String,

    #[serde(default, deserialize_with = "text_or_empty")]
    pub modo_fazer: String,

    #[serde(default, deserialize_with = "text_or_empty")]
    pub img: String,

    /// NaN when the user typed something non-numeric; encoded as `null`
    #[serde(default = "not_a_number", with = "cost_field")]
    pub custo_aproximado: f64,
}

impl RecipeFields {
    /// The create template: no kind, zero cost, all text empty
    pub fn blank() -> Self {
        Self {
            nome: String::new(),
            tipo: None,
            ingredientes: String::new(),
            modo_fazer: String::new(),
            img: String::new(),
            custo_aproximado: 0.0,
        }
    }
}

impl Default for RecipeFields {
    fn default() -> Self {
        Self::blank()
    }
}

/// A recipe as stored by the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,

    #[serde(flatten)]
    pub fields: RecipeFields,

    /// Keys this client does not model, kept so they survive a local merge
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    pub fn new(id: RecipeId, fields: RecipeFields) -> Self {
        Self {
            id,
            fields,
            extra: Map::new(),
        }
    }

    /// Display name
    pub fn nome(&self) -> &str {
        &self.fields.nome
    }

    /// Overlay submitted form fields, leaving id and unknown keys alone
    pub fn merge(&mut self, fields: &RecipeFields) {
        self.fields = fields.clone();
    }
}

fn not_a_number() -> f64 {
    f64::NAN
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

mod kind_field {
    use super::RecipeKind;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use tracing::warn;

    pub fn serialize<S: Serializer>(
        kind: &Option<RecipeKind>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(kind.map(|k| k.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<RecipeKind>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => match s.parse::<RecipeKind>() {
                Ok(kind) => Ok(Some(kind)),
                Err(_) => {
                    warn!("Ignoring unknown recipe kind '{}'", s);
                    Ok(None)
                }
            },
            other => {
                warn!("Ignoring non-text recipe kind {}", other);
                Ok(None)
            }
        }
    }
}

mod cost_field {
    use crate::modal::parse_float;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(cost: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if cost.is_finite() {
            serializer.serialize_f64(*cost)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => parse_float(&s),
            _ => f64::NAN,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_record() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "7",
            "nome": "Limonada",
            "tipo": "BEBIDA",
            "ingredientes": "limão, água, açúcar",
            "modoFazer": "misturar tudo",
            "img": "https://img.example/limonada.png",
            "custoAproximado": 4.5
        }))
        .unwrap();

        assert_eq!(recipe.id, RecipeId::new("7"));
        assert_eq!(recipe.nome(), "Limonada");
        assert_eq!(recipe.fields.tipo, Some(RecipeKind::Bebida));
        assert_eq!(recipe.fields.modo_fazer, "misturar tudo");
        assert_eq!(recipe.fields.custo_aproximado, 4.5);
        assert!(recipe.extra.is_empty());
    }

    #[test]
    fn test_numeric_id_kept_as_text() {
        let recipe: Recipe = serde_json::from_value(json!({"id": 42, "nome": "Pão"})).unwrap();
        assert_eq!(recipe.id.as_str(), "42");
    }

    #[test]
    fn test_lenient_decoding() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "1",
            "nome": null,
            "tipo": "SOBREMESA",
            "custoAproximado": null
        }))
        .unwrap();

        assert_eq!(recipe.nome(), "");
        assert_eq!(recipe.fields.tipo, None);
        assert_eq!(recipe.fields.ingredientes, "");
        assert!(recipe.fields.custo_aproximado.is_nan());
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "3",
            "nome": "Coxinha",
            "autor": "Fessor",
            "createdAt": "2025-03-01"
        }))
        .unwrap();

        assert_eq!(recipe.extra.get("autor"), Some(&json!("Fessor")));
        let encoded = serde_json::to_value(&recipe).unwrap();
        assert_eq!(encoded["createdAt"], json!("2025-03-01"));
        assert_eq!(encoded["nome"], json!("Coxinha"));
    }

    #[test]
    fn test_payload_shape() {
        let fields = RecipeFields {
            nome: "Bolo".to_string(),
            tipo: None,
            ingredientes: "farinha".to_string(),
            modo_fazer: "misturar".to_string(),
            img: String::new(),
            custo_aproximado: f64::NAN,
        };

        let encoded = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            encoded,
            json!({
                "nome": "Bolo",
                "tipo": "",
                "ingredientes": "farinha",
                "modoFazer": "misturar",
                "img": "",
                "custoAproximado": null
            })
        );
    }

    #[test]
    fn test_merge_keeps_id_and_extra() {
        let mut recipe: Recipe =
            serde_json::from_value(json!({"id": "9", "nome": "Suco", "autor": "x"})).unwrap();
        let mut fields = recipe.fields.clone();
        fields.nome = "Suco de uva".to_string();
        fields.tipo = Some(RecipeKind::Bebida);

        recipe.merge(&fields);

        assert_eq!(recipe.id.as_str(), "9");
        assert_eq!(recipe.nome(), "Suco de uva");
        assert_eq!(recipe.extra.get("autor"), Some(&json!("x")));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("DOCE".parse::<RecipeKind>().unwrap(), RecipeKind::Doce);
        assert!(matches!(
            "doce".parse::<RecipeKind>(),
            Err(Error::InvalidKind(_))
        ));
    }
}
