//! # Value: Operando Polimórfico
//!
//! [`Value`] é a soma fechada das três formas que a fachada aceita: uma
//! [`Category`], um valor [`Fuzzy`] escalar ou um vetor [`Logic`]. A forma é
//! decidida por `match`, nunca por inspeção em tempo de execução.
//!
//! ## Leitura de JSON
//!
//! | JSON | Forma |
//! |------|-------|
//! | `null` | erro `MissingArgument` |
//! | número | `Fuzzy` |
//! | string (`"maybe"`, `"TRUE"`) | `Category` |
//! | array com até 5 números | `Logic` (faltantes = `0.0`) |
//! | objeto `{"TRUE": 0.8, ...}` | `Logic` (chaves ausentes = `0.0`) |
//! | booleano | erro `InvalidShape` |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Category, Fuzzy, Logic};
use crate::error::{LogicError, Result};

/// Forma de um [`Value`], usada nas mensagens de erro.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Category,
    Fuzzy,
    Logic,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Shape::Category => "categoria",
            Shape::Fuzzy => "valor fuzzy",
            Shape::Logic => "vetor lógico",
        };
        f.write_str(label)
    }
}

/// Operando da fachada polimórfica.
///
/// Serializa sem etiqueta: a categoria como nome, o escalar como número
/// e o vetor como array. Desserializa pelas regras de [`Value::from_json`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "serde_json::Value")]
pub enum Value {
    Category(Category),
    Fuzzy(Fuzzy),
    Logic(Logic),
}

impl Value {
    /// Forma deste operando.
    pub fn shape(&self) -> Shape {
        match self {
            Value::Category(_) => Shape::Category,
            Value::Fuzzy(_) => Shape::Fuzzy,
            Value::Logic(_) => Shape::Logic,
        }
    }

    pub fn as_category(&self) -> Option<Category> {
        match self {
            Value::Category(category) => Some(*category),
            _ => None,
        }
    }

    pub fn as_fuzzy(&self) -> Option<Fuzzy> {
        match self {
            Value::Fuzzy(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_logic(&self) -> Option<Logic> {
        match self {
            Value::Logic(value) => Some(*value),
            _ => None,
        }
    }

    /// Interpreta um valor JSON dinâmico como operando.
    ///
    /// # Erros
    ///
    /// - [`LogicError::MissingArgument`] para `null`
    /// - [`LogicError::UnknownCategory`] para string ou chave que não é categoria
    /// - [`LogicError::NonNumericComponent`] para componente de vetor não numérico
    /// - [`LogicError::TooManyComponents`] para array com mais de cinco itens
    /// - [`LogicError::InvalidShape`] para booleanos
    pub fn from_json(json: &serde_json::Value) -> Result<Value> {
        use serde_json::Value as Json;

        match json {
            Json::Null => Err(LogicError::MissingArgument {
                operation: "from_json",
            }),
            Json::Bool(_) => Err(LogicError::InvalidShape { found: "booleano" }),
            Json::Number(number) => number
                .as_f64()
                .map(Value::Fuzzy)
                .ok_or(LogicError::InvalidShape { found: "número" }),
            Json::String(name) => name.parse().map(Value::Category),
            Json::Array(items) => {
                let components = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        item.as_f64()
                            .ok_or(LogicError::NonNumericComponent { index })
                    })
                    .collect::<Result<Vec<Fuzzy>>>()?;
                Logic::from_slice(&components).map(Value::Logic)
            }
            Json::Object(entries) => {
                let mut pairs = Vec::with_capacity(entries.len());
                for (key, item) in entries {
                    let category: Category = key.parse()?;
                    let value = item.as_f64().ok_or(LogicError::NonNumericComponent {
                        index: category.index(),
                    })?;
                    pairs.push((category, value));
                }
                Ok(Value::Logic(Logic::from_values(pairs)))
            }
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = LogicError;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        Value::from_json(&json)
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = LogicError;

    fn try_from(json: &serde_json::Value) -> Result<Self> {
        Value::from_json(json)
    }
}

impl From<Category> for Value {
    fn from(category: Category) -> Self {
        Value::Category(category)
    }
}

impl From<Fuzzy> for Value {
    fn from(value: Fuzzy) -> Self {
        Value::Fuzzy(value)
    }
}

impl From<Logic> for Value {
    fn from(value: Logic) -> Self {
        Value::Logic(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Category(category) => fmt::Display::fmt(category, f),
            Value::Fuzzy(value) => fmt::Display::fmt(value, f),
            Value::Logic(value) => fmt::Display::fmt(value, f),
        }
    }
}
