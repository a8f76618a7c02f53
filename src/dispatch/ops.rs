//! # Operadores Polimórficos
//!
//! Um único conjunto de entradas NOT/AND/OR/normalize que encaminha cada
//! chamada para a camada certa conforme a forma do operando:
//!
//! | Forma | NOT | AND / OR | normalize |
//! |-------|-----|----------|-----------|
//! | `Category` | tabela discreta | tabela discreta | identidade |
//! | `Fuzzy` | `1 - x` | mínimo / máximo | limita a `[0, 1]` |
//! | `Logic` | permutação | álgebra vetorial | soma `1.0` |
//!
//! AND e OR exigem operandos da **mesma** forma. Não há conversão implícita.
//!
//! Para entrada sem tipo (JSON) use [`apply`], que também trata argumentos
//! ausentes.

use std::fmt;
use std::str::FromStr;

use crate::core::{category, fuzzy, Category, Fuzzy, Logic};
use crate::error::{LogicError, Result};

use super::value::Value;

/// Operação da fachada, para chamadas dinâmicas via [`apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Not,
    And,
    Or,
    Normalize,
}

impl Operation {
    /// Nome em minúsculas, usado nas mensagens de erro e no `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Not => "not",
            Operation::And => "and",
            Operation::Or => "or",
            Operation::Normalize => "normalize",
        }
    }

    /// Número de operandos que a operação consome.
    pub const fn arity(self) -> usize {
        match self {
            Operation::And | Operation::Or => 2,
            Operation::Not | Operation::Normalize => 1,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not" => Ok(Operation::Not),
            "and" => Ok(Operation::And),
            "or" => Ok(Operation::Or),
            "normalize" => Ok(Operation::Normalize),
            _ => Err(LogicError::InvalidShape { found: "operação" }),
        }
    }
}

/// NOT polimórfico. Total para as três formas.
pub fn not(value: impl Into<Value>) -> Value {
    let value = value.into();
    tracing::trace!(operation = "not", shape = %value.shape(), "Despachando operação");
    match value {
        Value::Category(c) => Value::Category(category::not(c)),
        Value::Fuzzy(x) => Value::Fuzzy(fuzzy::not(x)),
        Value::Logic(v) => Value::Logic(v.not()),
    }
}

/// AND polimórfico.
///
/// # Erros
///
/// [`LogicError::OperandMismatch`] se os operandos tiverem formas diferentes.
pub fn and(a: impl Into<Value>, b: impl Into<Value>) -> Result<Value> {
    binary(
        Operation::And,
        a.into(),
        b.into(),
        category::and,
        |x, y| fuzzy::and([x, y]),
        Logic::and,
    )
}

/// OR polimórfico.
///
/// # Erros
///
/// [`LogicError::OperandMismatch`] se os operandos tiverem formas diferentes.
pub fn or(a: impl Into<Value>, b: impl Into<Value>) -> Result<Value> {
    binary(
        Operation::Or,
        a.into(),
        b.into(),
        category::or,
        |x, y| fuzzy::or([x, y]),
        Logic::or,
    )
}

/// Normalização polimórfica: escalar é limitado, vetor passa a somar `1.0`.
///
/// Uma categoria já é um valor discreto e volta inalterada.
pub fn normalize(value: impl Into<Value>) -> Value {
    let value = value.into();
    tracing::trace!(operation = "normalize", shape = %value.shape(), "Despachando operação");
    match value {
        Value::Category(c) => Value::Category(c),
        Value::Fuzzy(x) => Value::Fuzzy(fuzzy::clamp(x)),
        Value::Logic(v) => Value::Logic(v.normalize()),
    }
}

/// Aplica `operation` a argumentos JSON sem tipo.
///
/// Cada argumento é lido por [`Value::from_json`]. Argumentos a mais são ignorados.
///
/// # Erros
///
/// - [`LogicError::MissingArgument`] se faltar argumento ou algum for `null`
/// - os erros de [`Value::from_json`] para argumentos malformados
/// - [`LogicError::OperandMismatch`] para AND/OR com formas diferentes
pub fn apply(operation: Operation, args: &[serde_json::Value]) -> Result<Value> {
    let mut operands = Vec::with_capacity(operation.arity());
    for index in 0..operation.arity() {
        let operand = match args.get(index) {
            None | Some(serde_json::Value::Null) => {
                tracing::debug!(operation = %operation, index, "Argumento ausente");
                return Err(LogicError::MissingArgument {
                    operation: operation.name(),
                });
            }
            Some(json) => Value::from_json(json)?,
        };
        operands.push(operand);
    }

    match (operation, operands.as_slice()) {
        (Operation::Not, [value]) => Ok(not(*value)),
        (Operation::Normalize, [value]) => Ok(normalize(*value)),
        (Operation::And, [a, b]) => and(*a, *b),
        (Operation::Or, [a, b]) => or(*a, *b),
        _ => unreachable!("aridade conferida acima"),
    }
}

fn binary(
    operation: Operation,
    a: Value,
    b: Value,
    on_category: fn(Category, Category) -> Category,
    on_fuzzy: fn(Fuzzy, Fuzzy) -> Fuzzy,
    on_logic: fn(&Logic, &Logic) -> Logic,
) -> Result<Value> {
    tracing::trace!(
        operation = %operation,
        left = %a.shape(),
        right = %b.shape(),
        "Despachando operação"
    );
    match (a, b) {
        (Value::Category(x), Value::Category(y)) => Ok(Value::Category(on_category(x, y))),
        (Value::Fuzzy(x), Value::Fuzzy(y)) => Ok(Value::Fuzzy(on_fuzzy(x, y))),
        (Value::Logic(x), Value::Logic(y)) => Ok(Value::Logic(on_logic(&x, &y))),
        (a, b) => {
            tracing::debug!(
                operation = %operation,
                left = %a.shape(),
                right = %b.shape(),
                "Operandos incompatíveis"
            );
            Err(LogicError::OperandMismatch {
                operation: operation.name(),
                left: a.shape(),
                right: b.shape(),
            })
        }
    }
}
