//! # Erros: Falhas na Fronteira Dinâmica
//!
//! A álgebra em si é **total**: NOT, AND, OR, normalização e dominância nunca falham.
//! Erros só aparecem quando o valor chega sem tipo estático, isto é, na fachada
//! polimórfica ([`crate::dispatch`]) ou ao interpretar JSON.
//!
//! | Variante | Quando ocorre |
//! |----------|---------------|
//! | `MissingArgument` | operando ausente ou `null` |
//! | `OperandMismatch` | AND/OR com operandos de formas diferentes |
//! | `UnknownCategory` | nome que não é uma das cinco categorias |
//! | `InvalidShape` | JSON que não é número, nome, array nem objeto |
//! | `TooManyComponents` | array com mais de cinco componentes |
//! | `NonNumericComponent` | componente de vetor que não é número |

use crate::dispatch::Shape;

/// Erro da fronteira dinâmica da lógica de senso comum.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogicError {
    #[error("Argumento ausente para '{operation}'")]
    MissingArgument { operation: &'static str },

    #[error("Tipos de operandos incompatíveis em '{operation}': {left} e {right}")]
    OperandMismatch {
        operation: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("Categoria desconhecida: '{0}'")]
    UnknownCategory(String),

    #[error("Tipo de argumento inválido: {found}")]
    InvalidShape { found: &'static str },

    #[error("Vetor lógico aceita no máximo 5 componentes, recebeu {0}")]
    TooManyComponents(usize),

    #[error("Componente {index} do vetor lógico não é numérico")]
    NonNumericComponent { index: usize },
}

/// Alias de `Result` com [`LogicError`].
pub type Result<T> = std::result::Result<T, LogicError>;
