//! # Category: Lógica Discreta de Senso Comum
//!
//! A lógica de senso comum discreta só admite cinco valores:
//!
//! - **UNDEF**: totalmente desconhecido
//! - **FALSE**: certamente negativo
//! - **NEVER**: impossível (nem positivo nem negativo)
//! - **MAYBE**: incerto (pode ser positivo ou negativo)
//! - **TRUE**: certamente positivo
//!
//! ## NOT
//!
//! | `undef` | `false` | `never` | `maybe` | `true` |
//! | --- | --- | --- | --- | --- |
//! | `undef` | `true` | `maybe` | `never` | `false` |
//!
//! ## AND
//!
//! | `a` \ `b` | `undef` | `false` | `never` | `maybe` | `true` |
//! | --- | --- | --- | --- | --- | --- |
//! | **`undef`** | `undef` | `undef` | `undef` | `undef` | `undef` |
//! | **`false`** | `undef` | `false` | `false` | `false` | `false` |
//! | **`never`** | `undef` | `false` | `never` | `false` | `never` |
//! | **`maybe`** | `undef` | `false` | `false` | `maybe` | `maybe` |
//! | **`true`** | `undef` | `false` | `never` | `maybe` | `true` |
//!
//! ## OR
//!
//! | `a` \ `b` | `undef` | `false` | `never` | `maybe` | `true` |
//! | --- | --- | --- | --- | --- | --- |
//! | **`undef`** | `undef` | `undef` | `undef` | `undef` | `undef` |
//! | **`false`** | `undef` | `false` | `never` | `maybe` | `true` |
//! | **`never`** | `undef` | `never` | `never` | `true` | `true` |
//! | **`maybe`** | `undef` | `maybe` | `true` | `maybe` | `true` |
//! | **`true`** | `undef` | `true` | `true` | `true` | `true` |
//!
//! ## Exemplo
//!
//! ```rust
//! use common_sense_logic::Category;
//!
//! assert_eq!(Category::Never & Category::Maybe, Category::False);
//! assert_eq!(Category::Never | Category::Maybe, Category::True);
//! assert_eq!(!Category::Maybe, Category::Never);
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogicError;

/// Categoria lógica discreta.
///
/// A ordem das variantes é a ordem canônica dos componentes de um
/// [`Logic`](super::Logic) e também a ordem de desempate da dominância.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Totalmente desconhecido.
    Undef,
    /// Certamente negativo.
    False,
    /// Impossível: nem positivo nem negativo.
    Never,
    /// Incerto: pode ser positivo ou negativo.
    Maybe,
    /// Certamente positivo.
    True,
}

impl Category {
    /// As cinco categorias, na ordem canônica.
    pub const ALL: [Category; 5] = [
        Category::Undef,
        Category::False,
        Category::Never,
        Category::Maybe,
        Category::True,
    ];

    /// Posição da categoria no vetor lógico (`0` para UNDEF até `4` para TRUE).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Nome canônico em maiúsculas, usado em `Display` e na serialização.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Undef => "UNDEF",
            Category::False => "FALSE",
            Category::Never => "NEVER",
            Category::Maybe => "MAYBE",
            Category::True => "TRUE",
        }
    }
}

/// NOT discreto: troca TRUE↔FALSE e NEVER↔MAYBE. UNDEF é ponto fixo.
pub fn not(value: Category) -> Category {
    match value {
        Category::Undef => Category::Undef,
        Category::False => Category::True,
        Category::Never => Category::Maybe,
        Category::Maybe => Category::Never,
        Category::True => Category::False,
    }
}

/// AND discreto. UNDEF domina, depois FALSE; TRUE é o elemento neutro.
pub fn and(a: Category, b: Category) -> Category {
    use Category::*;
    match (a, b) {
        (Undef, _) | (_, Undef) => Undef,
        (False, _) | (_, False) => False,
        (True, other) | (other, True) => other,
        (Never, Never) => Never,
        (Maybe, Maybe) => Maybe,
        // NEVER ∧ MAYBE, em qualquer ordem
        _ => False,
    }
}

/// OR discreto. UNDEF domina, depois TRUE; FALSE é o elemento neutro.
pub fn or(a: Category, b: Category) -> Category {
    use Category::*;
    match (a, b) {
        (Undef, _) | (_, Undef) => Undef,
        (True, _) | (_, True) => True,
        (False, other) | (other, False) => other,
        (Never, Never) => Never,
        (Maybe, Maybe) => Maybe,
        // NEVER ∨ MAYBE, em qualquer ordem
        _ => True,
    }
}

impl Not for Category {
    type Output = Category;

    fn not(self) -> Category {
        not(self)
    }
}

impl BitAnd for Category {
    type Output = Category;

    fn bitand(self, rhs: Category) -> Category {
        and(self, rhs)
    }
}

impl BitOr for Category {
    type Output = Category;

    fn bitor(self, rhs: Category) -> Category {
        or(self, rhs)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aceita o nome da categoria sem diferenciar maiúsculas de minúsculas.
impl FromStr for Category {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LogicError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::*;

    /// Tabela AND completa, linha `a`, coluna `b`, na ordem canônica
    const AND_TABLE: [[Category; 5]; 5] = [
        [Undef, Undef, Undef, Undef, Undef],
        [Undef, False, False, False, False],
        [Undef, False, Never, False, Never],
        [Undef, False, False, Maybe, Maybe],
        [Undef, False, Never, Maybe, True],
    ];

    const OR_TABLE: [[Category; 5]; 5] = [
        [Undef, Undef, Undef, Undef, Undef],
        [Undef, False, Never, Maybe, True],
        [Undef, Never, Never, True, True],
        [Undef, Maybe, True, Maybe, True],
        [Undef, True, True, True, True],
    ];

    /// NOT é involução e UNDEF é seu ponto fixo
    #[test]
    fn test_not_involution() {
        for c in Category::ALL {
            assert_eq!(not(not(c)), c);
        }
        assert_eq!(not(Undef), Undef);
        assert_eq!(!True, False);
        assert_eq!(!Never, Maybe);
    }

    /// Os 25 pares de AND e OR batem com as tabelas-verdade
    #[test]
    fn test_truth_tables() {
        for a in Category::ALL {
            for b in Category::ALL {
                assert_eq!(and(a, b), AND_TABLE[a.index()][b.index()], "{a} AND {b}");
                assert_eq!(or(a, b), OR_TABLE[a.index()][b.index()], "{a} OR {b}");
            }
        }
    }

    /// Dualidade de De Morgan em todos os pares
    #[test]
    fn test_de_morgan() {
        for a in Category::ALL {
            for b in Category::ALL {
                assert_eq!(!(a & b), !a | !b);
                assert_eq!(!(a | b), !a & !b);
            }
        }
    }

    #[test]
    fn test_index_follows_canonical_order() {
        for (i, c) in Category::ALL.into_iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    /// Nome canônico, parse tolerante e erro para nomes desconhecidos
    #[test]
    fn test_display_and_parse() {
        assert_eq!(Maybe.to_string(), "MAYBE");
        assert_eq!("never".parse::<Category>(), Ok(Never));
        assert_eq!(" True ".parse::<Category>(), Ok(True));
        assert_eq!(
            "perhaps".parse::<Category>(),
            Err(LogicError::UnknownCategory("perhaps".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_upper_case_names() {
        let json = serde_json::to_string(&Undef).unwrap();
        assert_eq!(json, "\"UNDEF\"");
        let back: Category = serde_json::from_str("\"FALSE\"").unwrap();
        assert_eq!(back, False);
    }
}
