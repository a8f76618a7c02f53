//! # Logic: Lógica Fuzzy de Senso Comum
//!
//! Na lógica fuzzy de senso comum o valor lógico é um **vetor de cinco dimensões**.
//! Cada componente é um valor [`Fuzzy`] da respectiva [`Category`], sempre na
//! ordem canônica `(UNDEF, FALSE, NEVER, MAYBE, TRUE)`.
//!
//! ## Invariantes
//!
//! - **Validade**: o vetor é válido se e somente se a soma dos componentes é `> 0`.
//!   O vetor nulo é inválido e não tem categoria dominante.
//! - **Normalização**: cada componente dividido pela soma. Com soma zero o divisor
//!   passa a ser `1.0`, e o vetor nulo continua nulo.
//! - **Dominância**: a categoria de maior componente. Empates ficam com a categoria
//!   que vem primeiro na ordem canônica.
//!
//! ## Operadores
//!
//! | Operador | Efeito |
//! |----------|--------|
//! | `not` | permuta FALSE↔TRUE e NEVER↔MAYBE, UNDEF fica |
//! | `and` | UNDEF absorve; o resto da massa segue a tabela discreta do AND |
//! | `or` | dual do `and` por De Morgan |
//!
//! Em vetores "one-hot" (uma categoria com `1.0`, demais `0.0`) os operadores
//! reproduzem **exatamente** as tabelas de [`category`](super::category).
//!
//! ## Exemplo
//!
//! ```rust
//! use common_sense_logic::{Category, Logic};
//!
//! let quase_verdade = Logic::new(0.15, 0.15, 0.15, 0.15, 0.4);
//! assert_eq!((quase_verdade & quase_verdade).as_category(), Some(Category::True));
//! assert_eq!((!quase_verdade).as_category(), Some(Category::False));
//! assert_eq!(quase_verdade.to_string(), "(0.15,0.15,0.15,0.15,0.40)");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::fuzzy::{self, Fuzzy, FUZZY_FALSE, FUZZY_TRUE};
use crate::error::{LogicError, Result};

/// Tolerância para considerar um vetor já normalizado (`|soma - 1| < tolerância`).
pub const NORMALIZATION_TOLERANCE: f64 = 1e-8;

/// Casas decimais de cada componente na forma textual `(u,f,n,m,t)`.
pub const DISPLAY_PRECISION: usize = 2;

/// Valor lógico fuzzy de senso comum: um componente por [`Category`].
///
/// Tem semântica de valor (`Copy`): todos os operadores retornam um vetor novo.
/// Para acumular evidência use [`LogicAccumulator`](super::LogicAccumulator).
///
/// Serializa como um array JSON de cinco números na ordem canônica.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Logic {
    values: [Fuzzy; 5],
}

impl Logic {
    /// Cria um vetor a partir dos cinco componentes, na ordem canônica.
    pub const fn new(
        undef: Fuzzy,
        false_value: Fuzzy,
        never: Fuzzy,
        maybe: Fuzzy,
        true_value: Fuzzy,
    ) -> Self {
        Self {
            values: [undef, false_value, never, maybe, true_value],
        }
    }

    /// Vetor "one-hot": `1.0` na categoria informada e `0.0` nas demais.
    pub fn from_category(category: Category) -> Self {
        let mut values = [FUZZY_FALSE; 5];
        values[category.index()] = FUZZY_TRUE;
        Self { values }
    }

    /// Cria um vetor a partir do array completo, na ordem canônica.
    pub const fn from_array(values: [Fuzzy; 5]) -> Self {
        Self { values }
    }

    /// Cria um vetor a partir de uma sequência na ordem canônica.
    ///
    /// Componentes ausentes no fim da sequência valem `0.0`.
    ///
    /// # Erros
    ///
    /// [`LogicError::TooManyComponents`] se a sequência tiver mais de cinco valores.
    pub fn from_slice(values: &[Fuzzy]) -> Result<Self> {
        if values.len() > Category::ALL.len() {
            return Err(LogicError::TooManyComponents(values.len()));
        }
        let mut result = Self::default();
        result.values[..values.len()].copy_from_slice(values);
        Ok(result)
    }

    /// Cria um vetor a partir de pares `(categoria, valor)`.
    ///
    /// Categorias ausentes valem `0.0`; chaves repetidas ficam com o último valor.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (Category, Fuzzy)>,
    {
        let mut result = Self::default();
        for (category, value) in values {
            result.values[category.index()] = value;
        }
        result
    }

    /// Valor fuzzy da categoria informada.
    pub fn get(&self, category: Category) -> Fuzzy {
        self.values[category.index()]
    }

    /// Componentes na ordem canônica.
    pub fn as_array(&self) -> [Fuzzy; 5] {
        self.values
    }

    /// Cópia dos componentes indexada por categoria.
    pub fn as_values(&self) -> BTreeMap<Category, Fuzzy> {
        Category::ALL.into_iter().map(|c| (c, self.get(c))).collect()
    }

    /// Soma dos cinco componentes.
    pub fn scalar(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Divisor de normalização: a soma dos componentes, ou `1.0` quando ela é zero.
    pub fn normalizer(&self) -> f64 {
        let scalar = self.scalar();
        if scalar == 0.0 {
            FUZZY_TRUE
        } else {
            scalar
        }
    }

    /// Componente normalizado da categoria, sem alterar o vetor.
    pub fn get_normalized(&self, category: Category) -> Fuzzy {
        self.get(category) / self.normalizer()
    }

    /// `true` se ao menos uma categoria tem valor acima de [`FUZZY_FALSE`].
    pub fn is_valid(&self) -> bool {
        self.scalar() > FUZZY_FALSE
    }

    /// Retorna o vetor normalizado (soma `1.0`).
    ///
    /// Se o vetor já está normalizado dentro de [`NORMALIZATION_TOLERANCE`],
    /// retorna o próprio valor sem recalcular. O vetor nulo continua nulo.
    pub fn normalize(self) -> Logic {
        let normalizer = self.normalizer();
        if (normalizer - FUZZY_TRUE).abs() < NORMALIZATION_TOLERANCE {
            self
        } else {
            self.map(|value| value / normalizer)
        }
    }

    /// Multiplica cada componente por `factor`.
    pub fn scale(self, factor: f64) -> Logic {
        self.map(|value| value * factor)
    }

    /// Soma componente a componente, **sem** normalizar.
    ///
    /// Para acumular muitas parcelas prefira [`LogicAccumulator`](super::LogicAccumulator).
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: &Logic) -> Logic {
        let mut values = self.values;
        for (sum, value) in values.iter_mut().zip(other.values) {
            *sum += value;
        }
        Logic { values }
    }

    /// Categoria dominante, ou `None` para um vetor inválido.
    ///
    /// Percorre as categorias na ordem canônica e só troca de categoria quando
    /// encontra um valor **estritamente** maior. Empates ficam com a primeira.
    pub fn as_category(&self) -> Option<Category> {
        let mut result = Category::Undef;
        for category in Category::ALL.into_iter().skip(1) {
            if self.get(result) < self.get(category) {
                result = category;
            }
        }
        (self.get(result) > FUZZY_FALSE).then_some(result)
    }

    /// `true` se `category` é a categoria dominante deste vetor.
    ///
    /// Comparação direta componente a componente: o valor de `category` deve ser
    /// positivo, estritamente maior que o das categorias anteriores e maior ou
    /// igual ao das posteriores. Concorda com [`as_category`](Self::as_category)
    /// em qualquer vetor sem `NaN`.
    pub fn eq_category(&self, category: Category) -> bool {
        let value = self.get(category);
        value > FUZZY_FALSE
            && Category::ALL.into_iter().all(|other| {
                if other < category {
                    value > self.get(other)
                } else {
                    value >= self.get(other)
                }
            })
    }

    /// `true` se `category` **não** é a categoria dominante deste vetor.
    pub fn ne_category(&self, category: Category) -> bool {
        let value = self.get(category);
        value <= FUZZY_FALSE
            || Category::ALL.into_iter().any(|other| {
                if other < category {
                    value <= self.get(other)
                } else {
                    value < self.get(other)
                }
            })
    }

    /// NOT fuzzy de senso comum: permutação dos componentes.
    ///
    /// UNDEF fica; FALSE recebe TRUE; NEVER recebe MAYBE; MAYBE recebe NEVER;
    /// TRUE recebe FALSE. Não precisa renormalizar.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Logic {
        let [undef, false_value, never, maybe, true_value] = self.values;
        Logic::new(undef, true_value, maybe, never, false_value)
    }

    /// AND fuzzy de senso comum. O resultado é normalizado.
    ///
    /// ```text
    /// undef    = a.U ∨ b.U
    /// notUndef = ¬undef
    /// UNDEF = undef
    /// FALSE = notUndef ∧ (a.F ∨ b.F ∨ (a.M ∧ b.N) ∨ (a.N ∧ b.M))
    /// NEVER = notUndef ∧ ((a.N ∧ b.N) ∨ (a.N ∧ b.T) ∨ (a.T ∧ b.N))
    /// MAYBE = notUndef ∧ ((a.M ∧ b.M) ∨ (a.M ∧ b.T) ∨ (a.T ∧ b.M))
    /// TRUE  = notUndef ∧ a.T ∧ b.T
    /// ```
    pub fn and(&self, other: &Logic) -> Logic {
        let [au, af, an, am, at] = self.values;
        let [bu, bf, bn, bm, bt] = other.values;
        let undef = fuzzy::or([au, bu]);
        let not_undef = fuzzy::not(undef);
        Logic::new(
            undef,
            fuzzy::and([
                not_undef,
                fuzzy::or([af, bf, fuzzy::and([am, bn]), fuzzy::and([an, bm])]),
            ]),
            fuzzy::and([
                not_undef,
                fuzzy::or([fuzzy::and([an, bn]), fuzzy::and([an, bt]), fuzzy::and([at, bn])]),
            ]),
            fuzzy::and([
                not_undef,
                fuzzy::or([fuzzy::and([am, bm]), fuzzy::and([am, bt]), fuzzy::and([at, bm])]),
            ]),
            fuzzy::and([not_undef, at, bt]),
        )
        .normalize()
    }

    /// OR fuzzy de senso comum. O resultado é normalizado.
    ///
    /// ```text
    /// UNDEF = undef
    /// FALSE = notUndef ∧ a.F ∧ b.F
    /// NEVER = notUndef ∧ ((a.N ∧ b.N) ∨ (a.N ∧ b.F) ∨ (a.F ∧ b.N))
    /// MAYBE = notUndef ∧ ((a.M ∧ b.M) ∨ (a.M ∧ b.F) ∨ (a.F ∧ b.M))
    /// TRUE  = notUndef ∧ (a.T ∨ b.T ∨ (a.M ∧ b.N) ∨ (a.N ∧ b.M))
    /// ```
    pub fn or(&self, other: &Logic) -> Logic {
        let [au, af, an, am, at] = self.values;
        let [bu, bf, bn, bm, bt] = other.values;
        let undef = fuzzy::or([au, bu]);
        let not_undef = fuzzy::not(undef);
        Logic::new(
            undef,
            fuzzy::and([not_undef, af, bf]),
            fuzzy::and([
                not_undef,
                fuzzy::or([fuzzy::and([an, bn]), fuzzy::and([an, bf]), fuzzy::and([af, bn])]),
            ]),
            fuzzy::and([
                not_undef,
                fuzzy::or([fuzzy::and([am, bm]), fuzzy::and([am, bf]), fuzzy::and([af, bm])]),
            ]),
            fuzzy::and([
                not_undef,
                fuzzy::or([at, bt, fuzzy::and([am, bn]), fuzzy::and([an, bm])]),
            ]),
        )
        .normalize()
    }

    fn map(self, f: impl Fn(Fuzzy) -> Fuzzy) -> Logic {
        Logic {
            values: self.values.map(f),
        }
    }
}

impl From<Category> for Logic {
    fn from(category: Category) -> Self {
        Logic::from_category(category)
    }
}

impl From<[Fuzzy; 5]> for Logic {
    fn from(values: [Fuzzy; 5]) -> Self {
        Logic::from_array(values)
    }
}

impl Not for Logic {
    type Output = Logic;

    fn not(self) -> Logic {
        Logic::not(self)
    }
}

impl BitAnd for Logic {
    type Output = Logic;

    fn bitand(self, rhs: Logic) -> Logic {
        self.and(&rhs)
    }
}

impl BitOr for Logic {
    type Output = Logic;

    fn bitor(self, rhs: Logic) -> Logic {
        self.or(&rhs)
    }
}

/// `logic == categoria` testa dominância via [`Logic::eq_category`].
impl PartialEq<Category> for Logic {
    fn eq(&self, other: &Category) -> bool {
        self.eq_category(*other)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Category) -> bool {
        self.ne_category(*other)
    }
}

impl PartialEq<Logic> for Category {
    fn eq(&self, other: &Logic) -> bool {
        other.eq_category(*self)
    }
}

/// Forma canônica `(u.uu,f.ff,n.nn,m.mm,t.tt)`.
impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [undef, false_value, never, maybe, true_value] = self.values;
        write!(
            f,
            "({:.p$},{:.p$},{:.p$},{:.p$},{:.p$})",
            undef,
            false_value,
            never,
            maybe,
            true_value,
            p = DISPLAY_PRECISION
        )
    }
}
