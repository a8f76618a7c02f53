//! # LogicAccumulator: Soma de Evidências
//!
//! Acumulador mutável de vetores [`Logic`]. Cada parcela é somada componente a
//! componente e a normalização acontece só no fim, com [`LogicAccumulator::normalize`].
//!
//! O acumulador é um tipo separado de [`Logic`]: um `Logic` nunca muda depois de
//! criado, então não existe aliasing entre "o valor" e "a soma em andamento".
//!
//! ## Concorrência
//!
//! O acumulador não é sincronizado. Para somar em paralelo, cada thread acumula
//! sua parcial e as parciais são unidas com [`LogicAccumulator::merge`].
//!
//! ## Exemplo
//!
//! ```rust
//! use common_sense_logic::{Category, Logic, LogicAccumulator};
//!
//! let mut acc = LogicAccumulator::new();
//! acc.add(&Logic::from(Category::False))
//!     .add(&Logic::from(Category::True));
//! assert_eq!(acc.normalize().as_array(), [0.0, 0.5, 0.0, 0.0, 0.5]);
//! ```

use std::iter::Sum;
use std::ops::AddAssign;

use super::fuzzy::Fuzzy;
use super::logic::Logic;

/// Soma componente a componente de vetores [`Logic`], ainda não normalizada.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogicAccumulator {
    sums: [Fuzzy; 5],
    count: usize,
}

impl LogicAccumulator {
    /// Acumulador vazio (soma nula, inválida até receber evidência).
    pub fn new() -> Self {
        Self::default()
    }

    /// Soma `value` ao acumulador. Retorna o próprio acumulador para encadear.
    pub fn add(&mut self, value: &Logic) -> &mut Self {
        for (sum, component) in self.sums.iter_mut().zip(value.as_array()) {
            *sum += component;
        }
        self.count += 1;
        self
    }

    /// Une outra parcial a esta.
    pub fn merge(&mut self, other: &LogicAccumulator) -> &mut Self {
        for (sum, component) in self.sums.iter_mut().zip(other.sums) {
            *sum += component;
        }
        self.count += other.count;
        self
    }

    /// Número de parcelas somadas até agora.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Soma bruta, sem normalizar.
    pub fn raw(&self) -> Logic {
        Logic::from_array(self.sums)
    }

    /// Soma normalizada. Sem evidência, retorna o vetor nulo.
    pub fn normalize(&self) -> Logic {
        self.raw().normalize()
    }
}

impl From<Logic> for LogicAccumulator {
    fn from(value: Logic) -> Self {
        let mut acc = Self::new();
        acc.add(&value);
        acc
    }
}

impl AddAssign<&Logic> for LogicAccumulator {
    fn add_assign(&mut self, value: &Logic) {
        self.add(value);
    }
}

impl AddAssign<Logic> for LogicAccumulator {
    fn add_assign(&mut self, value: Logic) {
        self.add(&value);
    }
}

impl Extend<Logic> for LogicAccumulator {
    fn extend<I: IntoIterator<Item = Logic>>(&mut self, iter: I) {
        for value in iter {
            self.add(&value);
        }
    }
}

impl FromIterator<Logic> for LogicAccumulator {
    fn from_iter<I: IntoIterator<Item = Logic>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl Sum<Logic> for LogicAccumulator {
    fn sum<I: Iterator<Item = Logic>>(iter: I) -> Self {
        iter.collect()
    }
}

impl Sum for LogicAccumulator {
    fn sum<I: Iterator<Item = LogicAccumulator>>(iter: I) -> Self {
        iter.fold(Self::new(), |mut acc, partial| {
            acc.merge(&partial);
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    /// FALSE + TRUE normalizado fica dividido meio a meio
    #[test]
    fn test_false_plus_true() {
        let mut acc = LogicAccumulator::new();
        acc.add(&Logic::from(Category::False)).add(&Logic::from(Category::True));
        assert_eq!(acc.count(), 2);
        assert_eq!(acc.raw().as_array(), [0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(acc.normalize().as_array(), [0.0, 0.5, 0.0, 0.0, 0.5]);
    }

    /// Acumulador vazio produz o vetor nulo, inválido
    #[test]
    fn test_empty_is_invalid() {
        let acc = LogicAccumulator::new();
        assert!(!acc.normalize().is_valid());
        assert_eq!(acc.normalize().as_category(), None);
    }

    /// Somar não altera as parcelas originais
    #[test]
    fn test_inputs_are_untouched() {
        let value = Logic::new(0.1, 0.2, 0.3, 0.2, 0.2);
        let mut acc = LogicAccumulator::from(value);
        acc += &value;
        acc += value;
        assert_eq!(value.as_array(), [0.1, 0.2, 0.3, 0.2, 0.2]);
        assert!((acc.raw().get(Category::Never) - 0.9).abs() < 1e-12);
    }

    /// `merge` de parciais equivale a somar tudo em sequência
    #[test]
    fn test_merge_matches_sequential() {
        let values: Vec<Logic> = Category::ALL.into_iter().map(Logic::from).collect();
        let sequential: LogicAccumulator = values.iter().copied().collect();

        let mut left: LogicAccumulator = values[..2].iter().copied().sum();
        let right: LogicAccumulator = values[2..].iter().copied().sum();
        left.merge(&right);

        assert_eq!(left, sequential);
        assert_eq!(sequential.normalize().as_array(), [0.2; 5]);
    }
}
