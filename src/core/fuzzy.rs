//! # Fuzzy: Lógica Fuzzy Escalar (Operadores de Zadeh)
//!
//! Um valor fuzzy é um número real entre `0.0` (probabilidade 0%) e `1.0`
//! (probabilidade 100%). São os blocos de construção de cada componente do
//! vetor [`Logic`](super::Logic).
//!
//! | Operador | Definição | Identidade (sem argumentos) |
//! |----------|-----------|-----------------------------|
//! | `not` | `1.0 - x` | n/a |
//! | `and` | mínimo | `1.0` |
//! | `or` | máximo | `0.0` |
//!
//! Entradas fora de `[0, 1]` são toleradas; **toda saída** é limitada ao intervalo.
//!
//! ## Exemplo
//!
//! ```rust
//! use common_sense_logic::core::fuzzy;
//!
//! assert_eq!(fuzzy::and([0.3, 0.8]), 0.3);
//! assert_eq!(fuzzy::or([0.3, 0.8]), 0.8);
//! assert_eq!(fuzzy::not(1.5), 0.0);
//! ```

/// Valor fuzzy. Semanticamente válido entre `0.0` e `1.0` inclusive.
pub type Fuzzy = f64;

/// Valor fuzzy de `false` (probabilidade zero).
pub const FUZZY_FALSE: Fuzzy = 0.0;

/// Valor fuzzy de `true` (probabilidade 100%).
pub const FUZZY_TRUE: Fuzzy = 1.0;

/// Garante que o valor fica entre `0.0` e `1.0`.
///
/// - `value <= 0.0` → `0.0`
/// - `value >= 1.0` → `1.0`
/// - caso contrário, o próprio `value`
pub fn clamp(value: Fuzzy) -> Fuzzy {
    value.clamp(FUZZY_FALSE, FUZZY_TRUE)
}

/// NOT fuzzy: complemento em relação a `1.0`.
pub fn not(value: Fuzzy) -> Fuzzy {
    clamp(FUZZY_TRUE - value)
}

/// AND fuzzy N-ário: o mínimo dos valores, partindo de [`FUZZY_TRUE`].
///
/// Sem argumentos retorna `1.0` (elemento neutro do AND).
pub fn and<I>(values: I) -> Fuzzy
where
    I: IntoIterator<Item = Fuzzy>,
{
    clamp(values.into_iter().fold(FUZZY_TRUE, Fuzzy::min))
}

/// OR fuzzy N-ário: o máximo dos valores, partindo de [`FUZZY_FALSE`].
///
/// Sem argumentos retorna `0.0` (elemento neutro do OR).
pub fn or<I>(values: I) -> Fuzzy
where
    I: IntoIterator<Item = Fuzzy>,
{
    clamp(values.into_iter().fold(FUZZY_FALSE, Fuzzy::max))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Fuzzy; 7] = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];

    /// Valores fora do intervalo são limitados
    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-0.5), FUZZY_FALSE);
        assert_eq!(clamp(0.0), FUZZY_FALSE);
        assert_eq!(clamp(0.42), 0.42);
        assert_eq!(clamp(1.0), FUZZY_TRUE);
        assert_eq!(clamp(7.0), FUZZY_TRUE);
    }

    /// Sem argumentos, AND e OR retornam seus elementos neutros
    #[test]
    fn test_empty_identities() {
        assert_eq!(and(std::iter::empty::<Fuzzy>()), FUZZY_TRUE);
        assert_eq!(or(std::iter::empty::<Fuzzy>()), FUZZY_FALSE);
    }

    #[test]
    fn test_not() {
        for v in SAMPLES {
            assert!((not(v) - (1.0 - v)).abs() < 1e-12);
        }
        assert_eq!(not(-1.0), FUZZY_TRUE);
        assert_eq!(not(2.0), FUZZY_FALSE);
    }

    /// AND binário é o mínimo, OR binário é o máximo
    #[test]
    fn test_min_max() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(and([a, b]), a.min(b));
                assert_eq!(or([a, b]), a.max(b));
            }
        }
    }

    /// A saída é sempre limitada, mesmo com entradas fora do intervalo
    #[test]
    fn test_output_clamped() {
        assert_eq!(and([1.7, 3.0]), FUZZY_TRUE);
        assert_eq!(or([-2.0, -0.1]), FUZZY_FALSE);
        assert_eq!(and([0.4, -0.3, 0.9]), FUZZY_FALSE);
        assert_eq!(or([0.4, 1.3]), FUZZY_TRUE);
    }
}
