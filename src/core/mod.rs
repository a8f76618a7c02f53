//! # Módulo Core: Tipos Fundamentais da Lógica de Senso Comum
//!
//! Este módulo agrupa as **três camadas** da álgebra e o acumulador:
//!
//! - [`fuzzy`]: lógica fuzzy escalar (Zadeh), um número em `[0, 1]`
//! - [`Category`]: as cinco categorias discretas e suas tabelas-verdade
//! - [`Logic`]: o vetor de cinco componentes fuzzy, um por categoria
//! - [`LogicAccumulator`]: soma mutável de vetores, normalizada no fim
//!
//! ## Relação Entre as Camadas
//!
//! ```text
//! Fuzzy (f64) ──► componente de ──► Logic ◄── one-hot de ──── Category
//!                                     │
//!                                     └── as_category() ───► Category
//! ```
//!
//! Os operadores de [`Logic`] são construídos com os operadores de [`fuzzy`] e
//! se reduzem exatamente aos de [`category`] quando aplicados a vetores one-hot.

/// Sub-módulo da lógica fuzzy escalar.
pub mod fuzzy;

/// Sub-módulo com a implementação de [`Category`] e das tabelas discretas.
pub mod category;

/// Sub-módulo com a implementação de [`Logic`], o vetor fuzzy de senso comum.
pub mod logic;

/// Sub-módulo com a implementação de [`LogicAccumulator`].
pub mod accumulator;

// Re-exports para conveniência: permite usar `crate::core::Logic` diretamente.
pub use accumulator::LogicAccumulator;
pub use category::Category;
pub use fuzzy::{Fuzzy, FUZZY_FALSE, FUZZY_TRUE};
pub use logic::{Logic, DISPLAY_PRECISION, NORMALIZATION_TOLERANCE};
