//! # Lógica de Senso Comum
//!
//! A lógica humana (o "senso comum") trabalha com **cinco categorias**:
//!
//! - `TRUE`: certamente positivo
//! - `FALSE`: certamente negativo
//! - `MAYBE`: incerto (pode ser positivo ou negativo)
//! - `NEVER`: impossível (nem positivo nem negativo)
//! - `UNDEF`: totalmente desconhecido
//!
//! Esta crate implementa a lógica discreta sobre essas categorias e a sua extensão
//! fuzzy, em que o valor lógico é um vetor de cinco componentes em `[0, 1]`.
//!
//! ## Camadas
//!
//! ```text
//! core::fuzzy      escalar fuzzy (Zadeh): clamp, not, and (mín), or (máx)
//! core::category   cinco categorias, NOT total, tabelas AND/OR
//! core::logic      vetor de 5 componentes, NOT/AND/OR, normalização, dominância
//! core::accumulator soma mutável de vetores, normalizada no fim
//! dispatch         fachada polimórfica sobre as três formas
//! ```
//!
//! Tudo é síncrono e sem efeitos colaterais. O único estado mutável é o
//! [`LogicAccumulator`], explicitamente separado de [`Logic`].
//!
//! ## Logging
//!
//! A fachada emite eventos `tracing` (nível `trace` no despacho, `debug` nas
//! rejeições). A crate não instala subscriber; isso fica com a aplicação.
//!
//! ## Exemplo
//!
//! ```rust
//! use common_sense_logic::{Category, Logic, LogicAccumulator};
//!
//! // Evidência acumulada de três fontes
//! let acc: LogicAccumulator = [
//!     Logic::from(Category::True),
//!     Logic::from(Category::True),
//!     Logic::from(Category::Maybe),
//! ]
//! .into_iter()
//! .collect();
//!
//! let crenca = acc.normalize();
//! assert_eq!(crenca.as_category(), Some(Category::True));
//! assert!(crenca == Category::True);
//! ```

/// Módulo `core`: escalar fuzzy, categorias, vetor lógico e acumulador.
pub mod core;

/// Módulo `dispatch`: fachada polimórfica NOT/AND/OR/normalize.
pub mod dispatch;

/// Módulo `error`: erros da fronteira dinâmica.
pub mod error;

pub use crate::core::{
    Category, Fuzzy, Logic, LogicAccumulator, DISPLAY_PRECISION, FUZZY_FALSE, FUZZY_TRUE,
    NORMALIZATION_TOLERANCE,
};
pub use crate::dispatch::{Shape, Value};
pub use crate::error::{LogicError, Result};
