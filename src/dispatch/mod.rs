//! # Módulo Dispatch: Fachada Polimórfica
//!
//! Um único ponto de entrada para NOT, AND, OR e normalize, qualquer que seja a
//! forma do operando: [`Category`](crate::Category), escalar fuzzy ou
//! [`Logic`](crate::Logic).
//!
//! O operando é o tipo soma [`Value`]; o encaminhamento é um `match` sobre ele.
//! Os erros da fachada (formas incompatíveis, argumento ausente) ficam aqui,
//! e a álgebra das camadas de baixo continua total.
//!
//! ## Exemplo
//!
//! ```rust
//! use common_sense_logic::dispatch::{self, Value};
//! use common_sense_logic::Category;
//!
//! let r = dispatch::and(Category::True, Category::Maybe).unwrap();
//! assert_eq!(r, Value::Category(Category::Maybe));
//!
//! // Formas diferentes não se misturam
//! assert!(dispatch::or(Category::True, 0.5).is_err());
//! ```

/// Sub-módulo com o tipo soma [`Value`] e a leitura de JSON.
pub mod value;

/// Sub-módulo com os operadores polimórficos e [`apply`].
pub mod ops;

pub use ops::{and, apply, normalize, not, or, Operation};
pub use value::{Shape, Value};
