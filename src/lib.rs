//! Calculatrice postfixe : expressions infixes `+ - * /` et parenthèses,
//! évaluées en f64 via une conversion postfixe.

pub mod noyau;

pub use noyau::{evaluer, evaluer_option, ErreurCalcul, GenreErreur};
