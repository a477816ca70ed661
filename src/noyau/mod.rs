//! Noyau évaluateur (f64)
//!
//! Organisation interne :
//! - erreur.rs     : genres d’erreur (structure / dépassement / postfixe malformé)
//! - validation.rs : contrôle de surface avant parsing
//! - jetons.rs     : tokenisation
//! - postfixe.rs   : shunting-yard (infixe -> postfixe)
//! - eval.rs       : pile f64 + pipeline complet
//! - format.rs     : entier exact ou décimal le plus court

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod postfixe;
pub mod validation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, GenreErreur};
pub use eval::{evaluer, evaluer_avec_demarche, evaluer_option, Demarche};
