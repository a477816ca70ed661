// src/noyau/erreur.rs
//
// Erreurs du noyau : trois genres, un seul signal externe ("pas de résultat").

use thiserror::Error;

/// Genre d’erreur (sans le détail), pratique pour l’UI et les tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Structure,
    Depassement,
    PostfixeMalforme,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Rejet avant tout parsing (entrée vide, bords, parité des parenthèses,
    /// motifs interdits, caractère inattendu).
    #[error("expression invalide : {0}")]
    Structure(String),

    /// Résultat non fini (division par zéro comprise).
    #[error("dépassement numérique (résultat infini ou indéterminé)")]
    Depassement,

    /// Postfixe incohérent : pile vide/trop pleine, parenthèses mal imbriquées,
    /// littéral illisible.
    #[error("postfixe malformé : {0}")]
    PostfixeMalforme(String),
}

impl ErreurCalcul {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurCalcul::Structure(_) => GenreErreur::Structure,
            ErreurCalcul::Depassement => GenreErreur::Depassement,
            ErreurCalcul::PostfixeMalforme(_) => GenreErreur::PostfixeMalforme,
        }
    }

    pub(crate) fn structure(msg: impl Into<String>) -> Self {
        ErreurCalcul::Structure(msg.into())
    }

    pub(crate) fn malforme(msg: impl Into<String>) -> Self {
        ErreurCalcul::PostfixeMalforme(msg.into())
    }
}

impl GenreErreur {
    /// Libellé court (affichage UI).
    pub fn libelle(self) -> &'static str {
        match self {
            GenreErreur::Structure => "structure",
            GenreErreur::Depassement => "dépassement",
            GenreErreur::PostfixeMalforme => "postfixe malformé",
        }
    }
}
