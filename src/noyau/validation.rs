// src/noyau/validation.rs
//
// Validation "faible" avant parsing.
// Contrat : ne regarde que les bords, la parité des parenthèses et quelques motifs interdits.
// L’imbrication des parenthèses et les caractères hors alphabet sont traités plus loin
// (jetons.rs / postfixe.rs).

use super::erreur::ErreurCalcul;

/// Opérateurs interdits en première position ('-' accepté : pas de cas spécial unaire ici).
const INTERDITS_DEBUT: [char; 3] = ['+', '*', '/'];

/// Opérateurs interdits en dernière position.
const INTERDITS_FIN: [char; 4] = ['+', '-', '*', '/'];

const MOTIFS_INTERDITS: [&str; 6] = [",", "++", "--", "**", "//", ".."];

/// Vérifie la structure de surface d’une expression.
pub fn valider(expression: &str) -> Result<(), ErreurCalcul> {
    let s = expression.trim();

    let (Some(premier), Some(dernier)) = (s.chars().next(), s.chars().next_back()) else {
        return Err(ErreurCalcul::structure("entrée vide"));
    };

    if INTERDITS_DEBUT.contains(&premier) {
        return Err(ErreurCalcul::structure(format!(
            "commence par l’opérateur '{premier}'"
        )));
    }
    if INTERDITS_FIN.contains(&dernier) {
        return Err(ErreurCalcul::structure(format!(
            "se termine par l’opérateur '{dernier}'"
        )));
    }

    let nb_parentheses = s.chars().filter(|c| matches!(c, '(' | ')')).count();
    if nb_parentheses % 2 != 0 {
        return Err(ErreurCalcul::structure(format!(
            "nombre de parenthèses impair ({nb_parentheses})"
        )));
    }

    if let Some(motif) = MOTIFS_INTERDITS.iter().find(|m| s.contains(**m)) {
        return Err(ErreurCalcul::structure(format!("motif interdit \"{motif}\"")));
    }

    Ok(())
}

pub fn est_valide(expression: &str) -> bool {
    valider(expression).is_ok()
}
