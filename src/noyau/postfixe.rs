// src/noyau/postfixe.rs
//
// Shunting-yard : jetons infixes -> postfixe (notation polonaise inversée)
//
// Règles:
// - Num : sortie directe
// - '(' : empilé, sert de barrière
// - + - * / : dépile tant que le sommet est un opérateur de priorité >= (gauche à droite)
// - ')' : dépile jusqu’à '(' (la parenthèse est jetée)
// - fin : vide la pile
//
// Pas de moins unaire : "-5" donne "5 -", qui échoue à l’évaluation (pile vide).

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize, Tok};

/// Convertit une suite de jetons infixes en postfixe.
///
/// Exemple:
///   tokens:  ( 1 + 38 ) * 4.5 - 1 / 2.
///   postfixe: 1 38 + 4.5 * 1 2. / -
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(op) => out.push(op),
                    None => {
                        return Err(ErreurCalcul::malforme(
                            "parenthèse fermante sans ouvrante",
                        ))
                    }
                }
            },

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let p_tok = tok.priorite();
                while let Some(top) = ops.last() {
                    // '(' n’a pas de priorité d’opérateur : barrière
                    match top.priorite() {
                        Some(p_top) if Some(p_top) >= p_tok => {
                            if let Some(op) = ops.pop() {
                                out.push(op);
                            }
                        }
                        _ => break,
                    }
                }
                ops.push(tok);
            }
        }
    }

    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::malforme("parenthèse ouvrante non fermée"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Expression infixe (déjà validée) -> texte postfixe, jetons séparés par un espace.
pub fn vers_postfixe(expression: &str) -> Result<String, ErreurCalcul> {
    let jetons = tokenize(expression)?;
    let postfixe = to_postfix(&jetons)?;
    Ok(format_tokens(&postfixe))
}

/// Relit un texte postfixe (celui de `vers_postfixe`) en jetons.
/// Les parenthèses n’ont rien à faire en postfixe : refusées.
pub fn lire_postfixe(texte: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let jetons = tokenize(texte)?;
    if jetons.iter().any(|t| matches!(t, Tok::LPar | Tok::RPar)) {
        return Err(ErreurCalcul::malforme("parenthèse inattendue en postfixe"));
    }
    Ok(jetons)
}
