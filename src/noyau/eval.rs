//! Noyau — évaluation (pipeline réel)
//!
//! validation -> jetons -> postfixe -> pile f64 -> formatage
//!
//! Aucun état entre deux appels : chaque évaluation possède ses piles.

use tracing::{debug, trace};

use super::erreur::ErreurCalcul;
use super::format::formater_resultat;
use super::jetons::{format_tokens, tokenize, Tok};
use super::postfixe::{lire_postfixe, to_postfix};
use super::validation::valider;

#[derive(Clone, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub postfixe: String,
    pub resultat: Result<String, ErreurCalcul>,
}

/// Évalue une suite postfixe avec une pile de f64.
///
/// Division par zéro : sémantique IEEE (±inf, NaN), détectée un cran plus haut.
pub fn evaluer_postfixe(postfixe: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(postfixe.len());

    for tok in postfixe {
        match tok {
            Tok::Num(lit) => {
                let v = lit
                    .parse::<f64>()
                    .map_err(|_| ErreurCalcul::malforme(format!("littéral illisible \"{lit}\"")))?;
                pile.push(v);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                // a = opérande droite (dernier empilé), b = gauche
                let a = pile.pop().ok_or_else(|| operande_manquante(tok))?;
                let b = pile.pop().ok_or_else(|| operande_manquante(tok))?;

                let r = match tok {
                    Tok::Plus => b + a,
                    Tok::Minus => b - a,
                    Tok::Star => b * a,
                    _ => b / a,
                };
                trace!(b, a, r, "opération");
                pile.push(r);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalcul::malforme("parenthèse inattendue en postfixe"))
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        [] => Err(ErreurCalcul::malforme("aucune valeur")),
        reste => Err(ErreurCalcul::malforme(format!(
            "{} valeurs restantes sur la pile",
            reste.len()
        ))),
    }
}

fn operande_manquante(tok: &Tok) -> ErreurCalcul {
    ErreurCalcul::malforme(format!(
        "opérande manquante pour '{}'",
        format_tokens(std::slice::from_ref(tok))
    ))
}

/// Texte postfixe ("1 2 +") -> valeur.
pub fn evaluer_postfixe_texte(texte: &str) -> Result<f64, ErreurCalcul> {
    let jetons = lire_postfixe(texte)?;
    evaluer_postfixe(&jetons)
}

/// API publique : évalue une expression infixe et retourne le résultat formaté.
pub fn evaluer(expression: &str) -> Result<String, ErreurCalcul> {
    evaluer_avec_demarche(expression).resultat
}

/// Façade Option : None pour toute erreur.
pub fn evaluer_option(expression: &str) -> Option<String> {
    evaluer(expression).ok()
}

/// Comme `evaluer`, mais garde les étapes intermédiaires (pour l’UI).
pub fn evaluer_avec_demarche(expression: &str) -> Demarche {
    let mut d = Demarche {
        jetons: String::new(),
        postfixe: String::new(),
        resultat: Err(ErreurCalcul::structure("non évaluée")),
    };
    d.resultat = pipeline(expression, &mut d);

    if let Err(e) = &d.resultat {
        debug!(expression, erreur = %e, "expression rejetée");
    }
    d
}

fn pipeline(expression: &str, d: &mut Demarche) -> Result<String, ErreurCalcul> {
    // 1) Validation de surface
    valider(expression)?;

    // 2) Jetons
    let jetons = tokenize(expression)?;
    d.jetons = format_tokens(&jetons);

    // 3) Postfixe
    let postfixe = to_postfix(&jetons)?;
    d.postfixe = format_tokens(&postfixe);
    debug!(postfixe = %d.postfixe, "conversion postfixe");

    // 4) Pile
    let v = evaluer_postfixe(&postfixe)?;
    if !v.is_finite() {
        return Err(ErreurCalcul::Depassement);
    }

    // 5) Formatage
    Ok(formater_resultat(v))
}
