//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche, historique)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné.

use std::collections::VecDeque;

/// Garde-fou : nombre d’entrées conservées dans l’historique.
pub const HISTORIQUE_MAX: usize = 20;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub postfixe: String,
    pub genre_erreur: String,
}

/// Une évaluation passée : expression + sortie (résultat ou message d’erreur).
#[derive(Clone, Debug, PartialEq)]
pub struct Ligne {
    pub expression: String,
    pub sortie: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat formaté
    pub erreur: String,   // message d’erreur (si validation/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- historique (plus récent en tête) ---
    pub historique: VecDeque<Ligne>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: VecDeque::with_capacity(HISTORIQUE_MAX),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère utile (et les espaces qui traînent).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>, demarche: Demarche) {
        self.erreur = msg.into();
        self.demarche = demarche;
        self.pousser_historique(self.erreur.clone());
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (résultat + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.pousser_historique(self.resultat.clone());
        self.focus_entree = true;
    }

    /// Remet une expression de l’historique dans l’entrée.
    pub fn rappeler(&mut self, index: usize) {
        if let Some(l) = self.historique.get(index) {
            self.entree = l.expression.clone();
        }
        self.focus_entree = true;
    }

    fn pousser_historique(&mut self, sortie: String) {
        let expression = self.entree.trim().to_string();
        if expression.is_empty() {
            return;
        }
        self.historique.push_front(Ligne { expression, sortie });
        self.historique.truncate(HISTORIQUE_MAX);
    }
}
