// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Littéral numérique gardé tel quel ("2." reste "2.")
    Num(String),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl Tok {
    /// Priorité d’opérateur binaire ; None pour tout le reste.
    pub fn priorite(&self) -> Option<u8> {
        match self {
            Tok::Plus | Tok::Minus => Some(2),
            Tok::Star | Tok::Slash => Some(3),
            _ => None,
        }
    }

    fn texte(&self) -> &str {
        match self {
            Tok::Num(lit) => lit.as_str(),
            Tok::Plus => "+",
            Tok::Minus => "-",
            Tok::Star => "*",
            Tok::Slash => "/",
            Tok::LPar => "(",
            Tok::RPar => ")",
        }
    }
}

fn est_car_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux faits de chiffres et de '.' (ex: 12, 4.5, 2., .5)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés
/// Tout autre caractère est une erreur de structure.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            _ if est_car_nombre(c) => {
                let start = i;
                while i < chars.len() && est_car_nombre(chars[i]) {
                    i += 1;
                }
                out.push(Tok::Num(chars[start..i].iter().collect()));
                continue;
            }
            _ => {
                return Err(ErreurCalcul::structure(format!(
                    "caractère inattendu '{c}' (position {i})"
                )))
            }
        };

        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Liste de jetons en texte, séparés par un espace.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::texte).collect::<Vec<_>>().join(" ")
}
