// src/noyau/format.rs

use num_bigint::BigInt;
use num_traits::FromPrimitive;

/// Formate un résultat f64 (supposé fini):
/// - valeur entière : entier exact, sans '.' ni zéros de queue ("-0" devient "0")
/// - sinon : représentation décimale la plus courte qui relit la même valeur
pub fn formater_resultat(v: f64) -> String {
    if v == v.trunc() {
        // f64 entier et fini => toujours représentable en BigInt
        if let Some(n) = BigInt::from_f64(v) {
            return n.to_string();
        }
    }
    format!("{v}")
}
