// src/noyau/moteur.rs
//
// Façade clavier du moteur : une opération par touche, chacune renvoie la
// nouvelle valeur d'affichage (+ drapeau d'erreur + catégorie pour le
// style côté collaborateur).
//
// Contrats :
// - synchrone : chaque touche va au bout avant la suivante, aucun état
//   partagé entre threads ;
// - tout échec (Indéfini / Indéterminé / syntaxe) VIDE le tampon : la
//   touche suivante repart d'une expression neuve ;
// - les erreurs de syntaxe internes sont rabattues sur l'étiquette
//   Indéfini (deux catégories visibles seulement) ;
// - le séparateur décimal fourni par le collaborateur est purement
//   cosmétique : l'évaluation travaille toujours sur la forme canonique
//   à point.

use super::fonctions::appliquer;
use super::format::formater_nombre;
use super::saisie::Saisie;
use super::{evaluer_expression, Fonction, Genre, Op, Parenthese, Verdict};

/// Étiquettes d'échec affichées (remplaçables comme la sentinelle "0").
pub const ETIQUETTE_INDEFINI: &str = "Indéfini";
pub const ETIQUETTE_INDETERMINE: &str = "Indéterminé";

/// Valeur de rendu renvoyée au collaborateur après chaque touche.
#[derive(Clone, Debug)]
pub struct Affichage {
    pub texte: String,
    pub est_erreur: bool,
    pub message: Option<String>,
    pub genre: Option<Genre>,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    saisie: Saisie,
    separateur: char,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            saisie: Saisie::new(),
            separateur: '.',
        }
    }
}

impl Moteur {
    pub fn new(separateur: char) -> Self {
        Self {
            saisie: Saisie::new(),
            separateur,
        }
    }

    /// Change le séparateur décimal d'affichage (config collaborateur).
    pub fn separateur(&mut self, sep: char) -> Affichage {
        self.separateur = sep;
        self.rendre()
    }

    /* ------------------------ touches de saisie ------------------------ */

    pub fn chiffre(&mut self, d: u8) -> Affichage {
        debug_assert!(d <= 9);
        self.saisie.chiffre((b'0' + d) as char);
        self.rendre()
    }

    pub fn point(&mut self) -> Affichage {
        self.saisie.point();
        self.rendre()
    }

    pub fn parenthese(&mut self, p: Parenthese) -> Affichage {
        self.saisie.parenthese(p);
        self.rendre()
    }

    pub fn operateur(&mut self, op: Op) -> Affichage {
        self.saisie.operateur(op);
        self.rendre()
    }

    pub fn retour(&mut self) -> Affichage {
        self.saisie.retour();
        self.rendre()
    }

    pub fn effacer(&mut self) -> Affichage {
        self.saisie.effacer();
        self.rendre()
    }

    /* ------------------------ évaluation ------------------------ */

    /// Touche fonction : s'applique au run numérique de queue (forme
    /// composable) et le remplace par le résultat. Si la saisie ne se
    /// termine pas par un nombre, la touche est sans effet.
    pub fn fonction(&mut self, f: Fonction) -> Affichage {
        let v = if self.saisie.est_vide() {
            0.0 // la sentinelle "0" est la valeur affichée
        } else {
            match self.saisie.nombre_de_queue() {
                Some(v) => v,
                None => return self.rendre(),
            }
        };

        match appliquer(f, v) {
            Verdict::Nombre(x) => {
                self.saisie.remplacer_queue(&formater_nombre(x));
                self.rendre()
            }
            Verdict::Indefini => self.echec(Genre::Indefini, message_fonction(f)),
            Verdict::Indetermine => self.echec(
                Genre::Indetermine,
                "Le résultat est indéterminé (débordement).".to_string(),
            ),
        }
    }

    /// Touche "=" : évalue la forme canonique du tampon.
    /// Sans effet sur tampon vide (pas d'échec pour une action nulle).
    pub fn egal(&mut self) -> Affichage {
        if self.saisie.est_vide() {
            return self.rendre();
        }

        let canonique = self.saisie.canonique();
        match evaluer_expression(&canonique, '.') {
            Ok(Verdict::Nombre(x)) => {
                self.saisie.tout_remplacer(&formater_nombre(x));
                self.rendre()
            }
            Ok(Verdict::Indefini) => self.echec(
                Genre::Indefini,
                "Le résultat est indéfini (ex. division par zéro).".to_string(),
            ),
            Ok(Verdict::Indetermine) => self.echec(
                Genre::Indetermine,
                "0/0, 0%0 ou résultat infini : forme indéterminée.".to_string(),
            ),
            Err(msg) => self.echec(Genre::Indefini, format!("Expression invalide : {msg}")),
        }
    }

    /* ------------------------ rendu ------------------------ */

    /// Valeur d'affichage courante (état sain).
    pub fn rendre(&self) -> Affichage {
        Affichage {
            texte: self.saisie.affichage(self.separateur),
            est_erreur: false,
            message: None,
            genre: None,
        }
    }

    /// Échec classé : le tampon est vidé immédiatement, l'étiquette part
    /// au collaborateur qui la montre jusqu'à acquittement.
    fn echec(&mut self, genre: Genre, message: String) -> Affichage {
        self.saisie.effacer();
        let texte = match genre {
            Genre::Indefini => ETIQUETTE_INDEFINI,
            Genre::Indetermine => ETIQUETTE_INDETERMINE,
        };
        Affichage {
            texte: texte.to_string(),
            est_erreur: true,
            message: Some(message),
            genre: Some(genre),
        }
    }
}

fn message_fonction(f: Fonction) -> String {
    use Fonction::*;
    match f {
        Inverse => "Division par zéro : l'inverse de 0 est indéfini.",
        Factorielle => "La factorielle d'un nombre négatif est indéfinie.",
        Tan => "tan(90° + k·180°) est indéfini (asymptote verticale).",
        Ln => "ln exige un argument strictement positif.",
        Log10 => "log₁₀ exige un argument strictement positif.",
        RacineCarree => "La racine carrée d'un nombre négatif est indéfinie.",
        _ => "Le résultat est indéfini.",
    }
    .to_string()
}
