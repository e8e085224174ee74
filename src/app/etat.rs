//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de la calculatrice côté présentation (texte de
//! l'écran, drapeau d'erreur, alerte modale en attente, séparateur choisi)
//! et relayer chaque touche vers le moteur.
//!
//! Contrats :
//! - Aucune logique d'évaluation ici : le moteur décide, l'UI affiche.
//! - L'alerte modale reproduit le flux original : l'étiquette d'échec
//!   reste à l'écran (en rouge) tant que l'utilisateur n'a pas acquitté,
//!   puis l'écran revient à la sentinelle. Le moteur, lui, a déjà vidé
//!   son tampon au moment de l'échec.

use crate::noyau::saisie::SENTINELLE;
use crate::noyau::{Affichage, Moteur};

/// Alerte modale en attente d'acquittement.
#[derive(Clone, Debug)]
pub struct Alerte {
    pub message: String,
}

#[derive(Debug)]
pub struct AppCalc {
    // --- moteur (unique propriétaire du tampon d'expression) ---
    pub moteur: Moteur,

    // --- écran ---
    pub ecran: String,
    pub en_erreur: bool, // style rouge tant que l'étiquette d'échec est affichée

    // --- alerte modale ---
    pub alerte: Option<Alerte>,

    // --- config collaborateur : séparateur décimal (cosmétique) ---
    pub separateur: char,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::default(),
            ecran: SENTINELLE.to_string(),
            en_erreur: false,
            alerte: None,
            separateur: '.',
        }
    }
}

impl AppCalc {
    /// Dépose le rendu d'une touche dans l'état écran.
    /// Sur échec : étiquette rouge + alerte modale à acquitter.
    pub fn deposer(&mut self, a: Affichage) {
        self.ecran = a.texte;
        self.en_erreur = a.est_erreur;

        if let Some(message) = a.message {
            self.alerte = Some(Alerte { message });
        }
    }

    /// Acquittement de l'alerte : l'écran revient à la sentinelle.
    pub fn acquitter(&mut self) {
        self.alerte = None;
        self.en_erreur = false;
        self.ecran = SENTINELLE.to_string();
    }

    /// Change le séparateur décimal et rafraîchit l'écran.
    pub fn changer_separateur(&mut self, sep: char) {
        self.separateur = sep;
        let a = self.moteur.separateur(sep);
        self.deposer(a);
    }

    /// C : remise à zéro de l'expression en cours.
    pub fn effacer(&mut self) {
        let a = self.moteur.effacer();
        self.deposer(a);
    }
}
