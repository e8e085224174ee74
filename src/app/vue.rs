// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé tactile : gros boutons, une touche = un appel moteur
// - Échec : étiquette rouge + alerte modale, le pavé est gelé tant que
//   l'utilisateur n'a pas acquitté (puis l'écran revient à "0")
//
// Note :
// - L'écran n'est PAS éditable : l'expression ne se construit qu'au
//   clavier visuel, le tampon canonique reste propriété du moteur.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Fonction, Op, Parenthese};

/// Touche du pavé (une variante par famille d'événement moteur).
#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(u8),
    Point,
    Paren(Parenthese),
    Operation(Op),
    Fn(Fonction),
    Egal,
    Effacer,
    Retour,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);

                // pavé gelé tant qu'une alerte attend son acquittement
                let actif = self.alerte.is_none();
                ui.add_enabled_ui(actif, |ui| {
                    self.ui_pave_scientifique(ui);
                    ui.add_space(6.0);
                    self.ui_pave_principal(ui);
                });
            });

        self.ui_alerte(ui);
    }

    /* ------------------------ écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                let couleur = if self.en_erreur {
                    ui.visuals().error_fg_color
                } else {
                    ui.visuals().strong_text_color()
                };

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.ecran)
                            .monospace()
                            .size(28.0)
                            .color(couleur),
                    );
                });
            });

        // Config collaborateur : séparateur décimal (cosmétique seulement)
        ui.horizontal(|ui| {
            ui.label("Séparateur :");
            if ui
                .selectable_label(self.separateur == '.', "point")
                .clicked()
            {
                self.changer_separateur('.');
            }
            if ui
                .selectable_label(self.separateur == ',', "virgule")
                .clicked()
            {
                self.changer_separateur(',');
            }
        });
    }

    /* ------------------------ pavés ------------------------ */

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_sci")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "x²", Touche::Fn(Fonction::Carre));
                self.touche(ui, "²√x", Touche::Fn(Fonction::RacineCarree));
                self.touche(ui, "¹⁄ₓ", Touche::Fn(Fonction::Inverse));
                self.touche(ui, "n!", Touche::Fn(Fonction::Factorielle));
                self.touche(ui, "xʸ", Touche::Operation(Op::Puissance));
                ui.end_row();

                self.touche(ui, "eˣ", Touche::Fn(Fonction::Exp));
                self.touche(ui, "10ˣ", Touche::Fn(Fonction::DixPuissance));
                self.touche(ui, "sin", Touche::Fn(Fonction::Sin));
                self.touche(ui, "cos", Touche::Fn(Fonction::Cos));
                self.touche(ui, "tan", Touche::Fn(Fonction::Tan));
                ui.end_row();

                self.touche(ui, "ln", Touche::Fn(Fonction::Ln));
                self.touche(ui, "log₁₀", Touche::Fn(Fonction::Log10));
                self.touche(ui, "(", Touche::Paren(Parenthese::Ouvrante));
                self.touche(ui, ")", Touche::Paren(Parenthese::Fermante));
                self.touche(ui, "mod", Touche::Operation(Op::Modulo));
                ui.end_row();
            });
    }

    fn ui_pave_principal(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_principal")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "C", Touche::Effacer);
                self.touche(ui, "⌫", Touche::Retour);
                self.touche(ui, "%", Touche::Fn(Fonction::Pourcent));
                self.touche(ui, "÷", Touche::Operation(Op::Division));
                ui.end_row();

                self.touche(ui, "7", Touche::Chiffre(7));
                self.touche(ui, "8", Touche::Chiffre(8));
                self.touche(ui, "9", Touche::Chiffre(9));
                self.touche(ui, "×", Touche::Operation(Op::Fois));
                ui.end_row();

                self.touche(ui, "4", Touche::Chiffre(4));
                self.touche(ui, "5", Touche::Chiffre(5));
                self.touche(ui, "6", Touche::Chiffre(6));
                self.touche(ui, "–", Touche::Operation(Op::Moins));
                ui.end_row();

                self.touche(ui, "1", Touche::Chiffre(1));
                self.touche(ui, "2", Touche::Chiffre(2));
                self.touche(ui, "3", Touche::Chiffre(3));
                self.touche(ui, "+", Touche::Operation(Op::Plus));
                ui.end_row();

                self.touche(ui, "±", Touche::Fn(Fonction::Negation));
                self.touche(ui, "0", Touche::Chiffre(0));
                let sep = self.separateur.to_string();
                self.touche(ui, &sep, Touche::Point);
                self.touche(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    /// Un bouton = un événement moteur, le rendu retourne dans l'état UI.
    fn touche(&mut self, ui: &mut egui::Ui, label: &str, t: Touche) {
        let resp = ui.add_sized([52.0, 36.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        let a = match t {
            Touche::Chiffre(d) => self.moteur.chiffre(d),
            Touche::Point => self.moteur.point(),
            Touche::Paren(p) => self.moteur.parenthese(p),
            Touche::Operation(op) => self.moteur.operateur(op),
            Touche::Fn(f) => self.moteur.fonction(f),
            Touche::Egal => self.moteur.egal(),
            Touche::Effacer => self.moteur.effacer(),
            Touche::Retour => self.moteur.retour(),
        };
        self.deposer(a);
    }

    /* ------------------------ alerte modale ------------------------ */

    fn ui_alerte(&mut self, ui: &mut egui::Ui) {
        let Some(alerte) = self.alerte.clone() else {
            return;
        };

        let mut acquitte = false;

        egui::Window::new("Erreur")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ui.ctx(), |ui| {
                ui.label(&alerte.message);
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.add_sized([72.0, 28.0], egui::Button::new("OK")).clicked() {
                        acquitte = true;
                    }
                });
            });

        if acquitte {
            self.acquitter();
        }
    }
}
