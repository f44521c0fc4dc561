// src/app.rs
//
// Calculatrice pourcent — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + affichage.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en Touche (Enter/= calcule, Backspace, Escape = C)

pub mod affichage;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches = ctx.input(|i| touches_clavier(&i.events));
        for t in touches {
            self.appliquer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événements clavier de la frame -> touches de la calculatrice.
fn touches_clavier(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();

    for ev in events {
        match ev {
            egui::Event::Text(texte) => {
                out.extend(texte.chars().filter_map(Touche::depuis_caractere));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Touche::Egal),
                egui::Key::Backspace => out.push(Touche::Retour),
                egui::Key::Escape => out.push(Touche::Clear),
                _ => {}
            },
            _ => {}
        }
    }

    out
}
