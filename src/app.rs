// src/app.rs
//
// Calculatrice scientifique: module App (côté appelant)
// ----------------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + reglages.rs)
// - Ré-exporter Session / Reglages pour le binaire
//
// Le noyau ne garde aucun état : Ans, l'expression en cours et les réglages vivent ici.

pub mod etat;
pub mod reglages;

pub use etat::{DemandeTuteur, Session, REQUETE_PAR_DEFAUT};
pub use reglages::Reglages;
