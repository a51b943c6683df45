//! Calculatrice scientifique : noyau d'évaluation (pur) + état de session.

pub mod app;
pub mod noyau;
