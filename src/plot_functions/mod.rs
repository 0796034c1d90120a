// src/plot_functions/mod.rs

pub mod plot_curve;
