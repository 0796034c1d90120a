// src/data_input/mod.rs

pub mod curve_data;
pub mod curve_parser;
