// src/aipanel/clients/mod.rs

pub mod ollama;
