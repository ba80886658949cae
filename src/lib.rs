//! Backend for the agency website: AI mockups and quotes, the chatbot,
//! and the content APIs the frontend reads.

pub mod ai;
pub mod config;
pub mod db;
pub mod error;
pub mod mockup;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod templates;
