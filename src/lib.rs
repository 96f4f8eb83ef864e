//! Core of a neighbour-to-neighbour rental marketplace: the listing
//! catalogue and its browse pipeline, booking totals and flow, listing
//! drafts with AI-assisted copy, and the user profile.

pub mod assist;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod listing_draft;
pub mod models;
pub mod query;
