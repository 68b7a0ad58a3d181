//! Leave-request management backend.
//!
//! Employees submit, view, edit, and cancel time-off requests; managers
//! review a FIFO pending queue and approve or reject with comments, with
//! email notifications on outcome. The lifecycle engine in
//! [`service::leave`] owns the state machine; [`calendar`] computes the
//! chargeable business days.

pub mod api;
pub mod auth;
pub mod calendar;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;
pub mod utils;
