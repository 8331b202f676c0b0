//! CareSense - Emotion & Symptom Assessment Pipeline
//!
//! This crate implements the mental-health assessment core of a senior-care
//! companion application: exponential smoothing of per-frame facial-emotion
//! vectors, a weighted symptom questionnaire, severity classification, and
//! recommendation generation, assembled into an immutable report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
