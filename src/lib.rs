//! Ride Concierge - Conversational Booking Assistant
//!
//! This crate implements a slot-filling conversation flow that collects a
//! rider profile one question at a time, falling back to knowledge-base
//! lookup whenever no booking sequence is in progress.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
