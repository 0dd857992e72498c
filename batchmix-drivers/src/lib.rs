//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in batchmix-core and batchmix-display, written against the
//! `embedded-hal` 1.0 digital and delay traits:
//!
//! - Operator switches (active-low inputs with pull-ups)
//! - Motor relay (active-high or active-low)
//! - HD44780 character LCD in 4-bit mode

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod motor;
