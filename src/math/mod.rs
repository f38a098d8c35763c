//! Math utilities and types for the simulation.
//!
//! This module provides the vector type used throughout the maze and NPC
//! systems. Types are designed to be compatible with GPU memory layouts so a
//! presentation layer can consume positions directly.

pub mod vec;
