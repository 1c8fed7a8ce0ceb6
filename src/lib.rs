//! felony-fitness - Nutrition analysis and training program generation
//!
//! Pure, deterministic calculations behind the Felony Fitness tracker:
//! weekly nutrient deficiency reports and multi-day workout splits.

pub mod error;
pub mod exercises;
pub mod nutrition;
pub mod routines;

pub use error::{FitnessError, Result};
pub use nutrition::{NutritionReport, analyze_weekly_nutrition};
pub use routines::{GeneratedProgram, GeneratorSettings, generate_program, generate_routines};
