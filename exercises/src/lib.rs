//! Small, independent coding exercises.
//!
//! Every module is self-contained and stateless apart from [`CustomSet`]:
//!
//! - [`acronym`]: initials of a phrase
//! - [`armstrong`]: narcissistic number check
//! - [`crypto_square`]: column-transposition cipher
//! - [`custom_set`]: a mathematical set
//! - [`darts`]: dartboard scoring
//! - [`difference_of_squares`]: `(Σn)² - Σn²`
//! - [`dnd_character`]: random ability scores
//! - [`eliuds_eggs`]: bit counting
//! - [`resistor_color`]: two-band resistor values
//! - [`two_fer`]: string templating
//!
//! # Example
//!
//! ```rust
//! use kata_exercises::{acronym, crypto_square, resistor_color};
//!
//! assert_eq!(acronym::generate("Portable Network Graphics"), "PNG");
//! assert_eq!(crypto_square::encrypt("Chill out."), "clu hlt io ");
//! assert_eq!(resistor_color::decoded_value(&["brown", "black"]).unwrap(), 10);
//! ```

pub mod acronym;
pub mod armstrong;
pub mod crypto_square;
pub mod custom_set;
pub mod darts;
pub mod difference_of_squares;
pub mod dnd_character;
pub mod eliuds_eggs;
mod error;
pub mod resistor_color;
pub mod two_fer;

pub use custom_set::CustomSet;
pub use dnd_character::{Character, Dice, OsDice};
pub use error::ExerciseError;
