//! Dungeons & Dragons character generation.

use serde::Serialize;

use crate::error::ExerciseError;

/// Hitpoints every character starts with before the constitution modifier.
pub const BASE_HITPOINTS: i32 = 10;

/// A source of six-sided die rolls.
pub trait Dice {
    /// Returns a value in `1..=6`.
    fn roll(&mut self) -> Result<u8, ExerciseError>;
}

/// Dice backed by the operating system's random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsDice;

impl Dice for OsDice {
    fn roll(&mut self) -> Result<u8, ExerciseError> {
        // 252 is the largest multiple of 6 that fits in a byte; bytes above
        // it are redrawn so every face is equally likely.
        loop {
            let mut byte = [0u8; 1];
            getrandom::fill(&mut byte).map_err(|e| ExerciseError::Random(e.to_string()))?;
            if byte[0] < 252 {
                return Ok(byte[0] % 6 + 1);
            }
        }
    }
}

/// Returns the ability modifier for `score`: `floor((score - 10) / 2)`.
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Rolls four dice and sums the highest three.
pub fn ability<D: Dice + ?Sized>(dice: &mut D) -> Result<i32, ExerciseError> {
    let mut rolls = [0u8; 4];
    for roll in rolls.iter_mut() {
        *roll = dice.roll()?;
    }
    rolls.sort_unstable();
    Ok(rolls[1..].iter().map(|&r| i32::from(r)).sum())
}

/// A character's six abilities and derived hitpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Character {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    pub hitpoints: i32,
}

impl Character {
    /// Rolls every ability in order: strength, dexterity, constitution,
    /// intelligence, wisdom, charisma.
    pub fn roll<D: Dice + ?Sized>(dice: &mut D) -> Result<Self, ExerciseError> {
        let strength = ability(dice)?;
        let dexterity = ability(dice)?;
        let constitution = ability(dice)?;
        let intelligence = ability(dice)?;
        let wisdom = ability(dice)?;
        let charisma = ability(dice)?;

        Ok(Character {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
            hitpoints: BASE_HITPOINTS + modifier(constitution),
        })
    }
}
