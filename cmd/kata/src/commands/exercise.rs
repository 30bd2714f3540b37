//! One command per exercise. Each prints its input and result through the
//! configured output format.

use clap::Args;
use kata_exercises::{
    acronym, armstrong, crypto_square, darts, difference_of_squares, dnd_character,
    eliuds_eggs, resistor_color, two_fer, Character, CustomSet, OsDice,
};
use serde_json::json;

use super::{get_config, get_output};
use crate::Cli;

fn emit(cli: &Cli, value: serde_json::Value) -> anyhow::Result<()> {
    let cfg = get_config(cli)?;
    get_output(cli, &cfg).write(&value)
}

#[derive(Args)]
pub struct AcronymCommand {
    /// Phrase (words may be passed as separate arguments)
    #[arg(required = true)]
    phrase: Vec<String>,
}

impl AcronymCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let phrase = self.phrase.join(" ");
        let result = acronym::generate(&phrase);
        emit(cli, json!({ "phrase": phrase, "acronym": result }))
    }
}

#[derive(Args)]
pub struct ArmstrongCommand {
    number: u32,
}

impl ArmstrongCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let result = armstrong::is_armstrong_number(self.number);
        emit(cli, json!({ "number": self.number, "armstrong": result }))
    }
}

#[derive(Args)]
pub struct CryptoSquareCommand {
    /// Plaintext (words may be passed as separate arguments)
    #[arg(required = true)]
    text: Vec<String>,
}

impl CryptoSquareCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let text = self.text.join(" ");
        let ciphertext = crypto_square::encrypt(&text);
        emit(cli, json!({ "plaintext": text, "ciphertext": ciphertext }))
    }
}

#[derive(Args)]
pub struct DartsCommand {
    #[arg(allow_negative_numbers = true)]
    x: f64,
    #[arg(allow_negative_numbers = true)]
    y: f64,
}

impl DartsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let score = darts::score(self.x, self.y);
        emit(cli, json!({ "x": self.x, "y": self.y, "score": score }))
    }
}

#[derive(Args)]
pub struct SquaresCommand {
    /// Upper bound of 1..=n
    n: u64,
}

impl SquaresCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let overflow = || anyhow::anyhow!("n = {} overflows u64", self.n);
        let square_of_sum = difference_of_squares::square_of_sum(self.n).ok_or_else(overflow)?;
        let sum_of_squares = difference_of_squares::sum_of_squares(self.n).ok_or_else(overflow)?;
        emit(
            cli,
            json!({
                "n": self.n,
                "square_of_sum": square_of_sum,
                "sum_of_squares": sum_of_squares,
                "difference": square_of_sum - sum_of_squares,
            }),
        )
    }
}

#[derive(Args)]
pub struct DndCommand {
    /// Number of characters to roll
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

impl DndCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let mut dice = OsDice;
        let characters = (0..self.count)
            .map(|_| Character::roll(&mut dice))
            .collect::<Result<Vec<_>, _>>()?;

        let rolled: Vec<_> = characters
            .iter()
            .map(|c| {
                json!({
                    "abilities": c,
                    "constitution_modifier": dnd_character::modifier(c.constitution),
                })
            })
            .collect();
        emit(cli, json!({ "characters": rolled }))
    }
}

#[derive(Args)]
pub struct EggsCommand {
    /// Display value
    value: u32,
}

impl EggsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let eggs = eliuds_eggs::egg_count(self.value);
        emit(cli, json!({ "value": self.value, "binary": format!("{:b}", self.value), "eggs": eggs }))
    }
}

#[derive(Args)]
pub struct ResistorCommand {
    /// Band colors, e.g. `brown black`
    #[arg(required = true)]
    colors: Vec<String>,
}

impl ResistorCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let value = resistor_color::decoded_value(&self.colors)?;
        emit(cli, json!({ "colors": self.colors, "value": value }))
    }
}

#[derive(Args)]
pub struct TwoFerCommand {
    /// Name (defaults to "you")
    name: Option<String>,
}

impl TwoFerCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let message = two_fer::two_fer(self.name.as_deref());
        emit(cli, json!({ "message": message }))
    }
}

#[derive(Args)]
pub struct SetCommand {
    /// First set, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    left: Vec<i64>,

    /// Second set, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    right: Vec<i64>,
}

impl SetCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let left = CustomSet::new(&self.left);
        let right = CustomSet::new(&self.right);
        let items = |s: &CustomSet<i64>| s.iter().copied().collect::<Vec<_>>();

        emit(
            cli,
            json!({
                "left": items(&left),
                "right": items(&right),
                "union": items(&left.union(&right)),
                "intersection": items(&left.intersection(&right)),
                "difference": items(&left.difference(&right)),
                "subset": left.is_subset(&right),
                "disjoint": left.is_disjoint(&right),
                "equal": left == right,
            }),
        )
    }
}
