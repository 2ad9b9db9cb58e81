//! Plain-text rendering of puzzles.

use std::fmt::{self, Display};

use pinquest_core::{GameMode, MathStep, MetaGrid, Operation, Puzzle, PuzzleChain};

const BLANK: &str = "____";

/// A puzzle rendered for `mode`.
///
/// Answers are blanked unless `show_answers` is set. Print modes number every
/// problem and end with boxes for the code; digital modes list chains by the
/// digit they reveal.
#[derive(Debug, Clone, Copy)]
pub struct Worksheet<'a> {
    pub puzzle: &'a Puzzle,
    pub mode: GameMode,
    pub show_answers: bool,
}

impl Worksheet<'_> {
    fn answer(&self, value: u32) -> String {
        if self.show_answers {
            value.to_string()
        } else {
            BLANK.to_owned()
        }
    }

    fn chain_title(&self, index: usize) -> String {
        if self.puzzle.is_meta() {
            let axis = if index % 2 == 0 { "Row" } else { "Column" };
            format!("Digit {} {axis}", index / 2 + 1)
        } else {
            format!("Digit {}", index + 1)
        }
    }

    fn write_chain(&self, f: &mut fmt::Formatter<'_>, chain: &PuzzleChain, number: &mut usize) -> fmt::Result {
        let blank_links = self.mode.is_print() && !self.show_answers && is_linked(chain);
        for (i, step) in chain.steps.iter().enumerate() {
            let left = if blank_links && i > 0 {
                "(previous answer)".to_owned()
            } else {
                step.left.to_string()
            };
            let line = format!("{left} {} {} = {}", step.operator, step.right, self.answer(step.result));
            if self.mode.is_print() {
                *number += 1;
                writeln!(f, "  {number:>2}. {line}")?;
            } else {
                writeln!(f, "  {line}")?;
            }
        }
        if chain.use_last_digit {
            writeln!(f, "  The digit is the ones digit of the last answer.")?;
        }
        Ok(())
    }

    fn write_grid(f: &mut fmt::Formatter<'_>, grid: &MetaGrid) -> fmt::Result {
        writeln!(f, "Grid:")?;
        write!(f, "     ")?;
        for col in 0..grid.cells.len() {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, cells) in grid.cells.iter().enumerate() {
            write!(f, "  {row} |")?;
            for cell in cells {
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }

    fn write_code_boxes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code:")?;
        for digit in self.puzzle.code.digits() {
            if self.show_answers {
                write!(f, " [{digit}]")?;
            } else {
                write!(f, " [ ]")?;
            }
        }
        writeln!(f)
    }
}

/// Returns `true` for an addition/subtraction chain in which every step
/// starts from the previous answer.
///
/// Chains of independent facts may share a number by chance, so chains with
/// multiplication or division are never treated as linked.
fn is_linked(chain: &PuzzleChain) -> bool {
    chain
        .steps
        .iter()
        .all(|step| matches!(step.operator, Operation::Add | Operation::Subtract))
        && chain.steps.windows(2).all(|pair| pair[0].result == pair[1].left)
}

impl Display for Worksheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode.is_print() {
            writeln!(f, "PIN Quest worksheet ({})", self.mode)?;
            writeln!(f)?;
        }
        if let Some(grid) = &self.puzzle.meta {
            writeln!(f, "Each pair of answers gives a row and a column; the grid cell there is the next digit.")?;
            writeln!(f)?;
            Self::write_grid(f, grid)?;
        }

        let mut number = 0;
        for (i, chain) in self.puzzle.chains.iter().enumerate() {
            writeln!(f, "{}:", self.chain_title(i))?;
            self.write_chain(f, chain, &mut number)?;
            writeln!(f)?;
        }

        if self.mode.is_print() || self.show_answers {
            self.write_code_boxes(f)?;
        }
        Ok(())
    }
}

/// A multiplication table drill, one fact per line.
#[derive(Debug, Clone, Copy)]
pub struct TableDrill<'a> {
    pub steps: &'a [MathStep],
    pub show_answers: bool,
}

impl Display for TableDrill<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            let answer = if self.show_answers {
                step.result.to_string()
            } else {
                BLANK.to_owned()
            };
            writeln!(f, "{:>2}. {} {} {} = {answer}", i + 1, step.left, step.operator, step.right)?;
        }
        Ok(())
    }
}
