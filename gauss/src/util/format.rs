use std::fmt::Display;
use itertools::Itertools;

const CELL_WIDTH: usize = 8;

fn cell<D>(d: D) -> String 
where D: Display { 
    let s = d.to_string();
    let pad = CELL_WIDTH.saturating_sub(s.chars().count()).max(1);
    format!("{}{s}", " ".repeat(pad))
}

/// Lays out rows of entries, each right-aligned in a cell of width 8 
/// and separated by at least one space.
pub fn grid<I, J, D>(rows: I) -> String
where 
    I: IntoIterator<Item = J>,
    J: IntoIterator<Item = D>,
    D: Display
{
    rows.into_iter().map(|row| 
        row.into_iter().map(cell).join("")
    ).join("\n")
}

/// Appends `label` to the last line of `body`.
pub fn labelled<S, L>(body: S, label: L) -> String
where S: Display, L: Display {
    format!("{body}      {label}")
}
