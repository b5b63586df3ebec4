#![allow(non_snake_case)]

use itertools::Itertools;

use crate::boolean::BooleanMatrix;
use crate::real::{RealMatrix, RealVector};

/// One line per row, entries as `0`/`1` separated by single spaces.
pub fn relation_matrix(M: &BooleanMatrix) -> String {
    M.to_bits()
        .iter()
        .map(|row| row.iter().join(" "))
        .join("\n")
}

/// Boxed printout with every entry right-aligned to 9 characters and 4 decimals.
pub fn boxed(M: &RealMatrix) -> String {
    let n = M.ncols();
    let rule = " ".repeat(10 * n);
    let body = M
        .to_rows()
        .iter()
        .map(|row| format!("│{}│", row.iter().map(|x| format!("{x:>9.4} ")).join("")))
        .join("\n");
    format!("┌{rule}┐\n{body}\n└{rule}┘")
}

/// `x1 = …`, `x2 = …`, one unknown per line with 4 decimals.
pub fn solution(x: &RealVector) -> String {
    x.iter()
        .enumerate()
        .map(|(i, xi)| format!("x{} = {xi:.4}", i + 1))
        .join("\n")
}
