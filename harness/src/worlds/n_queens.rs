//! N-Queens as a CSP: one variable per column, its value the queen's row.

use waypoint_csp::{Csp, CspError, Predicate};

/// `n` queens, pairwise constraints on rows and diagonals.
///
/// # Errors
///
/// Never fails for a well-formed board; the `Result` mirrors model
/// construction.
pub fn n_queens(n: usize) -> Result<Csp<usize, usize>, CspError> {
    let mut csp = Csp::new();
    for col in 0..n {
        csp.add_variable(col, (0..n).collect())?;
    }
    for a in 0..n {
        for b in a + 1..n {
            let gap = b - a;
            csp.add_constraint(Predicate::new(
                "queens_attack",
                vec![a, b],
                move |rows: &[&usize]| non_attacking(*rows[0], *rows[1], gap),
            ))?;
        }
    }
    Ok(csp)
}

fn non_attacking(row_a: usize, row_b: usize, gap: usize) -> bool {
    row_a != row_b && row_a.abs_diff(row_b) != gap
}

/// Whether `rows[col]` places queens so that none attack another.
#[must_use]
pub fn is_valid_placement(rows: &[usize]) -> bool {
    let n = rows.len();
    rows.iter().all(|&r| r < n)
        && (0..n).all(|a| (a + 1..n).all(|b| non_attacking(rows[a], rows[b], b - a)))
}
