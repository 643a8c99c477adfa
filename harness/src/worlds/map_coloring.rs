//! Map-coloring CSP fixtures: adjacent regions take different colors.

use waypoint_csp::{Csp, NotEqual};

use crate::error::WorldError;

/// Colors handed out in order; a `k`-color problem uses the first `k`.
pub const PALETTE: [&str; 4] = ["red", "green", "blue", "yellow"];

/// Region names, adjacency list and color count to a CSP.
///
/// # Errors
///
/// [`WorldError::TooManyColors`] if `colors` exceeds [`PALETTE`];
/// [`WorldError::Model`] for duplicate regions or borders naming unknown
/// regions.
pub fn coloring<V>(
    regions: &[V],
    borders: &[(V, V)],
    colors: usize,
) -> Result<Csp<V, &'static str>, WorldError>
where
    V: Ord + Clone + std::fmt::Debug + 'static,
{
    if colors > PALETTE.len() {
        return Err(WorldError::TooManyColors {
            requested: colors,
            available: PALETTE.len(),
        });
    }
    let palette: Vec<&'static str> = PALETTE.iter().copied().take(colors).collect();
    let mut csp = Csp::new();
    for region in regions {
        csp.add_variable(region.clone(), palette.clone())?;
    }
    for (a, b) in borders {
        csp.add_constraint(NotEqual::new(a.clone(), b.clone()))?;
    }
    Ok(csp)
}

/// The seven Australian states and territories. Three colors suffice.
///
/// # Errors
///
/// [`WorldError::TooManyColors`] if `colors` exceeds [`PALETTE`].
pub fn australia(colors: usize) -> Result<Csp<&'static str, &'static str>, WorldError> {
    coloring(
        &["WA", "NT", "SA", "Q", "NSW", "V", "T"],
        &[
            ("WA", "NT"),
            ("WA", "SA"),
            ("NT", "SA"),
            ("NT", "Q"),
            ("SA", "Q"),
            ("SA", "NSW"),
            ("SA", "V"),
            ("Q", "NSW"),
            ("NSW", "V"),
        ],
        colors,
    )
}

/// Ring of `nodes` regions, each bordering the next. A ring of three is a
/// triangle: 3-colorable, not 2-colorable.
///
/// # Errors
///
/// [`WorldError::TooManyColors`] if `colors` exceeds [`PALETTE`].
pub fn ring(nodes: usize, colors: usize) -> Result<Csp<usize, &'static str>, WorldError> {
    let regions: Vec<usize> = (0..nodes).collect();
    let borders: Vec<(usize, usize)> = (0..nodes).map(|v| (v, (v + 1) % nodes)).collect();
    coloring(&regions, &borders, colors)
}
