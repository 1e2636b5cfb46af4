//! Test utilities and grid fixtures for Tessera development.
//!
//! Grids are written as ASCII art, one string per row:
//!
//! - life: `.` dead, `O` alive, `X` infected
//! - terrain: `.` land, `~` flooded, `g` green area, `^` rock, `*` fire
//! - bits: `0` and `1`, one line
//!
//! Unknown characters panic: these helpers only ever see literals
//! written in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{IdentityRule, Probe};

use tessera_core::{AuxFields, Bit, CellState, Dims, Grid, LifeState, TerrainState};

fn parse_rows<S: CellState>(rows: &[&str], decode: impl Fn(char) -> S) -> Grid<S> {
    let cols = rows.first().map_or(0, |r| r.chars().count());
    let mut cells = Vec::with_capacity(rows.len() * cols);
    for row in rows {
        assert_eq!(row.chars().count(), cols, "ragged ascii grid: {rows:?}");
        cells.extend(row.chars().map(&decode));
    }
    let dims = Dims::Plane {
        rows: rows.len() as u32,
        cols: cols as u32,
    };
    Grid::from_cells(dims, cells).expect("row lengths checked above")
}

/// Parse a life grid.
pub fn life_grid(rows: &[&str]) -> Grid<LifeState> {
    parse_rows(rows, |ch| match ch {
        '.' => LifeState::Dead,
        'O' => LifeState::Alive,
        'X' => LifeState::Infected,
        other => panic!("unknown life cell {other:?}"),
    })
}

/// Parse a terrain grid.
pub fn terrain_grid(rows: &[&str]) -> Grid<TerrainState> {
    parse_rows(rows, |ch| match ch {
        '.' => TerrainState::Land,
        '~' => TerrainState::Flooded,
        'g' => TerrainState::GreenArea,
        '^' => TerrainState::Rock,
        '*' => TerrainState::Fire,
        other => panic!("unknown terrain cell {other:?}"),
    })
}

/// Parse a 1D row of bits.
pub fn bit_row(row: &str) -> Grid<Bit> {
    let cells: Vec<Bit> = row
        .chars()
        .map(|ch| match ch {
            '0' => Bit::Zero,
            '1' => Bit::One,
            other => panic!("unknown bit {other:?}"),
        })
        .collect();
    let dims = Dims::Line {
        len: cells.len() as u32,
    };
    Grid::from_cells(dims, cells).expect("length taken from the cells")
}

/// Render any grid back to rows of state codes, for assertion messages.
pub fn render<S: CellState>(grid: &Grid<S>) -> Vec<String> {
    let cols = grid.dims().cols() as usize;
    grid.cells()
        .chunks(cols.max(1))
        .map(|row| row.iter().map(|s| char::from(b'0' + s.code())).collect())
        .collect()
}

/// Auxiliary fields with every cell at `height` and all scalars zero.
pub fn flat_aux(cell_count: usize, height: i32) -> AuxFields {
    let mut aux = AuxFields::new(cell_count);
    for i in 0..cell_count {
        aux.set_terrain_height(i, height);
    }
    aux
}
