//! Initial grids and fields for each variant.
//!
//! Seed data is plain data handed over by a driver: a height map for
//! terrain, a named pattern for life, an initial row for the 1D rule.
//! Random initialisation draws from `ChaCha8Rng` on stream 1 of the run
//! seed, so it never overlaps the per-tick generators.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessera_core::{AuxField, AuxFields, Bit, Coord, Dims, Grid, LifeState, TerrainState};

use crate::config::ConfigError;

/// Water added to the centre cell of a fresh terrain grid.
pub const CENTRE_WATER: f32 = 50.0;

/// Terrain above this height starts as `Rock`.
pub const ROCK_HEIGHT: i32 = 70;

/// Terrain below this height starts as `GreenArea`.
pub const GREEN_HEIGHT: i32 = 30;

fn init_rng(seed: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(1);
    rng
}

// ── HeightMap ──────────────────────────────────────────────────────

/// Integer terrain heights, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightMap {
    rows: u32,
    cols: u32,
    heights: Vec<i32>,
}

impl HeightMap {
    /// Heights from 8-bit grayscale pixels: `pixel * 100 / 255`,
    /// truncated.
    ///
    /// ```
    /// use tessera_engine::HeightMap;
    ///
    /// let map = HeightMap::from_luma(&[0, 128, 255, 77], 2, 2).unwrap();
    /// assert_eq!(map.heights(), &[0, 50, 100, 30]);
    /// ```
    pub fn from_luma(pixels: &[u8], rows: u32, cols: u32) -> Result<Self, ConfigError> {
        let heights = pixels
            .iter()
            .map(|&p| (u32::from(p) * 100 / 255) as i32)
            .collect();
        Self::from_heights(heights, rows, cols)
    }

    /// Heights given directly.
    pub fn from_heights(heights: Vec<i32>, rows: u32, cols: u32) -> Result<Self, ConfigError> {
        let expected = rows as usize * cols as usize;
        if heights.len() != expected {
            return Err(ConfigError::SeedDataMismatch {
                reason: format!(
                    "height map of {rows}x{cols} needs {expected} values, got {}",
                    heights.len()
                ),
            });
        }
        Ok(Self {
            rows,
            cols,
            heights,
        })
    }

    /// Every cell at `height`.
    pub fn flat(rows: u32, cols: u32, height: i32) -> Self {
        Self {
            rows,
            cols,
            heights: vec![height; rows as usize * cols as usize],
        }
    }

    /// Dimensions of the map.
    pub fn dims(&self) -> Dims {
        Dims::Plane {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Heights, row-major.
    pub fn heights(&self) -> &[i32] {
        &self.heights
    }
}

/// Grid and fields for a terrain run.
///
/// Every cell starts as `Land`; the centre cell is `Flooded` with
/// [`CENTRE_WATER`] extra water; then heights above [`ROCK_HEIGHT`]
/// become `Rock` and below [`GREEN_HEIGHT`] become `GreenArea`, which may
/// overwrite the centre. Humidity, temperature and vegetation are drawn
/// uniformly within their bounds, one field at a time. Ignition points
/// are set to `Fire` last.
pub fn terrain_initial(
    dims: Dims,
    height_map: &HeightMap,
    ignition: &[Coord],
    seed: u64,
) -> Result<(Grid<TerrainState>, AuxFields), ConfigError> {
    if height_map.dims() != dims {
        return Err(ConfigError::SeedDataMismatch {
            reason: format!("height map is {:?}, grid is {dims:?}", height_map.dims()),
        });
    }
    let n = dims.cell_count();
    if n == 0 {
        return Err(ConfigError::EmptyGrid);
    }
    let mut grid = Grid::filled(dims, TerrainState::Land);
    let mut aux = AuxFields::new(n);
    for (i, &h) in height_map.heights().iter().enumerate() {
        aux.set_terrain_height(i, h);
    }

    let centre = dims.rows() as usize / 2 * dims.cols() as usize + dims.cols() as usize / 2;
    grid.cells_mut()[centre] = TerrainState::Flooded;
    aux.add_scalar(AuxField::WaterLevel, centre, CENTRE_WATER);

    for (cell, &h) in grid.cells_mut().iter_mut().zip(height_map.heights()) {
        if h > ROCK_HEIGHT {
            *cell = TerrainState::Rock;
        } else if h < GREEN_HEIGHT {
            *cell = TerrainState::GreenArea;
        }
    }

    let mut rng = init_rng(seed);
    for field in [AuxField::Humidity, AuxField::Temperature, AuxField::Vegetation] {
        let bounds = field.bounds();
        let span = bounds.max.unwrap_or(bounds.min) - bounds.min;
        for i in 0..n {
            aux.set_scalar(field, i, bounds.min + rng.gen::<f32>() * span);
        }
    }

    for coord in ignition {
        grid.set_at(coord, TerrainState::Fire)
            .map_err(|_| ConfigError::SeedDataMismatch {
                reason: format!("ignition point {coord:?} is outside {dims:?}"),
            })?;
    }
    Ok((grid, aux))
}

// ── Pattern ────────────────────────────────────────────────────────

const GLIDER: [(i32, i32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
const OSCILLATOR: [(i32, i32); 3] = [(1, 0), (1, 1), (1, 2)];
const BLOCK: [(i32, i32); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
/// Gosper glider gun, absolute `(row, col)`.
const GLIDER_GUN: [(i32, i32); 36] = [
    (5, 1), (5, 2), (6, 1), (6, 2),
    (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
    (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17), (7, 17),
    (6, 18),
    (3, 21), (4, 21), (5, 21), (3, 22), (4, 22), (5, 22), (2, 23), (6, 23),
    (1, 25), (2, 25), (6, 25), (7, 25),
    (3, 35), (4, 35), (3, 36), (4, 36),
];

/// Initial Game-of-Life layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// A glider heading south-east, offset by (1, 1).
    Glider,
    /// The Gosper glider gun. Needs at least 10 rows and 37 columns.
    GliderGun,
    /// A horizontal blinker, offset by (1, 1).
    Oscillator,
    /// A 2x2 block, offset by (1, 1).
    Block,
    /// Each cell `Alive` or `Dead` with equal chance.
    Random,
    /// Each cell `Dead`, `Alive` or `Infected` with equal chance.
    RandomFactions,
    /// Exactly these cells `Alive`.
    Cells(Vec<Coord>),
}

impl Pattern {
    /// Name used in configuration strings and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Glider => "glider",
            Self::GliderGun => "glider-gun",
            Self::Oscillator => "oscillator",
            Self::Block => "block",
            Self::Random => "random",
            Self::RandomFactions => "random-factions",
            Self::Cells(_) => "cells",
        }
    }

    /// Lay the pattern out on a fresh grid.
    pub fn grid(&self, dims: Dims, seed: u64) -> Result<Grid<LifeState>, ConfigError> {
        let mut grid = Grid::new(dims);
        match self {
            Self::Glider => self.place(&mut grid, GLIDER.iter().map(|&(r, c)| (1 + r, 1 + c)))?,
            Self::GliderGun => self.place(&mut grid, GLIDER_GUN.iter().copied())?,
            Self::Oscillator => {
                self.place(&mut grid, OSCILLATOR.iter().map(|&(r, c)| (1 + r, 1 + c)))?
            }
            Self::Block => self.place(&mut grid, BLOCK.iter().map(|&(r, c)| (1 + r, 1 + c)))?,
            Self::Random => {
                let mut rng = init_rng(seed);
                for cell in grid.cells_mut() {
                    if rng.gen_bool(0.5) {
                        *cell = LifeState::Alive;
                    }
                }
            }
            Self::RandomFactions => {
                let mut rng = init_rng(seed);
                for cell in grid.cells_mut() {
                    *cell = LifeState::from_faction(rng.gen_range(0..3)).unwrap_or_default();
                }
            }
            Self::Cells(coords) => {
                for coord in coords {
                    grid.set_at(coord, LifeState::Alive)
                        .map_err(|_| self.does_not_fit(coord.clone(), dims))?;
                }
            }
        }
        Ok(grid)
    }

    fn place(
        &self,
        grid: &mut Grid<LifeState>,
        cells: impl Iterator<Item = (i32, i32)>,
    ) -> Result<(), ConfigError> {
        let dims = grid.dims();
        for (r, c) in cells {
            let coord: Coord = smallvec::smallvec![r, c];
            grid.set_at(&coord, LifeState::Alive)
                .map_err(|_| self.does_not_fit(coord.clone(), dims))?;
        }
        Ok(())
    }

    fn does_not_fit(&self, coord: Coord, dims: Dims) -> ConfigError {
        ConfigError::PatternDoesNotFit {
            pattern: self.name().to_string(),
            coord,
            dims,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glider" => Ok(Self::Glider),
            "glider-gun" | "glider_gun" => Ok(Self::GliderGun),
            "oscillator" => Ok(Self::Oscillator),
            "block" | "still" => Ok(Self::Block),
            "random" => Ok(Self::Random),
            "random-factions" | "random_factions" => Ok(Self::RandomFactions),
            _ => Err(ConfigError::InvalidPattern {
                name: s.to_string(),
            }),
        }
    }
}

// ── InitialRow ─────────────────────────────────────────────────────

/// Initial row for the 1D rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitialRow {
    /// A single active cell at `len / 2`.
    Centered,
    /// Each cell 0 or 1 with equal chance.
    Random,
    /// Exactly these bits.
    Explicit(Vec<Bit>),
}

impl InitialRow {
    /// Lay the row out on a fresh line of `len` cells.
    pub fn grid(&self, len: u32, seed: u64) -> Result<Grid<Bit>, ConfigError> {
        if len == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let dims = Dims::Line { len };
        match self {
            Self::Centered => {
                let mut grid = Grid::new(dims);
                grid.cells_mut()[len as usize / 2] = Bit::One;
                Ok(grid)
            }
            Self::Random => {
                let mut rng = init_rng(seed);
                let cells = (0..len).map(|_| Bit::from(rng.gen_bool(0.5))).collect();
                Grid::from_cells(dims, cells).map_err(|e| ConfigError::SeedDataMismatch {
                    reason: e.to_string(),
                })
            }
            Self::Explicit(bits) => Grid::from_cells(dims, bits.clone()).map_err(|e| {
                ConfigError::SeedDataMismatch {
                    reason: format!("initial row: {e}"),
                }
            }),
        }
    }
}

// ── SeedData ───────────────────────────────────────────────────────

/// Initial data for one run; the kind must match the configured variant.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedData {
    /// Terrain height map and optional ignition points.
    Terrain {
        /// Terrain heights.
        height_map: HeightMap,
        /// Cells that start on fire.
        ignition: Vec<Coord>,
    },
    /// A Game-of-Life pattern.
    Life(Pattern),
    /// A 1D initial row.
    Row(InitialRow),
}

impl SeedData {
    /// Terrain seed data without ignition points.
    pub fn terrain(height_map: HeightMap) -> Self {
        Self::Terrain {
            height_map,
            ignition: Vec::new(),
        }
    }

    /// Short name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Terrain { .. } => "terrain",
            Self::Life(_) => "life",
            Self::Row(_) => "row",
        }
    }
}
