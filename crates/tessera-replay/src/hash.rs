//! FNV-1a hashing of grids, fields and configurations.
//!
//! The hashes are fast equality checks for determinism tests, not
//! cryptographic digests.

use tessera_core::{AuxField, AuxFields, CellState, Dims, Grid};
use tessera_engine::{AutomatonConfig, Variant};
use tessera_rule::Intervention;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(hash: u64, bytes: &[u8]) -> u64 {
    bytes.iter().fold(hash, |h, &b| fnv1a_byte(h, b))
}

#[inline]
fn fnv1a_u32(hash: u64, v: u32) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

#[inline]
fn fnv1a_u64(hash: u64, v: u64) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

fn fold_dims(hash: u64, dims: Dims) -> u64 {
    let hash = fnv1a_u32(hash, dims.ndim() as u32);
    let hash = fnv1a_u32(hash, dims.rows());
    fnv1a_u32(hash, dims.cols())
}

/// Hash of a grid's shape and state codes.
///
/// Two grids hash equal when they have the same dimensions and the same
/// state in every cell.
pub fn grid_hash<S: CellState>(grid: &Grid<S>) -> u64 {
    let hash = fold_dims(FNV_OFFSET, grid.dims());
    grid.cells()
        .iter()
        .fold(hash, |h, s| fnv1a_byte(h, s.code()))
}

/// Hash of every auxiliary field, in [`AuxField::ALL`] order.
///
/// The field index is folded in at each field boundary so that swapping
/// two fields' contents changes the hash. Scalars hash by bit pattern.
pub fn aux_hash(aux: &AuxFields) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, aux.len() as u64);
    for (field_idx, field) in AuxField::ALL.into_iter().enumerate() {
        hash = fnv1a_u32(hash, field_idx as u32);
        match field {
            AuxField::TerrainHeight => {
                for &h in aux.terrain_heights() {
                    hash = fnv1a_u32(hash, h as u32);
                }
            }
            AuxField::Barrier => {
                for &b in aux.barriers() {
                    hash = fnv1a_byte(hash, b as u8);
                }
            }
            scalar => {
                for &v in aux.scalar(scalar).unwrap_or(&[]) {
                    hash = fnv1a_u32(hash, v.to_bits());
                }
            }
        }
    }
    hash
}

/// Hash of a run configuration: variant and parameters, dimensions,
/// boundary, tick budget, seed, and scheduled interventions.
pub fn config_hash(config: &AutomatonConfig) -> u64 {
    let mut hash = fnv1a_bytes(FNV_OFFSET, config.variant.kind().as_str().as_bytes());
    hash = match config.variant {
        Variant::Terrain { rain_intensity } => fnv1a_u32(hash, rain_intensity.to_bits()),
        Variant::LifeVirus {
            infection_probability,
        } => fnv1a_u64(hash, infection_probability.to_bits()),
        Variant::Rule1d { rule_seed } => fnv1a_u64(hash, rule_seed as u64),
        Variant::LifeStandard | Variant::LifeBattle => hash,
    };
    hash = fold_dims(hash, config.dims);
    hash = fnv1a_bytes(hash, config.boundary.as_str().as_bytes());
    hash = fnv1a_u64(hash, config.ticks);
    hash = fnv1a_u64(hash, config.seed);
    for scheduled in &config.interventions {
        hash = fnv1a_u64(hash, scheduled.tick.0);
        hash = fnv1a_bytes(hash, scheduled.intervention.name().as_bytes());
        for &c in scheduled.intervention.center().iter() {
            hash = fnv1a_u32(hash, c as u32);
        }
        hash = fnv1a_u32(hash, scheduled.intervention.radius());
    }
    hash
}
