//! Auxiliary per-cell fields for the terrain variant.
//!
//! [`AuxFields`] is co-indexed with the state grid: index `i` in every
//! field refers to the same cell as index `i` in the grid. Scalar writes
//! go through [`AuxFields::set_scalar`] / [`AuxFields::add_scalar`], which
//! clamp to the field's declared [`FieldBounds`].

/// Identifies one auxiliary field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuxField {
    /// Integer terrain height, `0..=100` at seeding, raised by barriers.
    TerrainHeight,
    /// Standing water, never negative.
    WaterLevel,
    /// Relative humidity in percent.
    Humidity,
    /// Temperature in degrees.
    Temperature,
    /// Vegetation density.
    Vegetation,
    /// Barrier (dam) flag.
    Barrier,
}

impl AuxField {
    /// All fields, in storage order.
    pub const ALL: [AuxField; 6] = [
        Self::TerrainHeight,
        Self::WaterLevel,
        Self::Humidity,
        Self::Temperature,
        Self::Vegetation,
        Self::Barrier,
    ];

    /// Human-readable name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::TerrainHeight => "terrain_height",
            Self::WaterLevel => "water_level",
            Self::Humidity => "humidity",
            Self::Temperature => "temperature",
            Self::Vegetation => "vegetation",
            Self::Barrier => "barrier",
        }
    }

    /// Declared value bounds.
    pub fn bounds(self) -> FieldBounds {
        match self {
            Self::TerrainHeight => FieldBounds::at_least(0.0),
            Self::WaterLevel => FieldBounds::at_least(0.0),
            Self::Humidity => FieldBounds::between(0.0, 100.0),
            Self::Temperature => FieldBounds::between(0.0, 30.0),
            Self::Vegetation => FieldBounds::between(0.0, 1.0),
            Self::Barrier => FieldBounds::between(0.0, 1.0),
        }
    }

    /// Whether the field is stored as `f32` and reachable via
    /// [`AuxFields::scalar`].
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::WaterLevel | Self::Humidity | Self::Temperature | Self::Vegetation
        )
    }
}

/// Inclusive value bounds for an auxiliary field. Out-of-range writes clamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldBounds {
    /// Lower bound.
    pub min: f32,
    /// Upper bound, `None` if unbounded.
    pub max: Option<f32>,
}

impl FieldBounds {
    /// `[min, +inf)`.
    pub const fn at_least(min: f32) -> Self {
        Self { min, max: None }
    }

    /// `[min, max]`.
    pub const fn between(min: f32, max: f32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Clamp `v` into the bounds.
    pub fn clamp(&self, v: f32) -> f32 {
        let v = v.max(self.min);
        match self.max {
            Some(max) => v.min(max),
            None => v,
        }
    }

    /// Whether `v` lies inside the bounds.
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && self.max.map_or(true, |max| v <= max)
    }
}

/// Per-cell auxiliary field storage.
#[derive(Clone, Debug, PartialEq)]
pub struct AuxFields {
    terrain_height: Vec<i32>,
    water_level: Vec<f32>,
    humidity: Vec<f32>,
    temperature: Vec<f32>,
    vegetation: Vec<f32>,
    barrier: Vec<bool>,
}

impl AuxFields {
    /// Zeroed fields for `cell_count` cells.
    pub fn new(cell_count: usize) -> Self {
        Self {
            terrain_height: vec![0; cell_count],
            water_level: vec![0.0; cell_count],
            humidity: vec![0.0; cell_count],
            temperature: vec![0.0; cell_count],
            vegetation: vec![0.0; cell_count],
            barrier: vec![false; cell_count],
        }
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.terrain_height.len()
    }

    /// `true` when no cells are covered.
    pub fn is_empty(&self) -> bool {
        self.terrain_height.is_empty()
    }

    /// Terrain height of cell `i`.
    pub fn terrain_height(&self, i: usize) -> i32 {
        self.terrain_height[i]
    }

    /// All terrain heights, row-major.
    pub fn terrain_heights(&self) -> &[i32] {
        &self.terrain_height
    }

    /// Water level of cell `i`.
    pub fn water_level(&self, i: usize) -> f32 {
        self.water_level[i]
    }

    /// Humidity of cell `i`.
    pub fn humidity(&self, i: usize) -> f32 {
        self.humidity[i]
    }

    /// Temperature of cell `i`.
    pub fn temperature(&self, i: usize) -> f32 {
        self.temperature[i]
    }

    /// Vegetation density of cell `i`.
    pub fn vegetation(&self, i: usize) -> f32 {
        self.vegetation[i]
    }

    /// Whether cell `i` carries a barrier.
    pub fn is_barrier(&self, i: usize) -> bool {
        self.barrier[i]
    }

    /// All barrier flags, row-major.
    pub fn barriers(&self) -> &[bool] {
        &self.barrier
    }

    /// Read-only view of a scalar (`f32`) field.
    ///
    /// Returns `None` for [`AuxField::TerrainHeight`] and
    /// [`AuxField::Barrier`], which are not stored as `f32`.
    pub fn scalar(&self, field: AuxField) -> Option<&[f32]> {
        match field {
            AuxField::WaterLevel => Some(&self.water_level),
            AuxField::Humidity => Some(&self.humidity),
            AuxField::Temperature => Some(&self.temperature),
            AuxField::Vegetation => Some(&self.vegetation),
            AuxField::TerrainHeight | AuxField::Barrier => None,
        }
    }

    fn scalar_mut(&mut self, field: AuxField) -> Option<&mut Vec<f32>> {
        match field {
            AuxField::WaterLevel => Some(&mut self.water_level),
            AuxField::Humidity => Some(&mut self.humidity),
            AuxField::Temperature => Some(&mut self.temperature),
            AuxField::Vegetation => Some(&mut self.vegetation),
            AuxField::TerrainHeight | AuxField::Barrier => None,
        }
    }

    /// Set a scalar field value, clamped to the field's bounds.
    /// Non-scalar fields are left untouched.
    pub fn set_scalar(&mut self, field: AuxField, i: usize, value: f32) {
        let bounds = field.bounds();
        if let Some(buf) = self.scalar_mut(field) {
            buf[i] = bounds.clamp(value);
        }
    }

    /// Add `delta` to a scalar field value, clamped to the field's bounds.
    pub fn add_scalar(&mut self, field: AuxField, i: usize, delta: f32) {
        let bounds = field.bounds();
        if let Some(buf) = self.scalar_mut(field) {
            buf[i] = bounds.clamp(buf[i] + delta);
        }
    }

    /// Add `amount` to every cell of a scalar field.
    pub fn add_uniform(&mut self, field: AuxField, amount: f32) {
        let bounds = field.bounds();
        if let Some(buf) = self.scalar_mut(field) {
            for v in buf.iter_mut() {
                *v = bounds.clamp(*v + amount);
            }
        }
    }

    /// Overwrite the terrain height of cell `i` (clamped at 0).
    pub fn set_terrain_height(&mut self, i: usize, height: i32) {
        self.terrain_height[i] = height.max(0);
    }

    /// Raise the terrain of cell `i` by `amount`.
    pub fn raise_terrain(&mut self, i: usize, amount: i32) {
        self.terrain_height[i] = self.terrain_height[i].saturating_add(amount).max(0);
    }

    /// Mark or clear a barrier on cell `i`.
    pub fn set_barrier(&mut self, i: usize, barrier: bool) {
        self.barrier[i] = barrier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fields_are_zeroed() {
        let aux = AuxFields::new(4);
        assert_eq!(aux.len(), 4);
        assert_eq!(aux.terrain_heights(), &[0, 0, 0, 0]);
        assert!(aux.barriers().iter().all(|b| !b));
        for field in AuxField::ALL.into_iter().filter(|f| f.is_scalar()) {
            assert!(aux.scalar(field).unwrap().iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn humidity_clamps_at_hundred() {
        let mut aux = AuxFields::new(1);
        aux.set_scalar(AuxField::Humidity, 0, 70.0);
        aux.add_scalar(AuxField::Humidity, 0, 50.0);
        assert_eq!(aux.humidity(0), 100.0);
    }

    #[test]
    fn water_never_negative() {
        let mut aux = AuxFields::new(1);
        aux.add_scalar(AuxField::WaterLevel, 0, -3.0);
        assert_eq!(aux.water_level(0), 0.0);
    }

    #[test]
    fn water_has_no_upper_bound() {
        let mut aux = AuxFields::new(2);
        aux.add_uniform(AuxField::WaterLevel, 500.0);
        assert_eq!(aux.scalar(AuxField::WaterLevel), Some(&[500.0, 500.0][..]));
    }

    #[test]
    fn non_scalar_fields_have_no_f32_view() {
        let aux = AuxFields::new(1);
        assert!(aux.scalar(AuxField::TerrainHeight).is_none());
        assert!(aux.scalar(AuxField::Barrier).is_none());
    }

    #[test]
    fn raise_terrain_accumulates() {
        let mut aux = AuxFields::new(1);
        aux.set_terrain_height(0, 40);
        aux.raise_terrain(0, 50);
        assert_eq!(aux.terrain_height(0), 90);
    }

    #[test]
    fn bounds_contains() {
        let b = FieldBounds::between(0.0, 30.0);
        assert!(b.contains(0.0));
        assert!(b.contains(30.0));
        assert!(!b.contains(30.5));
        assert!(FieldBounds::at_least(0.0).contains(1e9));
    }
}
