//! Farm domain entity

use std::fmt;

use chrono::{DateTime, Utc};

use super::errors::FarmError;

/// Upper bound for a farm's size, in hectares.
pub const MAX_FARM_SIZE: f64 = 1_000_000.0;

/// Farm area in hectares.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FarmSize(f64);

impl FarmSize {
    pub fn new(hectares: f64) -> Result<Self, FarmError> {
        // NaN fails both comparisons, so test the accepted range instead
        if !(hectares > 0.0 && hectares <= MAX_FARM_SIZE) {
            return Err(FarmError::InvalidSize);
        }
        Ok(Self(hectares))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_larger_than(&self, other: &FarmSize) -> bool {
        self.0 > other.0
    }

    pub fn is_smaller_than(&self, other: &FarmSize) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for FarmSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} hectares", self.0)
    }
}

/// A unit of land. Owns zero or more crops.
#[derive(Debug, Clone)]
pub struct Farm {
    id: i32,
    name: String,
    size: FarmSize,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Farm {
    /// Build a new, not yet persisted farm. The repository assigns the id.
    pub fn new(name: impl Into<String>, size: f64) -> Result<Self, FarmError> {
        let name = validate_name(name.into())?;
        let size = FarmSize::new(size)?;
        let now = Utc::now();

        Ok(Self {
            id: 0,
            name,
            size,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a farm from persisted state.
    pub fn restore(
        id: i32,
        name: String,
        size: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            size: FarmSize(size),
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> FarmSize {
        self.size
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), FarmError> {
        self.name = validate_name(name.into())?;
        self.touch();
        Ok(())
    }

    pub fn change_size(&mut self, size: f64) -> Result<(), FarmError> {
        self.size = FarmSize::new(size)?;
        self.touch();
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && FarmSize::new(self.size.value()).is_ok()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: String) -> Result<String, FarmError> {
    if name.trim().is_empty() {
        return Err(FarmError::InvalidName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_farm() -> Farm {
        Farm::new("Green Acres", 120.5).unwrap()
    }

    #[test]
    fn test_new_farm() {
        let farm = sample_farm();
        assert_eq!(farm.id(), 0);
        assert_eq!(farm.name(), "Green Acres");
        assert_eq!(farm.size().value(), 120.5);
        assert!(farm.is_valid());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Farm::new("", 10.0).unwrap_err(), FarmError::InvalidName);
        assert_eq!(Farm::new("   ", 10.0).unwrap_err(), FarmError::InvalidName);
    }

    #[test]
    fn test_size_bounds() {
        assert_eq!(Farm::new("F", 0.0).unwrap_err(), FarmError::InvalidSize);
        assert_eq!(Farm::new("F", -1.0).unwrap_err(), FarmError::InvalidSize);
        assert_eq!(
            Farm::new("F", 1_000_000.01).unwrap_err(),
            FarmError::InvalidSize
        );
        assert_eq!(Farm::new("F", f64::NAN).unwrap_err(), FarmError::InvalidSize);
        assert!(Farm::new("F", 1_000_000.0).is_ok());
        assert!(Farm::new("F", 0.01).is_ok());
    }

    #[test]
    fn test_size_display_and_compare() {
        let small = FarmSize::new(3.0).unwrap();
        let big = FarmSize::new(42.126).unwrap();
        assert_eq!(big.to_string(), "42.13 hectares");
        assert!(big.is_larger_than(&small));
        assert!(small.is_smaller_than(&big));
        assert_eq!(small, FarmSize::new(3.0).unwrap());
    }

    #[test]
    fn test_change_name_stamps_updated_at() {
        let mut farm = sample_farm();
        let before = farm.updated_at();
        farm.change_name("Blue Fields").unwrap();
        assert_eq!(farm.name(), "Blue Fields");
        assert!(farm.updated_at() >= before);
    }

    #[test]
    fn test_failed_change_keeps_state() {
        let mut farm = sample_farm();
        let before = farm.updated_at();
        assert!(farm.change_size(2_000_000.0).is_err());
        assert!(farm.change_name("").is_err());
        assert_eq!(farm.size().value(), 120.5);
        assert_eq!(farm.name(), "Green Acres");
        assert_eq!(farm.updated_at(), before);
    }
}
