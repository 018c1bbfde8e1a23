//! Fertilizer domain entity

use chrono::{DateTime, Utc};

use super::errors::FertilizerError;

/// A product applied to crops. Independent of any farm.
#[derive(Debug, Clone)]
pub struct Fertilizer {
    id: i32,
    name: String,
    brand: String,
    /// Free-form nutrient composition, e.g. "NPK 10-10-10"
    composition: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Fertilizer {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        composition: impl Into<String>,
    ) -> Result<Self, FertilizerError> {
        let name = non_empty(name.into(), FertilizerError::InvalidName)?;
        let brand = non_empty(brand.into(), FertilizerError::InvalidBrand)?;
        let composition = non_empty(composition.into(), FertilizerError::InvalidComposition)?;
        let now = Utc::now();

        Ok(Self {
            id: 0,
            name,
            brand,
            composition,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn restore(
        id: i32,
        name: String,
        brand: String,
        composition: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            brand,
            composition,
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

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn composition(&self) -> &str {
        &self.composition
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

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), FertilizerError> {
        self.name = non_empty(name.into(), FertilizerError::InvalidName)?;
        self.touch();
        Ok(())
    }

    pub fn change_brand(&mut self, brand: impl Into<String>) -> Result<(), FertilizerError> {
        self.brand = non_empty(brand.into(), FertilizerError::InvalidBrand)?;
        self.touch();
        Ok(())
    }

    pub fn change_composition(
        &mut self,
        composition: impl Into<String>,
    ) -> Result<(), FertilizerError> {
        self.composition = non_empty(composition.into(), FertilizerError::InvalidComposition)?;
        self.touch();
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        [&self.name, &self.brand, &self.composition]
            .iter()
            .all(|s| !s.trim().is_empty())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn non_empty(value: String, err: FertilizerError) -> Result<String, FertilizerError> {
    if value.trim().is_empty() {
        return Err(err);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fertilizer() {
        let f = Fertilizer::new("GrowMax", "AgroCo", "NPK 10-10-10").unwrap();
        assert_eq!(f.brand(), "AgroCo");
        assert!(f.is_valid());
    }

    #[test]
    fn test_each_field_required() {
        assert_eq!(
            Fertilizer::new("", "b", "c").unwrap_err(),
            FertilizerError::InvalidName
        );
        assert_eq!(
            Fertilizer::new("n", " ", "c").unwrap_err(),
            FertilizerError::InvalidBrand
        );
        assert_eq!(
            Fertilizer::new("n", "b", "").unwrap_err(),
            FertilizerError::InvalidComposition
        );
    }

    #[test]
    fn test_change_composition() {
        let mut f = Fertilizer::new("GrowMax", "AgroCo", "NPK 10-10-10").unwrap();
        assert!(f.change_composition("").is_err());
        assert_eq!(f.composition(), "NPK 10-10-10");
        f.change_composition("NPK 20-5-5").unwrap();
        assert_eq!(f.composition(), "NPK 20-5-5");
    }
}
