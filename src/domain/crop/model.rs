//! Crop domain entity

use chrono::{DateTime, NaiveDate, Utc};

use super::errors::CropError;

/// A planting on one farm.
#[derive(Debug, Clone)]
pub struct Crop {
    id: i32,
    name: String,
    /// Area in hectares
    planted_area: f64,
    farm_id: i32,
    planted_date: Option<NaiveDate>,
    harvest_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Crop {
    pub fn new(
        name: impl Into<String>,
        planted_area: f64,
        farm_id: i32,
        planted_date: Option<NaiveDate>,
        harvest_date: Option<NaiveDate>,
    ) -> Result<Self, CropError> {
        let name = validate_name(name.into())?;
        validate_planted_area(planted_area)?;
        if farm_id <= 0 {
            return Err(CropError::InvalidFarmId);
        }
        validate_dates(planted_date, harvest_date)?;
        let now = Utc::now();

        Ok(Self {
            id: 0,
            name,
            planted_area,
            farm_id,
            planted_date,
            harvest_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a crop from persisted state.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: i32,
        name: String,
        planted_area: f64,
        farm_id: i32,
        planted_date: Option<NaiveDate>,
        harvest_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            planted_area,
            farm_id,
            planted_date,
            harvest_date,
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

    pub fn planted_area(&self) -> f64 {
        self.planted_area
    }

    pub fn farm_id(&self) -> i32 {
        self.farm_id
    }

    pub fn planted_date(&self) -> Option<NaiveDate> {
        self.planted_date
    }

    pub fn harvest_date(&self) -> Option<NaiveDate> {
        self.harvest_date
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

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CropError> {
        self.name = validate_name(name.into())?;
        self.touch();
        Ok(())
    }

    pub fn change_planted_area(&mut self, area: f64) -> Result<(), CropError> {
        validate_planted_area(area)?;
        self.planted_area = area;
        self.touch();
        Ok(())
    }

    pub fn change_planted_date(&mut self, date: Option<NaiveDate>) -> Result<(), CropError> {
        validate_dates(date, self.harvest_date)?;
        self.planted_date = date;
        self.touch();
        Ok(())
    }

    pub fn change_harvest_date(&mut self, date: Option<NaiveDate>) -> Result<(), CropError> {
        validate_dates(self.planted_date, date)?;
        self.harvest_date = date;
        self.touch();
        Ok(())
    }

    /// Set both dates at once, validating only the resulting pair.
    pub fn change_dates(
        &mut self,
        planted: Option<NaiveDate>,
        harvest: Option<NaiveDate>,
    ) -> Result<(), CropError> {
        validate_dates(planted, harvest)?;
        self.planted_date = planted;
        self.harvest_date = harvest;
        self.touch();
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.planted_area > 0.0
            && self.farm_id > 0
            && validate_dates(self.planted_date, self.harvest_date).is_ok()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: String) -> Result<String, CropError> {
    if name.trim().is_empty() {
        return Err(CropError::InvalidName);
    }
    Ok(name)
}

fn validate_planted_area(area: f64) -> Result<(), CropError> {
    if !(area > 0.0) || !area.is_finite() {
        return Err(CropError::InvalidPlantedArea);
    }
    Ok(())
}

fn validate_dates(
    planted: Option<NaiveDate>,
    harvest: Option<NaiveDate>,
) -> Result<(), CropError> {
    match (planted, harvest) {
        (Some(p), Some(h)) if h < p => Err(CropError::InvalidHarvestDate),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_crop() -> Crop {
        Crop::new("Wheat", 12.0, 1, Some(date(2024, 3, 1)), None).unwrap()
    }

    #[test]
    fn test_new_crop() {
        let crop = sample_crop();
        assert_eq!(crop.name(), "Wheat");
        assert_eq!(crop.farm_id(), 1);
        assert_eq!(crop.planted_date(), Some(date(2024, 3, 1)));
        assert!(crop.harvest_date().is_none());
        assert!(crop.is_valid());
    }

    #[test]
    fn test_field_validation() {
        assert_eq!(
            Crop::new("", 1.0, 1, None, None).unwrap_err(),
            CropError::InvalidName
        );
        assert_eq!(
            Crop::new("Corn", 0.0, 1, None, None).unwrap_err(),
            CropError::InvalidPlantedArea
        );
        assert_eq!(
            Crop::new("Corn", 1.0, 0, None, None).unwrap_err(),
            CropError::InvalidFarmId
        );
    }

    #[test]
    fn test_harvest_before_planting_rejected() {
        let err = Crop::new(
            "Corn",
            1.0,
            1,
            Some(date(2024, 5, 1)),
            Some(date(2024, 4, 30)),
        )
        .unwrap_err();
        assert_eq!(err, CropError::InvalidHarvestDate);
    }

    #[test]
    fn test_same_day_harvest_allowed() {
        let d = date(2024, 5, 1);
        assert!(Crop::new("Corn", 1.0, 1, Some(d), Some(d)).is_ok());
    }

    #[test]
    fn test_harvest_without_planting_allowed() {
        assert!(Crop::new("Corn", 1.0, 1, None, Some(date(2024, 1, 1))).is_ok());
    }

    #[test]
    fn test_change_harvest_date() {
        let mut crop = sample_crop();
        assert_eq!(
            crop.change_harvest_date(Some(date(2024, 2, 1))),
            Err(CropError::InvalidHarvestDate)
        );
        assert!(crop.harvest_date().is_none());

        crop.change_harvest_date(Some(date(2024, 8, 1))).unwrap();
        assert_eq!(crop.harvest_date(), Some(date(2024, 8, 1)));
    }

    #[test]
    fn test_change_planted_date_respects_harvest() {
        let mut crop = sample_crop();
        crop.change_harvest_date(Some(date(2024, 8, 1))).unwrap();
        assert!(crop.change_planted_date(Some(date(2024, 9, 1))).is_err());
        crop.change_planted_date(None).unwrap();
        assert!(crop.planted_date().is_none());
    }

    #[test]
    fn test_change_dates_moves_window() {
        let mut crop = sample_crop();
        crop.change_harvest_date(Some(date(2024, 4, 1))).unwrap();
        // Both move past the old harvest date in one step
        crop.change_dates(Some(date(2024, 6, 1)), Some(date(2024, 9, 1)))
            .unwrap();
        assert_eq!(crop.planted_date(), Some(date(2024, 6, 1)));
        assert!(crop
            .change_dates(Some(date(2024, 6, 1)), Some(date(2024, 5, 1)))
            .is_err());
    }

    #[test]
    fn test_change_planted_area() {
        let mut crop = sample_crop();
        assert!(crop.change_planted_area(-3.0).is_err());
        crop.change_planted_area(20.0).unwrap();
        assert_eq!(crop.planted_area(), 20.0);
    }
}
