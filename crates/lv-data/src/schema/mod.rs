//! Resolve configured column names against a header row

use crate::config::ColumnNames;
use crate::DataError;

/// Column positions of every record field within a row
///
/// Required columns must exist in the header; optional ones fall back to a
/// default value per row when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub name: Option<usize>,
    pub manufacturer: Option<usize>,
    pub mpg: usize,
    pub cylinders: usize,
    pub displacement: Option<usize>,
    pub horsepower: usize,
    pub weight: usize,
    pub acceleration: usize,
    pub model_year: usize,
    pub origin: usize,
}

impl ColumnLayout {
    /// Resolve header positions for the configured column names
    pub fn resolve(headers: &[String], names: &ColumnNames) -> Result<Self, DataError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &str| find(name).ok_or_else(|| DataError::MissingColumn(name.to_string()));

        Ok(Self {
            name: find(&names.name),
            manufacturer: find(&names.manufacturer),
            mpg: require(&names.mpg)?,
            cylinders: require(&names.cylinders)?,
            displacement: find(&names.displacement),
            horsepower: require(&names.horsepower)?,
            weight: require(&names.weight)?,
            acceleration: require(&names.acceleration)?,
            model_year: require(&names.model_year)?,
            origin: require(&names.origin)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolves_default_layout() {
        let headers = headers(&[
            "Car", "Manufacturer", "MPG", "Cylinders", "Displacement", "Horsepower",
            "Weight", "Acceleration", "Model Year", "Origin",
        ]);

        let layout = ColumnLayout::resolve(&headers, &ColumnNames::default()).unwrap();
        assert_eq!(layout.name, Some(0));
        assert_eq!(layout.model_year, 8);
        assert_eq!(layout.origin, 9);
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let headers = headers(&[
            "MPG", "Cylinders", "Horsepower", "Weight", "Acceleration", " Model Year ", "Origin",
        ]);

        let layout = ColumnLayout::resolve(&headers, &ColumnNames::default()).unwrap();
        assert_eq!(layout.name, None);
        assert_eq!(layout.displacement, None);
        assert_eq!(layout.model_year, 5);
    }

    #[test]
    fn test_missing_required_column() {
        let headers = headers(&["Car", "MPG"]);

        let err = ColumnLayout::resolve(&headers, &ColumnNames::default()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(ref c) if c == "Cylinders"));
    }
}
