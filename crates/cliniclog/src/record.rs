//! Visit record types for cliniclog.
//!
//! A [`VisitRecord`] is one student's clinic visit as typed in by the front
//! desk. Every field is free text bounded by a per-field character limit.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the seven fields of a visit record, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Student reference code, the lookup key.
    Code,
    /// Student name.
    Name,
    /// Reason for the visit.
    HealthProblem,
    /// Degree program the student is enrolled in.
    Program,
    /// Visit date.
    Date,
    /// Visit time.
    Time,
    /// Contact phone number.
    Contact,
}

impl Field {
    /// All fields in the order the clerk is prompted for them.
    pub const ALL: [Field; 7] = [
        Self::Code,
        Self::Name,
        Self::HealthProblem,
        Self::Program,
        Self::Date,
        Self::Time,
        Self::Contact,
    ];

    /// Human-readable label, used for prompts and error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Code => "Student SR-Code",
            Self::Name => "Student Name",
            Self::HealthProblem => "Health Problem",
            Self::Program => "Student Program",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Contact => "Contact Number",
        }
    }

    /// Maximum number of characters accepted for this field.
    #[must_use]
    pub fn max_len(self) -> usize {
        match self {
            Self::Code => 14,
            Self::Name | Self::HealthProblem => 49,
            Self::Program | Self::Date => 29,
            Self::Time => 9,
            Self::Contact => 12,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single clinic visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    /// SR-Code of the student. Not required to be unique.
    pub code: String,
    /// Student name.
    pub name: String,
    /// Degree program.
    pub program: String,
    /// Reason for the visit.
    pub health_problem: String,
    /// Visit date, free text.
    pub date: String,
    /// Visit time, free text.
    pub time: String,
    /// Contact phone number, free text.
    pub contact: String,
}

impl VisitRecord {
    /// Build a record from values given in [`Field::ALL`] order.
    #[must_use]
    pub fn from_values(values: [String; 7]) -> Self {
        let [code, name, health_problem, program, date, time, contact] = values;
        Self {
            code,
            name,
            program,
            health_problem,
            date,
            time,
            contact,
        }
    }

    /// Get the value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Code => &self.code,
            Field::Name => &self.name,
            Field::HealthProblem => &self.health_problem,
            Field::Program => &self.program,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Contact => &self.contact,
        }
    }

    /// Check that the code is present and every field fits its limit.
    ///
    /// Lengths are counted in characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCode`] for a blank code, or
    /// [`Error::FieldTooLong`] for the first field over its limit.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(Error::EmptyCode);
        }

        for field in Field::ALL {
            let actual = self.get(field).chars().count();
            let max = field.max_len();
            if actual > max {
                return Err(Error::FieldTooLong { field, max, actual });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VisitRecord {
        VisitRecord {
            code: "21-0001".to_string(),
            name: "Juan Dela Cruz".to_string(),
            program: "BSCS".to_string(),
            health_problem: "Headache".to_string(),
            date: "2024-01-10".to_string(),
            time: "10:00".to_string(),
            contact: "09171234567".to_string(),
        }
    }

    #[test]
    fn test_field_order() {
        assert_eq!(Field::ALL[0], Field::Code);
        assert_eq!(Field::ALL[2], Field::HealthProblem);
        assert_eq!(Field::ALL[3], Field::Program);
        assert_eq!(Field::ALL[6], Field::Contact);
    }

    #[test]
    fn test_field_limits() {
        assert_eq!(Field::Code.max_len(), 14);
        assert_eq!(Field::Name.max_len(), 49);
        assert_eq!(Field::Program.max_len(), 29);
        assert_eq!(Field::HealthProblem.max_len(), 49);
        assert_eq!(Field::Date.max_len(), 29);
        assert_eq!(Field::Time.max_len(), 9);
        assert_eq!(Field::Contact.max_len(), 12);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Code.to_string(), "Student SR-Code");
        assert_eq!(Field::Contact.to_string(), "Contact Number");
    }

    #[test]
    fn test_from_values_uses_prompt_order() {
        let record = VisitRecord::from_values([
            "21-0001".to_string(),
            "Juan Dela Cruz".to_string(),
            "Headache".to_string(),
            "BSCS".to_string(),
            "2024-01-10".to_string(),
            "10:00".to_string(),
            "09171234567".to_string(),
        ]);
        assert_eq!(record, sample());
    }

    #[test]
    fn test_get() {
        let record = sample();
        for field in Field::ALL {
            assert!(!record.get(field).is_empty());
        }
        assert_eq!(record.get(Field::HealthProblem), "Headache");
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_code() {
        let mut record = sample();
        record.code = "   ".to_string();
        assert!(matches!(record.validate(), Err(Error::EmptyCode)));
    }

    #[test]
    fn test_validate_too_long() {
        let mut record = sample();
        record.time = "10:00:00 AM".to_string();
        match record.validate() {
            Err(Error::FieldTooLong { field, max, actual }) => {
                assert_eq!(field, Field::Time);
                assert_eq!(max, 9);
                assert_eq!(actual, 11);
            }
            other => panic!("expected FieldTooLong, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_at_limit() {
        let mut record = sample();
        record.code = "x".repeat(14);
        record.contact = "0".repeat(12);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_counts_characters() {
        let mut record = sample();
        // 14 characters, more than 14 bytes
        record.code = "ñ".repeat(14);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("health_problem"));
        let back: VisitRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
