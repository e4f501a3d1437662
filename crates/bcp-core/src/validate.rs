//! Step validators gating forward navigation.
//!
//! Each step has one pure check over the draft. A failing check never raises
//! an error; it disables Next and yields the warning shown under the form.

use crate::models::{DraftRecord, WizardStep};

pub const MISSING_BCP_NAME: &str = "Please provide the BCP name.";
pub const MISSING_SERVICE_NAME: &str = "Please provide the Service name.";
pub const INVALID_CRITICALITY: &str = "Provide a non-negative criticality value.";

/// Outcome of a step check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepValidation {
    pub ok: bool,
    /// Warning for the user; empty when `ok`.
    pub message: String,
}

impl StepValidation {
    pub fn pass() -> Self {
        Self {
            ok: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Check the draft against the requirements of `step`.
pub fn validate_step(step: WizardStep, record: &DraftRecord) -> StepValidation {
    match step {
        WizardStep::ServiceProcesses => validate_service(record),
        WizardStep::BusinessImpact => validate_business_impact(record),
        WizardStep::Communication | WizardStep::RisksFinish => StepValidation::pass(),
    }
}

fn validate_service(record: &DraftRecord) -> StepValidation {
    if record.name.trim().is_empty() {
        return StepValidation::fail(MISSING_BCP_NAME);
    }
    if record.service_name.trim().is_empty() {
        return StepValidation::fail(MISSING_SERVICE_NAME);
    }
    StepValidation::pass()
}

// Zero is rejected along with negatives and NaN: the gate treats a falsy
// value as missing.
fn validate_business_impact(record: &DraftRecord) -> StepValidation {
    let value = record.criticality_value;
    if value == 0.0 || value.is_nan() || value < 0.0 {
        return StepValidation::fail(INVALID_CRITICALITY);
    }
    StepValidation::pass()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, service_name: &str) -> DraftRecord {
        DraftRecord {
            name: name.to_string(),
            service_name: service_name.to_string(),
            ..Default::default()
        }
    }

    fn with_criticality(value: f64) -> DraftRecord {
        DraftRecord {
            criticality_value: value,
            ..Default::default()
        }
    }

    #[test]
    fn test_service_step_passes_with_both_names() {
        let result = validate_step(WizardStep::ServiceProcesses, &record("Payroll BCP", "Payroll System"));
        assert_eq!(result, StepValidation::pass());
        assert!(result.message.is_empty());
    }

    #[test]
    fn test_service_step_checks_name_first() {
        let result = validate_step(WizardStep::ServiceProcesses, &record("", ""));
        assert!(!result.ok);
        assert_eq!(result.message, MISSING_BCP_NAME);
    }

    #[test]
    fn test_service_step_rejects_whitespace_only() {
        let result = validate_step(WizardStep::ServiceProcesses, &record("  \t", "Payroll"));
        assert_eq!(result.message, MISSING_BCP_NAME);

        let result = validate_step(WizardStep::ServiceProcesses, &record("Payroll BCP", "   "));
        assert_eq!(result.message, MISSING_SERVICE_NAME);
    }

    #[test]
    fn test_business_impact_rejects_zero_negative_and_nan() {
        for value in [0.0, -0.0, -1.0, -0.5, f64::NAN] {
            let result = validate_step(WizardStep::BusinessImpact, &with_criticality(value));
            assert!(!result.ok, "value {value} should fail");
            assert_eq!(result.message, INVALID_CRITICALITY);
        }
    }

    #[test]
    fn test_business_impact_accepts_positive_values() {
        for value in [0.25, 1.0, 2.0, 72.0] {
            assert!(validate_step(WizardStep::BusinessImpact, &with_criticality(value)).ok);
        }
    }

    #[test]
    fn test_later_steps_always_pass() {
        let empty = DraftRecord {
            criticality_value: -5.0,
            ..Default::default()
        };
        assert!(validate_step(WizardStep::Communication, &empty).ok);
        assert!(validate_step(WizardStep::RisksFinish, &empty).ok);
    }

    #[test]
    fn test_validators_only_inspect_their_step() {
        let missing_names = with_criticality(3.0);
        assert!(validate_step(WizardStep::BusinessImpact, &missing_names).ok);
        assert!(!validate_step(WizardStep::ServiceProcesses, &missing_names).ok);
    }
}
