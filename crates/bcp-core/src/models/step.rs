//! Wizard step definitions.

/// Number of pages in the wizard.
pub const STEP_COUNT: usize = 4;

/// One page of the capture wizard.
///
/// Steps are strictly linear; the discriminant is the zero-based position.
/// The current step lives only in the running wizard and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    /// Service identity, processes, sites and owners
    #[default]
    ServiceProcesses,
    /// Criticality (MTD) and dependencies
    BusinessImpact,
    /// Notification recipients
    Communication,
    /// Risk notes and finish
    RisksFinish,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; STEP_COUNT] = [
        WizardStep::ServiceProcesses,
        WizardStep::BusinessImpact,
        WizardStep::Communication,
        WizardStep::RisksFinish,
    ];

    /// Zero-based position of this step.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Step at a zero-based position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::ServiceProcesses => "Service & Processes",
            WizardStep::BusinessImpact => "Business Impact",
            WizardStep::Communication => "Communication",
            WizardStep::RisksFinish => "Risks & Finish",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Notification shown by the Skip Step button, for the steps that offer
    /// one. Skipping never navigates.
    pub fn skip_notice(self) -> Option<&'static str> {
        match self {
            WizardStep::BusinessImpact => Some("Step can be skipped in this prototype."),
            WizardStep::RisksFinish => Some("Step skipped"),
            WizardStep::ServiceProcesses | WizardStep::Communication => None,
        }
    }
}
