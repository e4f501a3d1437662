//! Status and confirmation message types for operation feedback.

use std::fmt;

use jiff::Timestamp;

use super::datetime::LocalDateTime;

/// Outcome line for one-shot commands (`clear`, `card --output`).
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

/// Whether a draft is stored, and when it was written.
pub struct DraftStatus {
    pub stored: bool,
    /// Whether the stored content loads as a draft.
    pub readable: bool,
    pub saved_at: Option<Timestamp>,
    /// BCP name of the stored draft, when it has one.
    pub name: Option<String>,
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Saved Draft")?;
        writeln!(f)?;
        if !self.stored {
            return writeln!(f, "No draft stored.");
        }

        writeln!(f, "- Stored: yes")?;
        if !self.readable {
            writeln!(
                f,
                "- Readable: no. The stored draft could not be read; `bcp clear` removes it."
            )?;
        }
        if let Some(name) = &self.name {
            writeln!(f, "- Name: {name}")?;
        }
        if let Some(at) = &self.saved_at {
            writeln!(f, "- Last saved: {}", LocalDateTime(at))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Draft cleared".to_string());
        assert_eq!(format!("{success}"), "Success: Draft cleared\n");

        let failure = OperationStatus::failure("Nothing to write".to_string());
        assert!(format!("{failure}").starts_with("Error:"));
    }

    #[test]
    fn test_draft_status_display() {
        let empty = DraftStatus {
            stored: false,
            readable: false,
            saved_at: None,
            name: None,
        };
        assert!(empty.to_string().contains("No draft stored."));

        let stored = DraftStatus {
            stored: true,
            readable: true,
            saved_at: Some(Timestamp::now()),
            name: Some("Payroll BCP".to_string()),
        };
        let out = stored.to_string();
        assert!(out.contains("- Stored: yes"));
        assert!(out.contains("- Name: Payroll BCP"));
        assert!(out.contains("- Last saved: "));
        assert!(!out.contains("Readable"));
    }

    #[test]
    fn test_unreadable_draft_status_display() {
        let unreadable = DraftStatus {
            stored: true,
            readable: false,
            saved_at: Some(Timestamp::now()),
            name: None,
        };
        let out = unreadable.to_string();
        assert!(!out.contains("No draft stored."));
        assert!(out.contains("- Stored: yes"));
        assert!(out.contains("- Readable: no."));
        assert!(out.contains("- Last saved: "));
    }
}
