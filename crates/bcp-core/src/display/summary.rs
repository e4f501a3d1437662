//! Summary panel and printable response card.

use std::fmt;

use crate::summary::Summary;

/// Application header shown above the wizard and on the response card.
pub const APP_HEADER: &str = "Business Continuity Quick Capture";

const LOADED_NOTE: &str = "Loaded saved draft from local storage.";
const NOT_LOADED_NOTE: &str = "Draft not loaded yet.";

impl Summary {
    fn fmt_rows(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "- **{label}**: {value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Your Plan So Far")?;
        writeln!(f)?;
        self.fmt_rows(f)
    }
}

/// The live summary with the note on whether a stored draft was loaded at
/// startup.
pub struct SummaryPanel<'a> {
    pub summary: &'a Summary,
    pub loaded: bool,
}

impl fmt::Display for SummaryPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(
            f,
            "_{}_",
            if self.loaded { LOADED_NOTE } else { NOT_LOADED_NOTE }
        )
    }
}

/// Print layout of the summary. Adds a header and nothing else.
pub struct ResponseCard<'a>(pub &'a Summary);

impl fmt::Display for ResponseCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {APP_HEADER}")?;
        writeln!(f)?;
        writeln!(f, "## Response Card")?;
        writeln!(f)?;
        self.0.fmt_rows(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DraftRecord;

    fn payroll() -> Summary {
        Summary::project(&DraftRecord {
            name: "Payroll BCP".to_string(),
            service_name: "Payroll System".to_string(),
            criticality_value: 2.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_summary_rows_render_as_list() {
        let out = payroll().to_string();
        assert!(out.starts_with("## Your Plan So Far\n"));
        assert!(out.contains("- **Service**: Payroll System\n"));
        assert!(out.contains("- **Criticality**: 2 days\n"));
        assert!(out.contains("- **Risks**: —\n"));
    }

    #[test]
    fn test_panel_footer_reflects_load() {
        let summary = payroll();
        let loaded = SummaryPanel {
            summary: &summary,
            loaded: true,
        }
        .to_string();
        assert!(loaded.contains(LOADED_NOTE));

        let fresh = SummaryPanel {
            summary: &summary,
            loaded: false,
        }
        .to_string();
        assert!(fresh.contains(NOT_LOADED_NOTE));
    }

    #[test]
    fn test_card_carries_every_row_unchanged() {
        let summary = payroll();
        let card = ResponseCard(&summary).to_string();
        assert!(card.starts_with(&format!("# {APP_HEADER}\n")));
        for (label, value) in summary.rows() {
            assert!(card.contains(&format!("- **{label}**: {value}\n")));
        }
    }
}
