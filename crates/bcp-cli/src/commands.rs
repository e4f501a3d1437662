//! Grammar of the interactive shell.
//!
//! Each input line is parsed with clap into a [`ShellCommand`]. Field edits
//! are converted into core [`Edit`] values here so the shell never builds
//! draft records itself:
//!
//! ```text
//! input line → ShellLine (clap) → Edit → Wizard::apply
//! ```
//!
//! List positions are typed as shown on screen, starting at 1. Only the
//! words up to the field name are split; everything after the single space
//! that follows the field name is the value exactly as typed, so
//! `set risks power   outage` keeps all three spaces.

use anyhow::{anyhow, bail, Error, Result};
use bcp_core::{
    models::{CriticalityUnit, DependencyType, OwnerRole},
    params::{
        DependencyPatch, Edit, NotificationPatch, OwnerPatch, ProcessPatch, SitePatch, TextField,
    },
};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// One line typed at the wizard prompt.
#[derive(Parser)]
#[command(
    name = "wizard",
    no_binary_name = true,
    disable_version_flag = true,
    after_help = "Text fields: name, business_unit, sub_business_unit, service_name, \
                  service_description, risk_notes, criticality, unit"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand)]
pub enum ShellCommand {
    /// Show the current step
    #[command(alias = "ls")]
    Show,
    /// Show the plan so far
    Summary,
    /// Set a text field, the criticality value, or its unit
    Set(SetArgs),
    /// Add an empty entry to a list
    Add {
        #[command(subcommand)]
        target: AddTarget,
    },
    /// Change one field of a list entry
    Edit {
        #[command(subcommand)]
        target: EditTarget,
    },
    /// Remove a list entry
    #[command(alias = "rm")]
    Remove {
        #[command(subcommand)]
        target: RemoveTarget,
    },
    /// Go to the next step (requires the current step to be complete)
    #[command(alias = "n")]
    Next,
    /// Go to the previous step
    #[command(alias = "b")]
    Back,
    /// Skip the current step, where allowed
    Skip,
    /// Finish and save (last step only)
    Finish,
    /// Save the draft locally
    Save,
    /// Print the response card
    Card,
    /// Reset the form, keeping the saved draft
    Reset,
    /// Reset the form and erase the saved draft
    Clear,
    /// Leave the wizard
    #[command(aliases = ["exit", "q"])]
    Quit,
}

#[derive(Args)]
pub struct SetArgs {
    /// Field to set
    pub field: String,
    /// New value; may be empty
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub value: Vec<String>,
}

#[derive(Subcommand)]
pub enum AddTarget {
    /// Add a process
    Process,
    /// Add a site to a process
    Site {
        /// Position of the process
        process: usize,
    },
    /// Add a process owner
    Owner,
    /// Add a dependency
    Dependency,
    /// Add a notification recipient
    Recipient,
}

#[derive(Subcommand)]
pub enum EditTarget {
    /// Edit a process
    Process {
        position: usize,
        field: ProcessField,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Edit a site of a process
    Site {
        process: usize,
        site: usize,
        field: SiteField,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Edit a process owner
    Owner {
        position: usize,
        field: OwnerField,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Edit a dependency
    Dependency {
        position: usize,
        field: DependencyField,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Edit a notification recipient
    Recipient {
        position: usize,
        field: RecipientField,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum RemoveTarget {
    /// Remove a process and its sites
    Process { position: usize },
    /// Remove a site from a process
    Site { process: usize, site: usize },
    /// Remove a process owner
    Owner { position: usize },
    /// Remove a dependency
    Dependency { position: usize },
    /// Remove a notification recipient
    Recipient { position: usize },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ProcessField {
    Name,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SiteField {
    Name,
    Headcount,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OwnerField {
    Role,
    Name,
    Email,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DependencyField {
    Type,
    Label,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RecipientField {
    Name,
    Email,
}

/// Convert a position as shown on screen into a list index.
fn index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| anyhow!("Positions start at 1"))
}

/// The value argument; [`tokenize`] passes it as a single word.
fn joined(words: Vec<String>) -> String {
    words.join(" ")
}

impl TryFrom<SetArgs> for Edit {
    type Error = Error;

    fn try_from(val: SetArgs) -> Result<Self> {
        let value = joined(val.value);
        match val.field.to_lowercase().replace('-', "_").as_str() {
            "criticality" | "criticality_value" | "mtd" => Ok(Edit::criticality_from_input(&value)),
            "unit" | "criticality_unit" => {
                let unit = value.parse::<CriticalityUnit>().map_err(Error::msg)?;
                Ok(Edit::SetCriticalityUnit(unit))
            }
            _ => {
                let field = val.field.parse::<TextField>().map_err(Error::msg)?;
                Ok(Edit::SetText { field, value })
            }
        }
    }
}

impl TryFrom<AddTarget> for Edit {
    type Error = Error;

    fn try_from(val: AddTarget) -> Result<Self> {
        Ok(match val {
            AddTarget::Process => Edit::AddProcess,
            AddTarget::Site { process } => Edit::AddSite {
                process: index(process)?,
            },
            AddTarget::Owner => Edit::AddOwner,
            AddTarget::Dependency => Edit::AddDependency,
            AddTarget::Recipient => Edit::AddNotification,
        })
    }
}

impl TryFrom<EditTarget> for Edit {
    type Error = Error;

    fn try_from(val: EditTarget) -> Result<Self> {
        Ok(match val {
            EditTarget::Process {
                position,
                field: ProcessField::Name,
                value,
            } => Edit::UpdateProcess {
                index: index(position)?,
                patch: ProcessPatch {
                    name: Some(joined(value)),
                },
            },
            EditTarget::Site {
                process,
                site,
                field,
                value,
            } => {
                let value = joined(value);
                let patch = match field {
                    SiteField::Name => SitePatch {
                        name: Some(value),
                        ..Default::default()
                    },
                    SiteField::Headcount => SitePatch::headcount_from_input(&value),
                };
                Edit::UpdateSite {
                    process: index(process)?,
                    site: index(site)?,
                    patch,
                }
            }
            EditTarget::Owner {
                position,
                field,
                value,
            } => {
                let value = joined(value);
                let patch = match field {
                    OwnerField::Role => OwnerPatch {
                        role: Some(value.parse::<OwnerRole>().map_err(Error::msg)?),
                        ..Default::default()
                    },
                    OwnerField::Name => OwnerPatch {
                        name: Some(value),
                        ..Default::default()
                    },
                    OwnerField::Email => OwnerPatch {
                        email: Some(value),
                        ..Default::default()
                    },
                };
                Edit::UpdateOwner {
                    index: index(position)?,
                    patch,
                }
            }
            EditTarget::Dependency {
                position,
                field,
                value,
            } => {
                let value = joined(value);
                let patch = match field {
                    DependencyField::Type => DependencyPatch {
                        kind: Some(value.parse::<DependencyType>().map_err(Error::msg)?),
                        ..Default::default()
                    },
                    DependencyField::Label => DependencyPatch {
                        label: Some(value),
                        ..Default::default()
                    },
                };
                Edit::UpdateDependency {
                    index: index(position)?,
                    patch,
                }
            }
            EditTarget::Recipient {
                position,
                field,
                value,
            } => {
                let value = joined(value);
                let patch = match field {
                    RecipientField::Name => NotificationPatch {
                        name: Some(value),
                        ..Default::default()
                    },
                    RecipientField::Email => NotificationPatch {
                        email: Some(value),
                        ..Default::default()
                    },
                };
                Edit::UpdateNotification {
                    index: index(position)?,
                    patch,
                }
            }
        })
    }
}

impl TryFrom<RemoveTarget> for Edit {
    type Error = Error;

    fn try_from(val: RemoveTarget) -> Result<Self> {
        Ok(match val {
            RemoveTarget::Process { position } => Edit::RemoveProcess {
                index: index(position)?,
            },
            RemoveTarget::Site { process, site } => Edit::RemoveSite {
                process: index(process)?,
                site: index(site)?,
            },
            RemoveTarget::Owner { position } => Edit::RemoveOwner {
                index: index(position)?,
            },
            RemoveTarget::Dependency { position } => Edit::RemoveDependency {
                index: index(position)?,
            },
            RemoveTarget::Recipient { position } => Edit::RemoveNotification {
                index: index(position)?,
            },
        })
    }
}

/// Parse one input line.
///
/// # Errors
///
/// Returns the clap error for unknown commands, missing arguments, and
/// `help` requests; the caller decides where to print it.
pub fn parse_line(line: &str) -> std::result::Result<ShellCommand, clap::Error> {
    ShellLine::try_parse_from(tokenize(line)).map(|parsed| parsed.command)
}

/// Number of command words before a free-text value, for commands that take
/// one.
fn value_position(words: &[&str]) -> Option<usize> {
    match words {
        ["set", ..] => Some(2),
        ["edit", "site", ..] => Some(5),
        ["edit", _, ..] => Some(4),
        _ => None,
    }
}

/// Split `line` into clap arguments. The value of `set` and `edit` is kept
/// as one argument, verbatim.
fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = line.trim_start();
    while !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        tokens.push(&rest[..end]);
        rest = &rest[end..];

        if value_position(&tokens) == Some(tokens.len()) {
            let mut value = rest.chars();
            value.next();
            if !value.as_str().is_empty() {
                tokens.push(value.as_str());
            }
            break;
        }
        rest = rest.trim_start();
    }
    tokens
}

/// Reject obviously unusable input before it reaches the wizard.
pub fn ensure_not_blank(line: &str) -> Result<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("empty command");
    }
    Ok(trimmed)
}
