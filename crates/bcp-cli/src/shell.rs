//! Interactive wizard shell.
//!
//! Reads one command per line, applies it to the [`Wizard`], then re-renders:
//! any fresh notification, the inline warning for the current step, and the
//! step screen when the step changed. Input ends on `quit` or end of file.

use std::{
    cell::RefCell,
    io::{self, BufRead, IsTerminal},
    rc::Rc,
    time::Instant,
};

use anyhow::{Context, Result};
use bcp_core::{
    display::APP_HEADER, storage::SlotStorage, Edit, Navigation, Subscription, ToastSlot, Wizard,
};
use clap::error::ErrorKind;
use log::{debug, info};

use crate::{
    commands::{ensure_not_blank, parse_line, ShellCommand},
    renderer::TerminalRenderer,
};

/// What to do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Stay,
    Redraw,
    Quit,
}

pub struct Shell<S> {
    wizard: Wizard<S>,
    renderer: TerminalRenderer,
    toast: Rc<RefCell<ToastSlot>>,
    _subscription: Subscription,
}

impl<S: SlotStorage> Shell<S> {
    pub fn new(wizard: Wizard<S>, renderer: TerminalRenderer) -> Self {
        let toast = Rc::new(RefCell::new(ToastSlot::new()));
        let slot = Rc::clone(&toast);
        let subscription = wizard
            .toasts()
            .subscribe(move |message| slot.borrow_mut().show(message, Instant::now()));

        Self {
            wizard,
            renderer,
            toast,
            _subscription: subscription,
        }
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let interactive = io::stdin().is_terminal();

        self.renderer.render(&format!("# {APP_HEADER}\n\n"));
        self.redraw();
        self.show_feedback();

        let mut lines = input.lines();
        loop {
            if interactive {
                self.renderer.prompt()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read command")?;
            // Values are taken verbatim, so the untrimmed line is parsed.
            if ensure_not_blank(&line).is_err() {
                continue;
            }

            if self.handle_line(&line) == Flow::Quit {
                break;
            }
        }

        info!("Wizard closed on step '{}'", self.wizard.step());
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(e) => {
                match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        self.renderer.render(&e.render().to_string());
                    }
                    _ => {
                        let rendered = e.render().to_string();
                        self.renderer
                            .error(first_line(&rendered).trim_start_matches("error: "));
                    }
                }
                return Flow::Stay;
            }
        };

        let before = self.wizard.step();
        let flow = self.dispatch(command);
        if flow == Flow::Quit {
            return flow;
        }

        if flow == Flow::Redraw || self.wizard.step() != before {
            self.redraw();
        }
        self.show_feedback();
        flow
    }

    fn dispatch(&mut self, command: ShellCommand) -> Flow {
        match command {
            ShellCommand::Show => Flow::Redraw,
            ShellCommand::Summary => {
                self.renderer.render(&self.wizard.summary_panel());
                Flow::Stay
            }
            ShellCommand::Set(args) => self.edit(Edit::try_from(args)),
            ShellCommand::Add { target } => self.edit(Edit::try_from(target)),
            ShellCommand::Edit { target } => self.edit(Edit::try_from(target)),
            ShellCommand::Remove { target } => self.edit(Edit::try_from(target)),
            ShellCommand::Next => {
                match self.wizard.next() {
                    Navigation::AtBoundary => self
                        .renderer
                        .error("This is the last step. Use `finish` to save."),
                    Navigation::Blocked(_) => self
                        .renderer
                        .error("Next is disabled until this step is complete."),
                    Navigation::Moved(_) => {}
                }
                Flow::Stay
            }
            ShellCommand::Back => {
                if self.wizard.back() == Navigation::AtBoundary {
                    self.renderer.error("This is the first step.");
                }
                Flow::Stay
            }
            ShellCommand::Skip => {
                if self.wizard.skip().is_none() {
                    self.renderer.error("This step cannot be skipped.");
                }
                Flow::Stay
            }
            ShellCommand::Finish => {
                if !self.wizard.step().is_last() {
                    self.renderer
                        .error("Finish & Save is only available on the last step.");
                } else {
                    self.wizard.finish();
                }
                Flow::Stay
            }
            ShellCommand::Save => {
                self.wizard.save_draft();
                Flow::Stay
            }
            ShellCommand::Card => {
                self.renderer.render(&self.wizard.response_card());
                Flow::Stay
            }
            ShellCommand::Reset => {
                self.wizard.reset_form();
                Flow::Redraw
            }
            ShellCommand::Clear => {
                self.wizard.clear_draft();
                Flow::Redraw
            }
            ShellCommand::Quit => Flow::Quit,
        }
    }

    /// Apply an edit offered by the current page.
    fn edit(&mut self, edit: Result<Edit>) -> Flow {
        let edit = match edit {
            Ok(edit) => edit,
            Err(e) => {
                self.renderer.error(&e.to_string());
                return Flow::Stay;
            }
        };

        let current = self.wizard.step();
        if edit.step() != current {
            self.renderer.error(&format!(
                "That field is on step {} ({}); this is step {} ({}).",
                edit.step().index() + 1,
                edit.step(),
                current.index() + 1,
                current
            ));
            return Flow::Stay;
        }

        debug!("Applying {edit:?}");
        self.wizard.apply(&edit);
        Flow::Redraw
    }

    fn redraw(&self) {
        self.renderer.render(&self.wizard.screen());
    }

    fn show_feedback(&self) {
        if let Some(message) = self.toast.borrow_mut().take_fresh(Instant::now()) {
            self.renderer.notice(&message);
        }
        let validation = self.wizard.validation();
        if !validation.ok {
            self.renderer.warning(&validation.message);
        }
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or(text)
}
