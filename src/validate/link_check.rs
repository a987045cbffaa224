//! External link checker run after static validation passes

use std::process::Command;

/// Outcome of running the external link checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkCheck {
    /// No command configured
    Skipped,
    Passed,
    /// The checker ran and reported problems (exit code, if any)
    Failed(Option<i32>),
    /// The checker could not be started
    Unavailable(String),
}

impl LinkCheck {
    /// Whether the outcome should fail the run. An unavailable checker does not.
    pub fn is_failure(&self) -> bool {
        matches!(self, LinkCheck::Failed(_))
    }
}

/// Run `command` (program followed by arguments) with inherited stdio
pub fn run_link_checker(command: &[String]) -> LinkCheck {
    let Some((program, args)) = command.split_first() else {
        return LinkCheck::Skipped;
    };

    log::debug!("Running `{}`", command.join(" "));
    match Command::new(program).args(args).status() {
        Ok(status) if status.success() => LinkCheck::Passed,
        Ok(status) => {
            log::warn!("{} found issues (exit {:?})", command.join(" "), status.code());
            LinkCheck::Failed(status.code())
        }
        Err(e) => {
            log::warn!("Could not run {}: {}", command.join(" "), e);
            LinkCheck::Unavailable(e.to_string())
        }
    }
}
