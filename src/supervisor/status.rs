use std::fmt;

/// Lifecycle of the supervised backend process.
///
/// `Exited` and `Stopped` are terminal for the current handle; a later
/// `start()` creates a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    /// Nothing has been started yet, or the last spawn attempt failed.
    NoProcess,
    /// Spawn in progress.
    Starting,
    Running,
    /// The process ended on its own; exit code when the OS reported one.
    Exited(Option<i32>),
    /// The process was terminated on request.
    Stopped,
}

impl ProcessStatus {
    pub fn is_live(&self) -> bool {
        matches!(self, ProcessStatus::Starting | ProcessStatus::Running)
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessStatus::NoProcess => write!(f, "not started"),
            ProcessStatus::Starting => write!(f, "starting"),
            ProcessStatus::Running => write!(f, "running"),
            ProcessStatus::Exited(Some(code)) => write!(f, "exited ({code})"),
            ProcessStatus::Exited(None) => write!(f, "exited"),
            ProcessStatus::Stopped => write!(f, "stopped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_starting_and_running_are_live() {
        assert!(ProcessStatus::Starting.is_live());
        assert!(ProcessStatus::Running.is_live());

        assert!(!ProcessStatus::NoProcess.is_live());
        assert!(!ProcessStatus::Exited(Some(0)).is_live());
        assert!(!ProcessStatus::Exited(None).is_live());
        assert!(!ProcessStatus::Stopped.is_live());
    }

    #[test]
    fn display_includes_exit_code_when_known() {
        assert_eq!(ProcessStatus::Exited(Some(3)).to_string(), "exited (3)");
        assert_eq!(ProcessStatus::Exited(None).to_string(), "exited");
    }
}
