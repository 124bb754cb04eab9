use std::fmt;
use std::process::Stdio;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SHUTDOWN;
use crate::config::BACKEND;

use super::status::ProcessStatus;

/// The command the supervisor launches, selected by packaging mode.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: String,
}

impl LaunchPlan {
    /// Development mode runs the interpreter invocation; packaged mode runs
    /// the bundled executable. Both start in the backend root.
    pub fn from_mode(packaged: bool) -> Self {
        let process = &BACKEND.process;

        if packaged {
            Self {
                program: process.packaged_program.to_string(),
                args: Vec::new(),
                working_dir: process.working_dir.to_string(),
            }
        } else {
            Self {
                program: process.dev_program.to_string(),
                args: process.dev_args.iter().map(|s| s.to_string()).collect(),
                working_dir: process.working_dir.to_string(),
            }
        }
    }
}

/// The backend process could not be launched.
#[derive(Debug)]
pub struct SpawnError {
    pub program: String,
    pub source: std::io::Error,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to launch backend '{}': {}", self.program, self.source)
    }
}

impl std::error::Error for SpawnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Owns at most one backend process and keeps it in lockstep with the window:
/// started before the window presents, terminated when the window closes.
///
/// The `Child` itself lives inside a monitor task on the runtime; the
/// supervisor only holds the shared status, the pid, and the shutdown signal.
pub struct BackendSupervisor {
    runtime: Handle,
    status: Arc<Mutex<ProcessStatus>>,
    pid: Arc<Mutex<Option<u32>>>,
    shutdown_tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl BackendSupervisor {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            status: Arc::new(Mutex::new(ProcessStatus::NoProcess)),
            pid: Arc::new(Mutex::new(None)),
            shutdown_tx: Mutex::new(None),
        }
    }

    pub fn status(&self) -> ProcessStatus {
        *self.status.lock().unwrap()
    }

    pub fn pid(&self) -> Option<u32> {
        *self.pid.lock().unwrap()
    }

    /// Launches the backend. A no-op when a live process is already owned. A
    /// spawn failure is returned for logging but must never abort the caller:
    /// the window still presents and fetches simply fail until a backend is
    /// reachable.
    pub fn start(&self, plan: &LaunchPlan) -> Result<(), SpawnError> {
        {
            let status = self.status.lock().unwrap();
            if status.is_live() {
                log::warn!("[backend] start requested while already {}", *status);
                return Ok(());
            }
        }

        *self.status.lock().unwrap() = ProcessStatus::Starting;

        let mut cmd = Command::new(&plan.program);
        cmd.args(&plan.args)
            .current_dir(&plan.working_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Runtime teardown can drop the monitor task before it reacts to
            // a stop request; the child must still die with it.
            .kill_on_drop(true);

        // The child must be spawned inside the runtime so it is bound to the
        // runtime's process reaper.
        let _guard = self.runtime.enter();
        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                *self.status.lock().unwrap() = ProcessStatus::NoProcess;
                return Err(SpawnError {
                    program: plan.program.clone(),
                    source: e,
                });
            }
        };

        let pid = child.id();
        *self.pid.lock().unwrap() = pid;
        *self.status.lock().unwrap() = ProcessStatus::Running;
        log::info!("[backend] launched '{}' (pid {:?})", plan.program, pid);

        // Forward child output to the diagnostic log, line by line.
        if let Some(stdout) = child.stdout.take() {
            self.runtime.spawn(async move {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    log::info!("[backend] {line}");
                }
            });
        }

        if let Some(stderr) = child.stderr.take() {
            self.runtime.spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    log::warn!("[backend] {line}");
                }
            });
        }

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        *self.shutdown_tx.lock().unwrap() = Some(shutdown_tx);

        let status = Arc::clone(&self.status);
        let pid_slot = Arc::clone(&self.pid);
        self.runtime.spawn(async move {
            monitor_child(child, shutdown_rx, status, pid_slot).await;
        });

        Ok(())
    }

    /// Requests termination of the owned process. Idempotent: calling with no
    /// live process, or after it already exited, is a no-op.
    pub fn stop(&self) {
        let sender = self.shutdown_tx.lock().unwrap().take();

        match sender {
            Some(tx) => {
                // A dead receiver means the monitor already saw the child exit.
                if tx.send(()).is_err() {
                    log::info!("[backend] stop requested after process already exited");
                }
            }
            None => {
                #[cfg(debug_assertions)]
                if PRINT_SHUTDOWN {
                    log::info!("[backend] stop requested with no owned process");
                }
            }
        }
    }
}

/// Waits for the child to end on its own or for a stop request, whichever
/// comes first, and records the terminal state. An unexpected exit is logged
/// with its code and nothing else: no restart, no app shutdown.
async fn monitor_child(
    mut child: Child,
    shutdown_rx: oneshot::Receiver<()>,
    status: Arc<Mutex<ProcessStatus>>,
    pid_slot: Arc<Mutex<Option<u32>>>,
) {
    let natural_exit = tokio::select! {
        exit = child.wait() => Some(exit),
        _ = shutdown_rx => None,
    };

    match natural_exit {
        Some(Ok(exit_status)) => {
            let code = exit_status.code();
            log::warn!("[backend] exited with code {:?}", code);
            *status.lock().unwrap() = ProcessStatus::Exited(code);
        }
        Some(Err(e)) => {
            log::error!("[backend] wait error: {e}");
            *status.lock().unwrap() = ProcessStatus::Exited(None);
        }
        None => {
            if let Err(e) = child.start_kill() {
                log::warn!("[backend] kill failed: {e}");
            }
            match child.wait().await {
                Ok(exit_status) => log::info!("[backend] terminated ({exit_status})"),
                Err(e) => log::error!("[backend] wait after kill failed: {e}"),
            }
            *status.lock().unwrap() = ProcessStatus::Stopped;
        }
    }

    *pid_slot.lock().unwrap() = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    fn wait_for(
        supervisor: &BackendSupervisor,
        predicate: impl Fn(ProcessStatus) -> bool,
    ) -> ProcessStatus {
        for _ in 0..100 {
            let status = supervisor.status();
            if predicate(status) {
                return status;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        supervisor.status()
    }

    #[cfg(unix)]
    fn shell_plan(script: &str) -> LaunchPlan {
        LaunchPlan {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
            working_dir: ".".to_string(),
        }
    }

    #[test]
    fn stop_without_a_process_is_a_noop() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let supervisor = BackendSupervisor::new(rt.handle().clone());

        supervisor.stop();
        supervisor.stop();
        assert_eq!(supervisor.status(), ProcessStatus::NoProcess);
        assert_eq!(supervisor.pid(), None);
    }

    #[test]
    fn spawn_failure_reports_error_and_leaves_no_process() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let supervisor = BackendSupervisor::new(rt.handle().clone());

        let plan = LaunchPlan {
            program: "/definitely/not/a/real/backend".to_string(),
            args: Vec::new(),
            working_dir: ".".to_string(),
        };

        let err = supervisor.start(&plan).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/a/real/backend"));
        assert_eq!(supervisor.status(), ProcessStatus::NoProcess);

        // Still a no-op afterwards.
        supervisor.stop();
        assert_eq!(supervisor.status(), ProcessStatus::NoProcess);
    }

    #[cfg(unix)]
    #[test]
    fn natural_exit_records_the_exit_code() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let supervisor = BackendSupervisor::new(rt.handle().clone());

        supervisor.start(&shell_plan("exit 7")).unwrap();

        let status = wait_for(&supervisor, |s| matches!(s, ProcessStatus::Exited(_)));
        assert_eq!(status, ProcessStatus::Exited(Some(7)));
        assert_eq!(supervisor.pid(), None);

        // Stop after a natural exit stays a no-op.
        supervisor.stop();
        assert_eq!(supervisor.status(), ProcessStatus::Exited(Some(7)));
    }

    #[cfg(unix)]
    #[test]
    fn second_start_does_not_replace_a_live_process() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let supervisor = BackendSupervisor::new(rt.handle().clone());

        supervisor.start(&shell_plan("sleep 30")).unwrap();
        let first_pid = supervisor.pid();
        assert!(first_pid.is_some());

        supervisor.start(&shell_plan("sleep 30")).unwrap();
        assert_eq!(supervisor.pid(), first_pid);

        supervisor.stop();
        let status = wait_for(&supervisor, |s| s == ProcessStatus::Stopped);
        assert_eq!(status, ProcessStatus::Stopped);
    }
}
