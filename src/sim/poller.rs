use std::ffi::OsString;
use std::time::Duration;
use sysinfo::{ProcessesToUpdate, System};

/// Process name of the simulator this generator targets.
pub const SIM_PROCESS_NAME: &str = "FlightSimulator2024";

/// How often the presence check runs by default.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Periodic check for the simulator process. A missing process is never an
/// error; callers just keep polling until it shows up.
pub struct SimPoller {
    system: System,
    process_name: OsString,
}

impl SimPoller {
    pub fn new() -> Self {
        Self::for_process(SIM_PROCESS_NAME)
    }

    pub fn for_process(process_name: &str) -> Self {
        Self {
            system: System::new(),
            process_name: OsString::from(process_name),
        }
    }

    pub fn is_sim_running(&mut self) -> bool {
        self.system.refresh_processes(ProcessesToUpdate::All, true);
        self.system
            .processes_by_name(self.process_name.as_os_str())
            .next()
            .is_some()
    }

    /// Blocks (asynchronously) until the simulator process appears, checking
    /// once per `interval`.
    pub async fn wait_for_sim(&mut self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;
            if self.is_sim_running() {
                tracing::info!(
                    "Simulator process '{}' detected",
                    self.process_name.to_string_lossy()
                );
                return;
            }
            tracing::debug!("Simulator process not found, still polling");
        }
    }
}

impl Default for SimPoller {
    fn default() -> Self {
        Self::new()
    }
}
