use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwatchError {
    AlreadyRunning(String),
    NotRunning,
}

impl fmt::Display for StopwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopwatchError::AlreadyRunning(name) => write!(f, "task '{}' is already running", name),
            StopwatchError::NotRunning => write!(f, "no task is running"),
        }
    }
}

impl Error for StopwatchError {}

/// Times a sequence of named tasks, one at a time.
#[derive(Debug, Default)]
pub struct Stopwatch {
    tasks: Vec<(String, Duration)>,
    running: Option<(String, Instant)>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, name: &str) -> Result<(), StopwatchError> {
        if let Some((current, _)) = &self.running {
            return Err(StopwatchError::AlreadyRunning(current.clone()));
        }
        self.running = Some((name.to_string(), Instant::now()));
        Ok(())
    }

    pub fn stop(&mut self) -> Result<Duration, StopwatchError> {
        let (name, start) = self.running.take().ok_or(StopwatchError::NotRunning)?;
        let elapsed = start.elapsed();
        self.tasks.push((name, elapsed));
        Ok(elapsed)
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn last_task_time(&self) -> Option<Duration> {
        self.tasks.last().map(|(_, d)| *d)
    }

    pub fn total_time(&self) -> Duration {
        self.tasks.iter().map(|(_, d)| *d).sum()
    }

    pub fn tasks(&self) -> &[(String, Duration)] {
        &self.tasks
    }

    /// Summary table: total, then one row per task with nanoseconds and share of the total.
    pub fn pretty_print(&self) -> String {
        let total = self.total_time();
        let mut res = format!("Stopwatch: running time = {} ns\n", total.as_nanos());
        res.push_str("---------------------------------------------\n");
        res.push_str("ns         %     Task name\n");
        res.push_str("---------------------------------------------\n");
        for (name, d) in &self.tasks {
            let percent = if total.is_zero() {
                0.0
            } else {
                d.as_nanos() as f64 * 100.0 / total.as_nanos() as f64
            };
            res.push_str(&format!("{:<10} {:>3.0}%  {}\n", d.as_nanos(), percent, name));
        }
        res
    }
}
