use log::*;
use tokio::{
    sync::mpsc,
    task::{self, JoinHandle},
    time::{Duration, Instant, interval_at},
};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One elapsed second. `generation` identifies the run of the driver that produced it, so ticks
/// still queued from a cancelled run can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

/// Owns the only repeating tick source. The game itself only knows whether its clock is running.
#[derive(Debug)]
pub struct ClockDriver {
    tx: mpsc::Sender<Tick>,
    task: Option<JoinHandle<()>>,
    generation: u64,
    period: Duration,
}

impl ClockDriver {
    pub fn new(tx: mpsc::Sender<Tick>) -> Self {
        Self::with_period(tx, TICK_PERIOD)
    }

    pub fn with_period(tx: mpsc::Sender<Tick>, period: Duration) -> Self {
        Self {
            tx,
            task: None,
            generation: 0,
            period,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// `true` if the tick came from the current run and should be applied
    pub fn is_current(&self, tick: Tick) -> bool {
        self.is_active() && tick.generation == self.generation
    }

    /// Starts ticking one period from now. Any run already in progress is cancelled first.
    pub fn start(&mut self) {
        self.stop();
        self.generation += 1;

        let tick = Tick {
            generation: self.generation,
        };
        let tx = self.tx.clone();
        let period = self.period;
        debug!("Starting tick source, generation {}", tick.generation);

        self.task = Some(task::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(tick).await.is_err() {
                    debug!("Tick receiver closed, stopping");
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Stopping tick source, generation {}", self.generation);
            task.abort();
        }
    }

    /// Starts or stops the tick source to match the game clock
    pub fn sync(&mut self, running: bool) {
        match (running, self.is_active()) {
            (true, false) => self.start(),
            (false, true) => self.stop(),
            _ => {}
        }
    }
}

impl Drop for ClockDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
