//! Request scope for screen loads.
//!
//! Each navigation resets the scope: in-flight loads are aborted and the
//! generation advances. Results carry the generation they were started
//! under, and the app drops any whose generation is no longer current.

use std::future::Future;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
pub struct RequestScope {
    generation: u64,
    tasks: Vec<JoinHandle<()>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Abort everything in flight and start a new generation.
    pub fn reset(&mut self) -> u64 {
        for task in self.tasks.drain(..) {
            task.abort();
        }
        self.generation += 1;
        self.generation
    }

    /// Spawn a task owned by the current generation.
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(tokio::spawn(future));
    }

    /// Tasks still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
