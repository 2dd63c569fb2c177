// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation config.

/// Simulation config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The number of trials.
    pub trials: u64,
    /// The number of parallel tasks the trials are split across.
    pub tasks: usize,
    /// The seed for the random generators, uses OS entropy if none.
    pub seed: Option<u64>,
}

impl Config {
    /// The number of trials run by a task.
    pub(crate) fn task_trials(&self, task_id: usize) -> u64 {
        let tasks = self.num_tasks() as u64;
        let task_id = task_id as u64;
        self.trials / tasks + u64::from(task_id < self.trials % tasks)
    }

    /// The number of tasks with at least one trial.
    pub(crate) fn num_tasks(&self) -> usize {
        let max_tasks = usize::try_from(self.trials).unwrap_or(usize::MAX);
        self.tasks.clamp(1, max_tasks.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: 100_000,
            tasks: 1,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(trials: u64, tasks: usize) -> Config {
        Config {
            trials,
            tasks,
            seed: None,
        }
    }

    #[test]
    fn split_trials() {
        let c = config(10, 4);
        assert_eq!(c.num_tasks(), 4);
        let trials = (0..c.num_tasks()).map(|t| c.task_trials(t)).collect::<Vec<_>>();
        assert_eq!(trials, [3, 3, 2, 2]);

        let c = config(3, 8);
        assert_eq!(c.num_tasks(), 3);
        assert!((0..c.num_tasks()).all(|t| c.task_trials(t) == 1));

        let c = config(100, 0);
        assert_eq!(c.num_tasks(), 1);
        assert_eq!(c.task_trials(0), 100);
    }
}
