use crate::board::Board;
use std::time::{Duration, Instant};

/// Counts the nodes of the game tree below a board. Won and drawn boards are leaves.
pub fn perft(board: &Board, depth: u32) -> usize {
    if depth == 0 || board.status().is_terminal() {
        return 1;
    }
    board
        .children()
        .iter()
        .map(|(_, child)| perft(child, depth - 1))
        .sum()
}

pub struct Benchmark {
    pub depth: u32,
    pub node_count: usize,
    pub duration: Duration,
    pub runs: usize,
}

impl Benchmark {
    pub fn run(board: &Board, depth: u32) -> Benchmark {
        let start_time = Instant::now();
        let node_count = perft(board, depth);
        let duration = start_time.elapsed();

        Benchmark {
            depth,
            node_count,
            duration,
            runs: 1,
        }
    }

    pub fn empty() -> Benchmark {
        Benchmark {
            depth: 0,
            node_count: 0,
            duration: Duration::from_secs(0),
            runs: 0,
        }
    }

    pub fn add(&self, other: &Benchmark) -> Benchmark {
        Benchmark {
            depth: self.depth.max(other.depth),
            node_count: self.node_count + other.node_count,
            duration: self.duration + other.duration,
            runs: self.runs + other.runs,
        }
    }

    pub fn get_speed(&self) -> f64 {
        let seconds = self.duration.as_secs_f64();
        if seconds == 0.0 {
            return 0.0;
        }
        self.node_count as f64 / seconds
    }

    pub fn print(&self) {
        let width = 6;
        if self.runs == 1 {
            println!("Nodes at depth {}: {}", self.depth, self.node_count);
        }
        println!(
            "Total time: {:>width$.3} s",
            self.duration.as_secs_f64(),
            width = width
        );
        println!(
            "Total work: {}",
            format_large_number(self.node_count as f64, width)
        );
        println!(
            "Speed:      {}/s",
            format_large_number(self.get_speed(), width)
        );
    }
}

pub fn format_large_number(n: f64, width: usize) -> String {
    if n < 100_000.0 {
        format!("{:>width$}", n, width = width)
    } else {
        format!("{:>width$.3} M", n / 1_000_000.0, width = width)
    }
}
