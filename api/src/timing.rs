use ark_std::{fmt, string::String, time::Duration, time::Instant};

/// The total and average wall-clock time of repeated runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeDelta {
    /// The number of runs.
    pub repetitions: usize,
    /// The time of all runs together.
    pub total: Duration,
    /// `total / repetitions`.
    pub average: Duration,
}

impl TimeDelta {
    /// Run `f` sequentially `repetitions` times and time it. The first error stops the loop.
    pub fn run_and_average<E>(
        mut f: impl FnMut() -> Result<(), E>,
        repetitions: usize,
    ) -> Result<TimeDelta, E> {
        let mut total = Duration::ZERO;
        for _ in 0..repetitions {
            let start = Instant::now();
            f()?;
            total += start.elapsed();
        }
        let average = if repetitions == 0 {
            Duration::ZERO
        } else {
            total.div_f64(repetitions as f64)
        };
        Ok(TimeDelta {
            repetitions,
            total,
            average,
        })
    }
}

impl fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3} ms avg over {} runs ({:.3} s total)",
            self.average.as_secs_f64() * 1e3,
            self.repetitions,
            self.total.as_secs_f64()
        )
    }
}

/// Format one result line: `[label] avg ...`.
pub fn fmt_time(label: &str, delta: &TimeDelta) -> String {
    format!("[{}] {}", label, delta)
}

/// Format the header printed before the runs of one instance.
pub fn fmt_header(size_pub_input: usize, size_comm_input: usize, num_constraints: usize) -> String {
    format!(
        "* public inputs: {}, committed inputs: {}, constraints: {}",
        size_pub_input, size_comm_input, num_constraints
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_every_run() {
        let mut calls = 0;
        let delta = TimeDelta::run_and_average(
            || {
                calls += 1;
                std::thread::sleep(Duration::from_millis(1));
                Ok::<(), ()>(())
            },
            3,
        )
        .unwrap();
        assert_eq!(calls, 3);
        assert_eq!(delta.repetitions, 3);
        assert!(delta.total >= Duration::from_millis(3));
        assert!(delta.average >= Duration::from_millis(1));
        assert!(delta.average <= delta.total);
    }

    #[test]
    fn stops_at_first_error() {
        let mut calls = 0;
        let res = TimeDelta::run_and_average(
            || {
                calls += 1;
                if calls == 2 {
                    Err("boom")
                } else {
                    Ok(())
                }
            },
            5,
        );
        assert_eq!(res, Err("boom"));
        assert_eq!(calls, 2);
    }

    #[test]
    fn formatting() {
        let delta = TimeDelta {
            repetitions: 4,
            total: Duration::from_millis(10),
            average: Duration::from_micros(2500),
        };
        assert_eq!(
            fmt_time("prove", &delta),
            "[prove] 2.500 ms avg over 4 runs (0.010 s total)"
        );
        assert_eq!(
            fmt_header(1, 2, 3),
            "* public inputs: 1, committed inputs: 2, constraints: 3"
        );
    }
}
