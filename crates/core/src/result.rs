//! Solve result representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a packing run.
///
/// A result with fewer placements than `slots_requested` is still a
/// successful run; rejection sampling gives no fill guarantee.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult<P> {
    /// Accepted items in acceptance order.
    pub placements: Vec<P>,

    /// Number of placement slots requested.
    pub slots_requested: usize,

    /// Slots whose attempt budget ran out without an acceptance.
    pub exhausted_slots: usize,

    /// Total candidate placements tried.
    pub attempts: u64,

    /// Candidates rejected because they overlapped an accepted item.
    pub rejected_overlap: u64,

    /// Candidates rejected because they could not fit inside the boundary.
    pub rejected_out_of_range: u64,

    /// Utilization ratio (0.0 - 1.0).
    /// Calculated as: total_item_measure / boundary_measure
    pub utilization: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Number of independent runs this result was selected from.
    pub restarts: usize,

    /// Whether the run was cancelled early.
    pub cancelled: bool,

    /// Whether the time limit stopped the run early.
    pub timed_out: bool,
}

impl<P> SolveResult<P> {
    /// Creates a new empty result for the given number of slots.
    pub fn new(slots_requested: usize) -> Self {
        Self {
            placements: Vec::new(),
            slots_requested,
            exhausted_slots: 0,
            attempts: 0,
            rejected_overlap: 0,
            rejected_out_of_range: 0,
            utilization: 0.0,
            computation_time_ms: 0,
            restarts: 1,
            cancelled: false,
            timed_out: false,
        }
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of slots that were processed (filled or exhausted).
    pub fn slots_processed(&self) -> usize {
        self.placements.len() + self.exhausted_slots
    }

    /// Returns true if every requested slot received an item.
    pub fn all_placed(&self) -> bool {
        self.placements.len() == self.slots_requested
    }

    /// Returns true if at least one item was placed.
    pub fn is_successful(&self) -> bool {
        !self.placements.is_empty()
    }

    /// Returns true if the run processed every slot.
    pub fn completed_normally(&self) -> bool {
        !self.cancelled && !self.timed_out
    }

    /// Returns the fraction of attempts that were accepted.
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.placements.len() as f64 / self.attempts as f64
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }
}

impl<P> Default for SolveResult<P> {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Summary statistics for a solve result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveSummary {
    /// Slots requested.
    pub requested: usize,
    /// Items placed.
    pub placed: usize,
    /// Slots given up after exhausting their attempt budget.
    pub exhausted: usize,
    /// Total attempts.
    pub attempts: u64,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Whether the run stopped early.
    pub stopped_early: bool,
}

impl<P> From<&SolveResult<P>> for SolveSummary {
    fn from(result: &SolveResult<P>) -> Self {
        Self {
            requested: result.slots_requested,
            placed: result.placements.len(),
            exhausted: result.exhausted_slots,
            attempts: result.attempts,
            utilization_percent: result.utilization * 100.0,
            time_ms: result.computation_time_ms,
            stopped_early: !result.completed_normally(),
        }
    }
}
