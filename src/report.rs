//! Status line formatting.
//!
//! Accumulation stays in native counter units; conversion to real time
//! happens here, at the reporting boundary, with exact integer arithmetic.

use crate::analyzer::{Analyzer, Counter};
use crate::config::TimingConfig;

use core::fmt::Write as _;

/// Maximum length of one formatted status line.
pub(crate) const STATUS_LINE: usize = 128;

pub(crate) type StatusLine = heapless::String<STATUS_LINE>;

/// Informational line emitted when a bulk report has nothing to show.
pub(crate) const EMPTY_REGISTRY_MSG: &str = "Info: no analyzer instance available to print.\r\n";

/// Split an accumulated cycle count into whole milliseconds and a six-digit
/// fraction. The intermediate product is computed in u64 so it stays exact
/// at any clock rate.
pub(crate) fn cycles_to_ms(cycles: u64, cycles_per_ms: u32) -> (u64, u32) {
    let per_ms = u64::from(cycles_per_ms);
    let int_ms = cycles / per_ms;
    let frac = (cycles % per_ms) * 1_000_000 / per_ms;
    (int_ms, frac as u32)
}

/// Whole milliseconds represented by an accumulated tick count. Identity at
/// the usual 1 kHz tick.
pub(crate) fn ticks_to_ms(ticks: u64, tick_hz: u32) -> u64 {
    ticks * 1_000 / u64::from(tick_hz)
}

/// Format one status line for an analyzer.
///
/// Counter-based modes report the elapsed time in milliseconds (cycle modes
/// with a six-digit fraction plus the raw cycle count); `PinOnly` reports
/// name and state alone.
pub(crate) fn format_status<P, C: TimingConfig>(analyzer: &Analyzer<P>) -> StatusLine {
    let mut line = StatusLine::new();
    let name = analyzer.name();
    let state = analyzer.state().as_str();

    // A line only overflows on absurdly long names; truncating the report
    // beats failing it.
    let _ = match analyzer.mode().counter() {
        Some(Counter::Cycles) => {
            let (int_ms, frac) = cycles_to_ms(analyzer.elapsed(), C::CYCLES_PER_MS);
            write!(
                line,
                "Name: {} | State: {} | Elapsed time: {}.{:06}ms | Cycles: {}\r\n",
                name,
                state,
                int_ms,
                frac,
                analyzer.elapsed()
            )
        }
        Some(Counter::Ticks) => {
            write!(
                line,
                "Name: {} | State: {} | Elapsed time: {}ms\r\n",
                name,
                state,
                ticks_to_ms(analyzer.elapsed(), C::TICK_HZ)
            )
        }
        None => write!(line, "Name: {} | State: {}\r\n", name, state),
    };

    line
}
