//! Session tuning constants shared with the presentation layer.

/// Default shot count for a new session.
pub const DEFAULT_SHOTS: u32 = 5;

/// Upper bound offered by the stock shot-count slider. Presentation hint
/// only; `configure` accepts any positive count.
pub const MAX_SHOTS: u32 = 10;

/// Exclusive upper bound of the per-shot roll. Each shot draws one value
/// uniformly from [0, ROLL_MAX) and walks it against cumulative zone
/// weights; the mass above the weight sum is the miss band.
pub const ROLL_MAX: f64 = 100.0;

/// How long the presentation layer should keep a struck zone highlighted
/// (milliseconds) before issuing `ClearHighlight`.
pub const HIGHLIGHT_CLEAR_MS: u64 = 400;
