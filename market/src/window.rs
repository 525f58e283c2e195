use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::trade::RecordedTrade;

/// Default lookback for volume weighted prices.
pub const DEFAULT_LOOKBACK: Duration = Duration::from_secs(5 * 60);

/// Time window ending at "now" used to pick trades for price metrics.
///
/// The trade log itself is never evicted; the window only filters at query
/// time, so the same log can answer for any `now`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeWindow {
    lookback: TimeDelta,
}

impl TradeWindow {
    pub fn new(lookback: Duration) -> Self {
        Self {
            lookback: TimeDelta::from_std(lookback).unwrap_or(TimeDelta::MAX),
        }
    }

    pub fn lookback(&self) -> TimeDelta {
        self.lookback
    }

    /// Oldest timestamp still inside the window.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(self.lookback)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// `now - ts <= lookback`. Timestamps ahead of `now` count as inside.
    pub fn contains(&self, now: DateTime<Utc>, ts: DateTime<Utc>) -> bool {
        ts >= self.cutoff(now)
    }

    /// Trades from `trades` that fall inside the window.
    pub fn select<'a, I>(
        &self,
        now: DateTime<Utc>,
        trades: I,
    ) -> impl Iterator<Item = &'a RecordedTrade>
    where
        I: IntoIterator<Item = &'a RecordedTrade>,
    {
        let window = *self;
        trades
            .into_iter()
            .filter(move |t| window.contains(now, t.timestamp))
    }
}

impl Default for TradeWindow {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKBACK)
    }
}
