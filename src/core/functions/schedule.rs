//! Timer schedules.
//!
//! Schedules use six fields with seconds first: `0 */5 * * * *` fires every
//! five minutes on the minute.

use chrono::{DateTime, Utc};
use croner::Cron;

use crate::error::FunctionError;

/// A parsed timer schedule.
#[derive(Debug, Clone)]
pub struct Schedule {
    expr: String,
    cron: Cron,
}

impl Schedule {
    /// Parse a six-field cron expression.
    ///
    /// # Errors
    ///
    /// Returns `FunctionError::InvalidSchedule` if the expression does not
    /// have exactly six fields or any field is out of range.
    pub fn parse(expr: &str) -> Result<Self, FunctionError> {
        let invalid = |reason: String| FunctionError::InvalidSchedule {
            expr: expr.to_string(),
            reason,
        };

        let fields = expr.split_whitespace().count();
        if fields != 6 {
            return Err(invalid(format!("expected 6 fields, found {}", fields)));
        }

        let cron = Cron::new(expr)
            .with_seconds_required()
            .parse()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            expr: expr.to_string(),
            cron,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.expr
    }

    /// First fire time strictly after `after`.
    ///
    /// # Errors
    ///
    /// Returns `FunctionError::InvalidSchedule` if the schedule never fires.
    pub fn next_after(&self, after: &DateTime<Utc>) -> Result<DateTime<Utc>, FunctionError> {
        self.cron
            .find_next_occurrence(after, false)
            .map_err(|e| FunctionError::InvalidSchedule {
                expr: self.expr.clone(),
                reason: e.to_string(),
            })
    }

    /// The next `count` fire times after `after`, in order.
    ///
    /// # Errors
    ///
    /// See [`Schedule::next_after`].
    pub fn upcoming(
        &self,
        after: &DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>, FunctionError> {
        let mut times = Vec::new();
        let mut cursor = *after;
        for _ in 0..count {
            cursor = self.next_after(&cursor)?;
            times.push(cursor);
        }
        Ok(times)
    }
}
