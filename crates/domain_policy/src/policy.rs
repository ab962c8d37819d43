//! The Policy value and its factory
//!
//! A policy is issued once from a still-valid quotation and never mutated
//! afterwards. "Active" is the stored flag combined with the validity
//! window: a policy whose end date has passed is no longer active even if
//! the flag is still set.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{utc_today, Clock, PolicyId, QuotationId, TemporalError, ValidPeriod};

use crate::events::PolicyIssuedEvent;
use crate::owner::Owner;

/// Length of the validity window of an issued policy
pub const POLICY_TERM_YEARS: u32 = 1;

/// An issued insurance policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    id: PolicyId,
    quotation_id: QuotationId,
    owner: Owner,
    period: ValidPeriod,
    active: bool,
}

impl Policy {
    /// Rebuilds a policy from stored fields
    ///
    /// Used by store adapters; the dates are taken as stored, never
    /// recomputed.
    pub fn reconstruct(
        id: PolicyId,
        quotation_id: QuotationId,
        owner: Owner,
        start_date: NaiveDate,
        end_date: NaiveDate,
        active: bool,
    ) -> Result<Self, TemporalError> {
        Ok(Self {
            id,
            quotation_id,
            owner,
            period: ValidPeriod::new(start_date, end_date)?,
            active,
        })
    }

    pub fn id(&self) -> PolicyId {
        self.id
    }

    pub fn quotation_id(&self) -> &QuotationId {
        &self.quotation_id
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn start_date(&self) -> NaiveDate {
        self.period.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.period.end()
    }

    pub fn period(&self) -> ValidPeriod {
        self.period
    }

    /// The stored active flag, without the date check
    pub fn active_flag(&self) -> bool {
        self.active
    }

    /// True iff the flag is set and the end date is not before `today`
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.active && !self.period.has_ended_by(today)
    }

    pub fn is_active(&self) -> bool {
        self.is_active_on(utc_today())
    }

    /// Projects the policy to its issuance event
    pub fn to_event(&self) -> PolicyIssuedEvent {
        PolicyIssuedEvent {
            policy_id: self.id,
            quotation_id: self.quotation_id.clone(),
            owner_email: self.owner.email().to_string(),
        }
    }
}

/// Issues new policies dated from the injected clock
#[derive(Clone)]
pub struct PolicyFactory {
    clock: Arc<dyn Clock>,
}

impl PolicyFactory {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Issues a policy starting today and ending one year later
    ///
    /// Policy ids are time-ordered (UUID v7).
    ///
    /// # Errors
    ///
    /// Only fails when the end date falls outside the supported calendar.
    pub fn issue(&self, quotation_id: QuotationId, owner: Owner) -> Result<Policy, TemporalError> {
        let start = self.clock.today();
        Ok(Policy {
            id: PolicyId::new_v7(),
            quotation_id,
            owner,
            period: ValidPeriod::years_from(start, POLICY_TERM_YEARS)?,
            active: true,
        })
    }

    /// The date new policies start on
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl std::fmt::Debug for PolicyFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyFactory").finish_non_exhaustive()
    }
}
