//! The leave record collection and its state machine.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::{LeaveError, LeaveResult};
use crate::models::{Decision, LeaveRecord, LeaveStatus};

/// The full collection of leave records across all employees.
///
/// Records are addressed by index, matching the view contract. All status
/// transitions go through [`LeaveLedger::decide`]; a record that is no
/// longer `applied` can never change again, it can only be removed by the
/// employee's bulk clear.
///
/// # Example
///
/// ```
/// use leave_engine::ledger::LeaveLedger;
/// use leave_engine::models::{Decision, LeaveRecord, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let mut ledger = LeaveLedger::default();
/// ledger.append(LeaveRecord {
///     employee_name: "Kavya M".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 12).unwrap(),
///     leave_type: LeaveType::Casual,
///     remarks: None,
///     status: LeaveStatus::Applied,
///     duration: 2,
/// });
/// ledger.decide(0, Decision::Approved).unwrap();
/// assert_eq!(ledger.records()[0].status, LeaveStatus::Approved);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveLedger {
    records: Vec<LeaveRecord>,
}

impl LeaveLedger {
    /// Builds a ledger from previously persisted records.
    pub fn from_records(records: Vec<LeaveRecord>) -> Self {
        Self { records }
    }

    /// Returns all records, in submission order.
    pub fn records(&self) -> &[LeaveRecord] {
        &self.records
    }

    /// Returns the record at `index`, or `RecordNotFound`.
    pub fn get(&self, index: usize) -> LeaveResult<&LeaveRecord> {
        self.records
            .get(index)
            .ok_or(LeaveError::RecordNotFound { index })
    }

    /// Returns one employee's records, in submission order.
    pub fn records_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a LeaveRecord> {
        self.records.iter().filter(move |r| r.employee_name == name)
    }

    /// Sum of `duration` over all of one employee's records.
    ///
    /// Every uncleared record counts, including rejected ones; this is the
    /// total the annual cap is checked against.
    pub fn chargeable_total_for(&self, name: &str) -> u32 {
        self.records_for(name).map(|r| r.duration).sum()
    }

    /// Every calendar date covered by any of the employee's records.
    ///
    /// Feeds the calendar display classification.
    pub fn applied_dates_for(&self, name: &str) -> BTreeSet<NaiveDate> {
        self.records_for(name)
            .flat_map(|r| {
                r.start_date
                    .iter_days()
                    .take_while(move |d| *d <= r.end_date)
            })
            .collect()
    }

    /// Appends a validated record. Records always arrive as `applied`.
    pub fn append(&mut self, record: LeaveRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Applies a manager decision to the record at `index`.
    ///
    /// Only legal while the record is `applied`; otherwise
    /// [`LeaveError::InvalidTransition`] is returned and the ledger is
    /// left untouched.
    pub fn decide(&mut self, index: usize, decision: Decision) -> LeaveResult<()> {
        let record = self
            .records
            .get_mut(index)
            .ok_or(LeaveError::RecordNotFound { index })?;
        if record.status != LeaveStatus::Applied {
            return Err(LeaveError::InvalidTransition {
                status: record.status,
            });
        }
        record.status = decision.into();
        Ok(())
    }

    /// Removes the record at `index`, only while it is still `applied`.
    ///
    /// Cancellation is deletion, not a status transition. Decided records
    /// stay in the ledger and the error reports their current status.
    pub fn cancel(&mut self, index: usize) -> LeaveResult<LeaveRecord> {
        let record = self.get(index)?;
        if record.status != LeaveStatus::Applied {
            return Err(LeaveError::InvalidTransition {
                status: record.status,
            });
        }
        Ok(self.records.remove(index))
    }

    /// Removes all of one employee's records in the given terminal status.
    ///
    /// Returns the number of records removed; zero means there was nothing
    /// to clear. Clearing `applied` records is not a defined operation and
    /// is rejected.
    pub fn clear_for(&mut self, name: &str, status: LeaveStatus) -> LeaveResult<usize> {
        if !status.is_terminal() {
            return Err(LeaveError::InvalidTransition { status });
        }
        let before = self.records.len();
        self.records
            .retain(|r| !(r.employee_name == name && r.status == status));
        Ok(before - self.records.len())
    }
}
