//! The session-aware operation surface over the leave ledger.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::calculation::validate;
use crate::config::ConfigLoader;
use crate::error::{LeaveError, LeaveResult};
use crate::models::{
    Decision, Employee, HolidayCalendar, LeaveRecord, LeaveStatus, LeaveType, Role, Session,
};
use crate::storage::JsonStore;

use super::ledger::LeaveLedger;

const USER_KEY: &str = "user";
const LEDGER_KEY: &str = "holidays";

/// The result of a successfully submitted leave request.
///
/// The weekend and holiday subsets are informational notices for the user;
/// the request was accepted regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Ledger index of the newly created record.
    pub index: usize,
    /// Chargeable days consumed by the request.
    pub duration: u32,
    /// Selected days that fall on a weekend.
    pub weekend_days: Vec<NaiveDate>,
    /// Selected days that fall on a public holiday.
    pub holiday_days: Vec<NaiveDate>,
}

/// The explicit store every component works against.
///
/// Owns the ledger, the current session and the reference data, and writes
/// state through to a [`JsonStore`] after every mutation. All mutation goes
/// through the operations below; there is no ambient state.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::ledger::LeaveStore;
/// use leave_engine::models::{LeaveType, Role, Session};
/// use leave_engine::storage::JsonStore;
/// use chrono::NaiveDate;
///
/// let config = ConfigLoader::load("./config/leave")?;
/// let storage = JsonStore::open("./data")?;
/// let mut store = LeaveStore::open(storage, &config);
///
/// store.login(Session::new(Role::Employee, "Kavya M"));
/// let outcome = store.apply_leave(
///     NaiveDate::from_ymd_opt(2025, 8, 11),
///     NaiveDate::from_ymd_opt(2025, 8, 15),
///     LeaveType::Casual,
///     None,
/// )?;
/// println!("charged {} day(s)", outcome.duration);
/// # Ok::<(), leave_engine::error::LeaveError>(())
/// ```
#[derive(Debug)]
pub struct LeaveStore {
    storage: JsonStore,
    ledger: LeaveLedger,
    session: Option<Session>,
    calendar: HolidayCalendar,
    roster: Vec<Employee>,
    annual_cap: u32,
}

impl LeaveStore {
    /// Opens a store over the given storage, restoring persisted state.
    ///
    /// Missing or corrupt documents yield empty state rather than a
    /// startup failure.
    pub fn open(storage: JsonStore, config: &ConfigLoader) -> Self {
        let session = storage.get::<Session>(USER_KEY);
        let records = storage.get::<Vec<LeaveRecord>>(LEDGER_KEY).unwrap_or_default();

        Self {
            storage,
            ledger: LeaveLedger::from_records(records),
            session,
            calendar: config.holiday_calendar(),
            roster: config.roster().to_vec(),
            annual_cap: config.annual_cap(),
        }
    }

    /// Logs a user in, replacing any existing session.
    pub fn login(&mut self, session: Session) {
        info!(name = %session.name, role = %session.role, "user logged in");
        self.session = Some(session);
        self.persist_session();
    }

    /// Ends the current session.
    pub fn logout(&mut self) {
        self.session = None;
        self.storage.remove(USER_KEY);
    }

    /// Returns the current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the employee roster.
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Returns the public holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the annual cap in force.
    pub fn annual_cap(&self) -> u32 {
        self.annual_cap
    }

    /// Returns every record in the ledger, in submission order.
    pub fn records(&self) -> &[LeaveRecord] {
        self.ledger.records()
    }

    /// Returns the current employee's records.
    pub fn my_records(&self) -> LeaveResult<Vec<&LeaveRecord>> {
        let session = self.require_session()?;
        Ok(self.ledger.records_for(&session.name).collect())
    }

    /// Returns the current employee's chargeable total.
    pub fn chargeable_total(&self) -> LeaveResult<u32> {
        let session = self.require_session()?;
        Ok(self.ledger.chargeable_total_for(&session.name))
    }

    /// Returns every date covered by the current employee's records, for
    /// calendar display.
    pub fn applied_dates(&self) -> LeaveResult<BTreeSet<NaiveDate>> {
        let session = self.require_session()?;
        Ok(self.ledger.applied_dates_for(&session.name))
    }

    /// Submits a leave request for the current employee, using today's
    /// calendar date for the past-date check.
    pub fn apply_leave(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        leave_type: LeaveType,
        remarks: Option<String>,
    ) -> LeaveResult<ApplyOutcome> {
        self.apply_leave_as_of(start, end, leave_type, remarks, Local::now().date_naive())
    }

    /// Submits a leave request validating against an explicit `today`.
    ///
    /// Runs the full validation chain against the employee's existing
    /// chargeable total, then appends an `applied` record whose `duration`
    /// is fixed at this moment and never recomputed.
    pub fn apply_leave_as_of(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        leave_type: LeaveType,
        remarks: Option<String>,
        today: NaiveDate,
    ) -> LeaveResult<ApplyOutcome> {
        let session = self.require_role(Role::Employee, "submit leave requests")?;
        let name = session.name.clone();

        let existing_total = self.ledger.chargeable_total_for(&name);
        let validated = validate(
            start,
            end,
            existing_total,
            &self.calendar,
            today,
            self.annual_cap,
        )?;

        // validate only succeeds with a non-empty inclusive range
        let (start, end) = match (validated.dates.first(), validated.dates.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(LeaveError::MissingDates),
        };
        let index = self.ledger.append(LeaveRecord {
            employee_name: name.clone(),
            start_date: start,
            end_date: end,
            leave_type,
            remarks,
            status: LeaveStatus::Applied,
            duration: validated.duration,
        });
        info!(
            name = %name,
            %start,
            %end,
            duration = validated.duration,
            "leave request submitted"
        );
        self.persist_ledger();

        Ok(ApplyOutcome {
            index,
            duration: validated.duration,
            weekend_days: validated.weekend_days,
            holiday_days: validated.holiday_days,
        })
    }

    /// Cancels the current employee's own applied request at `index`.
    ///
    /// The record is removed entirely. Decided records cannot be cancelled
    /// and stay in the ledger.
    pub fn cancel_request(&mut self, index: usize) -> LeaveResult<()> {
        let session = self.require_role(Role::Employee, "cancel leave requests")?;
        let name = session.name.clone();

        let record = self.ledger.get(index)?;
        if record.employee_name != name {
            return Err(LeaveError::PermissionDenied {
                action: "cancel another employee's request".to_string(),
                role: Role::Employee,
            });
        }

        let removed = self.ledger.cancel(index)?;
        info!(name = %name, start = %removed.start_date, "leave request cancelled");
        self.persist_ledger();
        Ok(())
    }

    /// Applies a manager decision to the record at `index`.
    pub fn handle_action(&mut self, index: usize, decision: Decision) -> LeaveResult<()> {
        self.require_role(Role::Manager, "decide leave requests")?;

        self.ledger.decide(index, decision)?;
        let record = &self.ledger.records()[index];
        info!(
            name = %record.employee_name,
            status = %record.status,
            "leave request decided"
        );
        self.persist_ledger();
        Ok(())
    }

    /// Removes all of the current employee's approved records.
    ///
    /// Returns the number removed; zero means there was nothing to clear.
    pub fn clear_approved(&mut self) -> LeaveResult<usize> {
        self.clear_terminal(LeaveStatus::Approved)
    }

    /// Removes all of the current employee's rejected records.
    ///
    /// Returns the number removed; zero means there was nothing to clear.
    pub fn clear_rejected(&mut self) -> LeaveResult<usize> {
        self.clear_terminal(LeaveStatus::Rejected)
    }

    fn clear_terminal(&mut self, status: LeaveStatus) -> LeaveResult<usize> {
        let session = self.require_role(Role::Employee, "clear their own records")?;
        let name = session.name.clone();

        let cleared = self.ledger.clear_for(&name, status)?;
        if cleared > 0 {
            info!(name = %name, %status, cleared, "cleared decided records");
            self.persist_ledger();
        }
        Ok(cleared)
    }

    fn require_session(&self) -> LeaveResult<&Session> {
        self.session.as_ref().ok_or(LeaveError::NotLoggedIn)
    }

    fn require_role(&self, role: Role, action: &str) -> LeaveResult<&Session> {
        let session = self.require_session()?;
        if session.role != role {
            return Err(LeaveError::PermissionDenied {
                action: action.to_string(),
                role: session.role,
            });
        }
        Ok(session)
    }

    // Write-through persistence. A failed write is logged and the in-memory
    // mutation stands; there is no rollback or retry.
    fn persist_ledger(&self) {
        if let Err(e) = self.storage.set(LEDGER_KEY, &self.ledger.records()) {
            warn!(error = %e, "failed to persist ledger");
        }
    }

    fn persist_session(&self) {
        if let Some(session) = &self.session {
            if let Err(e) = self.storage.set(USER_KEY, session) {
                warn!(error = %e, "failed to persist session");
            }
        }
    }
}
