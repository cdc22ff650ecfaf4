//! One-directional reconciliation of a candidate parameter table against a
//! reference authority.
//!
//! The reconciler walks the candidate in table order and looks each code
//! triple up in the reference. Parameters present only in the reference are
//! never examined. Codes in the reserved/local range (category or number
//! >= 192) are per-center definitions and are deliberately not flagged as
//! `Extra` when the reference lacks them; they still appear in the
//! missing-from-other tally.

use std::fmt;

use tracing::debug;

use crate::clean::{clean_name, clean_unit, is_unitless};
use crate::parameter::Parameter;
use crate::table::ParameterTable;
use crate::units::UnitSystem;

/// Codes at or above this value are reserved for per-center use.
const RESERVED_RANGE_START: u8 = 192;

/// A single finding produced during reconciliation.
#[derive(Debug, Clone)]
pub enum Discrepancy {
    /// Standard-range parameter the reference authority does not define.
    Extra(Parameter),
    /// Same code triple, names disagree after cleaning.
    Conflict {
        candidate: Parameter,
        reference: Parameter,
    },
    /// Same code triple, units are dimensionally irreconcilable (or one
    /// side could not be parsed).
    UdunitsMismatch {
        candidate: Parameter,
        reference: Parameter,
    },
    /// Candidate code triple absent from the reference, any range.
    MissingFromOther(Parameter),
}

/// Aggregated outcome of one reconciliation pass.
///
/// A pure function of the two input tables and the oracle's answers:
/// counts plus the ordered findings, with the involved parameters carried
/// verbatim for rendering.
#[derive(Debug, Clone)]
pub struct DiscrepancyReport {
    pub candidate_name: String,
    pub reference_name: String,
    pub extra: usize,
    pub conflict: usize,
    pub udunits_mismatch: usize,
    pub missing_from_other: usize,
    pub records: Vec<Discrepancy>,
}

impl DiscrepancyReport {
    fn new(candidate_name: &str, reference_name: &str) -> Self {
        Self {
            candidate_name: candidate_name.to_string(),
            reference_name: reference_name.to_string(),
            extra: 0,
            conflict: 0,
            udunits_mismatch: 0,
            missing_from_other: 0,
            records: Vec::new(),
        }
    }

    /// Whether any naming or unit findings were recorded.
    pub fn has_conflicts(&self) -> bool {
        self.conflict > 0 || self.udunits_mismatch > 0
    }
}

/// Compares a candidate table against a reference authority.
pub struct TableReconciler<'a> {
    units: &'a dyn UnitSystem,
}

impl<'a> TableReconciler<'a> {
    pub fn new(units: &'a dyn UnitSystem) -> Self {
        Self { units }
    }

    /// Reconcile `candidate` against `reference`.
    ///
    /// Neither table is mutated. Unit-oracle parse failures are local:
    /// they become [`Discrepancy::UdunitsMismatch`] records and never
    /// abort the pass.
    pub fn reconcile(
        &self,
        candidate: &ParameterTable,
        reference: &ParameterTable,
    ) -> DiscrepancyReport {
        let mut report = DiscrepancyReport::new(candidate.name(), reference.name());

        for p1 in candidate.iter() {
            let Some(p2) = reference.get(p1.key()) else {
                if p1.category < RESERVED_RANGE_START && p1.number < RESERVED_RANGE_START {
                    report.extra += 1;
                    report.records.push(Discrepancy::Extra(p1.clone()));
                }
                continue;
            };

            let n1 = clean_name(&p1.name);
            let n2 = clean_name(&p2.name);
            if !n1.eq_ignore_ascii_case(&n2) {
                report.conflict += 1;
                report.records.push(Discrepancy::Conflict {
                    candidate: p1.clone(),
                    reference: p2.clone(),
                });
            }

            let u1 = clean_unit(&p1.unit);
            let u2 = clean_unit(&p2.unit);
            if !u1.eq_ignore_ascii_case(&u2) && self.units_mismatch(p1, &u1, &u2) {
                report.udunits_mismatch += 1;
                report.records.push(Discrepancy::UdunitsMismatch {
                    candidate: p1.clone(),
                    reference: p2.clone(),
                });
            }
        }

        for p1 in candidate.iter() {
            if reference.get(p1.key()).is_none() {
                report.missing_from_other += 1;
                report.records.push(Discrepancy::MissingFromOther(p1.clone()));
            }
        }

        report
    }

    /// Whether two cleaned, textually-different unit strings disagree in
    /// substance.
    fn units_mismatch(&self, p1: &Parameter, u1: &str, u2: &str) -> bool {
        let unitless1 = is_unitless(u1);
        let unitless2 = is_unitless(u2);
        if unitless1 != unitless2 {
            // One side has a physical dimension, the other does not.
            return true;
        }
        if unitless1 {
            // Both agree there is no physical unit.
            return false;
        }
        match self.units.is_compatible(u1, u2) {
            Ok(compatible) => !compatible,
            Err(e) => {
                debug!(id = %p1.id(), error = %e, "unit oracle could not parse");
                true
            }
        }
    }
}

impl fmt::Display for DiscrepancyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table 1 : {}", self.candidate_name)?;
        writeln!(f, "Table 2 : {}", self.reference_name)?;
        for record in &self.records {
            match record {
                Discrepancy::Extra(p) => writeln!(f, "  WMO missing {}", p)?,
                Discrepancy::Conflict {
                    candidate,
                    reference,
                }
                | Discrepancy::UdunitsMismatch {
                    candidate,
                    reference,
                } => {
                    writeln!(
                        f,
                        "  p1={:>10} {:>40} {:>15} {:>15} {}",
                        candidate.id(),
                        candidate.name,
                        candidate.unit,
                        candidate.abbrev,
                        candidate.description
                    )?;
                    writeln!(
                        f,
                        "  p2={:>10} {:>40} {:>15} {:>15} {}",
                        reference.id(),
                        reference.name,
                        reference.unit,
                        reference.abbrev,
                        reference.description
                    )?;
                    writeln!(f)?;
                }
                Discrepancy::MissingFromOther(_) => {}
            }
        }
        writeln!(
            f,
            "Conflicts={} extra={} udunits={}",
            self.conflict, self.extra, self.udunits_mismatch
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Parameters in {} not in {}",
            self.candidate_name, self.reference_name
        )?;
        for record in &self.records {
            if let Discrepancy::MissingFromOther(p) = record {
                writeln!(f, "  {}", p)?;
            }
        }
        writeln!(f, " missing={}", self.missing_from_other)?;
        Ok(())
    }
}
