//! End-to-end reconciliation tests over YAML-loaded tables.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use param_tables::{load_table, SiUnitSystem, TableReconciler};
use tempfile::tempdir;

fn write_table(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

const CANDIDATE: &str = r#"
table: "NCEP operational"
parameters:
  - discipline: 0
    category: 0
    number: 0
    name: Temperature
    unit: K
    abbrev: TMP
  - discipline: 0
    category: 1
    number: 0
    name: Specific humidity
    unit: "1"
    abbrev: SPFH
  - discipline: 0
    category: 2
    number: 1
    name: Wind speed
    unit: m/s
    abbrev: WIND
  - discipline: 0
    category: 5
    number: 3
    name: Net long-wave radiation flux
    unit: W/m2
    abbrev: NLWRF
  - discipline: 0
    category: 200
    number: 5
    name: Center local product
    unit: m
    abbrev: LOCAL
"#;

const REFERENCE: &str = r#"
table: "WMO standard"
parameters:
  - discipline: 0
    category: 0
    number: 0
    name: Temperature
    unit: K
    abbrev: TMP
  - discipline: 0
    category: 1
    number: 0
    name: Specific humidity
    unit: kg/kg
    abbrev: SPFH
  - discipline: 0
    category: 2
    number: 1
    name: Wind speed
    unit: knots
    abbrev: WIND
"#;

// ============================================================================
// Full-pass behavior
// ============================================================================

#[test]
fn test_reconcile_loaded_tables() {
    let dir = tempdir().unwrap();
    let candidate = load_table(&write_table(dir.path(), "cand.yaml", CANDIDATE)).unwrap();
    let reference = load_table(&write_table(dir.path(), "ref.yaml", REFERENCE)).unwrap();

    let units = SiUnitSystem::new();
    let report = TableReconciler::new(&units).reconcile(&candidate, &reference);

    // 0.5.3 is standard-range and unmatched; 0.200.5 is reserved-range.
    assert_eq!(report.extra, 1);
    // "1" vs "kg/kg" is an asymmetric unitless mismatch; "m/s" vs "knots"
    // is dimensionally compatible.
    assert_eq!(report.udunits_mismatch, 1);
    assert_eq!(report.conflict, 0);
    // Both unmatched codes count here, reserved range included.
    assert_eq!(report.missing_from_other, 2);
}

#[test]
fn test_reconcile_is_one_directional() {
    let dir = tempdir().unwrap();
    let candidate = load_table(&write_table(dir.path(), "cand.yaml", CANDIDATE)).unwrap();
    let reference = load_table(&write_table(dir.path(), "ref.yaml", REFERENCE)).unwrap();

    let units = SiUnitSystem::new();
    // Swapped direction: the three reference parameters all match, so the
    // pass sees no coverage gaps at all.
    let report = TableReconciler::new(&units).reconcile(&reference, &candidate);
    assert_eq!(report.extra, 0);
    assert_eq!(report.missing_from_other, 0);
}

#[test]
fn test_reflexive_reconcile_is_clean() {
    let dir = tempdir().unwrap();
    let candidate = load_table(&write_table(dir.path(), "cand.yaml", CANDIDATE)).unwrap();

    let units = SiUnitSystem::new();
    let report = TableReconciler::new(&units).reconcile(&candidate, &candidate);
    assert_eq!(report.conflict, 0);
    assert_eq!(report.udunits_mismatch, 0);
    assert_eq!(report.extra, 0);
    assert_eq!(report.missing_from_other, 0);
}

// ============================================================================
// Rendering contract
// ============================================================================

#[test]
fn test_rendered_report_shape() {
    let dir = tempdir().unwrap();
    let candidate = load_table(&write_table(dir.path(), "cand.yaml", CANDIDATE)).unwrap();
    let reference = load_table(&write_table(dir.path(), "ref.yaml", REFERENCE)).unwrap();

    let units = SiUnitSystem::new();
    let report = TableReconciler::new(&units).reconcile(&candidate, &reference);
    let text = report.to_string();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Table 1 : NCEP operational"));
    assert_eq!(lines.next(), Some("Table 2 : WMO standard"));

    assert_eq!(
        text.lines().filter(|l| l.starts_with("  WMO missing")).count(),
        report.extra
    );
    assert_eq!(
        text.lines().filter(|l| l.starts_with("  p1=")).count(),
        report.conflict + report.udunits_mismatch
    );
    assert_eq!(
        text.lines().filter(|l| l.starts_with("  p2=")).count(),
        report.conflict + report.udunits_mismatch
    );
    assert!(text.contains("Conflicts=0 extra=1 udunits=1"));
    assert!(text.contains("Parameters in NCEP operational not in WMO standard"));
    assert!(text.contains(" missing=2"));
}

#[test]
fn test_missing_section_lists_reserved_codes() {
    let dir = tempdir().unwrap();
    let candidate = load_table(&write_table(dir.path(), "cand.yaml", CANDIDATE)).unwrap();
    let reference = load_table(&write_table(dir.path(), "ref.yaml", REFERENCE)).unwrap();

    let units = SiUnitSystem::new();
    let report = TableReconciler::new(&units).reconcile(&candidate, &reference);
    let text = report.to_string();

    // The reserved-range code never shows up as "WMO missing", but does
    // appear in the second section.
    let (head, tail) = text.split_once("Parameters in").unwrap();
    assert!(!head.contains("0.200.5"));
    assert!(tail.contains("0.200.5"));
}
