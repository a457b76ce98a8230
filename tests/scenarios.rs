//! End-to-end scenarios over the movedit library

use movedit::models::{Money, MovementField, MovementFile};
use movedit::selection::{IndexSet, SelectionEngine, SelectionOutcome};
use movedit::services::{BatchService, BatchSummary};
use movedit::storage::{read_movement_file, write_movement_file};
use tempfile::TempDir;

const HEADER: &str = "H20250616UN20250616        0000000000000000000000000000000000000000000000000000000000000000";
const MOV_171: &str = "M462025061046607900000098240000020000000000001710020250616335525646000050620030001730000000";
const MOV_300: &str = "M0320250530230888XXXXXX10860000060000000000003000020250616017074932000044309830001570000000";
const MOV_100: &str = "M462025061046607900000098240000020000000000001000020250616335525646000050620030001730000000";
const TRAILER: &str = "T00003 000057100999999999999999999999999999999999999999999999999999999999999999999999999999";

fn sample() -> MovementFile {
    MovementFile::from_lines(&[HEADER, MOV_171, MOV_300, MOV_100, TRAILER]).unwrap()
}

fn set(indices: &[usize]) -> IndexSet {
    indices.iter().copied().collect()
}

fn assert_reconciled(file: &MovementFile) {
    let total: Money = file.movements().iter().map(|m| m.value()).sum();
    assert_eq!(file.trailer().record_count(), file.len());
    assert_eq!(file.trailer().total_value(), total);
}

#[test]
fn test_single_value_selection_keeps_one_movement() {
    let mut file = sample();
    let engine = SelectionEngine::default();

    let (outcome, summary) = BatchService::new(&mut file)
        .keep_exact_value(&engine, Money::parse("171.00").unwrap())
        .unwrap();

    assert_eq!(outcome.selection().unwrap().indices, set(&[0]));
    assert_eq!(summary, BatchSummary { kept: 1, removed: 2 });
    assert_eq!(file.trailer().record_count(), 1);
    assert_eq!(file.trailer().total_value(), Money::from_cents(17100));
}

#[test]
fn test_two_value_selection() {
    let mut file = sample();
    let engine = SelectionEngine::default();

    let (outcome, _) = BatchService::new(&mut file)
        .keep_exact_value(&engine, Money::parse("271.00").unwrap())
        .unwrap();

    assert_eq!(outcome.selection().unwrap().indices, set(&[0, 2]));
    assert_eq!(file.trailer().total_value(), Money::from_cents(27100));
    assert_reconciled(&file);
}

#[test]
fn test_unreachable_target_leaves_file_unchanged() {
    let mut file = sample();
    let before = file.clone();
    let engine = SelectionEngine::default();

    let (outcome, _) = BatchService::new(&mut file)
        .keep_exact_value(&engine, Money::parse("999.99").unwrap())
        .unwrap();

    assert!(matches!(outcome, SelectionOutcome::NoExactCombination { .. }));
    assert_eq!(file, before);
}

#[test]
fn test_trailer_count_mismatch_is_rejected() {
    let trailer = TRAILER.replacen("T00003", "T00002", 1);
    let err = MovementFile::from_lines(&[HEADER, MOV_171, MOV_300, MOV_100, trailer.as_str()])
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_delete_by_acquirer_removes_matching_movements() {
    let mut file = sample();
    let summary = BatchService::new(&mut file).delete_by_acquirer("46").unwrap();

    assert_eq!(summary.removed, 2);
    assert_eq!(file.trailer().record_count(), 1);
    assert_reconciled(&file);
}

#[test]
fn test_trailer_stays_reconciled_through_mutations() {
    let mut file = sample();
    assert_reconciled(&file);

    file.edit(1, MovementField::SaleValue, "250,55").unwrap();
    assert_reconciled(&file);
    assert_eq!(file.trailer().total_value(), Money::from_cents(17100 + 25055 + 10000));

    file.delete(0).unwrap();
    assert_reconciled(&file);

    BatchService::new(&mut file).keep_only(&set(&[1])).unwrap();
    assert_reconciled(&file);
    assert_eq!(file.trailer().total_value(), Money::from_cents(10000));
}

#[test]
fn test_failed_edit_keeps_previous_state() {
    let mut file = sample();
    let before = file.clone();

    assert!(file.edit(0, MovementField::AcquirerCode, "ABC").is_err());
    assert!(file.edit(9, MovementField::Nsu, "1").unwrap_err().is_index());
    assert_eq!(file, before);
}

#[test]
fn test_keep_only_twice_is_stable() {
    let mut file = sample();
    BatchService::new(&mut file).keep_only(&set(&[0, 1])).unwrap();
    let once = file.serialize();
    BatchService::new(&mut file).keep_only(&set(&[0, 1])).unwrap();
    assert_eq!(file.serialize(), once);
}

#[test]
fn test_selection_is_deterministic_across_loads() {
    let engine = SelectionEngine::default();
    let target = Money::from_cents(40000);
    let first = engine.find_in_file(&sample(), target);
    let second = engine.find_in_file(&sample(), target);
    assert_eq!(first, second);
    assert_eq!(first.selection().unwrap().indices, set(&[1, 2]));
}

#[test]
fn test_disk_round_trip_after_edit() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("movs.txt");
    std::fs::write(
        &path,
        [HEADER, MOV_171, MOV_300, MOV_100, TRAILER].join("\n") + "\n",
    )
    .unwrap();

    let mut file = read_movement_file(&path).unwrap();
    file.edit(2, MovementField::SaleValue, "100.005").unwrap();
    write_movement_file(&path, &file).unwrap();

    let reloaded = read_movement_file(&path).unwrap();
    assert_eq!(reloaded, file);
    assert_eq!(reloaded.movements()[2].value(), Money::from_cents(10001));
    assert_eq!(reloaded.trailer().total_value(), Money::from_cents(57101));
}
