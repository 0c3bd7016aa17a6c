use super::*;

#[test]
fn hint_line_lists_all_columns() {
    assert_eq!(
        required_columns_line(),
        "water_supplied_litres, water_consumed_litres, flowrate_lps, pressure_psi"
    );
}

#[test]
fn example_csv_header_matches_required_columns() {
    let header = EXAMPLE_CSV.lines().next().unwrap();
    assert_eq!(header, REQUIRED_COLUMNS.join(","));
}

#[test]
fn example_csv_rows_match_header_width() {
    let width = REQUIRED_COLUMNS.len();
    for line in EXAMPLE_CSV.lines().skip(1) {
        assert_eq!(line.split(',').count(), width);
    }
}
