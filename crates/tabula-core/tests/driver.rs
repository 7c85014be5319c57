use tabula_core::{
    driver::{Row, RowCount},
    stmt::Value,
};

#[test]
fn row_lookup_by_column() {
    let row = Row::new(
        vec!["u_id".to_string(), "u_name".to_string()],
        vec![Value::I64(7), Value::from("Ann")],
    )
    .unwrap();

    assert_eq!(row.len(), 2);
    assert_eq!(row.get("u_name"), Some(&Value::from("Ann")));
    assert_eq!(row.get("u_email"), None);
}

#[test]
fn row_rejects_mismatched_lengths() {
    let err = Row::new(
        vec!["u_id".to_string(), "u_name".to_string()],
        vec![Value::I64(7)],
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "row has 2 columns but 1 values");

    assert!(Row::new(vec![], vec![Value::Null]).is_err());
}

#[test]
fn row_count_single() {
    assert!(RowCount(1).ensure_single().is_ok());

    let err = RowCount(0).ensure_single().unwrap_err();
    assert!(err.is_invalid_record_count());
    assert!(!RowCount::from(2).is_single());
}
