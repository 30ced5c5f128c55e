use std::fs;

use csv_file_sort::order::Order;
use csv_file_sort::sort::Sort;

mod common;

#[test]
fn test_check_sorted() -> Result<(), anyhow::Error> {
    common::setup();
    let input_path = common::temp_file_name("./target/results/");
    common::write_csv(&input_path, &[&["n", "l"], &["1", "a"], &["2", "b"], &["3", "c"]])?;

    let csv_sort = Sort::new(input_path.clone(), "n", common::temp_file_name("./target/results/"));
    assert!(csv_sort.check()?);
    fs::remove_file(input_path)?;
    Ok(())
}

#[test]
fn test_check_sorted_desc() -> Result<(), anyhow::Error> {
    common::setup();
    let input_path = common::temp_file_name("./target/results/");
    common::write_csv(&input_path, &[&["n", "l"], &["3", "c"], &["2", "b"], &["1", "a"]])?;

    let mut csv_sort = Sort::new(input_path.clone(), "n", common::temp_file_name("./target/results/"));
    csv_sort.with_order(Order::Desc);
    assert!(csv_sort.check()?);
    fs::remove_file(input_path)?;
    Ok(())
}

#[test]
fn test_check_not_sorted() -> Result<(), anyhow::Error> {
    common::setup();
    let input_path = common::temp_file_name("./target/results/");
    common::write_csv(&input_path, &[&["n", "l"], &["2", "b"], &["1", "a"], &["3", "c"]])?;

    let csv_sort = Sort::new(input_path.clone(), "n", common::temp_file_name("./target/results/"));
    assert!(!csv_sort.check()?);
    fs::remove_file(input_path)?;
    Ok(())
}

#[test]
fn test_sort_output_passes_check() -> Result<(), anyhow::Error> {
    common::setup();
    let input_path = common::temp_file_name("./target/results/");
    let output_path = common::temp_file_name("./target/results/");
    common::write_csv(
        &input_path,
        &[&["n", "l"], &["2", "b"], &["1", "a"], &["3", "c"], &["0", "z"]],
    )?;

    let mut csv_sort = Sort::new(input_path.clone(), "n", output_path.clone());
    csv_sort.with_batch_size(2);
    csv_sort.sort()?;

    let check = Sort::new(output_path.clone(), "n", common::temp_file_name("./target/results/"));
    assert!(check.check()?);
    fs::remove_file(input_path)?;
    fs::remove_file(output_path)?;
    Ok(())
}
