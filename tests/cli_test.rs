use assert_cmd::prelude::*;
use std::process::Command;
use tempfile;

type STDRESULT = Result<(), Box<dyn std::error::Error>>;

fn round_trip(data: &[u8]) -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("input.bin");
    let compressed_path = temp_dir.path().join("input.nxt");
    let expanded_path = temp_dir.path().join("output.bin");
    std::fs::write(&in_path, data)?;

    Command::cargo_bin("nextcomp")?
        .arg("-c")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&compressed_path)
        .assert()
        .success();

    Command::cargo_bin("nextcomp")?
        .arg("-e")
        .arg("-i").arg(&compressed_path)
        .arg("-o").arg(&expanded_path)
        .assert()
        .success();

    assert_eq!(std::fs::read(&expanded_path)?, data);
    Ok(())
}

#[test]
fn round_trips_prose() -> STDRESULT {
    round_trip(b"I am Sam. Sam I am. I do not like this Sam I am.\n")
}

#[test]
fn round_trips_every_byte_value() -> STDRESULT {
    let data: Vec<u8> = (0..=255u8).cycle().take(2048).collect();
    round_trip(&data)
}

#[test]
fn compress_requires_exactly_one_of_compress_or_expand() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("input.bin");
    std::fs::write(&in_path, b"hello")?;

    Command::cargo_bin("nextcomp")?
        .arg("-i").arg(&in_path)
        .assert()
        .failure();

    Command::cargo_bin("nextcomp")?
        .arg("-c").arg("-e")
        .arg("-i").arg(&in_path)
        .assert()
        .failure();

    Ok(())
}

#[test]
fn compress_reports_nonzero_exit_on_empty_input() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("empty.bin");
    std::fs::write(&in_path, b"")?;
    let out_path = temp_dir.path().join("empty.nxt");

    Command::cargo_bin("nextcomp")?
        .arg("-c")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&out_path)
        .assert()
        .failure();

    Ok(())
}
