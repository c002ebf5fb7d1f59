use std::fs;
use std::io::{Read, Write};

use assert_cmd::Command;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use tempfile::TempDir;

const A_FASTA: &str = ">id1 first\nAAA\n>id2 second\nCCC\n";
const B_FASTA: &str = ">id3 third\nGGG\n";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> String{
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn seqpaste() -> Command{
    Command::cargo_bin("seqpaste").unwrap()
}

#[test]
fn pastes_sequences_by_default() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fasta", A_FASTA);
    let b = write_file(&dir, "b.fasta", B_FASTA);

    seqpaste()
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(">id1 first\nAAAGGG\n>id2 second\nCCC\n");

    Ok(())
}

#[test]
fn pastes_identifiers_with_empty_join() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fasta", A_FASTA);
    let b = write_file(&dir, "b.fasta", B_FASTA);

    seqpaste()
        .arg("-i")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(">id1id3 first\nAAA\n>id2 second\nCCC\n");

    Ok(())
}

#[test]
fn pastes_descriptions_with_space_join() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fasta", A_FASTA);
    let b = write_file(&dir, "b.fasta", B_FASTA);

    seqpaste()
        .arg("-d")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(">id1 first third\nAAA\n>id2 second\nCCC\n");

    Ok(())
}

#[test]
fn join_string_understands_tab_escape() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fasta", A_FASTA);
    let b = write_file(&dir, "b.fasta", B_FASTA);

    seqpaste()
        .arg("-i")
        .arg("-j")
        .arg("\\t")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(">id1\tid3 first\nAAA\n>id2 second\nCCC\n");

    Ok(())
}

#[test]
fn repeat_reuses_the_last_record_of_short_streams() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fasta", A_FASTA);
    let b = write_file(&dir, "b.fasta", B_FASTA);

    seqpaste()
        .arg("-r")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(">id1 first\nAAAGGG\n>id2 second\nCCCGGG\n");

    Ok(())
}

#[test]
fn duplicated_source_contributes_twice_per_round() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fasta", A_FASTA);

    seqpaste()
        .arg(&a)
        .arg(&a)
        .assert()
        .success()
        .stdout(">id1 first\nAAAAAA\n>id2 second\nCCCCCC\n");

    Ok(())
}

#[test]
fn reads_standard_input_as_a_source() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let b = write_file(&dir, "b.fasta", B_FASTA);

    seqpaste()
        .arg("-")
        .arg(&b)
        .write_stdin(A_FASTA)
        .assert()
        .success()
        .stdout(">id1 first\nAAAGGG\n>id2 second\nCCC\n");

    Ok(())
}

#[test]
fn missing_source_warns_and_processing_continues() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let b = write_file(&dir, "b.fasta", B_FASTA);
    let missing = dir.path().join("missing.fasta").to_str().unwrap().to_string();

    seqpaste()
        .arg(&missing)
        .arg(&b)
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: cannot open sequence source"))
        .stdout(">id3 third\nGGG\n");

    Ok(())
}

#[test]
fn fails_when_no_source_survives() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let missing = dir.path().join("missing.fasta").to_str().unwrap().to_string();

    seqpaste()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sequence sources could be opened"));

    Ok(())
}

#[test]
fn rejects_unknown_moltype_before_reading() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fasta", A_FASTA);

    seqpaste()
        .arg("--moltype")
        .arg("xna")
        .arg(&a)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown molecule type"));

    Ok(())
}

#[test]
fn accepts_forced_moltype() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fasta", A_FASTA);
    let b = write_file(&dir, "b.fasta", B_FASTA);

    seqpaste()
        .arg("--moltype")
        .arg("dna")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(">id1 first\nAAAGGG\n>id2 second\nCCC\n");

    Ok(())
}

#[test]
fn rejects_unknown_format() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fasta", A_FASTA);

    seqpaste()
        .arg("--format")
        .arg("genbank")
        .arg(&a)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unsupported sequence format"));

    Ok(())
}

#[test]
fn fastq_sequences_carry_concatenated_quality() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fastq", "@r1 x\nAC\n+\nII\n");
    let b = write_file(&dir, "b.fastq", "@r2 y\nGT\n+\n55\n");

    seqpaste()
        .arg("-q")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("@r1 x\nACGT\n+\nII55\n");

    Ok(())
}

#[test]
fn fastq_sequence_paste_rejects_a_join_string() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fastq", "@r1 x\nAC\n+\nII\n");

    seqpaste()
        .arg("-q")
        .arg("-j")
        .arg("NN")
        .arg(&a)
        .assert()
        .failure()
        .code(2);

    Ok(())
}

#[test]
fn gzipped_input_and_output() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a_path = dir.path().join("a.fasta.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&a_path)?, Compression::fast());
    encoder.write_all(A_FASTA.as_bytes())?;
    encoder.finish()?;
    let b = write_file(&dir, "b.fasta", B_FASTA);
    let out_path = dir.path().join("out.fasta.gz");

    seqpaste()
        .arg("-o")
        .arg(out_path.to_str().unwrap())
        .arg(a_path.to_str().unwrap())
        .arg(&b)
        .assert()
        .success();

    let mut decoded = String::new();
    GzDecoder::new(fs::File::open(&out_path)?).read_to_string(&mut decoded)?;
    assert_eq!(decoded, ">id1 first\nAAAGGG\n>id2 second\nCCC\n");

    Ok(())
}

#[test]
fn log_flag_appends_an_invocation_record() -> Result<(), Box<dyn std::error::Error>>{
    let dir = TempDir::new()?;
    let a = write_file(&dir, "a.fasta", A_FASTA);
    let logname = dir.path().join("run.log").to_str().unwrap().to_string();

    seqpaste()
        .arg("--log")
        .arg("--logname")
        .arg(&logname)
        .arg("--comment")
        .arg("smoke test")
        .arg(&a)
        .assert()
        .success();

    let log = fs::read_to_string(&logname)?;
    assert!(log.contains("seqpaste"));
    assert!(log.contains("# smoke test"));

    Ok(())
}
