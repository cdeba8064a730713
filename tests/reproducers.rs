//! This test all the programs in the regressions directory.

use std::{collections::VecDeque, env, error::Error, path::PathBuf};

use ringtape::{parse_source, test_utils::test_execute};

fn find_regressions() -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut path: PathBuf = env::var("CARGO_MANIFEST_DIR")?.into();
    path.push("tests");
    path.push("regressions");

    let mut results = vec![];
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some("bf") = path.extension().and_then(|x| x.to_str()) {
            results.push(path);
        }
    }
    results.sort();
    Ok(results)
}

fn run_reproducer(
    reproducer: &PathBuf,
    input: Option<PathBuf>,
    expected_output: PathBuf,
) -> Result<(), Box<dyn Error>> {
    let src = std::fs::read(reproducer)?;
    let out = std::fs::read(expected_output)?;
    let mut input: VecDeque<u8> = match input {
        Some(f) => std::fs::read(f)?.into(),
        None => VecDeque::new(),
    };
    let code = parse_source(src.as_slice());

    let exec = test_execute(&code, &mut input);

    assert_eq!(exec.result, Some(Ok(())));
    assert_eq!(exec.output, out);

    Ok(())
}

#[test]
fn test_regressions() {
    let reproducers = find_regressions().unwrap();
    assert!(!reproducers.is_empty());
    for reproducer in reproducers {
        let in_file = reproducer.with_extension("in");
        let in_file = if in_file.exists() {
            Some(in_file)
        } else {
            None
        };
        let out_file = reproducer.with_extension("out");
        match run_reproducer(&reproducer, in_file, out_file) {
            Ok(_) => (),
            Err(err) => panic!("{err:?} {reproducer:?}"),
        }
    }
}
