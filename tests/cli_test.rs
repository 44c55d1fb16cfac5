use kube_templates::cli::{run, Args};
use kube_templates::config::KeyPolicy;
use clap::Parser;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("resque-k8s")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_default_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.template, "resque-template.yml");
    assert_eq!(parsed.config, "resque-workers.yml");
    assert_eq!(parsed.output, None);
    assert!(!parsed.verbose);
    assert!(!parsed.list_placeholders);
    assert_eq!(parsed.key_policy(), KeyPolicy::Preserve);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--verbose",
        "--normalize-keys",
        "--list-placeholders",
        "--output",
        "deployments.yml",
        "template.yml",
        "-",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert!(parsed.list_placeholders);
    assert_eq!(parsed.key_policy(), KeyPolicy::Lowercase);
    assert_eq!(parsed.output, Some(PathBuf::from("deployments.yml")));
    assert_eq!(parsed.template, "template.yml");
    assert_eq!(parsed.config, "-");
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-v", "-o", "out.yml"])).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.output, Some(PathBuf::from("out.yml")));
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["a.yml", "b.yml", "c.yml"])).is_err());
}

fn write_inputs(dir: &TempDir) -> (String, String) {
    let template = dir.path().join("resque-template.yml");
    let config = dir.path().join("resque-workers.yml");
    fs::write(&template, "name: resque-${NAME}\nreplicas: ${REPLICAS}\n").unwrap();
    fs::write(
        &config,
        "defaults:\n  replicas: 2\n\
         workers:\n  - queues: reports\n  - queues: mailers\n    replicas: 3\n",
    )
    .unwrap();
    (template.display().to_string(), config.display().to_string())
}

#[test]
fn test_run_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let (template, config) = write_inputs(&dir);
    let output = dir.path().join("deployments.yml");

    let args = Args::try_parse_from(make_args(&[
        template.as_str(),
        config.as_str(),
        "--output",
        output.to_str().unwrap(),
    ]))
    .unwrap();
    run(args).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "name: resque-reports\nreplicas: 2\n---\nname: resque-mailers-3\nreplicas: 3\n"
    );
}

#[test]
fn test_run_lists_placeholders() {
    let dir = TempDir::new().unwrap();
    let (template, config) = write_inputs(&dir);
    let output = dir.path().join("placeholders.txt");

    let args = Args::try_parse_from(make_args(&[
        "--list-placeholders",
        "-o",
        output.to_str().unwrap(),
        template.as_str(),
        config.as_str(),
    ]))
    .unwrap();
    run(args).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "name\nreplicas\n");
}

#[test]
fn test_list_placeholders_without_config() {
    let dir = TempDir::new().unwrap();
    let (template, _) = write_inputs(&dir);
    let missing_config = dir.path().join("missing.yml");
    let output = dir.path().join("placeholders.txt");

    let args = Args::try_parse_from(make_args(&[
        "--list-placeholders",
        "-o",
        output.to_str().unwrap(),
        template.as_str(),
        missing_config.to_str().unwrap(),
    ]))
    .unwrap();
    run(args).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "name\nreplicas\n");
}

#[test]
fn test_run_fails_without_partial_output() {
    let dir = TempDir::new().unwrap();
    let (template, _) = write_inputs(&dir);
    let config = dir.path().join("broken.yml");
    fs::write(&config, "defaults:\n  replicas: 2\n").unwrap();
    let output = dir.path().join("deployments.yml");

    let args = Args::try_parse_from(make_args(&[
        template.as_str(),
        config.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]))
    .unwrap();

    assert!(run(args).is_err());
    assert!(!output.exists());
}
