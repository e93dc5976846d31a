// tests/cli_args.rs
//
// Option precedence: defaults < config file < flags.
#![cfg(feature = "cli")]

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use valtti_cms::cli::parse_args;
use valtti_cms::config::options::{JsonTarget, OutputMode, SourceOptions};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("valtti_cli_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_when_no_config_and_no_flags() {
    let dir = tmp_dir("defaults");
    let cfg = dir.join("missing.conf");
    let opts = parse_args(args(&["--config", cfg.to_str().unwrap()])).unwrap();
    assert_eq!(opts.sources, SourceOptions::default());
    assert_eq!(opts.output.mode, OutputMode::Summary);
    assert!(opts.output.json.is_none());
}

#[test]
fn flags_override_config_file() {
    let dir = tmp_dir("precedence");
    let cfg = dir.join("cms.conf");
    fs::write(
        &cfg,
        "content_url = http://conf/content\nmodels_url = http://conf/models\ntimeout_secs = 5\n",
    )
    .unwrap();

    let opts = parse_args(args(&[
        "--config", cfg.to_str().unwrap(),
        "--models-url", "http://flag/models",
        "--no-details",
        "--timeout", "9",
    ]))
    .unwrap();

    assert_eq!(opts.sources.content_url, "http://conf/content");
    assert_eq!(opts.sources.models_url, "http://flag/models");
    assert_eq!(opts.sources.details_url, None);
    assert_eq!(opts.sources.timeout, Duration::from_secs(9));
}

#[test]
fn output_flags() {
    let dir = tmp_dir("output");
    let cfg = dir.join("none.conf");
    let opts = parse_args(args(&[
        "--config", cfg.to_str().unwrap(),
        "--model", "aalto",
        "--json", "-",
        "-v",
    ]))
    .unwrap();
    assert_eq!(opts.output.mode, OutputMode::Model("aalto".into()));
    assert_eq!(opts.output.json, Some(JsonTarget::Stdout));
    assert!(opts.output.verbose);
}

#[test]
fn bad_input_is_rejected() {
    let dir = tmp_dir("bad");
    let cfg = dir.join("none.conf");
    let c = cfg.to_str().unwrap();
    assert!(parse_args(args(&["--config", c, "--frobnicate"])).is_err());
    assert!(parse_args(args(&["--config", c, "--timeout", "soon"])).is_err());
    assert!(parse_args(args(&["--config", c, "--project"])).is_err());
}

#[test]
fn help_ignores_a_broken_config() {
    let dir = tmp_dir("help");
    let cfg = dir.join("cms.conf");
    fs::write(&cfg, "this line has no equals sign\n").unwrap();
    let c = cfg.to_str().unwrap();

    assert!(parse_args(args(&["--config", c])).is_err());
    let opts = parse_args(args(&["--config", c, "--help"])).unwrap();
    assert!(opts.output.help);
    assert!(parse_args(args(&["-h", "--frobnicate"])).unwrap().output.help);
}

#[test]
fn write_config_round_trips_resolved_sources() {
    let dir = tmp_dir("write_config");
    let cfg = dir.join("none.conf");
    let out = dir.join("saved.conf");

    let opts = parse_args(args(&[
        "--config", cfg.to_str().unwrap(),
        "--content-url", "http://flag/content",
        "--no-details",
        "--timeout", "6",
        "--write-config", out.to_str().unwrap(),
    ]))
    .unwrap();
    assert_eq!(opts.output.write_config.as_deref(), Some(out.as_path()));

    valtti_cms::config::file::save(&out, &opts.sources).unwrap();
    let back = parse_args(args(&["--config", out.to_str().unwrap()])).unwrap();
    assert_eq!(back.sources, opts.sources);
    assert_eq!(back.sources.details_url, None);
}
