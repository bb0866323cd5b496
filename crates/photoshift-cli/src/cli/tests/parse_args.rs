use super::parse;
use crate::cli::{download_override, Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_rewrite_defaults() {
    match parse(&["photoshift", "rewrite", "post.html"]) {
        CliCommand::Rewrite {
            input,
            output,
            image_root,
            download,
            no_download,
            title,
        } => {
            assert_eq!(input, PathBuf::from("post.html"));
            assert!(output.is_none());
            assert!(image_root.is_none());
            assert!(!download);
            assert!(!no_download);
            assert!(title.is_none());
        }
        _ => panic!("expected Rewrite"),
    }
}

#[test]
fn cli_parse_rewrite_all_flags() {
    match parse(&[
        "photoshift",
        "rewrite",
        "in.html",
        "-o",
        "out.html",
        "--image-root",
        "static/images",
        "--download",
        "--title",
        "Hello",
    ]) {
        CliCommand::Rewrite {
            output,
            image_root,
            download,
            title,
            ..
        } => {
            assert_eq!(output, Some(PathBuf::from("out.html")));
            assert_eq!(image_root, Some(PathBuf::from("static/images")));
            assert!(download);
            assert_eq!(title.as_deref(), Some("Hello"));
        }
        _ => panic!("expected Rewrite"),
    }
}

#[test]
fn cli_rejects_download_and_no_download() {
    let res = Cli::try_parse_from(["photoshift", "rewrite", "a.html", "--download", "--no-download"]);
    assert!(res.is_err());
}

#[test]
fn download_override_tristate() {
    assert_eq!(download_override(false, false), None);
    assert_eq!(download_override(true, false), Some(true));
    assert_eq!(download_override(false, true), Some(false));
}

#[test]
fn cli_parse_encode() {
    match parse(&["photoshift", "encode", "20210101120000.jpg", "abc.png"]) {
        CliCommand::Encode { basenames } => {
            assert_eq!(basenames, ["20210101120000.jpg", "abc.png"]);
        }
        _ => panic!("expected Encode"),
    }
}

#[test]
fn cli_encode_requires_a_basename() {
    assert!(Cli::try_parse_from(["photoshift", "encode"]).is_err());
}

#[test]
fn cli_parse_fetch() {
    match parse(&[
        "photoshift",
        "fetch",
        "https://cdn.example.com/20210101120000.jpg",
        "--image-root",
        "/tmp/img",
    ]) {
        CliCommand::Fetch { url, image_root } => {
            assert_eq!(url, "https://cdn.example.com/20210101120000.jpg");
            assert_eq!(image_root, Some(PathBuf::from("/tmp/img")));
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["photoshift", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}
