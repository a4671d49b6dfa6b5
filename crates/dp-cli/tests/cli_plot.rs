use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_distplot"))
}

fn tmp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("distplot_cli_{}_{}_{}", std::process::id(), nanos, name));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

#[test]
fn plot_writes_svg_and_artifact() {
    let svg_path = tmp_path("poisson.svg");
    let art_path = tmp_path("poisson.json");
    let out = run(&[
        "plot",
        "--dist",
        "poisson",
        "--mu",
        "3",
        "--start",
        "-2",
        "--end",
        "6",
        "--policy",
        "filter",
        "--out",
        svg_path.to_string_lossy().as_ref(),
        "--artifact",
        art_path.to_string_lossy().as_ref(),
    ]);
    assert!(
        out.status.success(),
        "plot should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let svg = std::fs::read_to_string(&svg_path).unwrap();
    let art: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&art_path).unwrap()).unwrap();
    let _ = std::fs::remove_file(&svg_path);
    let _ = std::fs::remove_file(&art_path);

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Poisson Distribution"));
    assert!(svg.contains("Probability"));

    assert_eq!(art["distribution"], "poisson");
    assert_eq!(art["values"].as_array().unwrap().len(), 7);
    assert_eq!(art["removed"], serde_json::json!([-2.0, -1.0]));
}

#[test]
fn plot_with_theme_and_style_overrides() {
    let cfg_path = tmp_path("style.yaml");
    std::fs::write(&cfg_path, "bar:\n  color: \"#336699\"\n").unwrap();
    let svg_path = tmp_path("uniform.svg");
    let out = run(&[
        "plot",
        "--dist",
        "uniform",
        "--low",
        "0",
        "--high",
        "4",
        "--start",
        "0",
        "--end",
        "5",
        "--theme",
        "classic",
        "--config",
        cfg_path.to_string_lossy().as_ref(),
        "--out",
        svg_path.to_string_lossy().as_ref(),
    ]);
    let svg = std::fs::read_to_string(&svg_path).unwrap_or_default();
    let _ = std::fs::remove_file(&cfg_path);
    let _ = std::fs::remove_file(&svg_path);
    assert!(
        out.status.success(),
        "plot should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(svg.contains("#336699"), "bar color override missing");
}

#[test]
fn unknown_theme_fails() {
    let svg_path = tmp_path("bad_theme.svg");
    let out = run(&[
        "plot",
        "--dist",
        "geometric",
        "--p",
        "0.3",
        "--start",
        "1",
        "--end",
        "4",
        "--theme",
        "neon",
        "--out",
        svg_path.to_string_lossy().as_ref(),
    ]);
    assert!(!out.status.success());
    assert!(!svg_path.exists());
    assert!(String::from_utf8_lossy(&out.stderr).contains("neon"));
}

#[test]
fn unsupported_output_format_fails() {
    let path = tmp_path("chart.gif");
    let out = run(&[
        "plot",
        "--dist",
        "geometric",
        "--p",
        "0.3",
        "--start",
        "1",
        "--end",
        "4",
        "--out",
        path.to_string_lossy().as_ref(),
    ]);
    assert!(!out.status.success());
    assert!(!path.exists());
}
