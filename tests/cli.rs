use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const SVG: &str = r#"<?xml version="1.0" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg">
<defs>
<font id="aux" horiz-adv-x="1000">
  <font-face font-family="AUX Icons" units-per-em="1000" ascent="850" descent="-150"/>
  <missing-glyph horiz-adv-x="1000"/>
  <glyph glyph-name="home" unicode="&#xe001;" d="M100 100h800v800h-800z"/>
  <glyph glyph-name="play/start" unicode="&#xe002;" d="M100 100l800 400l-800 400z"/>
  <glyph glyph-name="unnamed" d="M0 0"/>
</font>
</defs>
</svg>"#;

const CSS_TEMPLATE: &str = "@font-face { font-family: '[family]'; src: url('[name].ttf'); }";
const HTML_TEMPLATE: &str = "<html><head><title>[title]</title></head><body>[glyphs]</body></html>";

fn workspace(svg: &str) -> TempDir {
    let tmp = tempdir().unwrap();
    std::fs::write(tmp.path().join("aux.svg"), svg).unwrap();
    std::fs::write(tmp.path().join("aux.css.in"), CSS_TEMPLATE).unwrap();
    std::fs::write(tmp.path().join("aux.html.in"), HTML_TEMPLATE).unwrap();
    tmp
}

fn icongen() -> Command {
    Command::cargo_bin("icongen").unwrap()
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_generates_css_and_html() {
    let tmp = workspace(SVG);

    icongen()
        .arg("--no-ttf")
        .arg(tmp.path().join("aux.svg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped 1 glyphs"));

    assert_eq!(
        read(&tmp.path().join("aux.css")),
        concat!(
            "@font-face { font-family: 'AUX Icons'; src: url('aux.ttf'); }\n",
            ".icon.home::before  { font-family: 'AUX Icons'; content: '\u{e001}'; }\n",
            ".icon.play::before  { font-family: 'AUX Icons'; content: '\u{e002}'; }\n",
            ".icon.start::before { font-family: 'AUX Icons'; content: '\u{e002}'; }\n",
        )
    );

    let html = read(&tmp.path().join("aux.html"));
    assert!(html.starts_with("<html><head><title>aux</title></head><body>\n<table>\n"));
    assert_eq!(html.matches("<tr>").count(), 3);
    assert!(html.contains("<td>play<br>start</td>"));
    assert!(!tmp.path().join("aux.ttf").exists());
}

#[test]
fn test_extension_is_optional() {
    let with_ext = workspace(SVG);
    let without_ext = workspace(SVG);

    icongen()
        .args(["-t", "-p", "aux-"])
        .arg(with_ext.path().join("aux.svg"))
        .assert()
        .success();
    icongen()
        .args(["-t", "-p", "aux-"])
        .arg(without_ext.path().join("aux"))
        .assert()
        .success();

    for file in ["aux.css", "aux.html"] {
        assert_eq!(
            read(&with_ext.path().join(file)),
            read(&without_ext.path().join(file))
        );
    }
    assert!(read(&with_ext.path().join("aux.css")).contains(".aux-icon.home::before"));
}

#[test]
fn test_suppressed_outputs_are_not_written() {
    let tmp = workspace(SVG);
    std::fs::remove_file(tmp.path().join("aux.html.in")).unwrap();

    icongen()
        .args(["--no-html", "--no-ttf"])
        .arg(tmp.path().join("aux"))
        .assert()
        .success();

    assert!(tmp.path().join("aux.css").exists());
    assert!(!tmp.path().join("aux.html").exists());
}

#[test]
fn test_no_fonts_fails_without_output() {
    let tmp = workspace(r#"<svg xmlns="http://www.w3.org/2000/svg"><rect/></svg>"#);

    icongen()
        .arg("-t")
        .arg(tmp.path().join("aux.svg"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("No fonts found in"));

    assert!(!tmp.path().join("aux.css").exists());
    assert!(!tmp.path().join("aux.html").exists());
}

#[test]
fn test_unparseable_svg_fails() {
    let tmp = workspace("<svg><font id='aux'>");

    icongen()
        .arg("-t")
        .arg(tmp.path().join("aux.svg"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unable to parse file"))
        .stdout(predicate::str::contains("No fonts found in"));
}

#[test]
fn test_missing_svg_fails() {
    let tmp = tempdir().unwrap();

    icongen()
        .arg(tmp.path().join("absent"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unable to parse file"));
}

#[test]
fn test_missing_template_fails() {
    let tmp = workspace(SVG);
    std::fs::remove_file(tmp.path().join("aux.css.in")).unwrap();

    icongen()
        .arg("-t")
        .arg(tmp.path().join("aux.svg"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("CSS template"))
        .stdout(predicate::str::contains("is missing."));
}

#[test]
fn test_font_without_glyphs_fails() {
    let tmp = workspace(r#"<svg><font id="aux"><font-face font-family="AUX"/></font></svg>"#);

    icongen()
        .arg("-t")
        .arg(tmp.path().join("aux.svg"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("font 'aux' has no glyphs"));
}

#[test]
fn test_missing_fontforge_fails() {
    let tmp = workspace(SVG);

    icongen()
        .args(["--fontforge", "/nonexistent/bin/fontforge"])
        .arg(tmp.path().join("aux.svg"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("FontForge not installed"));

    // CSS and HTML are generated before compiling
    assert!(tmp.path().join("aux.css").exists());
    assert!(tmp.path().join("aux.html").exists());
}

#[cfg(unix)]
#[test]
fn test_failed_compile_is_not_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = workspace(SVG);
    let fontforge = tmp.path().join("fake-fontforge");
    std::fs::write(&fontforge, "#!/bin/sh\n[ \"$1\" = \"-version\" ] && exit 0\nexit 3\n").unwrap();
    std::fs::set_permissions(&fontforge, std::fs::Permissions::from_mode(0o755)).unwrap();

    icongen()
        .arg("--fontforge")
        .arg(&fontforge)
        .arg(tmp.path().join("aux.svg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Open($1);Generate($2);Quit(0);"))
        .stdout(predicate::str::contains("Converting"))
        .stdout(predicate::str::contains("failed"));

    assert!(!tmp.path().join("aux.ttf").exists());
}

#[test]
fn test_directory_input() {
    let tmp = workspace(SVG);
    std::fs::write(tmp.path().join("more.svg"), SVG).unwrap();
    std::fs::write(tmp.path().join("more.css.in"), "/* [name] */").unwrap();
    std::fs::write(tmp.path().join("more.html.in"), "[glyphs]").unwrap();

    icongen()
        .arg("-t")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 fonts processed, 4 files written"));

    assert!(read(&tmp.path().join("more.css")).starts_with("/* more */\n"));
    assert!(tmp.path().join("aux.html").exists());
}
