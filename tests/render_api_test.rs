//! Integration tests for the render pipeline public API.

use plate::registry::{LocalProvider, TemplateRegistry};
use plate::render::{LineSource, ParameterSet, RenderPipeline, ScriptedSource, Template};
use plate::PlateError;
use std::fs;
use std::io::{self, Cursor};
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn provider(root: &Path) -> LocalProvider {
    LocalProvider::new(TemplateRegistry::scan(root, ".plate.json").unwrap())
}

#[test]
fn hello_world_round_trip() {
    let template = Template::parse("Hello {{ .name }}!").unwrap();
    let params: ParameterSet = [("name", "World")].into_iter().collect();
    assert_eq!(template.render(&params), "Hello World!");
}

#[test]
fn greeting_scenario() {
    let templates = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(templates.path(), "greeting.txt", "Hi {{ .who }}");
    write(
        templates.path(),
        "greeting.plate.json",
        r#"{"out": "out/{{ .who }}.txt", "params": ["who"]}"#,
    );

    let provider = provider(templates.path());
    let pipeline = RenderPipeline::new(&provider, output.path());
    let mut source = LineSource::new(Cursor::new("Ana\n"), io::sink());

    let written = pipeline.render("greeting", &mut source).unwrap();

    assert_eq!(written, output.path().join("out").join("Ana.txt"));
    assert_eq!(fs::read_to_string(written).unwrap(), "Hi Ana");
}

#[test]
fn unknown_slug_fails_before_any_prompt() {
    let templates = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let provider = provider(templates.path());
    let pipeline = RenderPipeline::new(&provider, output.path());

    let mut source = ScriptedSource::new(["unused"]);
    let err = pipeline.render("nope", &mut source).unwrap_err();

    assert!(matches!(err, PlateError::UnknownSlug { .. }));
    assert!(source.prompts().is_empty());
}

#[test]
fn template_without_manifest_has_no_default_output() {
    let templates = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(templates.path(), "lonely.txt", "content");

    let provider = provider(templates.path());
    let pipeline = RenderPipeline::new(&provider, output.path());
    let err = pipeline
        .render("lonely", &mut ScriptedSource::default())
        .unwrap_err();

    assert!(matches!(err, PlateError::ManifestRead { .. }));
    assert!(fs::read_dir(output.path()).unwrap().next().is_none());
}

#[test]
fn literal_out_pattern_is_parameter_independent() {
    let templates = TempDir::new().unwrap();
    write(templates.path(), "fixed.txt", "{{ .x }}");
    write(
        templates.path(),
        "fixed.plate.json",
        r#"{"out": "docs/README.md", "params": ["x"]}"#,
    );
    let provider = provider(templates.path());

    for value in ["a", "", "../elsewhere"] {
        let output = TempDir::new().unwrap();
        let pipeline = RenderPipeline::new(&provider, output.path());
        let written = pipeline
            .render("fixed", &mut ScriptedSource::new([value]))
            .unwrap();
        assert_eq!(written, output.path().join("docs/README.md"));
        assert_eq!(fs::read_to_string(written).unwrap(), value);
    }
}

#[test]
fn nested_output_directories_are_created() {
    let templates = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(templates.path(), "component.tsx", "export const {{ .name }} = () => null;");
    write(
        templates.path(),
        "component.plate.json",
        r#"{"out": "src/{{ .area }}/components/{{ .name }}.tsx", "params": ["area", "name"]}"#,
    );

    let provider = provider(templates.path());
    let pipeline = RenderPipeline::new(&provider, output.path());
    let written = pipeline
        .render("component", &mut ScriptedSource::new(["admin", "Button"]))
        .unwrap();

    assert_eq!(
        written,
        output.path().join("src/admin/components/Button.tsx")
    );
    assert_eq!(
        fs::read_to_string(written).unwrap(),
        "export const Button = () => null;"
    );
}

#[test]
fn rendering_twice_overwrites() {
    let templates = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(templates.path(), "note.txt", "{{ .body }}");
    write(
        templates.path(),
        "note.plate.json",
        r#"{"out": "note.txt", "params": ["body"]}"#,
    );

    let provider = provider(templates.path());
    let pipeline = RenderPipeline::new(&provider, output.path());
    pipeline
        .render("note", &mut ScriptedSource::new(["first and longer"]))
        .unwrap();
    let written = pipeline
        .render("note", &mut ScriptedSource::new(["second"]))
        .unwrap();

    assert_eq!(fs::read_to_string(written).unwrap(), "second");
}
