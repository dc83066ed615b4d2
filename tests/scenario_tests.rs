//! End-to-end scenarios covering the engine's ordering and identity
//! contracts.

use weblint::{DiagnosticsEngine, Language, Severity, Snapshot, validate_template};

#[test]
fn markup_scenario_bare_div() {
    let engine = DiagnosticsEngine::new();
    let diags = engine.validate(Language::Markup, "<div>");

    assert_eq!(diags.len(), 8, "got: {diags:#?}");

    assert_eq!(
        diags[0].message,
        "Missing DOCTYPE declaration - add <!DOCTYPE html>"
    );
    assert_eq!(diags[0].severity, Severity::Warning);

    assert_eq!(diags[1].message, "Missing <html> element");
    assert_eq!(diags[1].severity, Severity::Error);
    assert_eq!(diags[2].message, "Missing <head> element");
    assert_eq!(diags[3].message, "Missing <body> element");

    assert_eq!(
        diags[4].message,
        "Missing viewport meta tag for mobile responsiveness"
    );
    assert_eq!(diags[4].severity, Severity::Info);

    assert_eq!(diags[5].message, "Missing charset declaration");
    assert_eq!(diags[5].severity, Severity::Warning);

    assert_eq!(diags[6].message, "Missing <title> element");
    assert_eq!(diags[6].severity, Severity::Warning);

    assert_eq!(diags[7].message, "Unclosed tag <div>");
    assert_eq!(diags[7].severity, Severity::Error);
    assert_eq!(diags[7].line, 1);
}

#[test]
fn style_scenario_single_rule() {
    let engine = DiagnosticsEngine::new();
    let diags = engine.validate(Language::Style, "a{color:red}");

    assert_eq!(diags.len(), 1, "got: {diags:#?}");
    assert_eq!(diags[0].severity, Severity::Info);
    assert_eq!(diags[0].source, "css-best-practices");
    assert!(diags[0].message.contains("CSS reset"));
}

#[test]
fn script_scenario_var_declaration() {
    let engine = DiagnosticsEngine::new();
    let diags = engine.validate(Language::Script, "var x = 1;");

    assert_eq!(diags.len(), 3, "got: {diags:#?}");
    assert!(diags[0].message.contains("\"let\" or \"const\" instead of \"var\""));
    assert_eq!(diags[0].severity, Severity::Warning);
    assert!(diags[1].message.contains("Avoid global variables"));
    assert_eq!(diags[1].severity, Severity::Warning);
    assert_eq!(diags[2].message, "Unused variable: x");
    assert_eq!(diags[2].severity, Severity::Warning);
}

#[test]
fn template_scenario_layout_profile() {
    let snapshot = Snapshot::new("", "body { margin: 0px; }", "");
    let diags = validate_template("flexbox-layout", &snapshot);

    assert_eq!(diags.len(), 3, "got: {diags:#?}");
    assert_eq!(diags[0].message, "Flexbox template should use \"display: flex\"");
    assert_eq!(diags[0].severity, Severity::Warning);
    assert_eq!(
        diags[1].message,
        "Consider adding media queries for responsive design"
    );
    assert_eq!(diags[1].severity, Severity::Info);
    assert_eq!(
        diags[2].message,
        "Consider using flexbox properties: justify-content, align-items, flex-direction, flex-wrap"
    );
    assert_eq!(diags[2].severity, Severity::Info);
}

const HTML_FIXTURE: &str = r#"<body>
<center><img border="1"></center>
<a>here</a>
<p style="color:red">text
</body>"#;

const CSS_FIXTURE: &str = r#"a {
  color: #12345
  // old school
  -webkit-box-shadow : none;
  font-size: 9px;
  width: 100;
}
* { position: absolute }
.a .b .c .d .e {
"#;

const JS_FIXTURE: &str = r##"var count = 1
if (count == "1") {
  $("#app").html(data)
  el.innerHTML = data;
  eval(data);
}
total = fetch(url).then(go)
"##;

#[test]
fn determinism_identical_runs_produce_identical_lists() {
    let engine = DiagnosticsEngine::new();

    for (language, source) in [
        (Language::Markup, HTML_FIXTURE),
        (Language::Style, CSS_FIXTURE),
        (Language::Script, JS_FIXTURE),
    ] {
        let first = engine.validate(language, source);
        let second = engine.validate(language, source);
        assert_eq!(first, second, "{language} runs diverged");
        assert!(!first.is_empty(), "{language} fixture should find issues");
    }

    let snapshot = Snapshot::new(HTML_FIXTURE, CSS_FIXTURE, JS_FIXTURE);
    for id in ["flexbox-layout", "interactive-form", "blank", "custom"] {
        assert_eq!(
            validate_template(id, &snapshot),
            validate_template(id, &snapshot)
        );
    }
}

#[test]
fn script_fixture_with_hash_selector_flags_jquery_usage() {
    let engine = DiagnosticsEngine::new();
    let diags = engine.validate(Language::Script, JS_FIXTURE);

    let jq = diags
        .iter()
        .find(|d| d.source == "js-modern" && d.message.contains("jQuery"))
        .expect("jquery info for the $(\"#app\") line");
    assert_eq!((jq.line, jq.column), (3, 3));
}

#[test]
fn positional_validity_all_diagnostics() {
    let engine = DiagnosticsEngine::new();

    let inputs = [
        (Language::Markup, ""),
        (Language::Markup, "<div>"),
        (Language::Markup, HTML_FIXTURE),
        (Language::Style, ""),
        (Language::Style, "}"),
        (Language::Style, CSS_FIXTURE),
        (Language::Script, ""),
        (Language::Script, ")"),
        (Language::Script, JS_FIXTURE),
    ];

    for (language, source) in inputs {
        for d in engine.validate(language, source) {
            assert!(d.line >= 1, "line < 1 in {language}: {d:?}");
            assert!(d.column >= 1, "column < 1 in {language}: {d:?}");
        }
    }
}

#[test]
fn markup_balance_well_formed_sequences() {
    let engine = DiagnosticsEngine::new();

    for source in [
        "<div></div>",
        "<div><p><em>x</em></p></div>",
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>",
    ] {
        let diags = engine.validate(Language::Markup, source);
        assert!(
            !diags.iter().any(|d| d.message.contains("Unclosed tag")
                || d.message.contains("Unexpected closing tag")),
            "balance errors on well-formed input {source:?}: {diags:#?}"
        );
    }
}

#[test]
fn style_balance_brace_counting() {
    let engine = DiagnosticsEngine::new();

    let balanced = "a {\n  color: red;\n}\nb {\n  color: blue;\n}\n";
    let diags = engine.validate(Language::Style, balanced);
    assert!(!diags.iter().any(|d| d.message == "Unmatched braces in CSS"));

    for unbalanced in ["a {", "a {\n  color: red;\n}\n}", "{{{"] {
        let diags = engine.validate(Language::Style, unbalanced);
        let count = diags
            .iter()
            .filter(|d| d.message == "Unmatched braces in CSS")
            .count();
        assert_eq!(count, 1, "input {unbalanced:?}");
    }
}
