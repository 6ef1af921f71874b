//! End-to-end scenarios: the real catalog over synthetic asset buffers.

use restyle::assets::AssetKind;
use restyle::rules::catalog;

const CSS_FIXTURE: &str = r#"        :root {
            --orange-primary: #E65100;
            --orange-light: #FF7D2E;
            --blue-primary: #1565C0;
            --purple-lighter: #F3E5F5;
            --yellow-primary: #F9A825;
            --gray-50: #FAFAFA;
            --gray-900: #212121;
            --shadow-sm: 0 1px 2px rgba(0,0,0,0.05);
            --radius-xl: 24px;
            --transition-normal: 250ms ease;
        }

        body.page-startseite {
            font-family: var(--font-body);
            color: var(--gray-900);
            background: var(--gray-50);
            line-height: 1.6;
        }

        .page-startseite .btn-primary {
            padding: var(--space-md) var(--space-xl);
            font-weight: 700;
            font-size: 15px;
            cursor: pointer;
        }

        .page-startseite .quick-action-card {
            background: var(--white);
            border-radius: var(--radius-lg);
            box-shadow: var(--shadow-sm);
        }

        .page-startseite .slide-1 {
            background: linear-gradient(135deg, rgba(230, 81, 0, 0.9) 0%, rgba(191, 54, 12, 0.95) 100%);
        }

        .page-startseite .section-header h2 {
            font-size: 32px;
            line-height: 1.2;
        }

        .page-ueber-uns .timeline-year {
            font-size: 32px;
            font-weight: 700;
        }
"#;

const JS_FIXTURE: &str = "const slideDuration = 5000;\nlet current = 0;\n";

fn transformed_css() -> String {
    let pipeline = catalog::pipeline().unwrap();
    let (out, _) = pipeline.run(AssetKind::Stylesheet, CSS_FIXTURE);
    out
}

#[test]
fn root_tokens_are_swapped_and_old_values_gone() {
    let css = transformed_css();
    assert!(css.contains("--orange-primary: #EC6303;"));
    assert!(css.contains("--blue-primary: #23679A;"));
    assert!(!css.contains("#E65100"));
    assert!(!css.contains("#1565C0"));
}

#[test]
fn missing_purple_dark_is_inserted_with_indentation() {
    let css = transformed_css();
    assert!(css.contains(
        "            --purple-lighter: #E8EEF7;\n            --purple-dark: #081E52;\n"
    ));
}

#[test]
fn card_gains_border_before_its_shadow() {
    let css = transformed_css();
    let border = css
        .find("border: 1px solid rgba(31,35,40,0.06);")
        .expect("card border missing");
    let shadow = css
        .find("box-shadow: var(--shadow-sm);")
        .expect("card shadow missing");
    assert!(border < shadow);
}

#[test]
fn heading_size_is_contextual() {
    let css = transformed_css();
    // The section header shrinks; the timeline year keeps its size.
    assert!(css.contains(".page-startseite .section-header h2 {\n            font-size: 28px;"));
    assert!(css.contains(".page-ueber-uns .timeline-year {\n            font-size: 32px;"));
}

#[test]
fn heading_line_height_follows_the_size_change() {
    let css = transformed_css();
    assert!(css.contains("font-size: 28px;\n            line-height: 1.3;"));
}

#[test]
fn button_block_is_restyled() {
    let css = transformed_css();
    assert!(css.contains("padding: 14px 28px;"));
    assert!(css.contains("font-weight: 600;"));
    assert!(css.contains("cursor: pointer;\n            box-shadow: 0 2px 8px rgba(0,0,0,0.12);"));
    // The identical weight outside the button scope is untouched.
    assert!(css.contains(".page-ueber-uns .timeline-year {\n            font-size: 32px;\n            font-weight: 700;"));
}

#[test]
fn button_font_size_gains_tracking() {
    let css = transformed_css();
    assert!(css.contains("font-size: 15px;\n            letter-spacing: 0.3px;"));
}

#[test]
fn body_copy_leading_is_loosened() {
    let css = transformed_css();
    assert!(css.contains("line-height: 1.65;\n            letter-spacing: 0.1px;"));
    assert!(!css.contains("line-height: 1.6;"));
}

#[test]
fn slide_gradient_opacity_is_softened() {
    let css = transformed_css();
    assert!(css.contains("rgba(230, 81, 0, 0.88) 0%"));
    assert!(css.contains("rgba(191, 54, 12, 0.94) 100%"));
}

#[test]
fn stylesheet_pass_is_idempotent() {
    let pipeline = catalog::pipeline().unwrap();
    let (once, _) = pipeline.run(AssetKind::Stylesheet, CSS_FIXTURE);
    let (twice, outcomes) = pipeline.run(AssetKind::Stylesheet, &once);
    assert_eq!(once, twice);
    assert!(outcomes.iter().all(|o| o.lines_changed == 0 && o.insertions == 0));
}

#[test]
fn script_change_applies_once() {
    let pipeline = catalog::pipeline().unwrap();
    let (once, outcomes) = pipeline.run(AssetKind::Script, JS_FIXTURE);
    assert!(once.contains("const slideDuration = 6000;"));
    assert!(!once.contains("5000"));
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].lines_changed, 1);

    let (twice, outcomes) = pipeline.run(AssetKind::Script, &once);
    assert_eq!(once, twice);
    assert_eq!(outcomes[0].lines_changed, 0);
}

#[test]
fn verification_reports_residue_on_untouched_value() {
    // A hand-written hex that the pipeline has no rule for is exactly what
    // the verification pass exists to surface.
    let css = ".header { color: #E65100; }";
    let spec = catalog::verification().unwrap();
    let report = restyle::verify::inspect(css, &spec);
    assert_eq!(report.residues.len(), 1);
    assert_eq!(report.residues[0].token, "--orange-primary");
}

#[test]
fn verification_is_clean_after_the_full_pass() {
    let spec = catalog::verification().unwrap();
    let report = restyle::verify::inspect(&transformed_css(), &spec);
    assert!(report.residues.is_empty());
}
