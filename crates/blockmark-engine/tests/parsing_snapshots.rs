use blockmark_engine::{
    Extensions, HtmlOptions, HtmlRenderer, MarkdownRenderer, Options,
    parsing::{parse_document, snapshot},
    render_to_vec,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn html(md: &str) -> String {
    let tree = parse_document(md.as_bytes(), &Options::default());
    snapshot::invariants(&tree);
    let out = render_to_vec(&tree, &mut HtmlRenderer::new(HtmlOptions::default())).unwrap();
    String::from_utf8(out).unwrap()
}

fn with_definitions() -> Options {
    Options::default().with_extensions(Extensions::STANDARD | Extensions::DEFINITION_LISTS)
}

/// Rendering back to markdown and parsing again gives the same tree.
#[rstest]
#[case::tight_list("- a\n- b\n")]
#[case::loose_list("- a\n\n- b\n")]
#[case::ordered_list("1. a\n2. b\n3. c\n")]
#[case::nested_list("- a\n    - b\n- c\n")]
#[case::nested_quotes("> a\n> > b\n")]
#[case::rule("a\n\n---\n\nb\n")]
#[case::table("A|B\n:--|--:\n1|2\n")]
#[case::centered_table("|A|\n|:-:|\n|x|\n")]
#[case::inlines("*a* **b** ~~c~~ [d](/e \"f\") http://g.h\n")]
#[case::escapes("1\\*2 \\[x\\]\n")]
#[case::entity("a &amp; b\n")]
#[case::quoted_list("> - a\n> - b\n")]
fn markdown_output_reparses_to_the_same_tree(#[case] md: &str) {
    let options = Options::default();
    let first = parse_document(md.as_bytes(), &options);
    snapshot::invariants(&first);

    let rendered = render_to_vec(&first, &mut MarkdownRenderer::new()).unwrap();
    let second = parse_document(&rendered, &options);
    snapshot::invariants(&second);

    assert_eq!(
        snapshot::normalize(&first),
        snapshot::normalize(&second),
        "markdown output was:\n{}",
        String::from_utf8_lossy(&rendered)
    );
}

#[test]
fn definition_list_reparses_to_the_same_tree() {
    let options = with_definitions();
    let first = parse_document(b"Term\n: Def\n", &options);
    let rendered = render_to_vec(&first, &mut MarkdownRenderer::new()).unwrap();
    assert_eq!(String::from_utf8_lossy(&rendered), "Term\n: Def\n");

    let second = parse_document(&rendered, &options);
    assert_eq!(snapshot::normalize(&first), snapshot::normalize(&second));
}

#[test]
fn quoted_list_and_rule_html() {
    insta::assert_snapshot!(html("> - a\n> - b\n\n---\n"), @r"
    <blockquote>
    <ul>
    <li>a</li>
    <li>b</li>
    </ul>
    </blockquote>
    <hr />
    ");
}

#[test]
fn deep_nesting_is_bounded() {
    let md = "> ".repeat(64) + "deep\n";
    let tree = parse_document(md.as_bytes(), &Options::default());
    snapshot::invariants(&tree);
    assert!(tree.len() < 64);
}
