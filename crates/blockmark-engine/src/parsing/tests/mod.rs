//! Parser tests over whole documents.
//!
//! Each case parses a snippet, checks the structural invariants and compares
//! the normalized outline against an inline `insta` snapshot.


use crate::parsing::{
    DEFAULT_MAX_NESTING, Extensions, NodeType, Options, Tree, WalkStatus, parse_document,
    snapshot,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn outline_with(md: &str, options: &Options) -> String {
    let tree = parse_document(md.as_bytes(), options);
    snapshot::invariants(&tree);
    snapshot::normalize(&tree).to_string()
}

fn outline(md: &str) -> String {
    outline_with(md, &Options::default())
}

fn count(tree: &Tree, node_type: NodeType) -> usize {
    let mut n = 0;
    tree.walk(tree.root(), |id, entering| {
        if entering && tree[id].node_type == node_type {
            n += 1;
        }
        WalkStatus::GoToNext
    });
    n
}

// Horizontal rules

#[rstest]
#[case("***\n")]
#[case("---\n")]
#[case("___\n")]
#[case("- - -\n")]
#[case(" * * * *\n")]
#[case("   ___")]
fn horizontal_rules(#[case] md: &str) {
    let tree = parse_document(md.as_bytes(), &Options::default());
    snapshot::invariants(&tree);
    let blocks: Vec<NodeType> = tree
        .children(tree.root())
        .map(|id| tree[id].node_type)
        .collect();
    assert_eq!(blocks, vec![NodeType::HorizontalRule]);
}

#[rstest]
#[case("**\n")]
#[case("--\n")]
#[case("    ---\n")]
#[case("-*-\n")]
fn not_horizontal_rules(#[case] md: &str) {
    let tree = parse_document(md.as_bytes(), &Options::default());
    snapshot::invariants(&tree);
    assert_eq!(count(&tree, NodeType::HorizontalRule), 0);
}

#[test]
fn rule_ends_paragraph() {
    insta::assert_snapshot!(outline("a\n***\nb\n"), @r#"
    Document
      Paragraph
        Text "a"
      HorizontalRule
      Paragraph
        Text "b"
    "#);
}

// Paragraphs

#[test]
fn empty_document() {
    insta::assert_snapshot!(outline(""), @"Document");
}

#[test]
fn blank_lines_only() {
    insta::assert_snapshot!(outline("\n  \n\t\n"), @"Document");
}

#[test]
fn lines_join_into_one_paragraph() {
    insta::assert_snapshot!(outline("a\nb\n\nc"), @r#"
    Document
      Paragraph
        Text "a\nb"
      Paragraph
        Text "c"
    "#);
}

// Lists

#[test]
fn tight_list() {
    insta::assert_snapshot!(outline("- a\n- b\n"), @r#"
    Document
      List unordered tight
        Item
          Paragraph
            Text "a"
        Item
          Paragraph
            Text "b"
    "#);
}

#[test]
fn loose_list() {
    insta::assert_snapshot!(outline("- a\n\n- b\n"), @r#"
    Document
      List unordered loose
        Item
          Paragraph
            Text "a"
        Item
          Paragraph
            Text "b"
    "#);
}

#[rstest]
#[case("* a\n* b\n", true)]
#[case("* a\n\n* b\n", false)]
#[case("* a\n* b\n\n    c\n", false)]
fn star_list_tightness(#[case] md: &str, #[case] tight: bool) {
    let tree = parse_document(md.as_bytes(), &Options::default());
    snapshot::invariants(&tree);
    let list = tree.children(tree.root()).next().unwrap();
    assert_eq!(tree[list].node_type, NodeType::List);
    assert_eq!(tree[list].list.tight, tight);
}

#[test]
fn ordered_list() {
    insta::assert_snapshot!(outline("1. a\n2. b\n"), @r#"
    Document
      List ordered tight
        Item
          Paragraph
            Text "a"
        Item
          Paragraph
            Text "b"
    "#);
}

#[test]
fn nested_list() {
    insta::assert_snapshot!(outline("- a\n  - b\n"), @r#"
    Document
      List unordered tight
        Item
          Paragraph
            Text "a"
          List unordered tight
            Item
              Paragraph
                Text "b"
    "#);
}

#[test]
fn bullet_char_is_recorded() {
    let tree = parse_document(b"+ a\n+ b\n", &Options::default());
    let list = tree.children(tree.root()).next().unwrap();
    for item in tree.children(list) {
        assert_eq!(tree[item].list.bullet_char, b'+');
    }
}

#[test]
fn list_type_change_starts_new_list() {
    insta::assert_snapshot!(outline("- a\n1. b\n"), @r#"
    Document
      List unordered tight
        Item
          Paragraph
            Text "a"
      List ordered tight
        Item
          Paragraph
            Text "b"
    "#);
}

#[test]
fn list_interrupts_paragraph_only_when_enabled() {
    insta::assert_snapshot!(outline("a\n- b\n"), @r#"
    Document
      Paragraph
        Text "a"
      List unordered tight
        Item
          Paragraph
            Text "b"
    "#);

    insta::assert_snapshot!(outline_with("a\n- b\n", &Options::none()), @r#"
    Document
      Paragraph
        Text "a\n- b"
    "#);
}

// Block quotes

#[test]
fn nested_quotes() {
    insta::assert_snapshot!(outline("> a\n> > b\n"), @r#"
    Document
      BlockQuote
        Paragraph
          Text "a"
        BlockQuote
          Paragraph
            Text "b"
    "#);
}

#[test]
fn quote_ends_at_blank_then_plain_line() {
    insta::assert_snapshot!(outline("> a\n\nb\n"), @r#"
    Document
      BlockQuote
        Paragraph
          Text "a"
      Paragraph
        Text "b"
    "#);
}

#[test]
fn quote_survives_blank_between_quoted_lines() {
    insta::assert_snapshot!(outline("> a\n\n> b\n"), @r#"
    Document
      BlockQuote
        Paragraph
          Text "a"
        Paragraph
          Text "b"
    "#);
}

#[test]
fn list_inside_quote() {
    insta::assert_snapshot!(outline("> - a\n> - b\n"), @r#"
    Document
      BlockQuote
        List unordered tight
          Item
            Paragraph
              Text "a"
          Item
            Paragraph
              Text "b"
    "#);
}

// Tables

#[test]
fn table_alignment() {
    insta::assert_snapshot!(outline("A|B\n:--|--:\n"), @r#"
    Document
      Table
        TableHead
          TableRow
            TableCell header left
              Text "A"
            TableCell header right
              Text "B"
        TableBody
    "#);
}

#[test]
fn centered_column() {
    insta::assert_snapshot!(outline("|A|\n|:-:|\n"), @r#"
    Document
      Table
        TableHead
          TableRow
            TableCell header center
              Text "A"
        TableBody
    "#);
}

#[test]
fn table_body_rows_are_padded() {
    insta::assert_snapshot!(outline("A|B\n---|---\n1|2\n3\n"), @r#"
    Document
      Table
        TableHead
          TableRow
            TableCell header
              Text "A"
            TableCell header
              Text "B"
        TableBody
          TableRow
            TableCell
              Text "1"
            TableCell
              Text "2"
      Paragraph
        Text "3"
    "#);
}

#[test]
fn single_column_without_leading_pipe() {
    insta::assert_snapshot!(outline("A |\n:-:\n"), @r#"
    Document
      Table
        TableHead
          TableRow
            TableCell header center
              Text "A"
        TableBody
    "#);
}

#[test]
fn escaped_pipe_stays_in_its_cell() {
    insta::assert_snapshot!(outline("A|B\n---|---\n\\|x|y\n"), @r#"
    Document
      Table
        TableHead
          TableRow
            TableCell header
              Text "A"
            TableCell header
              Text "B"
        TableBody
          TableRow
            TableCell
              Text "|"
              Text "x"
            TableCell
              Text "y"
    "#);
}

#[test]
fn short_underline_is_not_a_table() {
    insta::assert_snapshot!(outline("|A|\n|:-|\n"), @r#"
    Document
      Paragraph
        Text "|A|\n|:-|"
    "#);
}

#[test]
fn tables_need_the_extension() {
    let tree = parse_document(b"A|B\n---|---\n", &Options::none());
    snapshot::invariants(&tree);
    assert_eq!(count(&tree, NodeType::Table), 0);
    assert_eq!(count(&tree, NodeType::Paragraph), 1);
}

// Definition lists

fn definitions() -> Options {
    Options::default().with_extensions(Extensions::STANDARD | Extensions::DEFINITION_LISTS)
}

#[test]
fn definition_list() {
    insta::assert_snapshot!(outline_with("Term\n: Def\n", &definitions()), @r#"
    Document
      List definition tight
        Item term
          Paragraph
            Text "Term"
        Item definition
          Paragraph
            Text "Def"
    "#);
}

#[test]
fn definition_with_several_definitions() {
    insta::assert_snapshot!(outline_with("Term\n: Def one\n: Def two\n", &definitions()), @r#"
    Document
      List definition tight
        Item term
          Paragraph
            Text "Term"
        Item definition
          Paragraph
            Text "Def one"
        Item definition
          Paragraph
            Text "Def two"
    "#);
}

#[test]
fn definition_list_keeps_preceding_paragraph() {
    insta::assert_snapshot!(outline_with("Intro\nTerm\n: Def\n", &definitions()), @r#"
    Document
      Paragraph
        Text "Intro"
      List definition tight
        Item term
          Paragraph
            Text "Term"
        Item definition
          Paragraph
            Text "Def"
    "#);
}

#[test]
fn definition_after_blank_line_makes_loose_list() {
    insta::assert_snapshot!(outline_with("Term\n\n: Def\n", &definitions()), @r#"
    Document
      List definition loose
        Item term
          Paragraph
            Text "Term"
        Item definition
          Paragraph
            Text "Def"
    "#);
}

#[test]
fn definition_after_blank_line_keeps_preceding_paragraph() {
    insta::assert_snapshot!(outline_with("Intro\nTerm\n\n: Def\n", &definitions()), @r#"
    Document
      Paragraph
        Text "Intro"
      List definition loose
        Item term
          Paragraph
            Text "Term"
        Item definition
          Paragraph
            Text "Def"
    "#);
}

#[test]
fn blank_line_without_definition_ends_paragraph() {
    insta::assert_snapshot!(outline_with("Term\n\nmore\n", &definitions()), @r#"
    Document
      Paragraph
        Text "Term"
      Paragraph
        Text "more"
    "#);
}

#[test]
fn definition_lists_need_the_extension() {
    insta::assert_snapshot!(outline("Term\n: Def\n"), @r#"
    Document
      Paragraph
        Text "Term\n: Def"
    "#);
}

// Structure

#[test]
fn nesting_guard_bounds_quote_depth() {
    let md = format!("{} a\n", ">".repeat(20));
    let tree = parse_document(md.as_bytes(), &Options::default());
    snapshot::invariants(&tree);

    assert_eq!(count(&tree, NodeType::BlockQuote), DEFAULT_MAX_NESTING);
    assert_eq!(count(&tree, NodeType::Paragraph), 0);
}

#[test]
fn lower_nesting_bound_is_honoured() {
    let md = format!("{} a\n", ">".repeat(20));
    let tree = parse_document(md.as_bytes(), &Options::default().with_max_nesting(3));
    assert_eq!(count(&tree, NodeType::BlockQuote), 3);
}

#[rstest]
#[case("- a\n  - b\n\n> c\n")]
#[case("A|B\n---|---\n1|2\n")]
#[case("> - a\n>\n>   b\n")]
#[case("1. a\n\n   > b\n")]
fn document_holds_only_top_level_blocks(#[case] md: &str) {
    let tree = parse_document(md.as_bytes(), &Options::default());
    snapshot::invariants(&tree);
    for child in tree.children(tree.root()) {
        let kind = tree[child].node_type;
        assert!(
            tree[tree.root()].node_type.can_contain(kind),
            "document holds {kind:?}"
        );
    }
}

#[test]
fn every_block_is_closed() {
    let tree = parse_document(b"> a\n> - b\n>   - c\n", &Options::default());
    tree.walk(tree.root(), |id, entering| {
        if entering && tree[id].node_type.is_block() {
            assert!(!tree[id].open, "{:?} left open", tree[id].node_type);
        }
        WalkStatus::GoToNext
    });
}

#[test]
fn input_without_trailing_newline() {
    insta::assert_snapshot!(outline("> a"), @r#"
    Document
      BlockQuote
        Paragraph
          Text "a"
    "#);
}
