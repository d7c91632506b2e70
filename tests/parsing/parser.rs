#[cfg(test)]
mod verify {
    use markdownish::language::*;
    use markdownish::parsing::lines::classify;
    use markdownish::parsing::{self, ParseOptions, Parser};

    fn parse(content: &str) -> Document<'_> {
        parsing::parse_with(content, &ParseOptions { workers: 2 }).unwrap()
    }

    /// An indented outline of the blocks in a document, one per line, for
    /// comparing structure at a glance.
    fn outline(document: &Document) -> String {
        fn walk(node: &Tree<Block>, depth: usize, output: &mut String) {
            let label = match &node
                .item
                .kind
            {
                BlockKind::Document => "Document".to_string(),
                BlockKind::Section => "Section".to_string(),
                BlockKind::Paragraph { lines } => format!("Paragraph {:?}", lines),
                BlockKind::List {
                    ordered: true, ..
                } => "List ordered".to_string(),
                BlockKind::List {
                    bullet: Some(bullet),
                    ..
                } => format!("List '{}'", bullet),
                BlockKind::List { .. } => "List".to_string(),
                BlockKind::ListItem { index: Some(index) } => format!("ListItem {}", index),
                BlockKind::ListItem { index: None } => "ListItem".to_string(),
                BlockKind::BlockQuote => "BlockQuote".to_string(),
                BlockKind::CodeBlock { info, lines } => format!("CodeBlock {:?} {:?}", info, lines),
            };
            output.push_str(&"  ".repeat(depth));
            output.push_str(&label);
            output.push('\n');
            for child in &node.children {
                walk(child, depth + 1, output);
            }
        }

        let mut output = String::new();
        for section in document.sections() {
            walk(section, 0, &mut output);
        }
        output
    }

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn bullet_items_share_a_list() {
        let document = parse("- a\n- b");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  List '-'
    ListItem
      Paragraph ["a"]
    ListItem
      Paragraph ["b"]
"#
            )
        );
    }

    #[test]
    fn ordered_items_keep_their_index() {
        let document = parse("1. a\n2. b");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  List ordered
    ListItem 1
      Paragraph ["a"]
    ListItem 2
      Paragraph ["b"]
"#
            )
        );

        // the numbering is not checked
        let document = parse("1. a\n1. b\n7. c");
        assert_eq!(
            document.sections()[0].children[0]
                .children
                .len(),
            3
        );
    }

    #[test]
    fn fenced_code() {
        let document = parse("```go\ncode\n```");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  CodeBlock "go" ["code"]
"#
            )
        );
        assert!(document.is_finished());
    }

    #[test]
    fn blank_line_separates_sections() {
        let document = parse("a\n\nb");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  Paragraph ["a"]
Section
  Paragraph ["b"]
"#
            )
        );
    }

    #[test]
    fn blank_line_inside_fence_is_content() {
        let document = parse("```\na\n\nb\n```");
        assert_eq!(
            document
                .sections()
                .len(),
            1
        );
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  CodeBlock "" ["a", "", "b"]
"#
            )
        );
    }

    #[test]
    fn different_bullet_starts_new_list() {
        let document = parse("- a\n* b\n+ c");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  List '-'
    ListItem
      Paragraph ["a"]
  List '*'
    ListItem
      Paragraph ["b"]
  List '+'
    ListItem
      Paragraph ["c"]
"#
            )
        );

        let document = parse("- a\n1. b");
        assert_eq!(
            document.sections()[0]
                .children
                .len(),
            2
        );
    }

    #[test]
    fn indentation_does_not_continue_items() {
        let document = parse("- a\n  b");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  List '-'
    ListItem
      Paragraph ["a"]
  Paragraph ["b"]
"#
            )
        );
    }

    #[test]
    fn paragraph_lines_accumulate() {
        let document = parse("one\n  two\nthree");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  Paragraph ["one", "two", "three"]
"#
            )
        );
    }

    #[test]
    fn nested_containers() {
        let document = parse("> quoted\n> - item\n> - another\nplain");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  BlockQuote
    Paragraph ["quoted"]
    List '-'
      ListItem
        Paragraph ["item"]
      ListItem
        Paragraph ["another"]
  Paragraph ["plain"]
"#
            )
        );
    }

    #[test]
    fn nested_lists() {
        let document = parse("1. - a\n   - b\n2. - c");
        // the second line is not an item of the inner list, since nothing
        // continues the outer item
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  List ordered
    ListItem 1
      List '-'
        ListItem
          Paragraph ["a"]
  List '-'
    ListItem
      Paragraph ["b"]
  List ordered
    ListItem 2
      List '-'
        ListItem
          Paragraph ["c"]
"#
            )
        );
    }

    #[test]
    fn code_inside_list_item() {
        let document = parse("- ```sh\n  ls -l\n  ```\n- next");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  List '-'
    ListItem
      CodeBlock "sh" ["  ls -l"]
    ListItem
      Paragraph ["next"]
"#
            )
        );
    }

    #[test]
    fn code_inside_quote() {
        let document = parse("> ```\n> a\n\n> ```\n> b");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  BlockQuote
    CodeBlock "" ["a", ""]
    Paragraph ["b"]
"#
            )
        );
    }

    #[test]
    fn unterminated_fence_runs_to_the_end() {
        let document = parse("```\n- a\n\n> b");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  CodeBlock "" ["- a", "", "> b"]
"#
            )
        );
        assert!(document.is_finished());
    }

    #[test]
    fn markers_need_a_space() {
        let document = parse("-a\n1.b\n>c");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  Paragraph ["-a", "1.b", ">c"]
"#
            )
        );

        // too big to be an index
        let document = parse("99999999999999999999999. big");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  Paragraph ["99999999999999999999999. big"]
"#
            )
        );
    }

    #[test]
    fn empty_items_and_quotes() {
        let document = parse("-\n>");
        assert_eq!(
            outline(&document),
            trim(
                r#"
Section
  Paragraph ["-"]
  BlockQuote
"#
            )
        );
    }

    #[test]
    fn crlf_line_endings() {
        let document = parse("- a\r\n- b\r\n\r\nc\r\n");
        assert_eq!(
            document,
            parse("- a\n- b\n\nc\n")
        );
    }

    #[test]
    fn deep_nesting() {
        let depth = 30_000;
        let content = "> ".repeat(depth) + "x";
        let document = parse(&content);

        // section, every quote, and the paragraph
        assert_eq!(document.count(), depth + 2);
        assert!(document.is_finished());

        let copy = document.clone();
        assert_eq!(document, copy);

        drop(copy);
        drop(document);

        let content = "- ".repeat(depth) + "x\n" + &"1. ".repeat(depth) + "y";
        let document = parse(&content);
        assert_eq!(document.count(), 1 + 2 * depth + 1 + 2 * depth + 1);
    }

    #[test]
    fn wide_lists() {
        let content: String = (0..20_000)
            .map(|i| format!("- item {}\n", i))
            .collect();
        let document = parse(&content);

        let list = &document.sections()[0].children[0];
        assert_eq!(
            list.children
                .len(),
            20_000
        );
        assert_eq!(
            list.children[19_999].children[0]
                .item
                .lines(),
            &["item 19999"]
        );
    }

    #[test]
    fn empty_input() {
        let document = parse("");
        assert!(document
            .sections()
            .is_empty());
        assert_eq!(document.count(), 0);
        assert!(document.is_finished());

        let document = parse("\n   \n\t\n");
        assert!(document
            .sections()
            .is_empty());
    }

    // each input with the number of sections it holds
    const INPUTS: &[(&str, usize)] = &[
        ("", 0),
        ("a", 1),
        ("a\nb\n\nc", 2),
        ("- a\n- b\n\n1. c\n2. d", 2),
        ("> a\n> > b\n> c\n\n\n\nd", 2),
        ("\n\n  \nlead\n\n\ntrail\n\n", 2),
        ("```\na\n\nb\n```\n\n- x", 2),
        ("- ```\n  code\n\n  ```\n- y\n\nz", 2),
        ("```\nnever closed\n\n\nstill code", 1),
        ("> ```\n> a\n\n> ```\n\nb\n\nc", 3),
        ("* a\n- b\n+ c\n\n3. d\n> e\n-", 2),
    ];

    #[test]
    fn one_section_per_run_of_lines() {
        for (input, expected) in INPUTS {
            let document = parse(input);
            assert_eq!(
                document
                    .sections()
                    .len(),
                *expected,
                "input {:?}",
                input
            );
            for section in document.sections() {
                assert_eq!(
                    section
                        .item
                        .kind,
                    BlockKind::Section
                );
            }
        }
    }

    #[test]
    fn everything_closed_when_done() {
        for (input, _) in INPUTS {
            let document = parse(input);
            assert!(document.is_finished(), "input {:?}", input);
        }
    }

    #[test]
    fn breadth_first_visits_by_depth() {
        for (input, _) in INPUTS {
            let document = parse(input);

            let mut depths = Vec::new();
            document
                .root
                .iterate_breadth_first(|depth, _| {
                    depths.push(depth);
                    Visit::Descend
                });

            assert_eq!(depths.len(), document.count() + 1);
            assert!(
                depths
                    .windows(2)
                    .all(|pair| pair[0] <= pair[1]),
                "input {:?} gave depths {:?}",
                input,
                depths
            );
        }
    }

    #[test]
    fn worker_count_does_not_change_result() {
        for (input, _) in INPUTS {
            let one = parsing::parse_with(input, &ParseOptions { workers: 1 }).unwrap();
            let many = parsing::parse_with(input, &ParseOptions { workers: 8 }).unwrap();
            assert_eq!(one, many);
        }
    }

    // A closed block must come out of every later line exactly as it went
    // in, children and all.
    fn check_frozen(before: &Tree<Block>, after: &Tree<Block>) {
        if before
            .item
            .closed
        {
            assert_eq!(before, after);
            return;
        }
        assert!(
            after
                .children
                .len()
                >= before
                    .children
                    .len()
        );
        for (earlier, later) in before
            .children
            .iter()
            .zip(&after.children)
        {
            check_frozen(earlier, later);
        }
    }

    #[test]
    fn closed_blocks_never_change() {
        let content = "para\n- a\n- b\n> q\n> - c\n```\n- raw\n```\n1. d\n2. e\nend";
        let lines = classify(content);

        let mut parser = Parser::new();
        let mut snapshots = Vec::new();
        for line in &lines {
            parser
                .read_line(line)
                .unwrap();
            snapshots.push(
                parser
                    .tree()
                    .clone(),
            );
        }

        for (i, before) in snapshots
            .iter()
            .enumerate()
        {
            for after in &snapshots[i..] {
                check_frozen(before, after);
            }
        }

        let tree = parser.finish();
        check_frozen(&snapshots[snapshots.len() - 1], &tree);
    }

    #[test]
    fn open_blocks_form_a_chain() {
        let content = "> - a\n> - b\n> > c";
        let mut parser = Parser::new();
        for line in &classify(content) {
            parser
                .read_line(line)
                .unwrap();

            // at most one open child per open block
            parser
                .tree()
                .iterate_breadth_first(|_, node| {
                    let open = node
                        .children
                        .iter()
                        .filter(|child| {
                            child
                                .item
                                .is_open()
                        })
                        .count();
                    assert!(open <= 1);
                    if let Some(child) = node
                        .children
                        .iter()
                        .rev()
                        .skip(1)
                        .find(|child| {
                            child
                                .item
                                .is_open()
                        })
                    {
                        panic!("open block {:?} is not the last child", child.item);
                    }
                    Visit::Descend
                });
        }
    }
}
