#[cfg(test)]
mod formatting_tests {
    use crate::{MarkdownRenderer, Node, NodeKind, Render, RenderContext, RenderError};
    use pretty_assertions::assert_eq;

    fn text(kind: NodeKind, text: &str) -> Node {
        Node::with_text(kind, text)
    }

    fn string(value: &str) -> Node {
        text(NodeKind::PlainString, value)
    }

    fn item(content: Node) -> Node {
        Node::new(NodeKind::ListItem).child(content)
    }

    /// List node with the wrapper child the front end puts around list bodies
    fn list(kind: NodeKind, items: Vec<Node>) -> Node {
        let mut body = Node::new(NodeKind::FormattedText);
        for entry in items {
            body.attach(entry);
        }
        Node::new(kind).child(body)
    }

    fn cell(content: &str) -> Node {
        Node::new(NodeKind::TableCell).child(Node::new(NodeKind::TableCell).child(string(content)))
    }

    fn render(node: &Node) -> String {
        MarkdownRenderer::new().render_document(node).unwrap()
    }

    #[test]
    fn test_section() {
        assert_eq!(
            render(&text(NodeKind::Section, "Introduction")),
            "## 1 Introduction\n\n\n\n"
        );
    }

    #[test]
    fn test_subsection_after_section() {
        let mut context = RenderContext::new();
        context.section = 1;
        let output = text(NodeKind::Subsection, "Subsection Example")
            .render(&mut context)
            .unwrap();
        assert_eq!(output, "### 1.1 Subsection Example\n\n\n\n");
    }

    #[test]
    fn test_heading_numbering_sequence() {
        let mut context = RenderContext::new();
        let headings = [
            (NodeKind::Section, "One", "## 1 One\n\n\n\n"),
            (NodeKind::Subsection, "A", "### 1.1 A\n\n\n\n"),
            (NodeKind::Subsubsection, "i", "#### 1.1.1 i\n\n\n\n"),
            (NodeKind::Section, "Two", "## 2 Two\n\n\n\n"),
            (NodeKind::Subsection, "B", "### 2.1 B\n\n\n\n"),
        ];

        for (kind, title, expected) in headings {
            assert_eq!(text(kind, title).render(&mut context).unwrap(), expected);
        }
        assert_eq!(context.section, 2);
        assert_eq!(context.subsection, 1);
        assert_eq!(context.subsubsection, 0);
    }

    #[test]
    fn test_section_children_follow_heading() {
        let section = text(NodeKind::Section, "Intro").child(text(NodeKind::Bold, "note"));
        assert_eq!(render(&section), "## 1 Intro\n\n**note** \n\n");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(
            render(&string("This is a sample text.")),
            "This is a sample text."
        );
    }

    #[test]
    fn test_plain_string_flattens_first_child() {
        let root = string("This is a paragraph.").child(
            Node::new(NodeKind::Paragraph).child(string("This is another paragraph.")),
        );
        assert_eq!(
            render(&root),
            "This is a paragraph. \n\n This is another paragraph."
        );
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(render(&text(NodeKind::Bold, "bold")), "**bold** ");
        assert_eq!(render(&text(NodeKind::Italic, "italic")), "*italic* ");
    }

    #[test]
    fn test_verbatim() {
        assert_eq!(
            render(&text(NodeKind::Verbatim, "This is verbatim text.")),
            "\n\n```\nThis is verbatim text.\n```\n\n"
        );
    }

    #[test]
    fn test_hyperlink() {
        assert_eq!(
            render(&text(NodeKind::Hyperlink, "http://example.com#Example")),
            "[Example](http://example.com) \n"
        );
    }

    #[test]
    fn test_figure() {
        assert_eq!(
            render(&text(NodeKind::Figure, "This is a figure caption.")),
            "![](This is a figure caption.)\n\n"
        );

        let figure = text(NodeKind::Figure, "plot.png")
            .child(text(NodeKind::Label, "fig:plot"))
            .child(text(NodeKind::Caption, "A plot"));
        assert_eq!(render(&figure), "![](plot.png)  \"A plot\"\n\n");
    }

    #[test]
    fn test_title_and_date() {
        assert_eq!(render(&text(NodeKind::Title, "Report")), "# Report\n\n");
        assert_eq!(render(&text(NodeKind::Title, "")), "");
        assert_eq!(render(&text(NodeKind::Date, "May 1")), "Date: May 1\n\n");
        assert_eq!(render(&text(NodeKind::Date, "")), "");
    }

    #[test]
    fn test_reference_and_rule() {
        assert_eq!(render(&text(NodeKind::Reference, "sec:intro")), "sec:intro\n\n");
        assert_eq!(render(&Node::new(NodeKind::HorizontalRule)), "\n\n---\n\n");
    }

    #[test]
    fn test_paragraph_treats_segments_as_inline_runs() {
        let paragraph = Node::new(NodeKind::Paragraph).child(
            Node::new(NodeKind::FormattedText)
                .child(string("Plain"))
                .child(text(NodeKind::Bold, "strong"))
                .child(text(NodeKind::Underline, "under"))
                .child(text(NodeKind::Section, "x")),
        );
        assert_eq!(
            render(&paragraph),
            "Plain **strong** <u>under<u> ##x## \n\n"
        );
    }

    #[test]
    fn test_markerless_kinds_concatenate_children() {
        let root = Node::new(NodeKind::Document)
            .child(text(NodeKind::Label, "ignored").child(string("kept")))
            .child(Node::new(NodeKind::Code).child(text(NodeKind::Bold, "b")))
            .child(text(NodeKind::Underline, "dropped"));
        assert_eq!(render(&root), "kept**b** ");
    }

    #[test]
    fn test_itemize_with_chained_item() {
        // The first item carries the second as an extra child
        let root = Node::new(NodeKind::Itemize).child(
            item(string("First item")).child(item(string("Second item"))),
        );
        assert_eq!(render(&root), "\n-First item\n-Second item\n\n");
    }

    #[test]
    fn test_nested_itemize_indents_with_tabs() {
        let inner = list(NodeKind::Itemize, vec![item(string("y"))]);
        let outer = list(NodeKind::Itemize, vec![item(string("x")), item(inner)]);
        assert_eq!(render(&outer), "\n-x\n-\n\t-y\n\n\n\n");
    }

    #[test]
    fn test_nested_enumerate_drops_empty_parent_line() {
        let inner = list(NodeKind::Enumerate, vec![item(string("a")), item(string("b"))]);
        let outer = list(NodeKind::Enumerate, vec![item(string("x")), item(inner)]);
        assert_eq!(render(&outer), "\n1.x\n\t1.a\n\t1.b\n\n\n\n");
    }

    #[test]
    fn test_empty_parent_line_kept_after_period() {
        let inner = list(NodeKind::Enumerate, vec![item(string("Sub."))]);
        let outer = list(NodeKind::Enumerate, vec![item(string("Done.")), item(inner)]);
        assert_eq!(render(&outer), "\n1.Done.\n1.\n\t1.Sub.\n\n\n\n");
    }

    #[test]
    fn test_list_depth_restored_after_nested_lists() {
        let inner = list(NodeKind::Itemize, vec![item(string("y"))]);
        let outer = list(NodeKind::Enumerate, vec![item(inner)]);

        let mut context = RenderContext::new();
        context.list_depth = 2;
        outer.render(&mut context).unwrap();
        assert_eq!(context.list_depth, 2);
    }

    #[test]
    fn test_table_without_nested_cells() {
        let row = |a: &str, b: &str| {
            Node::new(NodeKind::TableRow)
                .child(text(NodeKind::TableCell, a))
                .child(text(NodeKind::TableCell, b))
        };
        let table = Node::new(NodeKind::Table)
            .child(row("Header1", "Header2"))
            .child(row("Row1Col1", "Row1Col2"));

        assert_eq!(render(&table), " |  |  | \n---------\n |  |  | \n\n\n");
    }

    #[test]
    fn test_table_rows_and_separator() {
        let table = Node::new(NodeKind::Table)
            .child(
                Node::new(NodeKind::TableRow)
                    .child(cell("Region"))
                    .child(cell("Sales")),
            )
            .child(Node::new(NodeKind::TableRule))
            .child(
                Node::new(NodeKind::TableRow)
                    .child(cell("North"))
                    .child(cell("120")),
            );

        assert_eq!(
            render(&table),
            " | Region |  |  | Sales | \n------|-----|-----|-------\n | North |  |  | 120 | \n\n\n"
        );
    }

    #[test]
    fn test_table_renders_rows_under_first_child() {
        let table = Node::new(NodeKind::Table).child(
            Node::new(NodeKind::FormattedText)
                .child(Node::new(NodeKind::TableRow).child(cell("A"))),
        );
        assert_eq!(render(&table), " | A | \n-------\n\n\n");
    }

    #[test]
    fn test_absent_node_renders_empty() {
        let mut context = RenderContext::new();
        let absent: Option<&Node> = None;
        assert_eq!(absent.render(&mut context).unwrap(), "");

        let rule = Node::new(NodeKind::HorizontalRule);
        assert_eq!(Some(&rule).render(&mut context).unwrap(), "\n\n---\n\n");
    }

    #[test]
    fn test_shape_violations_are_reported() {
        let cases = [
            (Node::new(NodeKind::ListItem), NodeKind::ListItem),
            (Node::new(NodeKind::Paragraph), NodeKind::Paragraph),
            (Node::new(NodeKind::Itemize), NodeKind::Itemize),
            (Node::new(NodeKind::Table), NodeKind::Table),
        ];

        for (node, expected_kind) in cases {
            let err = MarkdownRenderer::new().render_document(&node).unwrap_err();
            let RenderError::ShapeViolation { kind, .. } = err;
            assert_eq!(kind, expected_kind);
        }
    }

    #[test]
    fn test_list_depth_restored_after_shape_violation() {
        let broken = list(NodeKind::Itemize, vec![Node::new(NodeKind::ListItem)]);
        let mut context = RenderContext::new();
        assert!(broken.render(&mut context).is_err());
        assert_eq!(context.list_depth, 0);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let document = Node::new(NodeKind::Document)
            .child(text(NodeKind::Section, "One").child(text(NodeKind::Subsection, "A")))
            .child(text(NodeKind::Section, "Two"))
            .child(list(NodeKind::Enumerate, vec![item(string("x"))]));

        let renderer = MarkdownRenderer::new();
        let first = renderer.render_document(&document).unwrap();
        let second = renderer.render_document(&document).unwrap();
        assert_eq!(first, second);
        assert!(second.starts_with("## 1 One"));
    }
}
