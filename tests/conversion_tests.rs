#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(test)]
mod conversion_tests {
    use roxmltree::Document;
    use xml2record::{node_to_dict, parse, Attrs, NodeBody};

    const PARENT: &str = "<PARENT><CHILD1>TEXT1</CHILD1><CHILD2>TEXT2</CHILD2></PARENT>";

    #[test]
    fn test_node_to_dict_with_children() -> Result<(), Box<dyn std::error::Error>> {
        let doc = Document::parse(PARENT)?;
        let record = node_to_dict(doc.root_element());

        assert_eq!(record.tag(), "PARENT");
        assert!(!record.children().is_empty());
        for child in record.children() {
            assert!(["CHILD1", "CHILD2"].contains(&child.tag()));
        }
        assert!(record.attrs().is_empty());
        assert_eq!(record.text(), None);
        assert!(matches!(record.body(), NodeBody::Branch { .. }));
        Ok(())
    }

    #[test]
    fn test_node_to_dict_with_no_children() -> Result<(), Box<dyn std::error::Error>> {
        let doc = Document::parse("<TAG>TEXT</TAG>")?;
        let record = node_to_dict(doc.root_element());

        assert_eq!(record.tag(), "TAG");
        assert_eq!(record.text(), Some("TEXT"));
        assert!(record.attrs().is_empty());
        assert!(record.children().is_empty());
        assert!(matches!(record.body(), NodeBody::Leaf { .. }));
        Ok(())
    }

    #[test]
    fn test_parent_scenario_exact_shape() -> Result<(), Box<dyn std::error::Error>> {
        let record = parse(PARENT)?;

        assert_eq!(
            record.to_string(),
            "{tag: 'PARENT', children: [{tag: 'CHILD1', text: 'TEXT1', attrs: {}}, \
             {tag: 'CHILD2', text: 'TEXT2', attrs: {}}], attrs: {}}"
        );

        let children = record.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag(), "CHILD1");
        assert_eq!(children[0].text(), Some("TEXT1"));
        assert_eq!(children[1].tag(), "CHILD2");
        assert_eq!(children[1].text(), Some("TEXT2"));
        Ok(())
    }

    #[test]
    fn test_text_is_dropped_when_children_exist() -> Result<(), Box<dyn std::error::Error>> {
        let record = parse("<a>before<b>inner</b>after</a>")?;

        assert!(record.has_children());
        assert_eq!(record.text(), None);
        assert_eq!(record.children()[0].text(), Some("inner"));
        Ok(())
    }

    #[test]
    fn test_attributes_are_collected() -> Result<(), Box<dyn std::error::Error>> {
        let record = parse(r#"<item id="7" kind="book"><name lang="en">Rust</name></item>"#)?;

        let mut expected = Attrs::new();
        expected.insert("id".to_string(), "7".to_string());
        expected.insert("kind".to_string(), "book".to_string());
        assert_eq!(record.attrs(), &expected);
        assert_eq!(record.attr("kind"), Some("book"));
        assert_eq!(record.attr("missing"), None);
        assert_eq!(record.children()[0].attr("lang"), Some("en"));
        Ok(())
    }

    #[test]
    fn test_children_keep_document_order() -> Result<(), Box<dyn std::error::Error>> {
        let record = parse("<list><c/><a/><b/><a/></list>")?;
        let tags: Vec<_> = record.children().iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["c", "a", "b", "a"]);
        Ok(())
    }

    #[test]
    fn test_leaf_without_text() -> Result<(), Box<dyn std::error::Error>> {
        let record = parse("<root><empty/><also></also></root>")?;
        for child in record.children() {
            assert!(child.is_leaf());
            assert_eq!(child.text(), None);
        }
        Ok(())
    }

    #[test]
    fn test_entities_and_cdata_are_resolved() -> Result<(), Box<dyn std::error::Error>> {
        let record = parse("<r><e>a &amp; b &lt;c&gt;</e><d><![CDATA[<raw>]]></d></r>")?;
        assert_eq!(record.children()[0].text(), Some("a & b <c>"));
        assert_eq!(record.children()[1].text(), Some("<raw>"));
        Ok(())
    }

    #[test]
    fn test_whitespace_is_preserved_in_leaves() -> Result<(), Box<dyn std::error::Error>> {
        let record = parse("<r><s>  padded  </s></r>")?;
        assert_eq!(record.children()[0].text(), Some("  padded  "));
        Ok(())
    }

    #[test]
    fn test_namespaced_names_use_clark_notation() -> Result<(), Box<dyn std::error::Error>> {
        let record = parse(
            r#"<doc xmlns="urn:default" xmlns:x="urn:x"><x:item x:flag="on" plain="1"/></doc>"#,
        )?;

        assert_eq!(record.tag(), "{urn:default}doc");
        // namespace declarations are not attributes
        assert!(record.attrs().is_empty());

        let item = &record.children()[0];
        assert_eq!(item.tag(), "{urn:x}item");
        assert_eq!(item.attr("{urn:x}flag"), Some("on"));
        assert_eq!(item.attr("plain"), Some("1"));
        Ok(())
    }

    #[test]
    fn test_comments_do_not_make_a_branch() -> Result<(), Box<dyn std::error::Error>> {
        let record = parse("<r><?pi data?><!-- c -->text</r>")?;
        assert!(record.is_leaf());
        assert_eq!(record.text(), Some("text"));
        Ok(())
    }
}
