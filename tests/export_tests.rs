//! Export module tests

use csdl_metadata_sdk::export::ExportConfig;
use csdl_metadata_sdk::models::{
    BiDirectionalNavigation, EntityTypeSpec, Multiplicity, NavigationSpec, OnDeleteAction,
    PrimitiveType, PropertySpec, ReferenceSpec, SchemaSpec,
};
use csdl_metadata_sdk::MetadataDocument;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Element read back from serialized output
#[derive(Debug, Clone)]
struct Element {
    name: String,
    parent: Option<usize>,
    attributes: Vec<(String, String)>,
}

impl Element {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

fn read_element(e: &BytesStart, parent: Option<usize>) -> Element {
    Element {
        name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
        parent,
        attributes: e
            .attributes()
            .flatten()
            .map(|a| {
                (
                    String::from_utf8_lossy(a.key.as_ref()).to_string(),
                    a.unescape_value().unwrap().to_string(),
                )
            })
            .collect(),
    }
}

fn parse_elements(xml: &str) -> Vec<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut elements = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                elements.push(read_element(e, open.last().copied()));
                open.push(elements.len() - 1);
            }
            Ok(Event::Empty(ref e)) => {
                elements.push(read_element(e, open.last().copied()));
            }
            Ok(Event::End(_)) => {
                open.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid XML at {}: {}", reader.error_position(), e),
            _ => {}
        }
    }
    elements
}

fn children<'a>(elements: &'a [Element], parent: usize) -> Vec<&'a Element> {
    elements.iter().filter(|e| e.parent == Some(parent)).collect()
}

fn find(elements: &[Element], name: &str, attr: &str, value: &str) -> usize {
    elements
        .iter()
        .position(|e| e.name == name && e.attr(attr) == Some(value))
        .unwrap_or_else(|| panic!("no {} with {}={}", name, attr, value))
}

fn sample_document() -> MetadataDocument {
    let mut doc = MetadataDocument::new();
    doc.add_schema(&SchemaSpec::new("Corvus.Data.App").with_alias("App"));
    doc.add_entity_type(
        "Corvus.Data.App",
        &EntityTypeSpec::new("Category").property(
            PropertySpec::new("CategoryID", PrimitiveType::Int32)
                .key()
                .nullable(false),
        ),
    )
    .unwrap();
    doc.add_entity_type(
        "Corvus.Data.App",
        &EntityTypeSpec::new("Product")
            .property(
                PropertySpec::new("ProductId", PrimitiveType::Int32)
                    .key()
                    .nullable(false),
            )
            .property(PropertySpec::new("CategoryID", PrimitiveType::Int32)),
    )
    .unwrap();
    doc.add_bidirectional_navigation(&BiDirectionalNavigation::new(
        "App.Category",
        "App.Product",
        NavigationSpec::new("Products", Multiplicity::Many),
        NavigationSpec::new("Category", Multiplicity::ZeroOrOne).constraint("CategoryID", "ProductId"),
    ))
    .unwrap();
    doc
}

mod structure_tests {
    use super::*;

    #[test]
    fn test_single_envelope_with_single_data_services() {
        let xml = sample_document().to_xml(false).unwrap();
        let elements = parse_elements(&xml);

        let envelopes: Vec<usize> = elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.name == "edmx:Edmx")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(envelopes, vec![0]);
        assert_eq!(elements[0].parent, None);
        assert_eq!(elements[0].attr("Version"), Some("4.01"));
        assert_eq!(
            elements[0].attr("xmlns:edmx"),
            Some("http://docs.oasis-open.org/odata/ns/edmx")
        );

        let root_children = children(&elements, 0);
        assert_eq!(root_children.len(), 1);
        assert_eq!(root_children[0].name, "edmx:DataServices");
        assert_eq!(
            elements.iter().filter(|e| e.name == "edmx:DataServices").count(),
            1
        );
    }

    #[test]
    fn test_schema_declares_edm_namespace() {
        let xml = sample_document().to_xml(false).unwrap();
        let elements = parse_elements(&xml);
        let schema = find(&elements, "Schema", "Namespace", "Corvus.Data.App");
        assert_eq!(
            elements[schema].attr("xmlns"),
            Some("http://docs.oasis-open.org/odata/ns/edm")
        );
        assert_eq!(elements[schema].attr("Alias"), Some("App"));
    }

    #[test]
    fn test_end_to_end_navigation_output() {
        let xml = sample_document().to_xml(false).unwrap();
        let elements = parse_elements(&xml);

        let product = find(&elements, "EntityType", "Name", "Product");
        let nav = children(&elements, product)
            .into_iter()
            .find(|e| e.name == "NavigationProperty")
            .unwrap();
        assert_eq!(nav.attr("Name"), Some("Category"));
        assert_eq!(nav.attr("Type"), Some("App.Category"));
        assert_eq!(nav.attr("Partner"), Some("Products"));

        let nav_index = find(&elements, "NavigationProperty", "Name", "Category");
        let constraint = children(&elements, nav_index);
        assert_eq!(constraint.len(), 1);
        assert_eq!(constraint[0].name, "ReferentialConstraint");
        assert_eq!(constraint[0].attr("Property"), Some("CategoryID"));
        assert_eq!(constraint[0].attr("ReferencedProperty"), Some("ProductId"));

        let products = find(&elements, "NavigationProperty", "Name", "Products");
        assert_eq!(elements[products].attr("Type"), Some("Collection(App.Product)"));
        assert_eq!(elements[products].attr("Nullable"), None);
        assert!(children(&elements, products).is_empty());
    }

    #[test]
    fn test_references_precede_data_services() {
        let mut doc = sample_document();
        doc.add_reference(
            &ReferenceSpec::new("http://vocabs.odata.org/capabilities/v1")
                .include("Org.OData.Capabilities.V1", None)
                .include("Org.OData.Capabilities.V2", Some("UI")),
        );
        let elements = parse_elements(&doc.to_xml(false).unwrap());

        let root_children: Vec<&str> = children(&elements, 0)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(root_children, vec!["edmx:Reference", "edmx:DataServices"]);

        let reference = find(&elements, "edmx:Reference", "Uri", "http://vocabs.odata.org/capabilities/v1");
        let includes = children(&elements, reference);
        assert_eq!(includes.len(), 2);
        assert_eq!(includes[1].name, "edmx:Include");
        assert_eq!(includes[1].attr("Alias"), Some("UI"));
        assert_eq!(includes[0].attr("Alias"), None);
    }

    #[test]
    fn test_on_delete_output() {
        let mut doc = sample_document();
        doc.add_entity_type(
            "Corvus.Data.App",
            &EntityTypeSpec::new("Review")
                .property(PropertySpec::new("ReviewId", PrimitiveType::Guid).key())
                .property(PropertySpec::new("ProductId", PrimitiveType::Int32)),
        )
        .unwrap();
        doc.add_bidirectional_navigation(&BiDirectionalNavigation::new(
            "App.Product",
            "App.Review",
            NavigationSpec::new("Reviews", Multiplicity::Many),
            NavigationSpec::new("Product", Multiplicity::One)
                .constraint("ProductId", "ProductId")
                .on_delete(OnDeleteAction::Cascade),
        ))
        .unwrap();

        let elements = parse_elements(&doc.to_xml(false).unwrap());
        let nav = find(&elements, "NavigationProperty", "Name", "Product");
        assert_eq!(elements[nav].attr("Nullable"), Some("false"));
        let nav_children: Vec<&str> = children(&elements, nav)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(nav_children, vec!["ReferentialConstraint", "OnDelete"]);
        let on_delete = find(&elements, "OnDelete", "Action", "Cascade");
        assert_eq!(elements[on_delete].parent, Some(nav));
        assert_eq!(elements.iter().filter(|e| e.name == "OnDelete").count(), 1);
    }
}

mod format_tests {
    use super::*;

    #[test]
    fn test_compact_output_exact() {
        let xml = sample_document().to_xml(false).unwrap();
        let expected = concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.01">"#,
            r#"<edmx:DataServices>"#,
            r#"<Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Corvus.Data.App" Alias="App">"#,
            r#"<EntityType Name="Category">"#,
            r#"<Key><PropertyRef Name="CategoryID"/></Key>"#,
            r#"<Property Name="CategoryID" Type="Edm.Int32" Nullable="false"/>"#,
            r#"<NavigationProperty Name="Products" Type="Collection(App.Product)" Partner="Category"/>"#,
            r#"</EntityType>"#,
            r#"<EntityType Name="Product">"#,
            r#"<Key><PropertyRef Name="ProductId"/></Key>"#,
            r#"<Property Name="ProductId" Type="Edm.Int32" Nullable="false"/>"#,
            r#"<Property Name="CategoryID" Type="Edm.Int32"/>"#,
            r#"<NavigationProperty Name="Category" Type="App.Category" Partner="Products">"#,
            r#"<ReferentialConstraint Property="CategoryID" ReferencedProperty="ProductId"/>"#,
            r#"</NavigationProperty>"#,
            r#"</EntityType>"#,
            r#"</Schema>"#,
            r#"</edmx:DataServices>"#,
            r#"</edmx:Edmx>"#,
        );
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_pretty_and_compact_describe_the_same_tree() {
        let doc = sample_document();
        let compact = parse_elements(&doc.to_xml(false).unwrap());
        let pretty_xml = doc.to_xml(true).unwrap();
        let pretty = parse_elements(&pretty_xml);

        assert!(pretty_xml.lines().count() > 10);
        assert_eq!(compact.len(), pretty.len());
        for (a, b) in compact.iter().zip(pretty.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.parent, b.parent);
            assert_eq!(a.attributes, b.attributes);
        }
    }

    #[test]
    fn test_custom_indent() {
        let doc = sample_document();
        let config = ExportConfig::builder().pretty_print(true).indent_size(4).build();
        let xml = doc.serialize(&config).unwrap();
        assert!(xml.contains("\n    <edmx:DataServices>"));
        assert!(xml.contains("\n        <Schema "));
    }

    #[test]
    fn test_configured_version() {
        let doc = MetadataDocument::with_config(ExportConfig::builder().version("4.0").build());
        let elements = parse_elements(&doc.to_xml(false).unwrap());
        assert_eq!(elements[0].attr("Version"), Some("4.0"));
    }
}
