//! Import module tests

use csdl_metadata_sdk::document::DocumentError;
use csdl_metadata_sdk::export::ExportConfig;
use csdl_metadata_sdk::import::{ImportError, MetadataDefinition};
use csdl_metadata_sdk::models::{
    BiDirectionalNavigation, EntityTypeSpec, Multiplicity, NavigationSpec, PrimitiveType,
    PropertySpec, SchemaSpec,
};
use csdl_metadata_sdk::validation::DocumentValidator;
use csdl_metadata_sdk::MetadataDocument;

const CATALOG_YAML: &str = r#"
schemas:
  - namespace: Corvus.Data.App
    alias: App
navigations:
  - sourceEntityType: App.Category
    targetEntityType: App.Product
    forward:
      name: Products
      multiplicity: Many
    backward:
      name: Category
      multiplicity: ZeroOrOne
      property: CategoryID
      referencedProperty: ProductId
entityTypes:
  - schema: Corvus.Data.App
    name: Product
    properties:
      - name: ProductId
        type: Edm.Int32
        isKey: true
        nullable: false
      - name: ProductName
        type: Edm.String
      - name: CategoryID
        type: Edm.Int32
  - schema: Corvus.Data.App
    name: Category
    properties:
      - name: CategoryID
        type: Edm.Int32
        isKey: true
        nullable: false
      - name: CategoryName
        type: Edm.String
        nullable: false
"#;

fn catalog_via_api() -> MetadataDocument {
    let mut doc = MetadataDocument::new();
    doc.add_schema(&SchemaSpec::new("Corvus.Data.App").with_alias("App"));
    doc.add_entity_type(
        "Corvus.Data.App",
        &EntityTypeSpec::new("Product")
            .property(
                PropertySpec::new("ProductId", PrimitiveType::Int32)
                    .key()
                    .nullable(false),
            )
            .property(PropertySpec::new("ProductName", PrimitiveType::String))
            .property(PropertySpec::new("CategoryID", PrimitiveType::Int32)),
    )
    .unwrap();
    doc.add_entity_type(
        "Corvus.Data.App",
        &EntityTypeSpec::new("Category")
            .property(
                PropertySpec::new("CategoryID", PrimitiveType::Int32)
                    .key()
                    .nullable(false),
            )
            .property(PropertySpec::new("CategoryName", PrimitiveType::String).nullable(false)),
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

mod definition_import_tests {
    use super::*;

    #[test]
    fn test_yaml_definition_matches_api_output() {
        let definition = MetadataDefinition::from_yaml(CATALOG_YAML).unwrap();
        let document = definition.build(ExportConfig::default()).unwrap();

        assert_eq!(
            document.to_xml(false).unwrap(),
            catalog_via_api().to_xml(false).unwrap()
        );
        assert!(DocumentValidator::new().validate(&document).is_clean());
    }

    #[test]
    fn test_json_definition_with_references() {
        let json = r#"{
            "references": [
                {
                    "uri": "http://vocabs.odata.org/capabilities/v1",
                    "includeSchema": [{ "namespace": "Org.OData.Capabilities.V1" }]
                }
            ],
            "schemas": [{ "namespace": "Demo" }]
        }"#;
        let definition = MetadataDefinition::from_json(json).unwrap();
        assert_eq!(definition.references[0].includes.len(), 1);

        let document = definition.build(ExportConfig::default()).unwrap();
        let tree = document.tree();
        let first = tree.children(tree.root())[0];
        assert_eq!(tree.node(first).tag(), "Reference");
        assert_eq!(document.schemas().count(), 1);
    }

    #[test]
    fn test_definition_round_trips_through_yaml() {
        let definition = MetadataDefinition::from_yaml(CATALOG_YAML).unwrap();
        let yaml = serde_yaml::to_string(&definition).unwrap();
        assert_eq!(MetadataDefinition::from_yaml(&yaml).unwrap(), definition);
    }

    #[test]
    fn test_malformed_yaml() {
        let result = MetadataDefinition::from_yaml("schemas: [ { namespace: ");
        assert!(matches!(result, Err(ImportError::ParseError(_))));
    }

    #[test]
    fn test_navigation_to_unknown_entity_fails_with_context() {
        let yaml = r#"
schemas:
  - namespace: Demo
entityTypes:
  - schema: Demo
    name: Order
navigations:
  - sourceEntityType: Demo.Order
    targetEntityType: Demo.Customer
    forward: { name: Customer, multiplicity: One }
    backward: { name: Orders, multiplicity: Many }
"#;
        let definition = MetadataDefinition::from_yaml(yaml).unwrap();
        let err = definition.build(ExportConfig::default()).unwrap_err();

        assert!(format!("{:#}", err).contains("EntityType 'Customer' not found in schema 'Demo'"));
        assert!(matches!(
            err.downcast_ref::<DocumentError>(),
            Some(DocumentError::EntityTypeNotFound { .. })
        ));
    }
}
