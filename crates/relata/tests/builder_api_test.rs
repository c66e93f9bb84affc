use relata::{
    DiagramBuilder, RelataError,
    config::{AppConfig, ExportConfig, LayoutConfig, OutputFormat, ViewportConfig},
    identifier::Id,
};
use relata_parser::error::ErrorCode;

const SOURCE: &str = r#"
    <diagram version="1" name="inventory">
        <entities>
            <entity id="E1" name="warehouses" fq-name="public.warehouses"><path name="public"/></entity>
            <entity id="E2" name="stock" fq-name="public.stock"><path name="public"/></entity>
            <entity id="E3" name="products" fq-name="catalog.products"><path name="catalog"/></entity>
        </entities>
        <relations>
            <relation name="fk_stock_warehouse" type="fk" pk-ref="E1" fk-ref="E2"/>
            <relation name="fk_stock_missing" type="fk" pk-ref="E9" fk-ref="E2"/>
        </relations>
    </diagram>
"#;

#[test]
fn test_builder_default() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(SOURCE).expect("Failed to parse");

    assert_eq!(diagram.name(), "inventory");
    assert_eq!(diagram.entities().len(), 3);
    assert_eq!(diagram.summary().schema_count, 2);
}

#[test]
fn test_end_to_end_connections() {
    let builder = DiagramBuilder::new(AppConfig::default()).unwrap();
    let diagram = builder.parse(SOURCE).expect("Failed to parse");
    let scene = builder.scene(diagram);

    let connections = scene.connections();
    assert_eq!(connections.len(), 1);

    let e1 = scene.positions().get(Id::new("E1")).unwrap();
    let e2 = scene.positions().get(Id::new("E2")).unwrap();
    assert_eq!(connections[0].start(), e1.bottom_center());
    assert_eq!(connections[0].end(), e2.top_center());
    assert!(
        connections
            .iter()
            .all(|c| c.pk_ref() != Id::new("E9") && c.fk_ref() != Id::new("E9"))
    );
}

#[test]
fn test_parse_with_warnings_reports_dangling() {
    let builder = DiagramBuilder::default();
    let (_, warnings) = builder.parse_with_warnings(SOURCE).expect("Failed to parse");

    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_parse_error_keeps_source() {
    let builder = DiagramBuilder::default();
    let err = builder.parse("<diagram>").unwrap_err();

    match err {
        RelataError::Parse { err, src } => {
            assert_eq!(src, "<diagram>");
            assert_eq!(err.code(), ErrorCode::E001);
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_no_entities_pipeline() {
    let builder = DiagramBuilder::default();
    let source = r#"
        <diagram name="orphans">
            <relations><relation name="r" pk-ref="A" fk-ref="B"/></relations>
        </diagram>
    "#;

    let diagram = builder.parse(source).expect("Failed to parse");
    assert!(diagram.entities().is_empty());
    assert_eq!(diagram.relations().len(), 1);

    assert_eq!(builder.to_mermaid(&diagram), "erDiagram\n");
    assert_eq!(builder.to_mermaid_detailed(&diagram), "erDiagram\n");

    let scene = builder.scene(diagram);
    assert!(scene.positions().is_empty());
    assert!(scene.connections().is_empty());
    assert_eq!(scene.zoom(), 1.0);
    assert!(builder.layout_json(&scene).is_ok());
}

#[test]
fn test_render_formats() {
    let builder = DiagramBuilder::default();

    let mermaid = builder.render(SOURCE, OutputFormat::Mermaid).unwrap();
    assert!(mermaid.contains("    warehouses ||--o{ stock : \"fk_stock_warehouse\"\n"));

    let detailed = builder
        .render(SOURCE, OutputFormat::MermaidDetailed)
        .unwrap();
    assert!(detailed.contains("    warehouses ||--o{ stock : \"references\"\n"));

    let layout = builder.render(SOURCE, OutputFormat::Layout).unwrap();
    assert!(layout.contains("\"positions\""));
}

#[test]
fn test_custom_layout_config() {
    let config = AppConfig::new(
        LayoutConfig::new(100.0, 60.0, 150.0, 100.0, 20.0),
        ViewportConfig::default(),
        ExportConfig::default(),
    );
    let builder = DiagramBuilder::new(config).unwrap();

    let scene = builder.scene(builder.parse(SOURCE).unwrap());

    let e2 = scene.positions().get(Id::new("E2")).unwrap();
    assert_eq!((e2.x(), e2.y()), (170.0, 20.0));
    assert_eq!(e2.width(), 100.0);
}

#[test]
fn test_relocation_preserves_other_entities() {
    let builder = DiagramBuilder::default();
    let mut scene = builder.scene(builder.parse(SOURCE).unwrap());
    let before = scene.positions().clone();

    assert!(scene.relocate(Id::new("E3"), 900.0, -40.0));

    assert_eq!(scene.positions().get(Id::new("E1")), before.get(Id::new("E1")));
    assert_eq!(scene.positions().get(Id::new("E2")), before.get(Id::new("E2")));
    let moved = scene.positions().get(Id::new("E3")).unwrap();
    assert_eq!((moved.x(), moved.y()), (900.0, 0.0));
}

#[test]
fn test_builder_rejects_degenerate_viewport() {
    let config = AppConfig::new(
        LayoutConfig::default(),
        ViewportConfig::new(0.0, 600.0, 100.0, 400.0, 300.0),
        ExportConfig::default(),
    );

    match DiagramBuilder::new(config) {
        Err(RelataError::Config(message)) => assert!(message.contains("viewport.width")),
        Err(other) => panic!("Expected config error, got {other:?}"),
        Ok(_) => panic!("Expected a zero-width viewport to be rejected"),
    }
}
