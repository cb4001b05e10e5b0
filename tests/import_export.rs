use template_editor::editor::Editor;
use template_editor::element::Element;
use template_editor::file_handler::export_file_name;
use template_editor::presets::Preset;
use template_editor::template::{ImportError, Template};

#[test]
fn export_then_import_round_trips_by_value() {
    for preset in Preset::ALL {
        let template = preset.template();
        let json = template.to_json_pretty().unwrap();
        let reloaded = Template::from_json(&json).unwrap();
        assert_eq!(reloaded, template);
    }
}

#[test]
fn export_uses_the_original_field_names() {
    let json = Preset::Hiring.template().to_json_pretty().unwrap();

    assert!(json.contains("\"template_id\": \"001\""));
    assert!(json.contains("\"category\": \"Hiring\""));
    assert!(json.contains("\"type\": \"text\""));
    assert!(json.contains("\"type\": \"rectangle\""));
    assert!(json.contains("\"fontSize\": 28"));
    // Pretty-printed with 2-space indentation
    assert!(json.starts_with("{\n  \"template_id\""));
}

#[test]
fn import_accepts_the_original_file_format() {
    let json = r##"{
  "template_id": "007",
  "category": "Custom",
  "elements": [
    { "type": "rectangle", "x": 5, "y": 6, "width": 70, "height": 80, "color": "#abcdef" },
    { "type": "text", "value": "hi", "x": 1, "y": 2, "color": "#111111", "fontSize": 22 }
  ]
}"##;

    let template = Template::from_json(json).unwrap();
    assert_eq!(template.template_id, "007");
    assert_eq!(template.elements.len(), 2);
    match &template.elements[1] {
        Element::Text(t) => assert_eq!((t.value.as_str(), t.font_size), ("hi", 22)),
        other => panic!("expected a text element, got {:?}", other),
    }
}

#[test]
fn missing_font_size_defaults_to_16() {
    let json = r##"{"template_id":"x","category":"c","elements":[
        {"type":"text","value":"plain","x":0,"y":0,"color":"#000000"}
    ]}"##;

    let template = Template::from_json(json).unwrap();
    match &template.elements[0] {
        Element::Text(t) => assert_eq!(t.font_size, 16),
        other => panic!("expected a text element, got {:?}", other),
    }
}

#[test]
fn missing_id_and_category_default_to_empty() {
    let template = Template::from_json(r#"{"elements": []}"#).unwrap();
    assert_eq!(template.template_id, "");
    assert_eq!(template.category, "");
}

#[test]
fn unparseable_text_is_rejected_as_invalid_json() {
    let err = Template::from_json("this is not json").unwrap_err();
    assert!(matches!(err, ImportError::InvalidJson(_)));
}

#[test]
fn json_without_elements_is_rejected_as_wrong_shape() {
    let err = Template::from_json(r#"{"foo": 1}"#).unwrap_err();
    assert!(matches!(err, ImportError::NotATemplate(_)));
}

#[test]
fn unknown_element_kind_is_rejected() {
    let json = r#"{"elements": [{"type": "circle", "x": 0, "y": 0}]}"#;
    assert!(matches!(
        Template::from_json(json).unwrap_err(),
        ImportError::NotATemplate(_)
    ));
}

#[test]
fn failed_import_leaves_the_session_untouched() {
    // The UI only loads on a successful parse; a malformed file therefore
    // never reaches the document or its history.
    let mut editor = Editor::new(Preset::Hiring.template());
    editor.select(0);
    let before = editor.current().clone();

    let result = Template::from_json(r#"{"foo": 1}"#);
    assert!(result.is_err());

    assert_eq!(editor.current(), &before);
    assert_eq!(editor.history().depth(), 1);
    assert_eq!(editor.selected_index(), Some(0));
}

#[test]
fn export_file_name_uses_the_template_id() {
    assert_eq!(export_file_name(&Preset::Hiring.template()), "template_001.json");
}

#[test]
fn export_file_name_falls_back_to_a_timestamp() {
    let template = Template::new("", "Unsaved");
    let name = export_file_name(&template);

    let stamp = name
        .strip_prefix("template_")
        .and_then(|rest| rest.strip_suffix(".json"))
        .expect("name should be template_<timestamp>.json");
    assert!(stamp.parse::<u64>().is_ok(), "unexpected name: {name}");
}

#[test]
fn elements_without_color_round_trip() {
    let json = r#"{"elements":[{"type":"rectangle","x":0,"y":0,"width":10,"height":10}]}"#;
    let template = Template::from_json(json).unwrap();
    assert_eq!(template.elements[0].color(), "");

    let exported = template.to_json_pretty().unwrap();
    let reloaded = Template::from_json(&exported).unwrap();
    assert_eq!(reloaded, template);
}
