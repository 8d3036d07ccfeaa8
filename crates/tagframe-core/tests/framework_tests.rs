//! Framework codec round trips and conditional rule evaluation

use tagframe_core::{
    read_framework_json, read_framework_yaml, validate_framework, write_framework_json,
    write_framework_yaml, ConditionRule, ConditionSet, Conjunction, CoreConfig, Operator,
};
use tagframe_schema::AttributeData;
use tagframe_test_utils::{matrix1d_widget, small_framework};

#[test]
fn json_codec_round_trip() {
    let framework = small_framework();
    let encoded = write_framework_json(&framework).unwrap();
    let decoded = read_framework_json(&encoded).unwrap();

    assert_eq!(decoded, framework);
    assert!(validate_framework(&decoded, &CoreConfig::default()).is_ok());
}

#[test]
fn yaml_codec_round_trip() {
    let framework = small_framework();
    let encoded = write_framework_yaml(&framework).unwrap();
    let decoded = read_framework_yaml(&encoded).unwrap();
    assert_eq!(decoded, framework);
}

#[test]
fn wire_shape_carries_discriminators() {
    let framework = small_framework();
    let json: serde_json::Value =
        serde_json::from_str(&write_framework_json(&framework).unwrap()).unwrap();

    let widgets = &json["primary"][0]["widgets"];
    assert_eq!(widgets[0]["widgetId"], "SELECT");
    assert_eq!(widgets[3]["widgetId"], "MATRIX2D");
    assert_eq!(
        widgets[3]["properties"]["columns"][0]["subColumns"][0]["key"],
        "sub-col-1"
    );
}

#[test]
fn condition_set_round_trips_and_evaluates() {
    let raw = r#"{
        "parentWidget": "sectors",
        "conditions": [
            {
                "key": "c1",
                "order": 1,
                "invert": false,
                "conjunctionOperator": "AND",
                "operator": "matrix1d-rows-selected",
                "value": ["row-2"],
                "operatorModifier": "some"
            }
        ]
    }"#;
    let set: ConditionSet = serde_json::from_str(raw).unwrap();
    assert_eq!(set.conditions[0].conjunction_operator, Conjunction::And);

    let widget = matrix1d_widget();
    let mut rows: tagframe_schema::Matrix1dValue = Default::default();
    rows.insert(
        "row-2".into(),
        [("sub-row-2-1".to_string(), true)].into_iter().collect(),
    );
    let data = AttributeData::Matrix1d(rows);

    assert!(set.evaluate(&widget, Some(&data)));
    assert!(!set.evaluate(&widget, None));
}

#[test]
fn inverted_empty_rule_gates_on_presence() {
    let set = ConditionSet {
        parent_widget: "severity".into(),
        conditions: vec![ConditionRule {
            key: "c1".into(),
            order: 1,
            invert: true,
            conjunction_operator: Conjunction::And,
            operator: Operator::Empty,
        }],
    };
    let widget = tagframe_test_utils::scale_widget();

    assert!(!set.evaluate(&widget, None));
    assert!(set.evaluate(&widget, Some(&AttributeData::Scale("option-1".into()))));
}
