use super::*;
use crate::curve::{Curve, CurveId};
use crate::dimension::{LinearKind, OffsetKind};
use crate::geometry::Point3;
use serde_json::json;

fn curves() -> CurveTable {
    let mut table = CurveTable::new();
    table.insert(CurveId(1), Curve::line(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 40.0, 0.0)));
    table.insert(CurveId(2), Curve::line(Point3::new(25.0, 0.0, 0.0), Point3::new(25.0, 40.0, 0.0)));
    table.insert(CurveId(3), Curve::circle(Point3::new(12.0, 20.0, 0.0), 5.0));
    table
}

#[test]
fn test_linear_dimension_command() {
    let params = json!({
        "id1": 3,
        "id2": 3,
        "first point": {"x": 0.0, "y": 0.0},
        "second point": {"x": 0.0, "y": 5.0},
        "text point": {"x": -10.0, "y": 2.5}
    });
    let response = execute("linearDimension", &params, &curves());
    assert!(response.is_ok(), "{:?}", response.message);
    let plan = response.plan.expect("plan");
    assert_eq!(plan.linear_kind(), Some(LinearKind::Vertical));
}

#[test]
fn test_missing_ids_default_to_no_entity() {
    let params = json!({
        "first point": {"x": 0.0, "y": 0.0},
        "second point": {"x": 5.0, "y": 0.0},
        "text point": {"x": 2.5, "y": 3.0}
    });
    let response = execute("linearDimension", &params, &curves());
    assert_eq!(response.return_code, RETURN_OK);
    match response.plan {
        Some(DimensionPlan::Horizontal(plan)) => assert!(plan.first.is_free()),
        other => panic!("Expected Horizontal, got {:?}", other),
    }
}

#[test]
fn test_offset_command_between_lines() {
    let params = json!({
        "id1": 1,
        "id2": 2,
        "first point": {"x": 0.0, "y": 3.0},
        "second point": {"x": 25.0, "y": 30.0}
    });
    let response = execute("linearOffsetDimension", &params, &curves());
    match response.plan {
        Some(DimensionPlan::LinearOffset(plan)) => assert_eq!(plan.kind, OffsetKind::LineToLine),
        other => panic!("Expected LinearOffset, got {:?}", other),
    }
}

#[test]
fn test_hole_callout_single_form_with_zero_id() {
    let params = json!({"view": 2, "id": 0, "text point": {"x": 1.0, "y": 1.0}});
    let response = execute("holeCallout", &params, &curves());
    assert!(response.is_ok());
    match response.plan {
        Some(DimensionPlan::HoleCallout(plan)) => {
            assert_eq!(plan.holes.len(), 1);
            assert!(plan.holes[0].anchor.is_free());
        }
        other => panic!("Expected HoleCallout, got {:?}", other),
    }
}

#[test]
fn test_hole_callout_batch_form() {
    let params = json!({
        "view": 2,
        "holes": [
            {"id": 3, "text point": {"x": 20.0, "y": 30.0}},
            {"text point": {"x": 0.0, "y": 0.0}}
        ]
    });
    let response = execute("holeCallout", &params, &curves());
    match response.plan {
        Some(DimensionPlan::HoleCallout(plan)) => {
            assert_eq!(plan.holes.len(), 2);
            assert_eq!(plan.holes[0].anchor.entity, Some(CurveId(3)));
            assert!(plan.holes[1].anchor.is_free());
        }
        other => panic!("Expected HoleCallout, got {:?}", other),
    }
}

#[test]
fn test_empty_hole_batch_is_rejected() {
    let response = execute("holeCallout", &json!({"view": 2, "holes": []}), &curves());
    assert_eq!(response.return_code, RETURN_FAILED);
    assert!(response.message.unwrap_or_default().contains("no holes"));
}

#[test]
fn test_unknown_command() {
    let response = execute("fileExportPDF", &json!({}), &curves());
    assert_eq!(response.return_code, RETURN_FAILED);
    assert!(response.plan.is_none());
}

#[test]
fn test_invalid_params() {
    let response = execute("radialDimension", &json!({"id": 3}), &curves());
    assert_eq!(response.return_code, RETURN_FAILED);
    let message = response.message.unwrap_or_default();
    assert!(message.contains("radialDimension"), "{}", message);
}

#[test]
fn test_unparsable_json() {
    let response = execute_str("radialDimension", "{not json", &curves());
    assert_eq!(response.return_code, RETURN_FAILED);
}

#[test]
fn test_command_names_are_case_insensitive() {
    assert_eq!("RADIALDIMENSION".parse::<CommandName>().ok(), Some(CommandName::RadialDimension));
    for command in CommandName::ALL {
        assert_eq!(command.as_str().parse::<CommandName>().ok(), Some(command));
    }
}

#[test]
fn test_view_geometry_command() {
    let response = execute("viewGeometry", &json!({}), &curves());
    assert!(response.is_ok());
    let geometry = response.geometry.expect("geometry");
    assert_eq!(geometry.line.len(), 2);
    assert_eq!(geometry.circle.len(), 1);
    assert!(geometry.arc.is_empty());
}

#[test]
fn test_response_json_shape() {
    let params = json!({"id": 3, "text point": {"x": 20.0, "y": 25.0}});
    let response = execute_str("radialDimension", &params.to_string(), &curves());
    let value = serde_json::to_value(&response).expect("serialize");
    assert_eq!(value["return code"], 0);
    assert_eq!(value["plan"]["type"], "radial");
    assert!(value.get("message").is_none());
    assert!(value.get("geometry").is_none());
}

#[test]
fn test_negative_id_names_the_key() {
    let params = json!({
        "id1": 1,
        "id2": -4,
        "first point": {"x": 0.0, "y": 0.0},
        "second point": {"x": 25.0, "y": 0.0},
        "text point": {"x": 12.0, "y": -8.0}
    });
    let response = execute("linearDimension", &params, &curves());
    assert_eq!(response.return_code, RETURN_FAILED);
    let message = response.message.unwrap_or_default();
    assert!(message.contains("`id2`") && message.contains("-4"), "{}", message);
}

#[test]
fn test_negative_hole_view_is_rejected() {
    let params = json!({"view": -1, "id": 3, "text point": {"x": 1.0, "y": 1.0}});
    let response = execute("holeCallout", &params, &curves());
    assert_eq!(response.return_code, RETURN_FAILED);
    assert!(response.message.unwrap_or_default().contains("`view`"));
}

#[test]
fn test_hole_callout_misspelled_text_point() {
    let params = json!({"view": 2, "id": 3, "textpoint": {"x": 1.0, "y": 1.0}});
    let response = execute("holeCallout", &params, &curves());
    assert_eq!(response.return_code, RETURN_FAILED);
    let message = response.message.unwrap_or_default();
    assert!(message.contains("text point"), "{}", message);

    // Inside a batch the missing key comes from the hole entry itself
    let params = json!({"view": 2, "holes": [{"id": 3, "text": {"x": 1.0, "y": 1.0}}]});
    let message = execute("holeCallout", &params, &curves()).message.unwrap_or_default();
    assert!(message.contains("text point"), "{}", message);
}

#[test]
fn test_view_geometry_with_huge_arc_angles() {
    let mut table = curves();
    table.insert(CurveId(9), Curve::arc(Point3::new(0.0, 0.0, 0.0), 4.0, 0.0, -1e20));
    let response = execute_str("viewGeometry", "{}", &table);
    assert!(response.is_ok());
    let geometry = response.geometry.expect("geometry");
    let middle = geometry.arc[0].middle;
    assert!(middle.x.is_finite() && middle.y.is_finite());
}
