use serde::{Deserialize, Serialize};

use crate::parameter::{ParameterDescriptor, ParameterId};

/// The mutable association between a parameter and its current value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    #[serde(rename = "paramId")]
    pub parameter_id: ParameterId,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormModel {
    #[serde(rename = "paramValues")]
    pub param_values: Vec<ParameterValue>,
}

/// Wire shape of the externally supplied document:
/// `{ "model": { "paramValues": [...] }, "params": [...] }`.
///
/// The document is accepted as-is. A value entry referencing a nonexistent
/// parameter id is not rejected here; it surfaces as an empty-string default
/// at lookup time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    pub model: FormModel,
    pub params: Vec<ParameterDescriptor>,
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;

    use crate::parameter::ParameterKind;

    use super::*;

    #[test]
    fn A_FormDocument_should_be_deserializable_from_the_wire_shape() -> Result<()> {
        let json = r#"{
            "model": {
                "paramValues": [
                    { "paramId": 1, "value": "purple" },
                    { "paramId": 2, "value": "m" }
                ]
            },
            "params": [
                { "id": 1, "name": "Color", "type": "text" },
                { "id": 2, "name": "Size", "type": "text" }
            ]
        }"#;

        let document: FormDocument = serde_json::from_str(json).unwrap();

        assert_that!(document.params.len(), eq(2));
        assert_that!(document.model.param_values.len(), eq(2));
        assert_that!(document.params[0].id, eq(ParameterId(1)));
        assert_that!(document.params[0].name.clone().value(), eq("Color"));
        assert_that!(document.params[0].kind, eq(ParameterKind::Text));
        assert_that!(document.model.param_values[1].value, eq("m"));
        Ok(())
    }

    #[test]
    fn A_FormDocument_should_accept_a_value_without_a_matching_descriptor() -> Result<()> {
        let json = r#"{
            "model": { "paramValues": [ { "paramId": 99, "value": "orphan" } ] },
            "params": []
        }"#;

        let document: FormDocument = serde_json::from_str(json).unwrap();

        assert_that!(document.model.param_values.len(), eq(1));
        assert_that!(document.params.len(), eq(0));
        Ok(())
    }
}
