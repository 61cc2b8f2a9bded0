use crate::model::{FormDocument, FormModel, ParameterValue};
use crate::parameter::{IllegalParameterKind, IllegalParameterName, ParameterDescriptor, ParameterId, ParameterKind, ParameterName};

/// The pair of parameter catalog and value store the editor operates on.
///
/// All transitions are pure: they borrow the current state and return a new
/// one, leaving the input untouched. The presentation layer owns the single
/// state container and publishes the returned state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub params: Vec<ParameterDescriptor>,
    pub values: Vec<ParameterValue>,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum EditValueError {
    #[error("No value entry exists for parameter <{id}>.")]
    NoSuchParameter { id: ParameterId },
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum AddParameterError {
    #[error(transparent)]
    InvalidName(#[from] IllegalParameterName),
    #[error(transparent)]
    InvalidKind(#[from] IllegalParameterKind),
    #[error("A parameter with id <{id}> already exists.")]
    DuplicateId { id: ParameterId },
}

impl EditorState {

    /// Replaces the value of the entry matching `id`. Length and entry order
    /// of the value store are preserved exactly.
    ///
    /// An unknown id is a data-integrity condition and fails with
    /// [EditValueError::NoSuchParameter]. The id space is closed (every
    /// editable field is derived from an existing descriptor), so this cannot
    /// occur through regular use.
    pub fn update_value(&self, id: ParameterId, new_value: impl Into<String>) -> Result<Self, EditValueError> {
        let mut values = self.values.clone();
        let entry = values.iter_mut()
            .find(|entry| entry.parameter_id == id)
            .ok_or(EditValueError::NoSuchParameter { id })?;
        entry.value = new_value.into();

        Ok(Self {
            params: self.params.clone(),
            values,
        })
    }

    /// Appends one descriptor and one empty value entry for it, both at the
    /// end. Existing entries and their order are untouched.
    ///
    /// `name` and `kind` are the raw user-entered strings; an empty name or a
    /// kind outside the supported set fails validation and leaves the state
    /// unchanged. The caller provides a fresh `id`, usually from a
    /// [ParameterIdGenerator].
    pub fn add_parameter(&self, id: ParameterId, name: &str, kind: &str) -> Result<Self, AddParameterError> {
        let name = ParameterName::try_from(name)?;
        let kind = ParameterKind::try_from(kind)?;

        if self.params.iter().any(|param| param.id == id) {
            return Err(AddParameterError::DuplicateId { id });
        }

        let mut params = self.params.clone();
        let mut values = self.values.clone();
        params.push(ParameterDescriptor { id, name, kind });
        values.push(ParameterValue { parameter_id: id, value: String::new() });

        Ok(Self { params, values })
    }

    pub fn value(&self, id: ParameterId) -> Option<&str> {
        self.values.iter()
            .find(|entry| entry.parameter_id == id)
            .map(|entry| entry.value.as_str())
    }

    /// Read path for rendering: a missing entry yields the empty string, so a
    /// malformed document can never break the form.
    pub fn value_of(&self, id: ParameterId) -> &str {
        self.value(id).unwrap_or("")
    }
}

impl From<FormDocument> for EditorState {
    fn from(document: FormDocument) -> Self {
        Self {
            params: document.params,
            values: document.model.param_values,
        }
    }
}

impl From<EditorState> for FormDocument {
    fn from(state: EditorState) -> Self {
        Self {
            model: FormModel { param_values: state.values },
            params: state.params,
        }
    }
}

/// Mints unique parameter identifiers from a monotonic counter.
///
/// Replaces the wall-clock-timestamp scheme, which could collide when two
/// parameters were added within the same clock tick. Seeding above the
/// highest loaded id keeps fresh ids disjoint from the document's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterIdGenerator {
    next: u64,
}

impl ParameterIdGenerator {

    pub fn seeded_from(params: &[ParameterDescriptor]) -> Self {
        let highest = params.iter()
            .map(|param| param.id.0)
            .max()
            .unwrap_or(0);
        Self { next: highest + 1 }
    }

    pub fn next_id(&mut self) -> ParameterId {
        let id = ParameterId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    fn state_with(params: Vec<(u64, &str, ParameterKind)>, values: Vec<(u64, &str)>) -> EditorState {
        EditorState {
            params: params.into_iter()
                .map(|(id, name, kind)| ParameterDescriptor {
                    id: ParameterId(id),
                    name: ParameterName::try_from(name).unwrap(),
                    kind,
                })
                .collect(),
            values: values.into_iter()
                .map(|(id, value)| ParameterValue {
                    parameter_id: ParameterId(id),
                    value: String::from(value),
                })
                .collect(),
        }
    }

    #[test]
    fn Adding_a_parameter_to_an_empty_state_should_append_descriptor_and_empty_value() -> Result<()> {
        let state = EditorState::default();

        let state = state.add_parameter(ParameterId(1001), "Color", "text").unwrap();

        assert_that!(state.params.len(), eq(1));
        assert_that!(state.params[0].id, eq(ParameterId(1001)));
        assert_that!(state.params[0].name.clone().value(), eq("Color"));
        assert_that!(state.params[0].kind, eq(ParameterKind::Text));
        assert_that!(state.values.len(), eq(1));
        assert_that!(state.values[0].parameter_id, eq(ParameterId(1001)));
        assert_that!(state.values[0].value, eq(""));
        Ok(())
    }

    #[test]
    fn Updating_a_value_should_replace_exactly_the_targeted_entry() -> Result<()> {
        let state = EditorState::default()
            .add_parameter(ParameterId(1001), "Color", "text").unwrap();

        let state = state.update_value(ParameterId(1001), "Red").unwrap();

        assert_that!(state.values.len(), eq(1));
        assert_that!(state.values[0].parameter_id, eq(ParameterId(1001)));
        assert_that!(state.values[0].value, eq("Red"));
        Ok(())
    }

    #[test]
    fn Adding_a_parameter_with_an_empty_name_should_fail_and_leave_the_state_unchanged() -> Result<()> {
        let state = state_with(
            vec![(1, "Color", ParameterKind::Text)],
            vec![(1, "purple")],
        );

        let result = state.add_parameter(ParameterId(1001), "", "text");

        assert!(matches!(result, Err(AddParameterError::InvalidName(IllegalParameterName::Empty))));
        assert_that!(state, eq(&state_with(
            vec![(1, "Color", ParameterKind::Text)],
            vec![(1, "purple")],
        )));
        Ok(())
    }

    #[test]
    fn Adding_a_parameter_with_an_empty_kind_should_fail_and_leave_the_state_unchanged() -> Result<()> {
        let state = EditorState::default();

        let result = state.add_parameter(ParameterId(1001), "Color", "");

        assert!(matches!(result, Err(AddParameterError::InvalidKind(_))));
        assert_that!(state, eq(&EditorState::default()));
        Ok(())
    }

    #[test]
    fn Sequential_additions_should_keep_insertion_order() -> Result<()> {
        let state = EditorState::default()
            .add_parameter(ParameterId(2001), "Color", "text").unwrap()
            .add_parameter(ParameterId(2002), "Size", "number").unwrap();

        let ids = state.params.iter().map(|param| param.id).collect::<Vec<_>>();
        assert_that!(ids, eq(&vec![ParameterId(2001), ParameterId(2002)]));
        Ok(())
    }

    #[test]
    fn Adding_a_parameter_with_an_existing_id_should_fail() -> Result<()> {
        let state = EditorState::default()
            .add_parameter(ParameterId(7), "Color", "text").unwrap();

        let result = state.add_parameter(ParameterId(7), "Size", "text");

        assert!(matches!(result, Err(AddParameterError::DuplicateId { id: ParameterId(7) })));
        Ok(())
    }

    #[test]
    fn Updating_a_value_should_preserve_length_and_order_of_all_other_entries() -> Result<()> {
        let state = state_with(
            vec![
                (1, "Color", ParameterKind::Text),
                (2, "Size", ParameterKind::Text),
                (3, "Birthday", ParameterKind::Date),
            ],
            vec![(1, "purple"), (2, "m"), (3, "2001-02-03")],
        );

        let updated = state.update_value(ParameterId(2), "xl").unwrap();

        assert_that!(updated.values.len(), eq(state.values.len()));
        let order = updated.values.iter().map(|entry| entry.parameter_id).collect::<Vec<_>>();
        assert_that!(order, eq(&vec![ParameterId(1), ParameterId(2), ParameterId(3)]));
        assert_that!(updated.value_of(ParameterId(1)), eq("purple"));
        assert_that!(updated.value_of(ParameterId(2)), eq("xl"));
        assert_that!(updated.value_of(ParameterId(3)), eq("2001-02-03"));
        assert_that!(updated.params, eq(&state.params.clone()));
        Ok(())
    }

    #[test]
    fn Updating_an_unknown_id_should_fail_instead_of_touching_another_entry() -> Result<()> {
        let state = state_with(
            vec![(1, "Color", ParameterKind::Text)],
            vec![(1, "purple")],
        );

        let result = state.update_value(ParameterId(42), "Red");

        assert!(matches!(result, Err(EditValueError::NoSuchParameter { id: ParameterId(42) })));
        assert_that!(state.value_of(ParameterId(1)), eq("purple"));
        Ok(())
    }

    #[test]
    fn Every_descriptor_should_have_exactly_one_value_entry_after_repeated_additions() -> Result<()> {
        let mut state = EditorState::default();
        let mut generator = ParameterIdGenerator::seeded_from(&state.params);

        for name in ["Color", "Size", "Weight"] {
            state = state.add_parameter(generator.next_id(), name, "text").unwrap();
        }

        for param in &state.params {
            let matching = state.values.iter()
                .filter(|entry| entry.parameter_id == param.id)
                .count();
            assert_that!(matching, eq(1));
        }
        Ok(())
    }

    #[test]
    fn Looking_up_a_missing_id_should_default_to_the_empty_string() -> Result<()> {
        let state = EditorState::default();

        assert_that!(state.value(ParameterId(1)), eq(None::<&str>));
        assert_that!(state.value_of(ParameterId(1)), eq(""));
        Ok(())
    }

    #[test]
    fn The_generator_should_start_above_the_highest_loaded_id() -> Result<()> {
        let state = state_with(
            vec![(3, "Color", ParameterKind::Text), (17, "Size", ParameterKind::Text)],
            vec![(3, ""), (17, "")],
        );

        let mut generator = ParameterIdGenerator::seeded_from(&state.params);

        assert_that!(generator.next_id(), eq(ParameterId(18)));
        assert_that!(generator.next_id(), eq(ParameterId(19)));
        Ok(())
    }

    #[test]
    fn The_generator_should_start_at_one_for_an_empty_catalog() -> Result<()> {
        let mut generator = ParameterIdGenerator::seeded_from(&[]);
        assert_that!(generator.next_id(), eq(ParameterId(1)));
        Ok(())
    }

    #[test]
    fn A_state_should_round_trip_through_the_document_shape() -> Result<()> {
        let state = state_with(
            vec![(1, "Color", ParameterKind::Text)],
            vec![(1, "purple")],
        );

        let document = FormDocument::from(state.clone());
        assert_that!(EditorState::from(document), eq(&state));
        Ok(())
    }
}
