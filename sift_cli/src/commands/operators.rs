use serde::Serialize;

use sift_core::{FieldType, OperatorCatalog, OperatorDescriptor};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OperatorView<'a> {
    id: &'static str,
    label: &'a str,
    requires_value: bool,
    requires_array: bool,
    requires_range: bool,
    supported_types: Vec<FieldType>,
}

impl<'a> From<&'a OperatorDescriptor> for OperatorView<'a> {
    fn from(descriptor: &'a OperatorDescriptor) -> Self {
        Self {
            id: descriptor.operator.as_str(),
            label: descriptor.label,
            requires_value: descriptor.requires_value(),
            requires_array: descriptor.requires_array(),
            requires_range: descriptor.requires_range(),
            supported_types: descriptor.supported_types.clone(),
        }
    }
}

/// Lists catalog operators, optionally only those usable on one field type.
pub fn list_operators(
    field_type: Option<FieldType>,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    let catalog = OperatorCatalog::standard();
    let descriptors: Vec<&OperatorDescriptor> = match field_type {
        Some(field_type) => {
            ui::header(&format!("Operators for {} fields", field_type));
            catalog.operators_supporting(field_type)
        }
        None => {
            ui::header("Operators");
            catalog.iter().collect()
        }
    };

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_operators(&descriptors),
        OutputFormat::Json => {
            let views: Vec<OperatorView> = descriptors.into_iter().map(OperatorView::from).collect();
            ui::json_output(&views);
        }
    }

    Ok(())
}
