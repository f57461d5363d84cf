//! Terminal output helpers.
//!
//! Status lines go to stderr so that command output on stdout stays pipeable.

use console::style;
use serde::Serialize;
use std::fmt;

use sift_core::{ConditionError, FieldSchema, OperatorDescriptor, SearchConfig, ValueShape};

/// How command results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Pretty,
    /// JSON on stdout
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(message: &str) {
    eprintln!("{}", style(message).bold());
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

pub fn error_with_details(message: &str, details: &str) {
    error(message);
    eprintln!("  {}", style(details).dim());
}

pub fn info(message: &str) {
    log::info!("{}", message);
}

pub fn debug(message: &str) {
    log::debug!("{}", message);
}

pub fn raw_output(text: &str) {
    println!("{}", text);
}

pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error(&format!("Failed to serialize output: {}", e)),
    }
}

fn shape_label(shape: ValueShape) -> &'static str {
    match shape {
        ValueShape::None => "no value",
        ValueShape::Scalar => "single value",
        ValueShape::List => "list",
        ValueShape::Range => "range",
    }
}

pub fn pretty_output_operators(descriptors: &[&OperatorDescriptor]) {
    for descriptor in descriptors {
        let types: Vec<_> = descriptor
            .supported_types
            .iter()
            .map(|t| t.as_str())
            .collect();
        println!(
            "{:<12} {:<28} {:<13} {}",
            style(descriptor.operator.as_str()).cyan(),
            descriptor.label,
            shape_label(descriptor.shape),
            style(types.join(", ")).dim()
        );
    }
}

pub fn pretty_output_fields(schema: &FieldSchema) {
    for field in schema.iter() {
        let mut flags = Vec::new();
        if !field.sortable {
            flags.push("unsortable");
        }
        if !field.visible {
            flags.push("hidden");
        }
        if !field.enable_hiding {
            flags.push("always shown");
        }
        println!(
            "{:<16} {:<8} {} {}",
            style(&field.key).cyan(),
            field.field_type,
            field.label,
            style(flags.join(", ")).dim()
        );
        for option in &field.options {
            println!("    {} ({})", option.value, option.label);
        }
    }
}

pub fn pretty_output_config(config: &SearchConfig) {
    if let Some(text) = config.search_text() {
        println!("{} {}", style("search:").bold(), text);
    }
    if let Some(operator) = config.default_logical_operator {
        println!("{} {}", style("operator:").bold(), operator.as_str());
    }
    if !config.filter_conditions.is_empty() {
        println!("{}", style("filters:").bold());
        for condition in &config.filter_conditions {
            println!("  {}", condition);
        }
    }
    if !config.sort_conditions.is_empty() {
        println!("{}", style("sort:").bold());
        for (priority, sort) in config.sort_conditions.iter().enumerate() {
            println!("  {}. {} {}", priority + 1, sort.field, sort.order.as_str());
        }
    }
}

pub fn pretty_output_errors(errors: &[ConditionError]) {
    for e in errors {
        error(&format!("{}: {}", style(&e.field).cyan(), e.message));
    }
}
