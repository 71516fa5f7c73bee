//! Attribute declarations for the managing host
//!
//! The host consumes these declarations to expose the resource, data-source,
//! and provider configuration surfaces. Marshalling into host-specific
//! schema containers is an adapter concern; these are plain values.

use serde::Serialize;

/// Value type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttributeKind {
    String,
    Int,
}

/// How an attribute participates in plans and state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttributeMode {
    /// Must be set by the caller
    Required,
    /// May be set by the caller
    Optional,
    /// Populated by the provider, never by the caller
    Computed,
    /// May be set by the caller, populated by the provider otherwise
    OptionalComputed,
}

/// A single attribute declaration
#[derive(Debug, Clone, Serialize)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub mode: AttributeMode,
    /// Redacted from host logs and plan output
    pub sensitive: bool,
    /// Changing this attribute forces destroy-and-recreate
    pub requires_replace: bool,
    pub description: &'static str,
}

impl AttributeSchema {
    fn new(
        name: &'static str,
        kind: AttributeKind,
        mode: AttributeMode,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            mode,
            sensitive: false,
            requires_replace: false,
            description,
        }
    }

    fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }
}

/// Attributes of the managed pipeline resource
pub fn resource_attributes() -> Vec<AttributeSchema> {
    vec![
        AttributeSchema::new(
            "id",
            AttributeKind::String,
            AttributeMode::Computed,
            "Unique identifier of the pipeline job (equal to its name)",
        ),
        // Jobs cannot be renamed in place on the server
        AttributeSchema::new(
            "name",
            AttributeKind::String,
            AttributeMode::Required,
            "Name of the pipeline job",
        )
        .requires_replace(),
        AttributeSchema::new(
            "description",
            AttributeKind::String,
            AttributeMode::OptionalComputed,
            "Description of the pipeline job",
        ),
        AttributeSchema::new(
            "script",
            AttributeKind::String,
            AttributeMode::Required,
            "Build script source for the pipeline",
        ),
        AttributeSchema::new(
            "last_updated",
            AttributeKind::String,
            AttributeMode::Computed,
            "Timestamp of the most recent successful reconciliation",
        ),
    ]
}

/// Attributes of the read-only pipeline data source
pub fn data_source_attributes() -> Vec<AttributeSchema> {
    vec![
        AttributeSchema::new(
            "id",
            AttributeKind::String,
            AttributeMode::OptionalComputed,
            "Identifier of the pipeline job; may be used instead of name",
        ),
        AttributeSchema::new(
            "name",
            AttributeKind::String,
            AttributeMode::OptionalComputed,
            "Name of the pipeline job to look up",
        ),
        AttributeSchema::new(
            "description",
            AttributeKind::String,
            AttributeMode::Computed,
            "Description of the pipeline job",
        ),
        AttributeSchema::new(
            "script",
            AttributeKind::String,
            AttributeMode::Computed,
            "Build script source of the pipeline",
        ),
        AttributeSchema::new(
            "last_build_status",
            AttributeKind::String,
            AttributeMode::Computed,
            "Status of the last completed build (e.g., SUCCESS, FAILURE)",
        ),
        AttributeSchema::new(
            "last_build_duration_ms",
            AttributeKind::Int,
            AttributeMode::Computed,
            "Duration of the last completed build in milliseconds",
        ),
    ]
}

/// Attributes of the provider configuration block
pub fn provider_attributes() -> Vec<AttributeSchema> {
    vec![
        AttributeSchema::new(
            "url",
            AttributeKind::String,
            AttributeMode::Required,
            "Base URL of the CI server",
        ),
        AttributeSchema::new(
            "username",
            AttributeKind::String,
            AttributeMode::Required,
            "Account used for authentication",
        ),
        AttributeSchema::new(
            "api_token",
            AttributeKind::String,
            AttributeMode::Required,
            "API token paired with the account",
        )
        .sensitive(),
    ]
}
