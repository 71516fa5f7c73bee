//! Configuration document codec
//!
//! Encodes a pipeline definition into the remote server's `config.xml` shape
//! and extracts the variable fields back out. The document shape is fixed;
//! only the description and the build script vary, so encoding is a
//! templating operation and decoding is a positional substring search for the
//! exact delimiter pairs the encoder emits. This is intentionally not a
//! general XML parser: no other document shape is accepted.

use thiserror::Error;

/// Opening delimiter of the literal-block script section
pub const SCRIPT_OPEN: &str = "<script><![CDATA[";
/// Closing delimiter of the literal-block script section
pub const SCRIPT_CLOSE: &str = "]]></script>";
/// Opening delimiter of the description tag
pub const DESCRIPTION_OPEN: &str = "<description>";
/// Closing delimiter of the description tag
pub const DESCRIPTION_CLOSE: &str = "</description>";

/// Extraction failure: a delimiter pair was absent from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("script block delimiters not found in config document")]
    ScriptDelimiters,

    #[error("description tag not found in config document")]
    DescriptionDelimiters,
}

/// Variable fields extracted from a configuration document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedConfig {
    pub script: String,
    pub description: String,
}

/// Renders the configuration document for a pipeline job.
///
/// The description is embedded verbatim in its tag and the script verbatim
/// inside the CDATA literal block; everything else is static boilerplate
/// (plugin metadata, sandbox flag) that is not round-tripped from user input.
pub fn build_config_xml(description: &str, script: &str) -> String {
    format!(
        r#"<?xml version='1.1' encoding='UTF-8'?>
<flow-definition plugin="workflow-job@1254.v3f669a_b_a_083a_">
  <description>{description}</description>
  <keepDependencies>false</keepDependencies>
  <properties/>
  <definition class="org.jenkinsci.plugins.workflow.cps.CpsFlowDefinition" plugin="workflow-cps@2807.v39e1503c779e">
    <script><![CDATA[{script}]]></script>
    <sandbox>true</sandbox>
  </definition>
  <triggers/>
  <disabled>false</disabled>
</flow-definition>"#
    )
}

/// Extracts the build script from a configuration document.
///
/// Known limitation: the search stops at the first occurrence of the closing
/// delimiter, so a script body that itself contains `]]></script>` is
/// truncated at that point. Callers must treat the reserved closing sequence
/// as forbidden inside script content.
pub fn extract_script(document: &str) -> Result<String, ParseError> {
    between(document, SCRIPT_OPEN, SCRIPT_CLOSE).ok_or(ParseError::ScriptDelimiters)
}

/// Extracts the description from a configuration document.
///
/// The same reserved-delimiter limitation applies to `</description>` inside
/// description content.
pub fn extract_description(document: &str) -> Result<String, ParseError> {
    between(document, DESCRIPTION_OPEN, DESCRIPTION_CLOSE).ok_or(ParseError::DescriptionDelimiters)
}

/// Extracts both variable fields, failing on the first absent delimiter pair.
///
/// Read paths that want per-field degradation call [`extract_script`] and
/// [`extract_description`] independently instead.
pub fn decode_config(document: &str) -> Result<DecodedConfig, ParseError> {
    Ok(DecodedConfig {
        script: extract_script(document)?,
        description: extract_description(document)?,
    })
}

/// Returns the text strictly between the first `open` and the next `close`.
fn between(document: &str, open: &str, close: &str) -> Option<String> {
    let start = document.find(open)? + open.len();
    let end = document[start..].find(close)? + start;
    Some(document[start..end].to_string())
}
