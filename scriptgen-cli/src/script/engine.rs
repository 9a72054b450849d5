//! Template rendering
//!
//! Rendering is a pure function of the template, the substitutions and one
//! clock reading. The clock supplies `generated_at` and the millisecond
//! component of the suggested file name.

use std::collections::BTreeMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::clock::Clock;
use super::templates;
use crate::error::ExtractionError;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([a-z_]+)\}\}").expect("placeholder pattern is valid"));

/// Placeholder filled by the engine from the clock
pub const GENERATED_AT: &str = "generated_at";

/// Closed set of renderable scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    FqnpLoadAndVerify,
    AccountReopen,
    SrClosure,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [
        TemplateId::FqnpLoadAndVerify,
        TemplateId::AccountReopen,
        TemplateId::SrClosure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::FqnpLoadAndVerify => "fqnp-load-and-verify",
            TemplateId::AccountReopen => "account-reopen",
            TemplateId::SrClosure => "sr-closure",
        }
    }

    /// Leading component of generated file names
    pub fn file_kind(&self) -> &'static str {
        match self {
            TemplateId::FqnpLoadAndVerify => "fqnp_script",
            TemplateId::AccountReopen => "account_reopen",
            TemplateId::SrClosure => "sr_closure",
        }
    }

    pub fn skeleton(&self) -> &'static str {
        match self {
            TemplateId::FqnpLoadAndVerify => templates::FQNP_LOAD_AND_VERIFY,
            TemplateId::AccountReopen => templates::ACCOUNT_REOPEN,
            TemplateId::SrClosure => templates::SR_CLOSURE,
        }
    }

    /// Placeholder whose value also goes into the file name
    pub fn identifier_placeholder(&self) -> Option<&'static str> {
        match self {
            TemplateId::FqnpLoadAndVerify => None,
            TemplateId::AccountReopen => Some("membership_number"),
            TemplateId::SrClosure => Some("sr_number"),
        }
    }

    /// Placeholders the caller must supply, in order of first appearance
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(self.skeleton()) {
            if let Some(name) = caps.get(1).map(|m| m.as_str()) {
                if name != GENERATED_AT && !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                ExtractionError::invalid_argument(format!("unknown template id '{}'", s))
            })
    }
}

/// Named values to place into a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// A generated script and the name it should be saved under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptArtifact {
    template: TemplateId,
    file_name: String,
    content: String,
}

impl ScriptArtifact {
    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Render `template` with `substitutions` at the clock's current time
pub fn render(
    template: TemplateId,
    substitutions: &Substitutions,
    clock: &impl Clock,
) -> Result<ScriptArtifact, ExtractionError> {
    for name in template.placeholders() {
        if substitutions.get(name).is_none() {
            return Err(ExtractionError::invalid_argument(format!(
                "template '{}' requires a value for '{}'",
                template, name
            )));
        }
    }

    let now = clock.now();
    let generated_at = now.format("%Y-%m-%d %H:%M:%S").to_string();

    let content = PLACEHOLDER
        .replace_all(template.skeleton(), |caps: &Captures| {
            let name = &caps[1];
            if name == GENERATED_AT {
                generated_at.clone()
            } else {
                substitutions.get(name).unwrap_or_default().to_string()
            }
        })
        .into_owned();

    let identifier = template
        .identifier_placeholder()
        .and_then(|name| substitutions.get(name));
    let file_name = artifact_file_name(template, identifier, now.timestamp_millis());

    log::debug!("Rendered {} ({} bytes) as {}", template, content.len(), file_name);

    Ok(ScriptArtifact {
        template,
        file_name,
        content,
    })
}

/// Quote each value and lay the batches out one per line
///
/// `[["1","2"],["3"]]` renders as `'1','2',\n'3'`.
pub fn render_value_list(batches: &[Vec<String>]) -> String {
    batches
        .iter()
        .map(|batch| {
            batch
                .iter()
                .map(|value| format!("'{}'", value))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// `<kind>_<identifier>_<millis>.sql`, identifier omitted when absent
fn artifact_file_name(template: TemplateId, identifier: Option<&str>, millis: i64) -> String {
    match identifier {
        Some(id) => format!("{}_{}_{}.sql", template.file_kind(), sanitize(id), millis),
        None => format!("{}_{}.sql", template.file_kind(), millis),
    }
}

/// Keep file names portable; the script body still carries the raw value
fn sanitize(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::parse("2024-03-01T09:30:00+10:00").unwrap()
    }

    #[test]
    fn test_template_ids_round_trip_through_strings() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_template_is_invalid_argument() {
        let err = "account-close".parse::<TemplateId>().unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidArgument(_)));

        let err = "nope".parse::<TemplateId>().unwrap_err();
        assert!(err.to_string().contains("unknown template id 'nope'"));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            TemplateId::FqnpLoadAndVerify.placeholders(),
            vec!["source_label", "total_count", "activity_numbers"]
        );
        assert_eq!(TemplateId::AccountReopen.placeholders(), vec!["membership_number"]);
        assert_eq!(TemplateId::SrClosure.placeholders(), vec!["sr_number"]);
    }

    #[test]
    fn test_account_reopen() {
        let subs = Substitutions::new().with("membership_number", "9991234567");
        let artifact = render(TemplateId::AccountReopen, &subs, &clock()).unwrap();

        assert_eq!(
            artifact.content(),
            "call IT_MEM_ACCSTACHANGE ('QF','QFF','9991234567','A',CURRENT_TIMESTAMP::timestamp(0));\n\
             update memmst set memshpsta='A',upddat=CURRENT_TIMESTAMP::timestamp(0) where memshpnum='9991234567' and cmpcod='QF';\n\
             commit;"
        );
        assert_eq!(artifact.file_name(), "account_reopen_9991234567_1709249400000.sql");
        assert_eq!(artifact.template(), TemplateId::AccountReopen);
    }

    #[test]
    fn test_sr_closure() {
        let subs = Substitutions::new().with("sr_number", "1-ABC42");
        let template: TemplateId = "sr-closure".parse().unwrap();
        let artifact = render(template, &subs, &clock()).unwrap();

        assert!(artifact.content().contains("REQIDR ='1-ABC42';"));
        assert!(artifact.content().ends_with("\ncommit;"));
        assert_eq!(artifact.file_name(), "sr_closure_1-ABC42_1709249400000.sql");
    }

    #[test]
    fn test_values_are_not_escaped_or_rescanned() {
        let subs = Substitutions::new().with("membership_number", "O'Brien {{sr_number}}");
        let artifact = render(TemplateId::AccountReopen, &subs, &clock()).unwrap();

        assert!(artifact.content().contains("memshpnum='O'Brien {{sr_number}}'"));
        assert_eq!(
            artifact.file_name(),
            "account_reopen_O_Brien___sr_number___1709249400000.sql"
        );
    }

    #[test]
    fn test_missing_substitution_is_invalid_argument() {
        let err = render(TemplateId::SrClosure, &Substitutions::new(), &clock()).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::InvalidArgument(
                "template 'sr-closure' requires a value for 'sr_number'".to_string()
            )
        );
    }

    #[test]
    fn test_render_value_list() {
        let batches = vec![
            vec!["1".to_string(), "2".to_string()],
            vec!["3".to_string()],
        ];
        assert_eq!(render_value_list(&batches), "'1','2',\n'3'");
        assert_eq!(render_value_list(&[]), "");
    }

    #[test]
    fn test_fqnp_header_and_file_name() {
        let subs = Substitutions::new()
            .with("source_label", "march.xlsx")
            .with("total_count", "2")
            .with("activity_numbers", "'1','2'");
        let artifact = render(TemplateId::FqnpLoadAndVerify, &subs, &clock()).unwrap();

        assert!(artifact.content().starts_with(
            "-- Generated FQNP Script\n\
             -- Generated on: 2024-03-01 09:30:00\n\
             -- Source File: march.xlsx\n\
             -- Total Activity Numbers: 2\n"
        ));
        assert_eq!(artifact.content().matches("'1','2'").count(), 3);
        assert_eq!(artifact.file_name(), "fqnp_script_1709249400000.sql");
    }
}
