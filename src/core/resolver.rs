use crate::core::balancer::RoundRobinBalancer;
use crate::core::directory::Directory;
use crate::core::text::Sanitizer;
use crate::domain::model::{Professional, RuleTarget};
use crate::utils::error::{MatchError, Result};
use std::collections::HashMap;
use std::sync::Arc;

fn any_keyword_matches(keywords: &[String], clean_text: &str) -> bool {
    keywords.iter().any(|k| clean_text.contains(k.as_str()))
}

/// Maps free text to exactly one professional.
///
/// Total over text input: anything that matches nothing lands on the
/// default/triage professional. Matching is case- and accent-insensitive
/// substring containment, not whole-word; a keyword inside a longer word
/// still matches.
pub struct Resolver {
    directory: Arc<Directory>,
    balancer: RoundRobinBalancer,
    sanitizer: Sanitizer,
}

impl Resolver {
    pub fn new(directory: Arc<Directory>) -> Self {
        let balancer = RoundRobinBalancer::new(Arc::clone(&directory));
        Self {
            directory,
            balancer,
            sanitizer: Sanitizer::new(),
        }
    }

    /// Strict priority: professional names, then the rule table in
    /// declaration order, then the default professional. The only error
    /// source is a configuration fault surfaced by the balancer.
    pub fn resolve(&self, raw_text: &str) -> Result<Professional> {
        let clean_text = self.sanitizer.clean(raw_text);
        tracing::debug!("resolving professional for: {:?}", clean_text);

        // 1. Direct name match, registry order breaks ties.
        for candidate in self.directory.professionals() {
            if any_keyword_matches(&candidate.keywords, &clean_text) {
                tracing::debug!("matched by name: {}", candidate.name);
                return Ok(candidate.clone());
            }
        }

        // 2-4. Rule table, first match wins.
        for entry in self.directory.rules() {
            if !any_keyword_matches(&entry.keywords, &clean_text) {
                continue;
            }
            return match &entry.target {
                RuleTarget::Professional(key) => {
                    let professional =
                        self.directory.get(key).cloned().ok_or_else(|| MatchError::ConfigError {
                            message: format!("rule references unknown professional '{}'", key),
                        })?;
                    tracing::debug!("matched by procedure: {}", professional.name);
                    Ok(professional)
                }
                RuleTarget::Group(name) => {
                    let professional = self.balancer.next_in_group(name)?;
                    tracing::debug!("matched group '{}', rotated to: {}", name, professional.name);
                    Ok(professional)
                }
                RuleTarget::Triage => {
                    tracing::debug!("matched general triage vocabulary");
                    self.directory.default_professional().cloned()
                }
            };
        }

        // 5. Nothing matched anywhere.
        tracing::info!("no keyword matched, routing to triage");
        self.directory.default_professional().cloned()
    }

    /// Current rotation counters, for the diagnostics surface.
    pub fn rotation_snapshot(&self) -> HashMap<String, u64> {
        self.balancer.snapshot()
    }
}
