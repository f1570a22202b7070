use crate::domain::model::{Professional, ProfessionalId, RuleEntry, RuleTarget, SpecialtyGroup};
use crate::utils::error::{MatchError, Result};
use std::collections::HashSet;

fn professional(key: &str, id: u64, name: &str, keywords: &[&str], color: &str) -> Professional {
    Professional {
        key: key.to_string(),
        id: ProfessionalId(id),
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        color: color.to_string(),
    }
}

fn rule(target: RuleTarget, keywords: &[&str]) -> RuleEntry {
    RuleEntry {
        target,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Static registry of professionals, the priority-ordered rule table, and
/// the specialty groups. Loaded once at startup, read-only afterwards.
///
/// Iteration order of `professionals` and `rules` is part of the matching
/// contract: earlier entries win ties.
#[derive(Debug, Clone)]
pub struct Directory {
    professionals: Vec<Professional>,
    rules: Vec<RuleEntry>,
    groups: Vec<SpecialtyGroup>,
    default_key: String,
}

impl Directory {
    /// The clinic's compiled-in configuration.
    pub fn builtin() -> Self {
        let professionals = vec![
            professional("Dayara", 4773939817545728, "Dayara Boscolo", &["dayara"], "#00FFFF"),
            professional(
                "Ramon",
                5108599479861248,
                "Ramon Uchoa dos Anjos",
                &["ramon", "uchoa"],
                "#000080",
            ),
            professional(
                "Vinicius",
                5478954060808192,
                "Vinicius Targino Gomes de Almeida",
                &["vinicius", "targino"],
                "#BDB76B",
            ),
            professional(
                "Gabriela",
                5859536659349504,
                "Gabriela Formiga da Silva",
                &["gabriela", "formiga", "gabi"],
                "#FFB6C1",
            ),
            professional(
                "Ruth",
                5897012130873344,
                "Maria Ruth Costa Rodrigues",
                &["ruth", "maria ruth"],
                "#FF8C00",
            ),
            professional(
                "Katianne",
                6068925041999872,
                "Katianne Gomes Dias Bezerra",
                &["katianne", "katiane", "kati"],
                "#008000",
            ),
            professional(
                "Mateus",
                6462444026265600,
                "Mateus Correia Vidal Ataide",
                &["mateus", "matheus", "ataide"],
                "#C0C0C0",
            ),
            professional(
                "Camylla",
                6567447868735488,
                "Camylla Farias Brandão",
                &["camylla", "camila", "faria"],
                "#9932CC",
            ),
        ];

        // Specific procedures first, then the rotated specialty group,
        // then general triage vocabulary. First match wins.
        let rules = vec![
            rule(
                RuleTarget::Professional("Camylla".into()),
                &["canal", "endodontia", "nervo", "endo", "matar o nervo"],
            ),
            rule(
                RuleTarget::Professional("Katianne".into()),
                &[
                    "aparelho",
                    "orto",
                    "botox",
                    "harmonizacao",
                    "ferrinho",
                    "manutencao",
                    "invisalign",
                    "preenchimento",
                ],
            ),
            rule(
                RuleTarget::Professional("Vinicius".into()),
                &["faceta", "lente", "estetica", "sorriso", "laminado"],
            ),
            rule(
                RuleTarget::Professional("Mateus".into()),
                &[
                    "extracao",
                    "siso",
                    "arrancar",
                    "tirar dente",
                    "cirurgia",
                    "exodontia",
                    "molar",
                ],
            ),
            rule(
                RuleTarget::Professional("Ramon".into()),
                &[
                    "protese",
                    "coroa",
                    "gengiva",
                    "implante",
                    "protocolo",
                    "dentadura",
                    "pino",
                    "parafuso",
                    "gengivoplastia",
                ],
            ),
            rule(
                RuleTarget::Professional("Gabriela".into()),
                &["urgencia", "dor", "infantil", "crianca", "kids", "pediatria"],
            ),
            rule(
                RuleTarget::Group("clareamento_limpeza".into()),
                &["limpeza", "clareamento", "profilaxia", "raspag"],
            ),
            rule(
                RuleTarget::Triage,
                &[
                    "restauracao",
                    "obtura",
                    "dentistica",
                    "consulta",
                    "rotina",
                    "avaliacao",
                    "checkup",
                    "olhada",
                    "ver",
                    "orcamento",
                ],
            ),
        ];

        let groups = vec![SpecialtyGroup {
            name: "clareamento_limpeza".to_string(),
            members: vec!["Gabriela".to_string(), "Vinicius".to_string()],
        }];

        Self {
            professionals,
            rules,
            groups,
            default_key: "Gabriela".to_string(),
        }
    }

    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn rules(&self) -> &[RuleEntry] {
        &self.rules
    }

    pub fn groups(&self) -> &[SpecialtyGroup] {
        &self.groups
    }

    pub fn get(&self, key: &str) -> Option<&Professional> {
        self.professionals.iter().find(|p| p.key == key)
    }

    pub fn group(&self, name: &str) -> Option<&SpecialtyGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn default_professional(&self) -> Result<&Professional> {
        self.get(&self.default_key).ok_or_else(|| MatchError::ConfigError {
            message: format!("default professional '{}' is not registered", self.default_key),
        })
    }

    /// Startup invariant checks. Any violation is fatal.
    pub fn validate(&self) -> Result<()> {
        let mut seen_ids = HashSet::new();
        for p in &self.professionals {
            if p.keywords.is_empty() {
                return Err(MatchError::ConfigError {
                    message: format!("professional '{}' has no match keywords", p.key),
                });
            }
            if !seen_ids.insert(p.id) {
                return Err(MatchError::ConfigError {
                    message: format!("duplicate professional id {}", p.id),
                });
            }
        }

        self.default_professional()?;

        for entry in &self.rules {
            match &entry.target {
                RuleTarget::Professional(key) => {
                    if self.get(key).is_none() {
                        return Err(MatchError::ConfigError {
                            message: format!("rule references unknown professional '{}'", key),
                        });
                    }
                }
                RuleTarget::Group(name) => {
                    if self.group(name).is_none() {
                        return Err(MatchError::ConfigError {
                            message: format!("rule references unknown specialty group '{}'", name),
                        });
                    }
                }
                RuleTarget::Triage => {}
            }
        }

        for group in &self.groups {
            if group.members.len() < 2 {
                return Err(MatchError::ConfigError {
                    message: format!("specialty group '{}' needs at least two members", group.name),
                });
            }
            for member in &group.members {
                if self.get(member).is_none() {
                    return Err(MatchError::ConfigError {
                        message: format!(
                            "specialty group '{}' references unknown professional '{}'",
                            group.name, member
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}
