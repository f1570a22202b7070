use serde::{Deserialize, Serialize};

/// Provider-issued professional identifier.
///
/// Clinicorp hands out very large numeric ids (e.g. `4773939817545728`);
/// a 64-bit integer holds them exactly, so equality is a plain integer
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfessionalId(pub u64);

impl std::fmt::Display for ProfessionalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable professional from the static registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    /// Short reference name used by rules and specialty groups.
    pub key: String,
    pub id: ProfessionalId,
    pub name: String,
    /// Lowercase, diacritic-free match keywords. Never empty.
    pub keywords: Vec<String>,
    /// Cosmetic display color (`#RRGGBB`).
    pub color: String,
}

/// Where a matched rule sends the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTarget {
    /// Book a specific professional, referenced by registry key.
    Professional(String),
    /// Rotate within a specialty group, referenced by group name.
    Group(String),
    /// Book the default/triage professional.
    Triage,
}

/// One entry of the priority-ordered rule table.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    pub target: RuleTarget,
    pub keywords: Vec<String>,
}

/// A named set of professionals that interchangeably handle a request
/// category, assigned by round-robin rotation.
#[derive(Debug, Clone)]
pub struct SpecialtyGroup {
    pub name: String,
    /// Registry keys, in rotation order. At least two.
    pub members: Vec<String>,
}

/// One open slot as reported by the scheduling provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(rename = "from")]
    pub start_time: String,
    #[serde(rename = "to")]
    pub end_time: String,
    #[serde(rename = "isSelectable")]
    pub is_selectable: bool,
    #[serde(rename = "isSelected")]
    pub is_selected: bool,
    #[serde(rename = "professionalId")]
    pub professional_id: ProfessionalId,
}

/// One day of provider availability. Field names follow the provider's
/// wire format, including its own spelling of `AvaliableTimes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Week")]
    pub week: String,
    #[serde(rename = "DayWeek")]
    pub day_week: String,
    #[serde(rename = "AvaliableTimes")]
    pub available_times: Vec<TimeSlot>,
    pub day: u32,
    pub month: u32,
    pub year: i32,
    #[serde(rename = "jsonDate")]
    pub json_date: String,
}

/// Final response shape, mirroring the original service's wire format
/// (the color field is exposed as `cor`).
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_id: Option<ProfessionalId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_name: Option<String>,
    #[serde(rename = "cor")]
    pub color: Option<String>,
    pub schedules: Vec<DaySchedule>,
}

impl MatchResponse {
    pub fn failure(message: impl Into<String>, color: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            professional_id: None,
            professional_name: None,
            color,
            schedules: Vec::new(),
        }
    }

    pub fn success(
        message: impl Into<String>,
        professional: &Professional,
        schedules: Vec<DaySchedule>,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            professional_id: Some(professional.id),
            professional_name: Some(professional.name.clone()),
            color: Some(professional.color.clone()),
            schedules,
        }
    }
}
