use serde::{Deserialize, Serialize};

// Allowed: IDs, Timestamps, Durations, Counts, Tags
// Every duration is fabricated; nothing here measures a live system.

/// The six simulated actions. Each one pins the tags, the reported duration
/// and the descriptive stage list of the records it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    Authentication,
    DocumentUpload,
    ComplianceScan,
    DatabaseOperation,
    TrainingProgress,
    Notification,
}

impl FlowKind {
    /// Fixed `action` tag. Authentication has none: the caller names the action.
    pub fn action(&self) -> Option<&'static str> {
        match self {
            FlowKind::Authentication => None,
            FlowKind::DocumentUpload => Some("document_upload"),
            FlowKind::ComplianceScan => Some("compliance_scan"),
            FlowKind::DatabaseOperation => Some("database_operation"),
            FlowKind::TrainingProgress => Some("training_progress"),
            FlowKind::Notification => Some("notification_sent"),
        }
    }

    pub fn component(&self) -> Component {
        match self {
            FlowKind::Authentication => Component::Authentication,
            FlowKind::DocumentUpload => Component::Storage,
            FlowKind::ComplianceScan => Component::AiAnalysis,
            FlowKind::DatabaseOperation => Component::Database,
            FlowKind::TrainingProgress => Component::Training,
            FlowKind::Notification => Component::Notifications,
        }
    }

    pub fn subsystem(&self) -> Subsystem {
        match self {
            FlowKind::Authentication => Subsystem::SupabaseAuth,
            FlowKind::DocumentUpload => Subsystem::SupabaseStorage,
            FlowKind::ComplianceScan => Subsystem::ComplianceChecker,
            FlowKind::DatabaseOperation => Subsystem::SupabasePostgres,
            FlowKind::TrainingProgress => Subsystem::LearningManagement,
            FlowKind::Notification => Subsystem::CommunicationService,
        }
    }

    pub fn flow_step(&self) -> FlowStep {
        match self {
            FlowKind::Authentication => FlowStep::UserAuthentication,
            FlowKind::DocumentUpload => FlowStep::FileUpload,
            FlowKind::ComplianceScan => FlowStep::ComplianceAnalysis,
            FlowKind::DatabaseOperation => FlowStep::DataPersistence,
            FlowKind::TrainingProgress => FlowStep::ProgressTracking,
            FlowKind::Notification => FlowStep::UserNotification,
        }
    }

    /// Simulated response time in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        match self {
            FlowKind::Authentication => 150,
            FlowKind::DocumentUpload => 2500,
            FlowKind::ComplianceScan => 3000,
            FlowKind::DatabaseOperation => 50,
            FlowKind::TrainingProgress => 100,
            FlowKind::Notification => 200,
        }
    }

    pub fn data_flow(&self) -> &'static [&'static str] {
        match self {
            FlowKind::Authentication => &["user_input", "supabase_auth", "session_creation", "dashboard_access"],
            FlowKind::DocumentUpload => &["file_selection", "validation", "supabase_storage", "metadata_save", "scan_trigger"],
            FlowKind::ComplianceScan => &["document_retrieval", "ai_analysis", "compliance_check", "issue_identification", "result_storage"],
            FlowKind::DatabaseOperation => &["query_preparation", "execution", "data_persistence", "audit_logging"],
            FlowKind::TrainingProgress => &["module_access", "progress_tracking", "completion_check", "certificate_generation"],
            FlowKind::Notification => &["event_trigger", "notification_preparation", "delivery", "delivery_status"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Authentication,
    Storage,
    AiAnalysis,
    Database,
    Training,
    Notifications,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Authentication => "authentication",
            Component::Storage => "storage",
            Component::AiAnalysis => "ai_analysis",
            Component::Database => "database",
            Component::Training => "training",
            Component::Notifications => "notifications",
        }
    }

    /// Short prefix used in log headlines ("Auth Flow Data: ...").
    pub fn label(&self) -> &'static str {
        match self {
            Component::Authentication => "Auth",
            Component::Storage => "Upload",
            Component::AiAnalysis => "Scan",
            Component::Database => "Database",
            Component::Training => "Training",
            Component::Notifications => "Notification",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsystem {
    SupabaseAuth,
    SupabaseStorage,
    ComplianceChecker,
    SupabasePostgres,
    LearningManagement,
    CommunicationService,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStep {
    UserAuthentication,
    FileUpload,
    ComplianceAnalysis,
    DataPersistence,
    ProgressTracking,
    UserNotification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Success,
}

/// Action-specific fields, flattened next to the common ones.
///
/// `Authentication` carries nothing and must stay last: untagged matching
/// tries variants in order and an empty struct variant accepts any map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlowDetails {
    DocumentUpload {
        document_name: String,
        file_size: i64,
        file_type: String,
    },
    ComplianceScan {
        document_id: String,
        scan_type: String,
        issues_found: usize,
    },
    DatabaseOperation {
        operation: String,
        table: String,
        record_count: i64,
    },
    TrainingProgress {
        module_name: String,
        progress_percentage: i32,
    },
    Notification {
        notification_type: String,
        message: String,
        channel: String,
    },
    Authentication {},
}

/// One simulated action and its fabricated metrics. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRecord {
    pub timestamp: String,
    pub user_id: String,
    pub action: String,
    pub component: Component,
    pub subsystem: Subsystem,
    pub status: RecordStatus,
    pub flow_step: FlowStep,
    pub duration_ms: u64,
    pub data_flow: Vec<String>,
    #[serde(flatten)]
    pub details: FlowDetails,
}

impl FlowRecord {
    pub(crate) fn new(kind: FlowKind, timestamp: String, user_id: &str, details: FlowDetails) -> Self {
        Self {
            timestamp,
            user_id: user_id.to_string(),
            action: kind.action().unwrap_or_default().to_string(),
            component: kind.component(),
            subsystem: kind.subsystem(),
            status: RecordStatus::Success,
            flow_step: kind.flow_step(),
            duration_ms: kind.duration_ms(),
            data_flow: kind.data_flow().iter().map(|s| s.to_string()).collect(),
            details,
        }
    }

    /// Overrides the action tag. Only authentication records take a caller-named action.
    pub(crate) fn with_action(mut self, action: &str) -> Self {
        self.action = action.to_string();
        self
    }

    /// `issues_found` for scan records, `None` otherwise.
    pub fn issues_found(&self) -> Option<usize> {
        match &self.details {
            FlowDetails::ComplianceScan { issues_found, .. } => Some(*issues_found),
            _ => None,
        }
    }
}
