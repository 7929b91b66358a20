//! # Domain models for the agency workspace
//!
//! Defines the six entity kinds managed by the store and their typed
//! representations. Every backend traffics in untyped [`Record`](crate::Record)s;
//! the structs here are the typed views that [`crate::Repository`] hands back to
//! callers.
//!
//! ## Entity kinds
//!
//! | Kind | Table | Fallback id prefix | Fallback insert | Remote order |
//! |------|-------|--------------------|-----------------|--------------|
//! | [`Client`] | `clients` | `c` | front | `created_at` desc |
//! | [`Project`] | `projects` | `p` | front | `created_at` desc |
//! | [`Task`] | `tasks` | `t` | back | `created_at` asc |
//! | [`Invoice`] | `invoices` | `i` | front | `created_at` desc |
//! | [`Service`] | `services` | `s` | back | none |
//! | [`TeamMember`] | `team_members` | `m` | back | none |
//!
//! Relationships are plain foreign-key strings (`project.client_id`,
//! `task.project_id`); the fallback store never enforces them.
//!
//! ## Serialisation
//!
//! Empty ids and absent optional fields are skipped when serialising, so a freshly
//! built entity becomes a clean insert payload and the backend assigns `id` and
//! `created_at`. Numeric and boolean columns treat `null` as the schema default.

use serde::{Deserialize, Deserializer, Serialize};

use crate::record::Filter;

/// One of the six collections managed by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Client,
    Project,
    Task,
    Invoice,
    Service,
    TeamMember,
}

/// Sort direction for remote listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Where the fallback store places a newly added record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Client,
        EntityKind::Project,
        EntityKind::Task,
        EntityKind::Invoice,
        EntityKind::Service,
        EntityKind::TeamMember,
    ];

    /// Remote table name.
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Client => "clients",
            EntityKind::Project => "projects",
            EntityKind::Task => "tasks",
            EntityKind::Invoice => "invoices",
            EntityKind::Service => "services",
            EntityKind::TeamMember => "team_members",
        }
    }

    /// Prefix of ids synthesized by the fallback store.
    pub fn id_prefix(self) -> &'static str {
        match self {
            EntityKind::Client => "c",
            EntityKind::Project => "p",
            EntityKind::Task => "t",
            EntityKind::Invoice => "i",
            EntityKind::Service => "s",
            EntityKind::TeamMember => "m",
        }
    }

    /// Ordering by `created_at` requested from the remote backend.
    pub fn remote_order(self) -> Option<Order> {
        match self {
            EntityKind::Client | EntityKind::Project | EntityKind::Invoice => {
                Some(Order::Descending)
            }
            EntityKind::Task => Some(Order::Ascending),
            EntityKind::Service | EntityKind::TeamMember => None,
        }
    }

    pub fn placement(self) -> Placement {
        match self {
            EntityKind::Client | EntityKind::Project | EntityKind::Invoice => Placement::Front,
            EntityKind::Task | EntityKind::Service | EntityKind::TeamMember => Placement::Back,
        }
    }

    /// Local storage key under which the fallback collection is mirrored.
    /// Only invoices survive a reload.
    pub fn local_key(self) -> Option<&'static str> {
        match self {
            EntityKind::Invoice => Some("nexlance_invoices"),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// A typed view over one entity kind.
pub trait Entity: Serialize + for<'de> Deserialize<'de> {
    const KIND: EntityKind;
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_maintenance_plan() -> String {
    "None".to_string()
}

fn default_plan_type() -> String {
    "Basic".to_string()
}

fn default_project_status() -> String {
    "Planning".to_string()
}

fn default_task_status() -> String {
    "todo".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}

fn default_gst_percent() -> f64 {
    18.0
}

fn default_invoice_status() -> String {
    "pending".to_string()
}

fn default_icon() -> String {
    "🌐".to_string()
}

fn default_role() -> String {
    "Developer".to_string()
}

/// An agency client and their hosting/contract details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_expiry: Option<String>,
    #[serde(default = "default_maintenance_plan")]
    pub maintenance_plan: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_contract_value: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub paid_amount: f64,
    #[serde(default = "default_plan_type")]
    pub plan_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            email: None,
            phone: None,
            company: None,
            domain_name: None,
            hosting_provider: None,
            project_type: None,
            platform: None,
            hosting_expiry: None,
            ssl_expiry: None,
            maintenance_plan: default_maintenance_plan(),
            total_contract_value: 0.0,
            paid_amount: 0.0,
            plan_type: default_plan_type(),
            created_at: None,
        }
    }

    /// Contract value not yet paid.
    pub fn balance_due(&self) -> f64 {
        self.total_contract_value - self.paid_amount
    }
}

impl Entity for Client {
    const KIND: EntityKind = EntityKind::Client;
}

/// A client engagement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default = "default_project_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_of_work: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliverables: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_team: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            client_id: None,
            client_name: None,
            start_date: None,
            deadline: None,
            status: default_project_status(),
            scope_of_work: None,
            deliverables: None,
            assigned_team: None,
            progress: 0,
            created_at: None,
        }
    }
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;
}

/// A unit of work inside a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_task_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Task {
    pub fn new(project_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            project_id: Some(project_id.into()),
            title: title.into(),
            description: None,
            status: default_task_status(),
            assignee: None,
            priority: default_priority(),
            due_date: None,
            created_at: None,
        }
    }
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;
}

/// A bill issued to a client, GST inclusive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default = "default_gst_percent")]
    pub gst_percent: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,
    #[serde(default = "default_invoice_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Invoice {
    /// Build an invoice for `amount` with the default 18% GST applied.
    pub fn new(amount: f64) -> Self {
        let gst_percent = default_gst_percent();
        Self {
            id: String::new(),
            invoice_number: None,
            client_id: None,
            client_name: None,
            project_id: None,
            project_name: None,
            amount,
            gst_percent,
            total_amount: Self::gst_total(amount, gst_percent),
            payment_link: None,
            due_date: None,
            paid_date: None,
            status: default_invoice_status(),
            notes: None,
            created_at: None,
        }
    }

    /// `amount` plus GST, rounded to paise.
    pub fn gst_total(amount: f64, gst_percent: f64) -> f64 {
        (amount * (100.0 + gst_percent)).round() / 100.0
    }
}

impl Entity for Invoice {
    const KIND: EntityKind = EntityKind::Invoice;
}

/// A service in the agency catalogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pricing: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_clients: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue_generated: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_delivery_days: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Service {
    pub fn new(name: impl Into<String>, pricing: f64) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            icon: default_icon(),
            pricing,
            active_clients: 0,
            revenue_generated: 0.0,
            avg_delivery_days: 0,
            description: None,
            created_at: None,
        }
    }
}

impl Entity for Service {
    const KIND: EntityKind = EntityKind::Service;
}

/// A team member and their permission flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub can_edit_tasks: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub can_see_revenue: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub can_create_invoices: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub can_upload_files: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            email: email.into(),
            role: default_role(),
            can_edit_tasks: false,
            can_see_revenue: false,
            can_create_invoices: false,
            can_upload_files: false,
            created_at: None,
        }
    }
}

impl Entity for TeamMember {
    const KIND: EntityKind = EntityKind::TeamMember;
}

/// A line in the activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub description: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Filter selecting the projects of one client.
pub fn client_filter(client_id: &str) -> Filter {
    Filter::eq("client_id", client_id)
}

/// Filter selecting the tasks of one project.
pub fn project_filter(project_id: &str) -> Filter {
    Filter::eq("project_id", project_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_gst_total() {
        assert_eq!(Invoice::gst_total(25000.0, 18.0), 29500.0);
        assert_eq!(Invoice::gst_total(999.99, 18.0), 1179.99);
        assert_eq!(Invoice::new(5000.0).total_amount, 5900.0);
    }

    #[test]
    fn test_new_entity_serializes_without_id() {
        let record = Record::from_entity(&Client::new("Rahul Sharma")).unwrap();
        assert!(!record.contains("id"));
        assert!(!record.contains("created_at"));
        assert!(!record.contains("email"));
        assert_eq!(record.get_str("plan_type"), Some("Basic"));
    }

    #[test]
    fn test_null_numbers_use_defaults() {
        let record: Record = serde_json::from_str(
            r#"{"id":"x","name":"Hosting","pricing":null,"active_clients":null}"#,
        )
        .unwrap();
        let service: Service = record.to_entity().unwrap();
        assert_eq!(service.pricing, 0.0);
        assert_eq!(service.active_clients, 0);
        assert_eq!(service.icon, "🌐");
    }

    #[test]
    fn test_balance_due() {
        let mut client = Client::new("Sunita Patel");
        client.total_contract_value = 65000.0;
        client.paid_amount = 40000.0;
        assert_eq!(client.balance_due(), 25000.0);
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(EntityKind::TeamMember.table(), "team_members");
        assert_eq!(EntityKind::Invoice.local_key(), Some("nexlance_invoices"));
        assert!(EntityKind::ALL
            .iter()
            .filter(|k| **k != EntityKind::Invoice)
            .all(|k| k.local_key().is_none()));
        assert_eq!(EntityKind::Task.remote_order(), Some(Order::Ascending));
        assert_eq!(EntityKind::Service.placement(), Placement::Back);
    }
}
