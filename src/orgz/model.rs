use crate::dates;
use crate::error::OrgzError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four record sets the organizer manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Notes,
    Tasks,
    Contacts,
    Finance,
}

impl Collection {
    /// Name of the JSON backing file inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Notes => "notes.json",
            Collection::Tasks => "tasks.json",
            Collection::Contacts => "contacts.json",
            Collection::Finance => "finance.json",
        }
    }

    /// Name of the CSV file a full export is written to.
    pub fn export_file_name(self) -> &'static str {
        match self {
            Collection::Notes => "notes_export.csv",
            Collection::Tasks => "tasks_export.csv",
            Collection::Contacts => "contacts_export.csv",
            Collection::Finance => "finance_export.csv",
        }
    }

    /// Capitalized singular label for messages ("Note #3 added").
    pub fn label(self) -> &'static str {
        match self {
            Collection::Notes => "Note",
            Collection::Tasks => "Task",
            Collection::Contacts => "Contact",
            Collection::Finance => "Finance record",
        }
    }

    /// Lowercase singular, used in prompts ("Enter note id").
    pub fn singular(self) -> &'static str {
        match self {
            Collection::Notes => "note",
            Collection::Tasks => "task",
            Collection::Contacts => "contact",
            Collection::Finance => "finance record",
        }
    }

    /// Lowercase plural, used in listings and confirmations.
    pub fn plural(self) -> &'static str {
        match self {
            Collection::Notes => "notes",
            Collection::Tasks => "tasks",
            Collection::Contacts => "contacts",
            Collection::Finance => "finance records",
        }
    }
}

/// A persistable record belonging to one collection.
///
/// The serde derive on each implementor is the single field-list contract
/// shared by the JSON backing store and the CSV bridge: both serialize
/// through it, so their schemas cannot drift apart.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;

    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub content: String,
    /// Creation or last-edit time, refreshed on every update.
    pub timestamp: String,
}

impl Note {
    /// A new note with the current time. The real id is assigned by the
    /// allocator when the note is created in a store.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: 0,
            title,
            content,
            timestamp: dates::now_stamp(),
        }
    }
}

impl Record for Note {
    const COLLECTION: Collection = Collection::Notes;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Priority {
    type Err = OrgzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(OrgzError::InvalidPriority(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// Deadline in DD-MM-YYYY, if one was set.
    pub due_date: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(title: String, description: String, priority: Priority, due_date: Option<String>) -> Self {
        Self {
            id: 0,
            title,
            description,
            priority,
            due_date,
            done: false,
        }
    }
}

impl Record for Task {
    const COLLECTION: Collection = Collection::Tasks;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Self {
            id: 0,
            name,
            phone,
            email,
        }
    }
}

impl Record for Contact {
    const COLLECTION: Collection = Collection::Contacts;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    pub id: u32,
    /// Positive amounts are income, negative amounts are expenses.
    pub amount: f64,
    pub category: String,
    pub description: String,
    /// Operation date in DD-MM-YYYY.
    pub date: String,
}

impl FinanceRecord {
    pub fn new(amount: f64, category: String, description: String, date: String) -> Self {
        Self {
            id: 0,
            amount,
            category,
            description,
            date,
        }
    }
}

impl Record for FinanceRecord {
    const COLLECTION: Collection = Collection::Finance;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
