//! # Menu Layer
//!
//! The interactive surface of the organizer: an explicit finite-state
//! machine over [`MenuState`] instead of nested blocking input loops.
//! Each [`Menu::step`] renders the current menu, reads one validated
//! selection and runs the chosen operation; the machine only advances on
//! valid input and only terminates through the Exit transition.
//!
//! All I/O goes through the injected [`console::Console`] boundary, so
//! the whole surface is driven headlessly in tests with a scripted
//! console. Operation failures (bad ids, malformed CSV, filesystem
//! errors) are reported through leveled messages and never end the
//! session; only exhausted input does.

pub mod console;

use crate::calc;
use crate::commands::{
    complete, create, delete, export, filter, import, list, report, search, update, view,
    CmdMessage,
};
use crate::commands::filter::FinanceFilter;
use crate::commands::search::ContactQuery;
use crate::dates::{self, DATE_FORMAT};
use crate::error::Result;
use crate::model::{Contact, FinanceRecord, Note, Priority, Record, Task};
use crate::store::RecordStore;
use chrono::NaiveDate;
use console::Console;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Notes,
    Tasks,
    Contacts,
    Finance,
    Calculator,
    Exit,
}

pub struct Menu<S: RecordStore, C: Console> {
    store: S,
    console: C,
    export_dir: PathBuf,
    state: MenuState,
}

impl<S: RecordStore, C: Console> Menu<S, C> {
    pub fn new(store: S, console: C, export_dir: PathBuf) -> Self {
        Self {
            store,
            console,
            export_dir,
            state: MenuState::Main,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn into_parts(self) -> (S, C) {
        (self.store, self.console)
    }

    /// Drive the machine until the Exit transition.
    pub fn run(&mut self) -> Result<()> {
        self.console.say("Welcome to orgz, your personal organizer.");
        while self.state != MenuState::Exit {
            self.step()?;
        }
        self.console.say("Bye.");
        Ok(())
    }

    /// One state transition. Public so tests can single-step the machine.
    pub fn step(&mut self) -> Result<()> {
        self.state = match self.state {
            MenuState::Main => self.main_menu()?,
            MenuState::Notes => self.notes_menu()?,
            MenuState::Tasks => self.tasks_menu()?,
            MenuState::Contacts => self.contacts_menu()?,
            MenuState::Finance => self.finance_menu()?,
            MenuState::Calculator => self.calculator_menu()?,
            MenuState::Exit => MenuState::Exit,
        };
        Ok(())
    }

    // --- Section menus ---

    fn main_menu(&mut self) -> Result<MenuState> {
        let choice = self.select(
            "Main menu",
            &[
                "Notes",
                "Tasks",
                "Contacts",
                "Finance",
                "Calculator",
                "Exit",
            ],
        )?;
        Ok(match choice {
            1 => MenuState::Notes,
            2 => MenuState::Tasks,
            3 => MenuState::Contacts,
            4 => MenuState::Finance,
            5 => MenuState::Calculator,
            _ => MenuState::Exit,
        })
    }

    fn notes_menu(&mut self) -> Result<MenuState> {
        let choice = self.select(
            "Notes",
            &[
                "Add a note",
                "List notes",
                "View note details",
                "Edit a note",
                "Delete a note",
                "Import notes from CSV",
                "Export notes to CSV",
                "Back to main menu",
            ],
        )?;
        match choice {
            1 => self.add_note()?,
            2 => self.list_notes()?,
            3 => self.view_note()?,
            4 => self.edit_note()?,
            5 => self.delete_record::<Note>()?,
            6 => self.import_csv::<Note>()?,
            7 => self.export_csv::<Note>()?,
            _ => return Ok(MenuState::Main),
        }
        Ok(MenuState::Notes)
    }

    fn tasks_menu(&mut self) -> Result<MenuState> {
        let choice = self.select(
            "Tasks",
            &[
                "Add a task",
                "List tasks",
                "Mark a task as done",
                "Edit a task",
                "Delete a task",
                "Import tasks from CSV",
                "Export tasks to CSV",
                "Back to main menu",
            ],
        )?;
        match choice {
            1 => self.add_task()?,
            2 => self.list_tasks()?,
            3 => self.mark_task_done()?,
            4 => self.edit_task()?,
            5 => self.delete_record::<Task>()?,
            6 => self.import_csv::<Task>()?,
            7 => self.export_csv::<Task>()?,
            _ => return Ok(MenuState::Main),
        }
        Ok(MenuState::Tasks)
    }

    fn contacts_menu(&mut self) -> Result<MenuState> {
        let choice = self.select(
            "Contacts",
            &[
                "Add a contact",
                "List contacts",
                "Search contacts (by name or phone)",
                "Edit a contact",
                "Delete a contact",
                "Import contacts from CSV",
                "Export contacts to CSV",
                "Back to main menu",
            ],
        )?;
        match choice {
            1 => self.add_contact()?,
            2 => self.list_contacts()?,
            3 => self.search_contacts()?,
            4 => self.edit_contact()?,
            5 => self.delete_record::<Contact>()?,
            6 => self.import_csv::<Contact>()?,
            7 => self.export_csv::<Contact>()?,
            _ => return Ok(MenuState::Main),
        }
        Ok(MenuState::Contacts)
    }

    fn finance_menu(&mut self) -> Result<MenuState> {
        let choice = self.select(
            "Finance",
            &[
                "Add a record (income or expense)",
                "List records (filter by date or category)",
                "Report for a period",
                "Delete a record",
                "Import records from CSV",
                "Export records to CSV",
                "Back to main menu",
            ],
        )?;
        match choice {
            1 => self.add_finance_record()?,
            2 => self.list_finance_records()?,
            3 => self.finance_report()?,
            4 => self.delete_record::<FinanceRecord>()?,
            5 => self.import_csv::<FinanceRecord>()?,
            6 => self.export_csv::<FinanceRecord>()?,
            _ => return Ok(MenuState::Main),
        }
        Ok(MenuState::Finance)
    }

    fn calculator_menu(&mut self) -> Result<MenuState> {
        let choice = self.select("Calculator", &["Evaluate an expression", "Back to main menu"])?;
        if choice == 2 {
            return Ok(MenuState::Main);
        }

        let expr = self.console.prompt("Enter an expression >> ")?;
        match calc::eval(&expr) {
            Ok(value) => self.console.say(&format!("Result: {}", value)),
            Err(err) => self.console.report(&CmdMessage::error(err.to_string())),
        }
        Ok(MenuState::Calculator)
    }

    // --- Notes ---

    fn add_note(&mut self) -> Result<()> {
        let title = self.read_line("Enter title")?;
        let content = self.read_line("Enter content")?;
        let outcome = create::run(&mut self.store, Note::new(title, content));
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    fn list_notes(&mut self) -> Result<()> {
        let outcome = list::run::<S, Note>(&self.store);
        let result = match self.guard(outcome) {
            Some(result) => result,
            None => return Ok(()),
        };
        if result.records.is_empty() {
            self.console.say("No notes found.");
            return Ok(());
        }
        self.console.say("All notes:");
        for note in &result.records {
            self.console.say(&format!(
                "{}. {} ({})",
                note.id, note.title, note.timestamp
            ));
        }
        Ok(())
    }

    fn view_note(&mut self) -> Result<()> {
        let id = match self.read_id(Note::COLLECTION.singular())? {
            Some(id) => id,
            None => return Ok(()),
        };
        let outcome = view::run::<S, Note>(&self.store, id);
        match self.guard(outcome) {
            Some(Some(note)) => {
                self.console.say(&format!("Title: {}", note.title));
                self.console.say(&format!("Content: {}", note.content));
                self.console.say(&format!("Date: {}", note.timestamp));
            }
            Some(None) => self
                .console
                .report(&CmdMessage::warning(format!("Note #{} not found", id))),
            None => {}
        }
        Ok(())
    }

    fn edit_note(&mut self) -> Result<()> {
        let id = match self.read_id(Note::COLLECTION.singular())? {
            Some(id) => id,
            None => return Ok(()),
        };
        let existing = self.guard(view::run::<S, Note>(&self.store, id));
        match existing {
            Some(Some(_)) => {}
            Some(None) => {
                self.console
                    .report(&CmdMessage::warning(format!("Note #{} not found", id)));
                return Ok(());
            }
            None => return Ok(()),
        }

        let title = self.read_line("Enter new title")?;
        let content = self.read_line("Enter new content")?;
        let outcome = update::run(&mut self.store, id, |note: &mut Note| {
            note.title = title;
            note.content = content;
            note.timestamp = dates::now_stamp();
        });
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    // --- Tasks ---

    fn add_task(&mut self) -> Result<()> {
        let title = self.read_line("Enter task title")?;
        let description = self.read_line("Enter task description")?;
        let priority = self.read_priority()?;
        let due_date = self.read_optional_date("Enter due date")?;
        let task = Task::new(
            title,
            description,
            priority,
            due_date.map(|d| d.format(DATE_FORMAT).to_string()),
        );
        let outcome = create::run(&mut self.store, task);
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    fn list_tasks(&mut self) -> Result<()> {
        let outcome = list::run::<S, Task>(&self.store);
        let result = match self.guard(outcome) {
            Some(result) => result,
            None => return Ok(()),
        };
        if result.records.is_empty() {
            self.console.say("No tasks found.");
            return Ok(());
        }
        self.console.say("All tasks:");
        for task in &result.records {
            let due = task.due_date.as_deref().unwrap_or("-");
            let done = if task.done { "yes" } else { "no" };
            let mut line = format!(
                "{}. {} (priority: {}, due: {}, done: {})",
                task.id, task.title, task.priority, due, done
            );
            if !task.description.is_empty() {
                line.push_str(&format!(" - {}", task.description));
            }
            self.console.say(&line);
        }
        Ok(())
    }

    fn mark_task_done(&mut self) -> Result<()> {
        let id = match self.read_id(Task::COLLECTION.singular())? {
            Some(id) => id,
            None => return Ok(()),
        };
        let outcome = complete::run(&mut self.store, id);
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    fn edit_task(&mut self) -> Result<()> {
        let id = match self.read_id(Task::COLLECTION.singular())? {
            Some(id) => id,
            None => return Ok(()),
        };
        let existing = self.guard(view::run::<S, Task>(&self.store, id));
        match existing {
            Some(Some(_)) => {}
            Some(None) => {
                self.console
                    .report(&CmdMessage::warning(format!("Task #{} not found", id)));
                return Ok(());
            }
            None => return Ok(()),
        }

        let title = self.read_line("Enter new task title")?;
        let description = self.read_line("Enter new task description")?;
        let priority = self.read_priority()?;
        let due_date = self.read_optional_date("Enter new due date")?;
        let outcome = update::run(&mut self.store, id, |task: &mut Task| {
            task.title = title;
            task.description = description;
            task.priority = priority;
            task.due_date = due_date.map(|d| d.format(DATE_FORMAT).to_string());
        });
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    // --- Contacts ---

    fn add_contact(&mut self) -> Result<()> {
        let name = self.read_line("Enter name")?;
        let phone = self.read_line("Enter phone")?;
        let email = self.read_line("Enter email")?;
        let outcome = create::run(&mut self.store, Contact::new(name, phone, email));
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    fn list_contacts(&mut self) -> Result<()> {
        let outcome = list::run::<S, Contact>(&self.store);
        let result = match self.guard(outcome) {
            Some(result) => result,
            None => return Ok(()),
        };
        if result.records.is_empty() {
            self.console.say("No contacts found.");
            return Ok(());
        }
        self.console.say("All contacts:");
        for contact in &result.records {
            self.console.say(&format!(
                "{}. {} (phone: {}, email: {})",
                contact.id, contact.name, contact.phone, contact.email
            ));
        }
        Ok(())
    }

    fn search_contacts(&mut self) -> Result<()> {
        let raw = self.read_line("Search by (name/phone)")?;
        let query = match raw.to_lowercase().as_str() {
            "name" => ContactQuery::Name(self.read_line("Enter name")?),
            "phone" => ContactQuery::Phone(self.read_line("Enter phone")?),
            other => {
                self.console.report(&CmdMessage::error(format!(
                    "Unknown search field: {} (expected name or phone)",
                    other
                )));
                return Ok(());
            }
        };
        let outcome = search::run(&self.store, &query);
        let result = match self.guard(outcome) {
            Some(result) => result,
            None => return Ok(()),
        };
        for contact in &result.records {
            self.console.say(&format!(
                "{}. {} (phone: {}, email: {})",
                contact.id, contact.name, contact.phone, contact.email
            ));
        }
        self.report_all(&result.messages);
        Ok(())
    }

    fn edit_contact(&mut self) -> Result<()> {
        let id = match self.read_id(Contact::COLLECTION.singular())? {
            Some(id) => id,
            None => return Ok(()),
        };
        let existing = self.guard(view::run::<S, Contact>(&self.store, id));
        match existing {
            Some(Some(_)) => {}
            Some(None) => {
                self.console
                    .report(&CmdMessage::warning(format!("Contact #{} not found", id)));
                return Ok(());
            }
            None => return Ok(()),
        }

        let name = self.read_line("Enter new name")?;
        let phone = self.read_line("Enter new phone")?;
        let email = self.read_line("Enter new email")?;
        let outcome = update::run(&mut self.store, id, |contact: &mut Contact| {
            contact.name = name;
            contact.phone = phone;
            contact.email = email;
        });
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    // --- Finance ---

    fn add_finance_record(&mut self) -> Result<()> {
        let income = loop {
            let raw = self.read_line("Operation type (income/expense)")?;
            match raw.to_lowercase().as_str() {
                "income" => break true,
                "expense" => break false,
                other => self.console.report(&CmdMessage::error(format!(
                    "Unknown operation type: {} (expected income or expense)",
                    other
                ))),
            }
        };

        let raw_amount = self.read_line("Enter amount")?;
        let amount = match raw_amount.parse::<f64>() {
            Ok(amount) => amount.abs(),
            Err(_) => {
                self.console
                    .report(&CmdMessage::error(format!("Invalid amount: {}", raw_amount)));
                return Ok(());
            }
        };
        // The sign encodes the operation kind.
        let amount = if income { amount } else { -amount };

        let category = self.read_line("Enter category")?;
        let description = self.read_line("Enter description")?;
        let date = self.read_date("Enter operation date")?;
        let record = FinanceRecord::new(
            amount,
            category,
            description,
            date.format(DATE_FORMAT).to_string(),
        );
        let outcome = create::run(&mut self.store, record);
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    fn list_finance_records(&mut self) -> Result<()> {
        let raw = self.read_line("Filter by (date/category/none)")?;
        let filter = match raw.to_lowercase().as_str() {
            "date" => {
                let date = self.read_date("Enter date")?;
                FinanceFilter::Date(date.format(DATE_FORMAT).to_string())
            }
            "category" => FinanceFilter::Category(self.read_line("Enter category")?),
            "none" => FinanceFilter::All,
            other => {
                self.console.report(&CmdMessage::error(format!(
                    "Unknown filter: {} (expected date, category or none)",
                    other
                )));
                return Ok(());
            }
        };
        let outcome = filter::run(&self.store, &filter);
        let result = match self.guard(outcome) {
            Some(result) => result,
            None => return Ok(()),
        };
        if result.records.is_empty() {
            self.console.say("No finance records found.");
            return Ok(());
        }
        self.console.say("Finance records:");
        for record in &result.records {
            self.console.say(&format!(
                "{}. amount: {}, date: {}, category: {}, description: {}",
                record.id, record.amount, record.date, record.category, record.description
            ));
        }
        Ok(())
    }

    fn finance_report(&mut self) -> Result<()> {
        let from = self.read_date("Enter start date")?;
        let to = self.read_date("Enter end date")?;
        let outcome = report::run(&self.store, from, to, &self.export_dir);
        let outcome = match self.guard(outcome) {
            Some(outcome) => outcome,
            None => return Ok(()),
        };

        self.console.say(&format!(
            "Finance report for {} to {}:",
            from.format(DATE_FORMAT),
            to.format(DATE_FORMAT)
        ));
        if outcome.records.is_empty() {
            self.console.say("No finance records in this period.");
        }
        self.console.say(&format!("Income: {}", outcome.income));
        self.console.say(&format!("Expense: {}", outcome.expense));
        self.console.say(&format!("Balance: {}", outcome.balance));
        self.console.report(&CmdMessage::success(format!(
            "Report saved to {}",
            outcome.report_path.display()
        )));
        Ok(())
    }

    // --- Shared operations ---

    fn delete_record<R: Record>(&mut self) -> Result<()> {
        let id = match self.read_id(R::COLLECTION.singular())? {
            Some(id) => id,
            None => return Ok(()),
        };
        let outcome = delete::run::<S, R>(&mut self.store, id);
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    fn import_csv<R: Record>(&mut self) -> Result<()> {
        let path = self.read_line(&format!(
            "Enter CSV file to import {} from",
            R::COLLECTION.plural()
        ))?;
        if path.is_empty() {
            self.console
                .report(&CmdMessage::error("No file name given"));
            return Ok(());
        }
        let outcome = import::run::<S, R>(&mut self.store, Path::new(&path));
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    fn export_csv<R: Record>(&mut self) -> Result<()> {
        let outcome = export::run::<S, R>(&self.store, &self.export_dir);
        if let Some(result) = self.guard(outcome) {
            self.report_all(&result.messages);
        }
        Ok(())
    }

    // --- Prompt helpers ---

    /// Print the numbered options and read a selection, re-prompting until
    /// the input is an integer within range.
    fn select(&mut self, title: &str, options: &[&str]) -> Result<usize> {
        self.console.say(&format!("\n{}:", title));
        for (i, option) in options.iter().enumerate() {
            self.console.say(&format!("{}. {}", i + 1, option));
        }
        loop {
            let raw = self.console.prompt(">> ")?;
            match raw.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n),
                _ => self.console.report(&CmdMessage::error(format!(
                    "Enter a number between 1 and {}",
                    options.len()
                ))),
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.console.prompt(&format!("{} >> ", prompt))
    }

    /// Single-shot id entry; invalid input reports and ends the attempt.
    fn read_id(&mut self, label: &str) -> Result<Option<u32>> {
        let raw = self.read_line(&format!("Enter {} id", label))?;
        match raw.parse::<u32>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.console
                    .report(&CmdMessage::error(format!("Invalid id: {}", raw)));
                Ok(None)
            }
        }
    }

    /// Re-prompt until a valid DD-MM-YYYY date is entered.
    fn read_date(&mut self, prompt: &str) -> Result<NaiveDate> {
        loop {
            let raw = self.read_line(&format!("{} (DD-MM-YYYY)", prompt))?;
            match dates::parse(&raw) {
                Ok(date) => return Ok(date),
                Err(err) => self.console.report(&CmdMessage::error(err.to_string())),
            }
        }
    }

    /// Like [`Self::read_date`], but an empty line means "no date".
    fn read_optional_date(&mut self, prompt: &str) -> Result<Option<NaiveDate>> {
        loop {
            let raw = self.read_line(&format!("{} (DD-MM-YYYY, empty for none)", prompt))?;
            if raw.is_empty() {
                return Ok(None);
            }
            match dates::parse(&raw) {
                Ok(date) => return Ok(Some(date)),
                Err(err) => self.console.report(&CmdMessage::error(err.to_string())),
            }
        }
    }

    /// Re-prompt until one of High/Medium/Low is entered.
    fn read_priority(&mut self) -> Result<Priority> {
        loop {
            let raw = self.read_line("Enter priority (High/Medium/Low)")?;
            match raw.parse::<Priority>() {
                Ok(priority) => return Ok(priority),
                Err(err) => self.console.report(&CmdMessage::error(err.to_string())),
            }
        }
    }

    /// Report a failed operation and keep the menu loop alive.
    fn guard<T>(&mut self, outcome: Result<T>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(err) => {
                self.console.report(&CmdMessage::error(err.to_string()));
                None
            }
        }
    }

    fn report_all(&mut self, messages: &[CmdMessage]) {
        for message in messages {
            self.console.report(message);
        }
    }
}
