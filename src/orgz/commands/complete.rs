use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;
use crate::store::RecordStore;

/// Mark a task as done, confirming by title.
pub fn run<S: RecordStore>(store: &mut S, id: u32) -> Result<CmdResult<Task>> {
    let mut tasks = store.load::<Task>()?;
    let mut result = CmdResult::default();

    let task = match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => task,
        None => {
            result.add_message(CmdMessage::warning(format!("Task #{} not found", id)));
            return Ok(result);
        }
    };

    task.done = true;
    let done = task.clone();
    store.save(&tasks)?;

    result.add_message(CmdMessage::success(format!(
        "Task \"{}\" marked as done",
        done.title
    )));
    result.records.push(done);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::RecordStore;

    #[test]
    fn marks_the_task_done() {
        let mut fixture = StoreFixture::new().with_task(1, "Buy milk", false);
        let result = run(&mut fixture.store, 1).unwrap();

        assert!(result.messages[0].content.contains("Buy milk"));
        let tasks: Vec<Task> = fixture.store.load().unwrap();
        assert!(tasks[0].done);
    }

    #[test]
    fn marking_done_twice_is_harmless() {
        let mut fixture = StoreFixture::new().with_task(1, "t", true);
        let result = run(&mut fixture.store, 1).unwrap();

        assert!(result.has_level(MessageLevel::Success));
        let tasks: Vec<Task> = fixture.store.load().unwrap();
        assert!(tasks[0].done);
    }

    #[test]
    fn missing_task_reports_not_found() {
        let mut fixture = StoreFixture::new().with_task(1, "t", false);
        let result = run(&mut fixture.store, 4).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
    }
}
