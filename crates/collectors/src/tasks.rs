//! Task outcome collection.
//!
//! A pure transform from the orchestrator's task execution records to wire
//! [`TaskResult`]s. No filtering and no failure modes; absent fields arrive
//! as empty strings and leave the same way.

use payload::{TaskRecord, TaskResult};

/// Maps every task record of a job to its wire representation.
pub fn collect_task_results(records: &[TaskRecord]) -> Vec<TaskResult> {
    records
        .iter()
        .map(|record| TaskResult {
            description: record.description.clone(),
            plugin_key: record.plugin_key.clone(),
            is_enabled: record.enabled,
            is_final: record.final_task,
            state: record.state.clone(),
        })
        .collect()
}
