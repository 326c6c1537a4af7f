// Google Tasks API endpoint functions.
// Provides typed methods for the Tasks v1 REST API, paginated where the API pages.

use crate::error::Result;

use super::client::TasksClient;
use super::pagination::{Page, PageSource, list_all};
use super::types::{NewTask, Task, TaskList};

/// Query parameters for a paged list request.
fn page_params(page_token: Option<&str>, max_results: Option<usize>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(token) = page_token {
        params.push(("pageToken", token.to_string()));
    }
    if let Some(n) = max_results {
        params.push(("maxResults", n.to_string()));
    }
    params
}

/// Page source over the user's task lists.
struct TasklistPages<'a>(&'a TasksClient);

impl PageSource<TaskList> for TasklistPages<'_> {
    async fn fetch_page(
        &self,
        page_token: Option<&str>,
        max_results: Option<usize>,
    ) -> Result<Page<TaskList>> {
        let params = page_params(page_token, max_results);
        let response = self.0.get_with_params("/users/@me/lists", &params).await?;
        let page: Page<TaskList> = response.json().await?;
        Ok(page)
    }
}

/// Page source over the tasks of one task list.
struct TaskPages<'a> {
    client: &'a TasksClient,
    tasklist_id: &'a str,
}

impl PageSource<Task> for TaskPages<'_> {
    async fn fetch_page(
        &self,
        page_token: Option<&str>,
        max_results: Option<usize>,
    ) -> Result<Page<Task>> {
        let params = page_params(page_token, max_results);
        let endpoint = format!("/lists/{}/tasks", self.tasklist_id);
        let response = self.client.get_with_params(&endpoint, &params).await?;
        let page: Page<Task> = response.json().await?;
        Ok(page)
    }
}

impl TasksClient {
    /// Get all task lists for the authenticated user, following pagination.
    pub async fn list_tasklists(&self, max_results: Option<usize>) -> Result<Vec<TaskList>> {
        list_all(&TasklistPages(self), max_results).await
    }

    /// Get tasks from a task list, following pagination.
    pub async fn list_tasks(
        &self,
        tasklist_id: &str,
        max_results: Option<usize>,
    ) -> Result<Vec<Task>> {
        let source = TaskPages {
            client: self,
            tasklist_id,
        };
        list_all(&source, max_results).await
    }

    /// Create a task in a task list.
    pub async fn insert_task(&self, tasklist_id: &str, task: &NewTask) -> Result<Task> {
        let endpoint = format!("/lists/{}/tasks", tasklist_id);
        let response = self.post_json(&endpoint, task).await?;
        let created: Task = response.json().await?;
        Ok(created)
    }

    /// Delete a task from a task list.
    pub async fn delete_task(&self, tasklist_id: &str, task_id: &str) -> Result<()> {
        let endpoint = format!("/lists/{}/tasks/{}", tasklist_id, task_id);
        self.delete(&endpoint).await?;
        Ok(())
    }
}
