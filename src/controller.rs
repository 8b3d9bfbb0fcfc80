//! Async flows behind the UI
//!
//! Runs the network side of each [`Task`] and reports the outcome as an
//! [`AppEvent`]. Flows never touch `App`; the event loop applies results.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::api::MealDbClient;
use crate::app::{AppEvent, Task};
use crate::video::VideoResolver;

/// Recipe and video services used by the flows
#[derive(Debug, Clone)]
pub struct Controller {
    recipes: MealDbClient,
    video: VideoResolver,
}

impl Controller {
    pub fn new(recipes: MealDbClient, video: VideoResolver) -> Self {
        Self { recipes, video }
    }

    /// Ingredient search
    pub async fn search(&self, generation: u64, term: &str) -> AppEvent {
        let result = self.recipes.search_by_ingredient(term).await;
        AppEvent::SearchFinished { generation, result }
    }

    /// Recipe lookup followed by video resolution.
    ///
    /// Only the lookup can fail; the video step always yields a fragment.
    pub async fn load_detail(&self, generation: u64, recipe_id: &str) -> AppEvent {
        let result = match self.recipes.lookup_by_id(recipe_id).await {
            Ok(detail) => {
                let video = self.video.resolve_for(&detail).await;
                Ok((detail, video))
            }
            Err(e) => Err(e),
        };
        AppEvent::DetailFinished { generation, result }
    }

    /// Run a task to completion
    pub async fn run(&self, task: Task) -> AppEvent {
        match task {
            Task::Search { generation, term } => self.search(generation, &term).await,
            Task::LoadDetail {
                generation,
                recipe_id,
            } => self.load_detail(generation, &recipe_id).await,
        }
    }

    /// Spawn `task` on the runtime; the event is sent when it finishes
    pub fn spawn(&self, task: Task, tx: UnboundedSender<AppEvent>) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            let event = controller.run(task).await;
            if tx.send(event).is_err() {
                tracing::debug!("event loop gone, dropping task result");
            }
        })
    }
}
