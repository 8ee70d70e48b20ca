use crate::upstream::GenerationClient;

// app's shared state, read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub generator: GenerationClient,
}
