/// Publishing state shown by the main window.
///
/// Plugin discovery and processing live elsewhere; the window only needs
/// a fresh controller and a way to return it to its initial state.
#[derive(Debug, Default)]
pub struct Controller {
    context: Vec<String>,
    results: Vec<String>,
    generation: u32,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears collected context and results.
    pub fn reset(&mut self) {
        self.context.clear();
        self.results.clear();
        self.generation += 1;
    }

    pub fn context(&self) -> &[String] {
        &self.context
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Number of resets since construction.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}
